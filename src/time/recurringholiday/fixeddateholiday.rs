use std::collections::HashSet;

use chrono::NaiveDate;

use super::recurringholiday::RecurringHoliday;

/// A holiday observed on the same month and day every year, with no
/// weekend substitution.
#[derive(Clone)]
pub struct FixedDateHoliday {
    month: u32,
    day: u32
}

impl FixedDateHoliday {
    pub fn new(month: u32, day: u32) -> Option<FixedDateHoliday> {
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            None
        } else {
            Some(FixedDateHoliday { month, day })
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl RecurringHoliday for FixedDateHoliday {
    fn get_holiday(&self, year: i32) -> HashSet<NaiveDate> {
        let mut holiday_set = HashSet::new();

        // Feb 29 simply does not happen on common years
        if let Some(d) = NaiveDate::from_ymd_opt(year, self.month, self.day) {
            holiday_set.insert(d);
        }

        holiday_set
    }
}

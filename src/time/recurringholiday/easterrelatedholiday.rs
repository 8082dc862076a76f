use std::collections::HashSet;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::recurringholiday::RecurringHoliday;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum EasterType {
    Western,
    Orthodox
}

/// A holiday placed a fixed number of days away from Easter Sunday.
#[derive(Clone)]
pub struct EasterRelatedHoliday {
    easter_type: EasterType,
    shift_days: i32
}

impl EasterRelatedHoliday {
    pub fn new(easter_type: EasterType, shift_days: i32) -> Option<EasterRelatedHoliday> {
        // Anything further than a season away from Easter is not Easter related
        if shift_days.abs() > 366 {
            return None;
        }
        Some(EasterRelatedHoliday { easter_type, shift_days })
    }

    pub fn easter_type(&self) -> EasterType {
        self.easter_type
    }

    pub fn shift_days(&self) -> i32 {
        self.shift_days
    }

    /// Easter Sunday on the Gregorian calendar, `None` outside 1583..=4099.
    pub fn easter_sunday(&self, year: i32) -> Option<NaiveDate> {
        // Valid range for Easter calculation
        if !(1583..=4099).contains(&year) {
            return None;
        }

        let g = year % 19;

        let p = match self.easter_type {
            EasterType::Orthodox => {
                let i = (19 * g + 15) % 30;
                let j = (year + year / 4 + i) % 7;
                let e = if year <= 1600 {
                    10
                } else {
                    10 + year / 100 - 16 - (year / 100 - 16) / 4
                };
                i - j + e
            },
            EasterType::Western => {
                let c = year / 100;
                let c_div_4 = c / 4;
                let h = (c - c_div_4 - (8 * c + 13) / 25 + 19 * g + 15) % 30;
                let h_div_28 = h / 28;
                let i = h - h_div_28 * (1 - h_div_28 * (29 / (h + 1)) * ((21 - g) / 11));
                let j = (year + year / 4 + i + 2 - c + c_div_4) % 7;
                i - j
            }
        };

        let day = 1 + (p + 27 + (p + 6) / 40) % 31;
        let month = 3 + (p + 26) / 30;

        NaiveDate::from_ymd_opt(year, u32::try_from(month).ok()?, u32::try_from(day).ok()?)
    }
}

impl RecurringHoliday for EasterRelatedHoliday {
    fn get_holiday(&self, year: i32) -> HashSet<NaiveDate> {
        let mut holiday_set = HashSet::new();

        match self.easter_sunday(year) {
            Some(easter_day) => {
                holiday_set.insert(easter_day + Duration::days(self.shift_days as i64));
            },
            None => {
                warn!(year, easter_type = ?self.easter_type, "easter date unavailable, holiday omitted");
            }
        }

        holiday_set
    }
}

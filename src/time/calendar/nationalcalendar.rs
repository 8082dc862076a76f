use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json;

use crate::manager::manager::Manager;
use crate::manager::managererror::{ManagerError, parse_json_value};
use crate::manager::namedobject::NamedJsonObject;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;
use crate::time::recurringholiday::recurringholidaymanager::get_recurring_holidays_from_json_vec;
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::easterrelatedholiday::{
    EasterType,
    EasterRelatedHoliday
};

pub const ITALY: &str = "IT";

/// Public holidays observed across a whole country.
pub struct NationalCalendar {
    locale: String,
    recurring_holidays: Vec<Arc<dyn RecurringHoliday>>
}

impl NationalCalendar {
    pub fn new(locale: &str, recurring_holidays: Vec<Arc<dyn RecurringHoliday>>) -> NationalCalendar {
        NationalCalendar { locale: locale.to_owned(), recurring_holidays }
    }

    /// Easter Sunday and Monday, New Year, Epiphany, Liberation Day, Labour
    /// Day, Republic Day, Assumption, All Saints, Immaculate Conception,
    /// Christmas and St. Stephen.
    pub fn italy() -> NationalCalendar {
        let mut recurring_holidays: Vec<Arc<dyn RecurringHoliday>> = Vec::new();
        for shift_days in [0, 1] {
            if let Some(holiday) = EasterRelatedHoliday::new(EasterType::Western, shift_days) {
                recurring_holidays.push(Arc::new(holiday));
            }
        }
        let fixed_dates = [
            (1, 1), (1, 6), (4, 25), (5, 1), (6, 2), (8, 15),
            (11, 1), (12, 8), (12, 25), (12, 26)
        ];
        for (month, day) in fixed_dates {
            if let Some(holiday) = FixedDateHoliday::new(month, day) {
                recurring_holidays.push(Arc::new(holiday));
            }
        }
        NationalCalendar::new(ITALY, recurring_holidays)
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn get_holiday_set(&self, year: i32) -> HashSet<NaiveDate> {
        let mut holiday_set = HashSet::with_capacity(self.recurring_holidays.len());
        for r in self.recurring_holidays.iter() {
            holiday_set.extend(r.get_holiday(year));
        }
        holiday_set
    }

    pub fn is_holiday(&self, d: NaiveDate) -> bool {
        self.recurring_holidays.iter().any(|r| r.is_holiday(&d))
    }
}

#[derive(Deserialize)]
struct NationalCalendarJsonProp {
    recurring_holidays: Vec<serde_json::Value>
}

fn national_calendar_from_json(json_value: serde_json::Value) -> Result<(String, Arc<NationalCalendar>), ManagerError> {
    let named_obj: NamedJsonObject = parse_json_value(json_value.clone())?;
    let json_prop: NationalCalendarJsonProp = parse_json_value(json_value)?;
    let recurring_holidays = get_recurring_holidays_from_json_vec(&json_prop.recurring_holidays)?;
    let calendar = NationalCalendar::new(named_obj.name(), recurring_holidays);
    Ok((named_obj.name().to_owned(), Arc::new(calendar)))
}

/// National calendars keyed by locale, seeded with the built-in Italian one.
pub type NationalCalendarManager = Manager<Arc<NationalCalendar>>;

pub fn new_national_calendar_manager() -> NationalCalendarManager {
    let manager = Manager::new(national_calendar_from_json);
    manager.insert(ITALY.to_owned(), Arc::new(NationalCalendar::italy()));
    manager
}

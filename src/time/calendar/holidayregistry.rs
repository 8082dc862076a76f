use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock};

use chrono::NaiveDate;
use tracing::debug;

use crate::manager::manager::IManager;
use super::localholiday::{LocalHolidayManager, load_language_pack};
use super::nationalcalendar::{NationalCalendarManager, new_national_calendar_manager};

/// Answers which dates of a year are public holidays for a locale and city.
pub trait HolidaySource: Send + Sync {
    /// Holidays of `year`, sorted and without duplicates.
    fn get_holidays(&self, year: i32, locale: &str, city: &str) -> Vec<NaiveDate>;
}

/// National calendars plus the per-locale language packs with city holidays.
///
/// Language packs are read lazily, once per locale, from
/// `<language_pack_path><locale>.json` and shared read-only afterwards.
pub struct HolidayRegistry {
    language_pack_path: String,
    national_calendars: NationalCalendarManager,
    local_holidays: RwLock<HashMap<String, Arc<LocalHolidayManager>>>
}

impl HolidayRegistry {
    pub fn new(language_pack_path: &str, national_calendars: NationalCalendarManager) -> HolidayRegistry {
        HolidayRegistry {
            language_pack_path: language_pack_path.to_owned(),
            national_calendars,
            local_holidays: RwLock::new(HashMap::new())
        }
    }

    /// Registry with only the built-in national calendars.
    pub fn with_defaults(language_pack_path: &str) -> HolidayRegistry {
        HolidayRegistry::new(language_pack_path, new_national_calendar_manager())
    }

    pub fn language_pack_path(&self) -> &str {
        &self.language_pack_path
    }

    pub fn national_calendars(&self) -> &NationalCalendarManager {
        &self.national_calendars
    }

    /// Installs local holidays for `locale`, replacing whatever the language
    /// pack would have provided.
    pub fn insert_local_holidays(&self, locale: &str, local_holidays: LocalHolidayManager) {
        self.local_holidays
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(locale.to_owned(), Arc::new(local_holidays));
    }

    pub fn local_holidays(&self, locale: &str) -> Arc<LocalHolidayManager> {
        if let Some(loaded) = self.local_holidays.read().unwrap_or_else(PoisonError::into_inner).get(locale) {
            return loaded.clone();
        }
        let mut local_holidays = self.local_holidays.write().unwrap_or_else(PoisonError::into_inner);
        local_holidays
            .entry(locale.to_owned())
            .or_insert_with(|| Arc::new(load_language_pack(&self.language_pack_file(locale))))
            .clone()
    }

    fn language_pack_file(&self, locale: &str) -> PathBuf {
        PathBuf::from(format!("{}{}.json", self.language_pack_path, locale))
    }
}

impl HolidaySource for HolidayRegistry {
    fn get_holidays(&self, year: i32, locale: &str, city: &str) -> Vec<NaiveDate> {
        let national = match self.national_calendars.get(locale) {
            Ok(national) => national,
            Err(_) => {
                debug!(locale, "no national calendar for locale");
                return Vec::new();
            }
        };

        let mut holidays: BTreeSet<NaiveDate> = national.get_holiday_set(year).into_iter().collect();
        match self.local_holidays(locale).get(city) {
            Ok(local_holiday) => holidays.extend(local_holiday.date_in(year)),
            Err(_) => debug!(locale, city, "no local holiday for city")
        }
        holidays.into_iter().collect()
    }
}

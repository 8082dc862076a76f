use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::bridge::bridgeplanner::BridgePlanner;
use crate::manager::managererror::ManagerError;
use crate::manager::manager::IManager;
use crate::time::calendar::holidayregistry::HolidayRegistry;
use crate::time::calendar::nationalcalendar::{
    ITALY,
    NationalCalendarManager,
    new_national_calendar_manager
};

/// Overrides `language_pack_path` when set.
pub const LANGUAGE_PACK_PATH_ENV: &str = "LANGUAGE_PACK_FILE_PATH";


#[derive(Deserialize, Default)]
struct ConfigurationJsonProp {
    #[serde(default)]
    language_pack_path: Option<String>,
    #[serde(default)]
    locale: Option<String>,
    #[serde(default)]
    national_calendars: Vec<serde_json::Value>
}

pub struct Configuration {
    language_pack_path: String,
    locale: String,
    national_calendar_manager: NationalCalendarManager
}


impl Configuration {
    /// Built-in calendars, locale `IT`, language packs from the working
    /// directory unless the environment says otherwise.
    pub fn new() -> Configuration {
        Configuration {
            language_pack_path: resolve_language_pack_path(None, env::var(LANGUAGE_PACK_PATH_ENV).ok()),
            locale: ITALY.to_owned(),
            national_calendar_manager: new_national_calendar_manager()
        }
    }

    pub fn from_reader(file_path: &Path) -> Result<Configuration, ManagerError> {
        let file = File::open(file_path).map_err(|source| ManagerError::IOError {
            path: file_path.to_path_buf(),
            source
        })?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        Configuration::from_json_prop(json_prop, env::var(LANGUAGE_PACK_PATH_ENV).ok())
    }

    fn from_json_prop(json_prop: ConfigurationJsonProp, env_language_pack_path: Option<String>) -> Result<Configuration, ManagerError> {
        let national_calendar_manager = new_national_calendar_manager();
        national_calendar_manager.insert_obj_from_json_vec(&json_prop.national_calendars)?;
        Ok(Configuration {
            language_pack_path: resolve_language_pack_path(json_prop.language_pack_path, env_language_pack_path),
            locale: json_prop.locale.unwrap_or_else(|| ITALY.to_owned()),
            national_calendar_manager
        })
    }

    pub fn language_pack_path(&self) -> &str {
        &self.language_pack_path
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn national_calendar_manager(&self) -> &NationalCalendarManager {
        &self.national_calendar_manager
    }

    pub fn into_holiday_registry(self) -> HolidayRegistry {
        HolidayRegistry::new(&self.language_pack_path, self.national_calendar_manager)
    }

    pub fn into_bridge_planner(self, today: NaiveDate) -> BridgePlanner {
        let locale = self.locale.clone();
        BridgePlanner::new(Arc::new(self.into_holiday_registry()), &locale, today)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}

fn resolve_language_pack_path(configured: Option<String>, from_env: Option<String>) -> String {
    from_env
        .filter(|path| !path.is_empty())
        .or(configured)
        .unwrap_or_default()
}

use std::path::Path;

use chrono::NaiveDate;
use serde::{
    Serialize,
    Deserialize
};
use serde_json;
use tracing::{debug, warn};

use crate::manager::manager::{IManager, Manager};
use crate::manager::managererror::{ManagerError, parse_json_value};

/// A city's own holiday (usually its patron saint) as listed in a language pack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalHoliday {
    #[serde(default)]
    city: String,
    #[serde(default)]
    name: String,
    /// Month and day, `MM-DD`.
    #[serde(default)]
    date: String,
    #[serde(default)]
    region: String,
    #[serde(default)]
    province: String
}

impl LocalHoliday {
    pub fn new(city: &str, name: &str, date: &str, region: &str, province: &str) -> LocalHoliday {
        LocalHoliday {
            city: city.to_owned(),
            name: name.to_owned(),
            date: date.to_owned(),
            region: region.to_owned(),
            province: province.to_owned()
        }
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn province(&self) -> &str {
        &self.province
    }

    fn month_day(&self) -> Option<(u32, u32)> {
        let (month, day) = self.date.split_once('-')?;
        Some((month.trim().parse().ok()?, day.trim().parse().ok()?))
    }

    /// The holiday's date in `year`, or `None` when the `date` field cannot be
    /// read as a real month and day.
    pub fn date_in(&self, year: i32) -> Option<NaiveDate> {
        let date = self.month_day()
            .and_then(|(month, day)| NaiveDate::from_ymd_opt(year, month, day));
        if date.is_none() {
            warn!(city = %self.city, date = %self.date, year, "unparseable local holiday date, holiday omitted");
        }
        date
    }
}

fn local_holiday_from_json(json_value: serde_json::Value) -> Result<(String, LocalHoliday), ManagerError> {
    let local_holiday: LocalHoliday = parse_json_value(json_value)?;
    if local_holiday.city.is_empty() {
        return Err(ManagerError::json_missing_field("city"));
    }
    Ok((local_holiday.city.clone(), local_holiday))
}

/// Local holidays of one locale, keyed by city. When a city is listed more
/// than once the last record wins.
pub type LocalHolidayManager = Manager<LocalHoliday>;

pub fn new_local_holiday_manager() -> LocalHolidayManager {
    Manager::new(local_holiday_from_json)
}

/// Reads a language pack file. A missing or unreadable file yields an empty
/// manager; malformed records are skipped.
pub fn load_language_pack(file_path: &Path) -> LocalHolidayManager {
    let manager = new_local_holiday_manager();
    match LocalHolidayManager::read_json_vec(file_path) {
        Ok(json_vec) => {
            let skipped = manager.insert_valid_obj_from_json_vec(&json_vec);
            debug!(path = %file_path.display(), cities = manager.len(), skipped, "language pack loaded");
        },
        Err(error) => {
            warn!(path = %file_path.display(), %error, "language pack unavailable, local holidays disabled");
        }
    }
    manager
}


#[cfg(test)]
mod tests {
    use std::io::Write;

    use rstest::rstest;
    use tempfile::NamedTempFile;

    use super::*;

    fn milano(date: &str) -> LocalHoliday {
        LocalHoliday::new("Milano", "Sant'Ambrogio", date, "Lombardia", "MI")
    }

    #[rstest]
    #[case("12-07", Some(NaiveDate::from_ymd_opt(2020, 12, 7).unwrap()))]
    #[case(" 12 - 07 ", Some(NaiveDate::from_ymd_opt(2020, 12, 7).unwrap()))]
    #[case("", None)]
    #[case("12", None)]
    #[case("xx-07", None)]
    #[case("12-yy", None)]
    #[case("02-30", None)]
    fn reads_month_and_day(#[case] date: &str, #[case] expected: Option<NaiveDate>) {
        assert_eq!(milano(date).date_in(2020), expected);
    }

    #[rstest]
    fn loads_pack_and_keeps_last_record_per_city() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"[
            {{"city": "Milano", "name": "first", "date": "01-01", "region": "Lombardia", "province": "MI"}},
            {{"city": "Roma", "name": "Santi Pietro e Paolo", "date": "06-29", "region": "Lazio", "province": "RM"}},
            {{"city": "Milano", "name": "Sant'Ambrogio", "date": "12-07", "region": "Lombardia", "province": "MI"}}
        ]"#).unwrap();

        let manager = load_language_pack(file.path());

        assert_eq!(manager.len(), 2);
        assert_eq!(manager.get("Milano").unwrap().name(), "Sant'Ambrogio");
        assert_eq!(manager.get("Roma").unwrap().province(), "RM");
    }

    #[rstest]
    fn skips_records_without_city_or_with_wrong_types() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"[
            {{"name": "orphan", "date": "01-01"}},
            {{"city": 42, "date": "01-01"}},
            {{"city": "Torino", "name": "San Giovanni", "date": "06-24"}}
        ]"#).unwrap();

        let manager = load_language_pack(file.path());

        assert_eq!(manager.names(), vec!["Torino".to_owned()]);
        assert_eq!(manager.get("Torino").unwrap().region(), "");
    }

    #[rstest]
    #[case("not json at all")]
    #[case("")]
    fn unparseable_pack_is_empty(#[case] content: &str) {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();

        assert!(load_language_pack(file.path()).is_empty());
    }

    #[rstest]
    fn missing_pack_is_empty() {
        assert!(load_language_pack(Path::new("/no/such/dir/IT.json")).is_empty());
    }
}

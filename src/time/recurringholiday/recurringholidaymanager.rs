use std::sync::Arc;

use serde::Deserialize;
use serde::de::Unexpected;
use serde_json;

use crate::manager::managererror::{ManagerError, parse_json_value};
use super::recurringholiday::RecurringHoliday;
use super::fixeddateholiday::FixedDateHoliday;
use super::easterrelatedholiday::{
    EasterType,
    EasterRelatedHoliday
};


#[derive(Deserialize)]
struct EasterRelatedHolidayJsonProp {
    easter_type: EasterType,
    shift_days: i32
}

fn easter_related_holiday_from_json(json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let json_prop: EasterRelatedHolidayJsonProp = parse_json_value(json)?;
    let holiday = EasterRelatedHoliday::new(json_prop.easter_type, json_prop.shift_days)
        .ok_or_else(|| ManagerError::json_invalid_value(
            Unexpected::Signed(json_prop.shift_days as i64),
            &"a shift of at most 366 days"
        ))?;
    Ok(Arc::new(holiday))
}

#[derive(Deserialize)]
struct FixedDateHolidayJsonProp {
    month: u32,
    day: u32
}

fn fixed_date_holiday_from_json(json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let json_prop: FixedDateHolidayJsonProp = parse_json_value(json)?;
    let holiday = FixedDateHoliday::new(json_prop.month, json_prop.day)
        .ok_or_else(|| ManagerError::InvalidHolidayError(
            format!("{:02}-{:02} is not a calendar day", json_prop.month, json_prop.day)
        ))?;
    Ok(Arc::new(holiday))
}

#[derive(Deserialize)]
enum HolidayType {
    EasterRelated,
    FixedDate
}

#[derive(Deserialize)]
struct HolidayTypedObject {
    holiday_type: HolidayType
}

pub fn get_recurring_holiday_from_json(json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let holiday_type_obj: HolidayTypedObject = parse_json_value(json.clone())?;
    match holiday_type_obj.holiday_type {
        HolidayType::EasterRelated => easter_related_holiday_from_json(json),
        HolidayType::FixedDate     => fixed_date_holiday_from_json(json)
    }
}

pub fn get_recurring_holidays_from_json_vec(json_vec: &[serde_json::Value]) -> Result<Vec<Arc<dyn RecurringHoliday>>, ManagerError> {
    json_vec.iter()
        .map(|json| get_recurring_holiday_from_json(json.clone()))
        .collect()
}


#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    fn parses_fixed_date_holiday() {
        let holiday = get_recurring_holiday_from_json(json!({
            "holiday_type": "FixedDate", "month": 6, "day": 2
        })).expect("valid definition");

        assert!(holiday.is_holiday(&NaiveDate::from_ymd_opt(2021, 6, 2).unwrap()));
    }

    #[rstest]
    fn parses_easter_related_holiday() {
        let holiday = get_recurring_holiday_from_json(json!({
            "holiday_type": "EasterRelated", "easter_type": "Western", "shift_days": 1
        })).expect("valid definition");

        assert!(holiday.is_holiday(&NaiveDate::from_ymd_opt(2020, 4, 13).unwrap()));
    }

    #[rstest]
    fn rejects_unknown_holiday_type() {
        let result = get_recurring_holiday_from_json(json!({
            "holiday_type": "LunarNewYear"
        }));

        assert!(matches!(result, Err(ManagerError::JsonParseError(_))));
    }

    #[rstest]
    fn rejects_impossible_fixed_date() {
        let result = get_recurring_holiday_from_json(json!({
            "holiday_type": "FixedDate", "month": 13, "day": 1
        }));

        assert!(matches!(result, Err(ManagerError::InvalidHolidayError(_))));
    }

    #[rstest]
    fn one_bad_definition_fails_the_whole_list() {
        let result = get_recurring_holidays_from_json_vec(&[
            json!({"holiday_type": "FixedDate", "month": 1, "day": 1}),
            json!({"holiday_type": "FixedDate", "month": 1})
        ]);

        assert!(result.is_err());
    }
}

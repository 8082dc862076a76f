use serde::{
    Serialize,
    Deserialize
};

use super::bridgeerror::BridgeError;
use crate::time::calendar::weeklyoffdays::WeeklyOffDays;

pub const DEFAULT_YEARS_SCOPE: u32 = 3;

/// A holiday the user wants to mention alongside the request. Carried
/// through for clients; the bridge computation does not read it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomHoliday {
    pub date: String,
    pub name: String
}

/// What a user asks for: how many leave days they would spend per bridge,
/// where they live and which weekdays they never work.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeRequest {
    /// Leave-day budget per bridge.
    #[serde(default)]
    pub day_of_holidays: u32,
    #[serde(default)]
    pub custom_holidays: Vec<CustomHoliday>,
    #[serde(default)]
    pub city: String,
    /// Weekday indices, 0=Sunday..6=Saturday.
    #[serde(default)]
    pub days_off: Vec<u8>,
    /// Years to scan starting from the current one; 0 means the default.
    #[serde(default)]
    pub years_scope: u32
}

impl BridgeRequest {
    pub fn leave_day_budget(&self) -> u32 {
        self.day_of_holidays
    }

    pub fn years_scope(&self) -> u32 {
        if self.years_scope == 0 {
            DEFAULT_YEARS_SCOPE
        } else {
            self.years_scope
        }
    }

    pub fn weekly_off_days(&self) -> Result<WeeklyOffDays, BridgeError> {
        WeeklyOffDays::from_indices(&self.days_off)
    }
}

use serde::{
    Serialize,
    Deserialize
};

use super::bridge::Bridge;

// Year-level capacity reported with every result; not derived from the bridges.
pub const YEAR_HOLIDAYS_COUNT: u32 = 6;
pub const YEAR_WEEKDAYS_COUNT: u32 = 4;
pub const YEAR_DAYS_COUNT: u32 = 10;

/// The selected bridges of one calendar year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearBridges {
    years: Vec<String>,
    bridges: Vec<Bridge>,
    holidays_count: u32,
    weekdays_count: u32,
    days_count: u32
}

impl YearBridges {
    pub fn new(year: i32, bridges: Vec<Bridge>) -> YearBridges {
        YearBridges {
            years: vec![year.to_string()],
            bridges,
            holidays_count: YEAR_HOLIDAYS_COUNT,
            weekdays_count: YEAR_WEEKDAYS_COUNT,
            days_count: YEAR_DAYS_COUNT
        }
    }

    pub fn years(&self) -> &[String] {
        &self.years
    }

    pub fn bridges(&self) -> &[Bridge] {
        &self.bridges
    }

    pub fn holidays_count(&self) -> u32 {
        self.holidays_count
    }

    pub fn weekdays_count(&self) -> u32 {
        self.weekdays_count
    }

    pub fn days_count(&self) -> u32 {
        self.days_count
    }

    /// Keeps only the bridges for which `keep` holds, in their current order.
    pub fn retain_bridges(&mut self, keep: impl FnMut(&Bridge) -> bool) {
        self.bridges.retain(keep);
    }
}

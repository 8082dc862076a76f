use chrono::NaiveDate;
use serde::{
    Serialize,
    Deserialize
};

/// A contiguous run of days off, opening on a non-working day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bridge {
    start: NaiveDate,
    end: NaiveDate,
    /// Holidays and weekly off-days inside the run.
    holidays_count: u32,
    /// Working days covered with leave.
    weekdays_count: u32,
    days_count: u32,
    is_top: bool,
    id: String
}

impl Bridge {
    pub fn bridge_id(start: NaiveDate, end: NaiveDate) -> String {
        format!("{}-{}", start.format("%Y-%m-%d"), end.format("%Y-%m-%d"))
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
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

    pub fn is_top(&self) -> bool {
        self.is_top
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub(crate) fn mark_top(&mut self) {
        self.is_top = true;
    }
}

/// A run still being assembled by the scanner.
#[derive(Debug, Clone)]
pub struct BridgeRun {
    start: NaiveDate,
    end: NaiveDate,
    holidays_count: u32,
    weekdays_count: u32
}

impl BridgeRun {
    pub fn open(start: NaiveDate, is_non_working: bool) -> BridgeRun {
        BridgeRun {
            start,
            end: start,
            holidays_count: is_non_working as u32,
            weekdays_count: !is_non_working as u32
        }
    }

    /// Appends the day after the current end.
    pub fn extend(&mut self, d: NaiveDate, is_non_working: bool) {
        self.end = d;
        if is_non_working {
            self.holidays_count += 1;
        } else {
            self.weekdays_count += 1;
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn days_count(&self) -> u32 {
        self.holidays_count + self.weekdays_count
    }

    pub fn close(self) -> Bridge {
        Bridge {
            start: self.start,
            end: self.end,
            holidays_count: self.holidays_count,
            weekdays_count: self.weekdays_count,
            days_count: self.days_count(),
            is_top: false,
            id: Bridge::bridge_id(self.start, self.end)
        }
    }
}

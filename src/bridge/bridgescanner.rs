use std::sync::Arc;

use chrono::{Days, NaiveDate};
use tracing::debug;

use super::bridge::{Bridge, BridgeRun};
use super::bridgeerror::BridgeError;
use crate::time::calendar::holidaycalendar::YearCalendars;
use crate::time::calendar::holidayregistry::HolidaySource;
use crate::time::calendar::weeklyoffdays::WeeklyOffDays;

const ONE_DAY: Days = Days::new(1);

pub const MAX_LEAVE_DAY_BUDGET: u32 = 366;

/// Walks a year day by day and collects the runs of days off reachable with
/// a leave-day budget.
pub struct BridgeScanner {
    source: Arc<dyn HolidaySource>,
    today: NaiveDate
}

impl BridgeScanner {
    /// `today` is the reference date for skipping runs that are already over.
    pub fn new(source: Arc<dyn HolidaySource>, today: NaiveDate) -> BridgeScanner {
        BridgeScanner { source, today }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Candidate bridges of `year` in scan order.
    ///
    /// A run opens on a non-working day and grows while leave days remain or
    /// the next day is off anyway. Runs not longer than a plain weekly
    /// off-day stretch are dropped. With `skip_past_runs`, runs opening more
    /// than `leave_day_budget + 1` days before today are not considered.
    pub fn scan(
        &self,
        year: i32,
        leave_day_budget: u32,
        locale: &str,
        city: &str,
        weekly_off_days: WeeklyOffDays,
        skip_past_runs: bool
    ) -> Result<Vec<Bridge>, BridgeError> {
        if leave_day_budget > MAX_LEAVE_DAY_BUDGET {
            return Err(BridgeError::LeaveBudgetTooLarge(leave_day_budget));
        }
        let (first_day, last_day) = year_bounds(year)?;
        let horizon = self.today
            .checked_sub_days(Days::new(u64::from(leave_day_budget) + 1))
            .unwrap_or(NaiveDate::MIN);

        let mut calendars = YearCalendars::new(self.source.as_ref(), locale, city, weekly_off_days);
        let mut bridges = Vec::new();
        let mut cursor = first_day;

        while cursor <= last_day {
            let is_cursor_non_working = calendars.is_non_working(cursor);

            // nothing left to cover a working day with
            if leave_day_budget == 0 && !is_cursor_non_working {
                cursor = next_day(cursor, year)?;
                continue;
            }
            if skip_past_runs && cursor < horizon {
                cursor = next_day(cursor, year)?;
                continue;
            }
            // a bridge always opens on a non-working day
            if !is_cursor_non_working {
                cursor = next_day(cursor, year)?;
                continue;
            }

            let mut run = BridgeRun::open(cursor, is_cursor_non_working);
            let mut available_days = leave_day_budget;
            let mut next = next_day(cursor, year)?;
            loop {
                let is_next_non_working = calendars.is_non_working(next);
                if !is_next_non_working {
                    if available_days == 0 {
                        break;
                    }
                    available_days -= 1;
                }
                run.extend(next, is_next_non_working);
                next = next_day(next, year)?;
            }

            while calendars.is_non_working(cursor) {
                cursor = next_day(cursor, year)?;
            }

            if run.days_count() > weekly_off_days.len() {
                let bridge = run.close();
                debug!(id = bridge.id(), days = bridge.days_count(), leave = bridge.weekdays_count(), "bridge found");
                bridges.push(bridge);
            }
        }

        debug!(year, calendars = ?calendars.built_years(), bridges = bridges.len(), "year scanned");
        Ok(bridges)
    }
}

fn year_bounds(year: i32) -> Result<(NaiveDate, NaiveDate), BridgeError> {
    match (NaiveDate::from_ymd_opt(year, 1, 1), NaiveDate::from_ymd_opt(year, 12, 31)) {
        (Some(first_day), Some(last_day)) => Ok((first_day, last_day)),
        _ => Err(BridgeError::YearOutOfRange(year))
    }
}

/// A run may spill years past the one being scanned; running off the end of
/// chrono's range is reported against the scanned year.
fn next_day(date: NaiveDate, year: i32) -> Result<NaiveDate, BridgeError> {
    date.checked_add_days(ONE_DAY).ok_or(BridgeError::YearOutOfRange(year))
}

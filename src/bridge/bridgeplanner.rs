use std::sync::Arc;

use chrono::{Datelike, Days, NaiveDate};
use tracing::{debug, info};

use super::bridge::Bridge;
use super::bridgeerror::BridgeError;
use super::bridgerequest::BridgeRequest;
use super::bridgescanner::BridgeScanner;
use super::bridgescorer::{BridgeScorer, LeaveEfficiencyScorer};
use super::bridgeselector::{BridgeSelector, ScoreBuckets};
use super::yearbridges::YearBridges;
use crate::time::calendar::holidayregistry::HolidaySource;
use crate::time::calendar::weeklyoffdays::WeeklyOffDays;

pub const MAX_YEARS_SCOPE: u32 = 50;

/// Turns a [`BridgeRequest`] into the best bridges of each requested year.
pub struct BridgePlanner {
    scanner: BridgeScanner,
    scorer: Arc<dyn BridgeScorer>,
    locale: String
}

impl BridgePlanner {
    pub fn new(source: Arc<dyn HolidaySource>, locale: &str, today: NaiveDate) -> BridgePlanner {
        BridgePlanner {
            scanner: BridgeScanner::new(source, today),
            scorer: Arc::new(LeaveEfficiencyScorer),
            locale: locale.to_owned()
        }
    }

    pub fn with_scorer(mut self, scorer: Arc<dyn BridgeScorer>) -> BridgePlanner {
        self.scorer = scorer;
        self
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn today(&self) -> NaiveDate {
        self.scanner.today()
    }

    /// Scans `year` and keeps its two best score tiers.
    pub fn bridges_by_year(
        &self,
        year: i32,
        leave_day_budget: u32,
        city: &str,
        weekly_off_days: WeeklyOffDays,
        skip_past_runs: bool
    ) -> Result<YearBridges, BridgeError> {
        let candidates = self.scanner.scan(
            year,
            leave_day_budget,
            &self.locale,
            city,
            weekly_off_days,
            skip_past_runs
        )?;
        let score_buckets = ScoreBuckets::from_bridges(candidates, self.scorer.as_ref());
        let (top_score, second_score) = BridgeSelector::top_scores(&score_buckets);
        debug!(year, ?top_score, ?second_score, "score tiers");
        Ok(YearBridges::new(year, BridgeSelector::select(score_buckets)))
    }

    /// One [`YearBridges`] per year from the current one onwards, ascending.
    ///
    /// Only bridges starting after today plus the leave-day budget are
    /// returned, so there is still time to book the leave.
    pub fn plan(&self, request: &BridgeRequest) -> Result<Vec<YearBridges>, BridgeError> {
        let weekly_off_days = request.weekly_off_days()?;
        let leave_day_budget = request.leave_day_budget();
        let years_scope = request.years_scope();
        if years_scope > MAX_YEARS_SCOPE {
            return Err(BridgeError::YearsScopeTooLarge(years_scope));
        }
        let today = self.today();
        let bookable_after = today
            .checked_add_days(Days::new(u64::from(leave_day_budget)))
            .ok_or(BridgeError::YearOutOfRange(today.year()))?;

        info!(city = %request.city, leave_day_budget, years_scope, "planning bridges");
        let mut result = Vec::with_capacity(years_scope as usize);
        for offset in 0..years_scope as i32 {
            let year = today.year()
                .checked_add(offset)
                .ok_or(BridgeError::YearOutOfRange(today.year()))?;
            let mut year_bridges = self.bridges_by_year(
                year,
                leave_day_budget,
                &request.city,
                weekly_off_days,
                true
            )?;
            year_bridges.retain_bridges(|bridge: &Bridge| bridge.start() > bookable_after);
            debug!(year, bridges = year_bridges.bridges().len(), "year planned");
            result.push(year_bridges);
        }
        Ok(result)
    }
}

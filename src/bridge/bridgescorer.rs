use super::bridge::Bridge;

/// Length of the nominal period bridges are compared against, in days.
pub const REFERENCE_PERIOD_DAYS: u32 = 30;

pub trait BridgeScorer: Send + Sync {
    fn score(&self, bridge: &Bridge) -> f64;

    /// Integer tier a bridge is ranked in: the score truncated toward zero.
    fn bucket(&self, bridge: &Bridge) -> i64 {
        self.score(bridge).trunc() as i64
    }
}

/// Rewards long runs bought with few leave days.
///
/// A run without leave days scores its length. Otherwise the score is
/// `(days / leave days) * (days / 30) * 100`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeaveEfficiencyScorer;

impl BridgeScorer for LeaveEfficiencyScorer {
    fn score(&self, bridge: &Bridge) -> f64 {
        let days = bridge.days_count() as u64;
        let weekdays = bridge.weekdays_count() as u64;
        if weekdays == 0 {
            return days as f64;
        }
        // One division of exact integers, so whole-number scores stay whole
        (days * days * 100) as f64 / (weekdays * REFERENCE_PERIOD_DAYS as u64) as f64
    }
}


#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rstest::rstest;

    use super::*;
    use crate::bridge::bridge::BridgeRun;

    fn run(non_working: u32, leave: u32) -> Bridge {
        let start = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap();
        let mut run = BridgeRun::open(start, true);
        let mut d = start;
        for index in 1..(non_working + leave) {
            d = d.succ_opt().unwrap();
            run.extend(d, index < non_working);
        }
        run.close()
    }

    #[rstest]
    #[case(3, 0, 3)]
    #[case(4, 2, 60)]
    #[case(3, 2, 41)]
    #[case(2, 2, 26)]
    #[case(6, 3, 90)]
    #[case(2, 1, 30)]
    fn buckets_truncate_the_score(#[case] non_working: u32, #[case] leave: u32, #[case] expected: i64) {
        assert_eq!(LeaveEfficiencyScorer.bucket(&run(non_working, leave)), expected);
    }

    #[rstest]
    fn pure_holiday_runs_score_their_length() {
        assert_eq!(LeaveEfficiencyScorer.score(&run(4, 0)), 4.0);
    }

    #[rstest]
    fn score_keeps_its_fraction() {
        let score = LeaveEfficiencyScorer.score(&run(3, 2));

        assert!((score - 41.666_666).abs() < 1e-5, "unexpected score {score}");
    }
}

use thiserror::Error;

/// Reasons a bridge computation request cannot be served.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BridgeError {
    #[error("weekday index {0} is outside 0 (Sunday) ..= 6 (Saturday)")]
    InvalidWeekday(u8),
    #[error("every day of the week is an off-day, there is nothing to bridge")]
    NoWorkingDays,
    #[error("leave-day budget {0} exceeds the {max} days of a year", max = crate::bridge::bridgescanner::MAX_LEAVE_DAY_BUDGET)]
    LeaveBudgetTooLarge(u32),
    #[error("years scope {0} exceeds the supported {max} years", max = crate::bridge::bridgeplanner::MAX_YEARS_SCOPE)]
    YearsScopeTooLarge(u32),
    #[error("year {0} cannot be scanned")]
    YearOutOfRange(i32)
}

use chrono::{
    Datelike,
    NaiveDate,
    Weekday
};

use crate::bridge::bridgeerror::BridgeError;

const ALL_DAYS: u8 = 0b0111_1111;

/// Weekdays that are never worked, as a bitmask.
/// Bit `i` stands for weekday index `i`: Sun(0), Mon(1), ..., Sat(6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WeeklyOffDays(u8);

impl WeeklyOffDays {
    /// Builds the mask from weekday indices (0=Sunday..6=Saturday).
    ///
    /// Duplicated indices collapse into one. A week with no working day at all
    /// is rejected, since no run of non-working days could ever end.
    pub fn from_indices(indices: &[u8]) -> Result<WeeklyOffDays, BridgeError> {
        let mut mask = 0u8;
        for &index in indices {
            if index > 6 {
                return Err(BridgeError::InvalidWeekday(index));
            }
            mask |= 1u8 << index;
        }
        if mask == ALL_DAYS {
            return Err(BridgeError::NoWorkingDays);
        }
        Ok(WeeklyOffDays(mask))
    }

    pub fn none() -> WeeklyOffDays {
        WeeklyOffDays(0)
    }

    #[inline]
    pub fn is_off(&self, weekday: Weekday) -> bool {
        let bit = 1u8 << weekday.num_days_from_sunday();
        (self.0 & bit) != 0
    }

    #[inline]
    pub fn is_off_date(&self, d: NaiveDate) -> bool {
        self.is_off(d.weekday())
    }

    /// Number of distinct off-days in a week.
    pub fn len(&self) -> u32 {
        self.0.count_ones()
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn indices(&self) -> Vec<u8> {
        (0..7u8).filter(|day| (self.0 & (1u8 << day)) != 0).collect()
    }
}

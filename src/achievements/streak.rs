//! Consecutive-day workout streak.

use chrono::NaiveDate;

/// Day format used when the last workout day is persisted.
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Outcome of recording a workout day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakChange {
    /// Already logged today
    Unchanged,
    /// Yesterday was logged, streak grew by one
    Extended,
    /// Gap (or first workout), streak restarted at 1
    Reset,
}

/// Current streak and the day it was last extended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Streak {
    current: u32,
    last_day: Option<NaiveDate>,
}

impl Streak {
    /// Rebuild a streak from persisted parts.
    pub fn from_parts(current: u32, last_day: Option<NaiveDate>) -> Self {
        Self { current, last_day }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn last_day(&self) -> Option<NaiveDate> {
        self.last_day
    }

    /// Record a workout on `today`.
    ///
    /// Same day leaves the streak alone, the day after the last workout
    /// extends it, anything else restarts it at 1.
    pub fn record(&mut self, today: NaiveDate) -> StreakChange {
        if self.last_day == Some(today) {
            return StreakChange::Unchanged;
        }

        let change = if self.last_day.is_some() && self.last_day == today.pred_opt() {
            self.current = self.current.saturating_add(1);
            StreakChange::Extended
        } else {
            self.current = 1;
            StreakChange::Reset
        };

        self.last_day = Some(today);
        change
    }

    /// Last workout day formatted for storage.
    pub fn last_day_string(&self) -> Option<String> {
        self.last_day.map(|d| d.format(DAY_FORMAT).to_string())
    }

    /// Parse a stored day; malformed values are treated as absent.
    pub fn parse_day(value: &str) -> Option<NaiveDate> {
        match NaiveDate::parse_from_str(value, DAY_FORMAT) {
            Ok(day) => Some(day),
            Err(e) => {
                tracing::debug!("Ignoring malformed workout day '{}': {}", value, e);
                None
            }
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_first_workout_starts_at_one() {
        let mut streak = Streak::default();
        assert_eq!(streak.record(day(5)), StreakChange::Reset);
        assert_eq!(streak.current(), 1);
        assert_eq!(streak.last_day(), Some(day(5)));
    }

    #[test]
    fn test_same_day_is_unchanged() {
        let mut streak = Streak::default();
        streak.record(day(5));
        assert_eq!(streak.record(day(5)), StreakChange::Unchanged);
        assert_eq!(streak.current(), 1);
    }

    #[test]
    fn test_consecutive_days_extend() {
        let mut streak = Streak::default();
        for d in 1..=7 {
            streak.record(day(d));
        }
        assert_eq!(streak.current(), 7);
    }

    #[test]
    fn test_gap_resets() {
        let mut streak = Streak::default();
        streak.record(day(1));
        streak.record(day(2));
        assert_eq!(streak.record(day(4)), StreakChange::Reset);
        assert_eq!(streak.current(), 1);
    }

    #[test]
    fn test_earlier_day_resets() {
        let mut streak = Streak::from_parts(3, Some(day(10)));
        assert_eq!(streak.record(day(9)), StreakChange::Reset);
        assert_eq!(streak.current(), 1);
        assert_eq!(streak.last_day(), Some(day(9)));
    }

    #[test]
    fn test_month_boundary_extends() {
        let mut streak = Streak::from_parts(2, NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(
            streak.record(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()),
            StreakChange::Extended
        );
        assert_eq!(streak.current(), 3);
    }

    #[test]
    fn test_day_string_roundtrip() {
        let streak = Streak::from_parts(1, Some(day(9)));
        let stored = streak.last_day_string().unwrap();
        assert_eq!(stored, "2024-01-09");
        assert_eq!(Streak::parse_day(&stored), Some(day(9)));
        assert_eq!(Streak::parse_day("09/01/2024"), None);
    }
}

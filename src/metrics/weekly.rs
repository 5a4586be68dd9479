//! Weekly workout progress over the last four ISO weeks.

use crate::workouts::Workout;
use chrono::{Datelike, Duration, IsoWeek, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Number of weeks shown.
pub const WEEKS_SHOWN: u32 = 4;

/// Progress for one week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekProgress {
    /// `W4` (oldest) .. `W1` (current week)
    pub label: String,
    /// Workouts logged that week
    pub workouts: u32,
    /// Workouts relative to the weekly target, capped at 100
    pub percent: u8,
}

/// Progress for the current week and the three before it, oldest first.
pub fn weekly_progress(
    workouts: &[Workout],
    now: NaiveDateTime,
    weekly_target: u32,
) -> Vec<WeekProgress> {
    let target = u64::from(weekly_target.max(1));

    (0..WEEKS_SHOWN)
        .rev()
        .map(|weeks_back| {
            let week: IsoWeek = (now - Duration::weeks(i64::from(weeks_back))).iso_week();
            let count = workouts.iter().filter(|w| w.date.iso_week() == week).count() as u64;
            let percent = (count * 100 / target).min(100) as u8;

            WeekProgress {
                label: format!("W{}", weeks_back + 1),
                workouts: count as u32,
                percent,
            }
        })
        .collect()
}

//! Statistics over logged workouts and meals.

pub mod summary;
pub mod weekly;

pub use summary::{meals_in_window, window_start, workouts_in_window, DataStatus, Summary};
pub use weekly::{weekly_progress, WeekProgress};

/// Colour band for a progress percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressBand {
    /// 80% and above
    Good,
    /// 50% to 79%
    Fair,
    /// Below 50%
    Low,
}

impl ProgressBand {
    pub fn from_percent(percent: u8) -> Self {
        if percent >= 80 {
            ProgressBand::Good
        } else if percent >= 50 {
            ProgressBand::Fair
        } else {
            ProgressBand::Low
        }
    }

    /// Hex colour for progress bars.
    pub fn color_hex(&self) -> &'static str {
        match self {
            ProgressBand::Good => "#4CAF50",
            ProgressBand::Fair => "#FF9800",
            ProgressBand::Low => "#F44336",
        }
    }
}

/// Render a percentage as a fixed-width text bar.
pub fn progress_bar(percent: u8, width: usize) -> String {
    let filled = (usize::from(percent.min(100)) * width) / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

use super::mode::mode;
use crate::models::TripTable;
use chrono::Weekday;
use serde::Serialize;

/// Most frequent times of travel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeStats {
    pub popular_month: u32,
    pub popular_day: Weekday,
    pub popular_hour: u32,
}

impl TimeStats {
    /// The popular hour as a one-hour window `[hour, hour + 1)`.
    pub fn hour_window(&self) -> (u32, u32) {
        (self.popular_hour, self.popular_hour + 1)
    }
}

/// `None` when the table has no rows.
pub fn time_stats(table: &TripTable) -> Option<TimeStats> {
    let (popular_month, _) = mode(table.rows.iter().map(|r| r.month))?;
    // Weekday is not Ord; count on its Monday-based index instead.
    let (day_idx, _) = mode(table.rows.iter().map(|r| r.weekday.num_days_from_monday() as u8))?;
    let popular_day = Weekday::try_from(day_idx).ok()?;
    let (popular_hour, _) = mode(table.rows.iter().map(|r| r.hour()))?;

    Some(TimeStats {
        popular_month,
        popular_day,
        popular_hour,
    })
}

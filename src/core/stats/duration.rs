use crate::models::TripTable;
use crate::utils::formatting::round2;
use serde::Serialize;

const SECONDS_PER_DAY: f64 = 86_400.0;
const SECONDS_PER_MINUTE: f64 = 60.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationStats {
    pub trips: usize,
    pub total_seconds: f64,
    pub mean_seconds: f64,
    /// total_seconds in days, 2 decimals
    pub total_days: f64,
    /// mean_seconds in minutes, 2 decimals
    pub mean_minutes: f64,
}

pub fn duration_stats(table: &TripTable) -> Option<DurationStats> {
    if table.is_empty() {
        return None;
    }

    let trips = table.len();
    let total_seconds: f64 = table.rows.iter().map(|r| r.trip_duration).sum();
    let mean_seconds = total_seconds / trips as f64;

    Some(DurationStats {
        trips,
        total_seconds,
        mean_seconds,
        total_days: round2(total_seconds / SECONDS_PER_DAY),
        mean_minutes: round2(mean_seconds / SECONDS_PER_MINUTE),
    })
}

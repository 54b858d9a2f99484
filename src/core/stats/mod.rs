//! Read-only statistics over a filtered trip table.
//! Each computation returns `None` for an empty table.

pub mod duration;
pub mod mode;
pub mod station;
pub mod time;
pub mod user;

pub use duration::{DurationStats, duration_stats};
pub use station::{Route, StationStats, station_stats};
pub use time::{TimeStats, time_stats};
pub use user::{BirthYears, CategoryCount, UserStats, user_stats};

use crate::models::{Filter, TripTable};
use serde::Serialize;

/// All four reports for one table, used by the JSON output of `stats`.
#[derive(Debug, Serialize)]
pub struct Summary {
    pub filter: Filter,
    pub trips: usize,
    pub time: Option<TimeStats>,
    pub stations: Option<StationStats>,
    pub duration: Option<DurationStats>,
    pub users: Option<UserStats>,
}

impl Summary {
    pub fn compute(filter: Filter, table: &TripTable) -> Self {
        Self {
            filter,
            trips: table.len(),
            time: time_stats(table),
            stations: station_stats(table),
            duration: duration_stats(table),
            users: user_stats(table),
        }
    }
}

use super::mode::mode;
use crate::models::TripTable;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub start: String,
    pub end: String,
    pub trips: usize,
}

impl Route {
    /// Round trip: the route starts and ends at the same station.
    pub fn is_loop(&self) -> bool {
        self.start == self.end
    }
}

/// Most popular stations and trip. Start and end modes are independent of
/// the most popular route. Rows with a blank station are left out of the
/// counts that need it, so a field is `None` only when no row has a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationStats {
    pub popular_start: Option<String>,
    pub popular_end: Option<String>,
    pub popular_route: Option<Route>,
}

pub fn station_stats(table: &TripTable) -> Option<StationStats> {
    if table.is_empty() {
        return None;
    }

    let popular_start = mode(table.rows.iter().filter_map(|r| r.start_station.as_deref()))
        .map(|(s, _)| s.to_string());
    let popular_end = mode(table.rows.iter().filter_map(|r| r.end_station.as_deref()))
        .map(|(s, _)| s.to_string());
    let popular_route = mode(
        table
            .rows
            .iter()
            .filter_map(|r| Some((r.start_station.as_deref()?, r.end_station.as_deref()?))),
    )
    .map(|((start, end), trips)| Route {
        start: start.to_string(),
        end: end.to_string(),
        trips,
    });

    Some(StationStats {
        popular_start,
        popular_end,
        popular_route,
    })
}

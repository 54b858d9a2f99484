use super::city::City;
use super::filter::Filter;
use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::Serialize;

/// One row of a city trip log. Serialized as-is for the JSON sample output.
#[derive(Debug, Clone, Serialize)]
pub struct TripRecord {
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    pub trip_duration: f64, // seconds
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,

    // derived from start_time at load
    #[serde(skip)]
    pub month: u32,
    #[serde(skip)]
    pub weekday: Weekday,
}

impl TripRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        start_time: NaiveDateTime,
        end_time: Option<NaiveDateTime>,
        start_station: Option<String>,
        end_station: Option<String>,
        trip_duration: f64,
        user_type: Option<String>,
        gender: Option<String>,
        birth_year: Option<i32>,
    ) -> Self {
        Self {
            month: start_time.month(),
            weekday: start_time.weekday(),
            start_time,
            end_time,
            start_station,
            end_station,
            trip_duration,
            user_type,
            gender,
            birth_year,
        }
    }

    pub fn hour(&self) -> u32 {
        self.start_time.hour()
    }
}

/// Which optional columns the source file carried.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Schema {
    pub has_gender: bool,
    pub has_birth_year: bool,
}

/// In-memory trip log for one city, optionally narrowed by a filter.
#[derive(Debug, Clone)]
pub struct TripTable {
    pub city: City,
    pub schema: Schema,
    pub rows: Vec<TripRecord>,
}

impl TripTable {
    pub fn new(city: City, schema: Schema, rows: Vec<TripRecord>) -> Self {
        Self { city, schema, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Keep only rows whose derived month/weekday satisfy `filter`.
    pub fn filtered(self, filter: &Filter) -> Self {
        let rows = self
            .rows
            .into_iter()
            .filter(|r| filter.matches(r.month, r.weekday))
            .collect();
        Self {
            city: self.city,
            schema: self.schema,
            rows,
        }
    }
}

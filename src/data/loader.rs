use crate::errors::{AppError, AppResult};
use crate::models::{City, Filter, Schema, TripRecord, TripTable};
use chrono::NaiveDateTime;
use csv::StringRecord;
use std::io;
use std::path::Path;
use tracing::debug;

pub const COL_START_TIME: &str = "Start Time";
pub const COL_END_TIME: &str = "End Time";
pub const COL_START_STATION: &str = "Start Station";
pub const COL_END_STATION: &str = "End Station";
pub const COL_TRIP_DURATION: &str = "Trip Duration";
pub const COL_USER_TYPE: &str = "User Type";
pub const COL_GENDER: &str = "Gender";
pub const COL_BIRTH_YEAR: &str = "Birth Year";

const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Header positions resolved once per file.
struct Columns {
    start_time: usize,
    end_time: Option<usize>,
    start_station: usize,
    end_station: usize,
    trip_duration: usize,
    user_type: usize,
    gender: Option<usize>,
    birth_year: Option<usize>,
}

impl Columns {
    fn resolve(headers: &StringRecord, source: &str) -> AppResult<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let require = |name: &str| {
            find(name).ok_or_else(|| AppError::MissingColumn {
                column: name.to_string(),
                path: source.to_string(),
            })
        };

        Ok(Self {
            start_time: require(COL_START_TIME)?,
            end_time: find(COL_END_TIME),
            start_station: require(COL_START_STATION)?,
            end_station: require(COL_END_STATION)?,
            trip_duration: require(COL_TRIP_DURATION)?,
            user_type: require(COL_USER_TYPE)?,
            gender: find(COL_GENDER),
            birth_year: find(COL_BIRTH_YEAR),
        })
    }

    fn schema(&self) -> Schema {
        Schema {
            has_gender: self.gender.is_some(),
            has_birth_year: self.birth_year.is_some(),
        }
    }
}

/// Load the trip log of `filter.city` from `data_dir` and keep the rows
/// matching the month/day filter.
pub fn load_data(data_dir: &Path, filter: &Filter) -> AppResult<TripTable> {
    let path = data_dir.join(filter.city.file_name());
    let source = path.display().to_string();

    let reader = csv::Reader::from_path(&path).map_err(|e| AppError::DataFile {
        path: source.clone(),
        source: e,
    })?;

    let table = read_trips(reader, filter.city, &source)?;
    let total = table.len();
    let table = table.filtered(filter);

    debug!(
        file = %source,
        total,
        kept = table.len(),
        %filter,
        "trip log loaded"
    );

    Ok(table)
}

/// Parse every row of a trip-log CSV. The whole read fails on the first bad row.
pub fn read_trips<R: io::Read>(
    mut reader: csv::Reader<R>,
    city: City,
    source: &str,
) -> AppResult<TripTable> {
    let headers = reader.headers()?.clone();
    let cols = Columns::resolve(&headers, source)?;

    let mut rows = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        rows.push(parse_row(&record, &cols, idx + 1)?);
    }

    Ok(TripTable::new(city, cols.schema(), rows))
}

fn parse_row(record: &StringRecord, cols: &Columns, row: usize) -> AppResult<TripRecord> {
    let field = |idx: usize| record.get(idx).unwrap_or("").trim();
    let optional = |idx: Option<usize>| {
        idx.map(field)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    };

    let raw_start = field(cols.start_time);
    let start_time = parse_timestamp(raw_start).ok_or_else(|| AppError::InvalidTimestamp {
        value: raw_start.to_string(),
        row,
    })?;

    // End Time is informational only: a bad value is not worth failing the load.
    let end_time = cols.end_time.map(field).and_then(parse_timestamp);

    let raw_duration = field(cols.trip_duration);
    let trip_duration = parse_number(raw_duration, COL_TRIP_DURATION, row)?;

    let birth_year = match cols.birth_year.map(field).filter(|v| !v.is_empty()) {
        Some(raw) => Some(parse_number(raw, COL_BIRTH_YEAR, row)? as i32),
        None => None,
    };

    Ok(TripRecord::new(
        start_time,
        end_time,
        optional(Some(cols.start_station)),
        optional(Some(cols.end_station)),
        trip_duration,
        optional(Some(cols.user_type)),
        optional(cols.gender),
        birth_year,
    ))
}

pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

fn parse_number(raw: &str, column: &str, row: usize) -> AppResult<f64> {
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| AppError::InvalidNumber {
            value: raw.to_string(),
            column: column.to_string(),
            row,
        })
}

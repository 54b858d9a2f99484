use crate::models::{TripRecord, TripTable};
use crate::utils::table::{Column, Table};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Up to `n` distinct rows chosen uniformly at random.
pub fn sample_rows<'a, G: Rng + ?Sized>(
    table: &'a TripTable,
    n: usize,
    rng: &mut G,
) -> Vec<&'a TripRecord> {
    table.rows.choose_multiple(rng, n).collect()
}

/// Render sampled rows, showing optional columns only when the file had them.
pub fn render_sample(table: &TripTable, rows: &[&TripRecord]) -> String {
    let mut headers = vec![
        "Start Time",
        "End Time",
        "Trip Duration",
        "Start Station",
        "End Station",
        "User Type",
    ];
    if table.schema.has_gender {
        headers.push("Gender");
    }
    if table.schema.has_birth_year {
        headers.push("Birth Year");
    }

    let mut out = Table::new(headers.into_iter().map(Column::new).collect());
    for r in rows {
        let mut cells = vec![
            r.start_time.format("%Y-%m-%d %H:%M:%S").to_string(),
            r.end_time
                .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_default(),
            r.trip_duration.to_string(),
            r.start_station.clone().unwrap_or_default(),
            r.end_station.clone().unwrap_or_default(),
            r.user_type.clone().unwrap_or_default(),
        ];
        if table.schema.has_gender {
            cells.push(r.gender.clone().unwrap_or_default());
        }
        if table.schema.has_birth_year {
            cells.push(r.birth_year.map(|y| y.to_string()).unwrap_or_default());
        }
        out.add_row(cells);
    }
    out.render()
}

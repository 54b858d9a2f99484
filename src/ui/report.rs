//! Text rendering of the four statistics reports.
//!
//! Each `*_lines` function turns a computed report into output lines; the
//! `print_reports` driver adds the heading, timing and separator.

use crate::core::stats::{
    DurationStats, StationStats, TimeStats, UserStats, duration_stats, station_stats, time_stats,
    user_stats,
};
use crate::models::TripTable;
use crate::models::filter::weekday_name;
use crate::utils::formatting::{decimal, join_with_and};
use crate::utils::rule;
use chrono::Month;
use std::io::{self, Write};
use std::time::Instant;
use tracing::debug;

pub const NO_DATA: &str = "No trip data available for the selected filters.";
pub const NO_DEMOGRAPHICS: &str = "No gender or birth years available for city.";

pub fn time_lines(stats: Option<&TimeStats>) -> Vec<String> {
    let Some(s) = stats else {
        return vec![NO_DATA.to_string()];
    };
    let (from, to) = s.hour_window();
    vec![
        format!("The most popular month was {}.", month_name(s.popular_month)),
        format!(
            "The most popular day of the week was {}.",
            weekday_name(s.popular_day)
        ),
        format!("The most popular period was {}:00-{}:00.", from, to),
    ]
}

pub fn station_lines(stats: Option<&StationStats>) -> Vec<String> {
    let Some(s) = stats else {
        return vec![NO_DATA.to_string()];
    };
    let start_line = match &s.popular_start {
        Some(station) => format!("The most popular start station was at: {station}."),
        None => "No start station recorded for the selected trips.".to_string(),
    };
    let end_line = match &s.popular_end {
        Some(station) => format!("The most popular end station was at: {station}."),
        None => "No end station recorded for the selected trips.".to_string(),
    };
    let route_line = match &s.popular_route {
        Some(route) if route.is_loop() => format!(
            "The most popular route taken by {} people, started and ended at the {} Station.",
            route.trips, route.start
        ),
        Some(route) => format!(
            "The most popular route taken by {} people, started at the {} Station and ended at the {} Station.",
            route.trips, route.start, route.end
        ),
        None => "No complete route recorded for the selected trips.".to_string(),
    };
    vec![start_line, end_line, route_line]
}

pub fn duration_lines(stats: Option<&DurationStats>) -> Vec<String> {
    let Some(s) = stats else {
        return vec![NO_DATA.to_string()];
    };
    vec![
        format!(
            "The total of all trip durations was {} days.",
            decimal(s.total_days)
        ),
        format!(
            "The average trip duration was {} minutes.",
            decimal(s.mean_minutes)
        ),
    ]
}

pub fn user_lines(stats: Option<&UserStats>) -> Vec<String> {
    let Some(s) = stats else {
        return vec![NO_DATA.to_string()];
    };

    let mut lines: Vec<String> = s
        .user_types
        .iter()
        .map(|t| format!("{} user(s) are {}(s).", t.count, t.value.to_lowercase()))
        .collect();

    if !s.has_demographics() {
        lines.push(NO_DEMOGRAPHICS.to_string());
        return lines;
    }

    if let Some(genders) = &s.genders {
        lines.push(String::new());
        if genders.is_empty() {
            lines.push("No gender recorded for the selected trips.".to_string());
        } else {
            let parts: Vec<String> = genders
                .iter()
                .map(|g| format!("{} users are {}", g.count, g.value.to_lowercase()))
                .collect();
            lines.push(format!("{}.", join_with_and(&parts)));
        }
    }

    if s.schema.has_birth_year {
        lines.push(String::new());
        match &s.birth_years {
            Some(years) => {
                lines.push(format!(
                    "The user with the earliest year of birth was in {}.",
                    years.earliest
                ));
                lines.push(format!(
                    "The user with the most recent year of birth was in {}.",
                    years.most_recent
                ));
                lines.push(format!(
                    "The most common year of birth was in {}.",
                    years.most_common
                ));
            }
            None => lines.push("No birth year recorded for the selected trips.".to_string()),
        }
    }

    lines
}

/// Run and print the four reports, each independently over the same table.
pub fn print_reports<W: Write>(out: &mut W, table: &TripTable, show_timing: bool) -> io::Result<()> {
    section(
        out,
        "Calculating The Most Frequent Times of Travel...",
        show_timing,
        || time_lines(time_stats(table).as_ref()),
    )?;
    section(
        out,
        "Calculating The Most Popular Stations and Trip...",
        show_timing,
        || station_lines(station_stats(table).as_ref()),
    )?;
    section(out, "Calculating Trip Duration...", show_timing, || {
        duration_lines(duration_stats(table).as_ref())
    })?;
    section(out, "Calculating User Stats...", show_timing, || {
        user_lines(user_stats(table).as_ref())
    })
}

fn section<W, F>(out: &mut W, heading: &str, show_timing: bool, compute: F) -> io::Result<()>
where
    W: Write,
    F: FnOnce() -> Vec<String>,
{
    writeln!(out)?;
    writeln!(out, "{heading}")?;
    writeln!(out)?;

    let started = Instant::now();
    let lines = compute();
    let elapsed = started.elapsed();
    debug!(section = heading, elapsed_us = elapsed.as_micros() as u64, "report computed");

    for line in lines {
        writeln!(out, "{line}")?;
    }

    if show_timing {
        writeln!(out)?;
        writeln!(out, "This took {} seconds.", elapsed.as_secs_f64())?;
    }
    writeln!(out, "{}", rule())
}

fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
        .unwrap_or("an unknown month")
}

use crate::cli::parser::{Commands, OutputFormat};
use crate::config::Config;
use crate::core::sample::{render_sample, sample_rows};
use crate::core::stats::Summary;
use crate::data::load_data;
use crate::errors::{AppError, AppResult};
use crate::models::{City, DayFilter, Filter, MonthFilter, TripRecord};
use crate::ui::report::print_reports;
use serde::Serialize;
use std::io::{self, Write};

/// JSON document printed by `stats --format json`.
#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    summary: Summary,
    #[serde(skip_serializing_if = "Option::is_none")]
    sample: Option<Vec<&'a TripRecord>>,
}

/// Handle the `stats` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats {
        city,
        month,
        day,
        sample,
        format,
    } = cmd
    {
        let filter = parse_filter(city, month, day)?;
        let table = load_data(&cfg.data_path(), &filter)?;

        let stdout = io::stdout();
        let mut out = stdout.lock();

        match format {
            OutputFormat::Json => {
                let report = JsonReport {
                    summary: Summary::compute(filter, &table),
                    sample: sample.map(|n| sample_rows(&table, n, &mut rand::rng())),
                };
                writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
            }
            OutputFormat::Text => {
                writeln!(out, "Trips matching {}: {}", filter, table.len())?;
                print_reports(&mut out, &table, cfg.show_timing)?;

                if let Some(n) = sample {
                    let rows = sample_rows(&table, *n, &mut rand::rng());
                    writeln!(out)?;
                    write!(out, "{}", render_sample(&table, &rows))?;
                }
            }
        }
    }
    Ok(())
}

/// Flag values go through the same parsers as the interactive prompts; a bad
/// value is a hard error here.
pub fn parse_filter(city: &str, month: &str, day: &str) -> AppResult<Filter> {
    let city = City::parse(city).ok_or_else(|| AppError::InvalidCity(city.to_string()))?;
    let month = MonthFilter::parse(month).ok_or_else(|| AppError::InvalidMonth(month.to_string()))?;
    let day = DayFilter::parse(day).ok_or_else(|| AppError::InvalidDay(day.to_string()))?;
    Ok(Filter::new(city, month, day))
}

//! Interactive filter collection.
//!
//! Any invalid answer restarts the whole sequence from the city question.

use super::prompt::Prompter;
use crate::errors::AppResult;
use crate::models::{City, DayFilter, Filter, FilterMode, MonthFilter};
use crate::utils::rule;
use std::io::{BufRead, Write};
use tracing::debug;

pub const CITY_PROMPT: &str = "Enter a city (Chicago, New York City, or Washington): ";
pub const MODE_PROMPT: &str = "Would you like to filter by month, day, both or none? ";
pub const MONTH_PROMPT: &str = "Enter a month (All, January, February, ... , June): ";
pub const DAY_PROMPT: &str = "Enter a day of week (All, Monday, Tuesday, ... Sunday): ";

pub const INVALID_CITY: &str = "Invalid city input, try again!";
pub const INVALID_MODE: &str = "Invalid filter, try again!";
pub const INVALID_MONTH: &str = "Invalid month input, try again!";
pub const INVALID_DAY: &str = "Invalid day of week input, try again!";

/// Ask until a complete, valid (city, month, day) filter is obtained.
pub fn get_filters<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> AppResult<Filter> {
    loop {
        if let Some(filter) = collect_once(p)? {
            p.say("")?;
            p.say("Inputs accepted!")?;
            p.say("")?;
            p.say(&rule())?;
            debug!(%filter, "filters resolved");
            return Ok(filter);
        }
    }
}

/// One pass over the questions. `None` means a rejection was printed.
fn collect_once<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> AppResult<Option<Filter>> {
    let Some(city) = City::parse(&p.ask(CITY_PROMPT)?) else {
        return reject(p, INVALID_CITY);
    };

    let Some(mode) = FilterMode::parse(&p.ask(MODE_PROMPT)?) else {
        return reject(p, INVALID_MODE);
    };

    let month = if mode.asks_month() {
        match MonthFilter::parse(&p.ask(MONTH_PROMPT)?) {
            Some(m) => m,
            None => return reject(p, INVALID_MONTH),
        }
    } else {
        MonthFilter::All
    };

    let day = if mode.asks_day() {
        match DayFilter::parse(&p.ask(DAY_PROMPT)?) {
            Some(d) => d,
            None => return reject(p, INVALID_DAY),
        }
    } else {
        DayFilter::All
    };

    Ok(Some(Filter::new(city, month, day)))
}

fn reject<R: BufRead, W: Write>(p: &mut Prompter<R, W>, message: &str) -> AppResult<Option<Filter>> {
    p.say(message)?;
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use chrono::Weekday;
    use std::io::Cursor;

    fn resolve(script: &str) -> (AppResult<Filter>, String) {
        let mut p = Prompter::new(Cursor::new(script.to_string()), Vec::new());
        let result = get_filters(&mut p);
        (result, String::from_utf8(p.into_output()).unwrap())
    }

    #[test]
    fn none_mode_selects_everything() {
        let (filter, out) = resolve("Chicago\nnone\n");
        assert_eq!(
            filter.unwrap(),
            Filter::new(City::Chicago, MonthFilter::All, DayFilter::All)
        );
        assert!(out.contains("Inputs accepted!"));
        assert!(!out.contains(MONTH_PROMPT));
        assert!(!out.contains(DAY_PROMPT));
    }

    #[test]
    fn month_mode_asks_only_for_month() {
        let (filter, out) = resolve("washington\nmonth\nMarch\n");
        assert_eq!(
            filter.unwrap(),
            Filter::new(City::Washington, MonthFilter::Only(3), DayFilter::All)
        );
        assert!(!out.contains(DAY_PROMPT));
    }

    #[test]
    fn day_mode_asks_only_for_day() {
        let (filter, _) = resolve("new york city\nday\nSunday\n");
        assert_eq!(
            filter.unwrap(),
            Filter::new(
                City::NewYorkCity,
                MonthFilter::All,
                DayFilter::Only(Weekday::Sun)
            )
        );
    }

    #[test]
    fn both_mode_asks_month_then_day() {
        let (filter, _) = resolve("chicago\nboth\njune\nall\n");
        assert_eq!(
            filter.unwrap(),
            Filter::new(City::Chicago, MonthFilter::Only(6), DayFilter::All)
        );
    }

    #[test]
    fn invalid_city_restarts_sequence() {
        let (filter, out) = resolve("boston\nchicago\nnone\n");
        assert!(filter.is_ok());
        assert_eq!(out.matches(CITY_PROMPT).count(), 2);
        assert!(out.contains(INVALID_CITY));
    }

    #[test]
    fn invalid_day_restarts_from_city_not_from_day() {
        let (filter, out) = resolve("chicago\nboth\nmay\nfunday\nwashington\nday\nfriday\n");
        assert_eq!(
            filter.unwrap(),
            Filter::new(
                City::Washington,
                MonthFilter::All,
                DayFilter::Only(Weekday::Fri)
            )
        );
        assert!(out.contains(INVALID_DAY));
        assert_eq!(out.matches(CITY_PROMPT).count(), 2);
        assert_eq!(out.matches(MONTH_PROMPT).count(), 1);
    }

    #[test]
    fn every_rejection_message_is_reachable() {
        let (_, out) = resolve("x\nchicago\nweekly\nchicago\nmonth\njuly\nchicago\nday\nsomeday\nchicago\nnone\n");
        for msg in [INVALID_CITY, INVALID_MODE, INVALID_MONTH, INVALID_DAY] {
            assert!(out.contains(msg), "missing: {msg}");
        }
        assert_eq!(out.matches(CITY_PROMPT).count(), 5);
    }

    #[test]
    fn does_not_return_until_valid() {
        let (filter, _) = resolve("boston\nchicago\nyearly\n");
        assert!(matches!(filter, Err(AppError::InputClosed)));
    }
}

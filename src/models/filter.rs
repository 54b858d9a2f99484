use super::city::City;
use chrono::Weekday;
use serde::Serialize;
use std::fmt;

/// Months available in the trip logs, in calendar order (index + 1 = month number).
pub const MONTHS: [&str; 6] = ["january", "february", "march", "april", "may", "june"];

/// Weekday names accepted at the prompt.
pub const DAYS: [(&str, Weekday); 7] = [
    ("monday", Weekday::Mon),
    ("tuesday", Weekday::Tue),
    ("wednesday", Weekday::Wed),
    ("thursday", Weekday::Thu),
    ("friday", Weekday::Fri),
    ("saturday", Weekday::Sat),
    ("sunday", Weekday::Sun),
];

/// Value meaning "no filter" for both month and day.
pub const ALL: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MonthFilter {
    All,
    Only(u32),
}

impl MonthFilter {
    pub fn parse(input: &str) -> Option<Self> {
        let key = input.trim().to_lowercase();
        if key == ALL {
            return Some(MonthFilter::All);
        }
        MONTHS
            .iter()
            .position(|m| *m == key)
            .map(|idx| MonthFilter::Only(idx as u32 + 1))
    }

    pub fn accepts(&self, month: u32) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Only(m) => *m == month,
        }
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => write!(f, "{ALL}"),
            MonthFilter::Only(m) => match MONTHS.get((*m as usize).wrapping_sub(1)) {
                Some(name) => write!(f, "{name}"),
                None => write!(f, "{m}"),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DayFilter {
    All,
    Only(Weekday),
}

impl DayFilter {
    pub fn parse(input: &str) -> Option<Self> {
        let key = input.trim().to_lowercase();
        if key == ALL {
            return Some(DayFilter::All);
        }
        DAYS.iter()
            .find(|(name, _)| *name == key)
            .map(|(_, wd)| DayFilter::Only(*wd))
    }

    pub fn accepts(&self, weekday: Weekday) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Only(wd) => *wd == weekday,
        }
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => write!(f, "{ALL}"),
            DayFilter::Only(wd) => write!(f, "{}", weekday_name(*wd).to_lowercase()),
        }
    }
}

/// Which filter questions the resolver asks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    Month,
    Day,
    Both,
    None,
}

impl FilterMode {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "month" => Some(FilterMode::Month),
            "day" => Some(FilterMode::Day),
            "both" => Some(FilterMode::Both),
            "none" => Some(FilterMode::None),
            _ => None,
        }
    }

    pub fn asks_month(&self) -> bool {
        matches!(self, FilterMode::Month | FilterMode::Both)
    }

    pub fn asks_day(&self) -> bool {
        matches!(self, FilterMode::Day | FilterMode::Both)
    }
}

/// Normalized (city, month, day) selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Filter {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl Filter {
    pub fn new(city: City, month: MonthFilter, day: DayFilter) -> Self {
        Self { city, month, day }
    }

    /// Month and day filters apply conjunctively.
    pub fn matches(&self, month: u32, weekday: Weekday) -> bool {
        self.month.accepts(month) && self.day.accepts(weekday)
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "city={} month={} day={}",
            self.city.name(),
            self.month,
            self.day
        )
    }
}

/// Capitalized English weekday name ("Monday").
pub fn weekday_name(wd: Weekday) -> &'static str {
    match wd {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

/// City name → data file. Names are the lower-case values accepted at the prompt.
pub const CITY_DATA: [(&str, City, &str); 3] = [
    ("chicago", City::Chicago, "chicago.csv"),
    ("new york city", City::NewYorkCity, "new_york_city.csv"),
    ("washington", City::Washington, "washington.csv"),
];

impl City {
    /// Case-insensitive lookup in `CITY_DATA`.
    pub fn parse(input: &str) -> Option<Self> {
        let key = input.trim().to_lowercase();
        CITY_DATA
            .iter()
            .find(|(name, _, _)| *name == key)
            .map(|(_, city, _)| *city)
    }

    pub fn name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    pub fn file_name(&self) -> &'static str {
        CITY_DATA
            .iter()
            .find(|(_, city, _)| city == self)
            .map(|(_, _, file)| *file)
            .unwrap_or_default()
    }
}

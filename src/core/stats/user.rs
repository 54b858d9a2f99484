use super::mode::{mode, value_counts};
use crate::models::{Schema, TripTable};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub value: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BirthYears {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

/// User demographics.
///
/// `genders` is `Some` only when the source file has a Gender column, and
/// `birth_years` is computed only when it has a Birth Year column; the
/// `schema` tells the two "absent" cases apart from "present but empty".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserStats {
    pub schema: Schema,
    pub user_types: Vec<CategoryCount>,
    pub genders: Option<Vec<CategoryCount>>,
    pub birth_years: Option<BirthYears>,
}

impl UserStats {
    pub fn has_demographics(&self) -> bool {
        self.schema.has_gender || self.schema.has_birth_year
    }
}

pub fn user_stats(table: &TripTable) -> Option<UserStats> {
    if table.is_empty() {
        return None;
    }

    let user_types = counts(table.rows.iter().filter_map(|r| r.user_type.as_deref()));

    let genders = table
        .schema
        .has_gender
        .then(|| counts(table.rows.iter().filter_map(|r| r.gender.as_deref())));

    let birth_years = if table.schema.has_birth_year {
        birth_years(table)
    } else {
        None
    };

    Some(UserStats {
        schema: table.schema,
        user_types,
        genders,
        birth_years,
    })
}

fn counts<'a>(values: impl Iterator<Item = &'a str>) -> Vec<CategoryCount> {
    value_counts(values)
        .into_iter()
        .map(|(value, count)| CategoryCount {
            value: value.to_string(),
            count,
        })
        .collect()
}

fn birth_years(table: &TripTable) -> Option<BirthYears> {
    let years = || table.rows.iter().filter_map(|r| r.birth_year);

    Some(BirthYears {
        earliest: years().min()?,
        most_recent: years().max()?,
        most_common: mode(years())?.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::stats::test_support::{person, table, table_with_schema};

    fn full_schema() -> Schema {
        Schema {
            has_gender: true,
            has_birth_year: true,
        }
    }

    #[test]
    fn empty_table_has_no_user_stats() {
        assert_eq!(user_stats(&table(vec![])), None);
    }

    #[test]
    fn user_types_descending_by_frequency() {
        let t = table(vec![
            person(Some("Customer"), None, None),
            person(Some("Subscriber"), None, None),
            person(Some("Subscriber"), None, None),
            person(None, None, None),
        ]);
        let stats = user_stats(&t).unwrap();
        assert_eq!(
            stats.user_types,
            vec![
                CategoryCount {
                    value: "Subscriber".into(),
                    count: 2
                },
                CategoryCount {
                    value: "Customer".into(),
                    count: 1
                },
            ]
        );
        assert!(!stats.has_demographics());
        assert_eq!(stats.genders, None);
        assert_eq!(stats.birth_years, None);
    }

    #[test]
    fn all_gender_categories_are_enumerated() {
        let t = table_with_schema(
            full_schema(),
            vec![
                person(Some("Subscriber"), Some("Male"), Some(1980)),
                person(Some("Subscriber"), Some("Female"), Some(1990)),
                person(Some("Subscriber"), Some("Male"), Some(1990)),
                person(Some("Subscriber"), Some("Unknown"), None),
            ],
        );
        let genders = user_stats(&t).unwrap().genders.unwrap();
        let values: Vec<_> = genders.iter().map(|g| g.value.as_str()).collect();
        assert_eq!(values, ["Male", "Female", "Unknown"]);
    }

    #[test]
    fn birth_years_min_max_mode() {
        let t = table_with_schema(
            full_schema(),
            vec![
                person(Some("Subscriber"), Some("Male"), Some(1975)),
                person(Some("Subscriber"), Some("Male"), Some(1989)),
                person(Some("Subscriber"), Some("Female"), Some(1989)),
                person(Some("Subscriber"), Some("Female"), Some(2001)),
                person(Some("Customer"), None, None),
            ],
        );
        assert_eq!(
            user_stats(&t).unwrap().birth_years,
            Some(BirthYears {
                earliest: 1975,
                most_recent: 2001,
                most_common: 1989,
            })
        );
    }

    #[test]
    fn present_but_empty_columns_are_not_absent() {
        let t = table_with_schema(full_schema(), vec![person(Some("Customer"), None, None)]);
        let stats = user_stats(&t).unwrap();
        assert!(stats.has_demographics());
        assert_eq!(stats.genders, Some(vec![]));
        assert_eq!(stats.birth_years, None);
    }
}

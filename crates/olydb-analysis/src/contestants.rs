//! Contestant listing rows.
//!
//! Some sources publish placeholder names such as `(name withheld)` or
//! `*anonymous*` for contestants who opted out of publication. Those people
//! are left out of public listings.

use std::{cmp::Ordering, collections::HashMap};

use olydb_model::{Country, Person};
use serde::Serialize;

use crate::table::query::{TableRow, contains_ignore_case};

/// One contestant in the people listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContestantRow {
    pub id: String,
    pub name: String,
    pub country_id: String,
    pub country_code: Option<String>,
    /// Falls back to the raw country id when it does not resolve.
    pub country_name: String,
}

/// Whether `name` is a redaction placeholder.
///
/// Only the first character is checked.
///
/// ```
/// # use olydb_analysis::contestants::is_redacted_name;
/// assert!(is_redacted_name("(withheld)"));
/// assert!(is_redacted_name("*anonymous*"));
/// assert!(!is_redacted_name("Name (nickname)"));
/// assert!(!is_redacted_name("Special *person*"));
/// ```
#[must_use]
pub fn is_redacted_name(name: &str) -> bool {
    name.starts_with('(') || name.starts_with('*')
}

/// Builds listing rows for `people`, dropping redacted names.
///
/// Rows keep the input order.
pub fn aggregate_contestants<'a, I>(
    people: I,
    countries: &HashMap<String, Country>,
) -> Vec<ContestantRow>
where
    I: IntoIterator<Item = &'a Person>,
{
    people
        .into_iter()
        .filter(|person| !is_redacted_name(&person.name))
        .map(|person| {
            let country = countries.get(&person.country_id);
            ContestantRow {
                id: person.id.clone(),
                name: person.name.clone(),
                country_id: person.country_id.clone(),
                country_code: country.map(|c| c.code.clone()),
                country_name: country.map_or_else(|| person.country_id.clone(), |c| c.name.clone()),
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContestantColumn {
    Name,
    Country,
}

impl TableRow for ContestantRow {
    type Column = ContestantColumn;

    fn matches(&self, needle: &str) -> bool {
        contains_ignore_case(&self.name, needle) || contains_ignore_case(&self.country_name, needle)
    }

    fn compare(&self, other: &Self, column: ContestantColumn) -> Ordering {
        match column {
            ContestantColumn::Name => self.name.cmp(&other.name),
            ContestantColumn::Country => self
                .country_name
                .cmp(&other.country_name)
                .then_with(|| self.name.cmp(&other.name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        table::query::{SortOrder, SortSpec, TableQuery},
        test_util::{countries, person},
    };

    #[test]
    fn test_end_to_end_redaction() {
        let countries = countries(&[("usa", "United States"), ("chn", "China")]);
        let people = [
            person("p1", "Alice", "country-usa"),
            person("p2", "Bob", "country-chn"),
            person("p3", "(redacted)", "country-usa"),
        ];
        let rows = aggregate_contestants(&people, &countries);
        assert_eq!(
            rows,
            [
                ContestantRow {
                    id: "p1".to_owned(),
                    name: "Alice".to_owned(),
                    country_id: "country-usa".to_owned(),
                    country_code: Some("usa".to_owned()),
                    country_name: "United States".to_owned(),
                },
                ContestantRow {
                    id: "p2".to_owned(),
                    name: "Bob".to_owned(),
                    country_id: "country-chn".to_owned(),
                    country_code: Some("chn".to_owned()),
                    country_name: "China".to_owned(),
                },
            ]
        );
    }

    #[test]
    fn test_prefix_only() {
        let people = [
            person("p1", "*hidden*", "country-usa"),
            person("p2", "Name (nickname)", "country-usa"),
            person("p3", "Special *person*", "country-usa"),
            person("p4", "(x", "country-usa"),
            person("p5", " (leading space)", "country-usa"),
        ];
        let rows = aggregate_contestants(&people, &HashMap::new());
        let ids = rows.iter().map(|r| r.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, ["p2", "p3", "p5"]);
    }

    #[test]
    fn test_keeps_input_order() {
        let people = [
            person("z", "Zed", "country-usa"),
            person("a", "Amy", "country-usa"),
            person("m", "Mo", "country-usa"),
        ];
        let rows = aggregate_contestants(&people, &HashMap::new());
        let names = rows.iter().map(|r| r.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, ["Zed", "Amy", "Mo"]);
    }

    #[test]
    fn test_unresolved_country() {
        let people = [person("p1", "Alice", "country-xyz")];
        let rows = aggregate_contestants(&people, &HashMap::new());
        assert_eq!(rows[0].country_code, None);
        assert_eq!(rows[0].country_name, "country-xyz");
    }

    #[test]
    fn test_empty() {
        assert!(aggregate_contestants(&[], &HashMap::new()).is_empty());
    }

    #[test]
    fn test_query_by_country() {
        let countries = countries(&[("usa", "United States"), ("chn", "China")]);
        let people = [
            person("p1", "Carol", "country-usa"),
            person("p2", "Bob", "country-chn"),
            person("p3", "Alice", "country-usa"),
        ];
        let rows = aggregate_contestants(&people, &countries);
        let query = TableQuery {
            sort: Some(SortSpec {
                column: ContestantColumn::Country,
                order: SortOrder::Ascending,
            }),
            ..TableQuery::default()
        };
        let names = query
            .apply(&rows)
            .rows
            .iter()
            .map(|r| r.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, ["Bob", "Alice", "Carol"]);

        let search = TableQuery::<ContestantColumn> {
            search: "states".to_owned(),
            ..TableQuery::default()
        };
        assert_eq!(search.apply(&rows).total_rows, 2);
    }
}

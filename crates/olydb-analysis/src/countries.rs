//! Country filter options.

use std::collections::{BTreeSet, HashMap};

use olydb_model::Country;
use serde::Serialize;

/// Entry of a country filter dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    /// Country id.
    pub value: String,
    /// Country name, or the raw id when it does not resolve.
    pub label: String,
}

/// Builds filter options for the distinct, non-empty ids in `country_ids`.
///
/// Options are sorted by label, then by id.
///
/// ```
/// # use std::collections::HashMap;
/// # use olydb_analysis::countries::country_filter_options;
/// let ids = ["country-b", "", "country-a", "country-b"];
/// let options = country_filter_options(ids, &HashMap::new());
/// let values = options.iter().map(|o| o.value.as_str()).collect::<Vec<_>>();
/// assert_eq!(values, ["country-a", "country-b"]);
/// ```
pub fn country_filter_options<'a, I>(
    country_ids: I,
    countries: &HashMap<String, Country>,
) -> Vec<FilterOption>
where
    I: IntoIterator<Item = &'a str>,
{
    let ids = country_ids
        .into_iter()
        .filter(|id| !id.is_empty())
        .collect::<BTreeSet<_>>();
    let mut options = ids
        .into_iter()
        .map(|id| FilterOption {
            value: id.to_owned(),
            label: countries
                .get(id)
                .map_or_else(|| id.to_owned(), |c| c.name.clone()),
        })
        .collect::<Vec<_>>();
    options.sort_by(|a, b| a.label.cmp(&b.label).then_with(|| a.value.cmp(&b.value)));
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{countries, person};

    #[test]
    fn test_sorted_by_label() {
        let countries = countries(&[
            ("usa", "United States"),
            ("chn", "China"),
            ("aus", "Australia"),
        ]);
        let people = [
            person("p1", "A", "country-usa"),
            person("p2", "B", "country-chn"),
            person("p3", "C", "country-usa"),
            person("p4", "D", "country-aus"),
        ];
        let ids = people.iter().map(|p| p.country_id.as_str());
        let options = country_filter_options(ids, &countries);
        let labels = options.iter().map(|o| o.label.as_str()).collect::<Vec<_>>();
        assert_eq!(labels, ["Australia", "China", "United States"]);
        assert_eq!(options[1].value, "country-chn");
    }

    #[test]
    fn test_unresolved_uses_id() {
        let countries = countries(&[("zzz", "Aaa Land")]);
        let options = country_filter_options(["country-zzz", "country-bbb"], &countries);
        assert_eq!(
            options,
            [
                FilterOption {
                    value: "country-zzz".to_owned(),
                    label: "Aaa Land".to_owned(),
                },
                FilterOption {
                    value: "country-bbb".to_owned(),
                    label: "country-bbb".to_owned(),
                },
            ]
        );
    }

    #[test]
    fn test_empty() {
        assert!(country_filter_options([], &HashMap::new()).is_empty());
    }
}

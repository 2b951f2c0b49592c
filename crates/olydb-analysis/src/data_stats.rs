//! Dataset-wide statistics for the data overview page.
//!
//! # Year ranges
//!
//! Competition years are rendered compactly: runs of consecutive years
//! collapse to `start-end`, isolated years stand alone, and segments are
//! joined with `, `.
//!
//! ```
//! use olydb_analysis::data_stats::format_year_ranges;
//!
//! assert_eq!(format_year_ranges([2016, 2017, 2018, 2020]), "2016-2018, 2020");
//! assert_eq!(format_year_ranges([]), "");
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::{DateTime, Utc};
use olydb_model::{Competition, Database, Participation, Source, TeamParticipation};
use serde::Serialize;

use crate::awards::{AwardSummary, count_awards};

/// Counts participations per source.
///
/// Every source is present in the result, zero when unused. Participations
/// whose competition does not resolve are not counted anywhere.
pub fn count_participations_by_source<'a, P, T>(
    participations: P,
    team_participations: T,
    competitions: &HashMap<String, Competition>,
) -> BTreeMap<Source, usize>
where
    P: IntoIterator<Item = &'a Participation>,
    T: IntoIterator<Item = &'a TeamParticipation>,
{
    let mut counts = Source::ALL
        .into_iter()
        .map(|source| (source, 0))
        .collect::<BTreeMap<_, _>>();

    let competition_ids = participations
        .into_iter()
        .map(|p| p.competition_id.as_str())
        .chain(
            team_participations
                .into_iter()
                .map(|p| p.competition_id.as_str()),
        );
    for competition_id in competition_ids {
        if let Some(competition) = competitions.get(competition_id) {
            *counts.entry(competition.source).or_default() += 1;
        }
    }
    counts
}

/// Groups competition years by source.
pub fn collect_years_by_source<'a, I>(competitions: I) -> BTreeMap<Source, BTreeSet<i32>>
where
    I: IntoIterator<Item = &'a Competition>,
{
    let mut years = BTreeMap::<Source, BTreeSet<i32>>::new();
    for competition in competitions {
        years
            .entry(competition.source)
            .or_default()
            .insert(competition.year);
    }
    years
}

/// Formats years as compact ranges. Input order and duplicates do not matter.
pub fn format_year_ranges<I>(years: I) -> String
where
    I: IntoIterator<Item = i32>,
{
    let years = years.into_iter().collect::<BTreeSet<_>>();

    let mut runs: Vec<(i32, i32)> = vec![];
    for year in years {
        match runs.last_mut() {
            Some((_, end)) if *end + 1 == year => *end = year,
            _ => runs.push((year, year)),
        }
    }

    let segments = runs.into_iter().map(format_run).collect::<Vec<_>>();
    segments.join(", ")
}

fn format_run((start, end): (i32, i32)) -> String {
    if start == end {
        start.to_string()
    } else {
        format!("{start}-{end}")
    }
}

/// Formats each source's years with [`format_year_ranges`].
#[must_use]
pub fn format_years_by_source(
    years_by_source: &BTreeMap<Source, BTreeSet<i32>>,
) -> BTreeMap<Source, String> {
    years_by_source
        .iter()
        .map(|(source, years)| (*source, format_year_ranges(years.iter().copied())))
        .collect()
}

/// Span of competition years; all zero when there are no competitions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearRange {
    pub min_year: i32,
    pub max_year: i32,
    /// `max_year - min_year + 1`
    pub year_span: i32,
}

pub fn get_year_range<'a, I>(competitions: I) -> YearRange
where
    I: IntoIterator<Item = &'a Competition>,
{
    let bounds = competitions
        .into_iter()
        .fold(None, |bounds: Option<(i32, i32)>, c| match bounds {
            None => Some((c.year, c.year)),
            Some((min, max)) => Some((min.min(c.year), max.max(c.year))),
        });
    match bounds {
        Some((min_year, max_year)) => YearRange {
            min_year,
            max_year,
            year_span: max_year - min_year + 1,
        },
        None => YearRange::default(),
    }
}

/// Summary shown on the data overview page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataStats {
    pub version: String,
    pub last_updated: DateTime<Utc>,
    pub total_countries: usize,
    pub total_competitions: usize,
    pub total_people: usize,
    pub total_participations: usize,
    pub total_team_participations: usize,
    pub participations_by_source: BTreeMap<Source, usize>,
    pub years_by_source: BTreeMap<Source, String>,
    pub year_range: YearRange,
    pub awards: AwardSummary,
}

/// Computes the overview statistics of a whole snapshot.
#[must_use]
pub fn calculate_data_stats(db: &Database) -> DataStats {
    let years_by_source = collect_years_by_source(db.competitions.values());
    DataStats {
        version: db.version.clone(),
        last_updated: db.last_updated,
        total_countries: db.countries.len(),
        total_competitions: db.competitions.len(),
        total_people: db.people.len(),
        total_participations: db.participations.len(),
        total_team_participations: db.team_participations.len(),
        participations_by_source: count_participations_by_source(
            db.participations.values(),
            db.team_participations.values(),
            &db.competitions,
        ),
        years_by_source: format_years_by_source(&years_by_source),
        year_range: get_year_range(db.competitions.values()),
        awards: count_awards(db.participations.values()),
    }
}

#[cfg(test)]
mod tests {
    use olydb_model::Award;

    use super::*;
    use crate::test_util::{competition, countries, participation, person};

    fn competitions(list: &[(Source, i32)]) -> HashMap<String, Competition> {
        list.iter()
            .map(|&(source, year)| {
                let c = competition(source, year, 6);
                (c.id.clone(), c)
            })
            .collect()
    }

    #[test]
    fn test_format_year_ranges() {
        assert_eq!(
            format_year_ranges([2016, 2017, 2018, 2020, 2025]),
            "2016-2018, 2020, 2025"
        );
        assert_eq!(format_year_ranges([2020]), "2020");
        assert_eq!(format_year_ranges([2021, 2020]), "2020-2021");
        assert_eq!(format_year_ranges([2019, 2017, 2019, 2018]), "2017-2019");
        assert_eq!(format_year_ranges([1, 3, 5]), "1, 3, 5");
    }

    #[test]
    fn test_years_by_source() {
        let competitions = competitions(&[
            (Source::Imo, 2018),
            (Source::Imo, 2016),
            (Source::Imo, 2017),
            (Source::Imo, 2020),
            (Source::Egmo, 2024),
        ]);
        let years = collect_years_by_source(competitions.values());
        assert_eq!(years.len(), 2);
        assert_eq!(
            years[&Source::Imo].iter().copied().collect::<Vec<_>>(),
            [2016, 2017, 2018, 2020]
        );

        let formatted = format_years_by_source(&years);
        assert_eq!(formatted[&Source::Imo], "2016-2018, 2020");
        assert_eq!(formatted[&Source::Egmo], "2024");
        assert!(!formatted.contains_key(&Source::Rmm));
    }

    #[test]
    fn test_get_year_range() {
        let competitions = competitions(&[
            (Source::Imo, 2001),
            (Source::Rmm, 2019),
            (Source::Egmo, 2012),
        ]);
        assert_eq!(
            get_year_range(competitions.values()),
            YearRange {
                min_year: 2001,
                max_year: 2019,
                year_span: 19,
            }
        );
        assert_eq!(get_year_range([]), YearRange::default());
        assert_eq!(get_year_range([]).year_span, 0);
    }

    #[test]
    fn test_count_participations_by_source() {
        let competitions = competitions(&[(Source::Imo, 2024), (Source::Egmo, 2024)]);
        let participations = [
            participation("IMO-2024", "a", "country-usa", &[], None),
            participation("IMO-2024", "b", "country-usa", &[], None),
            participation("EGMO-2024", "c", "country-usa", &[], None),
            participation("IMO-1900", "d", "country-usa", &[], None),
        ];
        let teams = [TeamParticipation {
            id: "EGMO-2024-country-usa".to_owned(),
            competition_id: "EGMO-2024".to_owned(),
            country_id: "country-usa".to_owned(),
            problem_scores: vec![],
            total_score: 0,
            rank: None,
        }];

        let counts = count_participations_by_source(&participations, [], &competitions);
        assert_eq!(counts.len(), Source::ALL.len());
        assert_eq!(counts[&Source::Imo], 2);
        assert_eq!(counts[&Source::Egmo], 1);
        assert_eq!(counts[&Source::Pamo], 0);

        let counts = count_participations_by_source(&participations, &teams, &competitions);
        assert_eq!(counts[&Source::Egmo], 2);
        assert_eq!(counts.values().sum::<usize>(), 4);
    }

    #[test]
    fn test_calculate_data_stats() {
        let competitions = competitions(&[
            (Source::Imo, 2023),
            (Source::Imo, 2024),
            (Source::Egmo, 2024),
        ]);
        let participations = [
            participation("IMO-2024", "a", "country-usa", &[], Some(Award::Gold)),
            participation("IMO-2023", "a", "country-usa", &[], Some(Award::Silver)),
            participation("EGMO-2024", "b", "country-usa", &[], None),
        ]
        .into_iter()
        .map(|p| (p.id.clone(), p))
        .collect();
        let db = Database {
            version: "test".to_owned(),
            last_updated: DateTime::parse_from_rfc3339("2025-07-20T12:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            countries: countries(&[("usa", "United States")]),
            competitions,
            people: [
                person("a", "Alice", "country-usa"),
                person("b", "Beth", "country-usa"),
            ]
            .into_iter()
            .map(|p| (p.id.clone(), p))
            .collect(),
            participations,
            team_participations: HashMap::new(),
        };

        let stats = calculate_data_stats(&db);
        assert_eq!(stats.total_countries, 1);
        assert_eq!(stats.total_competitions, 3);
        assert_eq!(stats.total_people, 2);
        assert_eq!(stats.total_participations, 3);
        assert_eq!(stats.participations_by_source[&Source::Imo], 2);
        assert_eq!(stats.participations_by_source[&Source::Egmo], 1);
        assert_eq!(stats.years_by_source[&Source::Imo], "2023-2024");
        assert_eq!(stats.year_range.year_span, 2);
        assert_eq!(stats.awards.counts.gold, 1);
        assert_eq!(stats.awards.counts.silver, 1);
        assert_eq!(stats.awards.no_award, 1);
        assert_eq!(stats.last_updated, db.last_updated);

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["participations_by_source"]["IMO"], 2);
        assert_eq!(json["years_by_source"]["EGMO"], "2024");
    }
}

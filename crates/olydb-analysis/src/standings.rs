//! Country standings for a competition.
//!
//! Standings rank countries by the summed total score of their contestants.
//!
//! # Algorithm
//!
//! 1. Group participations by country, skipping those without a country
//! 2. Per country, accumulate per-problem totals (indices `< num_problems`
//!    with a recorded score), the total score, contestant count and medals
//! 3. Sort by total score descending; ties are broken by country id ascending
//! 4. Assign 1-based ranks in sorted order

use std::{
    cmp::Ordering,
    collections::{BTreeMap, HashMap},
};

use olydb_model::{Country, Participation};
use serde::Serialize;

use crate::{
    awards::AwardCounts,
    table::query::{TableRow, contains_ignore_case},
};

/// Aggregate result of one country at one competition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandingRow {
    /// 1-based position.
    pub rank: usize,
    pub country_id: String,
    /// `None` when the country id does not resolve.
    pub country_code: Option<String>,
    /// Falls back to the raw country id when it does not resolve.
    pub country_name: String,
    /// Summed score per problem; always `num_problems` entries.
    pub problem_totals: Vec<i64>,
    pub total_score: i64,
    pub participant_count: usize,
    pub awards: AwardCounts,
}

#[derive(Debug)]
struct CountryAccumulator {
    problem_totals: Vec<i64>,
    total_score: i64,
    participant_count: usize,
    awards: AwardCounts,
}

impl CountryAccumulator {
    fn new(num_problems: usize) -> Self {
        Self {
            problem_totals: vec![0; num_problems],
            total_score: 0,
            participant_count: 0,
            awards: AwardCounts::new(),
        }
    }

    fn add(&mut self, participation: &Participation) {
        // zip stops at num_problems, so extra scores are ignored
        for (total, score) in self
            .problem_totals
            .iter_mut()
            .zip(&participation.problem_scores)
        {
            if let Some(score) = score {
                *total += i64::from(*score);
            }
        }
        self.total_score += i64::from(participation.total_score);
        self.participant_count += 1;
        self.awards.increment(participation.award);
    }
}

/// Computes ranked country standings.
///
/// Countries without participations never appear. Unresolvable country ids
/// are kept, with the raw id as name and no code. Sums are accumulated as
/// `i64`, so no snapshot of `i32` scores can overflow them.
///
/// ```
/// # use std::collections::HashMap;
/// # use olydb_analysis::standings::calculate_country_standings;
/// let standings = calculate_country_standings(std::iter::empty(), &HashMap::new(), 6);
/// assert!(standings.is_empty());
/// ```
pub fn calculate_country_standings<'a, I>(
    participations: I,
    countries: &HashMap<String, Country>,
    num_problems: usize,
) -> Vec<StandingRow>
where
    I: IntoIterator<Item = &'a Participation>,
{
    let mut groups = BTreeMap::<&str, CountryAccumulator>::new();
    for participation in participations {
        let Some(country_id) = participation.country() else {
            continue;
        };
        groups
            .entry(country_id)
            .or_insert_with(|| CountryAccumulator::new(num_problems))
            .add(participation);
    }

    let mut rows = groups
        .into_iter()
        .map(|(country_id, acc)| {
            let country = countries.get(country_id);
            StandingRow {
                rank: 0,
                country_id: country_id.to_owned(),
                country_code: country.map(|c| c.code.clone()),
                country_name: country.map_or_else(|| country_id.to_owned(), |c| c.name.clone()),
                problem_totals: acc.problem_totals,
                total_score: acc.total_score,
                participant_count: acc.participant_count,
                awards: acc.awards,
            }
        })
        .collect::<Vec<_>>();

    // groups iterate in id order and the sort is stable, so ties stay id-ascending
    rows.sort_by(|a, b| b.total_score.cmp(&a.total_score));
    for (i, row) in rows.iter_mut().enumerate() {
        row.rank = i + 1;
    }
    rows
}

/// Sortable columns of [`StandingRow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandingColumn {
    Rank,
    Country,
    TotalScore,
    Participants,
    Gold,
    Silver,
    Bronze,
    HonourableMention,
    /// Zero-based problem index; rows without that problem sort as zero.
    Problem(usize),
}

impl TableRow for StandingRow {
    type Column = StandingColumn;

    fn matches(&self, needle: &str) -> bool {
        contains_ignore_case(&self.country_name, needle)
            || self
                .country_code
                .as_deref()
                .is_some_and(|code| contains_ignore_case(code, needle))
    }

    fn compare(&self, other: &Self, column: StandingColumn) -> Ordering {
        match column {
            StandingColumn::Rank => self.rank.cmp(&other.rank),
            StandingColumn::Country => self.country_name.cmp(&other.country_name),
            StandingColumn::TotalScore => self.total_score.cmp(&other.total_score),
            StandingColumn::Participants => self.participant_count.cmp(&other.participant_count),
            StandingColumn::Gold => self.awards.gold.cmp(&other.awards.gold),
            StandingColumn::Silver => self.awards.silver.cmp(&other.awards.silver),
            StandingColumn::Bronze => self.awards.bronze.cmp(&other.awards.bronze),
            StandingColumn::HonourableMention => self
                .awards
                .honourable_mention
                .cmp(&other.awards.honourable_mention),
            StandingColumn::Problem(i) => {
                let score = |row: &Self| row.problem_totals.get(i).copied().unwrap_or(0);
                score(self).cmp(&score(other))
            }
        }
    }
}

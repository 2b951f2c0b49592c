//! Entity records of a results snapshot.
//!
//! All entities are immutable values identified by their `id`. References
//! between them are plain id strings and may dangle; consumers fall back to
//! showing the raw id when a lookup fails.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::vocabulary::{Award, Source, deserialize_award_lenient};

/// A participating country or territory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// `country-{code}`
    pub id: String,
    /// Source-provided code, opaque.
    pub code: String,
    pub name: String,
}

impl Country {
    #[must_use]
    pub fn make_id(code: &str) -> String {
        format!("country-{code}")
    }
}

/// One edition of an olympiad.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competition {
    /// `{source}-{year}`
    pub id: String,
    pub source: Source,
    pub year: i32,
    #[serde(default)]
    pub edition: Option<u32>,
    #[serde(default)]
    pub host_country_id: Option<String>,
    pub num_problems: u32,
    pub max_score_per_problem: u32,
}

impl Competition {
    /// ```
    /// # use olydb_model::{Competition, Source};
    /// assert_eq!(Competition::make_id(Source::Egmo, 2024), "EGMO-2024");
    /// ```
    #[must_use]
    pub fn make_id(source: Source, year: i32) -> String {
        format!("{source}-{year}")
    }

    /// Highest achievable total score, or `None` when it does not fit in `u32`.
    #[must_use]
    pub fn max_score(&self) -> Option<u32> {
        self.num_problems.checked_mul(self.max_score_per_problem)
    }

    /// Number of problems, as an index bound.
    #[must_use]
    pub fn problem_count(&self) -> usize {
        self.num_problems as usize
    }
}

/// A contestant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    /// Display name. Names starting with `(` or `*` are redacted placeholders.
    pub name: String,
    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(default)]
    pub family_name: Option<String>,
    pub country_id: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    /// External identifiers keyed by the system that issued them.
    #[serde(default)]
    pub source_ids: HashMap<String, String>,
}

/// A contestant's result at one competition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participation {
    /// `{competition_id}-{person_id}`
    pub id: String,
    pub competition_id: String,
    pub person_id: String,
    /// Empty when the country is unknown.
    #[serde(default)]
    pub country_id: String,
    /// Per-problem scores; `None` for an unrecorded score. The length may
    /// differ from the competition's `num_problems`.
    #[serde(default)]
    pub problem_scores: Vec<Option<i32>>,
    pub total_score: i32,
    #[serde(default)]
    pub rank: Option<u32>,
    #[serde(default)]
    pub regional_rank: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_award_lenient")]
    pub award: Option<Award>,
    #[serde(default)]
    pub extra_award: Option<String>,
    #[serde(default)]
    pub source_contestant_id: Option<String>,
}

impl Participation {
    #[must_use]
    pub fn make_id(competition_id: &str, person_id: &str) -> String {
        format!("{competition_id}-{person_id}")
    }

    /// Returns the country id, or `None` when it is empty.
    #[must_use]
    pub fn country(&self) -> Option<&str> {
        Some(self.country_id.as_str()).filter(|id| !id.is_empty())
    }
}

/// A country team's result at a team competition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamParticipation {
    pub id: String,
    pub competition_id: String,
    pub country_id: String,
    #[serde(default)]
    pub problem_scores: Vec<Option<i32>>,
    pub total_score: i32,
    #[serde(default)]
    pub rank: Option<u32>,
}

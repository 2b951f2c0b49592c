//! Aggregations behind the olympiad results views.
//!
//! Every function here is a pure reduction over borrowed snapshot records:
//! nothing is mutated, nothing is cached, and missing or dangling data
//! degrades to a documented default instead of an error.
//!
//! # Modules
//!
//! - [`awards`]: Medal tallies
//! - [`standings`]: Ranked per-country results of a competition
//! - [`distribution`]: Award-stacked score histogram and per-problem correlations
//! - [`contestants`]: People listing with redacted names removed
//! - [`countries`]: Country filter options
//! - [`data_stats`]: Snapshot-wide counts and year ranges
//! - [`table`]: Search / sort / pagination and table body state
//!
//! # Examples
//!
//! ## Ranking countries
//!
//! ```
//! use std::collections::HashMap;
//!
//! use olydb_analysis::standings::calculate_country_standings;
//! use olydb_model::{Award, Participation};
//!
//! let result = |person: &str, country: &str, scores: &[i32], award| Participation {
//!     id: Participation::make_id("IMO-2024", person),
//!     competition_id: "IMO-2024".into(),
//!     person_id: person.into(),
//!     country_id: country.into(),
//!     problem_scores: scores.iter().copied().map(Some).collect(),
//!     total_score: scores.iter().sum(),
//!     rank: None,
//!     regional_rank: None,
//!     award,
//!     extra_award: None,
//!     source_contestant_id: None,
//! };
//! let participations = [
//!     result("a", "country-usa", &[7, 7], Some(Award::Gold)),
//!     result("b", "country-chn", &[7, 7], Some(Award::Gold)),
//!     result("c", "country-chn", &[7, 0], None),
//! ];
//!
//! let standings = calculate_country_standings(&participations, &HashMap::new(), 2);
//! assert_eq!(standings[0].country_id, "country-chn");
//! assert_eq!(standings[0].problem_totals, [14, 7]);
//! assert_eq!(standings[1].rank, 2);
//! ```
//!
//! ## Paging a table
//!
//! ```
//! use olydb_analysis::{
//!     contestants::{ContestantColumn, ContestantRow},
//!     table::query::{SortOrder, SortSpec, TableQuery},
//! };
//!
//! let query = TableQuery {
//!     search: "ali".to_owned(),
//!     sort: Some(SortSpec { column: ContestantColumn::Name, order: SortOrder::Ascending }),
//!     page_index: 0,
//!     page_size: 50,
//! };
//! let rows: Vec<ContestantRow> = vec![];
//! let page = query.apply(&rows);
//! assert_eq!(page.total_rows, 0);
//! ```

pub mod awards;
pub mod contestants;
pub mod countries;
pub mod data_stats;
pub mod distribution;
pub mod standings;
pub mod table;

#[cfg(test)]
mod test_util;

//! Data model for olympiad results snapshots.
//!
//! A snapshot ([`Database`]) is loaded once and never mutated. It holds four
//! keyed mappings (countries, competitions, people, participations) plus
//! optional team results.
//!
//! # Data Structure
//!
//! ```text
//! Database
//! ├─ version, last_updated
//! ├─ countries:      id -> Country
//! ├─ competitions:   id -> Competition ─ source, year, num_problems, ...
//! ├─ people:         id -> Person ─ country_id
//! ├─ participations: id -> Participation ─ competition_id, person_id, country_id,
//! │                                        problem_scores, total_score, award
//! └─ team_participations (optional)
//! ```
//!
//! # Examples
//!
//! ```
//! use olydb_model::Database;
//!
//! let json = r#"{
//!     "version": "demo",
//!     "last_updated": "2025-01-01T00:00:00Z",
//!     "countries": {},
//!     "competitions": {},
//!     "people": {},
//!     "participations": {}
//! }"#;
//! let db = Database::from_reader(json.as_bytes()).unwrap();
//! assert!(db.participations.is_empty());
//! ```

pub use self::{database::*, entity::*, vocabulary::*};

mod database;
mod entity;
mod vocabulary;

//! The root snapshot container and its loader.
//!
//! # Serialization
//!
//! ```json
//! {
//!   "version": "2025.1",
//!   "last_updated": "2025-07-20T12:00:00Z",
//!   "countries": { "country-usa": { "id": "country-usa", "code": "usa", "name": "United States" } },
//!   "competitions": { ... },
//!   "people": { ... },
//!   "participations": { ... }
//! }
//! ```
//!
//! `team_participations` may be omitted.

use std::{
    collections::HashMap,
    fs::File,
    io::{BufReader, Read},
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::{Competition, Country, Participation, Person, TeamParticipation};

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum LoadDatabaseError {
    #[display("failed to open database file {}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[display("failed to parse database JSON")]
    Parse { source: serde_json::Error },
}

/// Static results snapshot.
///
/// Each mapping is keyed by entity id and has no meaningful iteration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Database {
    pub version: String,
    pub last_updated: DateTime<Utc>,
    pub countries: HashMap<String, Country>,
    pub competitions: HashMap<String, Competition>,
    pub people: HashMap<String, Person>,
    pub participations: HashMap<String, Participation>,
    #[serde(default)]
    pub team_participations: HashMap<String, TeamParticipation>,
}

impl Database {
    /// Parses a snapshot from a JSON reader.
    pub fn from_reader<R>(reader: R) -> Result<Self, LoadDatabaseError>
    where
        R: Read,
    {
        let db: Self = serde_json::from_reader(reader)
            .map_err(|source| LoadDatabaseError::Parse { source })?;
        tracing::debug!(
            version = %db.version,
            countries = db.countries.len(),
            competitions = db.competitions.len(),
            people = db.people.len(),
            participations = db.participations.len(),
            team_participations = db.team_participations.len(),
            "loaded database snapshot"
        );
        Ok(db)
    }

    /// Opens and parses a snapshot file.
    pub fn from_path<P>(path: P) -> Result<Self, LoadDatabaseError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadDatabaseError::Open {
            path: path.to_owned(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    #[must_use]
    pub fn country(&self, id: &str) -> Option<&Country> {
        self.countries.get(id)
    }

    #[must_use]
    pub fn competition(&self, id: &str) -> Option<&Competition> {
        self.competitions.get(id)
    }

    #[must_use]
    pub fn person(&self, id: &str) -> Option<&Person> {
        self.people.get(id)
    }

    /// Participations at `competition_id`, ordered by participation id.
    #[must_use]
    pub fn participations_for_competition(&self, competition_id: &str) -> Vec<&Participation> {
        let mut participations = self
            .participations
            .values()
            .filter(|p| p.competition_id == competition_id)
            .collect::<Vec<_>>();
        participations.sort_by(|a, b| a.id.cmp(&b.id));
        participations
    }

    /// Competitions, newest first; same-year competitions ordered by source.
    #[must_use]
    pub fn competitions_sorted(&self) -> Vec<&Competition> {
        let mut competitions = self.competitions.values().collect::<Vec<_>>();
        competitions.sort_by(|a, b| {
            b.year
                .cmp(&a.year)
                .then(a.source.cmp(&b.source))
                .then_with(|| a.id.cmp(&b.id))
        });
        competitions
    }

    /// People, ordered by id.
    #[must_use]
    pub fn people_sorted(&self) -> Vec<&Person> {
        let mut people = self.people.values().collect::<Vec<_>>();
        people.sort_by(|a, b| a.id.cmp(&b.id));
        people
    }
}

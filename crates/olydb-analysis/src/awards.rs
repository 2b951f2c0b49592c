//! Medal tallies.

use olydb_model::{Award, Participation};
use serde::Serialize;

/// Number of awards per medal tier.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AwardCounts {
    pub gold: usize,
    pub silver: usize,
    pub bronze: usize,
    pub honourable_mention: usize,
}

impl AwardCounts {
    /// Returns a zeroed tally.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bumps the bucket for `award`; `None` leaves the tally unchanged.
    pub fn increment(&mut self, award: Option<Award>) {
        match award {
            Some(Award::Gold) => self.gold += 1,
            Some(Award::Silver) => self.silver += 1,
            Some(Award::Bronze) => self.bronze += 1,
            Some(Award::HonourableMention) => self.honourable_mention += 1,
            None => {}
        }
    }

    /// Count for a single tier.
    #[must_use]
    pub fn get(&self, award: Award) -> usize {
        match award {
            Award::Gold => self.gold,
            Award::Silver => self.silver,
            Award::Bronze => self.bronze,
            Award::HonourableMention => self.honourable_mention,
        }
    }

    /// Sum over all tiers.
    #[must_use]
    pub fn total(&self) -> usize {
        self.gold + self.silver + self.bronze + self.honourable_mention
    }
}

/// Medal tally plus the number of participations without an award.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AwardSummary {
    pub counts: AwardCounts,
    pub no_award: usize,
}

/// Tallies the awards of `participations`.
///
/// ```
/// # use olydb_analysis::awards::count_awards;
/// let summary = count_awards(std::iter::empty());
/// assert_eq!(summary.counts.total(), 0);
/// assert_eq!(summary.no_award, 0);
/// ```
pub fn count_awards<'a, I>(participations: I) -> AwardSummary
where
    I: IntoIterator<Item = &'a Participation>,
{
    participations
        .into_iter()
        .fold(AwardSummary::default(), |mut summary, p| {
            if p.award.is_some() {
                summary.counts.increment(p.award);
            } else {
                summary.no_award += 1;
            }
            summary
        })
}

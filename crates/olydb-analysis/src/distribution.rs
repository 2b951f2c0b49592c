//! Score distributions of a single competition.

use olydb_model::{Award, Competition, Participation};
use olydb_stats::{
    correlation::CorrelationMatrix,
    descriptive::{mean, std_dev},
};
use serde::Serialize;

/// Largest maximum score a histogram is built for.
pub const MAX_BUCKET_SCORE: u32 = 10_000;

/// Contestant counts at one total score, split by award.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBucket {
    pub score: u32,
    pub gold: usize,
    pub silver: usize,
    pub bronze: usize,
    /// Honourable mentions.
    pub hm: usize,
    /// Contestants without an award.
    pub none: usize,
    /// Sum of the five counts above.
    pub total: usize,
}

impl ScoreBucket {
    fn empty(score: u32) -> Self {
        Self {
            score,
            gold: 0,
            silver: 0,
            bronze: 0,
            hm: 0,
            none: 0,
            total: 0,
        }
    }

    fn add(&mut self, award: Option<Award>) {
        match award {
            Some(Award::Gold) => self.gold += 1,
            Some(Award::Silver) => self.silver += 1,
            Some(Award::Bronze) => self.bronze += 1,
            Some(Award::HonourableMention) => self.hm += 1,
            None => self.none += 1,
        }
        self.total += 1;
    }
}

/// Builds the award-stacked histogram of total scores.
///
/// There is one bucket for every integer score in `0..=max_score`, in
/// ascending order, even when empty. Totals outside that range are dropped.
/// A competition whose maximum score overflows or exceeds
/// [`MAX_BUCKET_SCORE`] gets no buckets at all.
///
/// ```
/// # use olydb_analysis::distribution::calculate_score_distribution;
/// # use olydb_model::{Competition, Source};
/// let competition = Competition {
///     id: "IMO-2024".into(),
///     source: Source::Imo,
///     year: 2024,
///     edition: None,
///     host_country_id: None,
///     num_problems: 6,
///     max_score_per_problem: 7,
/// };
/// let buckets = calculate_score_distribution(std::iter::empty(), &competition);
/// assert_eq!(buckets.len(), 43);
/// assert!(buckets.iter().all(|b| b.total == 0));
/// ```
pub fn calculate_score_distribution<'a, I>(
    participations: I,
    competition: &Competition,
) -> Vec<ScoreBucket>
where
    I: IntoIterator<Item = &'a Participation>,
{
    let Some(max_score) = competition
        .max_score()
        .filter(|&max| max <= MAX_BUCKET_SCORE)
    else {
        return vec![];
    };
    let mut buckets = (0..=max_score).map(ScoreBucket::empty).collect::<Vec<_>>();

    for participation in participations {
        let Ok(score) = usize::try_from(participation.total_score) else {
            continue;
        };
        if let Some(bucket) = buckets.get_mut(score) {
            bucket.add(participation.award);
        }
    }
    buckets
}

/// Correlates per-problem scores across the contestants of a competition.
///
/// Entry `(i, j)` is the Pearson correlation between problem `i` and problem
/// `j`. Unrecorded scores count as zero.
#[must_use]
pub fn problem_correlations(
    participations: &[&Participation],
    competition: &Competition,
) -> CorrelationMatrix {
    let columns = problem_columns(participations, competition);
    CorrelationMatrix::from_columns(&columns)
}

/// Score statistics of one problem.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProblemSummary {
    /// Zero-based problem index.
    pub problem: usize,
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    /// Contestants with the maximum score on this problem.
    pub full_scores: usize,
}

fn problem_columns(participations: &[&Participation], competition: &Competition) -> Vec<Vec<f64>> {
    (0..competition.problem_count())
        .map(|problem| {
            participations
                .iter()
                .map(|p| {
                    p.problem_scores
                        .get(problem)
                        .copied()
                        .flatten()
                        .map_or(0.0, f64::from)
                })
                .collect()
        })
        .collect()
}

/// Per-problem mean, spread and full-score count. Unrecorded scores count as zero.
#[must_use]
pub fn problem_summaries(
    participations: &[&Participation],
    competition: &Competition,
) -> Vec<ProblemSummary> {
    let full = f64::from(competition.max_score_per_problem);
    problem_columns(participations, competition)
        .into_iter()
        .enumerate()
        .map(|(problem, column)| {
            let mean = mean(&column);
            ProblemSummary {
                problem,
                mean,
                std_dev: std_dev(&column, mean),
                full_scores: column.iter().filter(|&&score| score >= full).count(),
            }
        })
        .collect()
}

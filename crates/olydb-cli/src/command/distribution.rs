use std::io::Write as _;

use clap::Args;
use olydb_analysis::{
    distribution::{ScoreBucket, calculate_score_distribution},
    table::body::TableBody,
};
use olydb_model::Competition;

use crate::{
    command::{DatabaseArg, OutputArg},
    util::{self, Output},
    view::table::{self, Column},
};

const BAR_WIDTH: usize = 40;

#[derive(Debug, Clone, Args)]
pub(crate) struct DistributionArg {
    #[clap(flatten)]
    pub db: DatabaseArg,

    /// Competition id, such as `IMO-2024`
    #[arg(long)]
    pub competition: String,

    /// Hide scores nobody reached
    #[arg(long)]
    pub skip_empty: bool,

    #[clap(flatten)]
    pub output: OutputArg,
}

pub(crate) fn run(arg: &DistributionArg) -> anyhow::Result<()> {
    let db = util::read_database(&arg.db.database)?;
    let competition = util::find_competition(&db, &arg.competition)?;
    let participations = db.participations_for_competition(&competition.id);

    let mut buckets = calculate_score_distribution(participations.iter().copied(), competition);
    if buckets.is_empty() {
        tracing::warn!(
            competition = %competition.id,
            num_problems = competition.num_problems,
            max_score_per_problem = competition.max_score_per_problem,
            "maximum score too large for a histogram"
        );
    } else if let Some(dropped) = participations
        .len()
        .checked_sub(buckets.iter().map(|b| b.total).sum())
        .filter(|&dropped| dropped > 0)
    {
        tracing::warn!(
            competition = %competition.id,
            dropped,
            "total scores outside the score range were dropped"
        );
    }
    if arg.skip_empty {
        buckets.retain(|b| b.total > 0);
    }

    if arg.output.json {
        return Output::open(arg.output.output.clone())?.write_json(&buckets);
    }

    Output::open(arg.output.output.clone())?
        .write_report("distribution", |out| write_distribution(out, competition, &buckets))
}

fn bar(count: usize, max_count: usize) -> String {
    if max_count == 0 {
        return String::new();
    }
    "#".repeat((count * BAR_WIDTH).div_ceil(max_count))
}

fn write_distribution<W>(
    out: &mut W,
    competition: &Competition,
    buckets: &[ScoreBucket],
) -> std::io::Result<()>
where
    W: std::io::Write,
{
    match competition.max_score() {
        Some(max) => writeln!(out, "Score distribution of {} (max {max})", competition.id)?,
        None => writeln!(out, "Score distribution of {}", competition.id)?,
    }
    writeln!(out)?;

    let columns = [
        Column::right("Score"),
        Column::right("G"),
        Column::right("S"),
        Column::right("B"),
        Column::right("HM"),
        Column::right("None"),
        Column::right("Total"),
        Column::left(""),
    ];
    let max_count = buckets.iter().map(|b| b.total).max().unwrap_or(0);
    let body = TableBody::new(buckets, columns.len())
        .no_data_message("No scores")
        .render();
    table::write_table(out, &columns, &body, |b| {
        vec![
            b.score.to_string(),
            b.gold.to_string(),
            b.silver.to_string(),
            b.bronze.to_string(),
            b.hm.to_string(),
            b.none.to_string(),
            b.total.to_string(),
            bar(b.total, max_count),
        ]
    })
}

#[cfg(test)]
mod tests {
    use olydb_model::Source;

    use super::*;

    #[test]
    fn test_bar_scales_to_largest_bucket() {
        assert_eq!(bar(0, 0), "");
        assert_eq!(bar(10, 10).len(), BAR_WIDTH);
        assert_eq!(bar(5, 10).len(), BAR_WIDTH / 2);
        assert_eq!(bar(1, 1000).len(), 1);
        assert_eq!(bar(0, 1000).len(), 0);
    }

    #[test]
    fn test_write_distribution() {
        let competition = Competition {
            id: "EGMO-2024".to_owned(),
            source: Source::Egmo,
            year: 2024,
            edition: None,
            host_country_id: None,
            num_problems: 1,
            max_score_per_problem: 2,
        };
        let buckets = [
            ScoreBucket {
                score: 0,
                gold: 0,
                silver: 0,
                bronze: 0,
                hm: 0,
                none: 2,
                total: 2,
            },
            ScoreBucket {
                score: 2,
                gold: 1,
                silver: 0,
                bronze: 0,
                hm: 0,
                none: 0,
                total: 1,
            },
        ];
        let mut out = Vec::new();
        write_distribution(&mut out, &competition, &buckets).unwrap();
        let text = String::from_utf8(out).unwrap();
        let rows = text
            .lines()
            .map(|line| line.split_whitespace().collect::<Vec<_>>())
            .collect::<Vec<_>>();

        assert_eq!(
            rows[0],
            ["Score", "distribution", "of", "EGMO-2024", "(max", "2)"]
        );
        assert_eq!(rows[4][..7], ["0", "0", "0", "0", "0", "2", "2"]);
        assert_eq!(rows[4][7].len(), BAR_WIDTH);
        assert_eq!(rows[5][..7], ["2", "1", "0", "0", "0", "0", "1"]);
        assert_eq!(rows[5][7].len(), BAR_WIDTH / 2);
    }

    #[test]
    fn test_write_distribution_without_max_score() {
        let competition = Competition {
            id: "IMO-2024".to_owned(),
            source: Source::Imo,
            year: 2024,
            edition: None,
            host_country_id: None,
            num_problems: 2,
            max_score_per_problem: 3_000_000_000,
        };
        let buckets = calculate_score_distribution(std::iter::empty(), &competition);
        let mut out = Vec::new();
        write_distribution(&mut out, &competition, &buckets).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Score distribution of IMO-2024\n"));
        assert!(text.ends_with("  No scores\n"));
    }
}

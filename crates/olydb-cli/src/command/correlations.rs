use std::io::Write as _;

use clap::Args;
use olydb_analysis::{
    distribution::{ProblemSummary, problem_correlations, problem_summaries},
    table::body::TableBody,
};
use olydb_stats::{
    color::{CellColor, correlation_color},
    correlation::CorrelationMatrix,
};
use serde::Serialize;

use crate::{
    command::{DatabaseArg, OutputArg},
    util::{self, Output},
    view::table::{self, Column},
};

#[derive(Debug, Clone, Args)]
pub(crate) struct CorrelationsArg {
    #[clap(flatten)]
    pub db: DatabaseArg,

    /// Competition id, such as `IMO-2024`
    #[arg(long)]
    pub competition: String,

    /// Use the dark color scheme for heatmap colors in JSON output
    #[arg(long)]
    pub dark: bool,

    #[clap(flatten)]
    pub output: OutputArg,
}

#[derive(Debug, Serialize)]
struct CorrelationsJson<'a> {
    competition_id: &'a str,
    contestants: usize,
    problems: &'a [ProblemSummary],
    correlations: &'a CorrelationMatrix,
    colors: Vec<Vec<CellColor>>,
}

pub(crate) fn run(arg: &CorrelationsArg) -> anyhow::Result<()> {
    let db = util::read_database(&arg.db.database)?;
    let competition = util::find_competition(&db, &arg.competition)?;
    let participations = db.participations_for_competition(&competition.id);
    if participations.is_empty() {
        tracing::warn!(competition = %competition.id, "competition has no participations");
    }

    let summaries = problem_summaries(&participations, competition);
    let matrix = problem_correlations(&participations, competition);

    if arg.output.json {
        let json = CorrelationsJson {
            competition_id: &competition.id,
            contestants: participations.len(),
            problems: &summaries,
            correlations: &matrix,
            colors: heatmap_colors(&matrix, arg.dark),
        };
        return Output::open(arg.output.output.clone())?.write_json(&json);
    }

    Output::open(arg.output.output.clone())?.write_report("correlations", |out| {
        writeln!(
            out,
            "Problems of {} ({} contestants)",
            competition.id,
            participations.len()
        )?;
        writeln!(out)?;
        write_correlations(out, &summaries, &matrix)
    })
}

fn heatmap_colors(matrix: &CorrelationMatrix, is_dark: bool) -> Vec<Vec<CellColor>> {
    matrix
        .rows()
        .map(|row| {
            row.iter()
                .map(|&value| correlation_color(value, is_dark))
                .collect()
        })
        .collect()
}

fn write_correlations<W>(
    out: &mut W,
    summaries: &[ProblemSummary],
    matrix: &CorrelationMatrix,
) -> std::io::Result<()>
where
    W: std::io::Write,
{
    let columns = [
        Column::left("Problem"),
        Column::right("Mean"),
        Column::right("StdDev"),
        Column::right("Full"),
    ];
    let body = TableBody::new(summaries, columns.len())
        .no_data_message("No problems")
        .render();
    table::write_table(out, &columns, &body, |s| {
        vec![
            format!("P{}", s.problem + 1),
            format!("{:.2}", s.mean),
            format!("{:.2}", s.std_dev),
            s.full_scores.to_string(),
        ]
    })?;

    if matrix.size() == 0 {
        return Ok(());
    }
    writeln!(out)?;
    writeln!(out, "Correlations")?;
    let mut columns = vec![Column::left("")];
    columns.extend((1..=matrix.size()).map(|i| Column::right(format!("P{i}"))));
    let rows = matrix.rows().enumerate().collect::<Vec<_>>();
    let body = TableBody::new(&rows, columns.len()).render();
    table::write_table(out, &columns, &body, |(i, row)| {
        let mut cells = vec![format!("P{}", i + 1)];
        cells.extend(row.iter().map(|r| format!("{r:+.2}")));
        cells
    })
}

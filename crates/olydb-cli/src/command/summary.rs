//! Dataset overview

use std::io::Write as _;

use clap::Args;
use olydb_analysis::{
    data_stats::{DataStats, calculate_data_stats},
    table::body::TableBody,
};
use olydb_model::{Award, Source};

use crate::{
    command::{DatabaseArg, OutputArg},
    util::{self, Output},
    view::table::{self, Column},
};

#[derive(Debug, Clone, Args)]
pub(crate) struct SummaryArg {
    #[clap(flatten)]
    pub db: DatabaseArg,

    #[clap(flatten)]
    pub output: OutputArg,
}

struct SourceRow<'a> {
    source: Source,
    participations: usize,
    years: &'a str,
}

pub(crate) fn run(arg: &SummaryArg) -> anyhow::Result<()> {
    let db = util::read_database(&arg.db.database)?;
    let stats = calculate_data_stats(&db);

    if arg.output.json {
        return Output::open(arg.output.output.clone())?.write_json(&stats);
    }

    Output::open(arg.output.output.clone())?
        .write_report("summary", |out| write_summary(out, &stats))
}

fn write_summary<W>(out: &mut W, stats: &DataStats) -> std::io::Result<()>
where
    W: std::io::Write,
{
    writeln!(
        out,
        "Database {} (last updated {})",
        stats.version,
        stats.last_updated.format("%Y-%m-%d %H:%M UTC")
    )?;
    writeln!(out, "==========================================")?;
    writeln!(out)?;
    writeln!(out, "  Countries:           {}", stats.total_countries)?;
    writeln!(out, "  Competitions:        {}", stats.total_competitions)?;
    writeln!(out, "  People:              {}", stats.total_people)?;
    writeln!(out, "  Participations:      {}", stats.total_participations)?;
    writeln!(
        out,
        "  Team participations: {}",
        stats.total_team_participations
    )?;
    let range = stats.year_range;
    if range.year_span > 0 {
        writeln!(
            out,
            "  Years:               {}-{} ({} years)",
            range.min_year, range.max_year, range.year_span
        )?;
    }
    writeln!(out)?;

    let rows = stats
        .participations_by_source
        .iter()
        .map(|(source, participations)| SourceRow {
            source: *source,
            participations: *participations,
            years: stats
                .years_by_source
                .get(source)
                .map_or("", String::as_str),
        })
        .collect::<Vec<_>>();
    let columns = [
        Column::left("Source"),
        Column::right("Participations"),
        Column::left("Years"),
    ];
    writeln!(out, "By Source")?;
    let body = TableBody::new(&rows, columns.len())
        .no_data_message("No sources")
        .render();
    table::write_table(out, &columns, &body, |row| {
        vec![
            row.source.to_string(),
            row.participations.to_string(),
            row.years.to_owned(),
        ]
    })?;
    writeln!(out)?;

    writeln!(out, "Awards")?;
    for award in Award::ALL {
        writeln!(
            out,
            "  {:<20} {:>8}",
            award.to_string(),
            stats.awards.counts.get(award)
        )?;
    }
    writeln!(out, "  {:<20} {:>8}", "(none)", stats.awards.no_award)?;
    Ok(())
}

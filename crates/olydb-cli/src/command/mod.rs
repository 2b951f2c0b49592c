use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use olydb_analysis::table::query::{SortOrder, SortSpec, TableQuery};
use tracing::Level;

use self::{
    contestants::ContestantsArg, correlations::CorrelationsArg, countries::CountriesArg,
    distribution::DistributionArg, standings::StandingsArg, summary::SummaryArg,
};

mod contestants;
mod correlations;
mod countries;
mod distribution;
mod standings;
mod summary;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// What view to print
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Show dataset-wide statistics
    Summary(#[clap(flatten)] SummaryArg),
    /// Show country standings of a competition
    Standings(#[clap(flatten)] StandingsArg),
    /// Show the score distribution of a competition
    Distribution(#[clap(flatten)] DistributionArg),
    /// Show per-problem statistics and correlations of a competition
    Correlations(#[clap(flatten)] CorrelationsArg),
    /// List contestants
    Contestants(#[clap(flatten)] ContestantsArg),
    /// List country filter options
    Countries(#[clap(flatten)] CountriesArg),
}

/// Database file argument shared by every view
#[derive(Debug, Clone, Args)]
pub(crate) struct DatabaseArg {
    /// Path to the database JSON file
    pub database: PathBuf,
}

/// Output format arguments shared by every view
#[derive(Debug, Clone, Args)]
pub(crate) struct OutputArg {
    /// Write JSON instead of a text table
    #[arg(long)]
    pub json: bool,

    /// Write to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

/// Search and pagination arguments of paginated views
#[derive(Debug, Clone, Args)]
pub(crate) struct PageArg {
    /// Only show rows matching this text (case-insensitive)
    #[arg(long)]
    pub search: Option<String>,

    /// Sort descending
    #[arg(long)]
    pub desc: bool,

    /// Page number, starting at 1
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Rows per page (0 shows every row)
    #[arg(long, default_value_t = olydb_analysis::table::query::DEFAULT_PAGE_SIZE)]
    pub page_size: usize,
}

impl PageArg {
    pub(crate) fn to_query<C>(&self, column: Option<C>) -> TableQuery<C> {
        let order = if self.desc {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        };
        TableQuery {
            search: self.search.clone().unwrap_or_default(),
            sort: column.map(|column| SortSpec { column, order }),
            page_index: self.page as usize - 1,
            page_size: self.page_size,
        }
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_tracing(args.verbose, args.quiet);
    match args.mode {
        Mode::Summary(arg) => summary::run(&arg)?,
        Mode::Standings(arg) => standings::run(&arg)?,
        Mode::Distribution(arg) => distribution::run(&arg)?,
        Mode::Correlations(arg) => correlations::run(&arg)?,
        Mode::Contestants(arg) => contestants::run(&arg)?,
        Mode::Countries(arg) => countries::run(&arg)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_command_definition() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_page_arg_to_query() {
        let args = CommandArgs::parse_from([
            "olydb",
            "contestants",
            "db.json",
            "--search",
            "ali",
            "--page",
            "3",
            "--page-size",
            "10",
            "--desc",
        ]);
        let Mode::Contestants(arg) = args.mode else {
            panic!("expected contestants mode");
        };
        let query = arg.page.to_query(Some(1_u8));
        assert_eq!(query.search, "ali");
        assert_eq!(query.page_index, 2);
        assert_eq!(query.page_size, 10);
        assert_eq!(
            query.sort,
            Some(SortSpec {
                column: 1,
                order: SortOrder::Descending
            })
        );
    }

    #[test]
    fn test_page_zero_rejected() {
        let result =
            CommandArgs::try_parse_from(["olydb", "contestants", "db.json", "--page", "0"]);
        assert!(result.is_err());
    }
}

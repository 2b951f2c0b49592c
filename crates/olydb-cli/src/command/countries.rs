use std::io::Write as _;

use clap::Args;
use olydb_analysis::{
    countries::{FilterOption, country_filter_options},
    table::body::TableBody,
};

use crate::{
    command::{DatabaseArg, OutputArg},
    util::{self, Output},
    view::table::{self, Column},
};

#[derive(Debug, Clone, Args)]
pub(crate) struct CountriesArg {
    #[clap(flatten)]
    pub db: DatabaseArg,

    /// Only list countries of this competition's participants
    #[arg(long)]
    pub competition: Option<String>,

    #[clap(flatten)]
    pub output: OutputArg,
}

pub(crate) fn run(arg: &CountriesArg) -> anyhow::Result<()> {
    let db = util::read_database(&arg.db.database)?;

    let options = match &arg.competition {
        Some(id) => {
            let competition = util::find_competition(&db, id)?;
            let participations = db.participations_for_competition(&competition.id);
            country_filter_options(
                participations.iter().map(|p| p.country_id.as_str()),
                &db.countries,
            )
        }
        None => country_filter_options(
            db.people.values().map(|p| p.country_id.as_str()),
            &db.countries,
        ),
    };

    if arg.output.json {
        return Output::open(arg.output.output.clone())?.write_json(&options);
    }

    Output::open(arg.output.output.clone())?
        .write_report("countries", |out| write_countries(out, &options))
}

fn write_countries<W>(out: &mut W, options: &[FilterOption]) -> std::io::Result<()>
where
    W: std::io::Write,
{
    let columns = [Column::left("Id"), Column::left("Country")];
    let body = TableBody::new(options, columns.len())
        .no_data_message("No countries")
        .render();
    table::write_table(out, &columns, &body, |o| {
        vec![o.value.clone(), o.label.clone()]
    })?;
    writeln!(out, "  ({} countries)", options.len())
}

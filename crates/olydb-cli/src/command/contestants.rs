use std::io::Write as _;

use clap::{Args, ValueEnum};
use olydb_analysis::{
    contestants::{ContestantColumn, ContestantRow, aggregate_contestants},
    table::{body::TableBody, query::TablePage},
};
use serde::Serialize;

use crate::{
    command::{DatabaseArg, OutputArg, PageArg},
    util::{self, Output},
    view::table::{self, Column},
};

#[derive(Debug, Clone, Args)]
pub(crate) struct ContestantsArg {
    #[clap(flatten)]
    pub db: DatabaseArg,

    /// Only list contestants of this country id
    #[arg(long)]
    pub country: Option<String>,

    /// Column to sort by
    #[arg(long, value_enum, default_value_t = SortKey::Name)]
    pub sort: SortKey,

    #[clap(flatten)]
    pub page: PageArg,

    #[clap(flatten)]
    pub output: OutputArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum SortKey {
    Name,
    Country,
}

impl From<SortKey> for ContestantColumn {
    fn from(key: SortKey) -> Self {
        match key {
            SortKey::Name => ContestantColumn::Name,
            SortKey::Country => ContestantColumn::Country,
        }
    }
}

#[derive(Debug, Serialize)]
struct ContestantsJson<'a> {
    page_index: usize,
    page_count: usize,
    total_rows: usize,
    rows: &'a [&'a ContestantRow],
}

pub(crate) fn run(arg: &ContestantsArg) -> anyhow::Result<()> {
    let db = util::read_database(&arg.db.database)?;

    let people = db
        .people_sorted()
        .into_iter()
        .filter(|p| arg.country.as_ref().is_none_or(|c| p.country_id == *c));
    let rows = aggregate_contestants(people, &db.countries);
    tracing::info!(
        people = db.people.len(),
        listed = rows.len(),
        "contestants aggregated"
    );

    let page = arg.page.to_query(Some(arg.sort.into())).apply(&rows);

    if arg.output.json {
        let json = ContestantsJson {
            page_index: page.page_index,
            page_count: page.page_count,
            total_rows: page.total_rows,
            rows: &page.rows,
        };
        return Output::open(arg.output.output.clone())?.write_json(&json);
    }

    let group_by_country = arg.sort == SortKey::Country;
    Output::open(arg.output.output.clone())?.write_report("contestants", |out| {
        write_contestants(out, &page, group_by_country)
    })
}

fn write_contestants<W>(
    out: &mut W,
    page: &TablePage<'_, ContestantRow>,
    group_by_country: bool,
) -> std::io::Result<()>
where
    W: std::io::Write,
{
    let columns = [
        Column::left("Name"),
        Column::left("Code"),
        Column::left("Country"),
    ];
    let mut body =
        TableBody::new(&page.rows, columns.len()).no_data_message("No contestants match");
    if group_by_country {
        body = body.group_by(|row: &&ContestantRow| row.country_id.clone());
    }
    table::write_table(out, &columns, &body.render(), |row| {
        vec![
            row.name.clone(),
            row.country_code.clone().unwrap_or_default(),
            row.country_name.clone(),
        ]
    })?;
    table::write_page_footer(out, page)
}

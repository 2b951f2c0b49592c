use std::io::Write as _;

use clap::{Args, ValueEnum};
use olydb_analysis::{
    standings::{StandingColumn, StandingRow, calculate_country_standings},
    table::{body::TableBody, query::TablePage},
};
use olydb_model::Competition;
use serde::Serialize;

use crate::{
    command::{DatabaseArg, OutputArg, PageArg},
    util::{self, Output},
    view::table::{self, Column},
};

#[derive(Debug, Clone, Args)]
pub(crate) struct StandingsArg {
    #[clap(flatten)]
    pub db: DatabaseArg,

    /// Competition id, such as `IMO-2024`
    #[arg(long)]
    pub competition: String,

    /// Column to sort by
    #[arg(long, value_enum, default_value_t = SortKey::Rank)]
    pub sort: SortKey,

    /// Sort by the total of this problem (1-based) instead of `--sort`
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub sort_problem: Option<u32>,

    #[clap(flatten)]
    pub page: PageArg,

    #[clap(flatten)]
    pub output: OutputArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum SortKey {
    Rank,
    Country,
    Total,
    Participants,
    Gold,
    Silver,
    Bronze,
    Hm,
}

impl From<SortKey> for StandingColumn {
    fn from(key: SortKey) -> Self {
        match key {
            SortKey::Rank => StandingColumn::Rank,
            SortKey::Country => StandingColumn::Country,
            SortKey::Total => StandingColumn::TotalScore,
            SortKey::Participants => StandingColumn::Participants,
            SortKey::Gold => StandingColumn::Gold,
            SortKey::Silver => StandingColumn::Silver,
            SortKey::Bronze => StandingColumn::Bronze,
            SortKey::Hm => StandingColumn::HonourableMention,
        }
    }
}

impl StandingsArg {
    fn sort_column(&self, num_problems: usize) -> anyhow::Result<StandingColumn> {
        let Some(problem) = self.sort_problem else {
            return Ok(self.sort.into());
        };
        let index = problem as usize - 1;
        anyhow::ensure!(
            index < num_problems,
            "Problem {problem} out of range (competition has {num_problems} problems)"
        );
        Ok(StandingColumn::Problem(index))
    }
}

#[derive(Debug, Serialize)]
struct StandingsJson<'a> {
    competition: &'a Competition,
    page_index: usize,
    page_count: usize,
    total_rows: usize,
    rows: &'a [&'a StandingRow],
}

pub(crate) fn run(arg: &StandingsArg) -> anyhow::Result<()> {
    let db = util::read_database(&arg.db.database)?;
    let competition = util::find_competition(&db, &arg.competition)?;
    let participations = db.participations_for_competition(&competition.id);

    let standings = calculate_country_standings(
        participations.iter().copied(),
        &db.countries,
        competition.problem_count(),
    );
    tracing::info!(
        competition = %competition.id,
        participations = participations.len(),
        countries = standings.len(),
        "standings calculated"
    );

    let column = arg.sort_column(competition.problem_count())?;
    let page = arg.page.to_query(Some(column)).apply(&standings);

    if arg.output.json {
        let json = StandingsJson {
            competition,
            page_index: page.page_index,
            page_count: page.page_count,
            total_rows: page.total_rows,
            rows: &page.rows,
        };
        return Output::open(arg.output.output.clone())?.write_json(&json);
    }

    Output::open(arg.output.output.clone())?
        .write_report("standings", |out| write_standings(out, competition, &page))
}

fn write_standings<W>(
    out: &mut W,
    competition: &Competition,
    page: &TablePage<'_, StandingRow>,
) -> std::io::Result<()>
where
    W: std::io::Write,
{
    writeln!(out, "Standings of {}", competition.id)?;
    writeln!(out)?;

    let mut columns = vec![Column::right("#"), Column::left("Country")];
    columns.extend((1..=competition.problem_count()).map(|i| Column::right(format!("P{i}"))));
    columns.extend([
        Column::right("Total"),
        Column::right("N"),
        Column::right("G"),
        Column::right("S"),
        Column::right("B"),
        Column::right("HM"),
    ]);

    let host = competition.host_country_id.as_deref();
    let body = TableBody::new(&page.rows, columns.len())
        .no_data_message("No countries match")
        .row_style(move |row: &&StandingRow| (Some(row.country_id.as_str()) == host).then_some("H"))
        .render();
    table::write_table(out, &columns, &body, |row| {
        let mut cells = vec![row.rank.to_string(), row.country_name.clone()];
        cells.extend(row.problem_totals.iter().map(ToString::to_string));
        cells.extend([
            row.total_score.to_string(),
            row.participant_count.to_string(),
            row.awards.gold.to_string(),
            row.awards.silver.to_string(),
            row.awards.bronze.to_string(),
            row.awards.honourable_mention.to_string(),
        ]);
        cells
    })?;
    table::write_page_footer(out, page)
}

#[cfg(test)]
mod tests {
    use olydb_analysis::{awards::AwardCounts, table::query::TableQuery};
    use olydb_model::Source;

    use super::*;

    fn competition() -> Competition {
        Competition {
            id: "IMO-2024".to_owned(),
            source: Source::Imo,
            year: 2024,
            edition: Some(65),
            host_country_id: Some("country-gbr".to_owned()),
            num_problems: 2,
            max_score_per_problem: 7,
        }
    }

    fn row(rank: usize, country: &str, total: i64) -> StandingRow {
        StandingRow {
            rank,
            country_id: format!("country-{country}"),
            country_code: Some(country.to_uppercase()),
            country_name: country.to_uppercase(),
            problem_totals: vec![total, 0],
            total_score: total,
            participant_count: 1,
            awards: AwardCounts::new(),
        }
    }

    #[test]
    fn test_sort_problem_is_bounded() {
        let arg = StandingsArg {
            db: DatabaseArg {
                database: "db.json".into(),
            },
            competition: "IMO-2024".to_owned(),
            sort: SortKey::Gold,
            sort_problem: None,
            page: PageArg {
                search: None,
                desc: false,
                page: 1,
                page_size: 25,
            },
            output: OutputArg {
                json: false,
                output: None,
            },
        };
        assert_eq!(arg.sort_column(6).unwrap(), StandingColumn::Gold);

        let arg = StandingsArg {
            sort_problem: Some(6),
            ..arg
        };
        assert_eq!(arg.sort_column(6).unwrap(), StandingColumn::Problem(5));
        assert!(arg.sort_column(5).is_err());
    }

    #[test]
    fn test_write_standings_marks_host() {
        let rows = [row(1, "gbr", 14), row(2, "usa", 7)];
        let page = TableQuery::<StandingColumn>::default().apply(&rows);
        let mut out = Vec::new();
        write_standings(&mut out, &competition(), &page).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines = text.lines().collect::<Vec<_>>();

        assert_eq!(lines[0], "Standings of IMO-2024");
        assert!(lines[2].contains("P1") && lines[2].contains("P2"));
        assert!(lines[4].starts_with("  H"));
        assert!(lines[4].contains("GBR"));
        assert!(lines[5].starts_with("   "));
        assert!(lines[5].contains("USA"));
        assert_eq!(lines.last(), Some(&"  (2 rows)"));
    }
}

use std::collections::HashMap;

use olydb_model::{Award, Competition, Country, Participation, Person, Source};

pub(crate) fn country(code: &str, name: &str) -> Country {
    Country {
        id: Country::make_id(code),
        code: code.to_owned(),
        name: name.to_owned(),
    }
}

pub(crate) fn countries(list: &[(&str, &str)]) -> HashMap<String, Country> {
    list.iter()
        .map(|(code, name)| {
            let c = country(code, name);
            (c.id.clone(), c)
        })
        .collect()
}

pub(crate) fn competition(source: Source, year: i32, num_problems: u32) -> Competition {
    Competition {
        id: Competition::make_id(source, year),
        source,
        year,
        edition: None,
        host_country_id: None,
        num_problems,
        max_score_per_problem: 7,
    }
}

pub(crate) fn person(id: &str, name: &str, country_id: &str) -> Person {
    Person {
        id: id.to_owned(),
        name: name.to_owned(),
        given_name: None,
        family_name: None,
        country_id: country_id.to_owned(),
        aliases: vec![],
        source_ids: HashMap::new(),
    }
}

pub(crate) fn participation(
    competition_id: &str,
    person_id: &str,
    country_id: &str,
    problem_scores: &[Option<i32>],
    award: Option<Award>,
) -> Participation {
    Participation {
        id: Participation::make_id(competition_id, person_id),
        competition_id: competition_id.to_owned(),
        person_id: person_id.to_owned(),
        country_id: country_id.to_owned(),
        problem_scores: problem_scores.to_vec(),
        total_score: problem_scores.iter().flatten().sum(),
        rank: None,
        regional_rank: None,
        award,
        extra_award: None,
        source_contestant_id: None,
    }
}

pub(crate) fn scored(total_score: i32, award: Option<Award>) -> Participation {
    Participation {
        total_score,
        ..participation("IMO-2024", "p", "country-usa", &[], award)
    }
}

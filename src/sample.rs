use std::collections::{HashMap, HashSet};

use chrono::{Duration as ChronoDuration, NaiveDate};
use once_cell::sync::Lazy;
use rand::Rng;

use crate::fixture::{Fixture, OfficialScore};

pub const CLUB_TEAM_IDS: [u32; 3] = [10, 11, 12];

static TEAM_NAMES: Lazy<HashMap<u32, &'static str>> = Lazy::new(|| {
    let mut names = HashMap::new();
    names.insert(10, "Harbour Firsts");
    names.insert(11, "Harbour Reserves");
    names.insert(12, "Harbour U18");
    names.insert(20, "Lakeside");
    names.insert(21, "Westgate");
    names.insert(22, "Ironbark");
    names.insert(23, "Redhill");
    names.insert(24, "Stony Creek");
    names.insert(25, "Marlin Bay");
    names
});

pub fn team_name(team_id: u32) -> &'static str {
    TEAM_NAMES.get(&team_id).copied().unwrap_or("Unknown")
}

#[derive(Debug, Clone)]
pub struct SampleSeason {
    pub fixtures: Vec<Fixture>,
    pub scores_by_game: HashMap<u32, Vec<OfficialScore>>,
    pub club_team_ids: HashSet<u32>,
}

/// Generate a synthetic season with the data-quality states the engine has
/// to cope with: full quarter entries, legacy summary-only games, partial
/// entry sets, byes, inter-club rounds and not-yet-played fixtures.
pub fn sample_season(rounds: u32) -> SampleSeason {
    let mut rng = rand::thread_rng();
    let base = NaiveDate::from_ymd_opt(2026, 4, 4).unwrap_or_default();
    let opponents = [20u32, 21, 22, 23, 24, 25];

    let mut fixtures = Vec::new();
    let mut scores_by_game: HashMap<u32, Vec<OfficialScore>> = HashMap::new();
    let mut next_id = 1u32;

    for round in 0..rounds {
        let date = base + ChronoDuration::weeks(i64::from(round));
        let utc_time = format!("{} 04:10", date.format("%Y-%m-%d"));
        // The season is mostly played; the tail is still upcoming.
        let played = round + 3 < rounds;

        // One round in the season pits two club teams against each other.
        let inter_club_round = rounds > 4 && round == rounds / 2;

        for (slot, &team_id) in CLUB_TEAM_IDS.iter().enumerate() {
            let id = next_id;
            next_id += 1;

            if inter_club_round && slot == 1 {
                // The reserves appear as the home side of the U18 slot.
                continue;
            }
            if inter_club_round && slot == 2 {
                push_game(
                    &mut fixtures,
                    &mut scores_by_game,
                    &mut rng,
                    id,
                    CLUB_TEAM_IDS[1],
                    Some(team_id),
                    played,
                    &utc_time,
                );
                continue;
            }

            if rng.gen_bool(0.08) {
                fixtures.push(bye_fixture(id, team_id, &utc_time));
                continue;
            }

            let opponent = opponents[rng.gen_range(0..opponents.len())];
            let (home, away) = if rng.gen_bool(0.5) {
                (team_id, opponent)
            } else {
                (opponent, team_id)
            };
            push_game(
                &mut fixtures,
                &mut scores_by_game,
                &mut rng,
                id,
                home,
                Some(away),
                played,
                &utc_time,
            );
        }
    }

    SampleSeason {
        fixtures,
        scores_by_game,
        club_team_ids: CLUB_TEAM_IDS.iter().copied().collect(),
    }
}

#[allow(clippy::too_many_arguments)]
fn push_game(
    fixtures: &mut Vec<Fixture>,
    scores_by_game: &mut HashMap<u32, Vec<OfficialScore>>,
    rng: &mut impl Rng,
    id: u32,
    home: u32,
    away: Option<u32>,
    played: bool,
    utc_time: &str,
) {
    let mut fixture = Fixture {
        id,
        finished: played,
        status_name: Some(if played { "Final" } else { "Scheduled" }.to_string()),
        home_team_id: home,
        away_team_id: away,
        summary_home_goals: None,
        summary_away_goals: None,
        is_bye: false,
        utc_time: utc_time.to_string(),
    };

    if played {
        match rng.gen_range(0..10) {
            // Legacy game: only the embedded summary pair was ever recorded.
            0 => {
                fixture.summary_home_goals = Some(rng.gen_range(0..16));
                fixture.summary_away_goals = Some(rng.gen_range(0..16));
            }
            // Defective batch: entries for one side only.
            1 => {
                let entries = quarter_entries(rng, id, home);
                scores_by_game.insert(id, entries);
            }
            _ => {
                let mut entries = quarter_entries(rng, id, home);
                if let Some(away) = away {
                    entries.extend(quarter_entries(rng, id, away));
                }
                scores_by_game.insert(id, entries);
            }
        }
    }

    fixtures.push(fixture);
}

fn quarter_entries(rng: &mut impl Rng, game_id: u32, team_id: u32) -> Vec<OfficialScore> {
    (1..=4)
        .map(|quarter| OfficialScore {
            game_id,
            team_id,
            quarter,
            score: rng.gen_range(0..7),
        })
        .collect()
}

fn bye_fixture(id: u32, team_id: u32, utc_time: &str) -> Fixture {
    Fixture {
        id,
        finished: true,
        status_name: Some("Bye".to_string()),
        home_team_id: team_id,
        away_team_id: None,
        summary_home_goals: None,
        summary_away_goals: None,
        is_bye: true,
        utc_time: utc_time.to_string(),
    }
}

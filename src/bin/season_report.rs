use std::collections::{HashMap, HashSet};
use std::env;
use std::fs;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use clubscore::fixture::{
    parse_fixtures_json, parse_official_scores_json, scores_by_game, Fixture, OfficialScore,
};
use clubscore::sample::{sample_season, team_name};
use clubscore::score::ResultCategory;
use clubscore::win_rate::{average_quarter_scores, calculate_win_rate, recent_form};

fn main() {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let (fixtures, scores, club_team_ids) = load_inputs()?;
    let fixtures = apply_season_window(fixtures);

    let mut team_ids: Vec<u32> = club_team_ids.iter().copied().collect();
    team_ids.sort_unstable();

    for team_id in team_ids {
        let summary = calculate_win_rate(&fixtures, team_id, &scores, &club_team_ids);
        let form = recent_form(&fixtures, team_id, &scores, &club_team_ids, 5);
        let quarters = average_quarter_scores(&fixtures, team_id, &scores, &club_team_ids);

        println!(
            "{:<18} {:>2}W {:>2}L {:>2}D  {:>5.1}% over {} games  form {}",
            team_name(team_id),
            summary.wins,
            summary.losses,
            summary.draws,
            summary.win_rate,
            summary.total_games,
            form_string(&form),
        );
        for q in quarters {
            println!(
                "    Q{}: {:.1} for / {:.1} against",
                q.quarter, q.ours, q.theirs
            );
        }
    }
    Ok(())
}

fn load_inputs() -> Result<(Vec<Fixture>, HashMap<u32, Vec<OfficialScore>>, HashSet<u32>)> {
    let fixtures_file = env::var("FIXTURES_FILE").ok();
    let scores_file = env::var("SCORES_FILE").ok();

    let (Some(fixtures_file), Some(scores_file)) = (fixtures_file, scores_file) else {
        // No input files: report over a generated season instead.
        let rounds = env::var("SAMPLE_ROUNDS")
            .ok()
            .and_then(|val| val.parse::<u32>().ok())
            .unwrap_or(18)
            .clamp(4, 30);
        let season = sample_season(rounds);
        return Ok((season.fixtures, season.scores_by_game, season.club_team_ids));
    };

    let raw = fs::read_to_string(&fixtures_file)
        .with_context(|| format!("reading {fixtures_file}"))?;
    let fixtures = parse_fixtures_json(&raw)?;

    let raw = fs::read_to_string(&scores_file).with_context(|| format!("reading {scores_file}"))?;
    let scores = scores_by_game(parse_official_scores_json(&raw)?);

    let club_team_ids = env::var("CLUB_TEAM_IDS")
        .ok()
        .map(|val| {
            val.split(',')
                .filter_map(|part| part.trim().parse::<u32>().ok())
                .collect::<HashSet<u32>>()
        })
        .unwrap_or_default();

    Ok((fixtures, scores, club_team_ids))
}

fn apply_season_window(fixtures: Vec<Fixture>) -> Vec<Fixture> {
    let from = opt_date_env("SEASON_FROM");
    let to = opt_date_env("SEASON_TO");
    if from.is_none() && to.is_none() {
        return fixtures;
    }
    fixtures
        .into_iter()
        .filter(|f| {
            let Some(date) = fixture_date(f) else {
                // Undated fixtures stay in; the window is a convenience.
                return true;
            };
            from.is_none_or(|from| date >= from) && to.is_none_or(|to| date <= to)
        })
        .collect()
}

fn fixture_date(fixture: &Fixture) -> Option<NaiveDate> {
    let prefix = fixture.utc_time.get(..10)?;
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}

fn opt_date_env(key: &str) -> Option<NaiveDate> {
    let raw = env::var(key).ok()?;
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

fn form_string(results: &[ResultCategory]) -> String {
    if results.is_empty() {
        return "-".to_string();
    }
    results
        .iter()
        .map(|result| match result {
            ResultCategory::Win => 'W',
            ResultCategory::Loss => 'L',
            ResultCategory::Draw => 'D',
            ResultCategory::InterClub => 'I',
            _ => '?',
        })
        .collect()
}

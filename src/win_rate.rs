use std::collections::{BTreeMap, HashMap, HashSet};

use rayon::prelude::*;

use crate::fixture::{Fixture, OfficialScore};
use crate::perspective::Perspective;
use crate::score::{calculate_game_score, ResultCategory, ScoreSource};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WinRateSummary {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    /// Games that actually produced a score. Games with nothing derivable
    /// are left out of the denominator entirely, not counted as losses.
    pub total_games: u32,
    pub win_rate: f64,
}

/// Aggregate a team's record over a fixture list.
///
/// Inter-club results stay in the denominator but land in no W/L/D bucket.
pub fn calculate_win_rate(
    fixtures: &[Fixture],
    team_id: u32,
    scores_by_game: &HashMap<u32, Vec<OfficialScore>>,
    club_team_ids: &HashSet<u32>,
) -> WinRateSummary {
    let mut wins = 0u32;
    let mut losses = 0u32;
    let mut draws = 0u32;
    let mut counted = 0u32;

    for fixture in fixtures {
        if !fixture.finished || !fixture.involves(team_id) || fixture.is_bye_round() {
            continue;
        }
        let officials = game_entries(scores_by_game, fixture.id);
        let score =
            calculate_game_score(fixture, officials, Perspective::Team(team_id), club_team_ids);
        if !score.valid {
            continue;
        }
        counted += 1;
        match score.result {
            ResultCategory::Win => wins += 1,
            ResultCategory::Loss => losses += 1,
            ResultCategory::Draw => draws += 1,
            _ => {}
        }
    }

    let win_rate = if counted == 0 {
        0.0
    } else {
        f64::from(wins) / f64::from(counted) * 100.0
    };
    WinRateSummary {
        wins,
        losses,
        draws,
        total_games: counted,
        win_rate,
    }
}

/// Summaries for every team in the club, one engine pass per team.
pub fn club_win_rates(
    fixtures: &[Fixture],
    scores_by_game: &HashMap<u32, Vec<OfficialScore>>,
    club_team_ids: &HashSet<u32>,
) -> HashMap<u32, WinRateSummary> {
    club_team_ids
        .par_iter()
        .map(|&team_id| {
            (
                team_id,
                calculate_win_rate(fixtures, team_id, scores_by_game, club_team_ids),
            )
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuarterAverage {
    pub quarter: u8,
    pub ours: f64,
    pub theirs: f64,
}

/// Mean per-quarter scores for a team across games with official quarter
/// data. Widgets should call this rather than re-summing raw score batches
/// themselves.
pub fn average_quarter_scores(
    fixtures: &[Fixture],
    team_id: u32,
    scores_by_game: &HashMap<u32, Vec<OfficialScore>>,
    club_team_ids: &HashSet<u32>,
) -> Vec<QuarterAverage> {
    let mut sums: BTreeMap<u8, (u64, u64, u32)> = BTreeMap::new();

    for fixture in fixtures {
        if !fixture.finished || !fixture.involves(team_id) || fixture.is_bye_round() {
            continue;
        }
        let officials = game_entries(scores_by_game, fixture.id);
        let score =
            calculate_game_score(fixture, officials, Perspective::Team(team_id), club_team_ids);
        // Only the official source carries quarter granularity.
        if !score.valid || score.source != ScoreSource::Official {
            continue;
        }
        for quarter in &score.quarters {
            let slot = sums.entry(quarter.quarter).or_insert((0, 0, 0));
            slot.0 += u64::from(quarter.ours);
            slot.1 += u64::from(quarter.theirs);
            slot.2 += 1;
        }
    }

    sums.into_iter()
        .map(|(quarter, (ours, theirs, games))| QuarterAverage {
            quarter,
            ours: ours as f64 / f64::from(games),
            theirs: theirs as f64 / f64::from(games),
        })
        .collect()
}

/// Last `n` results for a team, newest first. Only games with a derivable
/// score appear.
pub fn recent_form(
    fixtures: &[Fixture],
    team_id: u32,
    scores_by_game: &HashMap<u32, Vec<OfficialScore>>,
    club_team_ids: &HashSet<u32>,
    n: usize,
) -> Vec<ResultCategory> {
    let mut played: Vec<&Fixture> = fixtures
        .iter()
        .filter(|f| f.finished && f.involves(team_id) && !f.is_bye_round())
        .collect();
    // utc_time string ordering is fine here, the feed uses ISO-ish timestamps.
    played.sort_by(|a, b| b.utc_time.cmp(&a.utc_time).then(b.id.cmp(&a.id)));

    let mut out = Vec::new();
    for fixture in played {
        if out.len() == n {
            break;
        }
        let officials = game_entries(scores_by_game, fixture.id);
        let score =
            calculate_game_score(fixture, officials, Perspective::Team(team_id), club_team_ids);
        if score.valid {
            out.push(score.result);
        }
    }
    out
}

fn game_entries(scores_by_game: &HashMap<u32, Vec<OfficialScore>>, game_id: u32) -> &[OfficialScore] {
    scores_by_game
        .get(&game_id)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

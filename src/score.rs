use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};
use std::fmt;

use crate::fixture::{Fixture, OfficialScore};
use crate::perspective::{resolve_sides, Perspective, ResolvedSides};

/// Which layer of the fallback chain produced the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreSource {
    /// Summed from per-quarter official entries.
    Official,
    /// The embedded home-relative summary pair on the fixture record.
    Embedded,
    /// Nothing valid was found.
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultCategory {
    Win,
    Loss,
    Draw,
    Bye,
    Upcoming,
    Unknown,
    InterClub,
}

impl ResultCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            ResultCategory::Win => "win",
            ResultCategory::Loss => "loss",
            ResultCategory::Draw => "draw",
            ResultCategory::Bye => "bye",
            ResultCategory::Upcoming => "upcoming",
            ResultCategory::Unknown => "unknown",
            ResultCategory::InterClub => "inter-club",
        }
    }
}

impl fmt::Display for ResultCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One quarter of the breakdown, oriented to the resolved perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuarterScore {
    pub quarter: u8,
    pub ours: u32,
    pub theirs: u32,
}

/// The one answer everything downstream trusts verbatim.
///
/// `valid == false` means "no displayable score", which is not the same
/// thing as 0-0: a recorded scoreless draw keeps `valid == true`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameScore {
    pub ours: u32,
    pub theirs: u32,
    pub result: ResultCategory,
    pub quarters: Vec<QuarterScore>,
    pub valid: bool,
    pub source: ScoreSource,
    pub inter_club: bool,
}

impl GameScore {
    fn invalid(result: ResultCategory, inter_club: bool) -> Self {
        Self {
            ours: 0,
            theirs: 0,
            result,
            quarters: Vec::new(),
            valid: false,
            source: ScoreSource::None,
            inter_club,
        }
    }
}

/// Compute a fixture's oriented score, quarter breakdown and result.
///
/// Sources are tried in strict priority order: bye short-circuit, then the
/// completion flag, then official per-quarter entries, then the embedded
/// summary pair, then nothing. Every input state lands on a total value;
/// there is no error path.
pub fn calculate_game_score(
    fixture: &Fixture,
    officials: &[OfficialScore],
    perspective: Perspective,
    club_team_ids: &HashSet<u32>,
) -> GameScore {
    let sides = resolve_sides(fixture, perspective, club_team_ids);

    if fixture.is_bye_round() {
        return GameScore::invalid(ResultCategory::Bye, sides.inter_club);
    }
    // Unfinished games may carry provisional numbers; none of them count.
    if !fixture.finished {
        return GameScore::invalid(ResultCategory::Upcoming, sides.inter_club);
    }
    if let Some(score) = official_score(fixture, officials, &sides) {
        return score;
    }
    if let Some(score) = embedded_score(fixture, &sides) {
        return score;
    }
    GameScore::invalid(ResultCategory::Unknown, sides.inter_club)
}

/// Thin projection of [`calculate_game_score`] for callers that only style
/// by result.
pub fn game_result(
    fixture: &Fixture,
    officials: &[OfficialScore],
    perspective: Perspective,
    club_team_ids: &HashSet<u32>,
) -> ResultCategory {
    calculate_game_score(fixture, officials, perspective, club_team_ids).result
}

fn official_score(
    fixture: &Fixture,
    officials: &[OfficialScore],
    sides: &ResolvedSides,
) -> Option<GameScore> {
    let entries: Vec<&OfficialScore> = officials
        .iter()
        .filter(|entry| entry.game_id == fixture.id)
        .collect();
    if entries.is_empty() {
        return None;
    }

    // A zero score is valid data; a side with no entries at all is not.
    let has_ours = entries.iter().any(|entry| entry.team_id == sides.ours);
    let has_theirs = entries.iter().any(|entry| entry.team_id == sides.theirs);
    if !has_ours || !has_theirs {
        log::debug!(
            "game {}: official entries cover only one side, ignoring them",
            fixture.id
        );
        return None;
    }

    // Duplicate (team, quarter) entries are summed, not overwritten.
    let mut by_quarter: BTreeMap<u8, (u32, u32)> = BTreeMap::new();
    for entry in &entries {
        let slot = by_quarter.entry(entry.quarter).or_insert((0, 0));
        if entry.team_id == sides.ours {
            slot.0 += entry.score;
        } else if entry.team_id == sides.theirs {
            slot.1 += entry.score;
        }
    }

    let quarters: Vec<QuarterScore> = by_quarter
        .into_iter()
        .map(|(quarter, (ours, theirs))| QuarterScore {
            quarter,
            ours,
            theirs,
        })
        .collect();
    let ours: u32 = quarters.iter().map(|q| q.ours).sum();
    let theirs: u32 = quarters.iter().map(|q| q.theirs).sum();

    Some(GameScore {
        ours,
        theirs,
        result: classify(ours, theirs, sides.inter_club),
        quarters,
        valid: true,
        source: ScoreSource::Official,
        inter_club: sides.inter_club,
    })
}

fn embedded_score(fixture: &Fixture, sides: &ResolvedSides) -> Option<GameScore> {
    let (home_goals, away_goals) =
        match (fixture.summary_home_goals, fixture.summary_away_goals) {
            (Some(home), Some(away)) => (home, away),
            _ => return None,
        };

    // The pair is stored home-relative, so flip it when we are the away side.
    let (ours, theirs) = if sides.ours == fixture.home_team_id {
        (home_goals, away_goals)
    } else if fixture.away_team_id == Some(sides.ours) {
        (away_goals, home_goals)
    } else {
        return None;
    };

    Some(GameScore {
        ours,
        theirs,
        result: classify(ours, theirs, sides.inter_club),
        quarters: Vec::new(),
        valid: true,
        source: ScoreSource::Embedded,
        inter_club: sides.inter_club,
    })
}

// A club cannot beat itself, so inter-club wins over the numbers.
fn classify(ours: u32, theirs: u32, inter_club: bool) -> ResultCategory {
    if inter_club {
        return ResultCategory::InterClub;
    }
    match ours.cmp(&theirs) {
        Ordering::Greater => ResultCategory::Win,
        Ordering::Less => ResultCategory::Loss,
        Ordering::Equal => ResultCategory::Draw,
    }
}

use std::collections::HashMap;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

// Status names observed to mean "no opposing team this round".
const BYE_STATUS_MARKERS: [&str; 2] = ["bye", "walkover"];

/// One scheduled game, as delivered by the fixtures endpoint.
///
/// The embedded `statusTeamGoals`/`statusOpponentGoals` pair is a legacy
/// summary score stored home-relative (`statusTeamGoals` is the home side).
/// It only matters when no per-quarter official entries were ever recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fixture {
    pub id: u32,
    #[serde(rename = "statusIsCompleted")]
    pub finished: bool,
    #[serde(default)]
    pub status_name: Option<String>,
    pub home_team_id: u32,
    #[serde(default)]
    pub away_team_id: Option<u32>,
    #[serde(rename = "statusTeamGoals", default)]
    pub summary_home_goals: Option<u32>,
    #[serde(rename = "statusOpponentGoals", default)]
    pub summary_away_goals: Option<u32>,
    #[serde(default)]
    pub is_bye: bool,
    #[serde(default)]
    pub utc_time: String,
}

impl Fixture {
    /// A bye is flagged explicitly, implied by the status name, or implied
    /// by a missing opponent.
    pub fn is_bye_round(&self) -> bool {
        if self.is_bye || self.away_team_id.is_none() {
            return true;
        }
        let Some(name) = self.status_name.as_deref() else {
            return false;
        };
        let name = name.to_ascii_lowercase();
        BYE_STATUS_MARKERS.iter().any(|marker| name.contains(marker))
    }

    pub fn involves(&self, team_id: u32) -> bool {
        self.home_team_id == team_id || self.away_team_id == Some(team_id)
    }
}

/// One persisted per-team, per-quarter score record. A recorded 0 is real
/// data; a missing entry is not, so the two must never be conflated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficialScore {
    pub game_id: u32,
    pub team_id: u32,
    pub quarter: u8,
    pub score: u32,
}

pub fn parse_fixtures_json(raw: &str) -> Result<Vec<Fixture>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(Vec::new());
    }
    serde_json::from_str(trimmed).context("invalid fixtures json")
}

pub fn parse_official_scores_json(raw: &str) -> Result<Vec<OfficialScore>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(Vec::new());
    }
    serde_json::from_str(trimmed).context("invalid official scores json")
}

/// Group a flat score batch by game id, the shape the aggregate functions
/// take.
pub fn scores_by_game(entries: Vec<OfficialScore>) -> HashMap<u32, Vec<OfficialScore>> {
    let mut out: HashMap<u32, Vec<OfficialScore>> = HashMap::new();
    for entry in entries {
        out.entry(entry.game_id).or_default().push(entry);
    }
    out
}

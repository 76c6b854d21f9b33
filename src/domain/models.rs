use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Tournament-level fields recovered from labeled rows of a sheet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TournamentMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tournament_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub federation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tournament_director: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chief_arbiter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deputy_chief_arbiter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arbiter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_control: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_of_play: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rounds: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tournament_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating_calculation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_elo: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_age: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameResult {
    Win,
    Loss,
    Draw,
    Absent,
    Missed,
}

/// One decoded per-round cell. `None` fields mean the part was not recognised.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub opponent: Option<String>,
    pub color: Option<Color>,
    pub result: Option<GameResult>,
    pub raw: String,
}

impl RoundOutcome {
    /// Outcome for text the decoder could not structure
    pub fn unparsed(raw: &str) -> Self {
        Self {
            opponent: None,
            color: None,
            result: None,
            raw: raw.to_string(),
        }
    }
}

/// Player standing row. A `None` round keeps its column position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub rank: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub federation: Option<String>,
    pub rating: Option<i64>,
    pub points: f64,
    pub rounds: Vec<Option<RoundOutcome>>,
    pub tie_breaks: BTreeMap<String, Option<f64>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TournamentRecord {
    pub tournament_metadata: TournamentMetadata,
    pub player_rankings: Vec<PlayerRecord>,
}

/// Reference to a tournament inside a ranking entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TournamentUsage {
    pub tournament_id: i64,
    pub tournament_name: Option<String>,
    pub date: Option<String>,
    pub tb1: Option<f64>,
}

/// Cross-tournament ranking line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingEntry {
    pub name: String,
    pub date_of_birth: Option<String>,
    pub federation: Option<String>,
    pub rating: Option<i64>,
    pub average_performance: Option<f64>,
    pub tournaments_used: Vec<TournamentUsage>,
    pub tournaments_played: Vec<TournamentUsage>,
}

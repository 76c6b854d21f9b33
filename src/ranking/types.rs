use chrono::NaiveDateTime;
use serde_json::Value;

use crate::domain::TournamentUsage;
use crate::parser::cell::parse_leading_float;

pub type TournamentId = i64;

/// Player row as persisted for one tournament
#[derive(Debug, Clone, PartialEq)]
pub struct StoredPlayerRow {
    pub tournament_id: TournamentId,
    pub name: Option<String>,
    pub federation: Option<String>,
    pub rating: Option<i64>,
    pub tie_breaks: TieBreaks,
    pub created_at: Option<NaiveDateTime>,
}

/// Tie-break mapping either still JSON-encoded or already decoded
#[derive(Debug, Clone, PartialEq)]
pub enum TieBreaks {
    Encoded(String),
    Decoded(Value),
}

impl TieBreaks {
    /// Finite number stored under `key`. Strings contribute their numeric prefix.
    pub fn value_of(&self, key: &str) -> Option<f64> {
        let decoded;
        let value = match self {
            TieBreaks::Encoded(text) => {
                decoded = serde_json::from_str::<Value>(text).ok()?;
                &decoded
            }
            TieBreaks::Decoded(value) => value,
        };

        let number = match value.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => parse_leading_float(s),
            _ => None,
        };
        number.filter(|n| n.is_finite())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TournamentSummary {
    pub id: TournamentId,
    pub tournament_name: Option<String>,
    pub date: Option<String>,
}

/// One appearance of a player in a tournament
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceEntry {
    pub tournament_id: TournamentId,
    pub tournament_name: Option<String>,
    pub date: Option<String>,
    pub tb1: Option<f64>,
    pub rating: Option<i64>,
    pub federation: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

impl PerformanceEntry {
    pub fn usage(&self) -> TournamentUsage {
        TournamentUsage {
            tournament_id: self.tournament_id,
            tournament_name: self.tournament_name.clone(),
            date: self.date.clone(),
            tb1: self.tb1,
        }
    }
}

/// All appearances sharing one normalized name within a single run
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerIdentityGroup {
    pub key: String,
    pub name: String,
    pub federation: Option<String>,
    pub rating: Option<i64>,
    pub latest_at: Option<NaiveDateTime>,
    pub entries: Vec<PerformanceEntry>,
}

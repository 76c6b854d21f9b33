use chrono::NaiveDateTime;
use serde::Serialize;

/// Tournament row as shown in listings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TournamentListItem {
    pub id: i64,
    pub created_at: Option<NaiveDateTime>,
    pub tournament_name: Option<String>,
    pub organizer: Option<String>,
    pub federation: Option<String>,
    pub location: Option<String>,
    pub date: Option<String>,
}

/// Player row as shown on a tournament page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerStanding {
    pub rank: i64,
    pub name: Option<String>,
    pub federation: Option<String>,
    pub rating: Option<i64>,
    pub points: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TournamentDetail {
    pub tournament: TournamentListItem,
    pub players: Vec<PlayerStanding>,
}

use anyhow::{Context, Result};
use rusqlite::params;

use crate::domain::PlayerRecord;
use crate::errors::with_storage_context;
use crate::ranking::{StoredPlayerRow, TieBreaks};

use super::connection::DbConn;
use super::models::PlayerStanding;

/// Inserts all players of one tournament in a single transaction
pub fn insert_players(
    conn: &mut DbConn,
    tournament_id: i64,
    players: &[PlayerRecord],
) -> Result<usize> {
    let tx = with_storage_context(conn.transaction(), "open transaction for", "players")?;
    {
        let sql = "INSERT INTO players (tournament_id, rank, name, federation, rating, points, rounds, tie_breaks) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";
        let mut stmt = tx.prepare(sql)?;

        for player in players {
            let rounds = serde_json::to_string(&player.rounds)?;
            let tie_breaks = serde_json::to_string(&player.tie_breaks)?;
            stmt.execute(params![
                tournament_id,
                player.rank,
                player.name,
                player.federation,
                player.rating,
                player.points,
                rounds,
                tie_breaks
            ])
            .with_context(|| format!("Failed to insert player {}", player.name))?;
        }
    }
    with_storage_context(tx.commit(), "commit", "players")?;

    Ok(players.len())
}

/// Standings of one tournament ordered by rank
pub fn list_standings(conn: &mut DbConn, tournament_id: i64) -> Result<Vec<PlayerStanding>> {
    let sql = "SELECT rank, name, federation, rating, points FROM players WHERE tournament_id = ?1 ORDER BY rank ASC, id ASC";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![tournament_id], |row| {
            Ok(PlayerStanding {
                rank: row.get(0)?,
                name: row.get(1)?,
                federation: row.get(2)?,
                rating: row.get(3)?,
                points: row.get(4)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

/// Every stored player row, in insertion order
pub fn list_all(conn: &mut DbConn) -> Result<Vec<StoredPlayerRow>> {
    let sql = "SELECT tournament_id, name, federation, rating, tie_breaks, created_at FROM players ORDER BY id ASC";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], |row| {
            Ok(StoredPlayerRow {
                tournament_id: row.get(0)?,
                name: row.get(1)?,
                federation: row.get(2)?,
                rating: row.get(3)?,
                tie_breaks: TieBreaks::Encoded(row.get(4)?),
                created_at: row.get(5)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

use anyhow::{Context, Result};
use rusqlite::{named_params, params, OptionalExtension};

use crate::domain::TournamentMetadata;
use crate::ranking::TournamentSummary;

use super::connection::DbConn;
use super::models::TournamentListItem;

pub fn insert_tournament(conn: &mut DbConn, metadata: &TournamentMetadata) -> Result<i64> {
    let sql = "INSERT INTO tournaments (
            tournament_name, organizer, federation, tournament_director, chief_arbiter,
            deputy_chief_arbiter, arbiter, time_control, rate_of_play, location, rounds,
            tournament_type, rating_calculation, date, average_elo, average_age, source
        ) VALUES (
            :tournament_name, :organizer, :federation, :tournament_director, :chief_arbiter,
            :deputy_chief_arbiter, :arbiter, :time_control, :rate_of_play, :location, :rounds,
            :tournament_type, :rating_calculation, :date, :average_elo, :average_age, :source
        ) RETURNING id";

    conn.query_row(
        sql,
        named_params! {
            ":tournament_name": metadata.tournament_name,
            ":organizer": metadata.organizer,
            ":federation": metadata.federation,
            ":tournament_director": metadata.tournament_director,
            ":chief_arbiter": metadata.chief_arbiter,
            ":deputy_chief_arbiter": metadata.deputy_chief_arbiter,
            ":arbiter": metadata.arbiter,
            ":time_control": metadata.time_control,
            ":rate_of_play": metadata.rate_of_play,
            ":location": metadata.location,
            ":rounds": metadata.rounds,
            ":tournament_type": metadata.tournament_type,
            ":rating_calculation": metadata.rating_calculation,
            ":date": metadata.date,
            ":average_elo": metadata.average_elo,
            ":average_age": metadata.average_age,
            ":source": metadata.source,
        },
        |row| row.get(0),
    )
    .context("Failed to insert tournament")
}

fn parse_list_item_row(row: &rusqlite::Row) -> rusqlite::Result<TournamentListItem> {
    Ok(TournamentListItem {
        id: row.get(0)?,
        created_at: row.get(1)?,
        tournament_name: row.get(2)?,
        organizer: row.get(3)?,
        federation: row.get(4)?,
        location: row.get(5)?,
        date: row.get(6)?,
    })
}

/// Newest uploads first
pub fn list_tournaments(conn: &mut DbConn) -> Result<Vec<TournamentListItem>> {
    let sql = "SELECT id, created_at, tournament_name, organizer, federation, location, date FROM tournaments ORDER BY created_at DESC, id DESC";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_list_item_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn find_by_id(conn: &mut DbConn, id: i64) -> Result<Option<TournamentListItem>> {
    let sql = "SELECT id, created_at, tournament_name, organizer, federation, location, date FROM tournaments WHERE id = ?1";

    conn.query_row(sql, params![id], parse_list_item_row)
        .optional()
        .context("Failed to query tournament by id")
}

pub fn list_summaries(conn: &mut DbConn) -> Result<Vec<TournamentSummary>> {
    let sql = "SELECT id, tournament_name, date FROM tournaments";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], |row| {
            Ok(TournamentSummary {
                id: row.get(0)?,
                tournament_name: row.get(1)?,
                date: row.get(2)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

use anyhow::Result;

use crate::domain::{PlayerRecord, TournamentMetadata};
use crate::ranking::{StoredPlayerRow, TournamentSummary};

use super::connection::{create_memory_pool, create_pool, get_connection, DbPool};
use super::models::{TournamentDetail, TournamentListItem};
use super::{players, setup, tournaments};

/// Storage capability handed to the import and ranking services
pub trait TournamentRepository: Send + Sync {
    fn insert_tournament(&self, metadata: &TournamentMetadata) -> Result<i64>;
    fn insert_players(&self, tournament_id: i64, players: &[PlayerRecord]) -> Result<usize>;
    fn list_tournaments(&self) -> Result<Vec<TournamentListItem>>;
    fn get_tournament(&self, id: i64) -> Result<Option<TournamentDetail>>;
    fn list_all_players(&self) -> Result<Vec<StoredPlayerRow>>;
    fn list_all_tournaments(&self) -> Result<Vec<TournamentSummary>>;
}

#[derive(Clone)]
pub struct SqliteRepository {
    pool: DbPool,
}

impl SqliteRepository {
    /// Opens the database file and creates missing tables
    pub fn open(database_path: &str) -> Result<Self> {
        Self::from_pool(create_pool(database_path)?)
    }

    pub fn in_memory() -> Result<Self> {
        Self::from_pool(create_memory_pool()?)
    }

    fn from_pool(pool: DbPool) -> Result<Self> {
        let mut conn = get_connection(&pool)?;
        setup::ensure_schema(&mut conn)?;
        drop(conn);
        Ok(Self { pool })
    }
}

impl TournamentRepository for SqliteRepository {
    fn insert_tournament(&self, metadata: &TournamentMetadata) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        tournaments::insert_tournament(&mut conn, metadata)
    }

    fn insert_players(&self, tournament_id: i64, records: &[PlayerRecord]) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;
        players::insert_players(&mut conn, tournament_id, records)
    }

    fn list_tournaments(&self) -> Result<Vec<TournamentListItem>> {
        let mut conn = get_connection(&self.pool)?;
        tournaments::list_tournaments(&mut conn)
    }

    fn get_tournament(&self, id: i64) -> Result<Option<TournamentDetail>> {
        let mut conn = get_connection(&self.pool)?;
        let Some(tournament) = tournaments::find_by_id(&mut conn, id)? else {
            return Ok(None);
        };
        let players = players::list_standings(&mut conn, id)?;

        Ok(Some(TournamentDetail {
            tournament,
            players,
        }))
    }

    fn list_all_players(&self) -> Result<Vec<StoredPlayerRow>> {
        let mut conn = get_connection(&self.pool)?;
        players::list_all(&mut conn)
    }

    fn list_all_tournaments(&self) -> Result<Vec<TournamentSummary>> {
        let mut conn = get_connection(&self.pool)?;
        tournaments::list_summaries(&mut conn)
    }
}

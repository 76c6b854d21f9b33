use anyhow::{Context, Result};
use log::{error, info};
use serde::Serialize;

use crate::database::TournamentRepository;
use crate::domain::TournamentRecord;
use crate::errors::parse_context;
use crate::parser::TournamentParser;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportSummary {
    pub tournament_id: i64,
    pub players_inserted: usize,
}

/// Parses an uploaded file and stores the result
pub struct ImportService<'a, R: TournamentRepository + ?Sized> {
    repository: &'a R,
}

impl<'a, R: TournamentRepository + ?Sized> ImportService<'a, R> {
    pub fn new(repository: &'a R) -> Self {
        Self { repository }
    }

    pub fn parse(&self, file_name: &str, bytes: &[u8]) -> Result<TournamentRecord> {
        TournamentParser::new(file_name)
            .parse(bytes)
            .with_context(|| parse_context(file_name))
    }

    pub fn import(&self, file_name: &str, bytes: &[u8]) -> Result<(ImportSummary, TournamentRecord)> {
        let record = self.parse(file_name, bytes)?;
        let summary = self.save(&record)?;
        Ok((summary, record))
    }

    /// Tournament first, then its players. A failure in the second step leaves
    /// the tournament row behind.
    pub fn save(&self, record: &TournamentRecord) -> Result<ImportSummary> {
        let tournament_id = self.repository.insert_tournament(&record.tournament_metadata)?;
        info!("Inserted tournament id: {}", tournament_id);

        let players_inserted = self
            .repository
            .insert_players(tournament_id, &record.player_rankings)
            .inspect_err(|e| {
                error!("Insert players failed, tournament {} left without players: {:?}", tournament_id, e)
            })?;
        info!("Saved {} players for tournament {}", players_inserted, tournament_id);

        Ok(ImportSummary {
            tournament_id,
            players_inserted,
        })
    }
}

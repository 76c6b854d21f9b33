pub mod cell;
pub mod header;
pub mod metadata;
pub mod patterns;
pub mod players;
pub mod reader;
pub mod rounds;

use anyhow::Result;
use log::{info, warn};

use crate::domain::TournamentRecord;

pub use cell::{Cell, Grid};
pub use rounds::decode_round;

/// Turns one uploaded spreadsheet into a tournament record
pub struct TournamentParser {
    file_name: String,
}

impl TournamentParser {
    pub fn new(file_name: &str) -> Self {
        Self {
            file_name: file_name.to_string(),
        }
    }

    /// Fails only when the file cannot be read as a grid at all
    pub fn parse(&self, bytes: &[u8]) -> Result<TournamentRecord> {
        info!("File={} Starting parse ({} bytes)", self.file_name, bytes.len());
        let grid = reader::read_grid(&self.file_name, bytes)?;
        Ok(self.parse_grid(&grid))
    }

    pub fn parse_grid(&self, grid: &Grid) -> TournamentRecord {
        let tournament_metadata = metadata::extract_metadata(grid);
        let player_rankings = match header::locate_header_row(grid) {
            Some(index) => players::extract_players(grid, index),
            None => {
                warn!("File={} No header row found", self.file_name);
                Vec::new()
            }
        };

        info!(
            "File={} Parsed {} rows, extracted {} players",
            self.file_name,
            grid.len(),
            player_rankings.len()
        );

        TournamentRecord {
            tournament_metadata,
            player_rankings,
        }
    }
}

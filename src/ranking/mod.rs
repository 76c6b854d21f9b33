pub mod aggregation;
pub mod normalization;
pub mod types;

pub use aggregation::PerformanceAggregator;
pub use normalization::normalize_name;
pub use types::{PlayerIdentityGroup, StoredPlayerRow, TieBreaks, TournamentSummary};

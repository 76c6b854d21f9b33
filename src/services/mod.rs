pub mod import;
pub mod ranking;
pub mod server;

pub use import::{ImportService, ImportSummary};
pub use ranking::RankingService;
pub use server::ServerService;

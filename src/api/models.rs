use serde::Serialize;

use crate::domain::TournamentRecord;
use crate::services::ImportSummary;

#[derive(Serialize)]
pub struct UploadResponse {
    #[serde(flatten)]
    pub summary: ImportSummary,
    #[serde(flatten)]
    pub record: TournamentRecord,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;

use crate::api::models::ErrorResponse;
use crate::config::AppConfig;
use crate::database::SqliteRepository;

pub mod tournaments;
pub mod upload;

pub struct AppState {
    pub repository: SqliteRepository,
    pub config: AppConfig,
}

#[derive(Deserialize)]
pub struct RankingParams {
    pub limit: Option<String>,
}

pub fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use log::error;
use std::sync::Arc;

use crate::api::parsers::coerce_limit;
use crate::database::TournamentRepository;
use crate::services::RankingService;
use super::{error_response, AppState, RankingParams};

pub async fn list_tournaments(State(state): State<Arc<AppState>>) -> Response {
    match state.repository.list_tournaments() {
        Ok(tournaments) => Json(tournaments).into_response(),
        Err(e) => {
            error!("Tournament list failed: {:?}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch tournaments")
        }
    }
}

pub async fn get_rankings(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RankingParams>,
) -> Response {
    let settings = &state.config.ranking;
    let limit = coerce_limit(params.limit.as_deref(), settings.default_limit);

    match RankingService::new(&state.repository, settings).rankings(limit) {
        Ok(rankings) => Json(rankings).into_response(),
        Err(e) => {
            error!("Rankings failed: {:?}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to compute rankings")
        }
    }
}

pub async fn get_tournament(
    State(state): State<Arc<AppState>>,
    Path(tournament_id): Path<i64>,
) -> Response {
    match state.repository.get_tournament(tournament_id) {
        Ok(Some(detail)) => Json(detail).into_response(),
        Ok(None) => error_response(StatusCode::NOT_FOUND, "Tournament not found"),
        Err(e) => {
            error!("Tournament {} fetch failed: {:?}", tournament_id, e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch tournament")
        }
    }
}

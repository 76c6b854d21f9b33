use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use crate::api::handlers::{
    tournaments::{get_rankings, get_tournament, list_tournaments},
    upload::upload_file,
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    let max_upload_bytes = state.config.server.max_upload_bytes;

    Router::new()
        .route("/api/upload", post(upload_file))
        .route("/api/tournaments", get(list_tournaments))
        .route("/api/tournaments/rankings", get(get_rankings))
        .route("/api/tournaments/:id", get(get_tournament))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}

use axum::{
    body::Bytes,
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use log::{error, info, warn};
use std::sync::Arc;

use crate::api::models::UploadResponse;
use crate::services::ImportService;
use super::{error_response, AppState};

struct UploadedFile {
    file_name: String,
    bytes: Bytes,
}

pub async fn upload_file(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Response {
    let upload = match read_file_field(&mut multipart).await {
        Ok(Some(upload)) => upload,
        Ok(None) => return error_response(StatusCode::BAD_REQUEST, "No file uploaded"),
        Err(e) => {
            warn!("Upload rejected: {}", e.body_text());
            return error_response(e.status(), &e.body_text());
        }
    };

    let service = ImportService::new(&state.repository);

    let record = match service.parse(&upload.file_name, &upload.bytes) {
        Ok(record) => record,
        Err(e) => {
            error!("File={} Error={:?}", upload.file_name, e);
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to parse file");
        }
    };

    match service.save(&record) {
        Ok(summary) => {
            info!("File={} Stored as tournament {}", upload.file_name, summary.tournament_id);
            Json(UploadResponse { summary, record }).into_response()
        }
        Err(e) => {
            error!("File={} Error={:?}", upload.file_name, e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to save tournament")
        }
    }
}

/// First multipart field named `file`, fully buffered
async fn read_file_field(multipart: &mut Multipart) -> Result<Option<UploadedFile>, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or("upload").to_string();
        let bytes = field.bytes().await?;
        return Ok(Some(UploadedFile { file_name, bytes }));
    }
    Ok(None)
}

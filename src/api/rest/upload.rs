//! Upload endpoint

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::api::state::AppState;

/// Multipart field carrying the event file
pub const FILE_FIELD: &str = "file";
/// Body returned after a committed upload
pub const UPLOAD_OK: &str = "File uploaded and data saved successfully.";

fn upload_error(status: StatusCode, message: impl std::fmt::Display) -> axum::response::Response {
    (status, Json(format!("Error processing file: {}", message))).into_response()
}

/// POST /api/employees/upload - Ingest an event file
///
/// The whole file is parsed before anything is stored; any bad row rejects
/// the upload and leaves the store untouched.
pub async fn upload_file(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let mut content = None;

    loop {
        match multipart.next_field().await {
            Ok(Some(field)) if field.name() == Some(FILE_FIELD) => match field.bytes().await {
                Ok(bytes) => {
                    content = Some(bytes);
                    break;
                }
                Err(e) => {
                    tracing::warn!(error = %e, "failed to read upload body");
                    return upload_error(e.status(), e.body_text());
                }
            },
            Ok(Some(_)) => continue,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "malformed multipart request");
                return upload_error(e.status(), e.body_text());
            }
        }
    }

    let Some(content) = content else {
        tracing::warn!("upload without a '{}' part", FILE_FIELD);
        return upload_error(
            StatusCode::BAD_REQUEST,
            format!("missing multipart field '{}'", FILE_FIELD),
        );
    };

    let ingestor = state.ingestor.clone();
    let size = content.len();
    let result = tokio::task::spawn_blocking(move || ingestor.ingest(&content[..])).await;

    match result {
        Ok(Ok(summary)) => {
            tracing::info!(bytes = size, inserted = summary.inserted, "upload committed");
            (StatusCode::OK, Json(UPLOAD_OK)).into_response()
        }
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "upload rejected");
            upload_error(StatusCode::INTERNAL_SERVER_ERROR, e)
        }
        Err(e) => {
            tracing::error!(error = %e, "ingestion task failed");
            upload_error(StatusCode::INTERNAL_SERVER_ERROR, e)
        }
    }
}

//! REST API module for HTTP endpoints
//!
//! All routes live under `/api/employees`:
//! - `POST /upload` - Ingest an event file (multipart field `file`)
//! - `GET /` - Every stored event
//! - `GET /count` - Distinct employee count
//! - `GET /monthly-joins`, `/monthly-exits` - Lifecycle by month
//! - `GET /monthly-salary-report`, `/monthly-amount-released` - Payouts by month
//! - `GET /employee-financial-report` - Payouts by employee
//! - `GET /yearly-financial-report` - Events by year

pub mod reports;
pub mod upload;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::reports::ReportError;

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "INTERNAL_ERROR".to_string(),
        }
    }
}

impl From<ReportError> for ApiError {
    fn from(e: ReportError) -> Self {
        tracing::error!(error = %e, "report failed");
        ApiError::internal(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, Json(self)).into_response()
    }
}

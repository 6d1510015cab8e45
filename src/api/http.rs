//! HTTP server setup with Axum

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use super::rest::{reports, upload};
use super::state::AppState;
use crate::config::DEFAULT_MAX_UPLOAD_BYTES;

/// Create the Axum router with the default upload limit
pub fn create_router(state: Arc<AppState>) -> Router {
    create_router_with_limit(state, DEFAULT_MAX_UPLOAD_BYTES)
}

/// Create the Axum router with all endpoints
pub fn create_router_with_limit(state: Arc<AppState>, max_upload_bytes: usize) -> Router {
    // CORS configuration - allow all origins
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        .route(
            "/api/employees/upload",
            post(upload::upload_file).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route("/api/employees", get(reports::list_events))
        .route("/api/employees/count", get(reports::employee_count))
        .route("/api/employees/monthly-joins", get(reports::monthly_joins))
        .route("/api/employees/monthly-exits", get(reports::monthly_exits))
        .route(
            "/api/employees/monthly-salary-report",
            get(reports::monthly_salary_report),
        )
        .route(
            "/api/employees/employee-financial-report",
            get(reports::employee_financial_report),
        )
        .route(
            "/api/employees/monthly-amount-released",
            get(reports::monthly_amount_released),
        )
        .route(
            "/api/employees/yearly-financial-report",
            get(reports::yearly_financial_report),
        )
        .layer(cors)
        .with_state(state)
}

/// Bind `addr` and serve until Ctrl+C
pub async fn serve(
    addr: &str,
    state: Arc<AppState>,
    max_upload_bytes: usize,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let app = create_router_with_limit(state, max_upload_bytes);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Payroll server listening on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

//! Report endpoints

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{extract::State, Json};

use super::ApiError;
use crate::api::state::AppState;
use crate::reports::{ReportResult, Reporter};
use crate::types::{
    EmployeeEvent, EmployeeFinancialReport, ExitDetail, JoinDetail, MonthlyAmountReleasedReport,
    MonthlySalaryReport, YearlyFinancialEntry,
};

type ApiResult<T> = Result<Json<T>, ApiError>;

/// Run a report on the blocking pool; store scans do file I/O
async fn run_report<T, F>(state: Arc<AppState>, report: F) -> ApiResult<T>
where
    T: Send + 'static,
    F: FnOnce(&Reporter) -> ReportResult<T> + Send + 'static,
{
    let reporter = state.reporter.clone();
    match tokio::task::spawn_blocking(move || report(&reporter)).await {
        Ok(result) => Ok(Json(result?)),
        Err(e) => {
            tracing::error!(error = %e, "report task failed");
            Err(ApiError::internal(e.to_string()))
        }
    }
}

/// GET /api/employees - Every stored event
pub async fn list_events(State(state): State<Arc<AppState>>) -> ApiResult<Vec<EmployeeEvent>> {
    run_report(state, Reporter::all_events).await
}

/// GET /api/employees/count - Number of distinct employee ids
pub async fn employee_count(State(state): State<Arc<AppState>>) -> ApiResult<usize> {
    run_report(state, Reporter::employee_count).await
}

/// GET /api/employees/monthly-joins
pub async fn monthly_joins(
    State(state): State<Arc<AppState>>,
) -> ApiResult<BTreeMap<String, Vec<JoinDetail>>> {
    run_report(state, Reporter::monthly_joins).await
}

/// GET /api/employees/monthly-exits
///
/// Exits without an ONBOARD record appear as `null` entries.
pub async fn monthly_exits(
    State(state): State<Arc<AppState>>,
) -> ApiResult<BTreeMap<String, Vec<Option<ExitDetail>>>> {
    run_report(state, Reporter::monthly_exits).await
}

/// GET /api/employees/monthly-salary-report
pub async fn monthly_salary_report(
    State(state): State<Arc<AppState>>,
) -> ApiResult<BTreeMap<String, MonthlySalaryReport>> {
    run_report(state, Reporter::monthly_salary_report).await
}

/// GET /api/employees/employee-financial-report
pub async fn employee_financial_report(
    State(state): State<Arc<AppState>>,
) -> ApiResult<BTreeMap<String, EmployeeFinancialReport>> {
    run_report(state, Reporter::employee_financial_report).await
}

/// GET /api/employees/monthly-amount-released
pub async fn monthly_amount_released(
    State(state): State<Arc<AppState>>,
) -> ApiResult<BTreeMap<String, MonthlyAmountReleasedReport>> {
    run_report(state, Reporter::monthly_amount_released).await
}

/// GET /api/employees/yearly-financial-report
pub async fn yearly_financial_report(
    State(state): State<Arc<AppState>>,
) -> ApiResult<BTreeMap<i32, Vec<YearlyFinancialEntry>>> {
    run_report(state, Reporter::yearly_financial_report).await
}

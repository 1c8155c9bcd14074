//! Spend-reporting routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
};

use crate::AppState;
use crate::routes::{error_response, report_error};
use reimbra_db::ExpenseRepository;

/// Creates the reporting routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/employees/{employee_id}/spend-summary", get(spend_summary))
}

/// GET `/employees/{employee_id}/spend-summary` - Per-category spend
/// totals against the role's package limits.
async fn spend_summary(
    State(state): State<AppState>,
    Path(employee_id): Path<i32>,
) -> impl IntoResponse {
    let repo = ExpenseRepository::new((*state.db).clone());
    match repo.spend_summary(employee_id).await {
        Ok(summary) => Json(summary).into_response(),
        Err(e) => error_response(&report_error(e)),
    }
}

//! Expense claim routes: submission, decisions, and history queries.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post},
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::AppState;
use crate::routes::{error_response, expense_error, report_error};
use reimbra_db::repositories::{ExpenseRepository, SubmitExpenseInput};

/// Creates the expense routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/expenses", post(submit_expense))
        .route("/expenses/pending", get(list_pending))
        .route("/expenses/validate", post(validate_expense))
        .route("/expenses/{expense_id}/status", patch(update_status))
        .route("/expenses/employee/{employee_id}", get(by_employee_and_date_range))
        .route("/expenses/history", get(history_by_status))
}

// ============================================================================
// Request Types
// ============================================================================

/// Request body for submitting an expense claim.
#[derive(Debug, Deserialize)]
pub struct SubmitExpenseRequest {
    /// Submitting employee.
    pub employee_id: i32,
    /// Category the claim is filed against.
    pub category_id: i32,
    /// Claim amount.
    pub amount: i32,
}

/// Request body for the ad-hoc amount validation.
#[derive(Debug, Deserialize)]
pub struct ValidateExpenseRequest {
    /// Role to check the entitlement for.
    pub role_id: i32,
    /// Category package holding the spending limit.
    pub category_package_id: i32,
    /// Candidate claim amount.
    pub expense_amount: i32,
}

/// Response body for the ad-hoc amount validation.
#[derive(Debug, serde::Serialize)]
pub struct ValidateExpenseResponse {
    /// Whether the amount fits within the package limit.
    pub valid: bool,
}

/// Query parameters for the status update.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusQuery {
    /// Target status id: 2 (Approved) or 3 (Rejected).
    pub status_id: i32,
}

/// Query parameters for the employee date-range listing.
#[derive(Debug, Deserialize)]
pub struct DateRangeQuery {
    /// First day of the window (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the window (inclusive).
    pub end_date: NaiveDate,
}

/// Query parameters for the status history listing.
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    /// Status id or case-insensitive status name.
    pub status: String,
    /// Optional exact category name filter.
    pub category: Option<String>,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST `/expenses` - Submit a new expense claim.
async fn submit_expense(
    State(state): State<AppState>,
    Json(body): Json<SubmitExpenseRequest>,
) -> impl IntoResponse {
    let repo = ExpenseRepository::new((*state.db).clone());
    let input = SubmitExpenseInput {
        employee_id: body.employee_id,
        category_id: body.category_id,
        amount: body.amount,
    };

    match repo.submit(input).await {
        Ok(expense) => (StatusCode::CREATED, Json(expense)).into_response(),
        Err(e) => error_response(&expense_error(e)),
    }
}

/// POST `/expenses/validate` - Check an amount against a role's package
/// entitlement without storing anything.
async fn validate_expense(
    State(state): State<AppState>,
    Json(body): Json<ValidateExpenseRequest>,
) -> impl IntoResponse {
    let repo = ExpenseRepository::new((*state.db).clone());
    match repo
        .validate_amount(body.role_id, body.category_package_id, body.expense_amount)
        .await
    {
        Ok(valid) => Json(ValidateExpenseResponse { valid }).into_response(),
        Err(e) => error_response(&expense_error(e)),
    }
}

/// GET `/expenses/pending` - List expenses awaiting a decision.
async fn list_pending(State(state): State<AppState>) -> impl IntoResponse {
    let repo = ExpenseRepository::new((*state.db).clone());
    match repo.list_pending().await {
        Ok(expenses) => Json(expenses).into_response(),
        Err(e) => error_response(&expense_error(e)),
    }
}

/// PATCH `/expenses/{expense_id}/status` - Approve or reject a claim.
async fn update_status(
    State(state): State<AppState>,
    Path(expense_id): Path<i32>,
    Query(query): Query<UpdateStatusQuery>,
) -> impl IntoResponse {
    let repo = ExpenseRepository::new((*state.db).clone());
    match repo.update_status(expense_id, query.status_id).await {
        Ok(expense) => Json(expense).into_response(),
        Err(e) => error_response(&expense_error(e)),
    }
}

/// GET `/expenses/employee/{employee_id}` - List an employee's expenses
/// submitted within an inclusive date range. Returns 204 when empty.
async fn by_employee_and_date_range(
    State(state): State<AppState>,
    Path(employee_id): Path<i32>,
    Query(query): Query<DateRangeQuery>,
) -> impl IntoResponse {
    let repo = ExpenseRepository::new((*state.db).clone());
    match repo
        .by_employee_and_date_range(employee_id, query.start_date, query.end_date)
        .await
    {
        Ok(expenses) if expenses.is_empty() => StatusCode::NO_CONTENT.into_response(),
        Ok(expenses) => Json(expenses).into_response(),
        Err(e) => error_response(&report_error(e)),
    }
}

/// GET `/expenses/history` - List expenses by status, most recent first,
/// optionally narrowed to one category. Returns 204 when empty.
async fn history_by_status(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> impl IntoResponse {
    let repo = ExpenseRepository::new((*state.db).clone());
    match repo
        .history_by_status(query.status.trim(), query.category.as_deref())
        .await
    {
        Ok(expenses) if expenses.is_empty() => StatusCode::NO_CONTENT.into_response(),
        Ok(expenses) => Json(expenses).into_response(),
        Err(e) => error_response(&report_error(e)),
    }
}

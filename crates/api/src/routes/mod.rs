//! API route definitions.

use axum::Json;
use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::error;

use crate::AppState;
use reimbra_core::expense::ExpenseError;
use reimbra_core::reporting::ReportError;
use reimbra_db::repositories::ReferenceError;
use reimbra_shared::AppError;

pub mod expenses;
pub mod health;
pub mod reference;
pub mod reports;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(reference::routes())
        .merge(expenses::routes())
        .merge(reports::routes())
}

/// Renders an `AppError` as an HTTP response.
pub(crate) fn error_response(err: &AppError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if status.is_server_error() {
        error!(error = %err, "request failed");
    }
    (
        status,
        Json(json!({
            "error": err.error_code(),
            "message": err.to_string(),
        })),
    )
        .into_response()
}

/// Maps validation errors onto the application error taxonomy.
pub(crate) fn expense_error(err: ExpenseError) -> AppError {
    match err {
        ExpenseError::EmployeeNotFound(_)
        | ExpenseError::RoleNotFound(_)
        | ExpenseError::CategoryNotFound(_)
        | ExpenseError::PackageNotFound(_)
        | ExpenseError::ExpenseNotFound(_)
        | ExpenseError::StatusNotFound(_) => AppError::NotFound(err.to_string()),
        ExpenseError::RoleInactive(_) => AppError::RoleInactive(err.to_string()),
        ExpenseError::CategoryInactive(_) => AppError::CategoryInactive(err.to_string()),
        ExpenseError::InvalidAmount(_) | ExpenseError::InvalidStatus(_) => {
            AppError::InvalidArgument(err.to_string())
        }
        ExpenseError::AlreadyDecided { .. } => AppError::Conflict(err.to_string()),
        ExpenseError::RoleNotEntitled { .. } => AppError::PolicyViolation(err.to_string()),
        ExpenseError::MissingStatusSeed(_) => AppError::Config(err.to_string()),
        ExpenseError::Database(msg) => AppError::Database(msg),
    }
}

/// Maps reporting errors onto the application error taxonomy.
pub(crate) fn report_error(err: ReportError) -> AppError {
    match err {
        ReportError::EmployeeNotFound(_)
        | ReportError::RoleMissing(_)
        | ReportError::UnknownStatus(_)
        | ReportError::UnknownCategory(_) => AppError::InvalidArgument(err.to_string()),
        ReportError::RoleInactive(_) => AppError::RoleInactive(err.to_string()),
        ReportError::Database(msg) => AppError::Database(msg),
    }
}

/// Maps reference-data errors onto the application error taxonomy.
pub(crate) fn reference_error(err: ReferenceError) -> AppError {
    match err {
        ReferenceError::RoleNotFound(_) | ReferenceError::PackageNotFound(_) => {
            AppError::NotFound(err.to_string())
        }
        ReferenceError::DuplicateEntitlement { .. } => AppError::Conflict(err.to_string()),
        ReferenceError::Database(e) => AppError::Database(e.to_string()),
    }
}

//! Reference-data listing routes.

use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};

use crate::AppState;
use crate::routes::{error_response, reference_error};
use reimbra_db::ReferenceRepository;

/// Creates the reference-data routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/roles", get(list_roles))
        .route("/employees", get(list_employees))
        .route("/categories", get(list_categories))
        .route("/expense-statuses", get(list_expense_statuses))
        .route("/category-packages", get(list_category_packages))
        .route("/role-category-packages", get(list_role_category_packages))
}

/// GET `/roles` - List all roles.
async fn list_roles(State(state): State<AppState>) -> impl IntoResponse {
    let repo = ReferenceRepository::new((*state.db).clone());
    match repo.list_roles().await {
        Ok(roles) => Json(roles).into_response(),
        Err(e) => error_response(&reference_error(e)),
    }
}

/// GET `/employees` - List all employees.
async fn list_employees(State(state): State<AppState>) -> impl IntoResponse {
    let repo = ReferenceRepository::new((*state.db).clone());
    match repo.list_employees().await {
        Ok(employees) => Json(employees).into_response(),
        Err(e) => error_response(&reference_error(e)),
    }
}

/// GET `/categories` - List all expense categories.
async fn list_categories(State(state): State<AppState>) -> impl IntoResponse {
    let repo = ReferenceRepository::new((*state.db).clone());
    match repo.list_categories().await {
        Ok(categories) => Json(categories).into_response(),
        Err(e) => error_response(&reference_error(e)),
    }
}

/// GET `/expense-statuses` - List all expense statuses.
async fn list_expense_statuses(State(state): State<AppState>) -> impl IntoResponse {
    let repo = ReferenceRepository::new((*state.db).clone());
    match repo.list_expense_statuses().await {
        Ok(statuses) => Json(statuses).into_response(),
        Err(e) => error_response(&reference_error(e)),
    }
}

/// GET `/category-packages` - List all category packages.
async fn list_category_packages(State(state): State<AppState>) -> impl IntoResponse {
    let repo = ReferenceRepository::new((*state.db).clone());
    match repo.list_category_packages().await {
        Ok(packages) => Json(packages).into_response(),
        Err(e) => error_response(&reference_error(e)),
    }
}

/// GET `/role-category-packages` - List all role entitlements.
async fn list_role_category_packages(State(state): State<AppState>) -> impl IntoResponse {
    let repo = ReferenceRepository::new((*state.db).clone());
    match repo.list_role_category_packages().await {
        Ok(links) => Json(links).into_response(),
        Err(e) => error_response(&reference_error(e)),
    }
}

//! Reporting error types.

use thiserror::Error;

/// Errors that can occur while building expense reports.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Employee not found.
    #[error("Employee not found: {0}")]
    EmployeeNotFound(i32),

    /// The employee references a role that no longer exists.
    #[error("Role missing for employee: role id {0}")]
    RoleMissing(i32),

    /// The employee's role is disabled.
    #[error("Role '{0}' is not active")]
    RoleInactive(String),

    /// Status filter could not be resolved by id or name.
    #[error("Unknown expense status: '{0}'")]
    UnknownStatus(String),

    /// Category filter does not name an existing category.
    #[error("Unknown category: '{0}'")]
    UnknownCategory(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),
}

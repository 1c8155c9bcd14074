//! Expense validation error types.

use thiserror::Error;

use super::types::ExpenseStatus;

/// Errors raised while validating or transitioning expense claims.
#[derive(Debug, Error)]
pub enum ExpenseError {
    /// Employee not found.
    #[error("Employee not found: {0}")]
    EmployeeNotFound(i32),

    /// Role not found.
    #[error("Role not found: {0}")]
    RoleNotFound(i32),

    /// Category not found.
    #[error("Category not found: {0}")]
    CategoryNotFound(i32),

    /// Category package not found.
    #[error("Category package not found: {0}")]
    PackageNotFound(i32),

    /// Expense not found.
    #[error("Expense not found: {0}")]
    ExpenseNotFound(i32),

    /// Target status row not found.
    #[error("Expense status not found: {0}")]
    StatusNotFound(i32),

    /// The employee's role is disabled for submissions.
    #[error("Role '{0}' is not active")]
    RoleInactive(String),

    /// The category is disabled for new claims.
    #[error("Category '{0}' is not active")]
    CategoryInactive(String),

    /// Claim amount must be a positive integer.
    #[error("Invalid expense amount: {0}")]
    InvalidAmount(i32),

    /// Only Approved (2) or Rejected (3) are legal transition targets.
    #[error("Invalid status id {0}: only Approved (2) or Rejected (3) are allowed")]
    InvalidStatus(i32),

    /// The claim has already left the Pending state.
    #[error("Expense already decided: current status is {current}")]
    AlreadyDecided {
        /// Status the claim currently holds.
        current: ExpenseStatus,
    },

    /// No entitlement links the role to the category package.
    #[error("Role {role_id} is not entitled to category package {category_package_id}")]
    RoleNotEntitled {
        /// Role id.
        role_id: i32,
        /// Category package id.
        category_package_id: i32,
    },

    /// A pre-seeded status row is missing or unknown.
    #[error("Expense status seed data missing or unknown: {0}")]
    MissingStatusSeed(i32),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),
}

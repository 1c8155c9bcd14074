//! Expense claim lifecycle and validation rules.
//!
//! This module implements the decision logic for submitting expense
//! claims, moving them through the approval workflow, and checking
//! claim amounts against role entitlements.

pub mod error;
pub mod service;
pub mod types;

pub use error::ExpenseError;
pub use service::ExpenseService;
pub use types::{
    CategorySnapshot, ExpenseStatus, PackageLink, PackageSnapshot, RoleSnapshot, StatusDecision,
};

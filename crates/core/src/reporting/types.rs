//! Report data types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A spending limit a role holds for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entitlement {
    /// Category the limit applies to.
    pub category_id: i32,
    /// Maximum allowed spend for the category.
    pub expense_limit: i32,
}

/// One expense row as consumed by the aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseLine {
    /// Category id of the claim.
    pub category_id: i32,
    /// Category name of the claim.
    pub category_name: String,
    /// Claim amount.
    pub amount: i32,
}

/// Per-category spend detail in the summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySpend {
    /// Total spent in the category, every status included.
    pub used: i64,
    /// Package limit minus total spent; negative when over budget.
    pub remaining: i64,
    /// Human-readable budget message.
    pub message: String,
}

/// Spend-versus-limit summary for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpendSummary {
    /// Employee name.
    pub employee_name: String,
    /// Name of the employee's role.
    pub role_name: String,
    /// Category name mapped to its spend detail.
    pub category_details: BTreeMap<String, CategorySpend>,
}

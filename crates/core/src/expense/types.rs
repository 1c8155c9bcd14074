//! Domain types for the expense claim workflow.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Lifecycle status of an expense claim.
///
/// The numeric ids are fixed and pre-seeded in the status reference
/// table: Pending=1, Approved=2, Rejected=3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseStatus {
    /// Awaiting a manager decision.
    Pending,
    /// Accepted for reimbursement.
    Approved,
    /// Declined.
    Rejected,
}

impl ExpenseStatus {
    /// Returns the fixed reference-table id for this status.
    #[must_use]
    pub const fn id(self) -> i32 {
        match self {
            Self::Pending => 1,
            Self::Approved => 2,
            Self::Rejected => 3,
        }
    }

    /// Resolves a status from its fixed reference-table id.
    #[must_use]
    pub const fn from_id(id: i32) -> Option<Self> {
        match id {
            1 => Some(Self::Pending),
            2 => Some(Self::Approved),
            3 => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Returns the canonical status name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }

    /// Resolves a status from a numeric id or a case-insensitive name.
    #[must_use]
    pub fn resolve(token: &str) -> Option<Self> {
        let token = token.trim();
        if let Ok(id) = token.parse::<i32>() {
            return Self::from_id(id);
        }
        match token.to_ascii_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Whether this status ends the claim lifecycle.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }
}

impl std::fmt::Display for ExpenseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role reference data as seen by the validation rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleSnapshot {
    /// Role id.
    pub id: i32,
    /// Role name.
    pub name: String,
    /// Whether employees holding this role may submit claims.
    pub is_active: bool,
}

/// Category reference data as seen by the validation rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySnapshot {
    /// Category id.
    pub id: i32,
    /// Category name.
    pub name: String,
    /// Whether new claims may be filed against this category.
    pub is_active: bool,
}

/// Spending-limit package scoped to one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageSnapshot {
    /// Package id.
    pub id: i32,
    /// Category the limit applies to.
    pub category_id: i32,
    /// Maximum allowed spend.
    pub expense_limit: i32,
}

/// Entitlement linking a role to a category package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageLink {
    /// Role id.
    pub role_id: i32,
    /// Category package id.
    pub category_package_id: i32,
}

/// Outcome of a validated status transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusDecision {
    /// The status the claim moves to.
    pub new_status: ExpenseStatus,
    /// Timestamp recorded as the approval date.
    pub decided_at: NaiveDateTime,
}

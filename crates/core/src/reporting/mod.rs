//! Spend-history aggregation and budget-remainder reports.
//!
//! Pure calculation logic for:
//! - date-range window expansion for history queries
//! - per-category spend totals against package limits

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::ReportError;
pub use service::ReportService;
pub use types::{CategorySpend, Entitlement, ExpenseLine, SpendSummary};

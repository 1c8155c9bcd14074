//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the
//! application. Rule decisions are delegated to `reimbra-core`; the
//! repositories only look data up and persist the outcome.

pub mod expense;
pub mod reference;

pub use expense::{ExpenseRepository, SubmitExpenseInput};
pub use reference::{ReferenceError, ReferenceRepository};

//! `SeaORM` entity definitions.

pub mod categories;
pub mod category_packages;
pub mod employees;
pub mod expense_statuses;
pub mod expenses;
pub mod role_category_packages;
pub mod roles;

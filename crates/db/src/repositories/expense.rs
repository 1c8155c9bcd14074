//! Expense repository for claim submission, decisions, and history.
//!
//! Orchestrates lookups against the reference data and delegates every
//! rule decision to `reimbra-core` before persisting the outcome.

use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use reimbra_core::expense::{
    CategorySnapshot, ExpenseError, ExpenseService, ExpenseStatus, PackageLink, PackageSnapshot,
    RoleSnapshot,
};
use reimbra_core::reporting::{Entitlement, ExpenseLine, ReportError, ReportService, SpendSummary};

use crate::entities::{
    categories, category_packages, employees, expense_statuses, expenses, role_category_packages,
    roles,
};

/// Input for submitting a new expense claim.
#[derive(Debug, Clone, Copy)]
pub struct SubmitExpenseInput {
    /// Submitting employee.
    pub employee_id: i32,
    /// Category the claim is filed against.
    pub category_id: i32,
    /// Claim amount.
    pub amount: i32,
}

/// Repository for expense claim operations.
#[derive(Debug, Clone)]
pub struct ExpenseRepository {
    db: DatabaseConnection,
}

impl ExpenseRepository {
    /// Creates a new expense repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Submits a new expense claim in the Pending state.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Employee, role, or category is not found
    /// - The role or category is inactive
    /// - The amount is not positive
    /// - The Pending status seed row is missing
    /// - Database operation fails
    pub async fn submit(&self, input: SubmitExpenseInput) -> Result<expenses::Model, ExpenseError> {
        let employee = employees::Entity::find_by_id(input.employee_id)
            .one(&self.db)
            .await
            .map_err(|e| ExpenseError::Database(e.to_string()))?
            .ok_or(ExpenseError::EmployeeNotFound(input.employee_id))?;

        let role = roles::Entity::find_by_id(employee.role_id)
            .one(&self.db)
            .await
            .map_err(|e| ExpenseError::Database(e.to_string()))?
            .ok_or(ExpenseError::RoleNotFound(employee.role_id))?;

        let category = categories::Entity::find_by_id(input.category_id)
            .one(&self.db)
            .await
            .map_err(|e| ExpenseError::Database(e.to_string()))?
            .ok_or(ExpenseError::CategoryNotFound(input.category_id))?;

        ExpenseService::validate_submission(
            &role_snapshot(&role),
            &category_snapshot(&category),
            input.amount,
        )?;

        let pending_id = ExpenseStatus::Pending.id();
        let pending = expense_statuses::Entity::find_by_id(pending_id)
            .one(&self.db)
            .await
            .map_err(|e| ExpenseError::Database(e.to_string()))?
            .ok_or(ExpenseError::MissingStatusSeed(pending_id))?;

        let expense = expenses::ActiveModel {
            employee_id: Set(employee.id),
            category_id: Set(category.id),
            amount: Set(input.amount),
            status_id: Set(pending.id),
            submit_date: Set(Utc::now().naive_utc()),
            approval_date: Set(None),
            ..Default::default()
        };

        let expense = expense
            .insert(&self.db)
            .await
            .map_err(|e| ExpenseError::Database(e.to_string()))?;

        tracing::debug!(
            expense_id = expense.id,
            employee_id = employee.id,
            amount = expense.amount,
            "expense submitted"
        );
        Ok(expense)
    }

    /// Approves or rejects a pending expense claim.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Expense or target status row is not found
    /// - The target status id is not 2 (Approved) or 3 (Rejected)
    /// - The expense has already been decided
    /// - Database operation fails
    pub async fn update_status(
        &self,
        expense_id: i32,
        status_id: i32,
    ) -> Result<expenses::Model, ExpenseError> {
        let expense = expenses::Entity::find_by_id(expense_id)
            .one(&self.db)
            .await
            .map_err(|e| ExpenseError::Database(e.to_string()))?
            .ok_or(ExpenseError::ExpenseNotFound(expense_id))?;

        let current = ExpenseStatus::from_id(expense.status_id)
            .ok_or(ExpenseError::MissingStatusSeed(expense.status_id))?;

        let decision = ExpenseService::decide(current, status_id)?;

        let target = expense_statuses::Entity::find_by_id(status_id)
            .one(&self.db)
            .await
            .map_err(|e| ExpenseError::Database(e.to_string()))?
            .ok_or(ExpenseError::StatusNotFound(status_id))?;

        let mut active: expenses::ActiveModel = expense.into();
        active.status_id = Set(target.id);
        active.approval_date = Set(Some(decision.decided_at));

        let updated = active
            .update(&self.db)
            .await
            .map_err(|e| ExpenseError::Database(e.to_string()))?;

        tracing::info!(
            expense_id = updated.id,
            status = %decision.new_status,
            "expense decided"
        );
        Ok(updated)
    }

    /// Checks an ad-hoc amount against a role's package entitlement.
    ///
    /// Returns `true` iff the amount fits within the package limit.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Role or category package is not found
    /// - No entitlement links the role to the package
    /// - Database operation fails
    pub async fn validate_amount(
        &self,
        role_id: i32,
        category_package_id: i32,
        amount: i32,
    ) -> Result<bool, ExpenseError> {
        roles::Entity::find_by_id(role_id)
            .one(&self.db)
            .await
            .map_err(|e| ExpenseError::Database(e.to_string()))?
            .ok_or(ExpenseError::RoleNotFound(role_id))?;

        let package = category_packages::Entity::find_by_id(category_package_id)
            .one(&self.db)
            .await
            .map_err(|e| ExpenseError::Database(e.to_string()))?
            .ok_or(ExpenseError::PackageNotFound(category_package_id))?;

        let links: Vec<PackageLink> = role_category_packages::Entity::find()
            .filter(role_category_packages::Column::RoleId.eq(role_id))
            .all(&self.db)
            .await
            .map_err(|e| ExpenseError::Database(e.to_string()))?
            .iter()
            .map(|link| PackageLink {
                role_id: link.role_id,
                category_package_id: link.category_package_id,
            })
            .collect();

        ExpenseService::check_amount(&links, role_id, &package_snapshot(&package), amount)
    }

    /// Lists all expenses still awaiting a decision.
    ///
    /// Returns an empty list when the Pending seed row is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_pending(&self) -> Result<Vec<expenses::Model>, ExpenseError> {
        let pending_id = ExpenseStatus::Pending.id();
        let pending = expense_statuses::Entity::find_by_id(pending_id)
            .one(&self.db)
            .await
            .map_err(|e| ExpenseError::Database(e.to_string()))?;

        if pending.is_none() {
            return Ok(vec![]);
        }

        expenses::Entity::find()
            .filter(expenses::Column::StatusId.eq(pending_id))
            .all(&self.db)
            .await
            .map_err(|e| ExpenseError::Database(e.to_string()))
    }

    /// Lists an employee's expenses submitted within a date range.
    ///
    /// The window is inclusive at both ends: `start` 00:00:00 through
    /// `end` 23:59:59. An unknown employee yields an empty list rather
    /// than an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn by_employee_and_date_range(
        &self,
        employee_id: i32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<expenses::Model>, ReportError> {
        let employee = employees::Entity::find_by_id(employee_id)
            .one(&self.db)
            .await
            .map_err(|e| ReportError::Database(e.to_string()))?;

        if employee.is_none() {
            return Ok(vec![]);
        }

        let (from, to) = ReportService::day_bounds(start, end);

        expenses::Entity::find()
            .filter(expenses::Column::EmployeeId.eq(employee_id))
            .filter(expenses::Column::SubmitDate.between(from, to))
            .all(&self.db)
            .await
            .map_err(|e| ReportError::Database(e.to_string()))
    }

    /// Lists expenses by status, optionally narrowed to one category,
    /// most recently submitted first.
    ///
    /// The status resolves from a numeric id or a case-insensitive name.
    /// The category filter is a case-sensitive exact name match.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The status token cannot be resolved
    /// - The category filter names no existing category
    /// - Database operation fails
    pub async fn history_by_status(
        &self,
        status_token: &str,
        category_name: Option<&str>,
    ) -> Result<Vec<expenses::Model>, ReportError> {
        let status = ExpenseStatus::resolve(status_token)
            .ok_or_else(|| ReportError::UnknownStatus(status_token.to_string()))?;

        let mut query = expenses::Entity::find()
            .filter(expenses::Column::StatusId.eq(status.id()));

        if let Some(name) = category_name {
            let category = categories::Entity::find()
                .filter(categories::Column::Name.eq(name))
                .one(&self.db)
                .await
                .map_err(|e| ReportError::Database(e.to_string()))?
                .ok_or_else(|| ReportError::UnknownCategory(name.to_string()))?;

            query = query.filter(expenses::Column::CategoryId.eq(category.id));
        }

        query
            .order_by_desc(expenses::Column::SubmitDate)
            .all(&self.db)
            .await
            .map_err(|e| ReportError::Database(e.to_string()))
    }

    /// Builds the spend-versus-limit summary for one employee.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Employee is not found
    /// - The employee's role is missing or inactive
    /// - Database operation fails
    pub async fn spend_summary(&self, employee_id: i32) -> Result<SpendSummary, ReportError> {
        let employee = employees::Entity::find_by_id(employee_id)
            .one(&self.db)
            .await
            .map_err(|e| ReportError::Database(e.to_string()))?
            .ok_or(ReportError::EmployeeNotFound(employee_id))?;

        let role = roles::Entity::find_by_id(employee.role_id)
            .one(&self.db)
            .await
            .map_err(|e| ReportError::Database(e.to_string()))?
            .ok_or(ReportError::RoleMissing(employee.role_id))?;

        if !role.is_active {
            return Err(ReportError::RoleInactive(role.name));
        }

        let links = role_category_packages::Entity::find()
            .filter(role_category_packages::Column::RoleId.eq(role.id))
            .all(&self.db)
            .await
            .map_err(|e| ReportError::Database(e.to_string()))?;

        let package_ids: Vec<i32> = links.iter().map(|link| link.category_package_id).collect();
        let entitlements: Vec<Entitlement> = if package_ids.is_empty() {
            vec![]
        } else {
            category_packages::Entity::find()
                .filter(category_packages::Column::Id.is_in(package_ids))
                .all(&self.db)
                .await
                .map_err(|e| ReportError::Database(e.to_string()))?
                .iter()
                .map(|package| Entitlement {
                    category_id: package.category_id,
                    expense_limit: package.expense_limit,
                })
                .collect()
        };

        let expense_lines: Vec<ExpenseLine> = expenses::Entity::find()
            .filter(expenses::Column::EmployeeId.eq(employee.id))
            .find_also_related(categories::Entity)
            .all(&self.db)
            .await
            .map_err(|e| ReportError::Database(e.to_string()))?
            .into_iter()
            .filter_map(|(expense, category)| {
                category.map(|category| ExpenseLine {
                    category_id: category.id,
                    category_name: category.name,
                    amount: expense.amount,
                })
            })
            .collect();

        Ok(ReportService::spend_summary(
            &employee.name,
            &role.name,
            &entitlements,
            &expense_lines,
        ))
    }
}

fn role_snapshot(role: &roles::Model) -> RoleSnapshot {
    RoleSnapshot {
        id: role.id,
        name: role.name.clone(),
        is_active: role.is_active,
    }
}

fn category_snapshot(category: &categories::Model) -> CategorySnapshot {
    CategorySnapshot {
        id: category.id,
        name: category.name.clone(),
        is_active: category.is_active,
    }
}

const fn package_snapshot(package: &category_packages::Model) -> PackageSnapshot {
    PackageSnapshot {
        id: package.id,
        category_id: package.category_id,
        expense_limit: package.expense_limit,
    }
}

//! Validation rules for expense claim submission and transitions.
//!
//! All methods are associated functions operating on plain snapshots of
//! reference data. Lookups and persistence belong to the repositories;
//! every rule decision is made here.

use chrono::Utc;

use crate::expense::error::ExpenseError;
use crate::expense::types::{
    CategorySnapshot, ExpenseStatus, PackageLink, PackageSnapshot, RoleSnapshot, StatusDecision,
};

/// Stateless validation service for expense claims.
pub struct ExpenseService;

impl ExpenseService {
    /// Validates a submission candidate against its reference data.
    ///
    /// The caller has already resolved the employee, its role, and the
    /// category; absent rows are reported as not-found before this check.
    ///
    /// # Errors
    ///
    /// * `ExpenseError::RoleInactive` if the role is disabled
    /// * `ExpenseError::CategoryInactive` if the category is disabled
    /// * `ExpenseError::InvalidAmount` if the amount is not positive
    pub fn validate_submission(
        role: &RoleSnapshot,
        category: &CategorySnapshot,
        amount: i32,
    ) -> Result<(), ExpenseError> {
        if !role.is_active {
            return Err(ExpenseError::RoleInactive(role.name.clone()));
        }

        if !category.is_active {
            return Err(ExpenseError::CategoryInactive(category.name.clone()));
        }

        if amount <= 0 {
            return Err(ExpenseError::InvalidAmount(amount));
        }

        Ok(())
    }

    /// Decides a status transition for a claim.
    ///
    /// A claim is decided exactly once: the only legal transitions are
    /// Pending -> Approved and Pending -> Rejected.
    ///
    /// # Errors
    ///
    /// * `ExpenseError::InvalidStatus` if `target_id` is not 2 or 3
    /// * `ExpenseError::AlreadyDecided` if the claim is no longer Pending
    pub fn decide(
        current: ExpenseStatus,
        target_id: i32,
    ) -> Result<StatusDecision, ExpenseError> {
        let target = match ExpenseStatus::from_id(target_id) {
            Some(status) if status.is_terminal() => status,
            _ => return Err(ExpenseError::InvalidStatus(target_id)),
        };

        match current {
            ExpenseStatus::Pending => Ok(StatusDecision {
                new_status: target,
                decided_at: Utc::now().naive_utc(),
            }),
            _ => Err(ExpenseError::AlreadyDecided { current }),
        }
    }

    /// Checks a claim amount against a role's package entitlement.
    ///
    /// Returns `true` iff the amount fits within the package limit. The
    /// boolean is the result of the check, not an error: an amount over
    /// the limit is a legitimate answer, a missing entitlement is not.
    ///
    /// # Errors
    ///
    /// Returns `ExpenseError::RoleNotEntitled` if no link associates the
    /// role with the package.
    pub fn check_amount(
        links: &[PackageLink],
        role_id: i32,
        package: &PackageSnapshot,
        amount: i32,
    ) -> Result<bool, ExpenseError> {
        let entitled = links
            .iter()
            .any(|link| link.role_id == role_id && link.category_package_id == package.id);

        if !entitled {
            return Err(ExpenseError::RoleNotEntitled {
                role_id,
                category_package_id: package.id,
            });
        }

        Ok(amount <= package.expense_limit)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn active_role() -> RoleSnapshot {
        RoleSnapshot {
            id: 1,
            name: "Engineer".to_string(),
            is_active: true,
        }
    }

    fn active_category() -> CategorySnapshot {
        CategorySnapshot {
            id: 10,
            name: "Travel".to_string(),
            is_active: true,
        }
    }

    #[test]
    fn test_submission_with_active_references() {
        let result = ExpenseService::validate_submission(&active_role(), &active_category(), 250);
        assert!(result.is_ok());
    }

    #[test]
    fn test_submission_inactive_role_fails() {
        let role = RoleSnapshot {
            is_active: false,
            ..active_role()
        };
        let result = ExpenseService::validate_submission(&role, &active_category(), 250);
        assert!(matches!(result, Err(ExpenseError::RoleInactive(name)) if name == "Engineer"));
    }

    #[test]
    fn test_submission_inactive_category_fails() {
        let category = CategorySnapshot {
            is_active: false,
            ..active_category()
        };
        let result = ExpenseService::validate_submission(&active_role(), &category, 250);
        assert!(matches!(result, Err(ExpenseError::CategoryInactive(name)) if name == "Travel"));
    }

    #[rstest]
    #[case(0)]
    #[case(-40)]
    fn test_submission_non_positive_amount_fails(#[case] amount: i32) {
        let result = ExpenseService::validate_submission(&active_role(), &active_category(), amount);
        assert!(matches!(result, Err(ExpenseError::InvalidAmount(a)) if a == amount));
    }

    #[test]
    fn test_decide_approve_from_pending() {
        let decision = ExpenseService::decide(ExpenseStatus::Pending, 2).unwrap();
        assert_eq!(decision.new_status, ExpenseStatus::Approved);
    }

    #[test]
    fn test_decide_reject_from_pending() {
        let decision = ExpenseService::decide(ExpenseStatus::Pending, 3).unwrap();
        assert_eq!(decision.new_status, ExpenseStatus::Rejected);
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(4)]
    #[case(-2)]
    fn test_decide_invalid_target_fails(#[case] target: i32) {
        let result = ExpenseService::decide(ExpenseStatus::Pending, target);
        assert!(matches!(result, Err(ExpenseError::InvalidStatus(t)) if t == target));
    }

    #[rstest]
    #[case(ExpenseStatus::Approved)]
    #[case(ExpenseStatus::Rejected)]
    fn test_decide_from_terminal_status_fails(#[case] current: ExpenseStatus) {
        let result = ExpenseService::decide(current, 2);
        assert!(matches!(result, Err(ExpenseError::AlreadyDecided { current: c }) if c == current));
    }

    #[test]
    fn test_check_amount_within_limit() {
        let package = PackageSnapshot {
            id: 5,
            category_id: 10,
            expense_limit: 1000,
        };
        let links = [PackageLink {
            role_id: 1,
            category_package_id: 5,
        }];

        assert!(ExpenseService::check_amount(&links, 1, &package, 999).unwrap());
        assert!(ExpenseService::check_amount(&links, 1, &package, 1000).unwrap());
        assert!(!ExpenseService::check_amount(&links, 1, &package, 1001).unwrap());
    }

    #[test]
    fn test_check_amount_without_entitlement_fails() {
        let package = PackageSnapshot {
            id: 5,
            category_id: 10,
            expense_limit: 1000,
        };
        let links = [PackageLink {
            role_id: 2,
            category_package_id: 5,
        }];

        let result = ExpenseService::check_amount(&links, 1, &package, 100);
        assert!(matches!(
            result,
            Err(ExpenseError::RoleNotEntitled {
                role_id: 1,
                category_package_id: 5,
            })
        ));
    }

    #[rstest]
    #[case("1", Some(ExpenseStatus::Pending))]
    #[case("2", Some(ExpenseStatus::Approved))]
    #[case("3", Some(ExpenseStatus::Rejected))]
    #[case("pending", Some(ExpenseStatus::Pending))]
    #[case("APPROVED", Some(ExpenseStatus::Approved))]
    #[case(" Rejected ", Some(ExpenseStatus::Rejected))]
    #[case("7", None)]
    #[case("draft", None)]
    #[case("", None)]
    fn test_status_resolution(#[case] token: &str, #[case] expected: Option<ExpenseStatus>) {
        assert_eq!(ExpenseStatus::resolve(token), expected);
    }

    #[test]
    fn test_status_ids_round_trip() {
        for status in [
            ExpenseStatus::Pending,
            ExpenseStatus::Approved,
            ExpenseStatus::Rejected,
        ] {
            assert_eq!(ExpenseStatus::from_id(status.id()), Some(status));
        }
        assert_eq!(ExpenseStatus::from_id(0), None);
    }
}

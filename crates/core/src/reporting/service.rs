//! Report calculation service.

use std::collections::{BTreeMap, HashMap};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use super::types::{CategorySpend, Entitlement, ExpenseLine, SpendSummary};

/// Service for spend-history calculations.
pub struct ReportService;

impl ReportService {
    /// Expands a calendar-date range into inclusive timestamp bounds.
    ///
    /// The window covers `start` 00:00:00 through `end` 23:59:59, both
    /// ends inclusive.
    #[must_use]
    pub fn day_bounds(start: NaiveDate, end: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
        let from = start.and_time(NaiveTime::MIN);
        let to = end.and_time(NaiveTime::from_hms_opt(23, 59, 59).expect("valid wall-clock time"));
        (from, to)
    }

    /// Builds the spend-versus-limit summary for one employee.
    ///
    /// Expenses are summed per category regardless of status, Pending
    /// included. A category only appears in the detail map when the
    /// role holds an entitlement for it; spend without a package is
    /// silently omitted.
    #[must_use]
    pub fn spend_summary(
        employee_name: &str,
        role_name: &str,
        entitlements: &[Entitlement],
        expenses: &[ExpenseLine],
    ) -> SpendSummary {
        let limits: HashMap<i32, i32> = entitlements
            .iter()
            .map(|e| (e.category_id, e.expense_limit))
            .collect();

        let mut totals: HashMap<i32, (String, i64)> = HashMap::new();
        for line in expenses {
            let entry = totals
                .entry(line.category_id)
                .or_insert_with(|| (line.category_name.clone(), 0));
            entry.1 += i64::from(line.amount);
        }

        let mut category_details = BTreeMap::new();
        for (category_id, (category_name, used)) in totals {
            let Some(&limit) = limits.get(&category_id) else {
                continue;
            };
            let remaining = i64::from(limit) - used;
            let message = if remaining < 0 {
                format!("exceeded by {}", remaining.abs())
            } else {
                format!("remaining: {remaining}")
            };
            category_details.insert(
                category_name,
                CategorySpend {
                    used,
                    remaining,
                    message,
                },
            );
        }

        SpendSummary {
            employee_name: employee_name.to_string(),
            role_name: role_name.to_string(),
            category_details,
        }
    }
}

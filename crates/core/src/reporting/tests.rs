use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

use super::service::ReportService;
use super::types::{Entitlement, ExpenseLine};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn line(category_id: i32, category_name: &str, amount: i32) -> ExpenseLine {
    ExpenseLine {
        category_id,
        category_name: category_name.to_string(),
        amount,
    }
}

#[test]
fn test_day_bounds_cover_full_days() {
    let (from, to) = ReportService::day_bounds(date(2024, 12, 1), date(2024, 12, 31));

    assert_eq!(from.to_string(), "2024-12-01 00:00:00");
    assert_eq!(to.to_string(), "2024-12-31 23:59:59");
}

#[test]
fn test_day_bounds_are_inclusive_at_both_ends() {
    let (from, to) = ReportService::day_bounds(date(2024, 12, 1), date(2024, 12, 31));

    assert!(from <= to);

    // One second outside either boundary falls out.
    let just_before = from - Duration::seconds(1);
    let just_after = to + Duration::seconds(1);
    assert!(just_before < from);
    assert!(just_after > to);
    assert_eq!(just_before.to_string(), "2024-11-30 23:59:59");
    assert_eq!(just_after.to_string(), "2025-01-01 00:00:00");
}

#[test]
fn test_spend_summary_reports_exceeded_and_remaining() {
    let entitlements = [
        Entitlement {
            category_id: 1,
            expense_limit: 80,
        },
        Entitlement {
            category_id: 2,
            expense_limit: 100,
        },
    ];
    let expenses = [line(1, "Travel", 100), line(2, "Meals", 50)];

    let summary = ReportService::spend_summary("Asha Rao", "Engineer", &entitlements, &expenses);

    assert_eq!(summary.employee_name, "Asha Rao");
    assert_eq!(summary.role_name, "Engineer");

    let travel = &summary.category_details["Travel"];
    assert_eq!(travel.used, 100);
    assert_eq!(travel.remaining, -20);
    assert_eq!(travel.message, "exceeded by 20");

    let meals = &summary.category_details["Meals"];
    assert_eq!(meals.used, 50);
    assert_eq!(meals.remaining, 50);
    assert_eq!(meals.message, "remaining: 50");
}

#[test]
fn test_spend_summary_sums_all_claims_per_category() {
    let entitlements = [Entitlement {
        category_id: 1,
        expense_limit: 500,
    }];
    let expenses = [
        line(1, "Travel", 120),
        line(1, "Travel", 80),
        line(1, "Travel", 200),
    ];

    let summary = ReportService::spend_summary("Asha Rao", "Engineer", &entitlements, &expenses);

    let travel = &summary.category_details["Travel"];
    assert_eq!(travel.used, 400);
    assert_eq!(travel.remaining, 100);
}

#[test]
fn test_spend_summary_omits_categories_without_entitlement() {
    let entitlements = [Entitlement {
        category_id: 1,
        expense_limit: 500,
    }];
    let expenses = [line(1, "Travel", 100), line(9, "Office Supplies", 40)];

    let summary = ReportService::spend_summary("Asha Rao", "Engineer", &entitlements, &expenses);

    assert!(summary.category_details.contains_key("Travel"));
    assert!(!summary.category_details.contains_key("Office Supplies"));
    assert_eq!(summary.category_details.len(), 1);
}

#[test]
fn test_spend_summary_with_no_expenses_is_empty() {
    let entitlements = [Entitlement {
        category_id: 1,
        expense_limit: 500,
    }];

    let summary = ReportService::spend_summary("Asha Rao", "Engineer", &entitlements, &[]);

    assert!(summary.category_details.is_empty());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// For any limit and spend, remaining is exactly limit - used and the
    /// message agrees with the sign of the remainder.
    #[test]
    fn prop_remaining_matches_limit_minus_used(
        limit in 0i32..1_000_000,
        amounts in prop::collection::vec(1i32..10_000, 1..20),
    ) {
        let entitlements = [Entitlement { category_id: 1, expense_limit: limit }];
        let expenses: Vec<ExpenseLine> =
            amounts.iter().map(|&a| line(1, "Travel", a)).collect();

        let summary = ReportService::spend_summary("E", "R", &entitlements, &expenses);
        let detail = &summary.category_details["Travel"];

        let used: i64 = amounts.iter().map(|&a| i64::from(a)).sum();
        prop_assert_eq!(detail.used, used);
        prop_assert_eq!(detail.remaining, i64::from(limit) - used);
        if detail.remaining < 0 {
            prop_assert!(detail.message.starts_with("exceeded by "));
        } else {
            prop_assert!(detail.message.starts_with("remaining: "));
        }
    }

    /// For any ordered date pair, the window starts at midnight and ends
    /// at the last second of the end date.
    #[test]
    fn prop_day_bounds_span_whole_days(
        start_off in 0i64..3650,
        span in 0i64..365,
    ) {
        let start = date(2020, 1, 1) + Duration::days(start_off);
        let end = start + Duration::days(span);

        let (from, to) = ReportService::day_bounds(start, end);

        prop_assert_eq!(from.date(), start);
        prop_assert_eq!(to.date(), end);
        prop_assert_eq!(from.format("%H:%M:%S").to_string(), "00:00:00");
        prop_assert_eq!(to.format("%H:%M:%S").to_string(), "23:59:59");
        prop_assert!(from <= to);
    }
}

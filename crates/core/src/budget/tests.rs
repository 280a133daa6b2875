//! Property-based and boundary tests for the budget report.

use proptest::prelude::*;
use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tripsplit_shared::types::Money;

use super::service::BudgetService;

proptest! {
    /// remaining = budget - spend, and over budget exactly when remaining < 0.
    #[test]
    fn prop_remaining_and_over_budget(
        budget in 0i64..100_000_000,
        spend in 0i64..100_000_000,
    ) {
        let budget = Money::from_minor_units(budget);
        let spend = Money::from_minor_units(spend);

        let report = BudgetService::report(Some(budget), spend);

        prop_assert_eq!(report.remaining, budget - spend);
        prop_assert_eq!(report.is_over_budget, spend > budget);
        prop_assert_eq!(report.total_spend, spend);
    }

    /// Overrun is never negative and is zero whenever spend fits the budget.
    #[test]
    fn prop_overrun_non_negative(
        budget in 0i64..100_000_000,
        spend in 0i64..100_000_000,
    ) {
        let report = BudgetService::report(
            Some(Money::from_minor_units(budget)),
            Money::from_minor_units(spend),
        );

        prop_assert!(!report.overrun.is_negative());
        if report.is_over_budget {
            prop_assert_eq!(report.overrun, -report.remaining);
        } else {
            prop_assert_eq!(report.overrun, Money::ZERO);
        }
    }

    /// Untracked budgets never report utilization.
    #[test]
    fn prop_untracked_has_zero_utilization(spend in 0i64..100_000_000) {
        let report = BudgetService::report(None, Money::from_minor_units(spend));

        prop_assert!(!report.is_tracked);
        prop_assert_eq!(report.utilization_percent, Decimal::ZERO);
    }
}

#[rstest]
#[case::exactly_on_budget(dec!(100.00), dec!(100.00), false)]
#[case::one_cent_over(dec!(100.00), dec!(100.01), true)]
#[case::one_cent_under(dec!(100.00), dec!(99.99), false)]
#[case::nothing_spent(dec!(100.00), dec!(0.00), false)]
fn test_budget_boundary(#[case] budget: Decimal, #[case] spend: Decimal, #[case] over: bool) {
    let report = BudgetService::report(
        Some(Money::from_decimal(budget)),
        Money::from_decimal(spend),
    );

    assert_eq!(report.is_over_budget, over);
}

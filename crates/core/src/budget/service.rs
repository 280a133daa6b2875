//! Budget report calculation.

use rust_decimal::Decimal;
use tripsplit_shared::types::Money;

use super::types::BudgetReport;

/// Budget service for business logic.
pub struct BudgetService;

impl BudgetService {
    /// Compares a trip's budget with its total spend.
    ///
    /// A missing budget is reported as zero with `is_tracked = false`; the
    /// numbers are still computed so callers decide whether to show them.
    /// Exceeding the budget is reported, never blocked.
    #[must_use]
    pub fn report(budget: Option<Money>, total_spend: Money) -> BudgetReport {
        let budget_amount = budget.unwrap_or(Money::ZERO);
        let remaining = budget_amount - total_spend;
        let is_over_budget = remaining.is_negative();
        let is_tracked = budget_amount.is_positive();

        let overrun = if is_over_budget { -remaining } else { Money::ZERO };

        let utilization_percent = if is_tracked {
            (total_spend.amount() / budget_amount.amount() * Decimal::ONE_HUNDRED).round_dp(2)
        } else {
            Decimal::ZERO
        };

        BudgetReport {
            total_spend,
            budget: budget_amount,
            remaining,
            is_over_budget,
            is_tracked,
            overrun,
            utilization_percent,
        }
    }
}

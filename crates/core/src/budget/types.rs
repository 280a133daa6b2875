//! Budget report types.

use rust_decimal::Decimal;
use serde::Serialize;
use tripsplit_shared::types::Money;

/// Planned budget compared against total spend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetReport {
    /// Sum of every expense amount.
    pub total_spend: Money,
    /// Planned budget; zero when none was set.
    pub budget: Money,
    /// `budget - total_spend`; negative when over budget.
    pub remaining: Money,
    /// True only when `remaining` is strictly below zero.
    pub is_over_budget: bool,
    /// False when the trip has no budget or a zero budget.
    pub is_tracked: bool,
    /// How far spend exceeds the budget; zero when within budget.
    pub overrun: Money,
    /// `total_spend / budget * 100`, two places; zero when untracked.
    pub utilization_percent: Decimal,
}

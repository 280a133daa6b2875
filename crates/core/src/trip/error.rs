//! Trip record error types.

use thiserror::Error;
use tripsplit_shared::AppError;
use tripsplit_shared::types::{ExpenseId, Money};

/// Precondition violations in the records handed to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TripError {
    /// Budget cannot be negative.
    #[error("Trip budget cannot be negative: {0}")]
    NegativeBudget(Money),

    /// Expense amount cannot be negative.
    #[error("Expense {expense_id} has a negative amount: {amount}")]
    NegativeExpenseAmount {
        /// Offending expense.
        expense_id: ExpenseId,
        /// Its amount.
        amount: Money,
    },

    /// The same expense appears twice in one snapshot.
    #[error("Expense {0} appears more than once")]
    DuplicateExpense(ExpenseId),

    /// No participants left after deduplication.
    #[error("Trip has no participants")]
    EmptyRoster,
}

impl From<TripError> for AppError {
    fn from(err: TripError) -> Self {
        Self::Validation(err.to_string())
    }
}

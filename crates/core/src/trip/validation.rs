//! Boundary validation for trip records.

use std::collections::HashSet;

use super::error::TripError;
use super::types::{Expense, Trip};

/// Validates a trip and its expenses before any computation runs.
///
/// Returns the first violation found; the engine never computes over partially
/// valid data.
///
/// # Errors
///
/// Returns `TripError::NegativeBudget` if the budget is below zero.
/// Returns `TripError::NegativeExpenseAmount` if any expense amount is below zero.
/// Returns `TripError::DuplicateExpense` if an expense ID is repeated.
pub fn validate(trip: &Trip, expenses: &[Expense]) -> Result<(), TripError> {
    if let Some(budget) = trip.budget
        && budget.is_negative()
    {
        return Err(TripError::NegativeBudget(budget));
    }

    let mut seen = HashSet::with_capacity(expenses.len());
    for expense in expenses {
        if expense.amount.is_negative() {
            return Err(TripError::NegativeExpenseAmount {
                expense_id: expense.id,
                amount: expense.amount,
            });
        }
        if !seen.insert(expense.id) {
            return Err(TripError::DuplicateExpense(expense.id));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{expense, trip_with, user};
    use tripsplit_shared::types::Money;

    #[test]
    fn test_valid_records_pass() {
        let alice = user("alice");
        let trip = trip_with(&alice, &[]);
        let expenses = vec![expense(&alice, 10_000), expense(&alice, 0)];

        assert!(validate(&trip, &expenses).is_ok());
    }

    #[test]
    fn test_negative_budget_rejected() {
        let mut trip = trip_with(&user("alice"), &[]);
        trip.budget = Some(Money::from_minor_units(-1));

        assert_eq!(
            validate(&trip, &[]),
            Err(TripError::NegativeBudget(Money::from_minor_units(-1)))
        );
    }

    #[test]
    fn test_negative_amount_rejected() {
        let alice = user("alice");
        let trip = trip_with(&alice, &[]);
        let bad = expense(&alice, -500);
        let bad_id = bad.id;

        let result = validate(&trip, &[expense(&alice, 100), bad]);
        assert!(matches!(
            result,
            Err(TripError::NegativeExpenseAmount { expense_id, .. }) if expense_id == bad_id
        ));
    }

    #[test]
    fn test_duplicate_expense_rejected() {
        let alice = user("alice");
        let trip = trip_with(&alice, &[]);
        let first = expense(&alice, 100);
        let again = first.clone();

        assert_eq!(
            validate(&trip, &[first.clone(), again]),
            Err(TripError::DuplicateExpense(first.id))
        );
    }

    #[test]
    fn test_payer_outside_roster_is_not_a_violation() {
        let alice = user("alice");
        let trip = trip_with(&alice, &[]);

        assert!(validate(&trip, &[expense(&user("former"), 2_000)]).is_ok());
    }
}

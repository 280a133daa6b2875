//! Per-participant paid totals.

use std::collections::HashMap;

use serde::Serialize;
use tracing::warn;
use tripsplit_shared::types::{Money, UserId};

use crate::trip::{Expense, Participant, Trip, TripError};

/// One roster participant and what they have paid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerLine {
    /// The participant.
    pub participant: Participant,
    /// Sum of the amounts of every expense this participant paid.
    pub total_paid: Money,
    /// Number of expenses this participant paid.
    pub expense_count: usize,
}

impl LedgerLine {
    fn new(participant: Participant) -> Self {
        Self {
            participant,
            total_paid: Money::ZERO,
            expense_count: 0,
        }
    }

    /// Returns true if this line belongs to the trip organizer.
    #[must_use]
    pub fn is_organizer(&self) -> bool {
        self.participant.is_organizer()
    }
}

/// Paid totals for a trip's roster, in roster order.
///
/// Expenses whose payer is not on the roster still count toward
/// `total_spend` but credit no line; their sum is kept in
/// `unattributed_total`, so `attributed_total + unattributed_total ==
/// total_spend` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParticipantLedger {
    lines: Vec<LedgerLine>,
    total_spend: Money,
    unattributed_total: Money,
}

impl ParticipantLedger {
    /// Builds the ledger for a trip's current roster.
    #[must_use]
    pub fn build(trip: &Trip, expenses: &[Expense]) -> Self {
        Self::accumulate(trip.roster(), expenses)
    }

    /// Builds the ledger for an explicit roster.
    ///
    /// The roster is deduplicated by user, keeping first occurrences.
    ///
    /// # Errors
    ///
    /// Returns `TripError::EmptyRoster` if the roster is empty.
    pub fn from_roster(roster: Vec<Participant>, expenses: &[Expense]) -> Result<Self, TripError> {
        if roster.is_empty() {
            return Err(TripError::EmptyRoster);
        }

        let mut unique: Vec<Participant> = Vec::with_capacity(roster.len());
        for participant in roster {
            if !unique.iter().any(|p| p.user.id == participant.user.id) {
                unique.push(participant);
            }
        }

        Ok(Self::accumulate(unique, expenses))
    }

    fn accumulate(roster: Vec<Participant>, expenses: &[Expense]) -> Self {
        let index: HashMap<UserId, usize> = roster
            .iter()
            .enumerate()
            .map(|(i, p)| (p.user.id, i))
            .collect();
        let mut lines: Vec<LedgerLine> = roster.into_iter().map(LedgerLine::new).collect();

        let mut total_spend = Money::ZERO;
        let mut unattributed_total = Money::ZERO;

        for expense in expenses {
            total_spend += expense.amount;

            if let Some(&i) = index.get(&expense.payer.id) {
                lines[i].total_paid += expense.amount;
                lines[i].expense_count += 1;
            } else {
                warn!(
                    expense_id = %expense.id,
                    payer_id = %expense.payer.id,
                    amount = %expense.amount,
                    "Expense payer is not on the trip roster; counting toward spend only"
                );
                unattributed_total += expense.amount;
            }
        }

        Self {
            lines,
            total_spend,
            unattributed_total,
        }
    }

    /// Returns the lines in roster order (organizer first).
    #[must_use]
    pub fn lines(&self) -> &[LedgerLine] {
        &self.lines
    }

    /// Returns the number of roster participants.
    #[must_use]
    pub fn participant_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the sum of every expense amount, regardless of payer.
    #[must_use]
    pub fn total_spend(&self) -> Money {
        self.total_spend
    }

    /// Returns the sum of amounts credited to roster participants.
    #[must_use]
    pub fn attributed_total(&self) -> Money {
        self.lines.iter().map(|l| l.total_paid).sum()
    }

    /// Returns the sum of amounts paid by users not on the roster.
    #[must_use]
    pub fn unattributed_total(&self) -> Money {
        self.unattributed_total
    }

    /// Returns the line for a user, if they are on the roster.
    #[must_use]
    pub fn line_for(&self, user_id: UserId) -> Option<&LedgerLine> {
        self.lines.iter().find(|l| l.participant.user.id == user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{expense, trip_with, user};
    use crate::trip::ParticipantRole;
    use rust_decimal_macros::dec;

    #[test]
    fn test_paid_totals_per_participant() {
        let alice = user("alice");
        let bob = user("bob");
        let trip = trip_with(&alice, &[&bob]);
        let expenses = vec![
            expense(&alice, 6_000),
            expense(&bob, 5_000),
            expense(&alice, 4_000),
        ];

        let ledger = ParticipantLedger::build(&trip, &expenses);

        assert_eq!(ledger.participant_count(), 2);
        assert_eq!(ledger.total_spend().amount(), dec!(150.00));

        let alice_line = ledger.line_for(alice.id).unwrap();
        assert!(alice_line.is_organizer());
        assert_eq!(alice_line.total_paid.amount(), dec!(100.00));
        assert_eq!(alice_line.expense_count, 2);

        let bob_line = ledger.line_for(bob.id).unwrap();
        assert_eq!(bob_line.total_paid.amount(), dec!(50.00));
        assert_eq!(bob_line.expense_count, 1);
    }

    #[test]
    fn test_participant_without_expenses_has_zero() {
        let alice = user("alice");
        let bob = user("bob");
        let trip = trip_with(&alice, &[&bob]);

        let ledger = ParticipantLedger::build(&trip, &[expense(&alice, 1_000)]);

        assert_eq!(ledger.lines()[1].total_paid, Money::ZERO);
        assert_eq!(ledger.lines()[1].expense_count, 0);
    }

    #[test]
    fn test_non_roster_payer_counts_toward_spend_only() {
        let alice = user("alice");
        let former = user("former");
        let trip = trip_with(&alice, &[]);
        let expenses = vec![expense(&alice, 1_000), expense(&former, 2_500)];

        let ledger = ParticipantLedger::build(&trip, &expenses);

        assert_eq!(ledger.total_spend().amount(), dec!(35.00));
        assert_eq!(ledger.attributed_total().amount(), dec!(10.00));
        assert_eq!(ledger.unattributed_total().amount(), dec!(25.00));
        assert!(ledger.line_for(former.id).is_none());
    }

    #[test]
    fn test_lines_follow_roster_order() {
        let alice = user("alice");
        let bob = user("bob");
        let carol = user("carol");
        let trip = trip_with(&alice, &[&carol, &bob]);

        let ledger = ParticipantLedger::build(&trip, &[expense(&bob, 100)]);
        let ids: Vec<UserId> = ledger.lines().iter().map(|l| l.participant.user.id).collect();

        assert_eq!(ids, [alice.id, carol.id, bob.id]);
    }

    #[test]
    fn test_from_roster_rejects_empty() {
        assert_eq!(
            ParticipantLedger::from_roster(Vec::new(), &[]),
            Err(TripError::EmptyRoster)
        );
    }

    #[test]
    fn test_from_roster_deduplicates() {
        let alice = user("alice");
        let roster = vec![
            Participant {
                role: ParticipantRole::Organizer,
                user: alice.clone(),
            },
            Participant {
                role: ParticipantRole::Member,
                user: alice.clone(),
            },
        ];

        let ledger = ParticipantLedger::from_roster(roster, &[expense(&alice, 700)]).unwrap();

        assert_eq!(ledger.participant_count(), 1);
        assert_eq!(ledger.lines()[0].participant.role, ParticipantRole::Organizer);
        assert_eq!(ledger.lines()[0].total_paid.amount(), dec!(7.00));
    }
}

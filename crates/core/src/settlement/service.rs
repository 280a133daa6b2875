//! Settlement calculation.

use rust_decimal::Decimal;
use tripsplit_shared::types::Money;

use super::types::{BalanceStatus, Settlement, SettlementLine, SettlementPolicy};
use crate::ledger::ParticipantLedger;

/// Computes equal-split balances from a participant ledger.
#[derive(Debug, Clone, Copy, Default)]
pub struct SettlementCalculator {
    policy: SettlementPolicy,
}

impl SettlementCalculator {
    /// Creates a calculator with the given policy.
    #[must_use]
    pub const fn new(policy: SettlementPolicy) -> Self {
        Self { policy }
    }

    /// Splits `total_spend` equally over the ledger's participants.
    ///
    /// `total_spend` includes expenses by payers who are no longer on the
    /// roster, so those amounts raise everyone's share without crediting
    /// anyone. An empty ledger is split as if it had one participant.
    ///
    /// Classification works on `total_paid * n - total_spend` against
    /// `tolerance * n`, which is the exact balance scaled by `n` and stays in
    /// whole cents. Only the reported `share` and `balance` are rounded.
    #[must_use]
    pub fn calculate(&self, ledger: &ParticipantLedger, total_spend: Money) -> Settlement {
        let member_count = ledger.participant_count().max(1);
        let share = total_spend.divide_evenly(member_count);
        let band = self.policy.tolerance.times(member_count);
        let divisor = Decimal::from(member_count);

        let lines = ledger
            .lines()
            .iter()
            .map(|line| {
                let scaled = line.total_paid.times(member_count) - total_spend;
                SettlementLine {
                    participant: line.participant.clone(),
                    total_paid: line.total_paid,
                    share,
                    balance: Money::from_decimal(scaled.amount() / divisor),
                    status: BalanceStatus::classify(scaled, band),
                }
            })
            .collect();

        Settlement {
            member_count,
            total_spend,
            share,
            lines,
            is_applicable: total_spend.is_positive(),
        }
    }
}

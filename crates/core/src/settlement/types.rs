//! Settlement data types.

use serde::{Deserialize, Serialize};
use tripsplit_shared::config::SettlementConfig;
use tripsplit_shared::types::{Money, UserId};

use crate::trip::Participant;

/// Classification of a participant's balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceStatus {
    /// Paid more than their share; owed money by the group.
    Creditor,
    /// Paid less than their share; owes money into the group.
    Debtor,
    /// Within the tolerance band of zero.
    Settled,
}

impl BalanceStatus {
    /// Classifies a balance against a tolerance band.
    ///
    /// The band is exclusive: a balance of exactly `+tolerance` is a creditor
    /// and exactly `-tolerance` is a debtor. A zero balance is always settled,
    /// even with a zero tolerance.
    #[must_use]
    pub fn classify(balance: Money, tolerance: Money) -> Self {
        if balance.is_approximately_zero(tolerance) {
            Self::Settled
        } else if balance.is_positive() {
            Self::Creditor
        } else if balance.is_negative() {
            Self::Debtor
        } else {
            Self::Settled
        }
    }
}

/// Settlement rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettlementPolicy {
    /// Half-width of the settled band. Small real imbalances inside it are
    /// treated as settled. Never negative.
    pub tolerance: Money,
}

impl Default for SettlementPolicy {
    fn default() -> Self {
        Self {
            tolerance: Money::CENT,
        }
    }
}

impl From<&SettlementConfig> for SettlementPolicy {
    fn from(config: &SettlementConfig) -> Self {
        Self {
            tolerance: config.tolerance,
        }
    }
}

/// Settlement position of one participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettlementLine {
    /// The participant.
    pub participant: Participant,
    /// What they paid.
    pub total_paid: Money,
    /// Their equal share of total spend.
    pub share: Money,
    /// `total_paid - total_spend / member_count`, rounded to the cent.
    pub balance: Money,
    /// Classification of the unrounded balance.
    pub status: BalanceStatus,
}

/// Equal-split settlement for a whole trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settlement {
    /// Divisor used for the split (at least 1).
    pub member_count: usize,
    /// Total spend being split.
    pub total_spend: Money,
    /// Per-head share, rounded to the cent for display.
    pub share: Money,
    /// One line per participant, in ledger order.
    pub lines: Vec<SettlementLine>,
    /// False when nothing has been spent; presentation should then hide the
    /// settlement (every line is trivially settled).
    pub is_applicable: bool,
}

impl Settlement {
    /// Returns lines of participants the group owes money to.
    pub fn creditors(&self) -> impl Iterator<Item = &SettlementLine> {
        self.lines
            .iter()
            .filter(|l| l.status == BalanceStatus::Creditor)
    }

    /// Returns lines of participants who owe money into the group.
    pub fn debtors(&self) -> impl Iterator<Item = &SettlementLine> {
        self.lines.iter().filter(|l| l.status == BalanceStatus::Debtor)
    }

    /// Returns the sum of all balances.
    ///
    /// Zero up to half a cent of rounding per line, minus any spend paid by
    /// users no longer on the roster.
    #[must_use]
    pub fn balance_sum(&self) -> Money {
        self.lines.iter().map(|l| l.balance).sum()
    }

    /// Returns the line for a user, if they are on the roster.
    #[must_use]
    pub fn line_for(&self, user_id: UserId) -> Option<&SettlementLine> {
        self.lines.iter().find(|l| l.participant.user.id == user_id)
    }
}

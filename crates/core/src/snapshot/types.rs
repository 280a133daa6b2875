//! Snapshot read model.

use serde::Serialize;
use tripsplit_shared::types::{Currency, TripId};

use crate::budget::BudgetReport;
use crate::ledger::ParticipantLedger;
use crate::settlement::Settlement;

/// The fully derived, immutable financial view of one trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TripSnapshot {
    /// Trip ID.
    pub trip_id: TripId,
    /// Trip name.
    pub trip_name: String,
    /// Currency every amount is in.
    pub currency: Currency,
    /// Per-participant paid totals.
    pub ledger: ParticipantLedger,
    /// Budget versus spend.
    pub budget_report: BudgetReport,
    /// Equal-split balances.
    pub settlement: Settlement,
}

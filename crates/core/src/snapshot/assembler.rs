//! Snapshot assembler.

use tracing::debug;
use tripsplit_shared::config::SettlementConfig;
use tripsplit_shared::types::Currency;

use super::types::TripSnapshot;
use crate::budget::BudgetService;
use crate::ledger::ParticipantLedger;
use crate::settlement::{SettlementCalculator, SettlementPolicy};
use crate::trip::{Expense, Trip, TripError, TripRecord, validate};

/// Composes the ledger, budget report, and settlement into a snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct SnapshotAssembler {
    calculator: SettlementCalculator,
    default_currency: Currency,
}

impl SnapshotAssembler {
    /// Creates an assembler with the given settlement policy.
    #[must_use]
    pub const fn new(policy: SettlementPolicy, default_currency: Currency) -> Self {
        Self {
            calculator: SettlementCalculator::new(policy),
            default_currency,
        }
    }

    /// Creates an assembler from loaded configuration.
    #[must_use]
    pub fn from_config(config: &SettlementConfig) -> Self {
        Self::new(SettlementPolicy::from(config), config.currency)
    }

    /// Validates the records and derives a fresh snapshot from them.
    ///
    /// Inputs are never mutated and nothing is retained between calls.
    ///
    /// # Errors
    ///
    /// Returns a `TripError` if the records violate a precondition; no
    /// partial snapshot is produced.
    pub fn assemble(&self, trip: &Trip, expenses: &[Expense]) -> Result<TripSnapshot, TripError> {
        validate(trip, expenses)?;

        let ledger = ParticipantLedger::build(trip, expenses);
        let total_spend = ledger.total_spend();
        let budget_report = BudgetService::report(trip.budget, total_spend);
        let settlement = self.calculator.calculate(&ledger, total_spend);

        debug!(
            trip_id = %trip.id,
            participants = ledger.participant_count(),
            expenses = expenses.len(),
            total_spend = %total_spend,
            over_budget = budget_report.is_over_budget,
            "Assembled trip snapshot"
        );

        Ok(TripSnapshot {
            trip_id: trip.id,
            trip_name: trip.name.clone(),
            currency: trip.currency.unwrap_or(self.default_currency),
            ledger,
            budget_report,
            settlement,
        })
    }

    /// Assembles a snapshot from a fetched trip record.
    ///
    /// # Errors
    ///
    /// See [`SnapshotAssembler::assemble`].
    pub fn assemble_record(&self, record: &TripRecord) -> Result<TripSnapshot, TripError> {
        self.assemble(&record.trip, &record.expenses)
    }
}

/// Computes a trip snapshot with the default one-cent tolerance.
///
/// # Errors
///
/// Returns a `TripError` if the records violate a precondition.
pub fn compute_settlement(trip: &Trip, expenses: &[Expense]) -> Result<TripSnapshot, TripError> {
    SnapshotAssembler::default().assemble(trip, expenses)
}

/// Computes a snapshot for a fetched trip record with default settings.
///
/// # Errors
///
/// Returns a `TripError` if the record violates a precondition.
pub fn compute_snapshot(record: &TripRecord) -> Result<TripSnapshot, TripError> {
    SnapshotAssembler::default().assemble_record(record)
}

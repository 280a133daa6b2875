//! Expense settlement engine for Tripsplit.
//!
//! This crate contains pure business logic with ZERO web, database, or file
//! dependencies. Given an already-fetched trip, its members, and its expenses,
//! it derives a fresh snapshot on every call.
//!
//! # Modules
//!
//! - `trip` - Trip, membership, and expense records plus boundary validation
//! - `ledger` - Ordered roster and per-participant paid totals
//! - `budget` - Budget versus total spend
//! - `settlement` - Equal-split balances and creditor/debtor classification
//! - `snapshot` - Composition of the above into one read model

pub mod budget;
pub mod ledger;
pub mod settlement;
pub mod snapshot;
pub mod trip;

#[cfg(test)]
mod test_support;

pub use snapshot::{SnapshotAssembler, TripSnapshot, compute_settlement, compute_snapshot};

//! Trip snapshot assembly.
//!
//! Recomputes the ledger, budget report, and settlement from the supplied
//! records on every call. There is no cache to invalidate.

pub mod assembler;
pub mod types;


pub use assembler::{SnapshotAssembler, compute_settlement, compute_snapshot};
pub use types::TripSnapshot;

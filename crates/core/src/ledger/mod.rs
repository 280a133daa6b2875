//! Participant ledger.
//!
//! Derives the ordered roster of a trip and what each participant has paid.
//! Always rebuilt from the current expense set; nothing is stored.

pub mod participant_ledger;


pub use participant_ledger::{LedgerLine, ParticipantLedger};

//! Equal-split settlement.
//!
//! Every participant owes the same share of total spend. A participant's
//! balance is what they paid minus that share:
//! - positive beyond the tolerance: creditor (the group owes them)
//! - negative beyond the tolerance: debtor (they owe the group)
//! - otherwise: settled
//!
//! This does not work out who pays whom.

pub mod service;
pub mod types;


pub use service::SettlementCalculator;
pub use types::{BalanceStatus, Settlement, SettlementLine, SettlementPolicy};

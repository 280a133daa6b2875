//! Trip, membership, and expense records.
//!
//! The CRUD layer owns these records; the engine only reads them.

pub mod error;
pub mod types;
pub mod validation;

pub use error::TripError;
pub use types::{Expense, Membership, Participant, ParticipantRole, Trip, TripRecord, User};
pub use validation::validate;

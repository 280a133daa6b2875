//! Budget tracking: planned budget versus total spend.

pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use service::BudgetService;
pub use types::BudgetReport;

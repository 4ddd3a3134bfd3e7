pub mod error;
pub mod models;
pub mod ledger;

pub use error::{ErrorResponse, LedgerError, Result};
pub use models::*;
pub use ledger::Ledger;

#[cfg(test)]
mod tests;

//! Cambist Core - currency-exchange decision engine.
//!
//! This crate contains the core business logic for Cambist: the
//! commission policy, the exchange validation rule chain, snapshot-based
//! currency conversion, and the account ledger that applies completed
//! exchanges atomically. It is store-agnostic and defines traits that
//! are implemented by store crates such as `cambist-store-memory`.

pub mod commission;
pub mod constants;
pub mod errors;
pub mod exchange;
pub mod fx;
pub mod ledger;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;

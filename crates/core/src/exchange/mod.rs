//! Exchange module - proposals, outcomes, and the validation rule chain.

mod exchange_model;
mod exchange_validator;

pub use exchange_model::{CommissionTreatment, ExchangeOutcome, ExchangeProposal};
pub use exchange_validator::{ExchangeValidator, ValidationError, ValidationResult};

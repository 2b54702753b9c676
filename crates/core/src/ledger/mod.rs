//! Ledger module - currency balances, transaction counter, and the
//! atomic exchange-completion protocol.

mod ledger_model;
mod ledger_service;
mod ledger_traits;

pub use ledger_model::CurrencyBalance;
pub use ledger_service::AccountLedger;
pub use ledger_traits::{AccountLedgerTrait, BalanceStoreTrait, TransactionCounterTrait};

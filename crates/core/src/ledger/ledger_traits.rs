//! Ledger store and service traits.
//!
//! These traits define the contract for balance and counter persistence
//! without any storage-specific types, allowing different store
//! implementations (in-memory, SQLite, ...).

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;

use super::ledger_model::CurrencyBalance;
use crate::errors::Result;
use crate::exchange::{CommissionTreatment, ExchangeOutcome, ExchangeProposal};
use crate::fx::RateSnapshot;

/// Contract for the balance store: currency balances keyed by code.
#[async_trait]
pub trait BalanceStoreTrait: Send + Sync {
    /// Finds a balance by currency code.
    fn get_by_code(&self, code: &str) -> Result<Option<CurrencyBalance>>;

    /// Lists all balances, ordered by currency code.
    fn list(&self) -> Result<Vec<CurrencyBalance>>;

    /// Inserts a balance for a code not yet present.
    async fn insert(&self, balance: CurrencyBalance) -> Result<CurrencyBalance>;

    /// Updates the balance for an existing code.
    async fn update(&self, balance: CurrencyBalance) -> Result<CurrencyBalance>;
}

/// Contract for the transaction counter store.
///
/// The counter is a monotonically increasing integer, incremented
/// exactly once per successfully completed exchange. The commission
/// policy reads it to decide whether the free window still applies.
#[async_trait]
pub trait TransactionCounterTrait: Send + Sync {
    fn get(&self) -> Result<u64>;

    async fn set(&self, count: u64) -> Result<()>;
}

/// Contract for the account ledger service.
#[async_trait]
pub trait AccountLedgerTrait: Send + Sync {
    /// Retrieves the balance for a currency code, if one exists.
    fn get_balance(&self, code: &str) -> Result<Option<CurrencyBalance>>;

    /// Lists all owned balances.
    fn list_balances(&self) -> Result<Vec<CurrencyBalance>>;

    /// Number of exchanges completed so far.
    fn transaction_count(&self) -> Result<u64>;

    /// Adds `amount` to the balance for `code`, creating the balance on
    /// first credit of an unseen code.
    async fn credit(&self, code: &str, amount: Decimal) -> Result<CurrencyBalance>;

    /// Subtracts `amount` from the balance for `code`. No floor-at-zero
    /// guard at this layer; the validator gates sufficiency. A missing
    /// code is a defensive no-op returning `None`.
    async fn debit(&self, code: &str, amount: Decimal) -> Result<Option<CurrencyBalance>>;

    /// Applies a validated proposal as one atomic unit: credit the
    /// bought currency, debit the sold one, bump the transaction
    /// counter.
    async fn complete_exchange(
        &self,
        proposal: &ExchangeProposal,
        snapshot: Arc<RateSnapshot>,
        treatment: CommissionTreatment,
    ) -> Result<ExchangeOutcome>;
}

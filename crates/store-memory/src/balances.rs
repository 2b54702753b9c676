use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::sync::RwLock;

use cambist_core::errors::{PersistenceError, Result};
use cambist_core::ledger::{BalanceStoreTrait, CurrencyBalance};

/// Balance store backed by a lock-guarded map keyed by currency code.
pub struct MemoryBalanceStore {
    records: RwLock<BTreeMap<String, CurrencyBalance>>,
}

impl MemoryBalanceStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
        }
    }

    /// Seeds the store with the given balances.
    pub fn with_balances<I>(balances: I) -> Self
    where
        I: IntoIterator<Item = CurrencyBalance>,
    {
        let records = balances
            .into_iter()
            .map(|b| (b.currency.clone(), b))
            .collect();
        Self {
            records: RwLock::new(records),
        }
    }

    /// Seeds the account the way a fresh install starts out: EUR 1000
    /// to trade with, USD and GBP opened at zero.
    pub fn with_default_accounts() -> Self {
        Self::with_balances([
            CurrencyBalance::new("EUR", Decimal::from(1000)),
            CurrencyBalance::new("USD", Decimal::ZERO),
            CurrencyBalance::new("GBP", Decimal::ZERO),
        ])
    }
}

impl Default for MemoryBalanceStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BalanceStoreTrait for MemoryBalanceStore {
    fn get_by_code(&self, code: &str) -> Result<Option<CurrencyBalance>> {
        let records = self
            .records
            .read()
            .map_err(|e| PersistenceError::Internal(e.to_string()))?;
        Ok(records.get(code).cloned())
    }

    fn list(&self) -> Result<Vec<CurrencyBalance>> {
        let records = self
            .records
            .read()
            .map_err(|e| PersistenceError::Internal(e.to_string()))?;
        Ok(records.values().cloned().collect())
    }

    async fn insert(&self, balance: CurrencyBalance) -> Result<CurrencyBalance> {
        let mut records = self
            .records
            .write()
            .map_err(|e| PersistenceError::Internal(e.to_string()))?;
        records.insert(balance.currency.clone(), balance.clone());
        Ok(balance)
    }

    async fn update(&self, balance: CurrencyBalance) -> Result<CurrencyBalance> {
        let mut records = self
            .records
            .write()
            .map_err(|e| PersistenceError::Internal(e.to_string()))?;
        match records.get_mut(&balance.currency) {
            Some(existing) => {
                *existing = balance.clone();
                Ok(balance)
            }
            None => Err(PersistenceError::NotFound(format!(
                "no balance for currency '{}'",
                balance.currency
            ))
            .into()),
        }
    }
}

use async_trait::async_trait;
use log::debug;
use std::sync::RwLock;

use cambist_core::errors::{PersistenceError, Result};
use cambist_core::ledger::TransactionCounterTrait;

/// Transaction counter backed by a lock-guarded integer.
pub struct MemoryCounterStore {
    count: RwLock<u64>,
}

impl MemoryCounterStore {
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    /// Starts the counter at `count` completed transactions, e.g. to
    /// mirror a returning account.
    pub fn starting_at(count: u64) -> Self {
        Self {
            count: RwLock::new(count),
        }
    }
}

impl Default for MemoryCounterStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TransactionCounterTrait for MemoryCounterStore {
    fn get(&self) -> Result<u64> {
        let count = self
            .count
            .read()
            .map_err(|e| PersistenceError::Internal(e.to_string()))?;
        Ok(*count)
    }

    async fn set(&self, count: u64) -> Result<()> {
        let mut current = self
            .count
            .write()
            .map_err(|e| PersistenceError::Internal(e.to_string()))?;
        debug!("Transaction counter {} -> {}", *current, count);
        *current = count;
        Ok(())
    }
}

use crate::errors::Result;
use crate::ledger::TransactionCounterTrait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;

/// Number of completed transactions covered by the commission-free window.
pub const FREE_TRANSACTIONS_LIMIT: u64 = 7;

/// Commission rate applied once the free window is exhausted.
pub const COMMISSION_RATE: Decimal = dec!(0.007);

/// Computes the commission fee owed on an exchange amount.
pub trait CommissionCalculatorTrait: Send + Sync {
    /// Commission for `amount` given the number of transactions already
    /// completed (not including the current one). Pure; used inside the
    /// ledger's atomic section where the count has been read once.
    fn commission_for_count(&self, amount: Decimal, completed_transactions: u64) -> Decimal;

    /// Commission for `amount` against the live transaction counter.
    ///
    /// The counter is read at call time, not cached, so a value
    /// computed here can be stale by the time an exchange completes;
    /// `AccountLedger::complete_exchange` recomputes under its lock.
    fn calculate_commission(&self, amount: Decimal) -> Result<Decimal>;
}

/// Default policy: the free window waives commission entirely, after
/// which a flat rate applies. `amount <= 0` is not special-cased; the
/// fee is whatever the multiplication yields.
pub struct DefaultCommissionCalculator {
    counter: Arc<dyn TransactionCounterTrait>,
}

impl DefaultCommissionCalculator {
    pub fn new(counter: Arc<dyn TransactionCounterTrait>) -> Self {
        Self { counter }
    }
}

impl CommissionCalculatorTrait for DefaultCommissionCalculator {
    fn commission_for_count(&self, amount: Decimal, completed_transactions: u64) -> Decimal {
        if completed_transactions > FREE_TRANSACTIONS_LIMIT {
            COMMISSION_RATE * amount
        } else {
            Decimal::ZERO
        }
    }

    fn calculate_commission(&self, amount: Decimal) -> Result<Decimal> {
        let completed = self.counter.get()?;
        Ok(self.commission_for_count(amount, completed))
    }
}

use async_trait::async_trait;
use log::{debug, warn};
use rust_decimal::Decimal;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::ledger_model::CurrencyBalance;
use super::ledger_traits::{AccountLedgerTrait, BalanceStoreTrait, TransactionCounterTrait};
use crate::commission::CommissionCalculatorTrait;
use crate::errors::Result;
use crate::exchange::{CommissionTreatment, ExchangeOutcome, ExchangeProposal, ValidationError};
use crate::fx::{CurrencyConverter, RateSnapshot};

/// Owns the currency balances and applies completed exchanges.
///
/// `complete_exchange` runs its read-count / convert / credit / debit /
/// increment sequence inside one critical section, so two concurrent
/// exchanges cannot interleave their read-modify-write cycles on the
/// same balance, and cannot both observe a pre-increment counter value
/// and both land in the free-commission window.
pub struct AccountLedger {
    balances: Arc<dyn BalanceStoreTrait>,
    counter: Arc<dyn TransactionCounterTrait>,
    commission_calculator: Arc<dyn CommissionCalculatorTrait>,
    exchange_lock: Mutex<()>,
}

impl AccountLedger {
    pub fn new(
        balances: Arc<dyn BalanceStoreTrait>,
        counter: Arc<dyn TransactionCounterTrait>,
        commission_calculator: Arc<dyn CommissionCalculatorTrait>,
    ) -> Self {
        Self {
            balances,
            counter,
            commission_calculator,
            exchange_lock: Mutex::new(()),
        }
    }

    async fn apply_credit(&self, code: &str, amount: Decimal) -> Result<CurrencyBalance> {
        match self.balances.get_by_code(code)? {
            Some(existing) => {
                let updated = CurrencyBalance::new(code, existing.amount + amount);
                self.balances.update(updated).await
            }
            None => {
                debug!("Creating balance for '{}' on first credit", code);
                self.balances.insert(CurrencyBalance::new(code, amount)).await
            }
        }
    }

    async fn apply_debit(&self, code: &str, amount: Decimal) -> Result<Option<CurrencyBalance>> {
        match self.balances.get_by_code(code)? {
            Some(existing) => {
                let updated = CurrencyBalance::new(code, existing.amount - amount);
                Ok(Some(self.balances.update(updated).await?))
            }
            None => {
                // Validated exchanges never reach this branch.
                warn!("Debit of {} on unknown currency '{}' ignored", amount, code);
                Ok(None)
            }
        }
    }
}

#[async_trait]
impl AccountLedgerTrait for AccountLedger {
    fn get_balance(&self, code: &str) -> Result<Option<CurrencyBalance>> {
        self.balances.get_by_code(code)
    }

    fn list_balances(&self) -> Result<Vec<CurrencyBalance>> {
        self.balances.list()
    }

    fn transaction_count(&self) -> Result<u64> {
        self.counter.get()
    }

    async fn credit(&self, code: &str, amount: Decimal) -> Result<CurrencyBalance> {
        self.apply_credit(code, amount).await
    }

    async fn debit(&self, code: &str, amount: Decimal) -> Result<Option<CurrencyBalance>> {
        self.apply_debit(code, amount).await
    }

    async fn complete_exchange(
        &self,
        proposal: &ExchangeProposal,
        snapshot: Arc<RateSnapshot>,
        treatment: CommissionTreatment,
    ) -> Result<ExchangeOutcome> {
        // Completed exchanges must never be same-currency, even if the
        // caller skipped validation.
        if proposal.selling_code == proposal.buying_code {
            return Err(ValidationError::SameCurrencyTransaction.into());
        }

        let _guard = self.exchange_lock.lock().await;

        let completed = self.counter.get()?;
        let commission = self
            .commission_calculator
            .commission_for_count(proposal.selling_amount, completed);

        let converter = CurrencyConverter::new(snapshot);
        let converted_amount = converter.convert_amount(
            proposal.selling_amount,
            &proposal.selling_code,
            &proposal.buying_code,
        )?;

        let debited_amount = match treatment {
            CommissionTreatment::Informational => proposal.selling_amount,
            CommissionTreatment::DeductFromSelling => proposal.selling_amount + commission,
        };

        self.apply_credit(&proposal.buying_code, converted_amount)
            .await?;
        self.apply_debit(&proposal.selling_code, debited_amount)
            .await?;

        let transaction_number = completed + 1;
        self.counter.set(transaction_number).await?;

        debug!(
            "Completed exchange #{}: {} {} -> {} {}, commission {}",
            transaction_number,
            proposal.selling_amount,
            proposal.selling_code,
            converted_amount,
            proposal.buying_code,
            commission
        );

        Ok(ExchangeOutcome {
            selling_code: proposal.selling_code.clone(),
            buying_code: proposal.buying_code.clone(),
            selling_amount: proposal.selling_amount,
            converted_amount,
            commission,
            debited_amount,
            transaction_number,
        })
    }
}

//! End-to-end exchange flows against the in-memory stores.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use cambist_core::commission::{CommissionCalculatorTrait, DefaultCommissionCalculator};
use cambist_core::exchange::{
    CommissionTreatment, ExchangeProposal, ExchangeValidator, ValidationError,
};
use cambist_core::fx::{FxError, RateSnapshot};
use cambist_core::ledger::{AccountLedger, AccountLedgerTrait};
use cambist_store_memory::{MemoryBalanceStore, MemoryCounterStore};

struct Harness {
    ledger: Arc<AccountLedger>,
    validator: ExchangeValidator,
    snapshot: Arc<RateSnapshot>,
}

/// Default accounts (EUR 1000, USD 0, GBP 0), EUR-based snapshot with a
/// USD rate of 1.1, counter at `completed` transactions.
fn harness(completed: u64) -> Harness {
    let balances = Arc::new(MemoryBalanceStore::with_default_accounts());
    let counter = Arc::new(MemoryCounterStore::starting_at(completed));
    let commission: Arc<dyn CommissionCalculatorTrait> =
        Arc::new(DefaultCommissionCalculator::new(counter.clone()));

    Harness {
        ledger: Arc::new(AccountLedger::new(
            balances,
            counter,
            commission.clone(),
        )),
        validator: ExchangeValidator::new(commission),
        snapshot: Arc::new(RateSnapshot::from_pairs(
            "EUR",
            Utc::now(),
            vec![("USD", dec!(1.1))],
        )),
    }
}

fn balance_of(ledger: &AccountLedger, code: &str) -> Decimal {
    ledger.get_balance(code).unwrap().unwrap().amount
}

#[tokio::test]
async fn first_exchange_is_commission_free() {
    let h = harness(0);
    let proposal = ExchangeProposal::new("EUR", "USD", dec!(100));

    let verdict = h
        .validator
        .validate(
            &proposal.selling_code,
            &proposal.buying_code,
            proposal.selling_amount,
            Some(&h.snapshot),
            &h.ledger.list_balances().unwrap(),
        )
        .unwrap();
    assert_eq!(verdict, Ok(()));

    let outcome = h
        .ledger
        .complete_exchange(&proposal, h.snapshot.clone(), CommissionTreatment::default())
        .await
        .unwrap();

    assert_eq!(outcome.commission, Decimal::ZERO);
    assert_eq!(outcome.converted_amount, dec!(110.0));
    assert_eq!(outcome.transaction_number, 1);

    assert_eq!(balance_of(&h.ledger, "EUR"), dec!(900));
    assert_eq!(balance_of(&h.ledger, "USD"), dec!(110.0));
    assert_eq!(h.ledger.transaction_count().unwrap(), 1);
}

#[tokio::test]
async fn ninth_exchange_reports_commission_without_deducting_it() {
    let h = harness(8);
    let proposal = ExchangeProposal::new("EUR", "USD", dec!(100));

    let verdict = h
        .validator
        .validate(
            "EUR",
            "USD",
            dec!(100),
            Some(&h.snapshot),
            &h.ledger.list_balances().unwrap(),
        )
        .unwrap();
    assert_eq!(verdict, Ok(()));

    let outcome = h
        .ledger
        .complete_exchange(
            &proposal,
            h.snapshot.clone(),
            CommissionTreatment::Informational,
        )
        .await
        .unwrap();

    assert_eq!(outcome.commission, dec!(0.70));
    assert_eq!(outcome.debited_amount, dec!(100));
    // Commission is informational here: only the sold amount leaves EUR.
    assert_eq!(balance_of(&h.ledger, "EUR"), dec!(900));
    assert_eq!(balance_of(&h.ledger, "USD"), dec!(110.0));
    assert_eq!(h.ledger.transaction_count().unwrap(), 9);
}

#[tokio::test]
async fn commission_can_be_deducted_from_the_selling_balance() {
    let h = harness(8);
    let proposal = ExchangeProposal::new("EUR", "USD", dec!(100));

    let outcome = h
        .ledger
        .complete_exchange(
            &proposal,
            h.snapshot.clone(),
            CommissionTreatment::DeductFromSelling,
        )
        .await
        .unwrap();

    assert_eq!(outcome.commission, dec!(0.70));
    assert_eq!(outcome.debited_amount, dec!(100.70));
    assert_eq!(balance_of(&h.ledger, "EUR"), dec!(899.30));
    assert_eq!(balance_of(&h.ledger, "USD"), dec!(110.0));
}

#[tokio::test]
async fn buying_an_unseen_currency_creates_its_balance() {
    let h = harness(0);
    let snapshot = Arc::new(RateSnapshot::from_pairs(
        "EUR",
        Utc::now(),
        vec![("USD", dec!(1.1)), ("CHF", dec!(0.95))],
    ));
    let proposal = ExchangeProposal::new("EUR", "CHF", dec!(200));

    assert!(h.ledger.get_balance("CHF").unwrap().is_none());

    h.ledger
        .complete_exchange(&proposal, snapshot, CommissionTreatment::default())
        .await
        .unwrap();

    assert_eq!(balance_of(&h.ledger, "CHF"), dec!(200) * dec!(0.95));
    assert_eq!(balance_of(&h.ledger, "EUR"), dec!(800));
}

#[tokio::test]
async fn exchange_into_an_unquoted_currency_fails_cleanly() {
    let h = harness(0);
    let proposal = ExchangeProposal::new("EUR", "JPY", dec!(100));

    let err = h
        .ledger
        .complete_exchange(&proposal, h.snapshot.clone(), CommissionTreatment::default())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        cambist_core::Error::Fx(FxError::RateUnavailable(_))
    ));
    // No partial effects.
    assert_eq!(balance_of(&h.ledger, "EUR"), dec!(1000));
    assert_eq!(h.ledger.transaction_count().unwrap(), 0);
}

#[tokio::test]
async fn same_currency_exchange_is_refused_even_unvalidated() {
    let h = harness(0);
    let proposal = ExchangeProposal::new("EUR", "EUR", dec!(100));

    let err = h
        .ledger
        .complete_exchange(&proposal, h.snapshot.clone(), CommissionTreatment::default())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        cambist_core::Error::Validation(ValidationError::SameCurrencyTransaction)
    ));
    assert_eq!(balance_of(&h.ledger, "EUR"), dec!(1000));
}

#[tokio::test]
async fn debit_of_unknown_currency_is_a_no_op() {
    let h = harness(0);
    let result = h.ledger.debit("JPY", dec!(10)).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_exchanges_do_not_lose_updates() {
    // Counter starts at the edge of the free window: exactly one of the
    // two exchanges may still be free. If the read-decide-increment
    // triplet were not atomic, both could observe 7 and both go free.
    let h = harness(7);

    let mut handles = Vec::new();
    for _ in 0..2 {
        let ledger = h.ledger.clone();
        let snapshot = h.snapshot.clone();
        handles.push(tokio::spawn(async move {
            let proposal = ExchangeProposal::new("EUR", "USD", dec!(100));
            ledger
                .complete_exchange(&proposal, snapshot, CommissionTreatment::Informational)
                .await
                .unwrap()
        }));
    }

    let mut commissions = Vec::new();
    for handle in handles {
        commissions.push(handle.await.unwrap().commission);
    }
    commissions.sort();

    assert_eq!(commissions, vec![Decimal::ZERO, dec!(0.70)]);
    assert_eq!(balance_of(&h.ledger, "EUR"), dec!(800));
    assert_eq!(balance_of(&h.ledger, "USD"), dec!(220.0));
    assert_eq!(h.ledger.transaction_count().unwrap(), 9);
}

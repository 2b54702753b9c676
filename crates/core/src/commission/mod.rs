//! Commission policy - fee computation from transaction history.

mod commission_calculator;

pub use commission_calculator::{
    CommissionCalculatorTrait, DefaultCommissionCalculator, COMMISSION_RATE,
    FREE_TRANSACTIONS_LIMIT,
};

//! Holdings module - security positions, cash balances, and the pure
//! cost-basis arithmetic over them.

mod holdings_model;
mod holdings_traits;
pub mod position_calculator;

pub use holdings_model::{BuyLeg, CashBalance, Holding};
pub use holdings_traits::{CashBalanceRepositoryTrait, HoldingRepositoryTrait};
pub use position_calculator::{
    cost_basis, market_value, unrealized_pl, update_wac_after_buy, weighted_average_cost,
    UnrealizedPl,
};

#[cfg(test)]
mod position_calculator_tests;

//! Property-based tests for the valuation and cost-basis arithmetic.
//!
//! These tests verify that universal properties hold across all valid inputs,
//! using the `proptest` crate for random test case generation.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use shekelfolio_core::fx::{convert, Currency};
use shekelfolio_core::holdings::{
    update_wac_after_buy, weighted_average_cost, BuyLeg,
};
use shekelfolio_core::money::round_money;
use shekelfolio_core::valuation::{global_summary, PortfolioSummary};

// =============================================================================
// Generators
// =============================================================================

/// Generates a plausible buy leg: quantity in (0, 1000], price in [0, 5000),
/// fee in [0, 100), all with two decimal places.
fn arb_buy_leg() -> impl Strategy<Value = BuyLeg> {
    (1i64..100_000, 0i64..500_000, 0i64..10_000).prop_map(|(quantity, price, fee)| BuyLeg {
        quantity: Decimal::new(quantity, 2),
        price: Decimal::new(price, 2),
        fee: Decimal::new(fee, 2),
    })
}

fn arb_buy_legs(max_count: usize) -> impl Strategy<Value = Vec<BuyLeg>> {
    proptest::collection::vec(arb_buy_leg(), 1..=max_count)
}

/// Generates a USD/ILS rate inside the sanity window [2.5, 5.0].
fn arb_rate() -> impl Strategy<Value = Decimal> {
    (250i64..=500).prop_map(|cents| Decimal::new(cents, 2))
}

/// Generates an amount in (-100_000, 100_000) with two decimal places.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (-10_000_000i64..10_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Generates a rounded portfolio summary with consistent value/PL fields.
fn arb_portfolio_summary() -> impl Strategy<Value = PortfolioSummary> {
    (0i64..10_000_000, 0i64..10_000_000, 0i64..10_000_000).prop_map(
        |(holdings_cents, cash_cents, basis_cents)| {
            let holdings_value = Decimal::new(holdings_cents, 2);
            let cash_value = Decimal::new(cash_cents, 2);
            let cost_basis = Decimal::new(basis_cents, 2);
            PortfolioSummary {
                portfolio_id: "p".to_string(),
                portfolio_name: "p".to_string(),
                holdings_value,
                cash_value,
                total_value: holdings_value + cash_value,
                unrealized_pl: holdings_value - cost_basis,
                unrealized_pl_percent: Decimal::ZERO,
                cost_basis,
                holdings: Vec::new(),
                cash_balances: Vec::new(),
            }
        },
    )
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Applying `update_wac_after_buy` leg by leg must agree with
    /// `weighted_average_cost` over the full history, to 2-decimal rounding.
    #[test]
    fn incremental_wac_matches_full_recompute(buys in arb_buy_legs(12)) {
        let mut wac = Decimal::ZERO;
        let mut quantity = Decimal::ZERO;
        for leg in &buys {
            wac = update_wac_after_buy(wac, quantity, leg.price, leg.quantity, leg.fee);
            quantity += leg.quantity;
        }

        let full = weighted_average_cost(&buys);
        prop_assert!((round_money(wac) - round_money(full)).abs() <= dec!(0.01));
    }

    /// Converting A -> B -> A recovers the original amount within rounding
    /// tolerance, for any rate in the sanity window.
    #[test]
    fn currency_conversion_round_trips(amount in arb_amount(), rate in arb_rate()) {
        let there = convert(amount, Currency::Usd, Currency::Ils, rate);
        let back = convert(there, Currency::Ils, Currency::Usd, rate);
        prop_assert!((back - amount).abs() <= dec!(0.01));

        let there = convert(amount, Currency::Ils, Currency::Usd, rate);
        let back = convert(there, Currency::Usd, Currency::Ils, rate);
        prop_assert!((back - amount).abs() <= dec!(0.01));
    }

    /// Global totals are the plain sums of the per-portfolio fields, and the
    /// global percent is recomputed from the summed PL and cost basis.
    #[test]
    fn global_summary_is_additive(summaries in proptest::collection::vec(arb_portfolio_summary(), 0..8)) {
        let expected_value: Decimal = summaries.iter().map(|s| s.total_value).sum();
        let expected_cash: Decimal = summaries.iter().map(|s| s.cash_value).sum();
        let expected_holdings: Decimal = summaries.iter().map(|s| s.holdings_value).sum();
        let expected_pl: Decimal = summaries.iter().map(|s| s.unrealized_pl).sum();
        let expected_basis: Decimal = summaries.iter().map(|s| s.cost_basis).sum();

        let global = global_summary(summaries, Currency::Usd, dec!(3.65));

        prop_assert_eq!(global.total_value, round_money(expected_value));
        prop_assert_eq!(global.total_cash, round_money(expected_cash));
        prop_assert_eq!(global.total_holdings, round_money(expected_holdings));
        prop_assert_eq!(global.total_unrealized_pl, round_money(expected_pl));
        prop_assert_eq!(global.total_cost_basis, round_money(expected_basis));

        let expected_percent = if expected_basis.is_zero() {
            Decimal::ZERO
        } else {
            round_money(expected_pl / expected_basis * Decimal::ONE_HUNDRED)
        };
        prop_assert_eq!(global.total_unrealized_pl_percent, expected_percent);
    }

    /// WAC never errors and never goes negative for non-negative inputs.
    #[test]
    fn wac_is_nonnegative(buys in arb_buy_legs(12)) {
        prop_assert!(weighted_average_cost(&buys) >= Decimal::ZERO);
    }
}

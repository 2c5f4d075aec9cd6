use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::holdings_model::BuyLeg;
use super::position_calculator::*;
use crate::money::round_money;

fn buy(quantity: Decimal, price: Decimal, fee: Decimal) -> BuyLeg {
    BuyLeg {
        quantity,
        price,
        fee,
    }
}

#[test]
fn wac_of_no_buys_is_zero() {
    assert_eq!(weighted_average_cost(&[]), Decimal::ZERO);
}

#[test]
fn wac_of_single_buy_includes_fee() {
    // 10 @ 100 with fee 5 -> (1000 + 5) / 10 = 100.5
    let wac = weighted_average_cost(&[buy(dec!(10), dec!(100), dec!(5))]);
    assert_eq!(wac, dec!(100.5));
}

#[test]
fn wac_blends_multiple_buys() {
    // (10*100 + 5 + 10*110 + 5) / 20 = 105.5
    let wac = weighted_average_cost(&[
        buy(dec!(10), dec!(100), dec!(5)),
        buy(dec!(10), dec!(110), dec!(5)),
    ]);
    assert_eq!(wac, dec!(105.5));
}

#[test]
fn wac_of_zero_total_quantity_is_zero() {
    let wac = weighted_average_cost(&[buy(Decimal::ZERO, dec!(100), dec!(5))]);
    assert_eq!(wac, Decimal::ZERO);
}

#[test]
fn incremental_update_matches_known_scenario() {
    // First buy: 10 @ 100 fee 5 -> avg 100.5
    // Second buy: 10 @ 110 fee 5 -> (100.5*10 + 110*10 + 5) / 20 = 105.275
    let after_first = update_wac_after_buy(Decimal::ZERO, Decimal::ZERO, dec!(100), dec!(10), dec!(5));
    assert_eq!(after_first, dec!(100.5));

    let after_second = update_wac_after_buy(after_first, dec!(10), dec!(110), dec!(10), dec!(5));
    assert_eq!(after_second, dec!(105.275));
}

#[test]
fn incremental_update_agrees_with_full_recompute() {
    let buys = [
        buy(dec!(3), dec!(17.25), dec!(1.4)),
        buy(dec!(7.5), dec!(19.1), dec!(0)),
        buy(dec!(1), dec!(22.8), dec!(2)),
        buy(dec!(12), dec!(15.05), dec!(1.4)),
    ];

    let mut wac = Decimal::ZERO;
    let mut quantity = Decimal::ZERO;
    for leg in &buys {
        wac = update_wac_after_buy(wac, quantity, leg.price, leg.quantity, leg.fee);
        quantity += leg.quantity;
    }

    assert_eq!(round_money(wac), round_money(weighted_average_cost(&buys)));
}

#[test]
fn unrealized_pl_gain() {
    let pl = unrealized_pl(dec!(120), dec!(100.5), dec!(10));
    assert_eq!(pl.amount, dec!(195));
    assert_eq!(round_money(pl.percent), dec!(19.40));
}

#[test]
fn unrealized_pl_loss() {
    let pl = unrealized_pl(dec!(90), dec!(100), dec!(10));
    assert_eq!(pl.amount, dec!(-100));
    assert_eq!(pl.percent, dec!(-10));
}

#[test]
fn unrealized_pl_percent_is_zero_for_zero_avg_cost() {
    let pl = unrealized_pl(dec!(50), Decimal::ZERO, dec!(10));
    assert_eq!(pl.amount, dec!(500));
    assert_eq!(pl.percent, Decimal::ZERO);
}

#[test]
fn market_value_is_price_times_quantity() {
    assert_eq!(market_value(dec!(178.50), dec!(3)), dec!(535.50));
}

#[test]
fn cost_basis_sums_legs_and_fees() {
    let basis = cost_basis(&[
        buy(dec!(10), dec!(100), dec!(5)),
        buy(dec!(10), dec!(110), dec!(5)),
    ]);
    assert_eq!(basis, dec!(2110));
}

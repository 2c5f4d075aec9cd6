use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::transaction_processor::*;
use super::transactions_errors::TransactionError;
use super::transactions_model::TransactionKind;
use crate::fx::Currency;
use crate::holdings::Holding;

fn holding(symbol: &str, quantity: Decimal, avg_cost: Decimal) -> Holding {
    Holding {
        id: "h-1".to_string(),
        user_id: "u-1".to_string(),
        portfolio_id: "p-1".to_string(),
        symbol: symbol.to_string(),
        quantity,
        avg_cost,
        currency: Currency::Usd,
        updated_at: Utc::now(),
    }
}

fn buy(symbol: &str, quantity: Decimal, price: Decimal) -> TransactionKind {
    TransactionKind::Buy {
        symbol: symbol.to_string(),
        quantity,
        price,
    }
}

fn sell(symbol: &str, quantity: Decimal, price: Decimal) -> TransactionKind {
    TransactionKind::Sell {
        symbol: symbol.to_string(),
        quantity,
        price,
    }
}

#[test]
fn first_buy_opens_position_and_debits_cash() {
    // BUY 10 AAPL @ 100 fee 5 -> qty 10, avg 100.5, cash -1005
    let effect = process_transaction(
        None,
        &buy("AAPL", dec!(10), dec!(100)),
        Currency::Usd,
        dec!(5),
    )
    .unwrap();

    assert_eq!(
        effect.holding,
        HoldingChange::Create {
            symbol: "AAPL".to_string(),
            quantity: dec!(10),
            avg_cost: dec!(100.5),
            currency: Currency::Usd,
        }
    );
    assert_eq!(
        effect.cash,
        vec![CashDelta {
            currency: Currency::Usd,
            delta: dec!(-1005),
        }]
    );
}

#[test]
fn second_buy_updates_wac_incrementally() {
    // After 10 @ avg 100.5, BUY 10 more @ 110 fee 5 -> qty 20, avg 105.275
    let existing = holding("AAPL", dec!(10), dec!(100.5));
    let effect = process_transaction(
        Some(&existing),
        &buy("AAPL", dec!(10), dec!(110)),
        Currency::Usd,
        dec!(5),
    )
    .unwrap();

    assert_eq!(
        effect.holding,
        HoldingChange::Update {
            holding_id: "h-1".to_string(),
            quantity: dec!(20),
            avg_cost: dec!(105.275),
        }
    );
    assert_eq!(effect.cash[0].delta, dec!(-1105));
}

#[test]
fn partial_sell_keeps_avg_cost() {
    let existing = holding("AAPL", dec!(20), dec!(105.275));
    let effect = process_transaction(
        Some(&existing),
        &sell("AAPL", dec!(5), dec!(120)),
        Currency::Usd,
        dec!(3),
    )
    .unwrap();

    assert_eq!(
        effect.holding,
        HoldingChange::Update {
            holding_id: "h-1".to_string(),
            quantity: dec!(15),
            avg_cost: dec!(105.275),
        }
    );
    // proceeds minus fee
    assert_eq!(effect.cash[0].delta, dec!(597));
}

#[test]
fn sell_all_deletes_holding() {
    // SELL 20 @ 120 fee 0 -> holding gone, cash +2400
    let existing = holding("AAPL", dec!(20), dec!(105.275));
    let effect = process_transaction(
        Some(&existing),
        &sell("AAPL", dec!(20), dec!(120)),
        Currency::Usd,
        Decimal::ZERO,
    )
    .unwrap();

    assert_eq!(
        effect.holding,
        HoldingChange::Delete {
            holding_id: "h-1".to_string(),
        }
    );
    assert_eq!(effect.cash[0].delta, dec!(2400));
}

#[test]
fn overselling_fails_with_insufficient_quantity() {
    let existing = holding("AAPL", dec!(5), dec!(100));
    let err = process_transaction(
        Some(&existing),
        &sell("AAPL", dec!(10), dec!(120)),
        Currency::Usd,
        Decimal::ZERO,
    )
    .unwrap_err();

    match err {
        TransactionError::InsufficientQuantity {
            symbol,
            requested,
            held,
        } => {
            assert_eq!(symbol, "AAPL");
            assert_eq!(requested, dec!(10));
            assert_eq!(held, dec!(5));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn selling_without_position_fails() {
    let err = process_transaction(
        None,
        &sell("AAPL", dec!(1), dec!(120)),
        Currency::Usd,
        Decimal::ZERO,
    )
    .unwrap_err();

    assert!(matches!(
        err,
        TransactionError::InsufficientQuantity { held, .. } if held == Decimal::ZERO
    ));
}

#[test]
fn deposit_credits_cash_only() {
    let effect = process_transaction(
        None,
        &TransactionKind::Deposit { amount: dec!(500) },
        Currency::Ils,
        dec!(7),
    )
    .unwrap();

    assert_eq!(effect.holding, HoldingChange::None);
    // fee is recorded on the ledger row but not applied to cash
    assert_eq!(
        effect.cash,
        vec![CashDelta {
            currency: Currency::Ils,
            delta: dec!(500),
        }]
    );
}

#[test]
fn withdraw_debits_cash_only() {
    let effect = process_transaction(
        None,
        &TransactionKind::Withdraw { amount: dec!(200) },
        Currency::Usd,
        Decimal::ZERO,
    )
    .unwrap();

    assert_eq!(effect.cash[0].delta, dec!(-200));
}

#[test]
fn dividend_credits_cash_only() {
    let effect = process_transaction(
        None,
        &TransactionKind::Dividend { amount: dec!(12.4) },
        Currency::Usd,
        Decimal::ZERO,
    )
    .unwrap();

    assert_eq!(effect.holding, HoldingChange::None);
    assert_eq!(effect.cash[0].delta, dec!(12.4));
}

#[test]
fn convert_moves_cash_across_currencies() {
    // CONVERT 100 USD -> ILS at 3.65: USD -100, ILS +365
    let effect = process_transaction(
        None,
        &TransactionKind::Convert {
            amount: dec!(100),
            from_currency: Currency::Usd,
            to_currency: Currency::Ils,
            fx_rate: dec!(3.65),
        },
        Currency::Usd,
        Decimal::ZERO,
    )
    .unwrap();

    assert_eq!(effect.holding, HoldingChange::None);
    assert_eq!(
        effect.cash,
        vec![
            CashDelta {
                currency: Currency::Usd,
                delta: dec!(-100),
            },
            CashDelta {
                currency: Currency::Ils,
                delta: dec!(365),
            },
        ]
    );
}

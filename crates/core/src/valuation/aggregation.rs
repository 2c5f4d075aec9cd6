//! The aggregation engine.
//!
//! Pure roll-up of holdings and cash into portfolio and global summaries.
//! Inputs arrive in their original currencies; every monetary output is
//! converted into the display currency and rounded exactly once, here.

use log::debug;
use rust_decimal::Decimal;
use std::collections::HashMap;

use super::valuation_model::{DailyChange, GlobalSummary, HoldingSummary, PortfolioSummary};
use crate::fx::{aggregate, convert, Currency, CurrencyAmount};
use crate::holdings::position_calculator::{market_value, unrealized_pl};
use crate::holdings::{CashBalance, Holding};
use crate::money::{percent_of, round_money};
use crate::portfolios::Portfolio;

/// Values one holding at the given price.
///
/// A missing price arrives as 0: the line degrades to zero market value and
/// a fully negative P/L rather than failing the whole summary.
pub fn holding_summary(
    holding: &Holding,
    current_price: Decimal,
    display_currency: Currency,
    usd_ils_rate: Decimal,
) -> HoldingSummary {
    let value = market_value(current_price, holding.quantity);
    let basis = holding.avg_cost * holding.quantity;
    let pl = unrealized_pl(current_price, holding.avg_cost, holding.quantity);

    HoldingSummary {
        symbol: holding.symbol.clone(),
        quantity: holding.quantity,
        avg_cost: holding.avg_cost,
        current_price,
        market_value: round_money(convert(
            value,
            holding.currency,
            display_currency,
            usd_ils_rate,
        )),
        cost_basis: round_money(convert(
            basis,
            holding.currency,
            display_currency,
            usd_ils_rate,
        )),
        unrealized_pl: round_money(convert(
            pl.amount,
            holding.currency,
            display_currency,
            usd_ils_rate,
        )),
        unrealized_pl_percent: round_money(pl.percent),
        currency: display_currency,
    }
}

/// Totals one portfolio's holdings and cash.
pub fn portfolio_summary(
    portfolio: &Portfolio,
    holdings: &[Holding],
    cash_balances: &[CashBalance],
    prices: &HashMap<String, Decimal>,
    display_currency: Currency,
    usd_ils_rate: Decimal,
) -> PortfolioSummary {
    let mut summaries = Vec::with_capacity(holdings.len());
    let mut holdings_value = Decimal::ZERO;
    let mut cost_basis = Decimal::ZERO;
    let mut total_pl = Decimal::ZERO;

    for holding in holdings {
        // The holding lifecycle deletes rows at quantity zero; skip any
        // stragglers instead of letting them poison the totals.
        if holding.quantity <= Decimal::ZERO {
            continue;
        }

        let current_price = match prices.get(&holding.symbol) {
            Some(price) => *price,
            None => {
                debug!(
                    "no cached price for {}, valuing position at zero",
                    holding.symbol
                );
                Decimal::ZERO
            }
        };

        let summary = holding_summary(holding, current_price, display_currency, usd_ils_rate);
        holdings_value += summary.market_value;
        cost_basis += summary.cost_basis;
        total_pl += summary.unrealized_pl;
        summaries.push(summary);
    }

    let cash_amounts: Vec<CurrencyAmount> = cash_balances
        .iter()
        .map(|balance| CurrencyAmount {
            amount: balance.amount,
            currency: balance.currency,
        })
        .collect();
    let cash_value = aggregate(&cash_amounts, display_currency, usd_ils_rate);

    let total_value = holdings_value + cash_value;
    let pl_percent = percent_of(total_pl, cost_basis);

    PortfolioSummary {
        portfolio_id: portfolio.id.clone(),
        portfolio_name: portfolio.name.clone(),
        holdings_value: round_money(holdings_value),
        cash_value: round_money(cash_value),
        total_value: round_money(total_value),
        unrealized_pl: round_money(total_pl),
        unrealized_pl_percent: round_money(pl_percent),
        cost_basis: round_money(cost_basis),
        holdings: summaries,
        cash_balances: cash_amounts,
    }
}

/// Totals all portfolios.
///
/// Each field is the plain sum of the per-portfolio figures. The global P/L
/// percent is recomputed from the summed P/L and cost basis, never averaged
/// from the per-portfolio percentages.
pub fn global_summary(
    portfolio_summaries: Vec<PortfolioSummary>,
    display_currency: Currency,
    usd_ils_rate: Decimal,
) -> GlobalSummary {
    let mut total_value = Decimal::ZERO;
    let mut total_cash = Decimal::ZERO;
    let mut total_holdings = Decimal::ZERO;
    let mut total_pl = Decimal::ZERO;
    let mut total_cost_basis = Decimal::ZERO;

    for summary in &portfolio_summaries {
        total_value += summary.total_value;
        total_cash += summary.cash_value;
        total_holdings += summary.holdings_value;
        total_pl += summary.unrealized_pl;
        total_cost_basis += summary.cost_basis;
    }

    let pl_percent = percent_of(total_pl, total_cost_basis);

    GlobalSummary {
        total_value: round_money(total_value),
        total_cash: round_money(total_cash),
        total_holdings: round_money(total_holdings),
        total_unrealized_pl: round_money(total_pl),
        total_unrealized_pl_percent: round_money(pl_percent),
        total_cost_basis: round_money(total_cost_basis),
        display_currency,
        usd_ils_rate,
        portfolio_summaries,
    }
}

/// Groups holdings and cash by portfolio and summarizes each.
pub fn summarize_portfolios(
    portfolios: &[Portfolio],
    holdings: &[Holding],
    cash_balances: &[CashBalance],
    prices: &HashMap<String, Decimal>,
    display_currency: Currency,
    usd_ils_rate: Decimal,
) -> Vec<PortfolioSummary> {
    portfolios
        .iter()
        .map(|portfolio| {
            let portfolio_holdings: Vec<Holding> = holdings
                .iter()
                .filter(|h| h.portfolio_id == portfolio.id)
                .cloned()
                .collect();
            let portfolio_cash: Vec<CashBalance> = cash_balances
                .iter()
                .filter(|c| c.portfolio_id == portfolio.id)
                .cloned()
                .collect();
            portfolio_summary(
                portfolio,
                &portfolio_holdings,
                &portfolio_cash,
                prices,
                display_currency,
                usd_ils_rate,
            )
        })
        .collect()
}

/// Day-over-day change of a total value.
///
/// Both figures are 0 when there is no usable yesterday value.
pub fn daily_change(today_value: Decimal, yesterday_value: Decimal) -> DailyChange {
    if yesterday_value.is_zero() {
        return DailyChange::zero();
    }
    let amount = today_value - yesterday_value;
    DailyChange {
        amount: round_money(amount),
        percent: round_money(percent_of(amount, yesterday_value)),
    }
}

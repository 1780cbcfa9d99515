use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_MARGIN_LEVEL: Decimal = dec!(100);
pub const DEFAULT_MARGIN_CALL_LEVEL: Decimal = dec!(80);
pub const DEFAULT_STOP_OUT_LEVEL: Decimal = dec!(50);

/// A closed trade as reported by the trading history feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub id: u32,
    pub symbol: String,
    pub created_at: DateTime<Utc>,
    pub profit_loss: Decimal,
}

/// Summary figures shown on the trader dashboard.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TradingStats {
    pub total_trades: usize,
    pub winning_trades: usize,
    pub losing_trades: usize,
    pub total_profit: Decimal,
    /// Absolute value of the summed losses.
    pub total_loss: Decimal,
    pub net_profit_loss: Decimal,
    pub average_profit_per_trade: Decimal,
    /// Percentage in `[0, 100]`.
    pub win_rate: Decimal,
}

impl TradingStats {
    pub fn from_trades(trades: &[Trade]) -> Self {
        if trades.is_empty() {
            return Self::default();
        }

        let (wins, losses): (Vec<&Trade>, Vec<&Trade>) = trades
            .iter()
            .filter(|t| !t.profit_loss.is_zero())
            .partition(|t| t.profit_loss > Decimal::ZERO);

        let total_profit: Decimal = wins.iter().map(|t| t.profit_loss).sum();
        let total_loss = losses.iter().map(|t| t.profit_loss).sum::<Decimal>().abs();
        let net_profit_loss = total_profit - total_loss;
        let count = Decimal::from(trades.len());

        Self {
            total_trades: trades.len(),
            winning_trades: wins.len(),
            losing_trades: losses.len(),
            total_profit,
            total_loss,
            net_profit_loss,
            average_profit_per_trade: net_profit_loss / count,
            win_rate: Decimal::from(wins.len()) / count * dec!(100),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyPerformance {
    pub date: NaiveDate,
    pub pnl: Decimal,
    pub cumulative_pnl: Decimal,
    pub trades: usize,
}

/// Groups trades by UTC calendar day, oldest first, with a running total.
pub fn daily_performance(trades: &[Trade]) -> Vec<DailyPerformance> {
    let mut by_day: BTreeMap<NaiveDate, (Decimal, usize)> = BTreeMap::new();
    for trade in trades {
        let entry = by_day
            .entry(trade.created_at.date_naive())
            .or_insert((Decimal::ZERO, 0));
        entry.0 += trade.profit_loss;
        entry.1 += 1;
    }

    let mut cumulative = Decimal::ZERO;
    by_day
        .into_iter()
        .map(|(date, (pnl, count))| {
            cumulative += pnl;
            DailyPerformance {
                date,
                pnl,
                cumulative_pnl: cumulative,
                trades: count,
            }
        })
        .collect()
}

/// Margin figures reported for a trader account. Missing or zero values fall
/// back to the platform defaults.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MarginLevels {
    pub margin_level: Option<Decimal>,
    pub margin_call_level: Option<Decimal>,
    pub stop_out_level: Option<Decimal>,
}

fn or_default(value: Option<Decimal>, default: Decimal) -> Decimal {
    value.filter(|v| !v.is_zero()).unwrap_or(default)
}

impl MarginLevels {
    pub fn margin_level(&self) -> Decimal {
        or_default(self.margin_level, DEFAULT_MARGIN_LEVEL)
    }

    pub fn margin_call_level(&self) -> Decimal {
        or_default(self.margin_call_level, DEFAULT_MARGIN_CALL_LEVEL)
    }

    pub fn stop_out_level(&self) -> Decimal {
        or_default(self.stop_out_level, DEFAULT_STOP_OUT_LEVEL)
    }

    /// Position of the margin level between the stop-out level and 100%,
    /// as a percentage clamped to `[0, 100]`.
    pub fn health(&self) -> Decimal {
        let level = self.margin_level();
        let stop_out = self.stop_out_level();
        let range = dec!(100) - stop_out;

        if range <= Decimal::ZERO {
            return if level >= stop_out { dec!(100) } else { Decimal::ZERO };
        }

        ((level - stop_out) / range * dec!(100)).clamp(Decimal::ZERO, dec!(100))
    }

    pub fn is_margin_call(&self) -> bool {
        self.margin_level() <= self.margin_call_level()
    }
}

use crate::domain::ports::TradeHistoryBox;
use crate::domain::trading::{
    DailyPerformance, MarginLevels, Trade, TradingStats, daily_performance,
};
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

/// Everything the trader dashboard renders from a history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub stats: TradingStats,
    pub daily: Vec<DailyPerformance>,
    pub margin_health: Decimal,
    pub margin_call: bool,
}

/// Aggregates a trader's closed trades into dashboard figures.
///
/// It owns the history backend; figures are recomputed from the full history
/// on every call.
pub struct DashboardService {
    history: TradeHistoryBox,
    margin: MarginLevels,
}

impl DashboardService {
    /// Creates a new `DashboardService`.
    ///
    /// # Arguments
    ///
    /// * `history` - The store for closed trades.
    pub fn new(history: TradeHistoryBox) -> Self {
        Self {
            history,
            margin: MarginLevels::default(),
        }
    }

    pub fn with_margin(mut self, margin: MarginLevels) -> Self {
        self.margin = margin;
        self
    }

    pub async fn record_trade(&self, trade: Trade) -> Result<()> {
        debug!(id = trade.id, symbol = %trade.symbol, "recording trade");
        self.history.store(trade).await
    }

    pub async fn summary(&self) -> Result<DashboardSummary> {
        let trades = self.history.all().await?;
        debug!(count = trades.len(), "summarising trade history");
        Ok(DashboardSummary {
            stats: TradingStats::from_trades(&trades),
            daily: daily_performance(&trades),
            margin_health: self.margin.health(),
            margin_call: self.margin.is_margin_call(),
        })
    }

    /// Consumes the service and returns the final summary.
    pub async fn into_summary(self) -> Result<DashboardSummary> {
        self.summary().await
    }
}

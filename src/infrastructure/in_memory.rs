use crate::domain::ports::TradeHistory;
use crate::domain::trading::Trade;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory trade history.
///
/// Trades are keyed by id; storing a trade with a known id replaces it.
#[derive(Default, Clone)]
pub struct InMemoryTradeHistory {
    trades: Arc<RwLock<BTreeMap<u32, Trade>>>,
}

impl InMemoryTradeHistory {
    /// Creates a new, empty in-memory trade history.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TradeHistory for InMemoryTradeHistory {
    async fn store(&self, trade: Trade) -> Result<()> {
        let mut trades = self.trades.write().await;
        trades.insert(trade.id, trade);
        Ok(())
    }

    async fn all(&self) -> Result<Vec<Trade>> {
        let trades = self.trades.read().await;
        Ok(trades.values().cloned().collect())
    }
}

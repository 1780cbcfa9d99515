use super::trading::Trade;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;

/// Source of simulated latency.
///
/// `after` must register the timer before returning so that a caller holding
/// the receiver can rely on virtual time being advanced afterwards.
pub trait Scheduler: Send + Sync {
    fn after(&self, delay: Duration) -> oneshot::Receiver<()>;
}

/// Produces the random part of a generated link.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Typed lookup of display text with an inline fallback.
pub trait Translator: Send + Sync {
    fn translate(&self, key: &str, fallback: &str, params: &[(&str, &str)]) -> String;
}

#[async_trait]
pub trait TradeHistory: Send + Sync {
    async fn store(&self, trade: Trade) -> Result<()>;
    async fn all(&self) -> Result<Vec<Trade>>;
}

pub type SchedulerArc = Arc<dyn Scheduler>;
pub type IdGeneratorArc = Arc<dyn IdGenerator>;
pub type TradeHistoryBox = Box<dyn TradeHistory>;

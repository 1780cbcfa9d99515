use crate::domain::ports::Scheduler;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::oneshot;

/// Wall-clock scheduler backed by `tokio::time`.
///
/// Must be used from within a Tokio runtime.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioScheduler;

impl Scheduler for TokioScheduler {
    fn after(&self, delay: Duration) -> oneshot::Receiver<()> {
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(());
        });
        rx
    }
}

#[derive(Default)]
struct ManualState {
    now: Duration,
    timers: Vec<(Duration, oneshot::Sender<()>)>,
}

/// Virtual-time scheduler. Timers only fire when [`ManualScheduler::advance`]
/// moves the clock past their deadline.
///
/// Clones share the same clock.
#[derive(Default, Clone)]
pub struct ManualScheduler {
    state: Arc<Mutex<ManualState>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, ManualState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Virtual time elapsed since creation.
    pub fn now(&self) -> Duration {
        self.lock().now
    }

    /// Number of timers still waiting whose receiver is alive.
    pub fn pending(&self) -> usize {
        let mut state = self.lock();
        state.timers.retain(|(_, tx)| !tx.is_closed());
        state.timers.len()
    }

    /// Moves the clock forward and fires every timer that became due.
    pub fn advance(&self, by: Duration) {
        let due = {
            let mut state = self.lock();
            state.now += by;
            let now = state.now;
            let (due, waiting): (Vec<_>, Vec<_>) = state
                .timers
                .drain(..)
                .partition(|(deadline, _)| *deadline <= now);
            state.timers = waiting;
            due
        };

        for (_, tx) in due {
            let _ = tx.send(());
        }
    }
}

impl Scheduler for ManualScheduler {
    fn after(&self, delay: Duration) -> oneshot::Receiver<()> {
        let (tx, rx) = oneshot::channel();
        if delay.is_zero() {
            let _ = tx.send(());
            return rx;
        }

        let mut state = self.lock();
        let deadline = state.now + delay;
        state.timers.push((deadline, tx));
        rx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::oneshot::error::TryRecvError;

    #[test]
    fn test_manual_timer_fires_on_deadline() {
        let scheduler = ManualScheduler::new();
        let mut rx = scheduler.after(Duration::from_millis(1500));
        assert_eq!(scheduler.pending(), 1);

        scheduler.advance(Duration::from_millis(1499));
        assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));

        scheduler.advance(Duration::from_millis(1));
        assert_eq!(rx.try_recv(), Ok(()));
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(scheduler.now(), Duration::from_millis(1500));
    }

    #[test]
    fn test_manual_zero_delay_fires_immediately() {
        let scheduler = ManualScheduler::new();
        let mut rx = scheduler.after(Duration::ZERO);
        assert_eq!(rx.try_recv(), Ok(()));
    }

    #[test]
    fn test_dropped_receivers_are_not_pending() {
        let scheduler = ManualScheduler::new();
        let rx = scheduler.after(Duration::from_secs(1));
        drop(rx);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_clones_share_clock() {
        let scheduler = ManualScheduler::new();
        let clone = scheduler.clone();
        let mut rx = scheduler.after(Duration::from_secs(2));
        clone.advance(Duration::from_secs(2));
        assert_eq!(rx.try_recv(), Ok(()));
    }

    #[tokio::test]
    async fn test_tokio_scheduler_fires() {
        let rx = TokioScheduler.after(Duration::from_millis(5));
        assert!(rx.await.is_ok());
    }
}

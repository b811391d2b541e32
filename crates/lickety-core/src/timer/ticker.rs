//! Scoped 1 Hz tick source.
//!
//! A running session needs exactly one periodic callback, and that callback
//! must die with the screen that owns it - a timer still firing after the
//! user navigated away is a resource leak. The ticker wraps a tokio task
//! behind a guard: dropping the [`Ticker`] aborts the task, so cancellation
//! happens on every exit path, normal completion and abrupt teardown alike.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Emits one unit per period until dropped.
#[derive(Debug)]
pub struct Ticker {
    rx: mpsc::Receiver<()>,
    handle: JoinHandle<()>,
}

impl Ticker {
    /// Spawn a ticker firing every `period`. The first tick arrives one
    /// full period after the call, not immediately.
    pub fn spawn(period: Duration) -> Self {
        let (tx, rx) = mpsc::channel(1);
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // interval's first tick completes immediately; swallow it.
            interval.tick().await;
            loop {
                interval.tick().await;
                if tx.send(()).await.is_err() {
                    break;
                }
            }
        });
        Self { rx, handle }
    }

    /// The standard one-second session clock.
    pub fn per_second() -> Self {
        Self::spawn(Duration::from_secs(1))
    }

    /// Wait for the next tick. Never returns `None` while the ticker is
    /// alive; the sender only closes when the guard aborts the task.
    pub async fn tick(&mut self) -> Option<()> {
        self.rx.recv().await
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

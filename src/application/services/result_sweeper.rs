use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::ResultStore;

/// Background task that periodically evicts expired results.
pub struct ResultSweeper {
    result_store: Arc<dyn ResultStore>,
    interval: Duration,
}

impl ResultSweeper {
    pub fn new(result_store: Arc<dyn ResultStore>, interval: Duration) -> Self {
        Self {
            result_store,
            interval,
        }
    }

    pub async fn run(self) {
        tracing::info!(
            interval_secs = self.interval.as_secs(),
            "Result sweeper started"
        );

        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        // The first tick completes immediately.
        ticker.tick().await;

        loop {
            ticker.tick().await;
            self.sweep_once().await;
        }
    }

    pub async fn sweep_once(&self) -> usize {
        match self.result_store.purge_expired().await {
            Ok(0) => 0,
            Ok(removed) => {
                tracing::info!(removed, "Expired results purged");
                removed
            }
            Err(e) => {
                tracing::error!(error = %e, "Result purge failed");
                0
            }
        }
    }
}

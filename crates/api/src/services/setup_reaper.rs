use std::time::Duration;
use tokio::time::{interval, Interval};
use tracing::{debug, info};

use crate::AppState;

const CHECK_INTERVAL_SECONDS: u64 = 60;

/// Closes league setup forms that were abandoned without being cancelled,
/// releasing their roster listeners.
pub struct SetupReaper {
    state: AppState,
    interval: Interval,
}

impl SetupReaper {
    pub fn new(state: AppState) -> Self {
        let interval = interval(Duration::from_secs(CHECK_INTERVAL_SECONDS));
        Self { state, interval }
    }

    pub async fn run(&mut self) {
        info!(
            idle_timeout_secs = self.state.config().setup_idle_timeout.as_secs(),
            "Starting league setup reaper"
        );

        loop {
            self.interval.tick().await;
            self.reap();
        }
    }

    fn reap(&self) -> usize {
        let removed = self
            .state
            .setups()
            .reap_idle(self.state.config().setup_idle_timeout);
        if removed > 0 {
            info!(removed, "Closed idle league setups");
        } else {
            debug!("No idle league setups");
        }
        removed
    }
}

/// Spawn the reaper as a background task
pub fn spawn_setup_reaper(state: AppState) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut reaper = SetupReaper::new(state);
        reaper.run().await;
    })
}

use std::time::Duration;

use crate::{ConnectionHealth, StoreError, store::ProbeStore};

/// Drives connection-health lifecycle transitions from periodic liveness
/// pings.
///
/// Each ping outcome maps to exactly one transition on the shared
/// [`ConnectionHealth`]: success prepares the store (first time after a
/// disconnect) and marks it connected; a closed pool marks it disconnected;
/// any other failure records the error. The monitor only observes —
/// reconnecting is left to the lazy pool.
pub struct ConnectionMonitor<S> {
    store: S,
    health: ConnectionHealth,
    interval: Duration,
}

impl<S: ProbeStore> ConnectionMonitor<S> {
    pub fn new(store: S, health: ConnectionHealth, interval: Duration) -> Self {
        Self {
            store,
            health,
            interval,
        }
    }

    /// Performs one ping and applies the resulting lifecycle transition.
    pub async fn check_once(&self) {
        let was_connected = self.health.is_connected().await;

        match self.store.ping().await {
            Ok(()) => {
                if !was_connected {
                    if let Err(err) = self.store.prepare().await {
                        tracing::warn!(error = %err, "store preparation failed");
                        self.health.record_error(err.to_string()).await;
                        metrics::gauge!("database_connected").set(0.0);
                        return;
                    }
                    tracing::info!("connected to database");
                    self.health.mark_connected().await;
                }
                metrics::gauge!("database_connected").set(1.0);
            }
            Err(StoreError::Database(sqlx::Error::PoolClosed)) => {
                if was_connected {
                    tracing::warn!("lost database connection");
                }
                self.health.mark_disconnected().await;
                metrics::gauge!("database_connected").set(0.0);
            }
            Err(err) => {
                if was_connected {
                    tracing::warn!(error = %err, "lost database connection");
                }
                self.health.record_error(err.to_string()).await;
                metrics::gauge!("database_connected").set(0.0);
            }
        }
    }

    /// Runs the ping loop forever. Intended to be spawned as a task.
    pub async fn run(self) {
        let mut ticker = tokio::time::interval(self.interval);
        loop {
            ticker.tick().await;
            self.check_once().await;
        }
    }
}

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{ProbeRecord, Result, StoreError, store::ProbeStore};

/// In-memory probe store for testing.
///
/// Connectivity and failures are settable so tests can exercise every
/// lifecycle transition without a database.
#[derive(Clone)]
pub struct InMemoryProbeStore {
    records: Arc<RwLock<Vec<ProbeRecord>>>,
    connected: Arc<AtomicBool>,
    ping_failure: Arc<RwLock<Option<String>>>,
    write_failure: Arc<RwLock<Option<String>>>,
}

impl Default for InMemoryProbeStore {
    fn default() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
            connected: Arc::new(AtomicBool::new(true)),
            ping_failure: Arc::new(RwLock::new(None)),
            write_failure: Arc::new(RwLock::new(None)),
        }
    }
}

impl InMemoryProbeStore {
    /// Creates a new store that reports itself connected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips connectivity; while false, pings and writes fail as a closed
    /// pool would.
    pub fn set_connected(&self, connected: bool) {
        self.connected.store(connected, Ordering::SeqCst);
    }

    /// Makes subsequent pings fail with the given message (None to restore).
    pub async fn fail_pings_with(&self, message: Option<&str>) {
        *self.ping_failure.write().await = message.map(str::to_string);
    }

    /// Makes subsequent probe writes fail with the given message (None to
    /// restore).
    pub async fn fail_writes_with(&self, message: Option<&str>) {
        *self.write_failure.write().await = message.map(str::to_string);
    }

    /// Returns the number of probe records stored.
    pub async fn probe_count(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl ProbeStore for InMemoryProbeStore {
    async fn ping(&self) -> Result<()> {
        if let Some(msg) = self.ping_failure.read().await.clone() {
            return Err(StoreError::Database(sqlx::Error::Protocol(msg)));
        }
        if !self.connected.load(Ordering::SeqCst) {
            return Err(StoreError::Database(sqlx::Error::PoolClosed));
        }
        Ok(())
    }

    async fn insert_probe(&self, record: &ProbeRecord) -> Result<()> {
        if !self.connected.load(Ordering::SeqCst) {
            return Err(StoreError::Database(sqlx::Error::PoolClosed));
        }
        if let Some(msg) = self.write_failure.read().await.clone() {
            return Err(StoreError::WriteFailed(msg));
        }
        self.records.write().await.push(record.clone());
        Ok(())
    }
}

use async_trait::async_trait;

use crate::{ProbeRecord, Result};

/// Core trait for probe store implementations.
///
/// A probe store answers liveness pings and accepts disposable probe writes.
/// All implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait ProbeStore: Send + Sync {
    /// Cheap liveness check against the backing database.
    async fn ping(&self) -> Result<()>;

    /// Runs once on every transition to connected, before the store is
    /// considered usable. The PostgreSQL implementation applies migrations
    /// here so the probe table exists even when the database comes up after
    /// the service.
    async fn prepare(&self) -> Result<()> {
        Ok(())
    }

    /// Inserts one disposable probe record. No retrieval guarantees.
    async fn insert_probe(&self, record: &ProbeRecord) -> Result<()>;
}

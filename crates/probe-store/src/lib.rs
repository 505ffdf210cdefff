//! Database layer for the status service.
//!
//! Tracks live connectivity and the last known connection error in an
//! explicit shared state object ([`ConnectionHealth`]), updated only through
//! lifecycle transition handlers driven by a [`ConnectionMonitor`]. Probe
//! writes go through the [`ProbeStore`] trait, with PostgreSQL and in-memory
//! implementations.

pub mod error;
pub mod health;
pub mod memory;
pub mod monitor;
pub mod postgres;
pub mod record;
pub mod store;

pub use error::{Result, StoreError};
pub use health::{ConnectionHealth, ConnectionState, HealthSnapshot};
pub use memory::InMemoryProbeStore;
pub use monitor::ConnectionMonitor;
pub use postgres::PostgresProbeStore;
pub use record::ProbeRecord;
pub use store::ProbeStore;

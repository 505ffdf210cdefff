use std::sync::Arc;

use tokio::sync::RwLock;

/// Whether the database client currently believes it has a live connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    Connected,
    #[default]
    Disconnected,
}

impl ConnectionState {
    pub fn is_connected(self) -> bool {
        matches!(self, ConnectionState::Connected)
    }
}

/// Point-in-time view of the connection health, read in one lock acquisition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthSnapshot {
    pub state: ConnectionState,
    pub last_error: Option<String>,
}

#[derive(Debug, Default)]
struct Inner {
    state: ConnectionState,
    last_error: Option<String>,
}

/// Shared connection-health state for the whole process.
///
/// Mutated only through the lifecycle transition handlers below; request
/// handlers read it through the accessors. The stored error persists across
/// requests until a transition clears or replaces it.
#[derive(Debug, Clone, Default)]
pub struct ConnectionHealth {
    inner: Arc<RwLock<Inner>>,
}

const DEFAULT_DISCONNECT_MESSAGE: &str = "database disconnected unexpectedly";

impl ConnectionHealth {
    /// Creates new health state, initially `Disconnected` with no error.
    pub fn new() -> Self {
        Self::default()
    }

    /// Transition: connection (re)established. Clears any stored error.
    pub async fn mark_connected(&self) {
        let mut inner = self.inner.write().await;
        inner.state = ConnectionState::Connected;
        inner.last_error = None;
    }

    /// Transition: connection lost without a specific error. Keeps an
    /// already-stored error; otherwise records a default message.
    pub async fn mark_disconnected(&self) {
        let mut inner = self.inner.write().await;
        inner.state = ConnectionState::Disconnected;
        if inner.last_error.is_none() {
            inner.last_error = Some(DEFAULT_DISCONNECT_MESSAGE.to_string());
        }
    }

    /// Transition: connection-level error. Stores the message and forces
    /// `Disconnected`.
    pub async fn record_error(&self, message: impl Into<String>) {
        let mut inner = self.inner.write().await;
        inner.state = ConnectionState::Disconnected;
        inner.last_error = Some(message.into());
    }

    pub async fn is_connected(&self) -> bool {
        self.inner.read().await.state.is_connected()
    }

    pub async fn last_error(&self) -> Option<String> {
        self.inner.read().await.last_error.clone()
    }

    pub async fn snapshot(&self) -> HealthSnapshot {
        let inner = self.inner.read().await;
        HealthSnapshot {
            state: inner.state,
            last_error: inner.last_error.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_starts_disconnected_with_no_error() {
        let health = ConnectionHealth::new();
        let snap = health.snapshot().await;
        assert_eq!(snap.state, ConnectionState::Disconnected);
        assert_eq!(snap.last_error, None);
    }

    #[tokio::test]
    async fn test_disconnect_without_prior_error_sets_default_message() {
        let health = ConnectionHealth::new();
        health.mark_connected().await;
        health.mark_disconnected().await;
        assert_eq!(
            health.last_error().await.as_deref(),
            Some("database disconnected unexpectedly")
        );
    }

    #[tokio::test]
    async fn test_disconnect_keeps_prior_error() {
        let health = ConnectionHealth::new();
        health.record_error("connection refused").await;
        health.mark_disconnected().await;
        assert_eq!(
            health.last_error().await.as_deref(),
            Some("connection refused")
        );
    }

    #[tokio::test]
    async fn test_reconnection_clears_stored_error() {
        let health = ConnectionHealth::new();
        health.record_error("connection refused").await;
        health.mark_connected().await;
        assert!(health.is_connected().await);
        assert_eq!(health.last_error().await, None);
    }

    #[tokio::test]
    async fn test_record_error_forces_disconnected() {
        let health = ConnectionHealth::new();
        health.mark_connected().await;
        health.record_error("socket reset").await;
        assert!(!health.is_connected().await);
        assert_eq!(health.last_error().await.as_deref(), Some("socket reset"));
    }
}

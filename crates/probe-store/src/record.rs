use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A disposable record inserted once per status request to confirm write
/// capability. Nothing ever reads these back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeRecord {
    pub id: Uuid,
    /// Which component issued the probe (e.g. `"api"`).
    pub source: String,
    pub created_at: DateTime<Utc>,
}

impl ProbeRecord {
    /// Creates a fresh probe record tagged with its source.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            source: source.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_get_unique_ids() {
        let a = ProbeRecord::new("api");
        let b = ProbeRecord::new("api");
        assert_ne!(a.id, b.id);
        assert_eq!(a.source, "api");
    }
}

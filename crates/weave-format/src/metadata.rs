use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Descriptive data stored next to the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotMetadata {
    /// Name the textile is known by, usually its registry name.
    pub name: String,
    /// When the snapshot was taken.
    pub created: DateTime<Utc>,
}

impl SnapshotMetadata {
    /// Metadata with the given name and the current time.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            created: Utc::now(),
        }
    }
}

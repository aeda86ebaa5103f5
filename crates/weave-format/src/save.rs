use serde::Serialize;
use tracing::{debug, instrument};
use weave_kernel::Textile;

use crate::errors::SaveError;
use crate::metadata::SnapshotMetadata;
use crate::snapshot::TextileSnapshot;

/// Format identifier written into every snapshot.
pub const FORMAT_ID: &str = "weave-textile";

/// Current snapshot format version.
pub const FORMAT_VERSION: u32 = 1;

/// The top-level snapshot structure.
#[derive(Debug, Clone, Serialize)]
pub struct SnapshotFile<'a> {
    pub format: &'a str,
    pub version: u32,
    pub metadata: &'a SnapshotMetadata,
    pub textile: TextileSnapshot,
}

/// Serialize a textile to a pretty-printed JSON string.
#[instrument(skip(textile, metadata), fields(name = %metadata.name))]
pub fn save_textile(textile: &Textile, metadata: &SnapshotMetadata) -> Result<String, SaveError> {
    let file = SnapshotFile {
        format: FORMAT_ID,
        version: FORMAT_VERSION,
        metadata,
        textile: TextileSnapshot::from_textile(textile),
    };
    let json =
        serde_json::to_string_pretty(&file).map_err(|e| SaveError::Serialize(e.to_string()))?;
    debug!(bytes = json.len(), "snapshot written");
    Ok(json)
}

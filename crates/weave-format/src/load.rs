use serde::Deserialize;
use tracing::{debug, instrument};
use weave_kernel::Textile;

use crate::errors::LoadError;
use crate::metadata::SnapshotMetadata;
use crate::save::{FORMAT_ID, FORMAT_VERSION};
use crate::snapshot::TextileSnapshot;

/// The top-level snapshot structure for deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotFileRaw {
    pub format: String,
    pub version: u32,
    pub metadata: SnapshotMetadata,
    pub textile: TextileSnapshot,
}

/// Deserialize a textile from a JSON string.
///
/// Checks the format identifier and version, then rebuilds the model through
/// the kernel builders so a hand-edited snapshot gets the same validation as
/// code-built models.
#[instrument(skip(json), fields(bytes = json.len()))]
pub fn load_textile(json: &str) -> Result<(Textile, SnapshotMetadata), LoadError> {
    let raw: SnapshotFileRaw =
        serde_json::from_str(json).map_err(|e| LoadError::ParseError(e.to_string()))?;

    if raw.format != FORMAT_ID {
        return Err(LoadError::UnknownFormat(raw.format));
    }

    if raw.version > FORMAT_VERSION {
        return Err(LoadError::FutureVersion {
            file_version: raw.version,
            supported_version: FORMAT_VERSION,
        });
    }

    let snapshot = if raw.version < FORMAT_VERSION {
        crate::migrate::migrate(raw.textile, raw.version, FORMAT_VERSION)?
    } else {
        raw.textile
    };

    let textile = snapshot.into_textile()?;
    debug!(name = %raw.metadata.name, yarns = textile.yarn_count(), "snapshot loaded");
    Ok((textile, raw.metadata))
}

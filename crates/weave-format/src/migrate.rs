use crate::errors::LoadError;
use crate::snapshot::TextileSnapshot;

/// Apply snapshot migrations from `from_version` to `to_version`, one version
/// step at a time.
///
/// Version 1 is the only version so far, so any real migration request fails.
pub fn migrate(
    snapshot: TextileSnapshot,
    from_version: u32,
    to_version: u32,
) -> Result<TextileSnapshot, LoadError> {
    if from_version != to_version {
        return Err(LoadError::MigrationFailed {
            from: from_version,
            to: to_version,
            reason: format!("no migration path from v{from_version} to v{to_version}"),
        });
    }
    Ok(snapshot)
}

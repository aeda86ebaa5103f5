//! Versioned JSON snapshots of textile models.
//!
//! Snapshots are plain strings; reading and writing files is left to the
//! caller. Shared sections are stored once and referenced by index, so a
//! textile whose yarns share one section still shares it after loading.

pub mod errors;
pub mod load;
pub mod metadata;
pub mod migrate;
pub mod save;
pub mod snapshot;

pub use errors::{LoadError, SaveError};
pub use load::load_textile;
pub use metadata::SnapshotMetadata;
pub use save::{save_textile, FORMAT_ID, FORMAT_VERSION};
pub use snapshot::TextileSnapshot;

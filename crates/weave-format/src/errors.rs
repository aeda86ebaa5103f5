use weave_kernel::BuildError;

/// Errors while reading a textile snapshot.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoadError {
    #[error("failed to parse snapshot: {0}")]
    ParseError(String),

    #[error("unknown snapshot format: {0}")]
    UnknownFormat(String),

    #[error("snapshot version {file_version} is newer than supported version {supported_version}")]
    FutureVersion {
        file_version: u32,
        supported_version: u32,
    },

    #[error("migration failed from version {from} to {to}: {reason}")]
    MigrationFailed { from: u32, to: u32, reason: String },

    #[error("yarn {yarn} refers to section {index}, but only {count} sections are stored")]
    DanglingSection {
        yarn: usize,
        index: usize,
        count: usize,
    },

    #[error("snapshot describes an invalid model: {0}")]
    InvalidModel(#[from] BuildError),
}

/// Errors while writing a textile snapshot.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SaveError {
    #[error("failed to serialize snapshot: {0}")]
    Serialize(String),
}

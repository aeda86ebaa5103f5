use weave_kernel::{BuildError, RegistryError};

/// Errors from building or registering a unit cell.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CellError {
    #[error("build failed: {0}")]
    Build(#[from] BuildError),

    #[error("registration failed: {0}")]
    Registry(#[from] RegistryError),
}

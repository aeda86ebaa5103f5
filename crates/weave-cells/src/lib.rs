//! Ready-made textile unit cells.
//!
//! Each cell is a parameter struct whose `Default` reproduces a known model.
//! Building a cell runs the kernel builders; registering publishes the result
//! into a caller-owned [`TextileRegistry`].

pub mod error;
pub mod polyester;

use weave_kernel::{Textile, TextileId, TextileRegistry};

pub use error::CellError;
pub use polyester::{build_polyester, register_polyester, PolyesterParams};

/// A parameterised unit cell that can be built and registered by name.
pub trait UnitCell {
    /// Registry name the cell is published under.
    fn name(&self) -> &str;

    fn build(&self) -> Result<Textile, CellError>;

    /// Build the cell and register it under [`UnitCell::name`].
    fn register(&self, registry: &mut TextileRegistry) -> Result<TextileId, CellError> {
        let textile = self.build()?;
        Ok(registry.register(self.name(), textile)?)
    }
}

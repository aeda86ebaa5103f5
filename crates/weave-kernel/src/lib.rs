//! Data model and construction protocol for textile unit cells.
//!
//! A [`Textile`] owns an ordered list of [`Yarn`]s and an optional
//! [`DomainPlanes`] bounding box. Each yarn is a node polyline with an
//! interpolation choice, a cross-section, a sampling resolution and a set of
//! repeat vectors. Everything is assembled through builders that validate on
//! `build()` and hand back immutable values; finished textiles are published
//! into an explicitly passed [`TextileRegistry`].
//!
//! The curve interpolation and section triangulation themselves are not
//! computed here; only the choices are recorded.

pub mod domain;
pub mod error;
pub mod geometry;
pub mod registry;
pub mod section;
pub mod textile;
pub mod yarn;

pub use domain::{DomainPlanes, RepeatSearch};
pub use error::BuildError;
pub use geometry::{BoundingBox, Plane};
pub use registry::{CollisionPolicy, RegistryConfig, RegistryError, TextileRegistry};
pub use section::{Section, SectionEllipse, SectionMesh, SectionPolygon};
pub use textile::{Textile, TextileBuilder};
pub use yarn::{Interpolation, InterpolationKind, Node, Yarn, YarnBuilder, YarnSection};

pub use weave_types::{TextileId, Xy, Xyz};

/// Tolerance configuration for geometric comparisons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Nodes closer than this are considered coincident (model units).
    pub coincidence: f64,
    /// Areas smaller than this are considered zero (model units squared).
    pub area: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            coincidence: 1e-9,
            area: 1e-12,
        }
    }
}

impl Tolerance {
    pub fn points_coincident(&self, a: &Xyz, b: &Xyz) -> bool {
        a.distance_to(b) < self.coincidence
    }

    pub fn is_zero_area(&self, area: f64) -> bool {
        area.abs() < self.area
    }
}

pub fn default_tolerance() -> Tolerance {
    Tolerance::default()
}

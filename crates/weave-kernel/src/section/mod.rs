//! Cross-section profiles swept along yarn centerlines.
//!
//! A [`Section`] is a closed 2D outline plus an optional meshing strategy.
//! Sections are immutable once built and are shared between yarns through
//! `Arc`.

pub mod ellipse;
pub mod mesh;
pub mod polygon;

use serde::{Deserialize, Serialize};
use weave_types::Xy;

use crate::error::BuildError;

pub use ellipse::SectionEllipse;
pub use mesh::SectionMesh;
pub use polygon::SectionPolygon;

/// The outline of a section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SectionShape {
    Ellipse(SectionEllipse),
    Polygon(SectionPolygon),
}

/// A cross-section with its meshing strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    shape: SectionShape,
    mesh: Option<SectionMesh>,
}

impl Section {
    /// Elliptical section with the given radii along the section's x and y axes.
    pub fn ellipse(radius_a: f64, radius_b: f64) -> Result<Self, BuildError> {
        Ok(Self::from_shape(SectionShape::Ellipse(SectionEllipse::new(
            radius_a, radius_b,
        )?)))
    }

    /// Polygonal section from a closed outline (the last point joins the first).
    pub fn polygon(points: Vec<Xy>) -> Result<Self, BuildError> {
        Ok(Self::from_shape(SectionShape::Polygon(SectionPolygon::new(
            points,
        )?)))
    }

    fn from_shape(shape: SectionShape) -> Self {
        Self { shape, mesh: None }
    }

    /// Attach a meshing strategy, replacing any previous one.
    pub fn with_mesh(mut self, mesh: SectionMesh) -> Self {
        self.mesh = Some(mesh);
        self
    }

    pub fn shape(&self) -> &SectionShape {
        &self.shape
    }

    pub fn mesh(&self) -> Option<&SectionMesh> {
        self.mesh.as_ref()
    }

    pub fn as_ellipse(&self) -> Option<&SectionEllipse> {
        match &self.shape {
            SectionShape::Ellipse(e) => Some(e),
            SectionShape::Polygon(_) => None,
        }
    }

    /// Point on the outline at `t` in `[0, 1)`, counter-clockwise.
    pub fn point_at(&self, t: f64) -> Xy {
        match &self.shape {
            SectionShape::Ellipse(e) => e.point_at(t),
            SectionShape::Polygon(p) => p.point_at(t),
        }
    }

    /// `n` outline points evenly spaced in the outline parameter.
    pub fn sample(&self, n: usize) -> Vec<Xy> {
        (0..n).map(|i| self.point_at(i as f64 / n as f64)).collect()
    }

    pub fn area(&self) -> f64 {
        match &self.shape {
            SectionShape::Ellipse(e) => e.area(),
            SectionShape::Polygon(p) => p.area(),
        }
    }

    /// Largest distance of the outline from the section origin along x and y.
    pub fn half_extents(&self) -> Xy {
        match &self.shape {
            SectionShape::Ellipse(e) => e.half_extents(),
            SectionShape::Polygon(p) => p.half_extents(),
        }
    }

    /// Re-run the constructor checks, e.g. on a deserialized value.
    pub fn validate(&self) -> Result<(), BuildError> {
        match &self.shape {
            SectionShape::Ellipse(e) => {
                SectionEllipse::new(e.radius_a, e.radius_b)?;
            }
            SectionShape::Polygon(p) => {
                SectionPolygon::new(p.points().to_vec())?;
            }
        }
        if let Some(mesh) = &self.mesh {
            mesh.validate()?;
        }
        Ok(())
    }
}

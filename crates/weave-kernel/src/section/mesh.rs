use serde::{Deserialize, Serialize};

use crate::error::BuildError;

/// Default largest triangle area, as a fraction of the section area.
pub const DEFAULT_MAX_AREA_FRACTION: f64 = 0.01;

/// How a section outline is to be meshed into 2D elements.
///
/// Only the parameters are stored here; producing the triangles is the job of
/// whatever mesher consumes the model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SectionMesh {
    /// Quality triangulation bounded by a minimum interior angle.
    Triangulate {
        min_angle_deg: f64,
        max_area_fraction: f64,
    },
    /// A single fan over the closed outline, no interior points.
    Simple,
}

impl SectionMesh {
    /// Quality triangulation with the default maximum area fraction.
    pub fn triangulate(min_angle_deg: f64) -> Result<Self, BuildError> {
        Self::triangulate_with_max_area(min_angle_deg, DEFAULT_MAX_AREA_FRACTION)
    }

    pub fn triangulate_with_max_area(
        min_angle_deg: f64,
        max_area_fraction: f64,
    ) -> Result<Self, BuildError> {
        if !(min_angle_deg > 0.0 && min_angle_deg < 90.0) {
            return Err(BuildError::InvalidMinAngle(min_angle_deg));
        }
        if !(max_area_fraction > 0.0 && max_area_fraction <= 1.0) {
            return Err(BuildError::InvalidMaxArea(max_area_fraction));
        }
        Ok(Self::Triangulate {
            min_angle_deg,
            max_area_fraction,
        })
    }

    pub fn min_angle(&self) -> Option<f64> {
        match self {
            Self::Triangulate { min_angle_deg, .. } => Some(*min_angle_deg),
            Self::Simple => None,
        }
    }

    pub fn validate(&self) -> Result<(), BuildError> {
        match *self {
            Self::Triangulate {
                min_angle_deg,
                max_area_fraction,
            } => Self::triangulate_with_max_area(min_angle_deg, max_area_fraction).map(|_| ()),
            Self::Simple => Ok(()),
        }
    }
}

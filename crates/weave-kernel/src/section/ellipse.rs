use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};
use weave_types::Xy;

use crate::error::BuildError;

/// Ellipse centered on the section origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionEllipse {
    /// Radius along the section x axis.
    pub radius_a: f64,
    /// Radius along the section y axis.
    pub radius_b: f64,
}

impl SectionEllipse {
    pub fn new(radius_a: f64, radius_b: f64) -> Result<Self, BuildError> {
        check_radius("radius_a", radius_a)?;
        check_radius("radius_b", radius_b)?;
        Ok(Self { radius_a, radius_b })
    }

    pub fn point_at(&self, t: f64) -> Xy {
        let angle = t * TAU;
        Xy::new(self.radius_a * angle.cos(), self.radius_b * angle.sin())
    }

    pub fn area(&self) -> f64 {
        PI * self.radius_a * self.radius_b
    }

    pub fn half_extents(&self) -> Xy {
        Xy::new(self.radius_a, self.radius_b)
    }
}

fn check_radius(parameter: &'static str, value: f64) -> Result<(), BuildError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(BuildError::InvalidDimension { parameter, value })
    }
}

use serde::{Deserialize, Serialize};
use weave_types::Xy;

use crate::error::BuildError;

/// Closed polygon outline. The last point joins back to the first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionPolygon {
    points: Vec<Xy>,
}

impl SectionPolygon {
    pub fn new(points: Vec<Xy>) -> Result<Self, BuildError> {
        if points.len() < 3 {
            return Err(BuildError::InsufficientProfile {
                required: 3,
                provided: points.len(),
            });
        }
        if points.iter().any(|p| !p.is_finite()) {
            return Err(BuildError::DegenerateProfile);
        }
        let polygon = Self { points };
        if crate::default_tolerance().is_zero_area(polygon.area()) {
            return Err(BuildError::DegenerateProfile);
        }
        Ok(polygon)
    }

    pub fn points(&self) -> &[Xy] {
        &self.points
    }

    /// Unsigned area by the shoelace formula.
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Positive when the outline runs counter-clockwise.
    pub fn signed_area(&self) -> f64 {
        let n = self.points.len();
        let twice: f64 = (0..n)
            .map(|i| self.points[i].cross(&self.points[(i + 1) % n]))
            .sum();
        twice * 0.5
    }

    pub fn perimeter(&self) -> f64 {
        let n = self.points.len();
        (0..n)
            .map(|i| self.points[i].distance_to(&self.points[(i + 1) % n]))
            .sum()
    }

    /// Point at fraction `t` of the perimeter, starting at the first point.
    pub fn point_at(&self, t: f64) -> Xy {
        let n = self.points.len();
        let total = self.perimeter();
        let mut remaining = t.rem_euclid(1.0) * total;
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            let len = a.distance_to(&b);
            if remaining <= len && len > 0.0 {
                return a + (b - a) * (remaining / len);
            }
            remaining -= len;
        }
        self.points[0]
    }

    pub fn half_extents(&self) -> Xy {
        self.points.iter().fold(Xy::ORIGIN, |acc, p| {
            Xy::new(acc.x.max(p.x.abs()), acc.y.max(p.y.abs()))
        })
    }
}

//! Axis-aligned bounding domain for a textile unit cell.

pub mod repeat;

use tracing::{info, instrument};
use weave_types::Xyz;

use crate::error::BuildError;
use crate::geometry::{BoundingBox, Plane};

pub use repeat::RepeatSearch;

/// A box domain described by its six bounding planes, normals pointing inward.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainPlanes {
    min: Xyz,
    max: Xyz,
    planes: [Plane; 6],
}

impl DomainPlanes {
    /// Box domain between two corners. `min` must be below `max` on every axis.
    #[instrument]
    pub fn new(min: Xyz, max: Xyz) -> Result<Self, BuildError> {
        if !(min.is_finite() && max.is_finite() && min.strictly_below(&max)) {
            return Err(BuildError::InvalidDomain { min, max });
        }
        let planes = [
            Plane::through(min, Xyz::new(1.0, 0.0, 0.0)),
            Plane::through(max, Xyz::new(-1.0, 0.0, 0.0)),
            Plane::through(min, Xyz::new(0.0, 1.0, 0.0)),
            Plane::through(max, Xyz::new(0.0, -1.0, 0.0)),
            Plane::through(min, Xyz::new(0.0, 0.0, 1.0)),
            Plane::through(max, Xyz::new(0.0, 0.0, -1.0)),
        ];
        info!(min = ?min.to_array(), max = ?max.to_array(), "creating box domain");
        Ok(Self { min, max, planes })
    }

    pub fn min(&self) -> Xyz {
        self.min
    }

    pub fn max(&self) -> Xyz {
        self.max
    }

    pub fn planes(&self) -> &[Plane; 6] {
        &self.planes
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(self.min, self.max)
    }

    pub fn corners(&self) -> [Xyz; 8] {
        self.bounding_box().corners()
    }

    pub fn volume(&self) -> f64 {
        self.bounding_box().volume()
    }

    /// True when `p` is on or inside every plane.
    pub fn contains(&self, p: &Xyz) -> bool {
        self.planes.iter().all(|plane| plane.signed_distance(p) >= 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_cell() -> DomainPlanes {
        DomainPlanes::new(Xyz::new(0.0, 0.0, -0.02), Xyz::new(0.44, 0.44, 0.07)).unwrap()
    }

    #[test]
    fn test_corners_preserved() {
        let d = unit_cell();
        assert_eq!(d.min(), Xyz::new(0.0, 0.0, -0.02));
        assert_eq!(d.max(), Xyz::new(0.44, 0.44, 0.07));
    }

    #[test]
    fn test_contains() {
        let d = unit_cell();
        assert!(d.contains(&Xyz::new(0.22, 0.22, 0.0)));
        assert!(d.contains(&Xyz::new(0.0, 0.0, -0.02)));
        assert!(!d.contains(&Xyz::new(0.22, 0.22, 0.08)));
        assert!(!d.contains(&Xyz::new(-0.01, 0.22, 0.0)));
    }

    #[test]
    fn test_planes_face_inward() {
        let d = unit_cell();
        let center = Xyz::new(0.22, 0.22, 0.025);
        for plane in d.planes() {
            assert!(plane.signed_distance(&center) > 0.0);
        }
    }

    #[test]
    fn test_volume() {
        let d = unit_cell();
        assert!((d.volume() - 0.44 * 0.44 * 0.09).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_inverted_corners() {
        let err = DomainPlanes::new(Xyz::new(0.0, 0.0, 0.0), Xyz::new(1.0, 0.0, 1.0)).unwrap_err();
        assert!(matches!(err, BuildError::InvalidDomain { .. }));
        assert!(DomainPlanes::new(Xyz::new(1.0, 1.0, 1.0), Xyz::ZERO).is_err());
        assert!(DomainPlanes::new(Xyz::ZERO, Xyz::new(f64::NAN, 1.0, 1.0)).is_err());
    }
}

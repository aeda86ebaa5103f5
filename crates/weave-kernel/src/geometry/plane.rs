use serde::{Deserialize, Serialize};
use weave_types::Xyz;

/// An oriented plane `normal . p = d`.
///
/// Points with a non-negative signed distance lie on the inside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    pub normal: Xyz,
    pub d: f64,
}

impl Plane {
    pub fn new(normal: Xyz, d: f64) -> Self {
        Self { normal, d }
    }

    /// Plane through `point` facing along `normal`.
    pub fn through(point: Xyz, normal: Xyz) -> Self {
        Self {
            normal,
            d: normal.dot(&point),
        }
    }

    pub fn signed_distance(&self, p: &Xyz) -> f64 {
        self.normal.dot(p) - self.d
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_distance() {
        let plane = Plane::through(Xyz::new(0.0, 0.0, 1.0), Xyz::new(0.0, 0.0, 1.0));
        assert!((plane.signed_distance(&Xyz::new(5.0, 5.0, 3.0)) - 2.0).abs() < 1e-12);
        assert!(plane.signed_distance(&Xyz::ZERO) < 0.0);
    }
}

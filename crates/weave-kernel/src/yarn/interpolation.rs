use serde::{Deserialize, Serialize};

/// Which curve family smooths a yarn's node polyline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterpolationKind {
    /// Straight segments between nodes.
    Linear,
    /// Cubic spline through every node.
    Cubic,
    /// Piecewise Bezier curves through every node.
    Bezier,
}

/// Interpolation choice for a yarn centerline.
///
/// A periodic interpolation matches tangents at the first and last node, so
/// the yarn joins smoothly onto its own repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interpolation {
    pub kind: InterpolationKind,
    pub periodic: bool,
}

impl Interpolation {
    pub fn linear() -> Self {
        Self::of(InterpolationKind::Linear)
    }

    pub fn cubic() -> Self {
        Self::of(InterpolationKind::Cubic)
    }

    pub fn bezier() -> Self {
        Self::of(InterpolationKind::Bezier)
    }

    fn of(kind: InterpolationKind) -> Self {
        Self {
            kind,
            periodic: true,
        }
    }

    pub fn with_periodic(mut self, periodic: bool) -> Self {
        self.periodic = periodic;
        self
    }
}

impl Default for Interpolation {
    fn default() -> Self {
        Self::bezier()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_are_periodic() {
        assert!(Interpolation::cubic().periodic);
        assert!(Interpolation::linear().periodic);
        assert!(!Interpolation::cubic().with_periodic(false).periodic);
    }

    #[test]
    fn test_default_is_bezier() {
        assert_eq!(Interpolation::default().kind, InterpolationKind::Bezier);
    }
}

use weave_types::Xyz;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Xyz,
    pub max: Xyz,
}

impl BoundingBox {
    pub fn new(min: Xyz, max: Xyz) -> Self {
        Self { min, max }
    }

    pub fn empty() -> Self {
        Self {
            min: Xyz::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Xyz::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    pub fn from_points(points: &[Xyz]) -> Self {
        let mut bb = Self::empty();
        for p in points {
            bb.expand_to_include(p);
        }
        bb
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    pub fn expand_to_include(&mut self, p: &Xyz) {
        self.min = self.min.component_min(p);
        self.max = self.max.component_max(p);
    }

    /// Grow the box by `margin` on every side.
    pub fn padded(&self, margin: Xyz) -> Self {
        Self {
            min: self.min - margin,
            max: self.max + margin,
        }
    }

    pub fn translated(&self, offset: Xyz) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    pub fn intersects(&self, other: &Self) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    pub fn contains_point(&self, p: &Xyz) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }

    pub fn size(&self) -> Xyz {
        self.max - self.min
    }

    pub fn volume(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let s = self.size();
        s.x * s.y * s.z
    }

    /// The eight corners, bottom face (min z) first.
    pub fn corners(&self) -> [Xyz; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            Xyz::new(lo.x, lo.y, lo.z),
            Xyz::new(hi.x, lo.y, lo.z),
            Xyz::new(hi.x, hi.y, lo.z),
            Xyz::new(lo.x, hi.y, lo.z),
            Xyz::new(lo.x, lo.y, hi.z),
            Xyz::new(hi.x, lo.y, hi.z),
            Xyz::new(hi.x, hi.y, hi.z),
            Xyz::new(lo.x, hi.y, hi.z),
        ]
    }

    /// Smallest and largest projection of the box corners onto `axis`.
    pub fn project_onto(&self, axis: &Xyz) -> (f64, f64) {
        self.corners()
            .iter()
            .map(|c| c.dot(axis))
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), d| {
                (lo.min(d), hi.max(d))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warp_nodes_padded_by_section() {
        let nodes = BoundingBox::from_points(&[
            Xyz::new(0.0, 0.22, 0.05),
            Xyz::new(0.22, 0.22, 0.0),
            Xyz::new(0.44, 0.22, 0.05),
        ]);
        assert!((nodes.size().x - 0.44).abs() < 1e-12);
        assert!((nodes.size().y).abs() < 1e-12);
        assert_eq!(nodes.volume(), 0.0);

        let yarn = nodes.padded(Xyz::new(0.18, 0.18, 0.18));
        assert!((yarn.min.x + 0.18).abs() < 1e-12);
        assert!((yarn.max.z - 0.23).abs() < 1e-12);
        assert!((yarn.volume() - 0.8 * 0.36 * 0.41).abs() < 1e-12);
    }

    #[test]
    fn test_translated_copies_against_unit_cell() {
        let cell = BoundingBox::new(Xyz::new(0.0, 0.0, -0.02), Xyz::new(0.44, 0.44, 0.07));
        let yarn = BoundingBox::new(Xyz::new(-0.18, -0.18, -0.18), Xyz::new(0.62, 0.18, 0.23));
        assert!(yarn.intersects(&cell));
        // One period along x still overlaps through the padding.
        assert!(yarn.translated(Xyz::new(-0.44, 0.0, 0.0)).intersects(&cell));
        assert!(!yarn.translated(Xyz::new(0.88, 0.0, 0.0)).intersects(&cell));
        assert!(!yarn.translated(Xyz::new(0.0, 0.0, 0.44)).intersects(&cell));
    }

    #[test]
    fn test_empty_box() {
        let bb = BoundingBox::empty();
        assert!(bb.is_empty());
        assert_eq!(bb.volume(), 0.0);
    }

    #[test]
    fn test_project_onto_axis() {
        let bb = BoundingBox::new(Xyz::new(-1.0, 0.0, 0.0), Xyz::new(2.0, 1.0, 1.0));
        let (lo, hi) = bb.project_onto(&Xyz::new(1.0, 0.0, 0.0));
        assert!((lo + 1.0).abs() < 1e-12);
        assert!((hi - 2.0).abs() < 1e-12);
    }
}

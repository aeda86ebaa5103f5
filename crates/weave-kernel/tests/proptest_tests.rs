//! Property-based tests for model invariants using the `proptest` crate.

use std::sync::Arc;

use approx::assert_relative_eq;
use proptest::prelude::*;

use weave_kernel::section::Section;
use weave_kernel::{DomainPlanes, Node, Xy, Xyz, Yarn, YarnSection};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

fn arb_coord() -> impl Strategy<Value = f64> {
    -100.0f64..100.0
}

fn arb_point() -> impl Strategy<Value = Xyz> {
    (arb_coord(), arb_coord(), arb_coord()).prop_map(|(x, y, z)| Xyz::new(x, y, z))
}

fn arb_radius() -> impl Strategy<Value = f64> {
    0.001f64..10.0
}

/// Node lists whose consecutive points are at least a small step apart.
fn arb_nodes() -> impl Strategy<Value = Vec<Xyz>> {
    (arb_point(), prop::collection::vec((0.01f64..5.0, arb_point()), 1..12)).prop_map(
        |(start, steps)| {
            let mut nodes = vec![start];
            let mut current = start;
            for (len, dir) in steps {
                let step = dir
                    .normalized()
                    .map(|d| d * len)
                    .unwrap_or(Xyz::new(len, 0.0, 0.0));
                current = current + step;
                nodes.push(current);
            }
            nodes
        },
    )
}

fn section() -> Arc<Section> {
    Arc::new(Section::ellipse(0.18, 0.04).unwrap())
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn ellipse_points_lie_on_the_ellipse(a in arb_radius(), b in arb_radius(), t in 0.0f64..1.0) {
        let s = Section::ellipse(a, b).unwrap();
        let p = s.point_at(t);
        let r = (p.x / a).powi(2) + (p.y / b).powi(2);
        prop_assert!((r - 1.0).abs() < 1e-9, "point {:?} off ellipse: {}", p, r);
    }

    #[test]
    fn polygon_area_ignores_start_point(shift in 0usize..4, w in arb_radius(), h in arb_radius()) {
        let mut pts = vec![
            Xy::new(0.0, 0.0),
            Xy::new(w, 0.0),
            Xy::new(w, h),
            Xy::new(0.0, h),
        ];
        pts.rotate_left(shift);
        let s = Section::polygon(pts).unwrap();
        prop_assert!((s.area() - w * h).abs() < 1e-9 * (1.0 + w * h));
    }

    #[test]
    fn non_positive_radius_rejected(a in -10.0f64..=0.0, b in arb_radius()) {
        prop_assert!(Section::ellipse(a, b).is_err());
        prop_assert!(Section::ellipse(b, a).is_err());
    }
}

// ---------------------------------------------------------------------------
// Yarns
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn yarn_keeps_nodes_in_order(nodes in arb_nodes()) {
        let yarn = Yarn::builder()
            .add_nodes(nodes.iter().copied())
            .assign_section(YarnSection::constant(section()))
            .build()
            .unwrap();
        let got: Vec<Xyz> = yarn.nodes().iter().map(|n| n.position).collect();
        prop_assert_eq!(got, nodes);
    }

    #[test]
    fn yarn_box_contains_every_node(nodes in arb_nodes()) {
        let yarn = Yarn::builder()
            .add_nodes(nodes.iter().copied())
            .assign_section(YarnSection::constant(section()))
            .build()
            .unwrap();
        let bb = yarn.bounding_box();
        for n in yarn.nodes() {
            prop_assert!(bb.contains_point(&n.position));
        }
    }
}

// ---------------------------------------------------------------------------
// Domains
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn domain_contains_its_corners_and_center(
        min in arb_point(),
        (dx, dy, dz) in (0.01f64..50.0, 0.01f64..50.0, 0.01f64..50.0),
    ) {
        let max = min + Xyz::new(dx, dy, dz);
        let domain = DomainPlanes::new(min, max).unwrap();
        for c in domain.corners() {
            prop_assert!(domain.contains(&c));
        }
        prop_assert!(domain.contains(&((min + max) * 0.5)));
        prop_assert!((domain.volume() - dx * dy * dz).abs() < 1e-6 * (1.0 + dx * dy * dz));
    }

    #[test]
    fn untranslated_yarn_inside_domain_is_kept(
        (sx, sy) in (0.1f64..2.0, 0.1f64..2.0),
    ) {
        let domain = DomainPlanes::new(Xyz::new(0.0, 0.0, -0.1), Xyz::new(sx, sy, 0.1)).unwrap();
        let yarn = Yarn::builder()
            .add_node(Node::at(0.0, sy * 0.5, 0.0))
            .add_node(Node::at(sx, sy * 0.5, 0.0))
            .assign_section(YarnSection::constant(section()))
            .add_repeat(Xyz::new(sx, 0.0, 0.0))
            .add_repeat(Xyz::new(0.0, sy, 0.0))
            .build()
            .unwrap();
        let translations = domain.translations(&yarn).unwrap();
        prop_assert!(translations.contains(&Xyz::ZERO));
        for t in &translations {
            prop_assert!(yarn.bounding_box().translated(*t).intersects(&domain.bounding_box()));
        }
    }
}

#[test]
fn ellipse_area_matches_closed_form() {
    let s = Section::ellipse(0.18, 0.04).unwrap();
    assert_relative_eq!(s.area(), std::f64::consts::PI * 0.18 * 0.04, epsilon = 1e-15);
}

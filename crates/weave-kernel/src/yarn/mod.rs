//! Yarns: node centerlines with interpolation, section, resolution and repeats.

pub mod interpolation;
pub mod node;
pub mod section;

use tracing::{debug, instrument};
use weave_types::Xyz;

use crate::error::BuildError;
use crate::geometry::BoundingBox;
use crate::Tolerance;

pub use interpolation::{Interpolation, InterpolationKind};
pub use node::Node;
pub use section::YarnSection;

/// Sample count along a yarn when none is set.
pub const DEFAULT_RESOLUTION: usize = 20;

/// A fully configured, immutable yarn.
#[derive(Debug, Clone, PartialEq)]
pub struct Yarn {
    nodes: Vec<Node>,
    interpolation: Interpolation,
    section: YarnSection,
    resolution: usize,
    repeats: Vec<Xyz>,
}

impl Yarn {
    pub fn builder() -> YarnBuilder {
        YarnBuilder::new()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn interpolation(&self) -> Interpolation {
        self.interpolation
    }

    pub fn section(&self) -> &YarnSection {
        &self.section
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn repeats(&self) -> &[Xyz] {
        &self.repeats
    }

    /// Length of the straight node polyline.
    pub fn centerline_length(&self) -> f64 {
        self.nodes
            .windows(2)
            .map(|w| w[0].position.distance_to(&w[1].position))
            .sum()
    }

    /// Box around the node polyline, padded by the widest section half extent
    /// on every axis since the section may be turned about the centerline.
    pub fn bounding_box(&self) -> BoundingBox {
        let positions: Vec<Xyz> = self.nodes.iter().map(|n| n.position).collect();
        let half = self.section.max_half_extents();
        let pad = half.x.max(half.y);
        BoundingBox::from_points(&positions).padded(Xyz::new(pad, pad, pad))
    }
}

/// Collects yarn settings and checks them on [`YarnBuilder::build`].
#[derive(Debug, Clone)]
pub struct YarnBuilder {
    nodes: Vec<Node>,
    interpolation: Interpolation,
    section: Option<YarnSection>,
    resolution: usize,
    repeats: Vec<Xyz>,
    tolerance: Tolerance,
}

impl Default for YarnBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl YarnBuilder {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            interpolation: Interpolation::default(),
            section: None,
            resolution: DEFAULT_RESOLUTION,
            repeats: Vec::new(),
            tolerance: Tolerance::default(),
        }
    }

    /// Append a centerline point.
    pub fn add_node(mut self, node: impl Into<Node>) -> Self {
        self.nodes.push(node.into());
        self
    }

    pub fn add_nodes<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.nodes.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn assign_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    pub fn assign_section(mut self, section: YarnSection) -> Self {
        self.section = Some(section);
        self
    }

    pub fn set_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }

    /// Register a periodic tiling vector.
    pub fn add_repeat(mut self, repeat: Xyz) -> Self {
        self.repeats.push(repeat);
        self
    }

    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    #[instrument(skip(self), fields(nodes = self.nodes.len(), repeats = self.repeats.len()))]
    pub fn build(self) -> Result<Yarn, BuildError> {
        if self.nodes.len() < 2 {
            return Err(BuildError::InsufficientNodes {
                required: 2,
                provided: self.nodes.len(),
            });
        }
        if let Some(index) = self.nodes.iter().position(|n| !n.position.is_finite()) {
            return Err(BuildError::NonFiniteNode { index });
        }
        if let Some(index) = self.nodes.windows(2).position(|w| {
            self.tolerance
                .points_coincident(&w[0].position, &w[1].position)
        }) {
            return Err(BuildError::CoincidentNodes { index });
        }

        let section = self.section.ok_or(BuildError::MissingSection)?;
        if let YarnSection::PerNode(sections) = &section {
            if sections.len() != self.nodes.len() {
                return Err(BuildError::SectionCountMismatch {
                    nodes: self.nodes.len(),
                    sections: sections.len(),
                });
            }
        }

        if self.resolution == 0 {
            return Err(BuildError::ZeroResolution);
        }
        if let Some(index) = self.repeats.iter().position(|r| !r.is_finite()) {
            return Err(BuildError::NonFiniteRepeat { index });
        }

        debug!(
            interpolation = ?self.interpolation.kind,
            resolution = self.resolution,
            "yarn built"
        );
        Ok(Yarn {
            nodes: self.nodes,
            interpolation: self.interpolation,
            section,
            resolution: self.resolution,
            repeats: self.repeats,
        })
    }
}

//! The "polyester" plain-weave unit cell.
//!
//! Two warp yarns run along x and two weft yarns along y, each with three
//! nodes over one repeat. Node heights alternate between 0 and the crimp
//! height so that crossing yarns pass over and under each other. All four
//! yarns share one elliptical section.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use weave_kernel::section::Section;
use weave_kernel::{
    DomainPlanes, Interpolation, SectionMesh, Textile, TextileId, TextileRegistry, Xyz, Yarn,
    YarnSection,
};

use crate::{CellError, UnitCell};

/// Nodes per yarn over one repeat.
const NODES_PER_YARN: usize = 3;

/// Parameters of the polyester cell. `Default` gives the reference model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolyesterParams {
    pub name: String,
    /// Repeat length along both x and y.
    pub spacing: f64,
    /// Height of the raised nodes.
    pub crimp: f64,
    pub radius_a: f64,
    pub radius_b: f64,
    /// Minimum triangle angle for the section mesh, in degrees.
    pub min_angle_deg: f64,
    pub interpolation: Interpolation,
    pub resolution: usize,
    pub domain_min: Xyz,
    pub domain_max: Xyz,
}

impl Default for PolyesterParams {
    fn default() -> Self {
        Self {
            name: "polyester".to_string(),
            spacing: 0.44,
            crimp: 0.05,
            radius_a: 0.18,
            radius_b: 0.04,
            min_angle_deg: 20.0,
            interpolation: Interpolation::cubic(),
            resolution: 20,
            domain_min: Xyz::new(0.0, 0.0, -0.02),
            domain_max: Xyz::new(0.44, 0.44, 0.07),
        }
    }
}

/// Direction a yarn runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Run {
    AlongX,
    AlongY,
}

impl PolyesterParams {
    /// Centerline of yarn `offset` (0 or 1) running in `run`.
    fn centerline(&self, run: Run, offset: usize) -> Vec<Xyz> {
        let parity = match run {
            Run::AlongX => 0,
            Run::AlongY => 1,
        };
        let across = self.spacing * offset as f64 / 2.0;
        (0..NODES_PER_YARN)
            .map(|i| {
                let along = self.spacing * i as f64 / 2.0;
                let z = if (i + offset + parity) % 2 == 1 {
                    self.crimp
                } else {
                    0.0
                };
                match run {
                    Run::AlongX => Xyz::new(along, across, z),
                    Run::AlongY => Xyz::new(across, along, z),
                }
            })
            .collect()
    }

    fn centerlines(&self) -> Vec<Vec<Xyz>> {
        [(Run::AlongX, 0), (Run::AlongX, 1), (Run::AlongY, 0), (Run::AlongY, 1)]
            .into_iter()
            .map(|(run, offset)| self.centerline(run, offset))
            .collect()
    }
}

/// Build the polyester textile from `params`.
#[instrument(skip(params), fields(name = %params.name))]
pub fn build_polyester(params: &PolyesterParams) -> Result<Textile, CellError> {
    let section = Arc::new(
        Section::ellipse(params.radius_a, params.radius_b)?
            .with_mesh(SectionMesh::triangulate(params.min_angle_deg)?),
    );

    let mut textile = Textile::builder();
    for nodes in params.centerlines() {
        let yarn = Yarn::builder()
            .add_nodes(nodes)
            .assign_interpolation(params.interpolation)
            .assign_section(YarnSection::constant(Arc::clone(&section)))
            .set_resolution(params.resolution)
            .add_repeat(Xyz::new(params.spacing, 0.0, 0.0))
            .add_repeat(Xyz::new(0.0, params.spacing, 0.0))
            .build()?;
        textile = textile.add_yarn(yarn);
    }

    let textile = textile
        .assign_domain(DomainPlanes::new(params.domain_min, params.domain_max)?)
        .build()?;
    info!(yarns = textile.yarn_count(), "polyester cell built");
    Ok(textile)
}

/// Build the polyester textile and register it under `params.name`.
pub fn register_polyester(
    registry: &mut TextileRegistry,
    params: &PolyesterParams,
) -> Result<TextileId, CellError> {
    params.register(registry)
}

impl UnitCell for PolyesterParams {
    fn name(&self) -> &str {
        &self.name
    }

    fn build(&self) -> Result<Textile, CellError> {
        build_polyester(self)
    }
}

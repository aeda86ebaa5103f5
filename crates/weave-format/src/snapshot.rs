//! Serializable mirror of the kernel model.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use weave_kernel::section::Section;
use weave_kernel::{DomainPlanes, Interpolation, Node, Textile, Xyz, Yarn, YarnSection};

use crate::errors::LoadError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextileSnapshot {
    /// Every distinct section, referenced by index from the yarns.
    pub sections: Vec<Section>,
    pub yarns: Vec<YarnSnapshot>,
    pub domain: Option<DomainSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YarnSnapshot {
    pub nodes: Vec<Node>,
    pub interpolation: Interpolation,
    pub section: SectionRef,
    pub resolution: usize,
    pub repeats: Vec<Xyz>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SectionRef {
    Constant { index: usize },
    PerNode { indices: Vec<usize> },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainSnapshot {
    pub min: Xyz,
    pub max: Xyz,
}

impl TextileSnapshot {
    pub fn from_textile(textile: &Textile) -> Self {
        let mut table = SectionTable::default();
        let yarns = textile
            .yarns()
            .iter()
            .map(|yarn| YarnSnapshot {
                nodes: yarn.nodes().to_vec(),
                interpolation: yarn.interpolation(),
                section: match yarn.section() {
                    YarnSection::Constant(s) => SectionRef::Constant {
                        index: table.index_of(s),
                    },
                    YarnSection::PerNode(sections) => SectionRef::PerNode {
                        indices: sections.iter().map(|s| table.index_of(s)).collect(),
                    },
                },
                resolution: yarn.resolution(),
                repeats: yarn.repeats().to_vec(),
            })
            .collect();

        Self {
            sections: table.sections.iter().map(|s| Section::clone(s)).collect(),
            yarns,
            domain: textile.domain().map(|d| DomainSnapshot {
                min: d.min(),
                max: d.max(),
            }),
        }
    }

    /// Rebuild the kernel model, re-running every builder check.
    pub fn into_textile(self) -> Result<Textile, LoadError> {
        let sections = self
            .sections
            .into_iter()
            .map(|s| s.validate().map(|_| Arc::new(s)))
            .collect::<Result<Vec<_>, _>>()?;

        let lookup = |yarn: usize, index: usize| {
            sections
                .get(index)
                .cloned()
                .ok_or(LoadError::DanglingSection {
                    yarn,
                    index,
                    count: sections.len(),
                })
        };

        let mut builder = Textile::builder();
        for (i, yarn) in self.yarns.into_iter().enumerate() {
            let section = match yarn.section {
                SectionRef::Constant { index } => YarnSection::Constant(lookup(i, index)?),
                SectionRef::PerNode { indices } => YarnSection::PerNode(
                    indices
                        .into_iter()
                        .map(|index| lookup(i, index))
                        .collect::<Result<_, _>>()?,
                ),
            };
            let built = yarn
                .repeats
                .into_iter()
                .fold(
                    Yarn::builder()
                        .add_nodes(yarn.nodes)
                        .assign_interpolation(yarn.interpolation)
                        .assign_section(section)
                        .set_resolution(yarn.resolution),
                    |b, r| b.add_repeat(r),
                )
                .build()?;
            builder = builder.add_yarn(built);
        }

        if let Some(domain) = self.domain {
            builder = builder.assign_domain(DomainPlanes::new(domain.min, domain.max)?);
        }
        Ok(builder.build()?)
    }
}

/// Deduplicates sections by identity while a snapshot is taken.
#[derive(Default)]
struct SectionTable {
    sections: Vec<Arc<Section>>,
}

impl SectionTable {
    fn index_of(&mut self, section: &Arc<Section>) -> usize {
        if let Some(i) = self.sections.iter().position(|s| Arc::ptr_eq(s, section)) {
            return i;
        }
        self.sections.push(Arc::clone(section));
        self.sections.len() - 1
    }
}

use std::sync::Arc;

use weave_types::Xy;

use crate::section::Section;

/// How sections are laid along a yarn.
#[derive(Debug, Clone, PartialEq)]
pub enum YarnSection {
    /// One section used all along the yarn.
    Constant(Arc<Section>),
    /// One section per node, blended between nodes by the consumer.
    PerNode(Vec<Arc<Section>>),
}

impl YarnSection {
    pub fn constant(section: Arc<Section>) -> Self {
        Self::Constant(section)
    }

    /// The section in effect at node `index`.
    pub fn at_node(&self, index: usize) -> Option<&Arc<Section>> {
        match self {
            Self::Constant(s) => Some(s),
            Self::PerNode(sections) => sections.get(index),
        }
    }

    pub fn sections(&self) -> impl Iterator<Item = &Arc<Section>> {
        let slice: &[Arc<Section>] = match self {
            Self::Constant(s) => std::slice::from_ref(s),
            Self::PerNode(sections) => sections,
        };
        slice.iter()
    }

    /// Componentwise largest half extent over every section used.
    pub fn max_half_extents(&self) -> Xy {
        self.sections().fold(Xy::ORIGIN, |acc, s| {
            let h = s.half_extents();
            Xy::new(acc.x.max(h.x), acc.y.max(h.y))
        })
    }
}

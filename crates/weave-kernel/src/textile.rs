//! The textile aggregate: an ordered set of yarns and one bounding domain.

use tracing::{info, instrument};
use weave_types::Xyz;

use crate::domain::{DomainPlanes, RepeatSearch};
use crate::error::BuildError;
use crate::yarn::Yarn;

/// An immutable textile unit cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Textile {
    yarns: Vec<Yarn>,
    domain: Option<DomainPlanes>,
}

impl Textile {
    pub fn builder() -> TextileBuilder {
        TextileBuilder::default()
    }

    pub fn yarns(&self) -> &[Yarn] {
        &self.yarns
    }

    pub fn yarn(&self, index: usize) -> Option<&Yarn> {
        self.yarns.get(index)
    }

    pub fn yarn_count(&self) -> usize {
        self.yarns.len()
    }

    pub fn node_count(&self) -> usize {
        self.yarns.iter().map(Yarn::node_count).sum()
    }

    pub fn domain(&self) -> Option<&DomainPlanes> {
        self.domain.as_ref()
    }

    /// Periodic copies of yarn `index` that reach the domain.
    ///
    /// Without a domain there is nothing to clip against, so only the untranslated
    /// placement is returned.
    pub fn yarn_translations(
        &self,
        index: usize,
        search: &RepeatSearch,
    ) -> Result<Vec<Xyz>, BuildError> {
        let yarn = self.yarn(index).ok_or(BuildError::YarnOutOfRange {
            index,
            count: self.yarns.len(),
        })?;
        match &self.domain {
            Some(domain) => domain.translations_with(yarn, search),
            None => Ok(vec![Xyz::ZERO]),
        }
    }
}

/// Collects yarns and a domain, then checks them on [`TextileBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct TextileBuilder {
    yarns: Vec<Yarn>,
    domain: Option<DomainPlanes>,
}

impl TextileBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_yarn(mut self, yarn: Yarn) -> Self {
        self.yarns.push(yarn);
        self
    }

    /// Set the bounding domain, replacing any previous one.
    pub fn assign_domain(mut self, domain: DomainPlanes) -> Self {
        self.domain = Some(domain);
        self
    }

    #[instrument(skip(self), fields(yarns = self.yarns.len()))]
    pub fn build(self) -> Result<Textile, BuildError> {
        if self.yarns.is_empty() {
            return Err(BuildError::NoYarns);
        }
        let textile = Textile {
            yarns: self.yarns,
            domain: self.domain,
        };
        info!(
            yarns = textile.yarn_count(),
            nodes = textile.node_count(),
            has_domain = textile.domain.is_some(),
            "textile built"
        );
        Ok(textile)
    }
}

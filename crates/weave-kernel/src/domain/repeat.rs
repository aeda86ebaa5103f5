//! Which periodic copies of a yarn reach into a domain.
//!
//! Repeat limits are found iteratively: the yarn box is grown by the copies
//! already admitted along the other repeat vectors, then projected onto each
//! repeat vector to find the range of integer multiples that can still touch
//! the domain. Iteration stops once the ranges stop changing.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use weave_types::Xyz;

use super::DomainPlanes;
use crate::error::BuildError;
use crate::geometry::BoundingBox;
use crate::yarn::Yarn;
use crate::Tolerance;

/// Settings for the repeat limit search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepeatSearch {
    pub max_iterations: usize,
    /// Upper bound on candidate translations enumerated for one yarn.
    pub max_translations: usize,
}

impl Default for RepeatSearch {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            max_translations: 100_000,
        }
    }
}

impl DomainPlanes {
    /// Integer range of multiples per repeat vector, in the yarn's repeat order.
    ///
    /// Empty when the yarn has no repeats or every repeat is shorter than the
    /// coincidence tolerance. Such repeats always get the range `(0, 0)`.
    pub fn repeat_limits(&self, yarn: &Yarn) -> Result<Vec<(i64, i64)>, BuildError> {
        self.repeat_limits_with(yarn, &RepeatSearch::default())
    }

    #[instrument(skip(self, yarn), fields(repeats = yarn.repeats().len()))]
    pub fn repeat_limits_with(
        &self,
        yarn: &Yarn,
        search: &RepeatSearch,
    ) -> Result<Vec<(i64, i64)>, BuildError> {
        let repeats = yarn.repeats();
        if repeats.iter().all(is_negligible) {
            return Ok(Vec::new());
        }

        let yarn_box = yarn.bounding_box();
        let mut limits = vec![(0.0_f64, 0.0_f64); repeats.len()];
        let mut iterations = 0;
        loop {
            iterations += 1;
            let previous = limits.clone();
            for i in 0..repeats.len() {
                limits[i] = (0.0, 0.0);
                let grown = tiled_box(&yarn_box, repeats, &to_integer_limits(&limits));
                limits[i] = self.projected_limits(&repeats[i], &grown);
            }
            // Running out of budget fails even when the last pass settled.
            if iterations >= search.max_iterations {
                return Err(BuildError::RepeatLimitsUnsettled { iterations });
            }
            if limits == previous {
                break;
            }
        }

        debug!(iterations, ?limits, "repeat limits settled");
        Ok(to_integer_limits(&limits))
    }

    /// Translations of `yarn` whose box touches the domain box.
    pub fn translations(&self, yarn: &Yarn) -> Result<Vec<Xyz>, BuildError> {
        self.translations_with(yarn, &RepeatSearch::default())
    }

    pub fn translations_with(
        &self,
        yarn: &Yarn,
        search: &RepeatSearch,
    ) -> Result<Vec<Xyz>, BuildError> {
        let limits = self.repeat_limits_with(yarn, search)?;
        match translation_count(&limits) {
            Some(count) if count <= search.max_translations => {}
            _ => {
                return Err(BuildError::TooManyTranslations {
                    limit: search.max_translations,
                })
            }
        }

        let mut candidates = vec![Xyz::ZERO];
        for (repeat, &(lo, hi)) in yarn.repeats().iter().zip(&limits) {
            candidates = candidates
                .iter()
                .flat_map(|base| (lo..=hi).map(move |k| *base + *repeat * k as f64))
                .collect();
        }
        // A range that excludes zero leaves the untranslated yarn out too.
        if candidates.is_empty() {
            return Ok(candidates);
        }

        let yarn_box = yarn.bounding_box();
        let domain_box = self.bounding_box();
        Ok(candidates
            .into_iter()
            .filter(|t| yarn_box.translated(*t).intersects(&domain_box))
            .collect())
    }

    fn projected_limits(&self, repeat: &Xyz, mesh: &BoundingBox) -> (f64, f64) {
        if is_negligible(repeat) {
            return (0.0, 0.0);
        }
        let length = repeat.length();
        let Some(axis) = repeat.normalized() else {
            return (0.0, 0.0);
        };
        let (domain_lo, domain_hi) = self.bounding_box().project_onto(&axis);
        let (mesh_lo, mesh_hi) = mesh.project_onto(&axis);
        ((domain_lo - mesh_hi) / length, (domain_hi - mesh_lo) / length)
    }
}

fn is_negligible(repeat: &Xyz) -> bool {
    repeat.length() < Tolerance::default().coincidence
}

/// Number of combinations within `limits`, `None` on overflow.
///
/// Limits past the `i64` range saturate in the integer conversion, so their
/// widths overflow here instead of wrapping.
fn translation_count(limits: &[(i64, i64)]) -> Option<usize> {
    if limits.iter().any(|&(lo, hi)| lo > hi) {
        return Some(0);
    }
    limits.iter().try_fold(1_usize, |acc, &(lo, hi)| {
        let width = hi.checked_sub(lo)?.checked_add(1)?;
        acc.checked_mul(usize::try_from(width).ok()?)
    })
}

fn to_integer_limits(limits: &[(f64, f64)]) -> Vec<(i64, i64)> {
    limits
        .iter()
        .map(|&(lo, hi)| (lo.ceil() as i64, hi.floor() as i64))
        .collect()
}

/// Box covering every copy of `base` within `limits`.
fn tiled_box(base: &BoundingBox, repeats: &[Xyz], limits: &[(i64, i64)]) -> BoundingBox {
    let mut grown = *base;
    for (repeat, &(lo, hi)) in repeats.iter().zip(limits) {
        if lo > hi {
            continue;
        }
        let a = *repeat * lo as f64;
        let b = *repeat * hi as f64;
        grown.min = grown.min + a.component_min(&b);
        grown.max = grown.max + a.component_max(&b);
    }
    grown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::Section;
    use crate::yarn::{Node, YarnSection};
    use std::sync::Arc;

    fn domain() -> DomainPlanes {
        DomainPlanes::new(Xyz::new(0.0, 0.0, -0.02), Xyz::new(0.44, 0.44, 0.07)).unwrap()
    }

    fn warp_yarn(repeats: &[Xyz]) -> Yarn {
        let section = Arc::new(Section::ellipse(0.18, 0.04).unwrap());
        repeats
            .iter()
            .fold(
                Yarn::builder()
                    .add_node(Node::at(0.0, 0.0, 0.0))
                    .add_node(Node::at(0.22, 0.0, 0.05))
                    .add_node(Node::at(0.44, 0.0, 0.0))
                    .assign_section(YarnSection::constant(section)),
                |b, r| b.add_repeat(*r),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn test_no_repeats_gives_no_limits() {
        let yarn = warp_yarn(&[]);
        assert!(domain().repeat_limits(&yarn).unwrap().is_empty());
        assert_eq!(domain().translations(&yarn).unwrap(), vec![Xyz::ZERO]);
    }

    #[test]
    fn test_zero_repeats_give_no_limits() {
        let yarn = warp_yarn(&[Xyz::ZERO, Xyz::ZERO]);
        assert!(domain().repeat_limits(&yarn).unwrap().is_empty());
    }

    #[test]
    fn test_unit_cell_limits() {
        let yarn = warp_yarn(&[Xyz::new(0.44, 0.0, 0.0), Xyz::new(0.0, 0.44, 0.0)]);
        let limits = domain().repeat_limits(&yarn).unwrap();
        assert_eq!(limits, vec![(-1, 1), (0, 1)]);
    }

    #[test]
    fn test_unit_cell_translations() {
        let yarn = warp_yarn(&[Xyz::new(0.44, 0.0, 0.0), Xyz::new(0.0, 0.44, 0.0)]);
        let translations = domain().translations(&yarn).unwrap();
        assert_eq!(translations.len(), 6);
        assert!(translations.contains(&Xyz::ZERO));
        assert!(translations.contains(&Xyz::new(-0.44, 0.44, 0.0)));
    }

    #[test]
    fn test_far_copies_are_dropped() {
        let yarn = warp_yarn(&[Xyz::new(0.0, 0.0, 1.0)]);
        let translations = domain().translations(&yarn).unwrap();
        assert_eq!(translations, vec![Xyz::ZERO]);
    }

    #[test]
    fn test_iteration_budget_exhausted() {
        let yarn = warp_yarn(&[Xyz::new(0.44, 0.0, 0.0)]);
        let search = RepeatSearch {
            max_iterations: 0,
            ..RepeatSearch::default()
        };
        let err = domain().repeat_limits_with(&yarn, &search).unwrap_err();
        assert_eq!(err, BuildError::RepeatLimitsUnsettled { iterations: 1 });
    }

    #[test]
    fn test_settling_on_last_iteration_still_fails() {
        // One repeat settles on the second pass.
        let yarn = warp_yarn(&[Xyz::new(0.44, 0.0, 0.0)]);
        let tight = RepeatSearch {
            max_iterations: 2,
            ..RepeatSearch::default()
        };
        assert_eq!(
            domain().repeat_limits_with(&yarn, &tight).unwrap_err(),
            BuildError::RepeatLimitsUnsettled { iterations: 2 }
        );
        let roomy = RepeatSearch {
            max_iterations: 3,
            ..RepeatSearch::default()
        };
        assert_eq!(
            domain().repeat_limits_with(&yarn, &roomy).unwrap(),
            vec![(-1, 1)]
        );
    }

    #[test]
    fn test_short_repeats_exceed_translation_cap() {
        let yarn = warp_yarn(&[Xyz::new(0.00044, 0.0, 0.0), Xyz::new(0.0, 0.00044, 0.0)]);
        let err = domain().translations(&yarn).unwrap_err();
        assert_eq!(err, BuildError::TooManyTranslations { limit: 100_000 });
    }

    #[test]
    fn test_translation_cap_is_configurable() {
        let yarn = warp_yarn(&[Xyz::new(0.44, 0.0, 0.0), Xyz::new(0.0, 0.44, 0.0)]);
        let search = RepeatSearch {
            max_translations: 4,
            ..RepeatSearch::default()
        };
        let err = domain().translations_with(&yarn, &search).unwrap_err();
        assert_eq!(err, BuildError::TooManyTranslations { limit: 4 });
    }

    #[test]
    fn test_sub_tolerance_repeat_is_treated_as_zero() {
        let yarn = warp_yarn(&[Xyz::new(1e-300, 0.0, 0.0)]);
        assert!(domain().repeat_limits(&yarn).unwrap().is_empty());
        assert_eq!(domain().translations(&yarn).unwrap(), vec![Xyz::ZERO]);

        let mixed = warp_yarn(&[Xyz::new(1e-12, 0.0, 0.0), Xyz::new(0.44, 0.0, 0.0)]);
        let limits = domain().repeat_limits(&mixed).unwrap();
        assert_eq!(limits[0], (0, 0));
        assert_eq!(limits[1], (-1, 1));
    }

    #[test]
    fn test_translation_count_overflow() {
        assert_eq!(translation_count(&[(i64::MIN, i64::MAX)]), None);
        assert_eq!(translation_count(&[(-1, 1), (0, 1)]), Some(6));
        assert_eq!(translation_count(&[(1, 0), (i64::MIN, i64::MAX)]), Some(0));
    }
}

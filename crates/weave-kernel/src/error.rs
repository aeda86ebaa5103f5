use weave_types::Xyz;

/// Reasons a builder refuses to produce a model value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BuildError {
    #[error("{parameter} must be positive and finite, got {value}")]
    InvalidDimension { parameter: &'static str, value: f64 },

    #[error("minimum angle must lie strictly between 0 and 90 degrees, got {0}")]
    InvalidMinAngle(f64),

    #[error("maximum area fraction must lie in (0, 1], got {0}")]
    InvalidMaxArea(f64),

    #[error("section outline has {provided} points, need at least {required}")]
    InsufficientProfile { required: usize, provided: usize },

    #[error("section outline encloses no area")]
    DegenerateProfile,

    #[error("yarn has {provided} nodes, need at least {required}")]
    InsufficientNodes { required: usize, provided: usize },

    #[error("node {index} has a non-finite position")]
    NonFiniteNode { index: usize },

    #[error("nodes {index} and {next} coincide", next = .index + 1)]
    CoincidentNodes { index: usize },

    #[error("yarn has no section assigned")]
    MissingSection,

    #[error("yarn has {nodes} nodes but {sections} per-node sections")]
    SectionCountMismatch { nodes: usize, sections: usize },

    #[error("yarn resolution must be greater than zero")]
    ZeroResolution,

    #[error("repeat vector {index} is not finite")]
    NonFiniteRepeat { index: usize },

    #[error("domain min corner {min:?} must lie below max corner {max:?} on every axis")]
    InvalidDomain { min: Xyz, max: Xyz },

    #[error("textile has no yarns")]
    NoYarns,

    #[error("yarn index {index} out of range (textile has {count} yarns)")]
    YarnOutOfRange { index: usize, count: usize },

    #[error("repeat limits did not settle after {iterations} iterations")]
    RepeatLimitsUnsettled { iterations: usize },

    #[error("repeat limits admit more than {limit} translations")]
    TooManyTranslations { limit: usize },
}

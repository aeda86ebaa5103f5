use serde::{Deserialize, Serialize};
use weave_types::Xyz;

/// A point on a yarn centerline. Its only identity is its position in the
/// owning yarn's node list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub position: Xyz,
}

impl Node {
    pub fn new(position: Xyz) -> Self {
        Self { position }
    }

    pub fn at(x: f64, y: f64, z: f64) -> Self {
        Self::new(Xyz::new(x, y, z))
    }
}

impl From<Xyz> for Node {
    fn from(position: Xyz) -> Self {
        Self::new(position)
    }
}

pub mod bbox;
pub mod plane;

pub use bbox::BoundingBox;
pub use plane::Plane;

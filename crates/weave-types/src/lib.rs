pub mod ids;
pub mod xy;
pub mod xyz;

pub use ids::*;
pub use xy::*;
pub use xyz::*;

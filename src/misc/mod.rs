pub mod end_points;
pub mod floating_point;
pub mod transformable;

pub use end_points::*;
pub use floating_point::*;
pub use transformable::*;

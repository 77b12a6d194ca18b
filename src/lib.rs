mod bounding_box;
mod line;
mod misc;

pub mod prelude {
    pub use crate::bounding_box::*;
    pub use crate::line::*;
    pub use crate::misc::*;
}

mod segment;
pub use segment::*;

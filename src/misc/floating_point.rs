use nalgebra::{convert, RealField};
use num_traits::ToPrimitive;

/// Scalar type of line coordinates (f32, f64)
pub trait FloatingPoint: RealField + ToPrimitive + Copy {
    /// 0.5 in the precision of `Self`, used for midpoints.
    fn half() -> Self {
        convert(0.5)
    }
}

impl FloatingPoint for f32 {}
impl FloatingPoint for f64 {}

use nalgebra::{Matrix4, Point3};

use super::FloatingPoint;

/// 3D geometry that can be moved by a homogeneous 4x4 matrix.
pub trait Transformable<T: FloatingPoint>: Copy {
    fn transform(&mut self, matrix: &Matrix4<T>);

    /// Returns a transformed copy, leaving `self` untouched.
    fn transformed(&self, matrix: &Matrix4<T>) -> Self {
        let mut transformed = *self;
        transformed.transform(matrix);
        transformed
    }
}

/// Points are promoted to w = 1 and divided by the resulting w.
/// When w ends up zero the divide is skipped.
impl<T: FloatingPoint> Transformable<T> for Point3<T> {
    fn transform(&mut self, matrix: &Matrix4<T>) {
        let transformed = matrix * self.to_homogeneous();
        let w = transformed.w;
        if w == T::zero() {
            #[cfg(feature = "log")]
            log::warn!("transformed point has w = 0, perspective divide is skipped");
            self.coords = transformed.xyz();
        } else {
            self.coords = transformed.xyz() / w;
        }
    }
}

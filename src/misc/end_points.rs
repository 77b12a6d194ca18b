use nalgebra::Point3;

use super::FloatingPoint;

/// Access to the first and last points of an open 3D primitive.
pub trait EndPoints<T: FloatingPoint> {
    fn first_point(&self) -> Point3<T>;
    fn end_point(&self) -> Point3<T>;
    fn end_points(&self) -> (Point3<T>, Point3<T>) {
        (self.first_point(), self.end_point())
    }
}

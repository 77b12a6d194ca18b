use nalgebra::{Point3, Vector3};

use crate::{line::Line3, misc::FloatingPoint};


/// An axis-aligned bounding box in 3D space.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox<T: FloatingPoint> {
    min: Vector3<T>,
    max: Vector3<T>,
}

impl<T: FloatingPoint> BoundingBox<T> {
    /// Create a new bounding box from two opposite corners in any order.
    pub fn new(a: Vector3<T>, b: Vector3<T>) -> Self {
        Self {
            min: a.zip_map(&b, |x, y| x.min(y)),
            max: a.zip_map(&b, |x, y| x.max(y)),
        }
    }

    /// Create a new bounding box enclosing all points of an iterator.
    /// Returns `None` if the iterator is empty.
    pub fn new_with_points<I: IntoIterator<Item = Point3<T>>>(iter: I) -> Option<Self> {
        let mut iter = iter.into_iter();
        let first = iter.next()?.coords;
        let (min, max) = iter.fold((first, first), |(min, max), p| {
            (
                min.zip_map(&p.coords, |x, y| x.min(y)),
                max.zip_map(&p.coords, |x, y| x.max(y)),
            )
        });
        Some(Self { min, max })
    }

    pub fn min(&self) -> &Vector3<T> {
        &self.min
    }

    pub fn max(&self) -> &Vector3<T> {
        &self.max
    }

    pub fn center(&self) -> Vector3<T> {
        (self.min + self.max) * T::half()
    }

    pub fn size(&self) -> Vector3<T> {
        self.max - self.min
    }

    /// Check if the bounding box contains a point, boundary included.
    /// # Examples
    /// ```
    /// use nalgebra::Point3;
    /// use line3::prelude::*;
    ///
    /// let line = Line3::new(Point3::new(0., 2., -1.), Point3::new(4., 0., 1.));
    /// let bb = line.bounding_box();
    /// assert!(bb.contains(&line.center()));
    /// assert!(bb.contains(&Point3::new(4., 2., -1.)));
    /// assert!(!bb.contains(&Point3::new(2., 1., 1. + 1e-8)));
    /// ```
    pub fn contains(&self, point: &Point3<T>) -> bool {
        (0..3).all(|i| self.min[i] <= point[i] && point[i] <= self.max[i])
    }

    /// Check if the bounding box intersects with another bounding box.
    /// Touching boxes are considered intersecting.
    pub fn intersects(&self, other: &Self, tolerance: Option<T>) -> bool {
        let tolerance = tolerance.unwrap_or(T::default_epsilon());
        (0..3).all(|i| {
            self.min[i] - tolerance <= other.max[i] + tolerance
                && other.min[i] - tolerance <= self.max[i] + tolerance
        })
    }
}

impl<'a, T: FloatingPoint> From<&'a Line3<T>> for BoundingBox<T> {
    fn from(value: &'a Line3<T>) -> Self {
        Self::new(value.start().coords, value.end().coords)
    }
}

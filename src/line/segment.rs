use nalgebra::{Matrix4, Point3, Vector3};
use simba::scalar::SupersetOf;

use crate::{
    bounding_box::BoundingBox,
    misc::{EndPoints, FloatingPoint, Transformable},
};

/// A directed line segment in 3D space, defined by a start and an end point.
///
/// # Examples
/// ```
/// use nalgebra::{Point3, Vector3};
/// use line3::prelude::*;
///
/// let line = Line3::new(Point3::new(0., 0., 0.), Point3::new(2., 0., 0.));
/// assert_eq!(line.center(), Point3::new(1., 0., 0.));
/// assert_eq!(line.delta(), Vector3::new(2., 0., 0.));
/// assert_eq!(line.distance(), 2.);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line3<T: FloatingPoint> {
    start: Point3<T>,
    end: Point3<T>,
}

impl<T: FloatingPoint> Default for Line3<T> {
    fn default() -> Self {
        Self {
            start: Point3::origin(),
            end: Point3::origin(),
        }
    }
}

impl<T: FloatingPoint> From<(Point3<T>, Point3<T>)> for Line3<T> {
    fn from((start, end): (Point3<T>, Point3<T>)) -> Self {
        Self::new(start, end)
    }
}

impl<T: FloatingPoint> Line3<T> {
    pub fn new(start: Point3<T>, end: Point3<T>) -> Self {
        Self { start, end }
    }

    /// Create a line where an omitted endpoint stays at the origin.
    /// # Examples
    /// ```
    /// use nalgebra::Point3;
    /// use line3::prelude::*;
    ///
    /// let line = Line3::from_optional(None, Some(Point3::new(1., 2., 3.)));
    /// assert_eq!(line.start(), &Point3::origin());
    /// assert_eq!(line.end(), &Point3::new(1., 2., 3.));
    /// ```
    pub fn from_optional(start: Option<Point3<T>>, end: Option<Point3<T>>) -> Self {
        let mut line = Self::default();
        line.set(start.as_ref(), end.as_ref());
        line
    }

    pub fn start(&self) -> &Point3<T> {
        &self.start
    }

    pub fn end(&self) -> &Point3<T> {
        &self.end
    }

    pub fn start_mut(&mut self) -> &mut Point3<T> {
        &mut self.start
    }

    pub fn end_mut(&mut self) -> &mut Point3<T> {
        &mut self.end
    }

    /// Set the endpoints of the line.
    /// An omitted endpoint is left untouched.
    pub fn set(&mut self, start: Option<&Point3<T>>, end: Option<&Point3<T>>) -> &mut Self {
        if let Some(start) = start {
            self.start = *start;
        }
        if let Some(end) = end {
            self.end = *end;
        }
        self
    }

    /// Overwrite this line with the endpoints of another one.
    pub fn copy_from(&mut self, other: &Self) -> &mut Self {
        *self = *other;
        self
    }

    /// Call `f` with a mutable reference to the start point, then to the end point.
    /// The iteration stops as soon as `f` returns `true`.
    pub fn visit_vertices_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut Point3<T>) -> bool,
    {
        if f(&mut self.start) {
            return;
        }
        f(&mut self.end);
    }

    /// Call `f` with a copy of the start point, then of the end point.
    /// The iteration stops as soon as `f` returns `true`.
    pub fn visit_vertices<F>(&self, mut f: F)
    where
        F: FnMut(Point3<T>) -> bool,
    {
        if f(self.start) {
            return;
        }
        f(self.end);
    }

    /// Midpoint of the segment.
    pub fn center(&self) -> Point3<T> {
        let mut target = Point3::origin();
        self.center_to(&mut target);
        target
    }

    /// Write the midpoint of the segment into `target` and return it.
    pub fn center_to<'a>(&self, target: &'a mut Point3<T>) -> &'a mut Point3<T> {
        target.coords = (self.start.coords + self.end.coords) * T::half();
        target
    }

    /// Vector from the start point to the end point.
    pub fn delta(&self) -> Vector3<T> {
        let mut target = Vector3::zeros();
        self.delta_to(&mut target);
        target
    }

    /// Write the vector from the start point to the end point into `target` and return it.
    pub fn delta_to<'a>(&self, target: &'a mut Vector3<T>) -> &'a mut Vector3<T> {
        *target = self.end - self.start;
        target
    }

    pub fn distance_squared(&self) -> T {
        nalgebra::distance_squared(&self.start, &self.end)
    }

    pub fn distance(&self) -> T {
        self.distance_squared().sqrt()
    }

    /// Transform both endpoints by a homogeneous 4x4 matrix.
    /// # Examples
    /// ```
    /// use nalgebra::{Matrix4, Point3, Vector3};
    /// use line3::prelude::*;
    ///
    /// let mut line = Line3::new(Point3::new(0., 0., 0.), Point3::new(1., 0., 0.));
    /// line.apply_matrix4(&Matrix4::new_translation(&Vector3::new(0., 1., 0.)));
    /// assert_eq!(line.start(), &Point3::new(0., 1., 0.));
    /// assert_eq!(line.end(), &Point3::new(1., 1., 0.));
    /// ```
    pub fn apply_matrix4(&mut self, matrix: &Matrix4<T>) -> &mut Self {
        self.start.transform(matrix);
        self.end.transform(matrix);
        self
    }

    /// Reverse the direction of the line.
    pub fn invert(&mut self) -> &mut Self {
        std::mem::swap(&mut self.start, &mut self.end);
        self
    }

    /// The same segment running from `end` to `start`.
    pub fn inverse(&self) -> Self {
        Self::new(self.end, self.start)
    }

    /// A line is degenerate when its length does not exceed `T::default_epsilon()`.
    pub fn is_degenerate(&self) -> bool {
        self.distance() <= T::default_epsilon()
    }

    /// Evaluate the point at parameter `t`, where 0 is the start and 1 is the end.
    pub fn at(&self, t: T) -> Point3<T> {
        self.start + self.delta() * t
    }

    /// Normalized direction from the start point to the end point.
    /// Returns an error if the line is degenerate.
    pub fn try_unit_direction(&self) -> anyhow::Result<Vector3<T>> {
        anyhow::ensure!(!self.is_degenerate(), "Cannot get the direction of a degenerate line");
        Ok(self.delta() / self.distance())
    }

    /// Find the parameter of the projection of `point` onto the line.
    /// When `clamp` is set, the parameter is restricted to the segment.
    /// # Examples
    /// ```
    /// use nalgebra::Point3;
    /// use line3::prelude::*;
    ///
    /// let line = Line3::new(Point3::new(0., 0., 0.), Point3::new(4., 0., 0.));
    /// let t = line.try_closest_parameter(&Point3::new(1., 3., 0.), true).unwrap();
    /// assert_eq!(t, 0.25);
    /// let t = line.try_closest_parameter(&Point3::new(8., 0., 0.), false).unwrap();
    /// assert_eq!(t, 2.);
    /// ```
    pub fn try_closest_parameter(&self, point: &Point3<T>, clamp: bool) -> anyhow::Result<T> {
        anyhow::ensure!(!self.is_degenerate(), "Cannot project a point onto a degenerate line");
        let t = (point - self.start).dot(&self.delta()) / self.distance_squared();
        if clamp {
            Ok(t.max(T::zero()).min(T::one()))
        } else {
            Ok(t)
        }
    }

    /// Find the closest point on the line to `point`.
    pub fn try_closest_point(&self, point: &Point3<T>, clamp: bool) -> anyhow::Result<Point3<T>> {
        let t = self.try_closest_parameter(point, clamp)?;
        Ok(self.at(t))
    }

    pub fn bounding_box(&self) -> BoundingBox<T> {
        BoundingBox::from(self)
    }

    /// Cast the line to another floating point type.
    pub fn cast<F: FloatingPoint + SupersetOf<T>>(&self) -> Line3<F> {
        Line3::new(
            Point3::from(self.start.coords.cast()),
            Point3::from(self.end.coords.cast()),
        )
    }
}

/// Enable to transform a line by a given 4x4 matrix
impl<T: FloatingPoint> Transformable<T> for Line3<T> {
    fn transform(&mut self, matrix: &Matrix4<T>) {
        self.apply_matrix4(matrix);
    }
}

impl<T: FloatingPoint> EndPoints<T> for Line3<T> {
    fn first_point(&self) -> Point3<T> {
        self.start
    }

    fn end_point(&self) -> Point3<T> {
        self.end
    }
}

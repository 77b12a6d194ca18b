use line3::prelude::*;
use nalgebra::{Matrix4, Point3, Vector3};

#[test]
fn public_api_through_prelude() {
    let mut line = Line3::new(Point3::new(0., 0., 0.), Point3::new(2., 0., 0.));
    assert_eq!(line.center(), Point3::new(1., 0., 0.));
    assert_eq!(line.delta(), Vector3::new(2., 0., 0.));
    assert_eq!(line.distance(), 2.);
    assert_eq!(line, Line3::new(Point3::new(0., 0., 0.), Point3::new(2., 0., 0.)));
    assert_ne!(line, Line3::new(Point3::new(0., 0., 0.), Point3::new(2., 0., 1.)));

    line.apply_matrix4(&Matrix4::identity());
    let (first, last) = line.end_points();
    assert_eq!((first, last), (*line.start(), *line.end()));

    let bb: BoundingBox<f64> = line.bounding_box();
    assert_eq!(bb.size(), Vector3::new(2., 0., 0.));
}

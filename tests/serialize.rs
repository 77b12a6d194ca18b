#![cfg(feature = "serde")]

use line3::prelude::*;
use nalgebra::Point3;

#[test]
fn test_line_serialization() {
    let line = Line3::new(Point3::new(0., 1., 2.), Point3::new(-3., 4.5, 6.));
    let json = serde_json::to_string(&line).unwrap();
    let deserialized: Line3<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(line, deserialized);
}

#[test]
fn test_bounding_box_serialization() {
    let bb = Line3::new(Point3::new(0., 1., 2.), Point3::new(-3., 4.5, 6.)).bounding_box();
    let json = serde_json::to_string_pretty(&bb).unwrap();
    let deserialized: BoundingBox<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(bb, deserialized);
}

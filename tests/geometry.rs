// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use tricontact::geometry::util::{back_project_to_plane, coplanar_axes, project_to_2d};
use tricontact::geometry::{
    Plane, Point2, Point3, Segment2, Segment3, Triangle3, Vector2, Vector3, VectorOps,
};
use tricontact::numeric::Scalar;

#[test]
fn test_distance() {
    let p1 = Point3::new(0.0, 0.0, 0.0);
    let p2 = Point3::new(3.0, 4.0, 0.0);
    assert_eq!(p1.distance_to(&p2), 5.0);
}

#[test]
fn test_vector_cross() {
    let v1 = Vector2::new(1.0, 0.0);
    let v2 = Vector2::new(0.0, 1.0);
    assert_eq!(v1.cross(&v2), 1.0);
}

#[test]
fn test_vector_cross_3() {
    let v1 = Vector3::new(1.0, 0.0, 0.0);
    let v2 = Vector3::new(0.0, 1.0, 0.0);
    assert_eq!(v1.cross(&v2), Vector3::new(0.0, 0.0, 1.0));
}

#[test]
fn test_segment_length() {
    let s = Segment2::new(Point2::new(0.0, 0.0), Point2::new(0.0, 5.0));
    assert_eq!(s.length(), 5.0);
}

#[test]
fn test_segment_midpoint() {
    let s = Segment3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 4.0, 6.0));
    assert_eq!(s.length_squared(), 56.0);
    assert_eq!(s.midpoint(), Point3::new(1.0, 2.0, 3.0));
    assert!(s.length().approx_eq(56.0f64.sqrt()));
}

#[test]
fn test_plane_from_triangle() {
    let plane = Plane::from_points(
        &Point3::new(0.0, 0.0, 0.0),
        &Point3::new(2.0, 0.0, 0.0),
        &Point3::new(0.0, 2.0, 0.0),
    )
    .unwrap();
    assert_eq!(plane.normal, Vector3::new(0.0, 0.0, 1.0));
    assert_eq!(plane.signed_distance(&Point3::new(5.0, -3.0, 2.0)), 2.0);
}

#[test]
fn test_degenerate_triangle_has_no_plane() {
    let plane = Plane::from_points(
        &Point3::new(0.0, 0.0, 0.0),
        &Point3::new(1.0, 1.0, 1.0),
        &Point3::new(2.0, 2.0, 2.0),
    );
    assert!(plane.is_none());
}

#[test]
fn test_support_segment_of_colinear_triangle() {
    let tri = Triangle3::new(
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(2.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
    );
    assert!(tri.is_degenerate());
    let seg = tri.support_segment();
    assert_eq!(seg, Segment3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 0.0, 0.0)));
}

#[test]
fn test_back_projection_recovers_plane_point() {
    // a tilted plane, so every coordinate participates
    let a = Point3::new(0.0, 0.0, 1.0);
    let b = Point3::new(1.0, 0.0, 0.0);
    let c = Point3::new(0.0, 1.0, 0.0);
    let plane = Plane::from_points(&a, &b, &c).unwrap();

    let axes = coplanar_axes(&plane.normal);
    for p in [a, b, c] {
        let q2 = project_to_2d(&p, axes.0, axes.1);
        let q3 = back_project_to_plane(&q2, &plane, axes);
        assert!(p.distance_to(&q3) < 1e-12);
    }
}

#[test]
fn test_triangle_area() {
    let tri = Triangle3::new(
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(2.0, 0.0, 0.0),
        Point3::new(0.0, 2.0, 0.0),
    );
    assert!(tri.area().approx_eq(2.0));
    assert!(!tri.is_degenerate());
}

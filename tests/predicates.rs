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

use tricontact::geometry::Point3;
use tricontact::kernel::{are_collinear, are_equal, point_in_triangle};

#[test]
fn test_are_equal_within_tolerance() {
    let p1 = Point3::new(1.0, 2.0, 3.0);
    let p2 = Point3::new(1.0 + 1e-9, 2.0, 3.0 - 1e-9);
    assert!(are_equal(&p1, &p2, 1e-6));
    assert!(!are_equal(&p1, &p2, 1e-12));
}

#[test]
fn test_are_collinear() {
    let a = Point3::new(0.0, 0.0, 0.0);
    let b = Point3::new(1.0, 1.0, 1.0);
    let c = Point3::new(2.5, 2.5, 2.5);
    let d = Point3::new(2.5, 2.5, 2.0);
    assert!(are_collinear(&a, &b, &c, 1e-9));
    assert!(!are_collinear(&a, &b, &d, 1e-9));
}

#[test]
fn test_point_in_triangle() {
    let a = Point3::new(0.0, 0.0, 0.0);
    let b = Point3::new(2.0, 0.0, 0.0);
    let c = Point3::new(0.0, 2.0, 0.0);

    assert!(point_in_triangle(&Point3::new(0.5, 0.5, 0.0), &a, &b, &c, 1e-9));
    // vertices and edge midpoints count as inside
    assert!(point_in_triangle(&a, &a, &b, &c, 1e-9));
    assert!(point_in_triangle(&Point3::new(1.0, 1.0, 0.0), &a, &b, &c, 1e-9));
    assert!(!point_in_triangle(&Point3::new(1.5, 1.5, 0.0), &a, &b, &c, 1e-9));
    assert!(!point_in_triangle(&Point3::new(-0.1, 0.5, 0.0), &a, &b, &c, 1e-9));
}

#[test]
fn test_degenerate_triangle_contains_nothing() {
    let a = Point3::new(0.0, 0.0, 0.0);
    let b = Point3::new(1.0, 0.0, 0.0);
    let c = Point3::new(2.0, 0.0, 0.0);
    assert!(!point_in_triangle(&b, &a, &b, &c, 1e-9));
}

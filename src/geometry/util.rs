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

use crate::geometry::plane::Plane;
use crate::geometry::point::{Point2, Point3};
use crate::geometry::vector::{Vector3, VectorOps};
use crate::numeric::scalar::Scalar;

/// Given a normal, return the indices of the two axes to keep (largest
/// dropped).
pub fn coplanar_axes<T: Scalar>(n: &Vector3<T>) -> (usize, usize, usize) {
    let na = [n.x.abs(), n.y.abs(), n.z.abs()];
    if na[0] > na[1] && na[0] > na[2] {
        (1, 2, 0)
    } else if na[1] > na[2] {
        (0, 2, 1)
    } else {
        (0, 1, 2)
    }
}

/// Project a 3D point onto the 2D frame keeping axes `i0` and `i1`.
pub fn project_to_2d<T: Scalar>(p: &Point3<T>, i0: usize, i1: usize) -> Point2<T> {
    Point2::new(p.coord(i0), p.coord(i1))
}

/// Lift a 2D point back onto `plane`, solving the plane equation for the
/// dropped coordinate. Stable because the dropped axis is the dominant
/// component of the plane normal.
pub fn back_project_to_plane<T: Scalar>(
    p: &Point2<T>,
    plane: &Plane<T>,
    axes: (usize, usize, usize),
) -> Point3<T> {
    let (i0, i1, drop) = axes;
    let n = [plane.normal.x, plane.normal.y, plane.normal.z];
    let mut coords = [T::zero(); 3];
    coords[i0] = p.x;
    coords[i1] = p.y;
    coords[drop] = (-plane.d - n[i0] * p.x - n[i1] * p.y) / n[drop];
    Point3::from_coords(coords)
}

/// Barycentric coordinates of `p` with respect to triangle `(a, b, c)`, or
/// `None` when the triangle is degenerate.
pub fn barycentric_coords<T: Scalar>(
    p: &Point3<T>,
    a: &Point3<T>,
    b: &Point3<T>,
    c: &Point3<T>,
) -> Option<(T, T, T)> {
    let v0 = *b - *a;
    let v1 = *c - *a;
    let v2 = *p - *a;

    let d00 = v0.dot(&v0);
    let d01 = v0.dot(&v1);
    let d11 = v1.dot(&v1);
    let d20 = v2.dot(&v0);
    let d21 = v2.dot(&v1);

    let denom = d00 * d11 - d01 * d01;
    if denom.abs() <= T::tolerance() * T::tolerance() {
        return None; // degenerate triangle
    }

    let v = (d11 * d20 - d01 * d21) / denom;
    let w = (d00 * d21 - d01 * d20) / denom;
    let u = T::one() - v - w;

    Some((u, v, w))
}

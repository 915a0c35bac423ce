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

use crate::geometry::point::{Point2, Point3};
use crate::geometry::util::barycentric_coords;
use crate::geometry::vector::VectorOps;
use crate::numeric::scalar::Scalar;

pub fn are_equal<T: Scalar>(p1: &Point3<T>, p2: &Point3<T>, eps: T) -> bool {
    (p1.x - p2.x).abs() < eps && (p1.y - p2.y).abs() < eps && (p1.z - p2.z).abs() < eps
}

pub fn are_equal_2<T: Scalar>(p1: &Point2<T>, p2: &Point2<T>, eps: T) -> bool {
    (p1.x - p2.x).abs() < eps && (p1.y - p2.y).abs() < eps
}

/// True when `a`, `b` and `c` lie on one line, up to `eps` on the cross
/// product of the two edge vectors.
pub fn are_collinear<T: Scalar>(a: &Point3<T>, b: &Point3<T>, c: &Point3<T>, eps: T) -> bool {
    (*b - *a).cross(&(*c - *a)).norm() <= eps
}

/// True when `p` lies inside triangle `(a, b, c)` or within `eps` of its
/// boundary, via barycentric coordinates. A degenerate triangle contains
/// nothing.
pub fn point_in_triangle<T: Scalar>(
    p: &Point3<T>,
    a: &Point3<T>,
    b: &Point3<T>,
    c: &Point3<T>,
    eps: T,
) -> bool {
    match barycentric_coords(p, a, b, c) {
        Some((u, v, w)) => {
            u >= -eps && v >= -eps && w >= -eps && u + v + w <= T::one() + eps
        }
        None => false,
    }
}

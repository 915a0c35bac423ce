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
use crate::geometry::point::Point3;
use crate::geometry::segment::Segment3;
use crate::geometry::vector::{Vector3, VectorOps};
use crate::numeric::scalar::Scalar;

/// A triangle in 3D space. May be degenerate (colinear or coincident
/// vertices); nothing here assumes otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle3<T: Scalar> {
    pub a: Point3<T>,
    pub b: Point3<T>,
    pub c: Point3<T>,
}

impl<T: Scalar> Triangle3<T> {
    pub fn new(a: Point3<T>, b: Point3<T>, c: Point3<T>) -> Self {
        Self { a, b, c }
    }

    pub fn vertices(&self) -> [Point3<T>; 3] {
        [self.a, self.b, self.c]
    }

    pub fn raw_normal(&self) -> Vector3<T> {
        (self.b - self.a).cross(&(self.c - self.a))
    }

    pub fn area(&self) -> T {
        self.raw_normal().norm() * T::from_f64(0.5)
    }

    pub fn is_degenerate(&self) -> bool {
        self.raw_normal().norm() <= T::area_degeneracy_threshold()
    }

    pub fn plane(&self) -> Option<Plane<T>> {
        Plane::from_points(&self.a, &self.b, &self.c)
    }

    pub fn centroid(&self) -> Point3<T> {
        let third = T::one() / T::from_f64(3.0);
        Point3::new(
            (self.a.x + self.b.x + self.c.x) * third,
            (self.a.y + self.b.y + self.c.y) * third,
            (self.a.z + self.b.z + self.c.z) * third,
        )
    }

    /// The segment spanned by the two most distant vertices. For a colinear
    /// triangle this is its convex hull; for a proper one, its longest edge.
    pub fn support_segment(&self) -> Segment3<T> {
        let ab = self.a.distance_squared_to(&self.b);
        let bc = self.b.distance_squared_to(&self.c);
        let ca = self.c.distance_squared_to(&self.a);
        if ab >= bc && ab >= ca {
            Segment3::new(self.a, self.b)
        } else if bc >= ca {
            Segment3::new(self.b, self.c)
        } else {
            Segment3::new(self.c, self.a)
        }
    }
}

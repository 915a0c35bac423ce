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

use crate::geometry::point::Point3;
use crate::geometry::vector::{Vector3, VectorOps};
use crate::numeric::scalar::Scalar;

/// Oriented plane `normal · x + d = 0` with unit `normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane<T: Scalar> {
    pub normal: Vector3<T>,
    pub d: T,
}

impl<T: Scalar> Plane<T> {
    pub fn new(normal: Vector3<T>, d: T) -> Self {
        Plane { normal, d }
    }

    /// Supporting plane of the triangle `(p1, p2, p3)`, oriented by its
    /// winding. `None` when the vertices are colinear or coincident and no
    /// plane is defined.
    pub fn from_points(p1: &Point3<T>, p2: &Point3<T>, p3: &Point3<T>) -> Option<Self> {
        let v1 = *p2 - *p1;
        let v2 = *p3 - *p1;
        let raw = v1.cross(&v2);
        let len = raw.norm();
        if len <= T::area_degeneracy_threshold() {
            return None;
        }
        let normal = raw * (T::one() / len);
        let d = -normal.dot(&p1.as_vector());
        Some(Plane::new(normal, d))
    }

    pub fn signed_distance(&self, p: &Point3<T>) -> T {
        self.normal.dot(&p.as_vector()) + self.d
    }
}

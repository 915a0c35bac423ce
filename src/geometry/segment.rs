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
use crate::geometry::vector::{Vector2, Vector3, VectorOps};
use crate::numeric::scalar::Scalar;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<T: Scalar> {
    pub a: Point2<T>,
    pub b: Point2<T>,
}

impl<T: Scalar> Segment2<T> {
    pub fn new(a: Point2<T>, b: Point2<T>) -> Self {
        Self { a, b }
    }

    pub fn direction(&self) -> Vector2<T> {
        self.b - self.a
    }

    pub fn length(&self) -> T {
        self.direction().norm()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment3<T: Scalar> {
    pub a: Point3<T>,
    pub b: Point3<T>,
}

impl<T: Scalar> Segment3<T> {
    pub fn new(a: Point3<T>, b: Point3<T>) -> Self {
        Self { a, b }
    }

    pub fn direction(&self) -> Vector3<T> {
        self.b - self.a
    }

    pub fn length(&self) -> T {
        self.direction().norm()
    }

    pub fn length_squared(&self) -> T {
        self.direction().norm_squared()
    }

    pub fn midpoint(&self) -> Point3<T> {
        self.a.lerp(&self.b, T::from_f64(0.5))
    }

    /// Point at parameter `t`, with `t = 0` at `a` and `t = 1` at `b`.
    pub fn point_at(&self, t: T) -> Point3<T> {
        self.a.lerp(&self.b, t)
    }

    /// Distance from `p` to the closest point of the segment.
    pub fn distance_to_point(&self, p: &Point3<T>) -> T {
        let d = self.direction();
        let len2 = d.norm_squared();
        if len2 <= T::tolerance() * T::tolerance() {
            return self.a.distance_to(p);
        }
        let t = d.dot(&(*p - self.a)) / len2;
        let t = t.max(T::zero()).min(T::one());
        self.point_at(t).distance_to(p)
    }
}

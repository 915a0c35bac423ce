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
use crate::kernel::predicates::are_equal;
use crate::numeric::scalar::Scalar;

/// Upper bound on contact points: clipping one triangle by the three
/// half-planes of another yields at most a hexagon.
pub const MAX_CONTACTS: usize = 6;

/// Contact set produced by [`crate::collision::contact_manifold`].
///
/// The points live in a stack array; nothing is heap allocated. For coplanar
/// overlap the points are the vertices of the intersection polygon, wound
/// counter-clockwise about `normal`; for cross-plane contact they are the
/// endpoints of the shared segment, ordered along the planes' intersection
/// line. `depth` is zero for coplanar and point contacts, and the length of
/// the shared segment otherwise. An empty manifold means "no collision".
#[derive(Debug, Clone, Copy)]
pub struct ContactManifold<T: Scalar> {
    points: [Point3<T>; MAX_CONTACTS],
    len: usize,
    pub normal: Vector3<T>,
    pub depth: T,
}

impl<T: Scalar> ContactManifold<T> {
    pub fn empty() -> Self {
        Self {
            points: [Point3::origin(); MAX_CONTACTS],
            len: 0,
            normal: Vector3::zero(),
            depth: T::zero(),
        }
    }

    pub(crate) fn with_normal(normal: Vector3<T>) -> Self {
        let mut m = Self::empty();
        m.normal = normal;
        m
    }

    /// Append `p` unless a point within the merge threshold is already
    /// present.
    pub(crate) fn push(&mut self, p: Point3<T>) {
        for q in &self.points[..self.len] {
            if are_equal(q, &p, T::point_merge_threshold()) {
                return;
            }
        }
        debug_assert!(self.len < MAX_CONTACTS, "contact manifold overflow");
        if self.len < MAX_CONTACTS {
            self.points[self.len] = p;
            self.len += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn points(&self) -> &[Point3<T>] {
        &self.points[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point3<T>> {
        self.points[..self.len].iter()
    }

    /// Reverse the point order when the winding of the stored polygon (its
    /// Newell normal) disagrees with the reported contact normal.
    pub(crate) fn orient_ccw(&mut self) {
        if self.len < 3 {
            return;
        }
        let mut n = Vector3::zero();
        for i in 0..self.len {
            let p = self.points[i];
            let q = self.points[(i + 1) % self.len];
            n.x = n.x + (p.y - q.y) * (p.z + q.z);
            n.y = n.y + (p.z - q.z) * (p.x + q.x);
            n.z = n.z + (p.x - q.x) * (p.y + q.y);
        }
        if n.dot(&self.normal) < T::zero() {
            self.points[..self.len].reverse();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_merges_coincident_points() {
        let mut m = ContactManifold::<f64>::empty();
        m.push(Point3::new(1.0, 0.0, 0.0));
        m.push(Point3::new(1.0 + 1e-9, 0.0, 0.0));
        m.push(Point3::new(0.0, 1.0, 0.0));
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn orient_ccw_flips_clockwise_polygons() {
        let mut m = ContactManifold::<f64>::with_normal(Vector3::new(0.0, 0.0, 1.0));
        // clockwise when viewed from +z
        m.push(Point3::new(0.0, 0.0, 0.0));
        m.push(Point3::new(0.0, 1.0, 0.0));
        m.push(Point3::new(1.0, 0.0, 0.0));
        m.orient_ccw();
        assert_eq!(m.points()[0], Point3::new(1.0, 0.0, 0.0));
        assert_eq!(m.points()[1], Point3::new(0.0, 1.0, 0.0));
        assert_eq!(m.points()[2], Point3::new(0.0, 0.0, 0.0));
    }
}

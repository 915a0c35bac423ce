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

//! Random geometry fixtures for exercising the contact kernel.
//!
//! Everything takes an explicit `Rng`, so callers own the seed and runs are
//! reproducible; there is no hidden global randomness.

use rand::Rng;

use crate::geometry::point::Point3;
use crate::geometry::triangle::Triangle3;
use crate::geometry::vector::{Vector3, VectorOps};
use crate::numeric::scalar::Scalar;

/// Uniform point in the cube [-1, 1]^3.
pub fn random_point<R: Rng + ?Sized>(rng: &mut R) -> Point3<f64> {
    Point3::new(
        rng.random_range(-1.0..=1.0),
        rng.random_range(-1.0..=1.0),
        rng.random_range(-1.0..=1.0),
    )
}

/// Random non-degenerate triangle with vertices in the unit cube. Resamples
/// on the (measure-zero) chance of colinear vertices, giving up after a
/// bounded number of trials.
pub fn random_triangle<R: Rng + ?Sized>(rng: &mut R) -> Triangle3<f64> {
    let mut tri = Triangle3::new(random_point(rng), random_point(rng), random_point(rng));
    for _ in 0..1000 {
        if !tri.is_degenerate() {
            break;
        }
        tri = Triangle3::new(random_point(rng), random_point(rng), random_point(rng));
    }
    tri
}

/// Random point of the closed triangle, by normalized barycentric weights.
pub fn random_point_within<R: Rng + ?Sized>(rng: &mut R, tri: &Triangle3<f64>) -> Point3<f64> {
    let w = [
        rng.random_range(0.0..=1.0f64),
        rng.random_range(0.0..=1.0f64),
        rng.random_range(0.0..=1.0f64),
    ];
    weighted_vertex_sum(tri, w)
}

/// Random point strictly interior to the triangle: every barycentric weight
/// is floored away from zero before renormalizing.
pub fn random_point_strictly_within<R: Rng + ?Sized>(
    rng: &mut R,
    tri: &Triangle3<f64>,
) -> Point3<f64> {
    let floor = 0.05;
    let w = [
        rng.random_range(0.0..=1.0f64) + floor,
        rng.random_range(0.0..=1.0f64) + floor,
        rng.random_range(0.0..=1.0f64) + floor,
    ];
    weighted_vertex_sum(tri, w)
}

fn weighted_vertex_sum(tri: &Triangle3<f64>, w: [f64; 3]) -> Point3<f64> {
    let sum = w[0] + w[1] + w[2];
    let (u, v, s) = (w[0] / sum, w[1] / sum, w[2] / sum);
    Point3::new(
        u * tri.a.x + v * tri.b.x + s * tri.c.x,
        u * tri.a.y + v * tri.b.y + s * tri.c.y,
        u * tri.a.z + v * tri.b.z + s * tri.c.z,
    )
}

/// Random point strictly off the positive side of the triangle's plane: the
/// lateral scatter is kept below the normal offset by a small margin.
pub fn random_point_strictly_above<R: Rng + ?Sized>(
    rng: &mut R,
    tri: &Triangle3<f64>,
) -> Point3<f64> {
    let range = 1.0;
    offset_from_centroid(rng, tri, range, range * 0.99)
}

fn offset_from_centroid<R: Rng + ?Sized>(
    rng: &mut R,
    tri: &Triangle3<f64>,
    lift: f64,
    scatter: f64,
) -> Point3<f64> {
    let n = tri.raw_normal();
    let len = n.norm();
    // A degenerate fixture has no plane; lift along +z so the call still
    // produces something usable.
    let n = if len > f64::area_degeneracy_threshold() {
        n * (1.0 / len)
    } else {
        Vector3::new(0.0, 0.0, 1.0)
    };
    let jitter = random_unit_vector(rng) * rng.random_range(0.0..=scatter);
    tri.centroid() + n * lift + jitter
}

fn random_unit_vector<R: Rng + ?Sized>(rng: &mut R) -> Vector3<f64> {
    loop {
        let v = Vector3::new(
            rng.random_range(-1.0..=1.0),
            rng.random_range(-1.0..=1.0),
            rng.random_range(-1.0..=1.0),
        );
        let len = v.norm();
        if len > 1e-3 {
            return v * (1.0 / len);
        }
    }
}

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

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tricontact::collision::contact_manifold;
use tricontact::geometry::{Point3, Triangle3};
use tricontact::kernel::{are_equal, point_in_triangle};
use tricontact::sampling::{
    random_point_strictly_above, random_point_strictly_within, random_point_within,
    random_triangle,
};

const EPS: f64 = 1e-6;
const NUM_TESTS: usize = 1000;

#[test]
fn vertex_strictly_within_other_triangle_gives_one_contact() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..NUM_TESTS {
        let a = random_triangle(&mut rng);
        let b1 = random_point_strictly_within(&mut rng, &a);
        let b2 = random_point_strictly_above(&mut rng, &a);
        let b3 = random_point_strictly_above(&mut rng, &a);
        let b = Triangle3::new(b1, b2, b3);
        if b.is_degenerate() {
            continue;
        }

        let m = contact_manifold(&a, &b);
        assert_eq!(m.len(), 1);
        assert!(are_equal(&m.points()[0], &b1, EPS));
    }
}

#[test]
fn coplanar_overlap_collapsing_to_boundary_segment() {
    let mut rng = StdRng::seed_from_u64(0xc01d);
    let a = Triangle3::new(
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(2.0, 0.0, 0.0),
        Point3::new(0.0, 2.0, 0.0),
    );
    for _ in 0..NUM_TESTS {
        let r = rng.random_range(0.1..2.0);
        let b = Triangle3::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(r, 0.0, 0.0),
            Point3::new(0.0, -1.0, 0.0),
        );

        let m = contact_manifold(&a, &b);
        assert_eq!(m.len(), 2);
        assert!(m.iter().any(|c| are_equal(c, &Point3::origin(), EPS)));
        assert!(m.iter().any(|c| are_equal(c, &Point3::new(r, 0.0, 0.0), EPS)));
    }
}

#[test]
fn contact_is_symmetric_in_its_arguments() {
    let mut rng = StdRng::seed_from_u64(0x51de5);
    for _ in 0..NUM_TESTS {
        let a = random_triangle(&mut rng);
        let b = random_triangle(&mut rng);

        let m1 = contact_manifold(&a, &b);
        let m2 = contact_manifold(&b, &a);
        assert_eq!(m1.len(), m2.len());
        for c in m1.iter() {
            assert!(m2.iter().any(|d| are_equal(c, d, EPS)));
        }
    }
}

#[test]
fn self_contact_is_the_whole_triangle() {
    let mut rng = StdRng::seed_from_u64(0xface);
    for _ in 0..NUM_TESTS {
        let a = random_triangle(&mut rng);
        let m = contact_manifold(&a, &a);
        assert_eq!(m.len(), 3);
        for v in [a.a, a.b, a.c] {
            assert!(m.iter().any(|c| are_equal(c, &v, EPS)));
        }
    }
}

#[test]
fn contact_points_lie_in_both_triangles() {
    // barycentric slack: a merge-tolerance sliver on a small triangle is a
    // much larger barycentric deviation than a world-space one
    let inside_eps = 1e-3;
    let mut rng = StdRng::seed_from_u64(0xbeef);
    for _ in 0..NUM_TESTS {
        let a = random_triangle(&mut rng);
        let b = random_triangle(&mut rng);
        let m = contact_manifold(&a, &b);
        for c in m.iter() {
            assert!(point_in_triangle(c, &a.a, &a.b, &a.c, inside_eps));
            assert!(point_in_triangle(c, &b.a, &b.b, &b.c, inside_eps));
        }
    }
}

#[test]
fn separated_triangles_never_collide() {
    let mut rng = StdRng::seed_from_u64(0xd157);
    for _ in 0..NUM_TESTS {
        let a = random_triangle(&mut rng);
        let b = Triangle3::new(
            random_point_strictly_above(&mut rng, &a),
            random_point_strictly_above(&mut rng, &a),
            random_point_strictly_above(&mut rng, &a),
        );
        assert_eq!(contact_manifold(&a, &b).len(), 0);
    }
}

#[test]
fn sampled_interior_points_are_inside() {
    let mut rng = StdRng::seed_from_u64(0x1234);
    for _ in 0..NUM_TESTS {
        let a = random_triangle(&mut rng);
        let q = random_point_within(&mut rng, &a);
        assert!(point_in_triangle(&q, &a.a, &a.b, &a.c, EPS));
    }
}

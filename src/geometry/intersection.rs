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
use crate::geometry::segment::{Segment2, Segment3};
use crate::geometry::vector::VectorOps;
use crate::kernel::orientation::orient2d;
use crate::kernel::predicates::are_equal;
use crate::numeric::scalar::Scalar;

#[derive(Debug, Clone, PartialEq)]
pub enum SegmentIntersection2<T: Scalar> {
    None,
    Point(Point2<T>),
    Overlapping(Segment2<T>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SegmentIntersection3<T: Scalar> {
    None,
    Point(Point3<T>),
    Overlapping(Segment3<T>),
}

pub fn segment_segment_intersection_2<T: Scalar>(
    seg1: &Segment2<T>,
    seg2: &Segment2<T>,
    eps: T,
) -> SegmentIntersection2<T> {
    let (a, b) = (&seg1.a, &seg1.b);
    let (c, d) = (&seg2.a, &seg2.b);

    let o1 = orient2d(a, b, c);
    let o2 = orient2d(a, b, d);
    let o3 = orient2d(c, d, a);
    let o4 = orient2d(c, d, b);

    if o1 * o2 > T::zero() || o3 * o4 > T::zero() {
        return SegmentIntersection2::None;
    }

    if o1.abs() > eps || o2.abs() > eps || o3.abs() > eps || o4.abs() > eps {
        // Proper crossing; solve the two line equations.
        let denom = (a.x - b.x) * (c.y - d.y) - (a.y - b.y) * (c.x - d.x);
        if denom.abs() < eps {
            return SegmentIntersection2::None; // parallel but not overlapping
        }
        let ab = a.x * b.y - a.y * b.x;
        let cd = c.x * d.y - c.y * d.x;
        let px = (ab * (c.x - d.x) - (a.x - b.x) * cd) / denom;
        let py = (ab * (c.y - d.y) - (a.y - b.y) * cd) / denom;
        return SegmentIntersection2::Point(Point2::new(px, py));
    }

    // All four orientations vanish: the segments are collinear. Overlap is a
    // 1D interval in seg1's parameter space.
    let dir = seg1.direction();
    let len2 = dir.norm_squared();
    if len2 <= eps * eps {
        // seg1 is a point
        return if seg2_contains_point_2(seg2, a, eps) {
            SegmentIntersection2::Point(*a)
        } else {
            SegmentIntersection2::None
        };
    }
    let tc = dir.dot(&(*c - *a)) / len2;
    let td = dir.dot(&(*d - *a)) / len2;
    let (lo, hi) = if tc < td { (tc, td) } else { (td, tc) };
    let start = lo.max(T::zero());
    let end = hi.min(T::one());
    let param_eps = eps / len2.sqrt();
    if start > end + param_eps {
        return SegmentIntersection2::None;
    }
    let pa = a.lerp(b, start.max(T::zero()).min(T::one()));
    let pb = a.lerp(b, end.max(T::zero()).min(T::one()));
    if (pb - pa).norm() <= eps {
        SegmentIntersection2::Point(pa)
    } else {
        SegmentIntersection2::Overlapping(Segment2::new(pa, pb))
    }
}

fn seg2_contains_point_2<T: Scalar>(seg: &Segment2<T>, p: &Point2<T>, eps: T) -> bool {
    let dir = seg.direction();
    let len2 = dir.norm_squared();
    if len2 <= eps * eps {
        return (*p - seg.a).norm() <= eps;
    }
    let t = dir.dot(&(*p - seg.a)) / len2;
    let t = t.max(T::zero()).min(T::one());
    (*p - seg.a.lerp(&seg.b, t)).norm() <= eps
}

pub fn segment_segment_intersection_3<T: Scalar>(
    seg1: &Segment3<T>,
    seg2: &Segment3<T>,
    eps: T,
) -> SegmentIntersection3<T> {
    let da = seg1.direction();
    let db = seg2.direction();
    let len_a2 = da.norm_squared();
    let len_b2 = db.norm_squared();
    let eps2 = eps * eps;

    // Degenerate segments reduce to point queries.
    if len_a2 <= eps2 && len_b2 <= eps2 {
        return if are_equal(&seg1.a, &seg2.a, eps) {
            SegmentIntersection3::Point(seg1.a)
        } else {
            SegmentIntersection3::None
        };
    }
    if len_a2 <= eps2 {
        return if seg2.distance_to_point(&seg1.a) <= eps {
            SegmentIntersection3::Point(seg1.a)
        } else {
            SegmentIntersection3::None
        };
    }
    if len_b2 <= eps2 {
        return if seg1.distance_to_point(&seg2.a) <= eps {
            SegmentIntersection3::Point(seg2.a)
        } else {
            SegmentIntersection3::None
        };
    }

    let cross = da.cross(&db);
    let det = cross.norm_squared();
    let delta = seg2.a - seg1.a;

    if det <= T::tolerance() {
        // Parallel. Distinct lines cannot meet.
        if delta.cross(&da).norm_squared() > T::tolerance() {
            return SegmentIntersection3::None;
        }
        // Collinear: 1D overlap in seg1's parameter space.
        let tc = da.dot(&delta) / len_a2;
        let td = da.dot(&(seg2.b - seg1.a)) / len_a2;
        let (lo, hi) = if tc < td { (tc, td) } else { (td, tc) };
        let start = lo.max(T::zero());
        let end = hi.min(T::one());
        let param_eps = eps / len_a2.sqrt();
        if start > end + param_eps {
            return SegmentIntersection3::None;
        }
        let pa = seg1.point_at(start.max(T::zero()).min(T::one()));
        let pb = seg1.point_at(end.max(T::zero()).min(T::one()));
        return if are_equal(&pa, &pb, eps) {
            SegmentIntersection3::Point(pa)
        } else {
            SegmentIntersection3::Overlapping(Segment3::new(pa, pb))
        };
    }

    // Closest approach of the two carrying lines.
    let t1 = delta.cross(&db).dot(&cross) / det;
    let t2 = delta.cross(&da).dot(&cross) / det;
    let s1 = eps / len_a2.sqrt();
    let s2 = eps / len_b2.sqrt();
    if t1 < -s1 || t1 > T::one() + s1 || t2 < -s2 || t2 > T::one() + s2 {
        return SegmentIntersection3::None;
    }
    let p1 = seg1.point_at(t1.max(T::zero()).min(T::one()));
    let p2 = seg2.point_at(t2.max(T::zero()).min(T::one()));
    if p1.distance_to(&p2) <= eps {
        SegmentIntersection3::Point(p1.lerp(&p2, T::from_f64(0.5)))
    } else {
        SegmentIntersection3::None // skew lines pass each other
    }
}

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

use crate::collision::manifold::{ContactManifold, MAX_CONTACTS};
use crate::geometry::intersection::{SegmentIntersection3, segment_segment_intersection_3};
use crate::geometry::plane::Plane;
use crate::geometry::point::{Point2, Point3};
use crate::geometry::segment::Segment3;
use crate::geometry::triangle::Triangle3;
use crate::geometry::util::{back_project_to_plane, coplanar_axes, project_to_2d};
use crate::geometry::vector::{Vector3, VectorOps};
use crate::kernel::orientation::orient2d;
use crate::kernel::predicates::{are_equal_2, point_in_triangle};
use crate::numeric::scalar::Scalar;

/// How the supporting planes of two triangles relate.
#[derive(Debug, Clone, Copy)]
pub enum PlanePair<T: Scalar> {
    /// All six vertices lie on one shared plane (within tolerance).
    Coplanar { plane: Plane<T> },
    /// Two proper triangles on distinct planes.
    NonCoplanar {
        plane_a: Plane<T>,
        plane_b: Plane<T>,
    },
    /// One triangle cannot define a plane and lies off the other's.
    OneDegenerate {
        plane: Plane<T>,
        degenerate_is_a: bool,
    },
    /// Neither triangle defines a plane.
    BothDegenerate,
}

/// Classify the pair of supporting planes. Total over all inputs: a
/// degenerate triangle falls back to the other triangle's plane, and a pair
/// of degenerate triangles gets its own tag instead of an error.
pub fn classify_planes<T: Scalar>(a: &Triangle3<T>, b: &Triangle3<T>) -> PlanePair<T> {
    let eps = T::coplanarity_threshold();
    match (a.plane(), b.plane()) {
        (Some(plane_a), Some(plane_b)) => {
            // Both directions, so the answer survives an argument swap.
            let off = max_distance(&plane_a, b).max(max_distance(&plane_b, a));
            if off <= eps {
                PlanePair::Coplanar { plane: plane_a }
            } else {
                PlanePair::NonCoplanar { plane_a, plane_b }
            }
        }
        (Some(plane), None) => {
            if max_distance(&plane, b) <= eps {
                PlanePair::Coplanar { plane }
            } else {
                PlanePair::OneDegenerate {
                    plane,
                    degenerate_is_a: false,
                }
            }
        }
        (None, Some(plane)) => {
            if max_distance(&plane, a) <= eps {
                PlanePair::Coplanar { plane }
            } else {
                PlanePair::OneDegenerate {
                    plane,
                    degenerate_is_a: true,
                }
            }
        }
        (None, None) => PlanePair::BothDegenerate,
    }
}

fn max_distance<T: Scalar>(plane: &Plane<T>, tri: &Triangle3<T>) -> T {
    plane
        .signed_distance(&tri.a)
        .abs()
        .max(plane.signed_distance(&tri.b).abs())
        .max(plane.signed_distance(&tri.c).abs())
}

/// Contact manifold of two triangles: the intersection polygon when they are
/// coplanar, the shared segment when their planes cross, a single touch
/// point, or nothing.
pub fn contact_manifold<T: Scalar>(a: &Triangle3<T>, b: &Triangle3<T>) -> ContactManifold<T> {
    match classify_planes(a, b) {
        PlanePair::Coplanar { plane } => coplanar_contact(a, b, &plane),
        PlanePair::NonCoplanar { plane_a, plane_b } => {
            cross_plane_contact(a, b, &plane_a, &plane_b)
        }
        PlanePair::OneDegenerate {
            plane,
            degenerate_is_a,
        } => {
            if degenerate_is_a {
                segment_plane_contact(&a.support_segment(), b, &plane)
            } else {
                segment_plane_contact(&b.support_segment(), a, &plane)
            }
        }
        PlanePair::BothDegenerate => degenerate_pair_contact(a, b),
    }
}

/// Buffer-writing entry point: stores up to [`MAX_CONTACTS`] points in the
/// caller's array and returns the contact count. Entries past the count are
/// left untouched.
#[allow(clippy::too_many_arguments)]
pub fn collide_triangle_triangle<T: Scalar>(
    a1: &Point3<T>,
    a2: &Point3<T>,
    a3: &Point3<T>,
    b1: &Point3<T>,
    b2: &Point3<T>,
    b3: &Point3<T>,
    contacts: &mut [Point3<T>; MAX_CONTACTS],
    normal: &mut Vector3<T>,
    depth: &mut T,
) -> usize {
    let m = contact_manifold(
        &Triangle3::new(*a1, *a2, *a3),
        &Triangle3::new(*b1, *b2, *b3),
    );
    contacts[..m.len()].copy_from_slice(m.points());
    *normal = m.normal;
    *depth = m.depth;
    m.len()
}

/// Do the two triangles touch or overlap at all?
pub fn tri_tri_overlap<T: Scalar>(
    a1: &Point3<T>,
    a2: &Point3<T>,
    a3: &Point3<T>,
    b1: &Point3<T>,
    b2: &Point3<T>,
    b3: &Point3<T>,
) -> bool {
    !contact_manifold(
        &Triangle3::new(*a1, *a2, *a3),
        &Triangle3::new(*b1, *b2, *b3),
    )
    .is_empty()
}

fn coplanar_contact<T: Scalar>(
    a: &Triangle3<T>,
    b: &Triangle3<T>,
    plane: &Plane<T>,
) -> ContactManifold<T> {
    match (a.is_degenerate(), b.is_degenerate()) {
        (false, false) => coplanar_polygon_contact(a, b, plane),
        (false, true) => coplanar_segment_contact(&b.support_segment(), a, plane),
        (true, false) => coplanar_segment_contact(&a.support_segment(), b, plane),
        (true, true) => degenerate_pair_contact(a, b),
    }
}

/// Working polygon for half-plane clipping. Clipping a triangle by three
/// half-planes tops out at seven vertices mid-pass; nine leaves slack for
/// boundary duplicates.
const CLIP_CAPACITY: usize = 9;

#[derive(Clone, Copy)]
struct ClipPolygon<T: Scalar> {
    pts: [Point2<T>; CLIP_CAPACITY],
    len: usize,
}

impl<T: Scalar> ClipPolygon<T> {
    fn new() -> Self {
        Self {
            pts: [Point2::new(T::zero(), T::zero()); CLIP_CAPACITY],
            len: 0,
        }
    }

    fn from_triangle(t: &[Point2<T>; 3]) -> Self {
        let mut poly = Self::new();
        poly.pts[..3].copy_from_slice(t);
        poly.len = 3;
        poly
    }

    /// Append, skipping a duplicate of the most recent vertex.
    fn push(&mut self, p: Point2<T>) {
        if self.len > 0 && are_equal_2(&self.pts[self.len - 1], &p, T::point_merge_threshold()) {
            return;
        }
        debug_assert!(self.len < CLIP_CAPACITY, "clip polygon overflow");
        if self.len < CLIP_CAPACITY {
            self.pts[self.len] = p;
            self.len += 1;
        }
    }

    fn points(&self) -> &[Point2<T>] {
        &self.pts[..self.len]
    }
}

/// Sutherland–Hodgman: clip B against the three half-planes bounded by A's
/// edges, in the 2D frame of the shared plane. The surviving polygon is the
/// intersection, at most a hexagon.
fn coplanar_polygon_contact<T: Scalar>(
    a: &Triangle3<T>,
    b: &Triangle3<T>,
    plane: &Plane<T>,
) -> ContactManifold<T> {
    let axes = coplanar_axes(&plane.normal);
    let (i0, i1, _) = axes;
    let ta = [
        project_to_2d(&a.a, i0, i1),
        project_to_2d(&a.b, i0, i1),
        project_to_2d(&a.c, i0, i1),
    ];
    let tb = [
        project_to_2d(&b.a, i0, i1),
        project_to_2d(&b.b, i0, i1),
        project_to_2d(&b.c, i0, i1),
    ];

    // The winding of the projected clip triangle decides which side of each
    // edge is the interior.
    let area2 = orient2d(&ta[0], &ta[1], &ta[2]);
    if area2.sign() == 0 {
        // Dropping the dominant normal axis cannot collapse a proper
        // triangle; this only fires right at the degeneracy threshold.
        return coplanar_segment_contact(&a.support_segment(), b, plane);
    }
    let side = if area2 > T::zero() { T::one() } else { -T::one() };

    let mut poly = ClipPolygon::from_triangle(&tb);
    for i in 0..3 {
        let e0 = ta[i];
        let e1 = ta[(i + 1) % 3];
        poly = clip_against_edge(&poly, &e0, &e1, side);
        if poly.len == 0 {
            return ContactManifold::empty();
        }
    }

    let mut m = ContactManifold::with_normal(plane.normal);
    for p in poly.points() {
        m.push(back_project_to_plane(p, plane, axes));
    }
    m.orient_ccw();
    m
}

fn clip_against_edge<T: Scalar>(
    poly: &ClipPolygon<T>,
    e0: &Point2<T>,
    e1: &Point2<T>,
    side: T,
) -> ClipPolygon<T> {
    let eps = T::tolerance();
    let mut out = ClipPolygon::new();
    for i in 0..poly.len {
        let s = poly.pts[i];
        let e = poly.pts[(i + 1) % poly.len];
        let fs = side * orient2d(e0, e1, &s);
        let fe = side * orient2d(e0, e1, &e);
        let s_in = fs >= -eps;
        let e_in = fe >= -eps;
        if s_in && e_in {
            out.push(e);
        } else if s_in {
            out.push(edge_crossing(&s, &e, fs, fe));
        } else if e_in {
            out.push(edge_crossing(&s, &e, fs, fe));
            out.push(e);
        }
    }
    out
}

/// Zero of the linear inside-function along the segment `s → e`.
fn edge_crossing<T: Scalar>(s: &Point2<T>, e: &Point2<T>, fs: T, fe: T) -> Point2<T> {
    let t = (fs / (fs - fe)).max(T::zero()).min(T::one());
    s.lerp(e, t)
}

/// Clip a segment lying in the shared plane against a proper triangle. The
/// degenerate counterpart of the polygon clip: the intersection is a
/// parameter interval of the segment, giving 0, 1 or 2 contacts.
fn coplanar_segment_contact<T: Scalar>(
    seg: &Segment3<T>,
    tri: &Triangle3<T>,
    plane: &Plane<T>,
) -> ContactManifold<T> {
    let axes = coplanar_axes(&plane.normal);
    let (i0, i1, _) = axes;
    let t2 = [
        project_to_2d(&tri.a, i0, i1),
        project_to_2d(&tri.b, i0, i1),
        project_to_2d(&tri.c, i0, i1),
    ];
    let p0 = project_to_2d(&seg.a, i0, i1);
    let p1 = project_to_2d(&seg.b, i0, i1);

    let mut m = ContactManifold::with_normal(plane.normal);

    // The "segment" may itself be a single point.
    if are_equal_2(&p0, &p1, T::point_merge_threshold()) {
        if point_in_triangle(&seg.a, &tri.a, &tri.b, &tri.c, T::point_merge_threshold()) {
            m.push(seg.a);
        }
        return m;
    }

    let area2 = orient2d(&t2[0], &t2[1], &t2[2]);
    let side = if area2 >= T::zero() { T::one() } else { -T::one() };

    let eps = T::tolerance();
    let mut t_enter = T::zero();
    let mut t_exit = T::one();
    for i in 0..3 {
        let e0 = t2[i];
        let e1 = t2[(i + 1) % 3];
        let f0 = side * orient2d(&e0, &e1, &p0);
        let f1 = side * orient2d(&e0, &e1, &p1);
        if f0 < -eps && f1 < -eps {
            return m; // entirely outside this edge
        }
        if f0 < -eps {
            let t = (-f0 / (f1 - f0)).max(T::zero()).min(T::one());
            t_enter = t_enter.max(t);
        } else if f1 < -eps {
            let t = (-f0 / (f1 - f0)).max(T::zero()).min(T::one());
            t_exit = t_exit.min(t);
        }
        if t_enter - t_exit > eps {
            return m;
        }
    }

    m.push(seg.point_at(t_enter));
    m.push(seg.point_at(t_exit.max(t_enter)));
    m
}

/// A degenerate triangle off the proper one's plane, reduced to its support
/// segment: at most one piercing point.
fn segment_plane_contact<T: Scalar>(
    seg: &Segment3<T>,
    tri: &Triangle3<T>,
    plane: &Plane<T>,
) -> ContactManifold<T> {
    let eps = T::coplanarity_threshold();
    let inside_eps = T::point_merge_threshold();
    let d0 = plane.signed_distance(&seg.a);
    let d1 = plane.signed_distance(&seg.b);

    let mut m = ContactManifold::with_normal(plane.normal);
    if d0.abs() <= eps && point_in_triangle(&seg.a, &tri.a, &tri.b, &tri.c, inside_eps) {
        m.push(seg.a);
    }
    if d1.abs() <= eps && point_in_triangle(&seg.b, &tri.a, &tri.b, &tri.c, inside_eps) {
        m.push(seg.b);
    }
    if (d0 > eps && d1 < -eps) || (d0 < -eps && d1 > eps) {
        let p = seg.point_at(d0 / (d0 - d1));
        if point_in_triangle(&p, &tri.a, &tri.b, &tri.c, inside_eps) {
            m.push(p);
        }
    }
    m
}

/// Both triangles are colinear or collapsed; their hulls are segments (or
/// points), so contact reduces to segment–segment intersection.
fn degenerate_pair_contact<T: Scalar>(a: &Triangle3<T>, b: &Triangle3<T>) -> ContactManifold<T> {
    let sa = a.support_segment();
    let sb = b.support_segment();

    let mut m = ContactManifold::empty();
    match segment_segment_intersection_3(&sa, &sb, T::point_merge_threshold()) {
        SegmentIntersection3::None => {}
        SegmentIntersection3::Point(p) => {
            m.normal = segment_pair_normal(&sa, &sb);
            m.push(p);
        }
        SegmentIntersection3::Overlapping(seg) => {
            m.normal = segment_pair_normal(&sa, &sb);
            m.push(seg.a);
            m.push(seg.b);
        }
    }
    m
}

/// Segment contacts have no face to borrow a normal from; report a stable
/// perpendicular of the contact line instead.
fn segment_pair_normal<T: Scalar>(sa: &Segment3<T>, sb: &Segment3<T>) -> Vector3<T> {
    let da = sa.direction();
    let db = sb.direction();
    let cross = da.cross(&db);
    if cross.norm() > T::tolerance() {
        return cross.normalized();
    }
    let d = if da.norm_squared() >= db.norm_squared() {
        da
    } else {
        db
    };
    let perp = d.any_perpendicular();
    if perp.norm() > T::tolerance() {
        perp.normalized()
    } else {
        Vector3::zero() // two coincident points; no direction is meaningful
    }
}

/// Points where a triangle meets a plane: vertices lying on it, plus edge
/// crossings with strictly opposite endpoint signs.
struct SectionPoints<T: Scalar> {
    pts: [Point3<T>; 4],
    len: usize,
}

impl<T: Scalar> SectionPoints<T> {
    fn new() -> Self {
        Self {
            pts: [Point3::origin(); 4],
            len: 0,
        }
    }

    fn push(&mut self, p: Point3<T>) {
        if self.len < 4 {
            self.pts[self.len] = p;
            self.len += 1;
        }
    }
}

fn plane_section<T: Scalar>(tri: &Triangle3<T>, dist: &[T; 3]) -> SectionPoints<T> {
    let eps = T::coplanarity_threshold();
    let v = tri.vertices();
    let mut sec = SectionPoints::new();
    for i in 0..3 {
        if dist[i].abs() <= eps {
            sec.push(v[i]);
        }
    }
    for (i, j) in [(0, 1), (1, 2), (2, 0)] {
        let (di, dj) = (dist[i], dist[j]);
        if (di > eps && dj < -eps) || (di < -eps && dj > eps) {
            sec.push(v[i].lerp(&v[j], di / (di - dj)));
        }
    }
    sec
}

/// Scalar range covered by a triangle's section along the intersection line.
struct LineInterval<T: Scalar> {
    t_min: T,
    p_min: Point3<T>,
    t_max: T,
    p_max: Point3<T>,
}

impl<T: Scalar> LineInterval<T> {
    fn from_section(sec: &SectionPoints<T>, dir: &Vector3<T>) -> Self {
        let first = sec.pts[0];
        let t0 = dir.dot(&first.as_vector());
        let mut iv = Self {
            t_min: t0,
            p_min: first,
            t_max: t0,
            p_max: first,
        };
        for p in &sec.pts[1..sec.len] {
            let t = dir.dot(&p.as_vector());
            if t < iv.t_min {
                iv.t_min = t;
                iv.p_min = *p;
            }
            if t > iv.t_max {
                iv.t_max = t;
                iv.p_max = *p;
            }
        }
        iv
    }
}

/// Proper triangles on crossing planes. Each triangle's section by the other
/// plane lies on the planes' intersection line; the contact is the overlap of
/// the two scalar intervals along that line.
fn cross_plane_contact<T: Scalar>(
    a: &Triangle3<T>,
    b: &Triangle3<T>,
    plane_a: &Plane<T>,
    plane_b: &Plane<T>,
) -> ContactManifold<T> {
    let da = [
        plane_b.signed_distance(&a.a),
        plane_b.signed_distance(&a.b),
        plane_b.signed_distance(&a.c),
    ];
    let db = [
        plane_a.signed_distance(&b.a),
        plane_a.signed_distance(&b.b),
        plane_a.signed_distance(&b.c),
    ];

    let sec_a = plane_section(a, &da);
    let sec_b = plane_section(b, &db);
    if sec_a.len == 0 || sec_b.len == 0 {
        return ContactManifold::empty(); // one triangle entirely on one side
    }

    let dir = plane_a.normal.cross(&plane_b.normal);
    let n = dir.norm();
    if n <= T::tolerance() {
        return ContactManifold::empty(); // near-parallel distinct planes
    }
    let dir = dir * (T::one() / n);

    let ia = LineInterval::from_section(&sec_a, &dir);
    let ib = LineInterval::from_section(&sec_b, &dir);

    let (lo_t, lo_p) = if ia.t_min >= ib.t_min {
        (ia.t_min, ia.p_min)
    } else {
        (ib.t_min, ib.p_min)
    };
    let (hi_t, hi_p) = if ia.t_max <= ib.t_max {
        (ia.t_max, ia.p_max)
    } else {
        (ib.t_max, ib.p_max)
    };

    let merge = T::point_merge_threshold();
    if lo_t > hi_t + merge {
        return ContactManifold::empty();
    }

    let mut m = ContactManifold::with_normal(plane_a.normal);
    if hi_t - lo_t <= merge {
        m.push(lo_p); // touch at a single point; depth stays zero
    } else {
        m.push(lo_p);
        m.push(hi_p);
        m.depth = hi_t - lo_t;
    }
    m
}

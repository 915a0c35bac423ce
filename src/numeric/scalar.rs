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

use num_traits::Float;
use std::fmt::Debug;

/// Floating-point scalar used throughout the crate.
///
/// All numeric tolerances live here as named constants rather than being
/// scattered through the algorithms; they are tuned for unit-scale geometry.
pub trait Scalar: Float + Debug {
    fn from_f64(v: f64) -> Self;

    /// General predicate tolerance (orientation signs, interval clipping).
    fn tolerance() -> Self;

    /// Maximum distance of a vertex from a plane for the vertex to count as
    /// lying on that plane.
    fn coplanarity_threshold() -> Self;

    /// Contact points closer than this are merged into one.
    fn point_merge_threshold() -> Self;

    /// Triangles whose raw normal is shorter than this cannot define a plane.
    fn area_degeneracy_threshold() -> Self;

    /// Returns -1, 0, or +1, treating values within `tolerance` of zero as
    /// zero.
    fn sign(self) -> i8 {
        if self > Self::tolerance() {
            1
        } else if self < -Self::tolerance() {
            -1
        } else {
            0
        }
    }

    fn approx_eq(self, other: Self) -> bool {
        (self - other).abs() < Self::tolerance()
    }
}

impl Scalar for f64 {
    fn from_f64(v: f64) -> Self {
        v
    }

    fn tolerance() -> Self {
        1e-10
    }

    fn coplanarity_threshold() -> Self {
        1e-8
    }

    fn point_merge_threshold() -> Self {
        1e-6
    }

    fn area_degeneracy_threshold() -> Self {
        1e-10
    }
}

impl Scalar for f32 {
    fn from_f64(v: f64) -> Self {
        v as f32
    }

    fn tolerance() -> Self {
        1e-6
    }

    fn coplanarity_threshold() -> Self {
        1e-5
    }

    fn point_merge_threshold() -> Self {
        1e-4
    }

    fn area_degeneracy_threshold() -> Self {
        1e-7
    }
}

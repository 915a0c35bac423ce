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

//! Narrow-phase triangle–triangle contact generation.
//!
//! The entry point is [`collision::contact_manifold`]: given two triangles in
//! 3D space it returns a [`collision::ContactManifold`] holding up to six
//! contact points, a contact normal and a penetration depth. Every relative
//! configuration is handled — coplanar polygon overlap, cross-plane segment
//! contact, shared vertices and edges, and fully degenerate (colinear)
//! triangles.
//!
//! Coordinates must be finite; passing NaN or infinities is a precondition
//! violation, not a checked error. Tolerances are tuned for unit-scale
//! geometry and are exposed as named constants on
//! [`numeric::scalar::Scalar`].

pub mod collision;
pub mod geometry;
pub mod kernel;
pub mod numeric;
pub mod sampling;

// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Allen Core
//!
//! Closed-interval primitives and the thirteen relations of Allen's
//! interval algebra. This crate answers one question precisely: given two
//! ranges over any totally ordered type, how are they positioned relative
//! to each other? Every boundary condition (touching endpoints, shared
//! endpoints, strict ordering) maps to exactly one named outcome.
//!
//! ## Modules
//!
//! - `interval`: A generic closed interval `[lesser, greater]` over any
//!   totally ordered type, normalized at construction, with endpoint
//!   predicates (intersection, containment, precedence), conversions
//!   to/from tuples and `std::ops::RangeInclusive`, and integer point
//!   iteration (`Iterator`, `DoubleEndedIterator`, `ExactSizeIterator`,
//!   `FusedIterator`).
//! - `relation`: The `Relation` enum covering all thirteen ways two
//!   intervals can relate, the classification behind `Interval::relate`,
//!   and the converse mapping for swapped argument order.
//!
//! ## Purpose
//!
//! Scheduling, time-window logic, and geometric range queries routinely
//! need to reason about how ranges overlap, contain, touch, or precede
//! one another. Collapsing that reasoning into booleans loses the cases
//! that matter most at the edges; the thirteen-way classification keeps
//! them distinct, and the normalized interval representation makes the
//! classification total.
//!
//! Refer to each module for detailed APIs and examples.

pub mod interval;
pub mod relation;

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

use crate::interval::Interval;
use std::cmp::Ordering;

/// One of the thirteen ways two closed intervals can be positioned
/// relative to each other, after Allen's interval algebra.
///
/// For any pair of intervals over a totally ordered type, exactly one
/// variant holds: the relations are mutually exclusive and jointly
/// exhaustive, down to every touching or shared endpoint.
/// [`Relation::between`] performs the classification and documents the
/// decision rules; [`Relation::converse`] maps each variant to its image
/// under swapping the two intervals.
///
/// Variants are declared in converse-symmetric order: the converse of the
/// variant at position `i` in [`Relation::ALL`] sits at position `12 - i`,
/// with `Equal` in the middle as its own converse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// The first interval ends before the second begins; there is a gap
    /// between them.
    Before,
    /// The first interval ends exactly where the second begins; they share
    /// that single boundary point.
    Meets,
    /// The intervals overlap; the first starts before the second starts
    /// and ends before the second ends.
    Overlaps,
    /// The first interval starts before the second and both end together.
    FinishedBy,
    /// The first interval extends beyond the second on both sides.
    Contains,
    /// Both intervals start together; the first ends first.
    Starts,
    /// The intervals have identical endpoints.
    Equal,
    /// Both intervals start together; the second ends first.
    StartedBy,
    /// The first interval lies strictly inside the second.
    During,
    /// The first interval starts after the second and both end together.
    Finishes,
    /// The intervals overlap; the second starts before the first starts
    /// and ends before the first ends.
    OverlappedBy,
    /// The first interval begins exactly where the second ends; they share
    /// that single boundary point.
    MetBy,
    /// The first interval begins after the second ends; there is a gap
    /// between them.
    After,
}

impl Relation {
    /// Every relation, in declaration order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use allen_core::relation::Relation;
    ///
    /// assert_eq!(Relation::ALL.len(), 13);
    /// assert_eq!(Relation::ALL[0], Relation::Before);
    /// assert_eq!(Relation::ALL[6], Relation::Equal);
    /// ```
    pub const ALL: [Relation; 13] = [
        Relation::Before,
        Relation::Meets,
        Relation::Overlaps,
        Relation::FinishedBy,
        Relation::Contains,
        Relation::Starts,
        Relation::Equal,
        Relation::StartedBy,
        Relation::During,
        Relation::Finishes,
        Relation::OverlappedBy,
        Relation::MetBy,
        Relation::After,
    ];

    /// Classifies how interval `x` relates to interval `y`.
    ///
    /// The four pairwise endpoint comparisons fully determine the relation.
    /// They are checked in a fixed decision order; the first matching rule
    /// wins:
    ///
    /// 1. Identical endpoint pairs are `Equal`, whether the intervals are
    ///    proper or degenerate.
    /// 2. If `x` ends before `y` begins, the intervals are separated by a
    ///    gap: `Before`.
    /// 3. If `x` ends exactly where `y` begins, the intervals share that
    ///    one point. When both extend away from it the result is `Meets`;
    ///    when one of them is degenerate the shared point is an entire
    ///    interval lying on the other's boundary, which classifies as
    ///    `Overlaps`.
    /// 4. Mirrored, if `x` begins exactly where `y` ends: `MetBy` between
    ///    proper intervals, `OverlappedBy` when one side is degenerate.
    /// 5. If `x` begins after `y` ends: `After`.
    /// 6. Otherwise the intervals share more than a boundary, and the
    ///    comparison of the two lesser endpoints together with the
    ///    comparison of the two greater endpoints selects among the nine
    ///    remaining outcomes.
    ///
    /// The rules are exhaustive and mutually exclusive, so exactly one
    /// variant is returned for every pair of intervals. The classification
    /// satisfies `Relation::between(&x, &y).converse() ==
    /// Relation::between(&y, &x)` for all inputs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use allen_core::interval::Interval;
    /// # use allen_core::relation::Relation;
    ///
    /// let x = Interval::new(2, 4);
    /// let y = Interval::new(3, 7);
    /// assert_eq!(Relation::between(&x, &y), Relation::Overlaps);
    /// assert_eq!(Relation::between(&y, &x), Relation::OverlappedBy);
    /// ```
    pub fn between<T>(x: &Interval<T>, y: &Interval<T>) -> Relation
    where
        T: Ord,
    {
        let lxly = x.lesser().cmp(y.lesser());
        let lxgy = x.lesser().cmp(y.greater());
        let gxly = x.greater().cmp(y.lesser());
        let gxgy = x.greater().cmp(y.greater());

        if lxly == Ordering::Equal && gxgy == Ordering::Equal {
            return Relation::Equal;
        }

        match gxly {
            Ordering::Less => return Relation::Before,
            Ordering::Equal => {
                // x ends on y's lesser endpoint. Meets requires both
                // intervals to extend away from the shared point.
                return if lxly == Ordering::Less && gxgy == Ordering::Less {
                    Relation::Meets
                } else {
                    Relation::Overlaps
                };
            }
            Ordering::Greater => {}
        }

        match lxgy {
            Ordering::Equal => {
                // x begins on y's greater endpoint, mirroring the case
                // above.
                return if lxly == Ordering::Greater && gxgy == Ordering::Greater {
                    Relation::MetBy
                } else {
                    Relation::OverlappedBy
                };
            }
            Ordering::Greater => return Relation::After,
            Ordering::Less => {}
        }

        // The intervals share more than a boundary; the two remaining
        // comparisons decide.
        match (lxly, gxgy) {
            (Ordering::Less, Ordering::Less) => Relation::Overlaps,
            (Ordering::Less, Ordering::Equal) => Relation::FinishedBy,
            (Ordering::Less, Ordering::Greater) => Relation::Contains,
            (Ordering::Equal, Ordering::Less) => Relation::Starts,
            (Ordering::Equal, Ordering::Equal) => Relation::Equal,
            (Ordering::Equal, Ordering::Greater) => Relation::StartedBy,
            (Ordering::Greater, Ordering::Less) => Relation::During,
            (Ordering::Greater, Ordering::Equal) => Relation::Finishes,
            (Ordering::Greater, Ordering::Greater) => Relation::OverlappedBy,
        }
    }

    /// Returns the relation that holds with the two intervals swapped.
    ///
    /// For all intervals `x` and `y`,
    /// `x.relate(&y).converse() == y.relate(&x)`. Applying `converse`
    /// twice yields the original relation; `Equal` is its own converse.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use allen_core::relation::Relation;
    ///
    /// assert_eq!(Relation::Before.converse(), Relation::After);
    /// assert_eq!(Relation::Contains.converse(), Relation::During);
    /// assert_eq!(Relation::Equal.converse(), Relation::Equal);
    /// assert_eq!(Relation::Meets.converse().converse(), Relation::Meets);
    /// ```
    #[inline]
    pub const fn converse(self) -> Relation {
        match self {
            Relation::Before => Relation::After,
            Relation::Meets => Relation::MetBy,
            Relation::Overlaps => Relation::OverlappedBy,
            Relation::FinishedBy => Relation::Finishes,
            Relation::Contains => Relation::During,
            Relation::Starts => Relation::StartedBy,
            Relation::Equal => Relation::Equal,
            Relation::StartedBy => Relation::Starts,
            Relation::During => Relation::Contains,
            Relation::Finishes => Relation::FinishedBy,
            Relation::OverlappedBy => Relation::Overlaps,
            Relation::MetBy => Relation::Meets,
            Relation::After => Relation::Before,
        }
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Relation::Before => write!(f, "Before"),
            Relation::Meets => write!(f, "Meets"),
            Relation::Overlaps => write!(f, "Overlaps"),
            Relation::FinishedBy => write!(f, "FinishedBy"),
            Relation::Contains => write!(f, "Contains"),
            Relation::Starts => write!(f, "Starts"),
            Relation::Equal => write!(f, "Equal"),
            Relation::StartedBy => write!(f, "StartedBy"),
            Relation::During => write!(f, "During"),
            Relation::Finishes => write!(f, "Finishes"),
            Relation::OverlappedBy => write!(f, "OverlappedBy"),
            Relation::MetBy => write!(f, "MetBy"),
            Relation::After => write!(f, "After"),
        }
    }
}

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

use crate::relation::Relation;
use num_traits::PrimInt;
use std::{cmp::Ordering, iter::FusedIterator};

/// A closed interval `[lesser, greater]` over a totally ordered type.
///
/// An `Interval` is built from its two endpoint values in any order and
/// normalizes them at construction, so the smaller value always ends up in
/// `lesser` and the larger in `greater`. Both endpoints belong to the
/// interval; equal endpoints produce a degenerate single-point interval.
///
/// The struct itself places no requirements on `T`. Methods state their own
/// bounds: comparison-based functionality needs `T: Ord`, point iteration
/// needs a primitive integer type.
///
/// # Invariants
/// `lesser` must always be less than or equal to `greater`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval<T> {
    lesser: T,
    greater: T,
}

/// An iterator over the integer points contained in an `Interval`.
///
/// Both endpoints of the closed interval are yielded. Because the final
/// point cannot be stepped past when it equals the type's maximum value,
/// the iterator tracks exhaustion explicitly rather than comparing against
/// a past-the-end position.
///
/// # Examples
///
/// ```rust
/// # use allen_core::interval::Interval;
///
/// let iv = Interval::new(1, 4);
/// let points: Vec<_> = iv.iter().collect();
/// assert_eq!(points, vec![1, 2, 3, 4]);
/// ```
pub struct IntervalIterator<T>
where
    T: PrimInt,
{
    front: T,
    back: T,
    exhausted: bool,
}

impl<T> IntervalIterator<T>
where
    T: PrimInt,
{
    /// Number of points left to yield, or `None` when that count does not
    /// fit in a `usize`.
    ///
    /// The endpoint distance is taken in 128-bit arithmetic; subtracting in
    /// `T` itself would overflow for signed intervals wider than `T::MAX`,
    /// such as the full `i8` range.
    fn remaining(&self) -> Option<usize> {
        if self.exhausted {
            return Some(0);
        }
        let span = match (self.front.to_i128(), self.back.to_i128()) {
            (Some(front), Some(back)) => back.checked_sub(front).map(|span| span as u128),
            // Endpoints beyond the i128 range only occur for u128, where
            // both endpoints widen losslessly and `front <= back` holds.
            _ => match (self.front.to_u128(), self.back.to_u128()) {
                (Some(front), Some(back)) => Some(back - front),
                _ => None,
            },
        };
        span.and_then(|span| usize::try_from(span).ok())
            .and_then(|count| count.checked_add(1))
    }
}

impl<T> Iterator for IntervalIterator<T>
where
    T: PrimInt,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let result = self.front;
        if self.front == self.back {
            self.exhausted = true;
        } else {
            self.front = self.front + T::one();
        }
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining() {
            Some(remaining) => (remaining, Some(remaining)),
            None => (usize::MAX, None),
        }
    }
}

impl<T> DoubleEndedIterator for IntervalIterator<T>
where
    T: PrimInt,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let result = self.back;
        if self.front == self.back {
            self.exhausted = true;
        } else {
            self.back = self.back - T::one();
        }
        Some(result)
    }
}

impl<T> ExactSizeIterator for IntervalIterator<T>
where
    T: PrimInt,
{
    /// # Panics
    ///
    /// Panics if the number of remaining points exceeds `usize::MAX`.
    fn len(&self) -> usize {
        self.remaining()
            .expect("IntervalIterator: remaining length exceeds usize::MAX")
    }
}

impl<T> FusedIterator for IntervalIterator<T> where T: PrimInt {}

impl<T> Interval<T> {
    /// Creates a new `Interval` from two endpoint values given in any order.
    ///
    /// The values are compared once; the smaller becomes `lesser` and the
    /// larger becomes `greater`, so swapping the arguments produces the same
    /// interval. Equal arguments produce a degenerate single-point interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use allen_core::interval::Interval;
    ///
    /// let iv = Interval::new(3, 7);
    /// assert_eq!(iv.lesser(), &3);
    /// assert_eq!(iv.greater(), &7);
    ///
    /// // Argument order does not matter.
    /// assert_eq!(Interval::new(7, 3), iv);
    /// ```
    #[inline]
    pub fn new(a: T, b: T) -> Self
    where
        T: Ord,
    {
        let (lesser, greater) = match a.cmp(&b) {
            Ordering::Greater => (b, a),
            _ => (a, b),
        };
        Self { lesser, greater }
    }

    /// Creates the degenerate interval `[value, value]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use allen_core::interval::Interval;
    ///
    /// let iv = Interval::point(5);
    /// assert_eq!(iv, Interval::new(5, 5));
    /// assert!(iv.is_point());
    /// ```
    #[inline]
    pub fn point(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            lesser: value.clone(),
            greater: value,
        }
    }

    /// Returns the smaller endpoint of the interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use allen_core::interval::Interval;
    ///
    /// let iv = Interval::new(7, 3);
    /// assert_eq!(iv.lesser(), &3);
    /// ```
    #[inline]
    pub const fn lesser(&self) -> &T {
        &self.lesser
    }

    /// Returns the larger endpoint of the interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use allen_core::interval::Interval;
    ///
    /// let iv = Interval::new(7, 3);
    /// assert_eq!(iv.greater(), &7);
    /// ```
    #[inline]
    pub const fn greater(&self) -> &T {
        &self.greater
    }

    /// Consumes the interval and returns its endpoints as a
    /// `(lesser, greater)` pair.
    ///
    /// Note that this returns the normalized pair, which may differ from the
    /// argument order the interval was constructed with.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use allen_core::interval::Interval;
    ///
    /// assert_eq!(Interval::new(3, 7).into_pair(), (3, 7));
    /// assert_eq!(Interval::new(7, 3).into_pair(), (3, 7));
    /// ```
    #[inline]
    pub fn into_pair(self) -> (T, T) {
        (self.lesser, self.greater)
    }

    /// Returns `true` if the interval is degenerate (`lesser == greater`).
    ///
    /// A degenerate interval still contains its single point; a closed
    /// interval is never empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use allen_core::interval::Interval;
    ///
    /// assert!(Interval::new(5, 5).is_point());
    /// assert!(!Interval::new(5, 6).is_point());
    /// ```
    #[inline]
    pub fn is_point(&self) -> bool
    where
        T: Eq,
    {
        self.lesser == self.greater
    }

    /// Returns `true` if `value` lies within the closed interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use allen_core::interval::Interval;
    ///
    /// let iv = Interval::new(0, 10);
    /// assert!(iv.contains_point(&0));
    /// assert!(iv.contains_point(&10));
    /// assert!(!iv.contains_point(&11));
    /// ```
    #[inline]
    pub fn contains_point(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.lesser <= *value && *value <= self.greater
    }

    /// Returns `true` if `other` lies entirely within `self`.
    ///
    /// Shared endpoints count as contained; every interval contains itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use allen_core::interval::Interval;
    ///
    /// let a = Interval::new(0, 10);
    /// assert!(a.contains_interval(&Interval::new(2, 8)));
    /// assert!(a.contains_interval(&Interval::new(0, 10)));
    /// assert!(!a.contains_interval(&Interval::new(5, 11)));
    /// ```
    #[inline]
    pub fn contains_interval(&self, other: &Self) -> bool
    where
        T: Ord,
    {
        self.lesser <= other.lesser && other.greater <= self.greater
    }

    /// Returns `true` if the intervals share at least one point.
    ///
    /// Closed intervals that merely touch at an endpoint share that
    /// endpoint, so they intersect.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use allen_core::interval::Interval;
    ///
    /// let a = Interval::new(0, 10);
    /// assert!(a.intersects(&Interval::new(5, 15)));
    /// assert!(a.intersects(&Interval::new(10, 20))); // shares the point 10
    /// assert!(!a.intersects(&Interval::new(11, 20)));
    /// ```
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool
    where
        T: Ord,
    {
        self.lesser <= other.greater && other.lesser <= self.greater
    }

    /// Returns `true` if the intervals share no point at all.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use allen_core::interval::Interval;
    ///
    /// let a = Interval::new(0, 10);
    /// assert!(a.is_disjoint_from(&Interval::new(11, 20)));
    /// assert!(!a.is_disjoint_from(&Interval::new(10, 20)));
    /// ```
    #[inline]
    pub fn is_disjoint_from(&self, other: &Self) -> bool
    where
        T: Ord,
    {
        !self.intersects(other)
    }

    /// Returns `true` if this interval ends at or before the start of
    /// `other`.
    ///
    /// Touching endpoints are allowed; use [`Interval::strictly_precedes`]
    /// to require a gap.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use allen_core::interval::Interval;
    ///
    /// let a = Interval::new(1, 5);
    /// assert!(a.precedes(&Interval::new(5, 10)));
    /// assert!(a.precedes(&Interval::new(6, 10)));
    /// assert!(!a.precedes(&Interval::new(4, 10)));
    /// ```
    #[inline]
    pub fn precedes(&self, other: &Self) -> bool
    where
        T: Ord,
    {
        self.greater <= other.lesser
    }

    /// Returns `true` if this interval ends before the start of `other`,
    /// with a gap between them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use allen_core::interval::Interval;
    ///
    /// let a = Interval::new(1, 5);
    /// assert!(a.strictly_precedes(&Interval::new(6, 10)));
    /// assert!(!a.strictly_precedes(&Interval::new(5, 10)));
    /// ```
    #[inline]
    pub fn strictly_precedes(&self, other: &Self) -> bool
    where
        T: Ord,
    {
        self.greater < other.lesser
    }

    /// Classifies how this interval relates to `other`.
    ///
    /// Exactly one of the thirteen [`Relation`] variants holds for any pair
    /// of intervals; see the [`relation`](crate::relation) module for the
    /// full catalogue and the classification rules.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use allen_core::interval::Interval;
    /// # use allen_core::relation::Relation;
    ///
    /// let x = Interval::new(2, 3);
    /// let y = Interval::new(3, 7);
    /// assert_eq!(x.relate(&y), Relation::Meets);
    /// assert_eq!(y.relate(&x), Relation::MetBy);
    /// ```
    #[inline]
    pub fn relate(&self, other: &Self) -> Relation
    where
        T: Ord,
    {
        Relation::between(self, other)
    }

    /// Creates an iterator over the integer points of the closed interval.
    ///
    /// # Panics
    ///
    /// The returned iterator's [`ExactSizeIterator::len`] panics if the
    /// interval holds more than `usize::MAX` points. Iteration itself and
    /// [`Iterator::size_hint`] never panic.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use allen_core::interval::Interval;
    ///
    /// let iv = Interval::new(1, 4);
    /// let points: Vec<_> = iv.iter().collect();
    /// assert_eq!(points, vec![1, 2, 3, 4]);
    /// ```
    #[inline]
    pub fn iter(&self) -> IntervalIterator<T>
    where
        T: PrimInt,
    {
        IntervalIterator {
            front: self.lesser,
            back: self.greater,
            exhausted: false,
        }
    }
}

impl<T> Default for Interval<T>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self {
            lesser: T::default(),
            greater: T::default(),
        }
    }
}

impl<T> std::fmt::Debug for Interval<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interval")
            .field("lesser", &self.lesser)
            .field("greater", &self.greater)
            .finish()
    }
}

impl<T> std::fmt::Display for Interval<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.lesser, self.greater)
    }
}

impl<T> std::ops::RangeBounds<T> for Interval<T> {
    fn start_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Included(&self.lesser)
    }

    fn end_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Included(&self.greater)
    }
}

impl<T> IntoIterator for Interval<T>
where
    T: PrimInt,
{
    type Item = T;
    type IntoIter = IntervalIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for &Interval<T>
where
    T: PrimInt,
{
    type Item = T;
    type IntoIter = IntervalIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> From<(T, T)> for Interval<T>
where
    T: Ord,
{
    #[inline]
    fn from(pair: (T, T)) -> Self {
        Self::new(pair.0, pair.1)
    }
}

impl<T> From<Interval<T>> for (T, T) {
    #[inline]
    fn from(iv: Interval<T>) -> Self {
        iv.into_pair()
    }
}

/// Adopts the range's bounds through [`Interval::new`], so a decreasing
/// range such as `5..=3` normalizes instead of converting to an empty range.
impl<T> From<std::ops::RangeInclusive<T>> for Interval<T>
where
    T: Ord,
{
    #[inline]
    fn from(range: std::ops::RangeInclusive<T>) -> Self {
        let (start, end) = range.into_inner();
        Self::new(start, end)
    }
}

impl<T> From<Interval<T>> for std::ops::RangeInclusive<T> {
    #[inline]
    fn from(iv: Interval<T>) -> Self {
        iv.lesser..=iv.greater
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::ops::{Bound, RangeBounds};

    #[test]
    fn test_construction_ordered() {
        let iv = Interval::new(3, 7);
        assert_eq!(iv.lesser(), &3);
        assert_eq!(iv.greater(), &7);
    }

    #[test]
    fn test_construction_swapped() {
        let iv = Interval::new(7, 3);
        assert_eq!(iv.lesser(), &3);
        assert_eq!(iv.greater(), &7);
        assert_eq!(iv, Interval::new(3, 7));
    }

    #[test]
    fn test_construction_degenerate() {
        let iv = Interval::new(5, 5);
        assert_eq!(iv.lesser(), &5);
        assert_eq!(iv.greater(), &5);
        assert!(iv.is_point());
    }

    #[test]
    fn test_construction_non_copy_type() {
        let iv = Interval::new(String::from("b"), String::from("a"));
        assert_eq!(iv.lesser(), "a");
        assert_eq!(iv.greater(), "b");
    }

    #[test]
    fn test_point() {
        let iv = Interval::point(9);
        assert_eq!(iv, Interval::new(9, 9));
        assert!(iv.is_point());
        assert!(!Interval::new(9, 10).is_point());
    }

    #[test]
    fn test_into_pair() {
        assert_eq!(Interval::new(3, 7).into_pair(), (3, 7));
        // Normalized, not the construction order.
        assert_eq!(Interval::new(7, 3).into_pair(), (3, 7));
        assert_eq!(Interval::new(4, 4).into_pair(), (4, 4));
    }

    #[test]
    fn test_contains_point() {
        let iv = Interval::new(0, 10);
        assert!(iv.contains_point(&0)); // Inclusive lower endpoint
        assert!(iv.contains_point(&5));
        assert!(iv.contains_point(&10)); // Inclusive upper endpoint
        assert!(!iv.contains_point(&-1));
        assert!(!iv.contains_point(&11));
    }

    #[test]
    fn test_contains_interval() {
        let main = Interval::new(0, 10);

        // Exact match
        assert!(main.contains_interval(&Interval::new(0, 10)));
        // Strict subset
        assert!(main.contains_interval(&Interval::new(2, 8)));
        // Touching bounds
        assert!(main.contains_interval(&Interval::new(0, 5)));
        assert!(main.contains_interval(&Interval::new(5, 10)));

        // Overflowing bounds
        assert!(!main.contains_interval(&Interval::new(-1, 5)));
        assert!(!main.contains_interval(&Interval::new(5, 11)));

        // Disjoint
        assert!(!main.contains_interval(&Interval::new(20, 30)));
    }

    #[test]
    fn test_intersects() {
        let a = Interval::new(0, 10);

        // Disjoint left
        assert!(!a.intersects(&Interval::new(-5, -1)));
        // Touching left (closed intervals share the endpoint)
        assert!(a.intersects(&Interval::new(-5, 0)));
        // Overlap left
        assert!(a.intersects(&Interval::new(-5, 5)));
        // Contained
        assert!(a.intersects(&Interval::new(2, 8)));
        // Identity
        assert!(a.intersects(&a));
        // Overlap right
        assert!(a.intersects(&Interval::new(5, 15)));
        // Touching right
        assert!(a.intersects(&Interval::new(10, 15)));
        // Disjoint right
        assert!(!a.intersects(&Interval::new(11, 15)));
    }

    #[test]
    fn test_is_disjoint_from() {
        let a = Interval::new(0, 10);
        assert!(a.is_disjoint_from(&Interval::new(11, 15)));
        assert!(a.is_disjoint_from(&Interval::new(-5, -1)));
        // Touching endpoints are shared, hence not disjoint.
        assert!(!a.is_disjoint_from(&Interval::new(10, 15)));
        assert!(!a.is_disjoint_from(&Interval::new(5, 15)));
    }

    #[test]
    fn test_precedes() {
        let a = Interval::new(1, 5);

        // Gap
        assert!(a.precedes(&Interval::new(6, 10)));
        // Touching
        assert!(a.precedes(&Interval::new(5, 10)));
        // Overlapping
        assert!(!a.precedes(&Interval::new(4, 10)));
        // Other side
        assert!(!Interval::new(6, 10).precedes(&a));
    }

    #[test]
    fn test_strictly_precedes() {
        let a = Interval::new(1, 5);

        assert!(a.strictly_precedes(&Interval::new(6, 10)));
        // Touching is not strict
        assert!(!a.strictly_precedes(&Interval::new(5, 10)));
        assert!(!a.strictly_precedes(&Interval::new(4, 10)));
    }

    #[test]
    fn test_relate_method_delegates() {
        let x = Interval::new(2, 4);
        let y = Interval::new(3, 7);
        assert_eq!(x.relate(&y), Relation::between(&x, &y));
        assert_eq!(x.relate(&y), Relation::Overlaps);
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        // Derived ordering compares the normalized pair, lesser first.
        assert!(Interval::new(1, 5) < Interval::new(2, 3));
        assert!(Interval::new(1, 5) < Interval::new(1, 9));
        assert!(Interval::new(2, 2) > Interval::new(1, 9));
    }

    #[test]
    fn test_default() {
        let iv: Interval<i32> = Default::default();
        assert_eq!(iv, Interval::new(0, 0));
        assert!(iv.is_point());
    }

    #[test]
    fn test_iterator() {
        let iv = Interval::new(1, 4);
        let collected: Vec<i32> = iv.iter().collect();
        assert_eq!(collected, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_iterator_single_point() {
        let iv = Interval::new(5, 5);
        let mut iter = iv.iter();
        assert_eq!(iter.next(), Some(5));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_iterator_at_type_max() {
        // The closed upper endpoint must not be stepped past.
        let iv: Interval<u8> = Interval::new(254, 255);
        let collected: Vec<u8> = iv.iter().collect();
        assert_eq!(collected, vec![254, 255]);
    }

    #[test]
    fn test_iterator_rev() {
        let iv = Interval::new(1, 4);
        let collected: Vec<i32> = iv.iter().rev().collect();
        assert_eq!(collected, vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_double_ended_iterator() {
        let iv = Interval::new(1, 4);
        let mut iter = iv.iter();

        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next_back(), Some(4));
        assert_eq!(iter.next(), Some(2));
        assert_eq!(iter.next_back(), Some(3));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn test_exact_size_iterator() {
        let iv = Interval::new(3, 7);
        let mut iter = iv.iter();

        // 3, 4, 5, 6, 7 -> five points.
        assert_eq!(iter.len(), 5);
        assert_eq!(iter.size_hint(), (5, Some(5)));

        iter.next();
        assert_eq!(iter.len(), 4);

        while iter.next().is_some() {}
        assert_eq!(iter.len(), 0);
        assert_eq!(iter.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_iterator_len_full_signed_range() {
        // 256 points; the raw i8 distance does not fit the type itself.
        let iv: Interval<i8> = Interval::new(i8::MIN, i8::MAX);
        let mut iter = iv.iter();
        assert_eq!(iter.len(), 256);
        assert_eq!(iter.size_hint(), (256, Some(256)));

        assert_eq!(iter.next(), Some(i8::MIN));
        assert_eq!(iter.next_back(), Some(i8::MAX));
        assert_eq!(iter.len(), 254);
    }

    #[test]
    fn test_iterator_size_hint_wide_signed_range() {
        // The full i32 range holds 2^32 points.
        let iv: Interval<i32> = Interval::new(i32::MIN, i32::MAX);
        assert_eq!(iv.iter().size_hint(), (4_294_967_296, Some(4_294_967_296)));
        assert_eq!(iv.iter().len(), 4_294_967_296);
    }

    #[test]
    fn test_iterator_size_hint_beyond_usize() {
        // 2^128 points cannot be counted in a usize.
        let huge: Interval<u128> = Interval::new(0, u128::MAX);
        assert_eq!(huge.iter().size_hint(), (usize::MAX, None));

        let wide: Interval<i128> = Interval::new(i128::MIN, i128::MAX);
        assert_eq!(wide.iter().size_hint(), (usize::MAX, None));
    }

    #[test]
    #[should_panic(expected = "remaining length exceeds usize::MAX")]
    fn test_iterator_len_beyond_usize_panics() {
        let huge: Interval<u128> = Interval::new(0, u128::MAX);
        let _ = huge.iter().len();
    }

    #[test]
    fn test_fused_iterator() {
        let iv = Interval::new(0, 1);
        let mut iter = iv.iter();
        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None); // Keeps returning None
    }

    #[test]
    fn test_into_iterator_trait() {
        let iv = Interval::new(0, 3);
        let mut count = 0;
        for i in iv {
            // Consumes iv
            assert_eq!(i, count);
            count += 1;
        }
        assert_eq!(count, 4);
    }

    #[test]
    fn test_into_iterator_ref_trait() {
        let iv = Interval::new(0, 3);
        for (count, i) in (&iv).into_iter().enumerate() {
            // Borrows iv
            assert_eq!(i as usize, count);
        }
        // iv is still valid here
        assert_eq!(iv.lesser(), &0);
    }

    #[test]
    fn test_traits_display_debug() {
        let iv = Interval::new(10, 20);
        assert_eq!(format!("{}", iv), "[10, 20]");
        assert_eq!(format!("{:?}", iv), "Interval { lesser: 10, greater: 20 }");
    }

    #[test]
    fn test_from_tuple() {
        let iv = Interval::from((7, 3));
        assert_eq!(iv, Interval::new(3, 7));
    }

    #[test]
    fn test_into_tuple() {
        let pair: (i32, i32) = Interval::new(7, 3).into();
        assert_eq!(pair, (3, 7));
    }

    #[test]
    fn test_from_range_inclusive() {
        let iv = Interval::from(3..=7);
        assert_eq!(iv, Interval::new(3, 7));
    }

    #[test]
    fn test_from_backwards_range_inclusive() {
        // An empty std range still carries two bounds; they get normalized.
        let iv = Interval::from(7..=3);
        assert_eq!(iv, Interval::new(3, 7));
    }

    #[test]
    fn test_into_range_inclusive() {
        let range: std::ops::RangeInclusive<i32> = Interval::new(3, 7).into();
        assert_eq!(range, 3..=7);
    }

    #[test]
    fn test_range_bounds() {
        let iv = Interval::new(5, 10);

        match iv.start_bound() {
            Bound::Included(&x) => assert_eq!(x, 5),
            _ => panic!("Wrong start bound"),
        }

        match iv.end_bound() {
            Bound::Included(&x) => assert_eq!(x, 10),
            _ => panic!("Wrong end bound"),
        }
    }

    proptest! {
        #[test]
        fn test_normalization_orders_endpoints(a in any::<i64>(), b in any::<i64>()) {
            let iv = Interval::new(a, b);
            prop_assert!(iv.lesser() <= iv.greater());
            prop_assert_eq!(iv.into_pair(), (a.min(b), a.max(b)));
        }

        #[test]
        fn test_construction_is_order_invariant(a in any::<i64>(), b in any::<i64>()) {
            prop_assert_eq!(Interval::new(a, b), Interval::new(b, a));
        }

        #[test]
        fn test_accessors_match_pair(a in any::<i64>(), b in any::<i64>()) {
            let iv = Interval::new(a, b);
            let (lesser, greater) = iv.into_pair();
            prop_assert_eq!(*iv.lesser(), lesser);
            prop_assert_eq!(*iv.greater(), greater);
        }

        #[test]
        fn test_intersects_is_symmetric(
            (a, b) in (any::<i64>(), any::<i64>()),
            (c, d) in (any::<i64>(), any::<i64>()),
        ) {
            let x = Interval::new(a, b);
            let y = Interval::new(c, d);
            prop_assert_eq!(x.intersects(&y), y.intersects(&x));
        }

        #[test]
        fn test_intersects_agrees_with_relate(
            (a, b) in (any::<i64>(), any::<i64>()),
            (c, d) in (any::<i64>(), any::<i64>()),
        ) {
            let x = Interval::new(a, b);
            let y = Interval::new(c, d);
            let shares_a_point = !matches!(x.relate(&y), Relation::Before | Relation::After);
            prop_assert_eq!(x.intersects(&y), shares_a_point);
        }

        #[test]
        fn test_endpoints_are_contained(a in any::<i64>(), b in any::<i64>()) {
            let iv = Interval::new(a, b);
            prop_assert!(iv.contains_point(&a));
            prop_assert!(iv.contains_point(&b));
        }

        #[test]
        fn test_iterator_len_matches_count(a in any::<i8>(), b in any::<i8>()) {
            let iv = Interval::new(a, b);
            prop_assert_eq!(iv.iter().len(), iv.iter().count());
        }
    }
}

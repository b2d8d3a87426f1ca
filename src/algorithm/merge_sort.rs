//! A top-down merge sort over immutable Sequences.

use std::iter::{FusedIterator, Peekable};
use std::slice;

use tracing::trace;

use crate::collections::sequence::Sequence;

/// Sorts a Sequence into non-decreasing order with a merge sort, returning a new Sequence.
///
/// The Sequence is split in two with [`Sequence::split_at`], each half is sorted independently
/// and the sorted halves are combined with [`merge`]. When two elements compare equal during a
/// merge, the one from the second half is emitted first, so this sort is **not** stable with
/// respect to the original position of equal elements.
///
/// # Examples
/// ```
/// # use sequence_lib::{algorithm::sort, seq};
/// let sorted = sort(&seq![541, 56, 23, 12, -1, 0, 7]);
/// assert_eq!(sorted, seq![-1, 0, 7, 12, 23, 56, 541]);
/// ```
pub fn sort<T: Ord + Clone>(seq: &Sequence<T>) -> Sequence<T> {
    sort_by(seq, |a, b| a < b)
}

/// Sorts a Sequence with a merge sort, using `less` as a strict less-than comparison.
///
/// `less(a, b)` must return true only if `a` should be ordered strictly before `b`. See [`sort`]
/// for the details of the algorithm.
///
/// # Examples
/// ```
/// # use sequence_lib::{algorithm::sort_by, seq};
/// let descending = sort_by(&seq![3, 1, 2], |a, b| a > b);
/// assert_eq!(descending, seq![3, 2, 1]);
/// ```
pub fn sort_by<T, F>(seq: &Sequence<T>, mut less: F) -> Sequence<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    sort_recursive(seq, &mut less)
}

fn sort_recursive<T, F>(seq: &Sequence<T>, less: &mut F) -> Sequence<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    if seq.size() <= 1 {
        return seq.clone();
    }

    let split_pos = split_point(seq.size());
    trace!(size = seq.size(), split_pos, "dividing sequence");

    let (first, second) = seq.split_at(split_pos);
    let first = sort_recursive(&first, less);
    let second = sort_recursive(&second, less);

    merge_by(&first, &second, less)
}

/// Returns the last index of the first half when dividing a Sequence of `size` elements, which
/// must be at least 2. The first half receives the extra element of an odd size, and neither half
/// is ever empty.
pub(crate) const fn split_point(size: usize) -> usize {
    (size - 1) / 2
}

/// Merges two sorted Sequences into a single sorted Sequence.
///
/// If either Sequence is empty the result is equal to the other. Otherwise the fronts are compared
/// repeatedly: the front of `first` is taken only if it is strictly less than the front of
/// `second`, so ties favour `second`.
///
/// # Examples
/// ```
/// # use sequence_lib::{algorithm::merge, seq};
/// assert_eq!(merge(&seq![1, 4, 9], &seq![2, 3, 10]), seq![1, 2, 3, 4, 9, 10]);
/// ```
pub fn merge<T: Ord + Clone>(first: &Sequence<T>, second: &Sequence<T>) -> Sequence<T> {
    merge_by(first, second, |a, b| a < b)
}

/// Merges two Sequences sorted according to `less` into a single sorted Sequence. See [`merge`].
pub fn merge_by<T, F>(first: &Sequence<T>, second: &Sequence<T>, less: F) -> Sequence<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    trace!(first = first.size(), second = second.size(), "merging sorted sequences");

    let merged = MergeIter {
        first: first.iter().peekable(),
        second: second.iter().peekable(),
        less,
    };

    merged.cloned().collect()
}

/// Yields the elements of two sorted slices in merged order. Iterative so that long merges don't
/// grow the stack.
struct MergeIter<'a, T, F> {
    first: Peekable<slice::Iter<'a, T>>,
    second: Peekable<slice::Iter<'a, T>>,
    less: F,
}

impl<'a, T, F> Iterator for MergeIter<'a, T, F>
where
    F: FnMut(&T, &T) -> bool,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match (self.first.peek().copied(), self.second.peek().copied()) {
            (Some(a), Some(b)) => {
                if (self.less)(a, b) {
                    self.first.next()
                } else {
                    self.second.next()
                }
            },
            (Some(_), None) => self.first.next(),
            (None, _) => self.second.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.first.len() + self.second.len();
        (len, Some(len))
    }
}

impl<'a, T, F> ExactSizeIterator for MergeIter<'a, T, F> where F: FnMut(&T, &T) -> bool {}

impl<'a, T, F> FusedIterator for MergeIter<'a, T, F> where F: FnMut(&T, &T) -> bool {}

impl<T: Ord + Clone> Sequence<T> {
    /// Returns a sorted copy of the Sequence. See [`sort`].
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::seq;
    /// assert_eq!(seq![3, 1, 2].sort(), seq![1, 2, 3]);
    /// ```
    pub fn sort(&self) -> Sequence<T> {
        sort(self)
    }
}

impl<T: Clone> Sequence<T> {
    /// Returns a copy of the Sequence sorted with the strict less-than comparison `less`. See
    /// [`sort_by`].
    pub fn sort_by<F>(&self, less: F) -> Sequence<T>
    where
        F: FnMut(&T, &T) -> bool,
    {
        sort_by(self, less)
    }
}

use std::ops::{Range, RangeInclusive};

use super::Sequence;

impl<T> Sequence<T>
where
    Range<T>: Iterator<Item = T>,
{
    /// Creates a Sequence of every integer from `range.start` up to but excluding `range.end`.
    /// An empty or backwards range produces an empty Sequence.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::{collections::sequence::Sequence, seq};
    /// assert_eq!(Sequence::range(0..5), seq![0, 1, 2, 3, 4]);
    /// assert_eq!(Sequence::range(-3..3), seq![-3, -2, -1, 0, 1, 2]);
    /// assert_eq!(Sequence::range(3..-3), Sequence::new());
    /// ```
    pub fn range(range: Range<T>) -> Sequence<T> {
        range.collect()
    }
}

impl<T> Sequence<T>
where
    RangeInclusive<T>: Iterator<Item = T>,
{
    /// Creates a Sequence of every integer from `range.start()` up to and including `range.end()`.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::{collections::sequence::Sequence, seq};
    /// assert_eq!(Sequence::range_inclusive(-2..=2), seq![-2, -1, 0, 1, 2]);
    /// assert_eq!(Sequence::range_inclusive(b'a'..=b'c'), seq![b'a', b'b', b'c']);
    /// ```
    pub fn range_inclusive(range: RangeInclusive<T>) -> Sequence<T> {
        range.collect()
    }
}

/// Creates a Sequence of the indices `0..len`.
///
/// # Examples
/// ```
/// # use sequence_lib::{collections::sequence::index_sequence, seq};
/// assert_eq!(index_sequence(4), seq![0_usize, 1, 2, 3]);
/// ```
pub fn index_sequence(len: usize) -> Sequence<usize> {
    Sequence::range(0..len)
}

use std::iter;

use super::Sequence;
use crate::util::error::{EmptySequence, IndexOutOfBounds};
use crate::util::result::ResultExtension;

impl<T> Sequence<T> {
    /// Creates a new Sequence by applying `func` to each element in order. The resulting Sequence
    /// has the same length, but may have a different element type.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::seq;
    /// assert_eq!(seq![1, 2, 3].transform(|x| x * 2), seq![2, 4, 6]);
    /// assert_eq!(seq![1, 2, 3].transform(|&x| x > 1), seq![false, true, true]);
    /// ```
    pub fn transform<U, F>(&self, func: F) -> Sequence<U>
    where
        F: FnMut(&T) -> U,
    {
        self.iter().map(func).collect()
    }

    /// Concatenates any number of Sequences, in order.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::{collections::sequence::Sequence, seq};
    /// let joined = Sequence::concat([seq![1, 2], seq![], seq![3]]);
    /// assert_eq!(joined, seq![1, 2, 3]);
    /// ```
    pub fn concat<I>(sequences: I) -> Sequence<T>
    where
        I: IntoIterator<Item = Sequence<T>>,
    {
        sequences.into_iter().flatten().collect()
    }
}

impl<T: Clone> Sequence<T> {
    /// Returns a new Sequence with `value` added to the end.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::seq;
    /// assert_eq!(seq![1, 2, 3].push_back(4), seq![1, 2, 3, 4]);
    /// ```
    pub fn push_back(&self, value: T) -> Sequence<T> {
        self.iter().cloned().chain(iter::once(value)).collect()
    }

    /// Returns a new Sequence with `value` added to the front.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::seq;
    /// assert_eq!(seq![1, 2, 3].push_front(0), seq![0, 1, 2, 3]);
    /// ```
    pub fn push_front(&self, value: T) -> Sequence<T> {
        iter::once(value).chain(self.iter().cloned()).collect()
    }

    /// Returns a new Sequence without the last element.
    ///
    /// # Panics
    /// Panics if the Sequence is empty.
    #[track_caller]
    pub fn pop_back(&self) -> Sequence<T> {
        self.try_pop_back().throw()
    }

    /// Returns a new Sequence without the last element, or an [`Err`] if there is no element to
    /// remove.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::{collections::sequence::{EmptySequence, Sequence}, seq};
    /// assert_eq!(seq![1, 2, 3].try_pop_back(), Ok(seq![1, 2]));
    /// assert_eq!(Sequence::<i32>::new().try_pop_back(), Err(EmptySequence));
    /// ```
    pub fn try_pop_back(&self) -> Result<Sequence<T>, EmptySequence> {
        match self.split_last() {
            Some((_, rest)) => Ok(Sequence::from(rest)),
            None => Err(EmptySequence),
        }
    }

    /// Returns a new Sequence without the first element.
    ///
    /// # Panics
    /// Panics if the Sequence is empty.
    #[track_caller]
    pub fn pop_front(&self) -> Sequence<T> {
        self.try_pop_front().throw()
    }

    /// Returns a new Sequence without the first element, or an [`Err`] if there is no element to
    /// remove.
    pub fn try_pop_front(&self) -> Result<Sequence<T>, EmptySequence> {
        match self.split_first() {
            Some((_, rest)) => Ok(Sequence::from(rest)),
            None => Err(EmptySequence),
        }
    }

    /// Returns the elements from the start of the Sequence up to and including `pos`.
    ///
    /// # Panics
    /// Panics if `pos` is out of bounds of the Sequence.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::seq;
    /// assert_eq!(seq![1, 2, 3].split_first_part(0), seq![1]);
    /// assert_eq!(seq![1, 2, 3].split_first_part(2), seq![1, 2, 3]);
    /// ```
    #[track_caller]
    pub fn split_first_part(&self, pos: usize) -> Sequence<T> {
        self.try_split_first_part(pos).throw()
    }

    /// Returns the elements from the start of the Sequence up to and including `pos`, or an [`Err`]
    /// if `pos` is out of bounds.
    pub fn try_split_first_part(&self, pos: usize) -> Result<Sequence<T>, IndexOutOfBounds> {
        self.check_index(pos)?;
        Ok(Sequence::from(&self[..=pos]))
    }

    /// Returns the elements after `pos`, which is empty if `pos` is the last index.
    ///
    /// `pos` must still refer to an element: an index past the end is an error rather than another
    /// way of producing an empty Sequence, so `split_second_part` of an empty Sequence always fails.
    ///
    /// # Panics
    /// Panics if `pos` is out of bounds of the Sequence.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::{collections::sequence::Sequence, seq};
    /// assert_eq!(seq![1, 2, 3].split_second_part(0), seq![2, 3]);
    /// assert_eq!(seq![1, 2, 3].split_second_part(2), Sequence::new());
    /// ```
    #[track_caller]
    pub fn split_second_part(&self, pos: usize) -> Sequence<T> {
        self.try_split_second_part(pos).throw()
    }

    /// Returns the elements after `pos`, or an [`Err`] if `pos` is out of bounds. As with
    /// [`split_second_part`](Sequence::split_second_part), only `pos < size()` is accepted.
    pub fn try_split_second_part(&self, pos: usize) -> Result<Sequence<T>, IndexOutOfBounds> {
        self.check_index(pos)?;
        Ok(Sequence::from(&self[pos + 1..]))
    }

    /// Splits the Sequence after `pos`, returning `[0, pos]` and `[pos + 1, end)`.
    ///
    /// # Panics
    /// Panics if `pos` is out of bounds of the Sequence.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::seq;
    /// let (first, second) = seq![1, 2, 3, 4].split_at(1);
    /// assert_eq!(first, seq![1, 2]);
    /// assert_eq!(second, seq![3, 4]);
    /// ```
    #[track_caller]
    pub fn split_at(&self, pos: usize) -> (Sequence<T>, Sequence<T>) {
        self.try_split_at(pos).throw()
    }

    /// Splits the Sequence after `pos`, or returns an [`Err`] if `pos` is out of bounds.
    pub fn try_split_at(
        &self,
        pos: usize,
    ) -> Result<(Sequence<T>, Sequence<T>), IndexOutOfBounds> {
        self.check_index(pos)?;
        let (first, second) = (**self).split_at(pos + 1);
        Ok((Sequence::from(first), Sequence::from(second)))
    }

    /// Returns a new Sequence with `value` inserted immediately before the element at `pos`. A
    /// `pos` equal to the size of the Sequence appends the value.
    ///
    /// # Panics
    /// Panics if `pos` is greater than the size of the Sequence.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::seq;
    /// assert_eq!(seq![1, 2, 3].insert(1, 10), seq![1, 10, 2, 3]);
    /// assert_eq!(seq![1, 2, 3].insert(3, 10), seq![1, 2, 3, 10]);
    /// ```
    #[track_caller]
    pub fn insert(&self, pos: usize, value: T) -> Sequence<T> {
        self.try_insert(pos, value).throw()
    }

    /// Returns a new Sequence with `value` inserted before `pos`, or an [`Err`] if `pos` is greater
    /// than the size of the Sequence.
    pub fn try_insert(&self, pos: usize, value: T) -> Result<Sequence<T>, IndexOutOfBounds> {
        if pos > self.len() {
            return Err(IndexOutOfBounds {
                index: pos,
                len: self.len(),
            });
        }

        let (before, after) = (**self).split_at(pos);
        Ok(before.iter().cloned().chain(iter::once(value)).chain(after.iter().cloned()).collect())
    }

    /// Returns a new Sequence without the element at `pos`.
    ///
    /// # Panics
    /// Panics if `pos` is out of bounds of the Sequence.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::seq;
    /// assert_eq!(seq![1, 2, 3].erase_at(0), seq![2, 3]);
    /// assert_eq!(seq![1, 2, 3].erase_at(2), seq![1, 2]);
    /// ```
    #[track_caller]
    pub fn erase_at(&self, pos: usize) -> Sequence<T> {
        self.try_erase_at(pos).throw()
    }

    /// Returns a new Sequence without the element at `pos`, or an [`Err`] if `pos` is out of bounds.
    pub fn try_erase_at(&self, pos: usize) -> Result<Sequence<T>, IndexOutOfBounds> {
        self.check_index(pos)?;
        Ok(self[..pos].iter().chain(&self[pos + 1..]).cloned().collect())
    }

    /// Returns a new Sequence holding the elements of self followed by the elements of `other`.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::seq;
    /// assert_eq!(seq![1, 2, 3].append(&seq![4, 5, 6]), seq![1, 2, 3, 4, 5, 6]);
    /// ```
    pub fn append(&self, other: &Sequence<T>) -> Sequence<T> {
        self.iter().chain(other.iter()).cloned().collect()
    }

    /// Returns a new Sequence holding the elements of self followed by the elements of each of
    /// `others`, in order. Appending no Sequences returns an equal copy of self.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::{collections::sequence::Sequence, seq};
    /// let seq = seq![1, 2, 3];
    /// assert_eq!(seq.append_all([&seq![4, 5], &seq![6]]), seq![1, 2, 3, 4, 5, 6]);
    ///
    /// let nothing: [&Sequence<i32>; 0] = [];
    /// assert_eq!(seq.append_all(nothing), seq);
    /// ```
    pub fn append_all<'a, I>(&self, others: I) -> Sequence<T>
    where
        I: IntoIterator<Item = &'a Sequence<T>>,
        T: 'a,
    {
        self.iter()
            .chain(others.into_iter().flat_map(|other| other.iter()))
            .cloned()
            .collect()
    }

    /// Returns a new Sequence with every element equal to `value` removed. Erasing a value that
    /// isn't present returns an equal Sequence.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::seq;
    /// assert_eq!(seq![1, 2, 3, 3, 1].erase(&1), seq![2, 3, 3]);
    /// assert_eq!(seq![1, 2, 3].erase(&4), seq![1, 2, 3]);
    /// ```
    pub fn erase(&self, value: &T) -> Sequence<T>
    where
        T: PartialEq,
    {
        self.filter(|element| element != value)
    }

    /// Returns a new Sequence with only the elements that satisfy `predicate`, in their original
    /// order.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::seq;
    /// assert_eq!(seq![1, 2, 3].filter(|&x| x != 2), seq![1, 3]);
    /// ```
    pub fn filter<P>(&self, mut predicate: P) -> Sequence<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().filter(|element| predicate(element)).cloned().collect()
    }

    /// Returns a new Sequence holding `times` copies of self, one after another. Repeating zero
    /// times produces an empty Sequence.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::{collections::sequence::Sequence, seq};
    /// assert_eq!(seq![1, 2].repeat(3), seq![1, 2, 1, 2, 1, 2]);
    /// assert_eq!(seq![1, 2].repeat(0), Sequence::new());
    /// ```
    pub fn repeat(&self, times: usize) -> Sequence<T> {
        if self.is_empty() || times == 0 {
            return Sequence::new();
        }

        iter::repeat_n(&**self, times).flatten().cloned().collect()
    }

    /// Returns a new Sequence with the elements in reverse order.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::seq;
    /// assert_eq!(seq![1, 2, 3].reverse(), seq![3, 2, 1]);
    /// ```
    pub fn reverse(&self) -> Sequence<T> {
        self.iter().rev().cloned().collect()
    }

    /// Converts every element into a wider type, allowing Sequences of different element types to
    /// be appended once they agree on a common one.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::{collections::sequence::Sequence, seq};
    /// let small: Sequence<u8> = seq![1, 2];
    /// let large: Sequence<i64> = seq![-300];
    /// assert_eq!(small.cast::<i64>().append(&large), seq![1, 2, -300]);
    /// ```
    pub fn cast<U: From<T>>(&self) -> Sequence<U> {
        self.transform(|element| U::from(element.clone()))
    }
}

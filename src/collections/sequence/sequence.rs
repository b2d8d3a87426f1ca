use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::iter::{Product, Sum};
use std::ops::Deref;

use crate::collections::contiguous::Array;
use crate::util::error::IndexOutOfBounds;
use crate::util::result::ResultExtension;

/// An immutable, ordered, fixed-length list of elements of a single type.
///
/// A Sequence never changes once it has been constructed. Every operation which would modify it,
/// such as [`push_back`](Sequence::push_back) or [`erase_at`](Sequence::erase_at), instead returns
/// a brand new Sequence and leaves the receiver untouched. The length is part of a Sequence's
/// identity: two Sequences are equal only if they have the same length and pairwise equal
/// elements.
///
/// Sequence implements [`Deref<Target = [T]>`](Deref) (but not `DerefMut`), so all of the read-only
/// slice methods are available for borrowed access and iteration.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Sequence.
/// - `m`: The number of items in the other Sequence(s).
///
/// | Method | Complexity |
/// |-|-|
/// | `size` | `O(1)` |
/// | `front/back/at` | `O(1)` |
/// | `sum/product` | `O(n)` |
/// | `push_front/back` | `O(n)` |
/// | `pop_front/back` | `O(n)` |
/// | `split_at` | `O(n)` |
/// | `insert/erase/erase_at` | `O(n)` |
/// | `append` | `O(n+m)` |
/// | `filter/transform/reverse` | `O(n)` |
/// | `repeat` | `O(n * times)` |
///
/// Every operation which produces a new Sequence is `O(n)` because it copies the elements it keeps.
pub struct Sequence<T> {
    pub(crate) arr: Array<T>,
}

impl<T> Sequence<T> {
    /// Creates a new, empty Sequence.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::collections::sequence::Sequence;
    /// let seq: Sequence<i32> = Sequence::new();
    /// assert_eq!(seq.size(), 0);
    /// ```
    pub fn new() -> Sequence<T> {
        Sequence {
            arr: Array::new(),
        }
    }

    /// Returns the number of elements in the Sequence.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::seq;
    /// assert_eq!(seq![1, 2, 3].size(), 3);
    /// ```
    pub const fn size(&self) -> usize {
        self.arr.size()
    }

    /// Returns the number of elements in the Sequence, the same as [`Sequence::size`].
    pub const fn len(&self) -> usize {
        self.arr.size()
    }

    /// Returns true if the Sequence contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.arr.size() == 0
    }

    /// Returns a reference to the first element of the Sequence.
    ///
    /// # Panics
    /// Panics if the Sequence is empty.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::seq;
    /// assert_eq!(*seq!['a', 'b', 'c'].front(), 'a');
    /// ```
    #[track_caller]
    pub fn front(&self) -> &T {
        self.try_front().throw()
    }

    /// Returns a reference to the first element of the Sequence, returning an [`Err`] if the
    /// Sequence is empty rather than panicking.
    pub fn try_front(&self) -> Result<&T, IndexOutOfBounds> {
        self.try_at(0)
    }

    /// Returns a reference to the last element of the Sequence.
    ///
    /// # Panics
    /// Panics if the Sequence is empty.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::seq;
    /// assert_eq!(*seq!['a', 'b', 'c'].back(), 'c');
    /// ```
    #[track_caller]
    pub fn back(&self) -> &T {
        self.try_back().throw()
    }

    /// Returns a reference to the last element of the Sequence, returning an [`Err`] if the
    /// Sequence is empty rather than panicking.
    pub fn try_back(&self) -> Result<&T, IndexOutOfBounds> {
        match self.len().checked_sub(1) {
            Some(last) => self.try_at(last),
            None => Err(IndexOutOfBounds {
                index: 0,
                len: 0,
            }),
        }
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the Sequence.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::seq;
    /// let seq = seq![10, 20, 30];
    /// assert_eq!(*seq.at(1), 20);
    /// ```
    #[track_caller]
    pub fn at(&self, index: usize) -> &T {
        self.try_at(index).throw()
    }

    /// Returns a reference to the element at `index`, returning an [`Err`] on a failure rather than
    /// panicking.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::seq;
    /// # use sequence_lib::collections::sequence::IndexOutOfBounds;
    /// let seq = seq![10, 20, 30];
    /// assert_eq!(seq.try_at(2), Ok(&30));
    /// assert_eq!(seq.try_at(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    /// ```
    pub fn try_at(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.arr.get(index).ok_or(IndexOutOfBounds {
            index,
            len: self.len(),
        })
    }

    /// Consumes the Sequence, returning the [`Array`] that holds its elements.
    pub fn into_array(self) -> Array<T> {
        self.arr
    }

    /// Checks that `index` refers to an element of the Sequence.
    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index < self.len() {
            Ok(())
        } else {
            Err(IndexOutOfBounds {
                index,
                len: self.len(),
            })
        }
    }
}

impl<T: Clone> Sequence<T> {
    /// Creates an [`Array`] holding a copy of each element, in the same order.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::seq;
    /// let arr = seq![1, 2, 3].to_array();
    /// assert_eq!(&*arr, &[1, 2, 3]);
    /// ```
    pub fn to_array(&self) -> Array<T> {
        self.arr.clone()
    }

    /// Creates any container which can be collected from an iterator, holding a copy of each
    /// element in the same order.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::seq;
    /// # use std::collections::VecDeque;
    /// let deque: VecDeque<_> = seq![1, 2, 3].to_container();
    /// assert_eq!(deque, [1, 2, 3]);
    /// ```
    pub fn to_container<C: FromIterator<T>>(&self) -> C {
        self.iter().cloned().collect()
    }
}

impl<T: Clone + Sum<T>> Sequence<T> {
    /// Returns the sum of all elements. The sum of an empty Sequence is zero.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::{collections::sequence::Sequence, seq};
    /// assert_eq!(seq![1, 2, 3, 4].sum(), 10);
    /// assert_eq!(Sequence::<i32>::new().sum(), 0);
    /// ```
    pub fn sum(&self) -> T {
        self.iter().cloned().sum()
    }
}

impl<T: Clone + Product<T>> Sequence<T> {
    /// Returns the product of all elements.
    ///
    /// The product of an empty Sequence is the multiplicative identity, one, rather than zero. This
    /// keeps `a.append(&b).product() == a.product() * b.product()` true when either side is empty.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::{collections::sequence::Sequence, seq};
    /// assert_eq!(seq![1, 2, 3, 4].product(), 24);
    /// assert_eq!(Sequence::<i32>::new().product(), 1);
    /// ```
    pub fn product(&self) -> T {
        self.iter().cloned().product()
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Sequence {
            arr: iter.into_iter().collect(),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(value: [T; N]) -> Self {
        Sequence {
            arr: Array::from(value),
        }
    }
}

impl<T: Clone> From<&[T]> for Sequence<T> {
    fn from(value: &[T]) -> Self {
        value.iter().cloned().collect()
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(value: Vec<T>) -> Self {
        value.into_iter().collect()
    }
}

impl<T> From<Array<T>> for Sequence<T> {
    fn from(value: Array<T>) -> Self {
        Sequence {
            arr: value,
        }
    }
}

impl<T> From<Sequence<T>> for Array<T> {
    fn from(value: Sequence<T>) -> Self {
        value.arr
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for Sequence<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.arr
    }
}

impl<T> AsRef<[T]> for Sequence<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> Borrow<[T]> for Sequence<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T: Clone> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        Sequence {
            arr: self.arr.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.arr == other.arr
    }
}

impl<T: Eq> Eq for Sequence<T> {}

impl<T: Hash> Hash for Sequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.arr.hash(state);
    }
}

impl<T: Debug> Debug for Sequence<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence")
            .field("contents", &&**self)
            .field("size", &self.size())
            .finish()
    }
}

impl<T: Debug> Display for Sequence<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

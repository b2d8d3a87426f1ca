//! A module containing [`Sequence`] and associated types.
//!
//! A [`Sequence`] is an immutable list of values. It is built once, from a literal list with
//! [`seq!`](crate::seq), an iterator, or one of the range generators, and every further operation
//! produces a new Sequence rather than changing an existing one.
//!
//! Operations which can fail come in two forms. The plain form (e.g.
//! [`at`](Sequence::at)) panics with a descriptive message, while the `try_` form (e.g.
//! [`try_at`](Sequence::try_at)) returns a [`Result`] with one of the errors exported here.
//! [`SequenceError`] covers both, so checked operations can be chained with `?`:
//!
//! ```
//! # use sequence_lib::{collections::sequence::SequenceError, seq};
//! fn second_of_tail() -> Result<i32, SequenceError> {
//!     let tail = seq![1, 2, 3].try_pop_front()?;
//!     Ok(*tail.try_at(1)?)
//! }
//! assert_eq!(second_of_tail(), Ok(3));
//! ```

mod generate;
mod iter;
mod ops;
mod sequence;
mod tests;

pub use generate::*;
pub use iter::*;
pub use sequence::*;
#[doc(inline)]
pub use crate::util::error::{EmptySequence, IndexOutOfBounds, SequenceError};

/// Creates a [`Sequence`] from a literal list of values.
///
/// # Examples
/// ```
/// # use sequence_lib::{collections::sequence::Sequence, seq};
/// let seq = seq![541, 56, 23];
/// assert_eq!(seq.size(), 3);
///
/// let empty: Sequence<u8> = seq![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! seq {
    () => {
        $crate::collections::sequence::Sequence::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::collections::sequence::Sequence::from([$($value),+])
    };
}

//! Algorithms operating on [`Sequence`](crate::collections::sequence::Sequence)s.
//!
//! Like the Sequence itself, every algorithm here leaves its input untouched and returns a new
//! Sequence holding the result.
#![warn(missing_docs)]

pub mod merge_sort;

#[doc(inline)]
pub use merge_sort::{merge, merge_by, sort, sort_by};

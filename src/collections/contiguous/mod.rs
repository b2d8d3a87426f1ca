//! Contiguous collection types. Currently just [`Array`], the runtime sized buffer that backs every
//! [`Sequence`](crate::collections::sequence::Sequence).
#![warn(missing_docs)]

pub mod array;

#[doc(inline)]
pub use array::Array;

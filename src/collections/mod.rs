//! Collection types built on a hand-managed heap allocation.
//!
//! # Purpose
//! [`Array`](contiguous::Array) owns the memory, while [`Sequence`](sequence::Sequence) and
//! [`TypeList`](type_list::TypeList) build an immutable API on top of it.
//!
//! # Method
//! Applicable types here implement [`Deref<Target = [T]>`](std::ops::Deref), which saves me from
//! writing some of the more repetitive functionality. None of them implement DerefMut.

#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "sequence")]
pub mod sequence;
#[cfg(feature = "type-list")]
pub mod type_list;

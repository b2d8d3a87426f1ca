//! This crate is my attempt at writing an immutable sequence type, along with the handful of
//! things that sit on top of it.
//!
//! # Purpose
//! This crate is a learning project, with no expectation for it to be used in production. The
//! central type, [`Sequence`](collections::sequence::Sequence), is a list which never changes once
//! it has been built: pushing, popping, splitting, inserting and erasing all produce a new Sequence
//! and leave the original alone. On top of that sit a merge sort in [`algorithm`] and a
//! [`TypeList`](collections::type_list::TypeList), which is a Sequence of types rather than
//! values.
//!
//! # Method
//! Sequences are stored in an [`Array`](collections::contiguous::Array), a fixed-size heap
//! allocation that I manage by hand instead of reaching for [`Vec`]. Both types implement
//! [`Deref<Target = [T]>`](std::ops::Deref) (but never DerefMut), which saves me from rewriting
//! read-only slice functionality and keeps the contents immutable.
//!
//! # Error Handling
//! Every operation which can fail comes in two forms. The plain form panics with a descriptive
//! message, because it isn't very ergonomic to handle an error on every call to
//! [`at`](collections::sequence::Sequence::at) when you already know the index is valid. The
//! `try_` form returns a [`Result`] instead.
//!
//! The errors are strongly typed: small structs which implement [`Error`](std::error::Error), and
//! an enum, [`SequenceError`](collections::sequence::SequenceError), which any of them convert
//! into so that checked operations can be chained with `?`.
//!
//! # Dependencies
//! This crate depends on some derive macros because they're helpful and remove the need for some
//! very repetitive programming. It also emits [`tracing`] events, so failing unchecked operations
//! and the steps of a sort can be observed by installing a subscriber. Nothing is logged unless a
//! subscriber is installed.
//!
//! # Features
//! - `sequence`: [`Sequence`](collections::sequence::Sequence) and the [`seq!`] macro.
//! - `type-list`: [`TypeList`](collections::type_list::TypeList) and the [`type_list!`] macro.
//! - `sort`: The merge sort in [`algorithm`].
//!
//! All of them are enabled by default.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;
#[cfg(feature = "sort")]
pub mod algorithm;

pub(crate) mod util;

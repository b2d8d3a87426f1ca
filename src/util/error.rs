use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An index was outside of the bounds of a sequence. Produced by every indexed accessor or
/// mutator, including [`front`](crate::collections::sequence::Sequence::front) and
/// [`back`](crate::collections::sequence::Sequence::back) on an empty sequence.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Index {index} out of bounds for collection with {len} elements!")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

/// An element was removed from a sequence that has none.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Unable to remove an element from an empty sequence!")]
pub struct EmptySequence;

/// Any of the errors that a checked sequence operation can produce, for use with `?` when several
/// kinds of checked operation are chained.
#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    IndexOutOfBounds(IndexOutOfBounds),
    EmptySequence(EmptySequence),
}

//! A module containing [`TypeList`], an ordered list of types, and its element type [`TypeKey`].
//!
//! TypeList is the type-level counterpart of a [`Sequence`](crate::collections::sequence::Sequence).
//! Rather than keeping a second implementation of the same operations, it stores a Sequence of
//! [`TypeKey`]s and builds its operations from the Sequence's.

mod type_key;
mod type_list;

pub use type_key::*;
pub use type_list::*;

/// Creates a [`TypeList`] from a list of types.
///
/// # Examples
/// ```
/// # use sequence_lib::{collections::type_list::TypeList, type_list};
/// let list = type_list![u8, &'static str, Vec<u8>];
/// assert_eq!(list.size(), 3);
/// assert_eq!(type_list![], TypeList::new());
/// ```
#[macro_export]
macro_rules! type_list {
    () => {
        $crate::collections::type_list::TypeList::new()
    };
    ($($ty:ty),+ $(,)?) => {
        <$crate::collections::type_list::TypeList as ::core::iter::FromIterator<_>>::from_iter([
            $($crate::collections::type_list::TypeKey::of::<$ty>()),+
        ])
    };
}

use std::fmt::{self, Debug, Display, Formatter};
use std::ops::Deref;

use super::TypeKey;
use crate::collections::sequence::{IndexOutOfBounds, Sequence};
use crate::util::result::ResultExtension;

/// An immutable, ordered list of types.
///
/// TypeList is a [`Sequence`] of [`TypeKey`]s, so it shares the Sequence's guarantees: it never
/// changes after construction and every operation returns a new TypeList. Types are identified by
/// their [`TypeId`](std::any::TypeId), which limits the list to `'static` types.
///
/// # Examples
/// ```
/// # use sequence_lib::type_list;
/// let list = type_list![u8, String].append::<bool>();
/// assert_eq!(list.size(), 3);
/// assert_eq!(list.index_of::<String>(), Some(1));
/// assert!(list.nth(2).is::<bool>());
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct TypeList {
    pub(crate) keys: Sequence<TypeKey>,
}

impl TypeList {
    /// Creates a new TypeList with no types.
    pub fn new() -> TypeList {
        TypeList {
            keys: Sequence::new(),
        }
    }

    /// Creates a new TypeList holding only `T`.
    pub fn of<T: ?Sized + 'static>() -> TypeList {
        TypeList::new().append::<T>()
    }

    /// Returns the number of types in the TypeList.
    pub const fn size(&self) -> usize {
        self.keys.size()
    }

    /// Returns the number of types in the TypeList, the same as [`TypeList::size`].
    pub const fn len(&self) -> usize {
        self.keys.size()
    }

    /// Returns true if the TypeList contains no types.
    pub const fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the underlying Sequence of [`TypeKey`]s.
    pub const fn keys(&self) -> &Sequence<TypeKey> {
        &self.keys
    }

    /// Returns a new TypeList with `T` added to the end.
    pub fn append<T: ?Sized + 'static>(&self) -> TypeList {
        self.keys.push_back(TypeKey::of::<T>()).into()
    }

    /// Returns a new TypeList with `T` added to the front.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::type_list;
    /// assert_eq!(type_list![u8].prepend::<i8>(), type_list![i8, u8]);
    /// ```
    pub fn prepend<T: ?Sized + 'static>(&self) -> TypeList {
        self.keys.push_front(TypeKey::of::<T>()).into()
    }

    /// Returns a new TypeList holding the types of self followed by the types of `other`.
    pub fn merge(&self, other: &TypeList) -> TypeList {
        self.keys.append(&other.keys).into()
    }

    /// Returns the type at position `n`.
    ///
    /// # Panics
    /// Panics if `n` is out of bounds of the TypeList.
    #[track_caller]
    pub fn nth(&self, n: usize) -> TypeKey {
        self.try_nth(n).throw()
    }

    /// Returns the type at position `n`, or an [`Err`] if `n` is out of bounds.
    pub fn try_nth(&self, n: usize) -> Result<TypeKey, IndexOutOfBounds> {
        self.keys.try_at(n).copied()
    }

    /// Returns the position of the first occurrence of `T`, if it is in the TypeList.
    pub fn index_of<T: ?Sized + 'static>(&self) -> Option<usize> {
        self.keys.iter().position(TypeKey::is::<T>)
    }

    /// Returns true if `T` is in the TypeList.
    pub fn contains<T: ?Sized + 'static>(&self) -> bool {
        self.index_of::<T>().is_some()
    }

    /// Returns a new TypeList with every occurrence of `T` removed.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::type_list;
    /// assert_eq!(type_list![u8, i8, u8].remove_type::<u8>(), type_list![i8]);
    /// ```
    pub fn remove_type<T: ?Sized + 'static>(&self) -> TypeList {
        self.keys.erase(&TypeKey::of::<T>()).into()
    }

    /// Returns every ordering of the types in the TypeList.
    ///
    /// Each type in turn is moved to the front and followed by every permutation of the remaining
    /// types, so a list of `n` types produces `n!` lists, starting with the original order. An
    /// empty TypeList has no permutations.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::{seq, type_list};
    /// assert_eq!(
    ///     type_list![u8, i8].permutations(),
    ///     seq![type_list![u8, i8], type_list![i8, u8]]
    /// );
    /// ```
    pub fn permutations(&self) -> Sequence<TypeList> {
        permute(&self.keys).transform(|keys| TypeList::from(keys.clone()))
    }
}

fn permute(keys: &Sequence<TypeKey>) -> Sequence<Sequence<TypeKey>> {
    match keys.len() {
        0 => return Sequence::new(),
        1 => return Sequence::from([keys.clone()]),
        _ => (),
    }

    let mut rotation = keys.clone();
    let mut result = Sequence::new();

    for _ in 0..keys.len() {
        let head = *rotation.front();
        let rest = rotation.pop_front();

        result = result.append(&permute(&rest).transform(|tail| tail.push_front(head)));
        rotation = rest.push_back(head);
    }

    result
}

impl From<Sequence<TypeKey>> for TypeList {
    fn from(value: Sequence<TypeKey>) -> Self {
        TypeList {
            keys: value,
        }
    }
}

impl From<TypeList> for Sequence<TypeKey> {
    fn from(value: TypeList) -> Self {
        value.keys
    }
}

impl FromIterator<TypeKey> for TypeList {
    fn from_iter<I: IntoIterator<Item = TypeKey>>(iter: I) -> Self {
        Sequence::from_iter(iter).into()
    }
}

impl Deref for TypeList {
    type Target = [TypeKey];

    fn deref(&self) -> &Self::Target {
        &self.keys
    }
}

impl Debug for TypeList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeList").field(&&**self).finish()
    }
}

impl Display for TypeList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

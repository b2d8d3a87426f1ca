use std::any::{self, TypeId};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};

/// The identity of a `'static` type, used as the element of a [`TypeList`](super::TypeList).
///
/// Two TypeKeys are equal if and only if they were created from the same type. The type's name is
/// kept alongside its [`TypeId`] purely for display, as [`any::type_name`] isn't guaranteed to be
/// unique.
#[derive(Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    /// Creates the TypeKey for `T`.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::collections::type_list::TypeKey;
    /// assert_eq!(TypeKey::of::<u8>(), TypeKey::of::<u8>());
    /// assert_ne!(TypeKey::of::<u8>(), TypeKey::of::<i8>());
    /// ```
    pub fn of<T: ?Sized + 'static>() -> TypeKey {
        TypeKey {
            id: TypeId::of::<T>(),
            name: any::type_name::<T>(),
        }
    }

    /// Returns the [`TypeId`] of the type.
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// Returns the name of the type, as provided by [`any::type_name`].
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns true if this TypeKey was created from `T`.
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Debug for TypeKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl Display for TypeKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

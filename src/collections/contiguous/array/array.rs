use std::alloc::{self, Layout};
use std::borrow::Borrow;
use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem::{self, MaybeUninit};
use std::ops::Deref;
use std::ptr::{self, NonNull};
use std::slice;

const MIN_GROWTH: usize = 4;
const GROWTH_FACTOR: usize = 2;

/// An implementation of an array that is sized at runtime. Similar to a [`Box<[T]>`](Box<T>).
///
/// Array is the storage behind [`Sequence`](crate::collections::sequence::Sequence). Unlike the
/// sequence, it is only ever written to while it is being built, so no mutable access to the
/// contained values is exposed once an `Array<T>` exists.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Array.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `size` | `O(1)` |
/// | `from_iter` | `O(n)` |
/// | `realloc` | `O(n)`*, `O(1)` |
/// | `contains` | `O(n)` |
///
/// \* It might be possible to get an `O(1)` reallocation, but I don't believe it is very likely.
pub struct Array<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) size: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Array<T> {
    /// Returns the size of the Array.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::collections::contiguous::Array;
    /// let arr: Array<_> = [1, 2, 3].into_iter().collect();
    /// assert_eq!(arr.size(), 3);
    /// ```
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Creates a new Array with size 0. No memory is allocated.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::collections::contiguous::Array;
    /// let arr: Array<u8> = Array::new();
    /// assert_eq!(arr.size(), 0);
    /// assert_eq!(&*arr, &[]);
    /// ```
    pub fn new() -> Array<T> {
        // SAFETY: There are no values, so they are all initialized.
        unsafe { Self::new_uninit(0).assume_init() }
    }

    /// Creates a new Array of [`MaybeUninit<T>`] with the provided `size`. All values are
    /// uninitialized.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn new_uninit(size: usize) -> Array<MaybeUninit<T>> {
        let layout = Array::<MaybeUninit<T>>::make_layout(size);
        let ptr = Array::<MaybeUninit<T>>::make_ptr(layout);

        Array {
            ptr,
            size,
            _phantom: PhantomData,
        }
    }

    /// Decomposes an `Array<T>` into its raw components, a [`NonNull<T>`] pointer to the contained
    /// data and a [`usize`] representing the size.
    ///
    /// After calling this function, the caller is responsible for the allocated data. The parts
    /// can be used to reconstruct an Array with [`Array::from_parts`], allowing it to be dropped
    /// normally.
    pub const fn into_parts(self) -> (NonNull<T>, usize) {
        let ret = (self.ptr, self.size);
        mem::forget(self);
        ret
    }

    /// Creates an `Array<T>` from its raw components, a [`NonNull<T>`] pointer to the contained
    /// data and a [`usize`] representing the size.
    ///
    /// # Safety
    /// This is extremely unsafe, nothing is checked during construction.
    ///
    /// For the produced value to be valid:
    /// - `ptr` needs to be a currently and correctly allocated pointer within the global allocator,
    ///   or dangling if the allocation would be zero-sized.
    /// - `ptr` needs to refer to `size` properly initialized values of `T`.
    /// - `size` needs to be less than or equal to [`isize::MAX`] / `size_of::<T>()`.
    pub const unsafe fn from_parts(ptr: NonNull<T>, size: usize) -> Array<T> {
        Array {
            ptr,
            size,
            _phantom: PhantomData,
        }
    }

    /// Interprets self as an `Array<MaybeUninit<T>>`, the counterpart to [`Array::assume_init`].
    pub fn forget_init(self) -> Array<MaybeUninit<T>> {
        let (ptr, size) = self.into_parts();
        // SAFETY: MaybeUninit<T> has the same layout as T, and every T is a valid MaybeUninit<T>.
        unsafe { Array::from_parts(ptr.cast(), size) }
    }

    /// A helper function to create a [`Layout`] for use during allocation, containing `size` number
    /// of elements of type `T`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub(crate) fn make_layout(size: usize) -> Layout {
        Layout::array::<T>(size).expect("Capacity overflow!")
    }

    /// A helper function to create a [`NonNull`] for the provided [`Layout`]. Returns a dangling
    /// pointer for a zero-sized layout.
    ///
    /// # Errors
    /// In the event of an allocation error, this method calls [`alloc::handle_alloc_error`] as
    /// recommended, to avoid new allocations rather than panicking.
    pub(crate) fn make_ptr(layout: Layout) -> NonNull<T> {
        if layout.size() == 0 {
            NonNull::dangling()
        } else {
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() }
            ).unwrap_or_else(|| alloc::handle_alloc_error(layout))
        }
    }
}

impl<T> Array<MaybeUninit<T>> {
    /// Assume that all values of an `Array<MaybeUninit<T>>` are initialized.
    ///
    /// # Safety
    /// It is up to the caller to guarantee that the Array is properly initialized. Failing to do so
    /// is undefined behavior.
    pub unsafe fn assume_init(self) -> Array<T> {
        let (ptr, size) = self.into_parts();
        // SAFETY: The caller guarantees that all size values are initialized, and MaybeUninit<T>
        // has the same layout as T.
        unsafe { Array::from_parts(ptr.cast(), size) }
    }

    /// Reallocate the Array to have size equal to new_size, with new locations uninitialized. Any
    /// values past `new_size` are discarded without being dropped.
    ///
    /// # Panics
    /// Panics if the memory layout of the new allocation would have a size that exceeds
    /// [`isize::MAX`]. (`new_size * size_of::<T>() > isize::MAX`)
    pub fn realloc(&mut self, new_size: usize) {
        let new_ptr = match (self.size, new_size) {
            (_, _) if size_of::<T>() == 0 => {
                // Zero sized types never allocate, the existing dangling pointer is kept so that
                // only the size changes.
                self.ptr
            },
            (old, new) if old == new => return,
            (0, _) => {
                // If the Array previously had a size of zero, we need a new allocation.
                Array::<MaybeUninit<T>>::make_ptr(Array::<MaybeUninit<T>>::make_layout(new_size))
            },
            (_, 0) => {
                // SAFETY: ptr was allocated in the global allocator with this layout, which has a
                // non-zero size because both 0 size and zero-sized types are guarded against.
                unsafe {
                    alloc::dealloc(
                        self.ptr.as_ptr().cast(),
                        Array::<MaybeUninit<T>>::make_layout(self.size),
                    );
                }
                NonNull::dangling()
            },
            (_, _) => {
                // Otherwise, use realloc to handle moving or in-place size changing.
                let old_layout = Array::<MaybeUninit<T>>::make_layout(self.size);
                let new_layout = Array::<MaybeUninit<T>>::make_layout(new_size);

                // SAFETY: The same layout and allocator are used for the allocation, and the new
                // layout size is > 0 and <= isize::MAX.
                let raw_ptr: *mut MaybeUninit<T> = unsafe {
                    alloc::realloc(
                        self.ptr.as_ptr().cast(),
                        old_layout,
                        new_layout.size(),
                    ).cast()
                };

                NonNull::new(raw_ptr).unwrap_or_else(
                    || alloc::handle_alloc_error(new_layout)
                )
            },
        };

        self.ptr = new_ptr;
        self.size = new_size;
    }
}

impl<T> FromIterator<T> for Array<T> {
    /// Collects an iterator into an Array. The lower bound of the iterator's size hint is used as
    /// the initial size, so an [`ExactSizeIterator`] is collected with a single allocation.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut arr = Self::new_uninit(iter.size_hint().0);
        let mut len = 0;

        for item in iter {
            if len == arr.size {
                arr.realloc(cmp::max(arr.size * GROWTH_FACTOR, MIN_GROWTH));
            }
            // SAFETY: len < arr.size, so the write is within the allocated range of the Array.
            unsafe { arr.ptr.add(len).write(MaybeUninit::new(item)); }
            len += 1;
        }

        // Drop any unused space, the size hint may have been an overestimate.
        arr.realloc(len);

        // SAFETY: The first len values have been written and the Array now has size len.
        unsafe { arr.assume_init() }
    }
}

impl<T, const N: usize> From<[T; N]> for Array<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Array<T> {
    fn drop(&mut self) {
        let layout = Array::<T>::make_layout(self.size);

        // SAFETY: All size values are initialized and ready to drop, and are never accessed again.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.size));
        }

        if layout.size() != 0 {
            // SAFETY: ptr is always allocated in the global allocator and layout is the same as
            // when allocated. Zero-sized layouts aren't allocated and are guarded against
            // deallocation.
            unsafe {
                alloc::dealloc(self.ptr.as_ptr().cast(), layout)
            }
        }
    }
}

impl<T> Deref for Array<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The held data uses Layout::array(size) and is therefore valid and properly
        // aligned for (size * mem::size_of::<T>()) bytes. Data is properly initialized and has a
        // length no greater than isize::MAX. Array's safe API doesn't provide mutable access, so
        // the data can't change throughout 'a.
        unsafe {
            slice::from_raw_parts(self.ptr.as_ptr(), self.size)
        }
    }
}

impl<T> AsRef<[T]> for Array<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> Borrow<[T]> for Array<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

// SAFETY: Arrays rely on unique pointers and are therefore safe for Send when T: Send.
unsafe impl<T: Send> Send for Array<T> {}
// SAFETY: Array's safe API obeys all rules of the borrow checker, so no interior mutability occurs.
// This means that Array<T> can safely implement Sync when T: Sync.
unsafe impl<T: Sync> Sync for Array<T> {}

impl<T: Clone> Clone for Array<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for Array<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Array<T> {}

impl<T: Hash> Hash for Array<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array")
            .field("contents", &&**self)
            .field("size", &self.size)
            .finish()
    }
}

impl<T: Debug> Display for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

use std::alloc;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::{self, NonNull};

use super::Array;

impl<T> IntoIterator for Array<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let (buf, size) = self.into_parts();
        IntoIter {
            buf,
            size,
            start: 0,
            end: size,
            _phantom: PhantomData,
        }
    }
}

/// An owned type for owned iteration over an [`Array`], and through it a
/// [`Sequence`](crate::collections::sequence::Sequence).
///
/// Values in `start..end` are still owned by the iterator. The allocation itself is released when
/// the iterator is dropped.
pub struct IntoIter<T> {
    pub(crate) buf: NonNull<T>,
    pub(crate) size: usize,
    pub(crate) start: usize,
    pub(crate) end: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> IntoIter<T> {
    /// Returns the values that haven't been yielded yet as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: Values in start..end are initialized, in bounds of the allocation and haven't been
        // read out yet.
        unsafe {
            std::slice::from_raw_parts(self.buf.add(self.start).as_ptr(), self.end - self.start)
        }
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // SAFETY: Values in start..end are initialized and haven't been moved out, every other
        // value has already been read and must not be dropped again.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.add(self.start).as_ptr(),
                self.end - self.start,
            ));
        }

        let layout = Array::<T>::make_layout(self.size);
        if layout.size() != 0 {
            // SAFETY: buf was allocated by the Array this iterator was created from, with the same
            // layout.
            unsafe { alloc::dealloc(self.buf.as_ptr().cast(), layout) }
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            // SAFETY: start is in bounds and the value there is initialized. Incrementing start
            // afterwards means that the value is effectively moved off of the heap.
            let value = unsafe { self.buf.add(self.start).read() };
            self.start += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            self.end -= 1;
            // SAFETY: The newly decremented end is in bounds, initialized and won't be read again.
            let value = unsafe { self.buf.add(self.end).read() };
            Some(value)
        } else {
            None
        }
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {}

// SAFETY: IntoIter owns its remaining values in the same way Array does.
unsafe impl<T: Send> Send for IntoIter<T> {}
// SAFETY: IntoIter exposes only shared access through &self.
unsafe impl<T: Sync> Sync for IntoIter<T> {}

// Borrowed iteration uses the iter definition provided by Deref<Target=[T]>.

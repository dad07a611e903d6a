//! The resizable backing buffer shared by all three container flavors.
//!
//! [`ResizableBuffer`] owns a heap block of possibly-uninitialized slots and
//! is the single source of truth for capacity changes: the containers track
//! which prefix of the block is initialized and delegate every grow to
//! [`resize`](ResizableBuffer::resize), which reports the exact number of
//! elements it relocated. The buffer never shrinks.

use crate::error::Error;
use crate::policy;

use core::mem::MaybeUninit;
use core::ptr;

fn uninit_block<T>(capacity: usize) -> Box<[MaybeUninit<T>]> {
    (0..capacity).map(|_| MaybeUninit::uninit()).collect()
}

/// A heap-allocated block of slots, exclusively owned, replaced wholesale on
/// resize and never aliased.
///
/// The buffer itself does not know how many slots are initialized; callers
/// pass their element count (`len`) into the operations that need it, and are
/// responsible for only reading slots they have written.
pub struct ResizableBuffer<T> {
    storage: Box<[MaybeUninit<T>]>,
}

impl<T> ResizableBuffer<T> {
    /// Creates a buffer with the minimum capacity of one slot.
    pub fn new() -> Self {
        ResizableBuffer {
            storage: uninit_block(1),
        }
    }

    /// Creates a buffer with the given capacity.
    ///
    /// Fails with [`Error::InvalidCapacity`] if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self, Error> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity {
                requested: capacity,
            });
        }

        Ok(ResizableBuffer {
            storage: uninit_block(capacity),
        })
    }

    /// Returns the number of slots in the block.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Replaces the block with one of `new_capacity` slots, moving the `len`
    /// initialized elements over in order, and returns the exact count of
    /// elements relocated (always `len`).
    ///
    /// Fails with [`Error::InvalidCapacity`] if `new_capacity` is zero, or
    /// with [`Error::InvalidResize`] if `new_capacity < len` (the resize
    /// would lose elements). On failure the buffer is unchanged.
    ///
    /// # Examples
    /// ```
    /// use amort::buffer::ResizableBuffer;
    ///
    /// let mut buf = ResizableBuffer::new();
    /// buf.write(0, 7u32);
    /// assert_eq!(buf.resize(2, 1), Ok(1));
    /// assert_eq!(buf.capacity(), 2);
    /// ```
    pub fn resize(&mut self, new_capacity: usize, len: usize) -> Result<usize, Error> {
        if new_capacity == 0 {
            return Err(Error::InvalidCapacity {
                requested: new_capacity,
            });
        }
        if new_capacity < len {
            return Err(Error::InvalidResize {
                requested: new_capacity,
                len,
            });
        }

        debug_assert!(len <= self.capacity());

        let mut block = uninit_block::<T>(new_capacity);
        // SAFETY: both blocks hold at least `len` slots; the values are moved
        // rather than duplicated, and the old block frees without dropping
        // its (now logically empty) slots.
        unsafe {
            ptr::copy_nonoverlapping(self.storage.as_ptr(), block.as_mut_ptr(), len);
        }
        self.storage = block;

        Ok(len)
    }

    /// The shared growth step of the insertion protocol: doubles the capacity
    /// iff the buffer is full, and returns the number of elements relocated
    /// (0 when no resize was needed).
    #[inline]
    pub fn ensure_room(&mut self, len: usize) -> Result<usize, Error> {
        if policy::needs_growth(len, self.capacity()) {
            self.resize(policy::next_capacity(self.capacity()), len)
        } else {
            Ok(0)
        }
    }

    /// Writes `value` into the slot at `index`.
    ///
    /// Writing over an initialized slot leaks the old value; the containers
    /// only ever write to the first free slot.
    #[inline]
    pub fn write(&mut self, index: usize, value: T) {
        debug_assert!(index < self.capacity());
        self.storage[index] = MaybeUninit::new(value);
    }

    /// Moves the value out of the slot at `index`.
    ///
    /// # Safety
    /// The slot must be initialized, and the caller must treat it as
    /// uninitialized afterwards.
    #[inline]
    pub unsafe fn read(&self, index: usize) -> T {
        debug_assert!(index < self.capacity());
        self.storage[index].as_ptr().read()
    }

    /// Returns a reference to the value in the slot at `index`.
    ///
    /// # Safety
    /// The slot must be initialized.
    #[inline]
    pub unsafe fn get(&self, index: usize) -> &T {
        debug_assert!(index < self.capacity());
        &*self.storage[index].as_ptr()
    }

    /// Shifts the elements at `[1, len)` one slot to the left, overwriting
    /// slot 0, and returns the number of elements moved (`len − 1`). This is
    /// the queue's compaction step after removing the front element.
    ///
    /// # Safety
    /// Slots `[1, len)` must be initialized and slot 0 must already have been
    /// moved out of; afterwards slot `len − 1` is uninitialized.
    pub unsafe fn shift_left(&mut self, len: usize) -> usize {
        debug_assert!(0 < len && len <= self.capacity());
        let base = self.storage.as_mut_ptr() as *mut T;
        ptr::copy(base.add(1), base, len - 1);
        len - 1
    }

    /// Returns a pointer to the first slot.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.storage.as_ptr() as *const T
    }

    /// Drops the elements in slots `[0, len)` in place.
    ///
    /// # Safety
    /// Those slots must be initialized; afterwards they are not.
    pub(crate) unsafe fn drop_initialized(&mut self, len: usize) {
        debug_assert!(len <= self.capacity());
        let base = self.storage.as_mut_ptr() as *mut T;
        ptr::drop_in_place(ptr::slice_from_raw_parts_mut(base, len));
    }
}

impl<T> Default for ResizableBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_reports_exact_copy_counts() {
        let mut buf = ResizableBuffer::new();
        assert_eq!(buf.capacity(), 1);
        buf.write(0, 10u32);

        assert_eq!(buf.resize(2, 1), Ok(1));
        buf.write(1, 20);
        assert_eq!(buf.resize(4, 2), Ok(2));
        assert_eq!(buf.capacity(), 4);

        unsafe {
            assert_eq!(*buf.get(0), 10);
            assert_eq!(*buf.get(1), 20);
        }
    }

    #[test]
    fn resize_rejects_zero_and_lossy_capacities() {
        let mut buf = ResizableBuffer::<u32>::with_capacity(4).unwrap();
        buf.write(0, 1);
        buf.write(1, 2);
        buf.write(2, 3);

        assert_eq!(buf.resize(0, 3), Err(Error::InvalidCapacity { requested: 0 }));
        assert_eq!(
            buf.resize(2, 3),
            Err(Error::InvalidResize {
                requested: 2,
                len: 3
            })
        );
        // Failed resizes leave the buffer untouched.
        assert_eq!(buf.capacity(), 4);
        unsafe {
            assert_eq!(*buf.get(2), 3);
        }
    }

    #[test]
    fn zero_capacity_construction_is_rejected() {
        assert!(matches!(
            ResizableBuffer::<u8>::with_capacity(0),
            Err(Error::InvalidCapacity { requested: 0 })
        ));
    }

    #[test]
    fn ensure_room_grows_only_when_full() {
        let mut buf = ResizableBuffer::<u8>::new();
        assert_eq!(buf.ensure_room(0), Ok(0));
        assert_eq!(buf.capacity(), 1);

        buf.write(0, 1);
        assert_eq!(buf.ensure_room(1), Ok(1));
        assert_eq!(buf.capacity(), 2);
    }

    #[test]
    fn shift_left_moves_the_tail_down() {
        let mut buf = ResizableBuffer::<u32>::with_capacity(4).unwrap();
        for i in 0..4 {
            buf.write(i, i as u32);
        }

        let front = unsafe { buf.read(0) };
        assert_eq!(front, 0);
        let moved = unsafe { buf.shift_left(4) };
        assert_eq!(moved, 3);

        unsafe {
            assert_eq!(*buf.get(0), 1);
            assert_eq!(*buf.get(1), 2);
            assert_eq!(*buf.get(2), 3);
        }
    }
}

//! An instrumented FIFO queue with a deliberately naive O(n) dequeue.
//!
//! Enqueues run the same doubling insertion protocol as the other flavors.
//! Dequeue removes the front element and shifts every remaining element one
//! slot to the left, costing `size − 1` moves per call. That is the point:
//! this flavor is the contrast case against the amortized-O(1) array, so the
//! shift stays (a head index or ring buffer would erase the lesson).

use crate::buffer::ResizableBuffer;
use crate::error::Error;
use crate::metrics::{CostRecord, Metrics};

use core::slice;

/// A FIFO queue over element type `E`, starting at capacity 1 and doubling
/// whenever full. The front element always lives in slot 0.
///
/// # Examples
/// ```
/// let mut queue = amort::Queue::new();
/// for i in 0..4 {
///     queue.enqueue(i).unwrap();
/// }
///
/// let (value, cost) = queue.dequeue().unwrap();
/// assert_eq!(value, 0);
/// assert_eq!(cost.moved, 3);
/// assert_eq!(queue.front(), Ok(&1));
/// ```
pub struct Queue<E> {
    buf: ResizableBuffer<E>,
    len: usize,
    metrics: Metrics,
}

impl<E> Queue<E> {
    /// Creates an empty queue with capacity 1.
    pub fn new() -> Self {
        Queue {
            buf: ResizableBuffer::new(),
            len: 0,
            metrics: Metrics::default(),
        }
    }

    /// Returns the number of elements in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the queue contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns the running cost aggregates.
    #[inline]
    pub fn metrics(&self) -> Metrics {
        self.metrics
    }

    /// Appends `value` at the back, growing the buffer first if it is full,
    /// and returns what the operation cost (`actual_cost = 1 + copied`).
    pub fn enqueue(&mut self, value: E) -> Result<CostRecord, Error> {
        let copied = self.buf.ensure_room(self.len)?;

        self.buf.write(self.len, value);
        self.len += 1;

        let cost = CostRecord {
            copied,
            moved: 0,
            actual_cost: 1 + copied as u64,
        };
        self.metrics.record(cost);
        Ok(cost)
    }

    /// Removes and returns the front element, shifting the remaining
    /// `size − 1` elements left by one slot (`actual_cost = moved`).
    ///
    /// Fails with [`Error::EmptyContainer`] if the queue is empty.
    pub fn dequeue(&mut self) -> Result<(E, CostRecord), Error> {
        if self.len == 0 {
            return Err(Error::EmptyContainer);
        }

        // SAFETY: slot 0 is the initialized front; shift_left refills it
        // from the slots above before len drops.
        let value = unsafe { self.buf.read(0) };
        let moved = unsafe { self.buf.shift_left(self.len) };
        self.len -= 1;

        let cost = CostRecord {
            copied: 0,
            moved,
            actual_cost: moved as u64,
        };
        self.metrics.record(cost);
        Ok((value, cost))
    }

    /// Returns a reference to the front element without removing it.
    ///
    /// Fails with [`Error::EmptyContainer`] if the queue is empty.
    pub fn front(&self) -> Result<&E, Error> {
        if self.len == 0 {
            return Err(Error::EmptyContainer);
        }

        // SAFETY: slot 0 is initialized whenever len > 0.
        unsafe { Ok(self.buf.get(0)) }
    }

    /// Extracts a slice over the elements, front of the queue first.
    #[inline]
    pub fn as_slice(&self) -> &[E] {
        // SAFETY: slots below len are initialized.
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    /// Returns an iterator over the elements, front of the queue first.
    pub fn iter(&self) -> slice::Iter<'_, E> {
        self.as_slice().iter()
    }
}

impl<E> Default for Queue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Drop for Queue<E> {
    fn drop(&mut self) {
        // SAFETY: exactly the first len slots are initialized.
        unsafe { self.buf.drop_initialized(self.len) }
    }
}

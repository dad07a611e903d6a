//! An instrumented stack backed by the shared resizable buffer.
//!
//! Pushes run the same doubling insertion protocol as the dynamic array;
//! pops are O(1), never resize, and never shrink the buffer.

use crate::buffer::ResizableBuffer;
use crate::error::Error;
use crate::metrics::{CostRecord, Metrics};

use core::slice;

/// A LIFO stack over element type `E`, starting at capacity 1 and doubling
/// whenever full.
///
/// # Examples
/// ```
/// let mut stack = amort::Stack::new();
/// stack.push(3).unwrap();
/// stack.push(7).unwrap();
/// stack.push(1).unwrap();
///
/// assert_eq!(stack.peek(), Ok(&1));
/// assert_eq!(stack.pop().unwrap().0, 1);
/// assert_eq!(stack.pop().unwrap().0, 7);
/// assert_eq!(stack.pop().unwrap().0, 3);
/// assert!(stack.is_empty());
/// ```
pub struct Stack<E> {
    buf: ResizableBuffer<E>,
    len: usize,
    metrics: Metrics,
}

impl<E> Stack<E> {
    /// Creates an empty stack with capacity 1.
    pub fn new() -> Self {
        Stack {
            buf: ResizableBuffer::new(),
            len: 0,
            metrics: Metrics::default(),
        }
    }

    /// Returns the number of elements on the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the stack contains no elements.
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

    /// Pushes `value` on top, growing the buffer first if it is full, and
    /// returns what the operation cost (`actual_cost = 1 + copied`).
    pub fn push(&mut self, value: E) -> Result<CostRecord, Error> {
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

    /// Removes and returns the top element with a zero cost record.
    ///
    /// Fails with [`Error::EmptyContainer`] if the stack is empty.
    pub fn pop(&mut self) -> Result<(E, CostRecord), Error> {
        if self.len == 0 {
            return Err(Error::EmptyContainer);
        }

        self.len -= 1;
        // SAFETY: slot len was the initialized top of the stack.
        let value = unsafe { self.buf.read(self.len) };

        let cost = CostRecord::default();
        self.metrics.record(cost);
        Ok((value, cost))
    }

    /// Returns a reference to the top element without removing it.
    ///
    /// Fails with [`Error::EmptyContainer`] if the stack is empty.
    pub fn peek(&self) -> Result<&E, Error> {
        if self.len == 0 {
            return Err(Error::EmptyContainer);
        }

        // SAFETY: slots below len are initialized.
        unsafe { Ok(self.buf.get(self.len - 1)) }
    }

    /// Extracts a slice over the elements, bottom of the stack first.
    #[inline]
    pub fn as_slice(&self) -> &[E] {
        // SAFETY: slots below len are initialized.
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    /// Returns an iterator over the elements, bottom of the stack first.
    pub fn iter(&self) -> slice::Iter<'_, E> {
        self.as_slice().iter()
    }
}

impl<E> Default for Stack<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Drop for Stack<E> {
    fn drop(&mut self) {
        // SAFETY: exactly the first len slots are initialized.
        unsafe { self.buf.drop_initialized(self.len) }
    }
}

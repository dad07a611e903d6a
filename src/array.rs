//! The instrumented dynamic array, with both amortized-analysis methods.
//!
//! Every [`push`](DynArray::push) runs the shared insertion protocol and, on
//! top of the plain cost accounting the stack and queue also do, evaluates
//! the potential function before and after, charges the fixed 3 units into
//! the credit bank, and appends an immutable [`StepRecord`] to the history.
//!
//! The two analysis methods cross-check each other: the potential algebra
//! makes every amortized cost exactly 3, which is the same constant the
//! banker's method charges, so the bank can never go negative.

use crate::buffer::ResizableBuffer;
use crate::error::Error;
use crate::metrics::{Metrics, StepRecord};
use crate::policy;

use core::slice;

/// A growable array over element type `E`, starting at capacity 1 and
/// doubling whenever full.
///
/// # Examples
/// ```
/// let mut array = amort::DynArray::new();
/// for i in 0..5 {
///     let step = array.push(i).unwrap();
///     assert_eq!(step.amortized_cost, 3);
/// }
/// assert_eq!(array.as_slice(), &[0, 1, 2, 3, 4]);
/// assert_eq!(array.capacity(), 8);
/// ```
pub struct DynArray<E> {
    buf: ResizableBuffer<E>,
    len: usize,
    bank: i64,
    metrics: Metrics,
    steps: Vec<StepRecord>,
}

impl<E> DynArray<E> {
    /// Creates an empty array with capacity 1.
    pub fn new() -> Self {
        DynArray {
            buf: ResizableBuffer::new(),
            len: 0,
            bank: 0,
            metrics: Metrics::default(),
            steps: Vec::new(),
        }
    }

    /// Returns the number of elements in the array.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the array contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns the credit bank balance; never negative.
    #[inline]
    pub fn bank(&self) -> i64 {
        self.bank
    }

    /// Returns the running cost aggregates.
    #[inline]
    pub fn metrics(&self) -> Metrics {
        self.metrics
    }

    /// Returns the per-insertion history, oldest first.
    #[inline]
    pub fn steps(&self) -> &[StepRecord] {
        &self.steps
    }

    /// Appends `value`, growing the buffer first if it is full, and returns
    /// the step record for this insertion.
    ///
    /// The only reachable failure is [`Error::InvalidCapacity`] /
    /// [`Error::InvalidResize`] bubbling up from the buffer, which the
    /// doubling policy never triggers; [`Error::AccountingInvariantViolated`]
    /// is a cross-check that cannot fire unless the growth arithmetic is
    /// broken.
    pub fn push(&mut self, value: E) -> Result<StepRecord, Error> {
        let size_before = self.len;
        let capacity_before = self.buf.capacity();
        let phi_before = policy::potential(size_before, capacity_before);

        let copied = self.buf.ensure_room(self.len)?;
        let actual_cost = 1 + copied as u64;

        let phi_after = policy::potential(size_before + 1, self.buf.capacity());
        let amortized_cost = actual_cost as i64 + (phi_after - phi_before);
        let bank_after = self.bank + policy::AMORTIZED_CHARGE - actual_cost as i64;
        if bank_after < 0 {
            return Err(Error::AccountingInvariantViolated {
                step: self.steps.len() + 1,
                bank: bank_after,
            });
        }

        self.buf.write(self.len, value);
        self.len += 1;
        self.bank = bank_after;

        let step = StepRecord {
            index: self.steps.len() + 1,
            size_before,
            capacity_before,
            copied,
            actual_cost,
            phi_before,
            phi_after,
            amortized_cost,
            bank_after,
        };
        self.metrics.record(step.cost());
        self.steps.push(step);

        Ok(step)
    }

    /// Returns a reference to the element at `index`, or [`None`] if out of
    /// bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&E> {
        if index >= self.len {
            return None;
        }

        // SAFETY: slots below len are initialized.
        unsafe { Some(self.buf.get(index)) }
    }

    /// Extracts a slice over the elements in insertion order.
    #[inline]
    pub fn as_slice(&self) -> &[E] {
        // SAFETY: slots below len are initialized.
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    /// Returns an iterator over the elements in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, E> {
        self.as_slice().iter()
    }
}

impl<E> Default for DynArray<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Drop for DynArray<E> {
    fn drop(&mut self) {
        // SAFETY: exactly the first len slots are initialized.
        unsafe { self.buf.drop_initialized(self.len) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amortized_cost_is_the_constant_three() {
        let mut array = DynArray::new();
        for i in 0..100u32 {
            let step = array.push(i).unwrap();
            assert_eq!(step.amortized_cost, 3, "step {}", step.index);
            assert!(step.bank_after >= 0, "step {}", step.index);
        }
    }

    #[test]
    fn steps_capture_the_resize_schedule() {
        let mut array = DynArray::new();
        for i in 0..6u32 {
            array.push(i).unwrap();
        }

        let copied: Vec<usize> = array.steps().iter().map(|s| s.copied).collect();
        assert_eq!(copied, [0, 1, 2, 0, 4, 0]);

        let step = array.steps()[4];
        assert_eq!(step.index, 5);
        assert_eq!(step.size_before, 4);
        assert_eq!(step.capacity_before, 4);
        assert_eq!(step.actual_cost, 5);
        assert_eq!(step.phi_before, 5);
        assert_eq!(step.phi_after, 3);
    }

    #[test]
    fn reads_preserve_insertion_order() {
        let mut array = DynArray::new();
        for i in 0..10u32 {
            array.push(i).unwrap();
        }

        assert_eq!(array.len(), 10);
        assert_eq!(array.get(0), Some(&0));
        assert_eq!(array.get(9), Some(&9));
        assert_eq!(array.get(10), None);

        let collected: Vec<u32> = array.iter().copied().collect();
        assert_eq!(collected, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn metrics_match_the_geometric_series() {
        let mut array = DynArray::new();
        for i in 0..8u32 {
            array.push(i).unwrap();
        }

        let metrics = array.metrics();
        assert_eq!(array.capacity(), 8);
        assert_eq!(metrics.total_copies, 7);
        assert_eq!(metrics.total_actual_cost, 8 + 7);
        assert_eq!(metrics.max_actual_cost, 5);
    }

    #[test]
    fn drops_every_element_exactly_once() {
        use core::cell::Cell;

        struct Droppable<'a>(&'a Cell<usize>);
        impl Drop for Droppable<'_> {
            fn drop(&mut self) {
                self.0.set(self.0.get() + 1);
            }
        }

        let drop_count = Cell::new(0usize);
        {
            let mut array = DynArray::new();
            for _ in 0..9 {
                array.push(Droppable(&drop_count)).unwrap();
            }
            assert_eq!(drop_count.get(), 0);
        }
        assert_eq!(drop_count.get(), 9);
    }
}

//! The simulation driver: the core's sole external-facing query.
//!
//! [`simulate`] runs a fixed number of insertions against a fresh container
//! and reduces the run to a [`Summary`]; the table and CLI layers consume
//! nothing else. [`self_check`] replays the crate's canonical scenarios and
//! backs the CLI `--test` flag.

use crate::array::DynArray;
use crate::error::Error;
use crate::metrics::{CostRecord, Metrics};
use crate::queue::Queue;
use crate::stack::Stack;

/// The insertion-side interface the driver needs from a container flavor.
///
/// Implemented for the `u64` instantiations of all three flavors; the driver
/// feeds deterministic values `0..m`, so an opaque numeric element suffices.
pub trait Instrumented: Default {
    /// Inserts one value and reports what it cost.
    fn insert(&mut self, value: u64) -> Result<CostRecord, Error>;
    /// The number of elements held.
    fn len(&self) -> usize;
    /// The number of allocated slots.
    fn capacity(&self) -> usize;
    /// The running cost aggregates.
    fn metrics(&self) -> Metrics;
    /// The credit bank balance, for flavors that keep one.
    fn bank(&self) -> Option<i64> {
        None
    }
}

impl Instrumented for DynArray<u64> {
    fn insert(&mut self, value: u64) -> Result<CostRecord, Error> {
        self.push(value).map(|step| step.cost())
    }

    fn len(&self) -> usize {
        DynArray::len(self)
    }

    fn capacity(&self) -> usize {
        DynArray::capacity(self)
    }

    fn metrics(&self) -> Metrics {
        DynArray::metrics(self)
    }

    fn bank(&self) -> Option<i64> {
        Some(DynArray::bank(self))
    }
}

impl Instrumented for Stack<u64> {
    fn insert(&mut self, value: u64) -> Result<CostRecord, Error> {
        self.push(value)
    }

    fn len(&self) -> usize {
        Stack::len(self)
    }

    fn capacity(&self) -> usize {
        Stack::capacity(self)
    }

    fn metrics(&self) -> Metrics {
        Stack::metrics(self)
    }
}

impl Instrumented for Queue<u64> {
    fn insert(&mut self, value: u64) -> Result<CostRecord, Error> {
        self.enqueue(value)
    }

    fn len(&self) -> usize {
        Queue::len(self)
    }

    fn capacity(&self) -> usize {
        Queue::capacity(self)
    }

    fn metrics(&self) -> Metrics {
        Queue::metrics(self)
    }
}

/// The aggregate result of one simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// The number of insertions performed.
    pub operations: usize,
    /// Element count after the run; always equals `operations`.
    pub final_size: usize,
    /// Capacity after the run; a power of two, at least `max(1, operations)`.
    pub final_capacity: usize,
    /// Total elements relocated by resizes; equals `final_capacity − 1`.
    pub total_copies: u64,
    /// Total actual cost; at most `3 · operations`.
    pub total_actual_cost: u64,
    /// Largest single-insertion cost.
    pub max_actual_cost: u64,
    /// Final credit bank balance (dynamic-array flavor only).
    pub final_bank: Option<i64>,
}

/// The three container flavors the driver can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// The dynamic array with potential and banker's accounting.
    Array,
    /// The stack.
    Stack,
    /// The queue.
    Queue,
}

impl Unit {
    /// The operation counts demonstrated when the CLI is given none.
    pub fn default_counts(self) -> &'static [i64] {
        match self {
            Unit::Array => &[1, 2, 4, 8, 16, 32],
            Unit::Stack | Unit::Queue => &[0, 1, 2, 4, 8, 16, 32],
        }
    }
}

/// Runs exactly `m` insertions with values `0..m` against a fresh container.
///
/// Fails with [`Error::InvalidOperationCount`] if `m` is negative.
///
/// # Examples
/// ```
/// use amort::{sim, DynArray};
///
/// let summary = sim::simulate::<DynArray<u64>>(8).unwrap();
/// assert_eq!(summary.final_capacity, 8);
/// assert_eq!(summary.total_copies, 7);
/// ```
pub fn simulate<C: Instrumented>(m: i64) -> Result<Summary, Error> {
    if m < 0 {
        return Err(Error::InvalidOperationCount(m));
    }

    let mut container = C::default();
    for value in 0..m as u64 {
        container.insert(value)?;
    }

    let metrics = container.metrics();
    Ok(Summary {
        operations: m as usize,
        final_size: container.len(),
        final_capacity: container.capacity(),
        total_copies: metrics.total_copies,
        total_actual_cost: metrics.total_actual_cost,
        max_actual_cost: metrics.max_actual_cost,
        final_bank: container.bank(),
    })
}

/// Runs [`simulate`] against the named flavor.
pub fn simulate_unit(unit: Unit, m: i64) -> Result<Summary, Error> {
    match unit {
        Unit::Array => simulate::<DynArray<u64>>(m),
        Unit::Stack => simulate::<Stack<u64>>(m),
        Unit::Queue => simulate::<Queue<u64>>(m),
    }
}

fn check(condition: bool, what: &str) -> Result<(), String> {
    if condition {
        Ok(())
    } else {
        Err(format!("check failed: {what}"))
    }
}

/// Replays the crate's canonical scenarios; backs the CLI `--test` flag.
///
/// Returns the first failing check's description, or `Ok` if all hold.
pub fn self_check() -> Result<(), String> {
    check(crate::policy::potential(0, 1) == 0, "potential(0, 1) == 0")?;

    for m in [0i64, 1, 2, 3, 7, 8, 9, 31, 32, 100] {
        for unit in [Unit::Array, Unit::Stack, Unit::Queue] {
            let s = simulate_unit(unit, m).map_err(|e| e.to_string())?;
            check(s.final_size == m as usize, "final size equals m")?;
            check(
                s.final_capacity.is_power_of_two(),
                "final capacity is a power of two",
            )?;
            check(
                s.final_capacity >= (m as usize).max(1),
                "final capacity covers the elements",
            )?;
            check(
                s.total_copies == s.final_capacity as u64 - 1,
                "total copies equal capacity − 1",
            )?;
            check(
                s.total_actual_cost <= 3 * m as u64,
                "total cost within the charge-3 bound",
            )?;
        }
    }

    let s = simulate_unit(Unit::Array, 8).map_err(|e| e.to_string())?;
    check(s.final_capacity == 8, "simulate(8) ends at capacity 8")?;
    check(s.total_copies == 7, "simulate(8) copies 7 elements")?;

    let mut array = DynArray::new();
    for i in 0..64u64 {
        let step = array.push(i).map_err(|e| e.to_string())?;
        check(step.amortized_cost == 3, "amortized cost is always 3")?;
        check(step.bank_after >= 0, "bank never goes negative")?;
    }

    let mut stack = Stack::new();
    let mut copied = Vec::new();
    for v in [10u64, 20, 30, 40, 50] {
        copied.push(stack.push(v).map_err(|e| e.to_string())?.copied);
    }
    check(copied == [0, 1, 2, 0, 4], "stack resize-copy schedule")?;
    check(stack.capacity() == 8, "stack ends at capacity 8")?;
    check(stack.metrics().total_copies == 7, "stack copies 7 elements")?;

    let mut queue = Queue::new();
    for v in 0..6u64 {
        queue.enqueue(v).map_err(|e| e.to_string())?;
    }
    let (front, cost) = queue.dequeue().map_err(|e| e.to_string())?;
    check(front == 0, "dequeue returns the front value")?;
    check(cost.moved == 5, "dequeue shifts size − 1 elements")?;

    check(
        Stack::<u64>::new().pop() == Err(Error::EmptyContainer),
        "empty stack pop is rejected",
    )?;
    check(
        Queue::<u64>::new().dequeue() == Err(Error::EmptyContainer),
        "empty queue dequeue is rejected",
    )?;
    check(
        simulate_unit(Unit::Array, -1) == Err(Error::InvalidOperationCount(-1)),
        "negative operation counts are rejected",
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summaries_report_the_run() {
        let s = simulate::<DynArray<u64>>(8).unwrap();
        assert_eq!(s.operations, 8);
        assert_eq!(s.final_size, 8);
        assert_eq!(s.final_capacity, 8);
        assert_eq!(s.total_copies, 7);
        assert_eq!(s.total_actual_cost, 15);
        assert_eq!(s.max_actual_cost, 5);
        assert_eq!(s.final_bank, Some(3 * 8 - 15));
    }

    #[test]
    fn only_the_array_flavor_keeps_a_bank() {
        assert!(simulate::<DynArray<u64>>(4).unwrap().final_bank.is_some());
        assert!(simulate::<Stack<u64>>(4).unwrap().final_bank.is_none());
        assert!(simulate::<Queue<u64>>(4).unwrap().final_bank.is_none());
    }

    #[test]
    fn zero_operations_is_a_valid_run() {
        for unit in [Unit::Array, Unit::Stack, Unit::Queue] {
            let s = simulate_unit(unit, 0).unwrap();
            assert_eq!(s.final_size, 0);
            assert_eq!(s.final_capacity, 1);
            assert_eq!(s.total_copies, 0);
            assert_eq!(s.total_actual_cost, 0);
        }
    }

    #[test]
    fn negative_counts_are_rejected() {
        assert_eq!(
            simulate::<Stack<u64>>(-1),
            Err(Error::InvalidOperationCount(-1))
        );
        assert_eq!(
            simulate_unit(Unit::Queue, -42),
            Err(Error::InvalidOperationCount(-42))
        );
    }

    #[test]
    fn the_built_in_checks_pass() {
        self_check().unwrap();
    }
}

//! Failure conditions shared by the buffer, the containers, and the driver.
//!
//! Every operation in this crate either fully commits or fails with one of
//! these variants and no observable state change. The core performs no
//! logging and no recovery; errors surface synchronously to the caller.

use thiserror::Error;

/// The error type for buffer, container, and simulation operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A buffer was asked for a capacity of zero slots.
    #[error("capacity must be at least 1 (requested {requested})")]
    InvalidCapacity {
        /// The rejected capacity.
        requested: usize,
    },
    /// A resize would leave fewer slots than initialized elements.
    #[error("resize to {requested} slots would lose elements ({len} held)")]
    InvalidResize {
        /// The rejected capacity.
        requested: usize,
        /// The number of initialized elements at the time of the call.
        len: usize,
    },
    /// Peek, pop, or dequeue was called on a container with no elements.
    #[error("container is empty")]
    EmptyContainer,
    /// A negative operation count was passed to the simulation driver.
    #[error("operation count must be non-negative (got {0})")]
    InvalidOperationCount(i64),
    /// The credit bank went negative. Unreachable by construction: the
    /// potential-method algebra fixes the amortized cost at 3 per insertion,
    /// so a negative bank indicates a bug in the growth arithmetic.
    #[error("credit bank went negative ({bank}) at step {step}")]
    AccountingInvariantViolated {
        /// 1-based index of the offending insertion.
        step: usize,
        /// The balance the bank would have reached.
        bank: i64,
    },
}

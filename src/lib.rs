#![warn(missing_docs)]

//! Instrumented resizable containers for amortized-cost analysis.
//!
//! Three container flavors (a dynamic array, a stack, and a queue) share
//! one doubling [`buffer`] and report the exact cost of every operation. The
//! array additionally runs both textbook amortized analyses side by side:
//! the potential method (Φ = 2·size − capacity + 1) and the accounting
//! (banker's) method with a fixed charge of 3, which agree on every step.
//!
//! The [`sim`] module drives whole runs and reduces them to summaries;
//! [`table`] renders those for the CLI.
//!
//! ```
//! let mut array = amort::DynArray::new();
//! for i in 0..32 {
//!     let step = array.push(i).unwrap();
//!     assert_eq!(step.amortized_cost, 3);
//!     assert!(step.bank_after >= 0);
//! }
//! assert_eq!(array.metrics().total_copies, array.capacity() as u64 - 1);
//! ```

pub mod array;
pub mod buffer;
pub mod error;
pub mod metrics;
pub mod policy;
pub mod queue;
pub mod sim;
pub mod stack;
pub mod table;

pub use crate::array::DynArray;
pub use crate::buffer::ResizableBuffer;
pub use crate::error::Error;
pub use crate::metrics::{CostRecord, Metrics, StepRecord};
pub use crate::queue::Queue;
pub use crate::sim::{simulate, Summary};
pub use crate::stack::Stack;

//! Cost records, step records, and running aggregates.
//!
//! Metrics are an auditable side channel: every operation reports what it
//! cost, and the container keeps monotone totals, but nothing in here ever
//! influences container behavior.

/// What a single operation cost.
///
/// `copied` counts elements relocated by a resize triggered by the operation;
/// `moved` counts elements shifted by queue-side compaction. An insertion
/// costs `1 + copied`; a removal costs `moved` (zero for a stack pop).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CostRecord {
    /// Elements relocated by a resize, 0 if none occurred.
    pub copied: usize,
    /// Elements shifted left by removal-side compaction (queue only).
    pub moved: usize,
    /// The operation's actual cost in element touches.
    pub actual_cost: u64,
}

/// An immutable snapshot taken after each dynamic-array insertion.
///
/// Appended to the array's history and never modified afterward. The history
/// grows for the container's lifetime; that is acceptable for an analysis
/// harness, but a production variant would bound or stream it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepRecord {
    /// 1-based operation index.
    pub index: usize,
    /// Element count before the insertion.
    pub size_before: usize,
    /// Capacity before the insertion.
    pub capacity_before: usize,
    /// Elements relocated by the resize, 0 if none occurred.
    pub copied: usize,
    /// Actual cost: `1 + copied`.
    pub actual_cost: u64,
    /// Φ(size, capacity) before the insertion.
    pub phi_before: i64,
    /// Φ(size, capacity) after the insertion.
    pub phi_after: i64,
    /// `actual_cost + (phi_after − phi_before)`; always 3 under doubling.
    pub amortized_cost: i64,
    /// Credit bank balance after charging 3 and paying the actual cost.
    pub bank_after: i64,
}

impl StepRecord {
    /// The step's cost viewed as a plain [`CostRecord`].
    pub fn cost(&self) -> CostRecord {
        CostRecord {
            copied: self.copied,
            moved: 0,
            actual_cost: self.actual_cost,
        }
    }
}

/// Running totals over a container's lifetime. All fields are monotonically
/// non-decreasing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Metrics {
    /// Sum of actual costs across all operations so far.
    pub total_actual_cost: u64,
    /// Sum of resize copy counts across all operations so far.
    pub total_copies: u64,
    /// Largest single-operation actual cost seen so far.
    pub max_actual_cost: u64,
}

impl Metrics {
    pub(crate) fn record(&mut self, cost: CostRecord) {
        self.total_actual_cost += cost.actual_cost;
        self.total_copies += cost.copied as u64;
        self.max_actual_cost = self.max_actual_cost.max(cost.actual_cost);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregates_are_monotone() {
        let mut metrics = Metrics::default();
        metrics.record(CostRecord {
            copied: 4,
            moved: 0,
            actual_cost: 5,
        });
        metrics.record(CostRecord::default());
        metrics.record(CostRecord {
            copied: 0,
            moved: 3,
            actual_cost: 3,
        });

        assert_eq!(metrics.total_actual_cost, 8);
        assert_eq!(metrics.total_copies, 4);
        assert_eq!(metrics.max_actual_cost, 5);
    }
}

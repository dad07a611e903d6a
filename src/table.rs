//! Plain-text tables over simulation summaries and step traces.
//!
//! Presentation only: everything here is a pure function from driver output
//! to a `String`, so the CLI stays a thin consumer of [`crate::sim`].

use crate::metrics::StepRecord;
use crate::sim::Summary;

use core::fmt::Write;

/// Renders one row per [`Summary`], with a header line.
pub fn summary_table(rows: &[Summary]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>8} {:>8} {:>10} {:>8} {:>12} {:>10} {:>9} {:>8}",
        "m", "size", "capacity", "copies", "total cost", "max cost", "cost/op", "bank"
    );

    for s in rows {
        let per_op = if s.operations == 0 {
            String::from("-")
        } else {
            format!("{:.3}", s.total_actual_cost as f64 / s.operations as f64)
        };
        let bank = match s.final_bank {
            Some(bank) => bank.to_string(),
            None => String::from("-"),
        };
        let _ = writeln!(
            out,
            "{:>8} {:>8} {:>10} {:>8} {:>12} {:>10} {:>9} {:>8}",
            s.operations,
            s.final_size,
            s.final_capacity,
            s.total_copies,
            s.total_actual_cost,
            s.max_actual_cost,
            per_op,
            bank
        );
    }

    out
}

/// Renders the per-insertion trace of a dynamic-array run.
pub fn step_table(steps: &[StepRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>5} {:>6} {:>5} {:>7} {:>7} {:>6} {:>6} {:>10} {:>6}",
        "step", "size", "cap", "copied", "actual", "Φ pre", "Φ post", "amortized", "bank"
    );

    for s in steps {
        let _ = writeln!(
            out,
            "{:>5} {:>6} {:>5} {:>7} {:>7} {:>6} {:>6} {:>10} {:>6}",
            s.index,
            s.size_before,
            s.capacity_before,
            s.copied,
            s.actual_cost,
            s.phi_before,
            s.phi_after,
            s.amortized_cost,
            s.bank_after
        );
    }

    out
}

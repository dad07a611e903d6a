//! Demo CLI: runs the simulation driver over a list of operation counts and
//! prints the resulting table, a per-step trace, or the built-in checks.

use amort::sim::{self, Unit};
use amort::{table, DynArray};

use clap::{Parser, ValueEnum};
use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum UnitArg {
    Array,
    Stack,
    Queue,
}

impl From<UnitArg> for Unit {
    fn from(unit: UnitArg) -> Self {
        match unit {
            UnitArg::Array => Unit::Array,
            UnitArg::Stack => Unit::Stack,
            UnitArg::Queue => Unit::Queue,
        }
    }
}

#[derive(Parser)]
#[command(name = "amort", version, about = "Amortized-cost demos for doubling containers")]
struct Args {
    /// Operation counts to simulate; defaults to the unit's demo series.
    #[arg(value_name = "COUNT", allow_negative_numbers = true)]
    counts: Vec<i64>,

    /// Container flavor to drive.
    #[arg(long, value_enum, default_value = "array")]
    unit: UnitArg,

    /// Also print the per-step trace for the largest count (array only).
    #[arg(long)]
    trace: bool,

    /// Run the built-in checks instead of the demo table.
    #[arg(long)]
    test: bool,
}

fn run(args: &Args) -> Result<(), String> {
    if args.test {
        sim::self_check()?;
        println!("{}", "all checks passed".green());
        return Ok(());
    }

    let unit = Unit::from(args.unit);
    let counts: Vec<i64> = if args.counts.is_empty() {
        unit.default_counts().to_vec()
    } else {
        args.counts.clone()
    };

    let mut rows = Vec::with_capacity(counts.len());
    for &m in &counts {
        rows.push(sim::simulate_unit(unit, m).map_err(|e| e.to_string())?);
    }

    println!("{}", format!("{unit:?} insertions, doubling growth").bold());
    print!("{}", table::summary_table(&rows));

    if args.trace && unit == Unit::Array {
        if let Some(&m) = counts.iter().max() {
            let mut array = DynArray::new();
            for value in 0..m as u64 {
                array.push(value).map_err(|e| e.to_string())?;
            }
            println!();
            println!("{}", format!("trace of m = {m}").bold());
            print!("{}", table::step_table(array.steps()));
        }
    }

    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(message) = run(&args) {
        eprintln!("{} {message}", "error:".red().bold());
        std::process::exit(1);
    }
}

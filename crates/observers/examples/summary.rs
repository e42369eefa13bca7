//! Runs every algorithm on the same reversed input and prints a summary.
//!
//! ```sh
//! cargo run -p sortscope-observers --example summary -- 32
//! RUST_LOG=debug cargo run -p sortscope-observers --example summary
//! ```

use std::{env, error::Error};

use sortscope_algorithms::{Algorithm, Role, sort};
use sortscope_core::Config;
use sortscope_observers::{check::check_trace, stats::TraceStats};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let n: u32 = match env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 16,
    };
    let input: Vec<u32> = (1..=n).rev().collect();

    println!("{:<22} {:>9} {:>9}  summary", "algorithm", "cmp/elem", "snapshots");
    for algorithm in Algorithm::ALL {
        let trace = sort::<u32, Role>(algorithm, input.clone(), Config::default(), true)?;
        check_trace(trace.as_slice())?;

        let stats = TraceStats::collect(trace.as_slice());
        println!(
            "{:<22} {:>9.2} {:>9}  {stats}",
            algorithm.name(),
            stats.comparisons_per_element(),
            stats.snapshots,
        );
    }
    Ok(())
}

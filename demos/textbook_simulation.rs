//! Textbook Best Fit Simulation
//!
//! Runs the classic 100/200/300 block scenario against the 212/417/112/426
//! request sequence and prints the process table, block summary, and
//! proportional usage bars.
//!
//! # Run
//!
//! ```bash
//! cargo run --example textbook_simulation
//! ```

use bestfit_sim::session::SimulationSession;
use bestfit_sim::visualize::BarChart;

fn main() {
    println!("=== Best Fit Memory Allocation Demo ===\n");

    let block_field = "100, 200, 300";
    let process_field = "212, 417, 112, 426";

    println!("Block sizes:   {}", block_field);
    println!("Process sizes: {}\n", process_field);

    let mut session = SimulationSession::new();
    let report = match session.simulate(block_field, process_field) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("input error [{}]: {}", err.code(), err);
            return;
        }
    };

    println!("{}", report.render_text());

    let chart = BarChart::default();
    println!("{}", chart.render(report));

    println!(
        "Allocated {} of {} requested bytes; {} process(es) not allocated.",
        report.total_allocated(),
        report.total_requested(),
        report.unallocated_count()
    );
}

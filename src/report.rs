//! Result tables for one allocation run.
//!
//! Builds the per-process and per-block views a presentation shell shows
//! after a simulation: which block each process landed in (1-based, with an
//! explicit `Not Allocated` marker) and how much of each block is used
//! versus free. The structured rows are serde-serializable; `render_text`
//! produces the classic fixed-width console table.

use crate::allocator::{Assignment, BestFitAllocator};
use serde::{Deserialize, Serialize};

/// One row of the per-process table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRow {
    /// 1-based process number, in input order.
    pub process_no: usize,

    /// Requested size.
    pub size: u64,

    /// Where the process landed (block index is 0-based here; rendering
    /// shows it 1-based).
    pub assignment: Assignment,
}

/// One row of the per-block summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockRow {
    /// 1-based block number, in input order.
    pub block_no: usize,

    /// Capacity the block started with.
    pub original: u64,

    /// Bytes consumed by assigned processes.
    pub used: u64,

    /// Bytes still free.
    pub free: u64,
}

/// Complete result of one allocation run.
///
/// # Examples
///
/// ```rust
/// use bestfit_sim::allocator::BestFitAllocator;
/// use bestfit_sim::report::AllocationReport;
///
/// let sizes = [212, 417, 112, 426];
/// let mut allocator = BestFitAllocator::new(&[100, 200, 300]);
/// let assignments = allocator.allocate(&sizes);
///
/// let report = AllocationReport::from_run(&sizes, &assignments, &allocator);
/// assert_eq!(report.total_requested(), 1167);
/// assert_eq!(report.total_allocated(), 324);
/// assert_eq!(report.unallocated_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationReport {
    /// Per-process rows, in process order.
    pub processes: Vec<ProcessRow>,

    /// Per-block rows, in block order.
    pub blocks: Vec<BlockRow>,
}

impl AllocationReport {
    /// Build the report for a completed run.
    ///
    /// `process_sizes` and `assignments` must come from the same
    /// [`BestFitAllocator::allocate`] call as the allocator's final state.
    pub fn from_run(
        process_sizes: &[u64],
        assignments: &[Assignment],
        allocator: &BestFitAllocator,
    ) -> Self {
        let processes = process_sizes
            .iter()
            .zip(assignments)
            .enumerate()
            .map(|(i, (&size, &assignment))| ProcessRow {
                process_no: i + 1,
                size,
                assignment,
            })
            .collect();

        let blocks = allocator
            .blocks()
            .iter()
            .enumerate()
            .map(|(i, block)| BlockRow {
                block_no: i + 1,
                original: block.original_capacity(),
                used: block.used(),
                free: block.remaining_capacity(),
            })
            .collect();

        Self { processes, blocks }
    }

    /// Sum of all requested sizes, allocated or not.
    pub fn total_requested(&self) -> u64 {
        self.processes.iter().map(|row| row.size).sum()
    }

    /// Sum of sizes of processes that received a block.
    ///
    /// Always equals the sum of `used` over all block rows.
    pub fn total_allocated(&self) -> u64 {
        self.processes
            .iter()
            .filter(|row| row.assignment.is_allocated())
            .map(|row| row.size)
            .sum()
    }

    /// Number of processes that did not receive a block.
    pub fn unallocated_count(&self) -> usize {
        self.processes
            .iter()
            .filter(|row| !row.assignment.is_allocated())
            .count()
    }

    /// Render the classic fixed-width console table.
    ///
    /// Process section first, then the memory blocks summary. Indices are
    /// 1-based and unallocated processes show a `Not Allocated` marker.
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        out.push_str("Process No.   Process Size   Block No.\n");
        out.push_str(&"-".repeat(40));
        out.push('\n');

        for row in &self.processes {
            out.push_str(&format!("{:<12}{:<15}", row.process_no, row.size));
            match row.assignment.block_index() {
                Some(j) => out.push_str(&format!("{}\n", j + 1)),
                None => out.push_str("Not Allocated\n"),
            }
        }

        out.push_str("\nMemory Blocks Summary:\n");
        out.push_str("Block No.   Original Size   Used Size   Free Size\n");
        out.push_str(&"-".repeat(50));
        out.push('\n');

        for row in &self.blocks {
            out.push_str(&format!(
                "{:<11}{:<15}{:<12}{}\n",
                row.block_no, row.original, row.used, row.free
            ));
        }

        out
    }
}

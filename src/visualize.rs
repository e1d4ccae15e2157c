//! Proportional bar rendering for block usage.
//!
//! Draws one fixed-width bar per block, split into a used segment and a
//! free segment sized proportionally to the block's state. Widths are
//! rounded rather than truncated, and any non-zero quantity gets at least
//! one cell, so a small allocation never disappears from the picture.
//!
//! # Examples
//!
//! ```rust
//! use bestfit_sim::allocator::BestFitAllocator;
//! use bestfit_sim::report::AllocationReport;
//! use bestfit_sim::visualize::BarChart;
//!
//! let sizes = [90];
//! let mut allocator = BestFitAllocator::new(&[100]);
//! let assignments = allocator.allocate(&sizes);
//! let report = AllocationReport::from_run(&sizes, &assignments, &allocator);
//!
//! let chart = BarChart::default();
//! let rendered = chart.render(&report);
//! assert!(rendered.contains("Used: 90B"));
//! assert!(rendered.contains("Free: 10B"));
//! ```

use crate::report::AllocationReport;

/// Cell drawn for the used segment of a bar.
const USED_CELL: char = '#';

/// Cell drawn for the free segment of a bar.
const FREE_CELL: char = '.';

/// Fixed-width proportional bar renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarChart {
    width: usize,
}

impl Default for BarChart {
    /// 30-cell bars, the classic console scale.
    fn default() -> Self {
        Self { width: 30 }
    }
}

impl BarChart {
    /// Create a renderer with the given bar width (minimum 2 cells, so a
    /// partially used block can always show both segments).
    pub fn new(width: usize) -> Self {
        Self { width: width.max(2) }
    }

    /// Bar width in cells.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Split the bar into used and free cell counts.
    ///
    /// Rounds the proportional width, then clamps so a non-zero used (or
    /// free) amount renders at least one cell. The two segments always sum
    /// to the configured width.
    fn split(&self, used: u64, original: u64) -> (usize, usize) {
        if original == 0 || used == 0 {
            return (0, self.width);
        }
        if used == original {
            return (self.width, 0);
        }

        let exact = (used as f64 / original as f64) * self.width as f64;
        let used_cells = (exact.round() as usize).clamp(1, self.width - 1);
        (used_cells, self.width - used_cells)
    }

    /// Render one labelled bar per block.
    pub fn render(&self, report: &AllocationReport) -> String {
        let mut out = String::from("Memory Blocks Visualization\n");

        for row in &report.blocks {
            let (used_cells, free_cells) = self.split(row.used, row.original);
            out.push_str(&format!(
                "Block {:<3} |{}{}| Used: {}B  Free: {}B\n",
                row.block_no,
                USED_CELL.to_string().repeat(used_cells),
                FREE_CELL.to_string().repeat(free_cells),
                row.used,
                row.free,
            ));
        }

        out
    }
}

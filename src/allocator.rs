//! Best Fit allocation core.
//!
//! Implements the textbook Best Fit strategy: every process request is
//! placed into the block with the smallest remaining capacity that can
//! still hold it. Blocks keep both their original and remaining capacity,
//! so a completed run can report used/free space per block.
//!
//! # Key Concepts
//!
//! ## Why Best Fit?
//!
//! First Fit grabs the first block large enough, which tends to carve up
//! big blocks early. Best Fit instead minimizes the leftover space of each
//! placement, keeping large blocks intact for large requests at the cost
//! of a full scan per request.
//!
//! ## Tie-break
//!
//! When several blocks share the smallest sufficient remaining capacity,
//! the lowest-indexed one wins: the scan only replaces the current best on
//! a strictly smaller remaining capacity.
//!
//! # Examples
//!
//! ```rust
//! use bestfit_sim::allocator::{Assignment, BestFitAllocator};
//!
//! let mut allocator = BestFitAllocator::new(&[100, 50, 50]);
//! let assignments = allocator.allocate(&[40]);
//!
//! // Both 50-blocks fit equally well; the first one wins.
//! assert_eq!(assignments, vec![Assignment::Block(1)]);
//! ```

use serde::{Deserialize, Serialize};

/// A fixed-capacity memory block tracked by original and remaining size.
///
/// Invariant: `remaining_capacity <= original_capacity` at all times.
/// Remaining capacity only ever decreases within a run; [`BestFitAllocator::reset`]
/// restores it to the original.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryBlock {
    original_capacity: u64,
    remaining_capacity: u64,
}

impl MemoryBlock {
    /// Create a fresh block with the given capacity.
    pub const fn new(capacity: u64) -> Self {
        Self {
            original_capacity: capacity,
            remaining_capacity: capacity,
        }
    }

    /// Capacity the block started the run with.
    pub const fn original_capacity(&self) -> u64 {
        self.original_capacity
    }

    /// Capacity still available for later requests.
    pub const fn remaining_capacity(&self) -> u64 {
        self.remaining_capacity
    }

    /// Bytes consumed so far (original minus remaining).
    pub const fn used(&self) -> u64 {
        self.original_capacity - self.remaining_capacity
    }

    /// Check whether a request of `size` bytes still fits.
    pub const fn can_fit(&self, size: u64) -> bool {
        self.remaining_capacity >= size
    }
}

/// Outcome of resolving one process request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Assignment {
    /// The process was placed in the block at this 0-based index.
    Block(usize),
    /// No block had enough remaining capacity.
    Unallocated,
}

impl Assignment {
    /// The assigned block index, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bestfit_sim::allocator::Assignment;
    ///
    /// assert_eq!(Assignment::Block(3).block_index(), Some(3));
    /// assert_eq!(Assignment::Unallocated.block_index(), None);
    /// ```
    pub const fn block_index(&self) -> Option<usize> {
        match self {
            Self::Block(index) => Some(*index),
            Self::Unallocated => None,
        }
    }

    /// Check whether the process received a block.
    pub const fn is_allocated(&self) -> bool {
        matches!(self, Self::Block(_))
    }
}

/// Capacity totals for one allocator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AllocatorStats {
    /// Sum of original capacities over all blocks.
    pub total_capacity: u64,

    /// Sum of used bytes over all blocks.
    pub used_capacity: u64,

    /// Sum of remaining bytes over all blocks.
    pub free_capacity: u64,
}

impl AllocatorStats {
    /// Fraction of total capacity in use, in `[0.0, 1.0]`.
    ///
    /// Returns 0.0 when there are no blocks.
    pub fn utilization(&self) -> f64 {
        if self.total_capacity == 0 {
            0.0
        } else {
            self.used_capacity as f64 / self.total_capacity as f64
        }
    }
}

/// Best Fit allocator over a fixed set of memory blocks.
///
/// One instance models one simulation run: construct it from the block
/// capacities, call [`allocate`](Self::allocate) once with the process
/// sizes, then read the assignments and remaining capacities. A new run
/// needs either a new instance or an explicit [`reset`](Self::reset).
///
/// # Examples
///
/// ```rust
/// use bestfit_sim::allocator::{Assignment, BestFitAllocator};
///
/// let mut allocator = BestFitAllocator::new(&[50]);
/// let assignments = allocator.allocate(&[100]);
///
/// assert_eq!(assignments, vec![Assignment::Unallocated]);
/// assert_eq!(allocator.remaining_capacities(), vec![50]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestFitAllocator {
    blocks: Vec<MemoryBlock>,
}

impl BestFitAllocator {
    /// Create a fresh allocator from block capacities, in input order.
    ///
    /// An empty capacity list is a valid degenerate input: every request
    /// against it resolves to [`Assignment::Unallocated`].
    pub fn new(block_capacities: &[u64]) -> Self {
        Self {
            blocks: block_capacities.iter().copied().map(MemoryBlock::new).collect(),
        }
    }

    /// Resolve each process request against the blocks, in input order.
    ///
    /// For process `i`, every block is scanned in index order and the one
    /// with the smallest remaining capacity `>= process_sizes[i]` is
    /// selected; on a tie the lowest index wins. The selected block's
    /// remaining capacity is reduced immediately, so the updated value is
    /// what later processes in the same call compete for. A request no
    /// block can hold yields [`Assignment::Unallocated`] and changes
    /// nothing.
    ///
    /// Returns one assignment per process, in process order. Greedy and
    /// single-pass: an assignment is never revisited.
    pub fn allocate(&mut self, process_sizes: &[u64]) -> Vec<Assignment> {
        let mut assignments = Vec::with_capacity(process_sizes.len());

        for &size in process_sizes {
            let mut best_idx: Option<usize> = None;

            for (j, block) in self.blocks.iter().enumerate() {
                if block.can_fit(size)
                    && best_idx.map_or(true, |best| {
                        block.remaining_capacity < self.blocks[best].remaining_capacity
                    })
                {
                    best_idx = Some(j);
                }
            }

            match best_idx {
                Some(j) => {
                    self.blocks[j].remaining_capacity -= size;
                    assignments.push(Assignment::Block(j));
                }
                None => assignments.push(Assignment::Unallocated),
            }
        }

        assignments
    }

    /// Restore every block's remaining capacity to its original capacity.
    pub fn reset(&mut self) {
        for block in &mut self.blocks {
            block.remaining_capacity = block.original_capacity;
        }
    }

    /// The blocks in input order.
    pub fn blocks(&self) -> &[MemoryBlock] {
        &self.blocks
    }

    /// Number of blocks.
    pub fn num_blocks(&self) -> usize {
        self.blocks.len()
    }

    /// Original capacities in input order.
    pub fn original_capacities(&self) -> Vec<u64> {
        self.blocks.iter().map(MemoryBlock::original_capacity).collect()
    }

    /// Remaining capacities in input order.
    pub fn remaining_capacities(&self) -> Vec<u64> {
        self.blocks.iter().map(MemoryBlock::remaining_capacity).collect()
    }

    /// Capacity totals for the current state.
    pub fn stats(&self) -> AllocatorStats {
        let total_capacity = self.blocks.iter().map(MemoryBlock::original_capacity).sum();
        let free_capacity = self.blocks.iter().map(MemoryBlock::remaining_capacity).sum();

        AllocatorStats {
            total_capacity,
            used_capacity: total_capacity - free_capacity,
            free_capacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_new() {
        let block = MemoryBlock::new(100);
        assert_eq!(block.original_capacity(), 100);
        assert_eq!(block.remaining_capacity(), 100);
        assert_eq!(block.used(), 0);
        assert!(block.can_fit(100));
        assert!(!block.can_fit(101));
    }

    #[test]
    fn test_assignment_accessors() {
        assert_eq!(Assignment::Block(2).block_index(), Some(2));
        assert_eq!(Assignment::Unallocated.block_index(), None);
        assert!(Assignment::Block(0).is_allocated());
        assert!(!Assignment::Unallocated.is_allocated());
    }

    #[test]
    fn test_fresh_allocator_state() {
        let allocator = BestFitAllocator::new(&[100, 200, 300]);
        assert_eq!(allocator.num_blocks(), 3);
        assert_eq!(allocator.original_capacities(), vec![100, 200, 300]);
        assert_eq!(allocator.remaining_capacities(), vec![100, 200, 300]);
    }

    #[test]
    fn test_best_fit_picks_smallest_sufficient_block() {
        let mut allocator = BestFitAllocator::new(&[300, 100, 200]);
        let assignments = allocator.allocate(&[90]);

        // 100 leaves the least slack.
        assert_eq!(assignments, vec![Assignment::Block(1)]);
        assert_eq!(allocator.remaining_capacities(), vec![300, 10, 200]);
    }

    #[test]
    fn test_tie_break_prefers_lowest_index() {
        let mut allocator = BestFitAllocator::new(&[100, 50, 50]);
        let assignments = allocator.allocate(&[40]);

        assert_eq!(assignments, vec![Assignment::Block(1)]);
        assert_eq!(allocator.remaining_capacities(), vec![100, 10, 50]);
    }

    #[test]
    fn test_unsatisfiable_request_leaves_state_unchanged() {
        let mut allocator = BestFitAllocator::new(&[50]);
        let assignments = allocator.allocate(&[100]);

        assert_eq!(assignments, vec![Assignment::Unallocated]);
        assert_eq!(allocator.remaining_capacities(), vec![50]);
    }

    #[test]
    fn test_textbook_sequential_depletion() {
        // Classic scenario: 212 only fits in 300; 417 fits nowhere;
        // 112 best-fits the untouched 200; 426 fits nowhere.
        let mut allocator = BestFitAllocator::new(&[100, 200, 300]);
        let assignments = allocator.allocate(&[212, 417, 112, 426]);

        assert_eq!(
            assignments,
            vec![
                Assignment::Block(2),
                Assignment::Unallocated,
                Assignment::Block(1),
                Assignment::Unallocated,
            ]
        );
        assert_eq!(allocator.remaining_capacities(), vec![100, 88, 88]);
    }

    #[test]
    fn test_earlier_assignment_shapes_later_choices() {
        // After 30 lands in the 40-block, its remaining 10 is too small,
        // so the second 30 must take the 100-block.
        let mut allocator = BestFitAllocator::new(&[100, 40]);
        let assignments = allocator.allocate(&[30, 30]);

        assert_eq!(assignments, vec![Assignment::Block(1), Assignment::Block(0)]);
        assert_eq!(allocator.remaining_capacities(), vec![70, 10]);
    }

    #[test]
    fn test_no_blocks() {
        let mut allocator = BestFitAllocator::new(&[]);
        let assignments = allocator.allocate(&[10]);

        assert_eq!(assignments, vec![Assignment::Unallocated]);
        assert_eq!(allocator.remaining_capacities(), Vec::<u64>::new());
    }

    #[test]
    fn test_no_processes() {
        let mut allocator = BestFitAllocator::new(&[100, 200]);
        let assignments = allocator.allocate(&[]);

        assert!(assignments.is_empty());
        assert_eq!(allocator.remaining_capacities(), vec![100, 200]);
    }

    #[test]
    fn test_exact_fit_empties_block() {
        let mut allocator = BestFitAllocator::new(&[100, 50]);
        let assignments = allocator.allocate(&[50]);

        assert_eq!(assignments, vec![Assignment::Block(1)]);
        assert_eq!(allocator.remaining_capacities(), vec![100, 0]);
        assert_eq!(allocator.blocks()[1].used(), 50);
    }

    #[test]
    fn test_zero_size_request_takes_smallest_block() {
        // The boundary rejects zero sizes, but the core is total over them:
        // a zero-size request fits everywhere and consumes nothing.
        let mut allocator = BestFitAllocator::new(&[100, 50]);
        let assignments = allocator.allocate(&[0]);

        assert_eq!(assignments, vec![Assignment::Block(1)]);
        assert_eq!(allocator.remaining_capacities(), vec![100, 50]);
    }

    #[test]
    fn test_determinism() {
        let blocks = [170, 80, 250, 80];
        let processes = [60, 200, 80, 80, 45];

        let mut first = BestFitAllocator::new(&blocks);
        let mut second = BestFitAllocator::new(&blocks);

        assert_eq!(first.allocate(&processes), second.allocate(&processes));
        assert_eq!(first.remaining_capacities(), second.remaining_capacities());
    }

    #[test]
    fn test_reset_restores_fresh_state() {
        let mut allocator = BestFitAllocator::new(&[100, 200]);
        allocator.allocate(&[90, 150]);
        assert_ne!(allocator.remaining_capacities(), vec![100, 200]);

        allocator.reset();
        assert_eq!(allocator.remaining_capacities(), vec![100, 200]);
        assert_eq!(allocator, BestFitAllocator::new(&[100, 200]));
    }

    #[test]
    fn test_stats() {
        let mut allocator = BestFitAllocator::new(&[100, 200, 300]);
        allocator.allocate(&[212, 417, 112, 426]);

        let stats = allocator.stats();
        assert_eq!(stats.total_capacity, 600);
        assert_eq!(stats.used_capacity, 324);
        assert_eq!(stats.free_capacity, 276);
        assert!((stats.utilization() - 0.54).abs() < 1e-9);
    }

    #[test]
    fn test_stats_no_blocks() {
        let allocator = BestFitAllocator::new(&[]);
        let stats = allocator.stats();
        assert_eq!(stats.total_capacity, 0);
        assert_eq!(stats.utilization(), 0.0);
    }

    #[test]
    fn test_used_equals_sum_of_allocated_sizes() {
        let mut allocator = BestFitAllocator::new(&[120, 40, 300]);
        let processes = [100, 500, 35, 250, 20];
        let assignments = allocator.allocate(&processes);

        let allocated: u64 = processes
            .iter()
            .zip(&assignments)
            .filter(|(_, a)| a.is_allocated())
            .map(|(&size, _)| size)
            .sum();

        assert_eq!(allocator.stats().used_capacity, allocated);
    }
}

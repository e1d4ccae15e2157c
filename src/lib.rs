//! Best Fit Memory Allocation Simulator
//!
//! A faithful implementation of the Best Fit allocation strategy as taught
//! in operating-systems courses: each process request is placed into the
//! smallest memory block that can still hold it, and the simulator reports
//! per-process placement, per-block usage, and overall utilization.
//!
//! # Overview
//!
//! This crate provides:
//!
//! - **Allocator**: the Best Fit assignment procedure with exact tie-break
//!   and unsatisfiable-request semantics
//! - **Parsing**: boundary validation of comma-delimited size fields
//! - **Report**: per-process and per-block result tables
//! - **Visualize**: proportional used/free bars per block
//! - **Session**: simulate/reset command dispatch for presentation shells
//!
//! # Algorithm
//!
//! For each process in input order, every block is scanned in index order
//! and the candidate with the smallest *remaining* capacity that still fits
//! the request wins; ties resolve to the lowest block index. The winning
//! block's remaining capacity is reduced immediately, so earlier processes
//! shape what later processes in the same run can see. A request no block
//! can hold is marked unallocated and leaves all state untouched.
//!
//! # Examples
//!
//! ```rust
//! use bestfit_sim::allocator::{Assignment, BestFitAllocator};
//!
//! let mut allocator = BestFitAllocator::new(&[100, 200, 300]);
//! let assignments = allocator.allocate(&[212, 417, 112, 426]);
//!
//! assert_eq!(assignments[0], Assignment::Block(2)); // 300 is the only fit
//! assert_eq!(assignments[1], Assignment::Unallocated);
//! assert_eq!(assignments[2], Assignment::Block(1));
//! assert_eq!(assignments[3], Assignment::Unallocated);
//! assert_eq!(allocator.remaining_capacities(), vec![100, 88, 88]);
//! ```
//!
//! Driving a full simulation from raw text fields:
//!
//! ```rust
//! use bestfit_sim::session::SimulationSession;
//!
//! let mut session = SimulationSession::new();
//! let report = session.simulate("100, 200, 300", "212, 417, 112, 426").unwrap();
//! assert_eq!(report.unallocated_count(), 2);
//! ```
//!
//! # Quality Standards
//!
//! - Deterministic results for identical inputs
//! - Property-based testing for all allocator invariants
//! - Benchmarks for the core scan and the full pipeline

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow common patterns that are acceptable for this simulator
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::format_push_string)]
#![allow(clippy::uninlined_format_args)]

pub mod allocator;
pub mod error;
pub mod parsing;
pub mod report;
pub mod session;
pub mod visualize;

pub use error::{Error, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

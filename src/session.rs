//! Simulation session and command dispatch.
//!
//! A [`SimulationSession`] is what a presentation shell owns: it maps each
//! user action to one named handler with typed inputs and outputs, runs a
//! fresh allocator per simulation, and keeps the last report around for
//! re-rendering. There is no carry-over of block state between runs and no
//! process-wide singletons; concurrent shells each own their own session.
//!
//! # Examples
//!
//! ```rust
//! use bestfit_sim::session::{SessionCommand, SimulationSession};
//!
//! let mut session = SimulationSession::new();
//!
//! let report = session
//!     .handle(SessionCommand::simulate("100, 200, 300", "212, 417, 112, 426"))
//!     .unwrap()
//!     .expect("simulate returns a report");
//! assert_eq!(report.unallocated_count(), 2);
//!
//! assert!(session.handle(SessionCommand::Reset).unwrap().is_none());
//! assert!(session.last_report().is_none());
//! ```

use crate::allocator::BestFitAllocator;
use crate::parsing::parse_size_list;
use crate::report::AllocationReport;
use crate::Result;

/// A user action, as dispatched by the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Run one simulation from raw text fields.
    Simulate {
        /// Comma-delimited block capacities.
        block_field: String,
        /// Comma-delimited process sizes.
        process_field: String,
    },
    /// Discard all results.
    Reset,
}

impl SessionCommand {
    /// Convenience constructor for [`SessionCommand::Simulate`].
    pub fn simulate(block_field: impl Into<String>, process_field: impl Into<String>) -> Self {
        Self::Simulate {
            block_field: block_field.into(),
            process_field: process_field.into(),
        }
    }
}

/// One shell's simulation state: the most recent report, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimulationSession {
    last_report: Option<AllocationReport>,
}

impl SimulationSession {
    /// Create a session with no results yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatch one command.
    ///
    /// Returns the stored report for `Simulate`, `None` for `Reset`.
    pub fn handle(&mut self, command: SessionCommand) -> Result<Option<&AllocationReport>> {
        match command {
            SessionCommand::Simulate {
                block_field,
                process_field,
            } => self.simulate(&block_field, &process_field).map(Some),
            SessionCommand::Reset => {
                self.reset();
                Ok(None)
            }
        }
    }

    /// Parse both fields, run a fresh allocator, and store the report.
    ///
    /// Both fields are parsed before anything runs, so a parse or
    /// validation failure leaves the previous report untouched and the
    /// allocator uninvoked.
    pub fn simulate(&mut self, block_field: &str, process_field: &str) -> Result<&AllocationReport> {
        let block_capacities = parse_size_list(block_field)?;
        let process_sizes = parse_size_list(process_field)?;

        let mut allocator = BestFitAllocator::new(&block_capacities);
        let assignments = allocator.allocate(&process_sizes);

        let report = AllocationReport::from_run(&process_sizes, &assignments, &allocator);
        Ok(self.last_report.insert(report))
    }

    /// Discard the stored report.
    pub fn reset(&mut self) {
        self.last_report = None;
    }

    /// The most recent report, if a simulation has run since the last reset.
    pub fn last_report(&self) -> Option<&AllocationReport> {
        self.last_report.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocator::Assignment;
    use crate::Error;

    #[test]
    fn test_simulate_stores_report() {
        let mut session = SimulationSession::new();
        let report = session.simulate("100, 200, 300", "212, 417, 112, 426").unwrap();

        assert_eq!(report.processes[0].assignment, Assignment::Block(2));
        assert_eq!(report.blocks[2].free, 88);
        assert!(session.last_report().is_some());
    }

    #[test]
    fn test_each_run_starts_fresh() {
        let mut session = SimulationSession::new();
        session.simulate("100", "60").unwrap();
        let second = session.simulate("100", "60").unwrap();

        // No carry-over: the 60 fits again because the blocks are rebuilt.
        assert_eq!(second.processes[0].assignment, Assignment::Block(0));
        assert_eq!(second.blocks[0].free, 40);
    }

    #[test]
    fn test_parse_failure_preserves_previous_report() {
        let mut session = SimulationSession::new();
        session.simulate("100, 200", "50").unwrap();
        let before = session.last_report().cloned();

        let err = session.simulate("100, oops", "50").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
        assert_eq!(session.last_report().cloned(), before);
    }

    #[test]
    fn test_process_field_failure_also_preserves_state() {
        let mut session = SimulationSession::new();
        session.simulate("100", "50").unwrap();

        let err = session.simulate("100", "-3").unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(session.last_report().is_some());
    }

    #[test]
    fn test_reset_clears_report() {
        let mut session = SimulationSession::new();
        session.simulate("100", "50").unwrap();
        session.reset();
        assert!(session.last_report().is_none());
    }

    #[test]
    fn test_command_dispatch() {
        let mut session = SimulationSession::new();

        let report = session
            .handle(SessionCommand::simulate("100, 50, 50", "40"))
            .unwrap();
        assert_eq!(
            report.unwrap().processes[0].assignment,
            Assignment::Block(1)
        );

        let none = session.handle(SessionCommand::Reset).unwrap();
        assert!(none.is_none());
        assert!(session.last_report().is_none());
    }

    #[test]
    fn test_dispatch_propagates_parse_errors() {
        let mut session = SimulationSession::new();
        let err = session
            .handle(SessionCommand::simulate("", "50"))
            .unwrap_err();
        assert_eq!(err, Error::parse("field is empty"));
    }
}

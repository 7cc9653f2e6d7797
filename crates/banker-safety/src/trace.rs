//! Human-readable step records produced while the algorithm runs.
//!
//! The trace is observability only: nothing in the checker reads it back, and
//! disabling it never changes the verdict or the order.

use std::fmt;

use serde::Serialize;

use banker_core::constants::{DEFAULT_SEQUENCE_SEPARATOR, PROCESS_PREFIX};
use banker_core::models::Units;

/// One step of the safety algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TraceStep {
    /// Process could run to completion with the current work vector and
    /// released its allocation.
    Completed {
        process: usize,
        need: Vec<Units>,
        work_before: Vec<Units>,
        work_after: Vec<Units>,
    },
    /// Process was scanned but `resource` blocked it. Verbose traces only.
    Waiting {
        process: usize,
        resource: usize,
        need: Units,
        available: Units,
    },
    /// A full scan found no eligible process.
    Deadlock { unfinished: Vec<usize> },
    /// Every process completed.
    Safe { order: Vec<usize> },
}

impl fmt::Display for TraceStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Completed {
                process,
                need,
                work_before,
                work_after,
            } => write!(
                f,
                "Process {} can execute (need {:?} <= available {:?}); releases its allocation, available now {:?}",
                label(*process),
                need,
                work_before,
                work_after
            ),
            Self::Waiting {
                process,
                resource,
                need,
                available,
            } => write!(
                f,
                "Process {} must wait: needs {need} of resource {resource}, only {available} available",
                label(*process)
            ),
            Self::Deadlock { unfinished } => write!(
                f,
                "No process can proceed further, leading to DEADLOCK (unfinished: {})",
                join_labels(unfinished, ", ")
            ),
            Self::Safe { order } => write!(
                f,
                "Safe sequence: {}",
                join_labels(order, DEFAULT_SEQUENCE_SEPARATOR)
            ),
        }
    }
}

/// `P<index>`.
pub fn label(process: usize) -> String {
    format!("{PROCESS_PREFIX}{process}")
}

/// Labels of `processes` joined by `separator`.
pub fn join_labels(processes: &[usize], separator: &str) -> String {
    processes
        .iter()
        .map(|&p| label(p))
        .collect::<Vec<_>>()
        .join(separator)
}

/// Collects steps when enabled, drops them otherwise.
#[derive(Debug)]
pub(crate) struct TraceRecorder {
    enabled: bool,
    verbose: bool,
    steps: Vec<TraceStep>,
}

impl TraceRecorder {
    pub(crate) fn new(enabled: bool, verbose: bool) -> Self {
        Self {
            enabled,
            verbose: enabled && verbose,
            steps: Vec::new(),
        }
    }

    pub(crate) fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub(crate) fn push(&mut self, step: impl FnOnce() -> TraceStep) {
        if self.enabled {
            self.steps.push(step());
        }
    }

    pub(crate) fn finish(self) -> Vec<TraceStep> {
        self.steps
    }
}

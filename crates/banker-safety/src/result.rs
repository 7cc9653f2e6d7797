//! Outcome of a safety check.

use serde::Serialize;

use crate::trace::{self, TraceStep};

/// Verdict, completion order, and trace for one snapshot.
///
/// Exactly one of:
/// - `safe == true`, `order` is a permutation of `0..P`, `blocked` is empty;
/// - `safe == false`, `order` is empty, `blocked` lists the processes left unfinished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SafetyResult {
    pub safe: bool,
    pub order: Vec<usize>,
    pub blocked: Vec<usize>,
    pub trace: Vec<TraceStep>,
}

impl SafetyResult {
    pub fn is_safe(&self) -> bool {
        self.safe
    }

    /// The deadlock view of the same verdict: true when no safe sequence exists.
    pub fn is_deadlocked(&self) -> bool {
        !self.safe
    }

    /// `["P1", "P3", ...]` for the completion order.
    pub fn sequence_labels(&self) -> Vec<String> {
        self.order.iter().map(|&p| trace::label(p)).collect()
    }

    /// Completion order joined by `separator`, e.g. `P1 ➡ P3 ➡ P4`.
    pub fn render_sequence(&self, separator: &str) -> String {
        trace::join_labels(&self.order, separator)
    }

    /// Unfinished processes, comma-separated. Empty when safe.
    pub fn render_blocked(&self) -> String {
        trace::join_labels(&self.blocked, ", ")
    }

    /// One line per trace step.
    pub fn render_trace(&self) -> String {
        self.trace
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

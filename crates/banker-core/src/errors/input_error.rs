//! Input shape and value errors.

use super::error_code::{self, BankerErrorCode};

/// Malformed checker input. Raised before any algorithmic work starts.
///
/// An unsafe state is never reported through this type; it is a regular
/// `SafetyResult` with `safe == false`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInputError {
    #[error("{matrix} has {actual} rows, expected {expected} (one per process)")]
    ProcessCountMismatch {
        matrix: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{matrix} row {row} has {actual} entries, expected {expected} (one per resource)")]
    RowLengthMismatch {
        matrix: &'static str,
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("{vector} has {actual} entries, expected {expected} (one per resource)")]
    VectorLengthMismatch {
        vector: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{field} contains negative entry {value} at {position}")]
    NegativeEntry {
        field: &'static str,
        position: String,
        value: i64,
    },

    #[error(
        "process {process} holds {allocated} units of resource {resource} but may only ever need {max_need}"
    )]
    AllocationExceedsMaxNeed {
        process: usize,
        resource: usize,
        allocated: u64,
        max_need: u64,
    },

    #[error("{field} count {actual} exceeds limit {limit}")]
    LimitExceeded {
        field: &'static str,
        limit: usize,
        actual: usize,
    },
}

impl InvalidInputError {
    /// Builds a `NegativeEntry` for a matrix cell.
    pub fn negative_cell(field: &'static str, row: usize, col: usize, value: i64) -> Self {
        Self::NegativeEntry {
            field,
            position: format!("[{row}][{col}]"),
            value,
        }
    }

    /// Builds a `NegativeEntry` for a vector slot.
    pub fn negative_slot(field: &'static str, index: usize, value: i64) -> Self {
        Self::NegativeEntry {
            field,
            position: format!("[{index}]"),
            value,
        }
    }
}

impl BankerErrorCode for InvalidInputError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::LimitExceeded { .. } => error_code::LIMIT_EXCEEDED,
            _ => error_code::INVALID_INPUT,
        }
    }
}

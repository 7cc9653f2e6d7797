//! # banker-safety
//!
//! The Banker's safety algorithm. Given a validated [`SystemSnapshot`], decides
//! whether some completion order lets every process finish, and if so returns
//! the canonical (lowest-index-first) order together with a step trace.

pub mod checker;
pub mod result;
pub mod trace;

pub use checker::{is_safe_sequence, SafetyChecker};
pub use result::SafetyResult;
pub use trace::TraceStep;

use banker_core::config::CheckerConfig;
use banker_core::errors::InvalidInputError;
use banker_core::models::SystemSnapshot;

/// Validate raw inputs and run the safety algorithm with default settings and
/// no size limit.
///
/// All shape and sign checks happen before any algorithmic work; malformed
/// input is an `Err`, an unsafe state is `Ok` with `safe == false`.
pub fn evaluate(
    processes: &[u32],
    resources: &[u32],
    allocation: &[Vec<i64>],
    max_need: &[Vec<i64>],
    available: &[i64],
) -> Result<SafetyResult, InvalidInputError> {
    let snapshot = SystemSnapshot::new(
        processes.to_vec(),
        resources.to_vec(),
        allocation,
        max_need,
        available,
    )?;
    SafetyChecker::new(CheckerConfig::unbounded()).check(&snapshot)
}

//! # banker-input
//!
//! Input collection for the safety checker. Turns the five free-form text
//! fields (processes, resources, allocation, max need, available) or a
//! snapshot file into a validated [`SystemSnapshot`], reporting malformed
//! input as a structured [`ParseError`] instead of ever calling the checker.

pub mod file;
pub mod form;
pub mod text;

pub use file::{load_snapshot, SnapshotFormat};
pub use form::SnapshotForm;
pub use text::{parse_labels, parse_matrix, parse_vector};

#[cfg(doc)]
use banker_core::{errors::ParseError, models::SystemSnapshot};

//! Validated data model: matrices, vectors, and the system snapshot.

pub mod matrix;
pub mod snapshot;
pub mod vector;

pub use matrix::{Matrix, NeedMatrix};
pub use snapshot::{OverAllocation, SystemSnapshot};
pub use vector::ResourceVector;

/// Count of resource units. Negative counts are rejected at construction.
pub type Units = u64;

/// Converts a raw signed entry, rejecting negatives with the supplied error.
pub(crate) fn to_units<E>(value: i64, on_negative: impl FnOnce() -> E) -> Result<Units, E> {
    Units::try_from(value).map_err(|_| on_negative())
}

//! Length-R vector of resource units.

use serde::Serialize;

use super::{to_units, Units};
use crate::errors::InvalidInputError;

/// Per-resource unit counts, e.g. the available vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResourceVector(Vec<Units>);

impl ResourceVector {
    /// Validate raw values against the expected resource count.
    pub fn from_values(
        name: &'static str,
        raw: &[i64],
        len: usize,
    ) -> Result<Self, InvalidInputError> {
        if raw.len() != len {
            return Err(InvalidInputError::VectorLengthMismatch {
                vector: name,
                expected: len,
                actual: raw.len(),
            });
        }
        raw.iter()
            .enumerate()
            .map(|(j, &value)| {
                to_units(value, || InvalidInputError::negative_slot(name, j, value))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Units] {
        &self.0
    }
}

impl std::ops::Deref for ResourceVector {
    type Target = [Units];

    fn deref(&self) -> &[Units] {
        &self.0
    }
}

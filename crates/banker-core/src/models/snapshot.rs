//! The validated system snapshot consumed by the checker and graph builder.

use serde::{Deserialize, Serialize};

use super::{Matrix, NeedMatrix, ResourceVector, Units};
use crate::errors::InvalidInputError;

/// One evaluation's worth of input: labels, the two P×R matrices, and the
/// available vector. Immutable once built; every instance satisfies the shape
/// and non-negativity invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSnapshot")]
pub struct SystemSnapshot {
    processes: Vec<u32>,
    resources: Vec<u32>,
    allocation: Matrix,
    max_need: Matrix,
    available: ResourceVector,
}

/// Unvalidated on-disk shape. Only used to route deserialization through
/// [`SystemSnapshot::new`].
#[derive(Debug, Deserialize)]
struct RawSnapshot {
    processes: Vec<u32>,
    resources: Vec<u32>,
    allocation: Vec<Vec<i64>>,
    max_need: Vec<Vec<i64>>,
    available: Vec<i64>,
}

impl TryFrom<RawSnapshot> for SystemSnapshot {
    type Error = InvalidInputError;

    fn try_from(raw: RawSnapshot) -> Result<Self, Self::Error> {
        SystemSnapshot::new(
            raw.processes,
            raw.resources,
            &raw.allocation,
            &raw.max_need,
            &raw.available,
        )
    }
}

/// A cell where a process holds more than its declared maximum need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OverAllocation {
    pub process: usize,
    pub resource: usize,
    pub allocated: Units,
    pub max_need: Units,
}

impl From<OverAllocation> for InvalidInputError {
    fn from(o: OverAllocation) -> Self {
        InvalidInputError::AllocationExceedsMaxNeed {
            process: o.process,
            resource: o.resource,
            allocated: o.allocated,
            max_need: o.max_need,
        }
    }
}

impl SystemSnapshot {
    /// Validate raw inputs and build a snapshot.
    ///
    /// `processes` and `resources` are display labels; their lengths fix P and R.
    pub fn new(
        processes: Vec<u32>,
        resources: Vec<u32>,
        allocation: &[Vec<i64>],
        max_need: &[Vec<i64>],
        available: &[i64],
    ) -> Result<Self, InvalidInputError> {
        let p = processes.len();
        let r = resources.len();
        let allocation = Matrix::from_rows("allocation", allocation, p, r)?;
        let max_need = Matrix::from_rows("max_need", max_need, p, r)?;
        let available = ResourceVector::from_values("available", available, r)?;
        Ok(Self {
            processes,
            resources,
            allocation,
            max_need,
            available,
        })
    }

    /// Snapshot whose labels are simply `0..P` and `0..R`.
    ///
    /// Fails with `LimitExceeded` if P or R does not fit a `u32` label.
    pub fn indexed(
        allocation: &[Vec<i64>],
        max_need: &[Vec<i64>],
        available: &[i64],
    ) -> Result<Self, InvalidInputError> {
        Self::new(
            index_labels("processes", allocation.len())?,
            index_labels("resources", available.len())?,
            allocation,
            max_need,
            available,
        )
    }

    pub fn process_count(&self) -> usize {
        self.processes.len()
    }

    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }

    pub fn processes(&self) -> &[u32] {
        &self.processes
    }

    pub fn resources(&self) -> &[u32] {
        &self.resources
    }

    pub fn allocation(&self) -> &Matrix {
        &self.allocation
    }

    pub fn max_need(&self) -> &Matrix {
        &self.max_need
    }

    pub fn available(&self) -> &ResourceVector {
        &self.available
    }

    /// `max_need - allocation`. Over-allocated cells yield 0.
    pub fn need(&self) -> NeedMatrix {
        self.max_need.saturating_sub(&self.allocation)
    }

    /// Units of each resource currently held across all processes.
    pub fn total_allocated(&self) -> Vec<Units> {
        self.allocation.column_totals()
    }

    /// Every cell where allocation exceeds max need, in row-major order.
    pub fn over_allocations(&self) -> Vec<OverAllocation> {
        let mut found = Vec::new();
        for (i, (alloc, max)) in self
            .allocation
            .iter_rows()
            .zip(self.max_need.iter_rows())
            .enumerate()
        {
            for (j, (&allocated, &max_need)) in alloc.iter().zip(max).enumerate() {
                if allocated > max_need {
                    found.push(OverAllocation {
                        process: i,
                        resource: j,
                        allocated,
                        max_need,
                    });
                }
            }
        }
        found
    }

    /// Reject the snapshot if any process holds more than it could ever need.
    pub fn ensure_within_max_need(&self) -> Result<(), InvalidInputError> {
        match self.over_allocations().into_iter().next() {
            Some(over) => Err(over.into()),
            None => Ok(()),
        }
    }
}

/// Labels `0..count`.
fn index_labels(field: &'static str, count: usize) -> Result<Vec<u32>, InvalidInputError> {
    let end = u32::try_from(count).map_err(|_| InvalidInputError::LimitExceeded {
        field,
        limit: u32::MAX as usize,
        actual: count,
    })?;
    Ok((0..end).collect())
}

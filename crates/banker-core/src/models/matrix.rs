//! Dense row-major P×R matrix of resource units.

use serde::Serialize;

use super::{to_units, Units};
use crate::errors::InvalidInputError;

/// A P×R matrix of non-negative unit counts.
///
/// Only constructed through [`Matrix::from_rows`] (validating) or derived from
/// other matrices, so every instance has a consistent shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "Vec<Vec<Units>>")]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Units>,
}

/// Remaining per-process requirement, `max_need - allocation`.
pub type NeedMatrix = Matrix;

impl Matrix {
    /// Validate raw rows against the expected P×R shape.
    ///
    /// Checks the row count first, then each row's length, then each entry's sign,
    /// so the first reported error is always the coarsest one.
    pub fn from_rows(
        name: &'static str,
        raw: &[Vec<i64>],
        rows: usize,
        cols: usize,
    ) -> Result<Self, InvalidInputError> {
        if raw.len() != rows {
            return Err(InvalidInputError::ProcessCountMismatch {
                matrix: name,
                expected: rows,
                actual: raw.len(),
            });
        }
        if let Some((row, r)) = raw.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(InvalidInputError::RowLengthMismatch {
                matrix: name,
                row,
                expected: cols,
                actual: r.len(),
            });
        }

        let mut data = Vec::with_capacity(rows * cols);
        for (i, r) in raw.iter().enumerate() {
            for (j, &value) in r.iter().enumerate() {
                data.push(to_units(value, || {
                    InvalidInputError::negative_cell(name, i, j, value)
                })?);
            }
        }
        Ok(Self { rows, cols, data })
    }

    /// An all-zero matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Row `i` as a slice of length `cols`.
    ///
    /// # Panics
    /// Panics if `i >= rows`.
    pub fn row(&self, i: usize) -> &[Units] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    pub fn get(&self, i: usize, j: usize) -> Option<Units> {
        if i < self.rows && j < self.cols {
            Some(self.data[i * self.cols + j])
        } else {
            None
        }
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[Units]> + '_ {
        (0..self.rows).map(move |i| self.row(i))
    }

    /// Element-wise `self - other`, clamped at zero.
    ///
    /// Both matrices must share a shape; callers only use this on matrices
    /// validated against the same snapshot dimensions.
    pub(crate) fn saturating_sub(&self, other: &Matrix) -> Matrix {
        debug_assert_eq!((self.rows, self.cols), (other.rows, other.cols));
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(a, b)| a.saturating_sub(*b))
                .collect(),
        }
    }

    /// Column sums.
    pub fn column_totals(&self) -> Vec<Units> {
        let mut totals = vec![0 as Units; self.cols];
        for row in self.iter_rows() {
            for (t, v) in totals.iter_mut().zip(row) {
                *t = t.saturating_add(*v);
            }
        }
        totals
    }

    pub fn to_rows(&self) -> Vec<Vec<Units>> {
        self.iter_rows().map(<[Units]>::to_vec).collect()
    }
}

impl From<Matrix> for Vec<Vec<Units>> {
    fn from(m: Matrix) -> Self {
        m.to_rows()
    }
}

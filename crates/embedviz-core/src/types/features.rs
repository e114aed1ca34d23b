//! Feature matrix handed to the embedding and clustering collaborators.

use serde::{Deserialize, Serialize};

use crate::error::{VizError, VizResult};

/// N samples, each a fixed-length `f32` vector, stored row-major in one
/// flat buffer.
///
/// Construction validates that every row has the same dimensionality; all
/// later per-sample collections are validated against [`rows()`](Self::rows).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureMatrix {
    data: Vec<f32>,
    rows: usize,
    dims: usize,
}

impl FeatureMatrix {
    /// Build a matrix from per-sample vectors.
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` when a row's length differs from the first row's.
    pub fn from_rows(rows: Vec<Vec<f32>>) -> VizResult<Self> {
        let dims = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * dims);
        let n = rows.len();
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != dims {
                return Err(VizError::shape_mismatch(
                    format!("features[{i}]"),
                    dims,
                    row.len(),
                ));
            }
            data.extend_from_slice(&row);
        }
        Ok(Self { data, rows: n, dims })
    }

    /// Build a matrix from an already-flat row-major buffer.
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` when the buffer does not hold `rows * dims` values.
    pub fn from_flat(rows: usize, dims: usize, data: Vec<f32>) -> VizResult<Self> {
        if data.len() != rows * dims {
            return Err(VizError::shape_mismatch("features", rows * dims, data.len()));
        }
        Ok(Self { data, rows, dims })
    }

    /// Number of samples.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Dimensionality of each sample.
    pub fn dims(&self) -> usize {
        self.dims
    }

    /// True when the matrix holds no samples.
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// One sample as a slice.
    ///
    /// # Panics
    ///
    /// Panics when `index >= rows()`.
    pub fn row(&self, index: usize) -> &[f32] {
        let start = index * self.dims;
        &self.data[start..start + self.dims]
    }

    /// Iterate over all samples.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f32]> {
        self.data.chunks_exact(self.dims.max(1))
    }
}

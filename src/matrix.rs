//! Typed wrapper for validated distance matrices
//!
//! `DistanceMatrix` guarantees the square / symmetric / zero-diagonal
//! invariants at construction, so downstream code can rely on them
//! without rechecking.

use crate::condensed::{condensed_to_square, square_to_condensed};
use crate::error::DistanceError;
use crate::pooled::build_pooled_matrix;
use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

/// A validated symmetric pairwise-distance matrix with zero diagonal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceMatrix {
    dm: DMatrix<f64>,
}

impl DistanceMatrix {
    /// Validate and wrap a raw matrix.
    ///
    /// Symmetry and the zero diagonal are checked with exact equality;
    /// distances are copied between layouts, never recomputed, so no
    /// tolerance applies.
    pub fn new(dm: DMatrix<f64>) -> Result<Self, DistanceError> {
        if !dm.is_square() {
            return Err(DistanceError::ShapeMismatch(format!(
                "distance matrix must be square, got {}x{}",
                dm.nrows(),
                dm.ncols()
            )));
        }
        for i in 0..dm.nrows() {
            if dm[(i, i)] != 0.0 {
                return Err(DistanceError::ShapeMismatch(format!(
                    "diagonal entry ({}, {}) is {}, expected 0",
                    i,
                    i,
                    dm[(i, i)]
                )));
            }
            for j in i + 1..dm.ncols() {
                if dm[(i, j)] != dm[(j, i)] {
                    return Err(DistanceError::ShapeMismatch(format!(
                        "entries ({}, {}) and ({}, {}) differ: {} vs {}",
                        i,
                        j,
                        j,
                        i,
                        dm[(i, j)],
                        dm[(j, i)]
                    )));
                }
            }
        }
        Ok(Self { dm })
    }

    /// Build a distance matrix from its condensed upper-triangular form.
    pub fn from_condensed(length: usize, vec: &[f64]) -> Result<Self, DistanceError> {
        // Symmetry and the zero diagonal hold by construction here.
        let dm = condensed_to_square(length, vec)?;
        Ok(Self { dm })
    }

    /// Flatten back to the condensed upper-triangular vector.
    pub fn to_condensed(&self) -> Vec<f64> {
        // Cannot fail: the wrapped matrix is square by construction.
        square_to_condensed(&self.dm).unwrap_or_default()
    }

    /// Pool this matrix with a second population and its cross-distances.
    ///
    /// Returns the raw block matrix; the pooled layout mirrors the
    /// cross block rather than transposing it, so the result is not
    /// guaranteed symmetric and is not re-wrapped.
    pub fn pool(
        &self,
        other: &DistanceMatrix,
        cross: &DMatrix<f64>,
    ) -> Result<DMatrix<f64>, DistanceError> {
        build_pooled_matrix(&self.dm, &other.dm, cross)
    }

    /// Number of items covered by this matrix
    pub fn len(&self) -> usize {
        self.dm.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.dm.nrows() == 0
    }

    /// Borrow the underlying matrix
    pub fn inner(&self) -> &DMatrix<f64> {
        &self.dm
    }

    /// Unwrap into the underlying matrix
    pub fn into_inner(self) -> DMatrix<f64> {
        self.dm
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::DMatrix;

    fn sample() -> DistanceMatrix {
        DistanceMatrix::from_condensed(3, &[1.0, 2.0, 3.0]).unwrap()
    }

    #[test]
    fn test_new_accepts_valid_matrix() {
        let dm = DMatrix::from_row_slice(
            3,
            3,
            &[0.0, 1.0, 2.0, 1.0, 0.0, 3.0, 2.0, 3.0, 0.0],
        );
        let wrapped = DistanceMatrix::new(dm.clone()).unwrap();
        assert_eq!(wrapped.inner(), &dm);
        assert_eq!(wrapped.len(), 3);
    }

    #[test]
    fn test_new_rejects_asymmetry() {
        let dm = DMatrix::from_row_slice(2, 2, &[0.0, 1.0, 2.0, 0.0]);
        let err = DistanceMatrix::new(dm).unwrap_err();
        assert!(matches!(err, DistanceError::ShapeMismatch(_)));
    }

    #[test]
    fn test_new_rejects_nonzero_diagonal() {
        let dm = DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 2.0, 0.0]);
        let err = DistanceMatrix::new(dm).unwrap_err();
        assert!(matches!(err, DistanceError::ShapeMismatch(_)));
    }

    #[test]
    fn test_condensed_round_trip() {
        let dm = sample();
        assert_eq!(dm.to_condensed(), vec![1.0, 2.0, 3.0]);
        let rebuilt = DistanceMatrix::from_condensed(3, &dm.to_condensed()).unwrap();
        assert_eq!(rebuilt, dm);
    }

    #[test]
    fn test_pool_delegates() {
        let dm0 = DistanceMatrix::from_condensed(2, &[1.0]).unwrap();
        let dm1 = DistanceMatrix::from_condensed(2, &[2.0]).unwrap();
        let cross = DMatrix::from_row_slice(2, 2, &[3.0, 4.0, 5.0, 6.0]);

        let pooled = dm0.pool(&dm1, &cross).unwrap();
        assert_eq!(pooled.nrows(), 4);
        assert_eq!(pooled[(0, 2)], 3.0);
        assert_eq!(pooled[(2, 0)], 6.0);
    }

    #[test]
    fn test_serde_round_trip() {
        let dm = sample();
        let json = serde_json::to_string(&dm).unwrap();
        let back: DistanceMatrix = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dm);
    }
}

//! Pooled distance matrix assembly
//!
//! Two disjoint populations with their own distance matrices, plus the
//! cross-distances between them, combine into one block matrix covering
//! the union of items.

use crate::error::DistanceError;
use log::debug;
use nalgebra::DMatrix;

/// Assemble the pooled distance matrix for two populations.
///
/// `dm0` (`n0 x n0`) lands in the top-left block, `dm1` (`n1 x n1`) in
/// the bottom-right, the cross-distance matrix `dmi` (`n0 x n1`) in the
/// top-right, and `dmi` with both axes reversed in the bottom-left.
/// The bottom-left block is an axis reversal, not a transpose, so the
/// stacking is only well-formed for equal population sizes; a ragged
/// layout is rejected as a shape mismatch.
pub fn build_pooled_matrix(
    dm0: &DMatrix<f64>,
    dm1: &DMatrix<f64>,
    dmi: &DMatrix<f64>,
) -> Result<DMatrix<f64>, DistanceError> {
    if !dm0.is_square() {
        return Err(DistanceError::ShapeMismatch(format!(
            "first distance matrix must be square, got {}x{}",
            dm0.nrows(),
            dm0.ncols()
        )));
    }
    if !dm1.is_square() {
        return Err(DistanceError::ShapeMismatch(format!(
            "second distance matrix must be square, got {}x{}",
            dm1.nrows(),
            dm1.ncols()
        )));
    }
    let n0 = dm0.nrows();
    let n1 = dm1.nrows();
    if dmi.nrows() != n0 || dmi.ncols() != n1 {
        return Err(DistanceError::ShapeMismatch(format!(
            "cross-distance matrix must be {}x{}, got {}x{}",
            n0,
            n1,
            dmi.nrows(),
            dmi.ncols()
        )));
    }
    // The reversed cross block keeps dmi's n0 x n1 shape but must fill
    // the n1 x n0 bottom-left slot.
    if n0 != n1 {
        return Err(DistanceError::ShapeMismatch(format!(
            "reversed cross block is {}x{} but the bottom-left slot is {}x{}",
            n0, n1, n1, n0
        )));
    }

    let n = n0 + n1;
    let mut pooled = DMatrix::zeros(n, n);
    pooled.view_mut((0, 0), (n0, n0)).copy_from(dm0);
    pooled.view_mut((0, n0), (n0, n1)).copy_from(dmi);
    pooled.view_mut((n0, n0), (n1, n1)).copy_from(dm1);
    for i in 0..n0 {
        for j in 0..n1 {
            pooled[(n0 + i, j)] = dmi[(n0 - 1 - i, n1 - 1 - j)];
        }
    }

    debug!("Pooled {}x{} and {}x{} matrices into {}x{}", n0, n0, n1, n1, n, n);
    Ok(pooled)
}

//! Condensed-to-square distance matrix conversion
//!
//! A condensed vector stores only the upper-triangular (non-diagonal)
//! entries of a symmetric matrix, in row-major order. Expanding it back
//! to the full square form is pure index arithmetic.

use crate::error::DistanceError;
use log::debug;
use nalgebra::DMatrix;

/// Number of condensed entries for a `length x length` distance matrix
pub fn condensed_len(length: usize) -> usize {
    length * length.saturating_sub(1) / 2
}

/// Expand a condensed vector into the full symmetric `length x length`
/// distance matrix.
///
/// The output is zero on the diagonal and mirrored across it, so
/// `dm[(i, j)] == dm[(j, i)]` holds by construction.
pub fn condensed_to_square(length: usize, vec: &[f64]) -> Result<DMatrix<f64>, DistanceError> {
    if length < 1 {
        return Err(DistanceError::InvalidDimension(
            "matrix dimension must be at least 1".to_string(),
        ));
    }
    let expected = condensed_len(length);
    if vec.len() != expected {
        return Err(DistanceError::InvalidDimension(format!(
            "dimension {} requires {} condensed entries, got {}",
            length,
            expected,
            vec.len()
        )));
    }

    let mut dm = DMatrix::zeros(length, length);
    // Row idx covers columns idx+1..length. Its condensed block starts
    // at idx + pos_count, and pos_count advances by block_len - 1; the
    // shrinking row start makes up the difference, landing each row at
    // the standard row-major upper-triangular offset.
    let mut pos_count = 0;
    for idx in 0..length - 1 {
        for (k, col) in (idx + 1..length).enumerate() {
            let value = vec[idx + pos_count + k];
            dm[(idx, col)] = value;
            dm[(col, idx)] = value;
        }
        pos_count += length - idx - 2;
    }

    debug!(
        "Expanded {} condensed entries into a {}x{} matrix",
        vec.len(),
        length,
        length
    );
    Ok(dm)
}

/// Same conversion for a condensed vector supplied as separate segments
/// (e.g. per-row chunks); segments are concatenated before indexing.
pub fn condensed_to_square_chunked(
    length: usize,
    chunks: &[Vec<f64>],
) -> Result<DMatrix<f64>, DistanceError> {
    let flat: Vec<f64> = chunks.iter().flatten().copied().collect();
    condensed_to_square(length, &flat)
}

/// Flatten a square symmetric matrix back to its condensed
/// upper-triangular vector, using the same row-major ordering.
pub fn square_to_condensed(dm: &DMatrix<f64>) -> Result<Vec<f64>, DistanceError> {
    if !dm.is_square() {
        return Err(DistanceError::ShapeMismatch(format!(
            "expected a square matrix, got {}x{}",
            dm.nrows(),
            dm.ncols()
        )));
    }
    let length = dm.nrows();
    let mut vec = Vec::with_capacity(condensed_len(length));
    for idx in 0..length.saturating_sub(1) {
        for col in idx + 1..length {
            vec.push(dm[(idx, col)]);
        }
    }
    Ok(vec)
}

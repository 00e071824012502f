//! distmat-core — distance-matrix layout transforms
//!
//! Expands condensed (upper-triangular, vectorized) pairwise-distance
//! vectors into full symmetric matrices, and pools two sub-population
//! distance matrices with their cross-distances into one block matrix.

pub mod condensed;
pub mod error;
pub mod matrix;
pub mod pooled;

pub use condensed::{condensed_len, condensed_to_square, square_to_condensed};
pub use error::DistanceError;
pub use matrix::DistanceMatrix;
pub use pooled::build_pooled_matrix;

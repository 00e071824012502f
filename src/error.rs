//! Error types for distance-matrix layout operations

/// Layout-transform errors
#[derive(Debug, thiserror::Error)]
pub enum DistanceError {
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),
}

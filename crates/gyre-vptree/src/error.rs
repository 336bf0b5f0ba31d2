//! Error types for index construction and queries.

/// Errors reported by [`crate::VpTree`].
#[derive(Debug, Clone, thiserror::Error)]
pub enum VpTreeError {
    /// `k` must be at least 1 for a nearest-neighbor query.
    #[error("k must be >= 1 for a knn query")]
    InvalidK,

    /// The parallel point/id lists passed to the constructor differ in length.
    #[error("parallel list length mismatch: {points} points vs {ids} ids")]
    LengthMismatch { points: usize, ids: usize },
}

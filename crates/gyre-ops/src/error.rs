//! Error types for strict-mode validation.
//!
//! The operations in this crate never fault on degenerate geometric input —
//! they clamp or return sentinel values instead. These errors exist only for
//! callers that opt into strict validation of external data via
//! [`crate::assert_in_ball`] and [`crate::assert_same_dim`].

/// Errors reported by the opt-in validators.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GyreError {
    /// A vector was outside the open unit ball (‖x‖ ≥ 1.0).
    #[error("vector outside the unit ball: ‖x‖ = {norm:.6} ≥ 1.0")]
    OutsideBall { norm: f64 },

    /// Two inputs had incompatible dimensions.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
}

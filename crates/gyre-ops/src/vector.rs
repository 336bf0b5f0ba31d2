//! # Euclidean vector primitives
//!
//! Flat `&[f64]` arithmetic shared by every model of hyperbolic space in this
//! crate. Dimension is whatever the caller passes in — nothing here assumes a
//! fixed length.
//!
//! Binary operations zip over the **shorter** of their two inputs. Mismatched
//! lengths are a caller bug, tolerated silently rather than escalated; use
//! [`crate::assert_same_dim`] to validate external inputs up front.

// ─────────────────────────────────────────────
// Inner products and norms
// ─────────────────────────────────────────────

/// Dot product ⟨a, b⟩ over the shorter of the two inputs.
#[inline]
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Squared Euclidean norm ‖v‖².
#[inline]
pub fn norm_sq(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum()
}

/// Euclidean norm ‖v‖.
#[inline]
pub fn norm(v: &[f64]) -> f64 {
    norm_sq(v).sqrt()
}

// ─────────────────────────────────────────────
// Elementwise arithmetic
// ─────────────────────────────────────────────

/// Scale every component by `s`.
#[inline]
pub fn scale(v: &[f64], s: f64) -> Vec<f64> {
    v.iter().map(|&x| x * s).collect()
}

/// Componentwise sum over the shorter input.
#[inline]
pub fn add(a: &[f64], b: &[f64]) -> Vec<f64> {
    a.iter().zip(b.iter()).map(|(x, y)| x + y).collect()
}

/// Componentwise difference over the shorter input.
#[inline]
pub fn sub(a: &[f64], b: &[f64]) -> Vec<f64> {
    a.iter().zip(b.iter()).map(|(x, y)| x - y).collect()
}

/// Unit vector in the direction of `v`.
///
/// Returns the zero vector when ‖v‖ < [`crate::EPS`] instead of dividing by a
/// denormal norm.
#[inline]
pub fn normalize(v: &[f64]) -> Vec<f64> {
    let n = norm(v);
    if n < crate::EPS {
        return vec![0.0; v.len()];
    }
    scale(v, 1.0 / n)
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

//! # Lorentz (hyperboloid) model
//!
//! Coordinates on the upper sheet of the two-sheeted hyperboloid in Minkowski
//! space: ⟨x,x⟩_L = −1 with x₀ > 0, where
//!
//! ```text
//! ⟨x,y⟩_L = −x₀·y₀ + Σᵢ xᵢ·yᵢ   (i ≥ 1)
//! ```
//!
//! A Lorentz point has one more coordinate than its Poincaré ball
//! counterpart; the extra dimension is always derived from the input's own
//! length, never from a constant. Compared to the ball, the hyperboloid has
//! no boundary to clamp against, which makes its distance formula the stabler
//! choice for accumulation-heavy work.
//!
//! ## Conversion formulas
//!
//! ```text
//! Poincaré → Lorentz:  x₀ = (1 + ‖p‖²)/(1 − ‖p‖²),   xᵢ = 2·pᵢ/(1 − ‖p‖²)
//! Lorentz → Poincaré:  pᵢ = xᵢ₊₁ / (1 + x₀)
//! ```

use crate::vector::{dot, norm, norm_sq, scale};
use crate::{project_to_ball, EPS};

// ─────────────────────────────────────────────
// Minkowski inner product
// ─────────────────────────────────────────────

/// Minkowski inner product ⟨x,y⟩_L = −x₀y₀ + Σᵢ xᵢyᵢ.
///
/// Zips over the shorter input; empty input yields 0.
#[inline]
pub fn minkowski_dot(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len().min(y.len());
    if n == 0 {
        return 0.0;
    }
    let mut sum = -x[0] * y[0];
    for i in 1..n {
        sum += x[i] * y[i];
    }
    sum
}

/// The hyperboloid origin (1, 0, …, 0) with `dim` spatial coordinates.
pub fn origin(dim: usize) -> Vec<f64> {
    let mut x = vec![0.0; dim + 1];
    x[0] = 1.0;
    x
}

// ─────────────────────────────────────────────
// Poincaré ↔ Lorentz conversion
// ─────────────────────────────────────────────

/// Lift a Poincaré ball point onto the hyperboloid (output dim = input + 1).
///
/// The input is clamped into the open ball first, so the denominator
/// 1 − ‖p‖² is bounded away from zero.
pub fn from_poincare(p: &[f64]) -> Vec<f64> {
    let p = project_to_ball(p);
    let p_sq = norm_sq(&p);
    let s = 1.0 - p_sq;
    let mut x = Vec::with_capacity(p.len() + 1);
    x.push((1.0 + p_sq) / s);
    x.extend(p.iter().map(|&pi| 2.0 * pi / s));
    x
}

/// Project a hyperboloid point back into the Poincaré ball
/// (output dim = input − 1).
pub fn to_poincare(x: &[f64]) -> Vec<f64> {
    if x.is_empty() {
        return Vec::new();
    }
    let denom = (1.0 + x[0]).max(EPS);
    let p: Vec<f64> = x[1..].iter().map(|&xi| xi / denom).collect();
    project_to_ball(&p)
}

// ─────────────────────────────────────────────
// Lorentz distance
// ─────────────────────────────────────────────

/// Hyperbolic distance on the hyperboloid.
///
/// ```text
/// d(x, y) = acosh(max(1, −⟨x,y⟩_L))
/// ```
///
/// The acosh argument is floored at 1 to absorb the floating-point overshoot
/// that would otherwise produce a domain fault for near-identical points.
#[inline]
pub fn distance(x: &[f64], y: &[f64]) -> f64 {
    (-minkowski_dot(x, y)).max(1.0).acosh()
}

// ─────────────────────────────────────────────
// Lorentz boost
// ─────────────────────────────────────────────

/// The boost B_p carrying the hyperboloid origin to `p`, applied to `x`.
///
/// Decomposes `p` by rapidity: cosh ρ = p₀ and sinh ρ = ‖p⃗‖ along the unit
/// spatial direction u = p⃗/‖p⃗‖, then
///
/// ```text
/// x₀' = cosh ρ · x₀ + sinh ρ · ⟨u, x⃗⟩
/// x⃗'  = x⃗ + (sinh ρ · x₀ + (cosh ρ − 1) · ⟨u, x⃗⟩) · u
/// ```
///
/// Returns `x` unchanged when `p` is numerically the origin (ρ ≈ 0).
pub fn boost(p: &[f64], x: &[f64]) -> Vec<f64> {
    if p.len() < 2 || x.len() < 2 {
        return x.to_vec();
    }
    let spatial = &p[1..];
    let sinh_r = norm(spatial);
    if sinh_r < EPS {
        return x.to_vec();
    }
    let u = scale(spatial, 1.0 / sinh_r);
    let cosh_r = p[0];

    let x0 = x[0];
    let xs = &x[1..];
    let ux = dot(&u, xs);

    let mut out = Vec::with_capacity(x.len());
    out.push(cosh_r * x0 + sinh_r * ux);
    let coeff = sinh_r * x0 + (cosh_r - 1.0) * ux;
    out.extend(
        xs.iter()
            .zip(u.iter())
            .map(|(&xi, &ui)| xi + coeff * ui),
    );
    out
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

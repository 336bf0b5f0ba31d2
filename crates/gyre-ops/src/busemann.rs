//! # Ideal boundary: Busemann functions and horocycles
//!
//! An **ideal point** ξ is a unit vector on the boundary sphere — never a
//! valid interior point. The Busemann function B_ξ measures signed "distance
//! toward ξ"; its level sets are horocycles centered at ξ.
//!
//! ```text
//! B_ξ(x) = ln( (1 + ‖x‖² − 2⟨x,ξ⟩) / (1 − ‖x‖²) )
//! ```
//!
//! B_ξ decreases toward ξ (→ −∞ at the ideal point itself) and increases
//! away from it; B_ξ(0) = 0.

use crate::geodesic::geodesic_interp;
use crate::vector::{dot, norm_sq, scale};
use crate::{EPS, MAX_NORM};

/// Iteration budget for the horocycle bisection.
const BISECT_STEPS: usize = 50;

// ─────────────────────────────────────────────
// Busemann function
// ─────────────────────────────────────────────

/// Busemann function B_ξ(x) for a unit boundary vector `xi`.
///
/// Returns the unbounded sentinel (`f64::INFINITY`) for boundary-violating
/// `x`; the log numerator is floored at [`EPS`] against cancellation when `x`
/// hugs ξ.
pub fn busemann(xi: &[f64], x: &[f64]) -> f64 {
    let x_sq = norm_sq(x);
    if x_sq >= 1.0 {
        return f64::INFINITY;
    }
    // ‖x − ξ‖² expanded with ‖ξ‖ = 1
    let numerator = (1.0 + x_sq - 2.0 * dot(x, xi)).max(EPS);
    (numerator / (1.0 - x_sq)).ln()
}

// ─────────────────────────────────────────────
// Horocycle projection
// ─────────────────────────────────────────────

/// Project `x` onto the horocycle {B_ξ = level} along the geodesic from `x`
/// toward ξ.
///
/// Bisects the interpolation parameter on the geodesic from `x` to the point
/// just inside the boundary in the direction of ξ. Bisection is used instead
/// of a closed-form inversion for robustness across parameter ranges; the
/// budget is fixed at 50 steps (resolution 2⁻⁵⁰, far below f64 noise).
///
/// B_ξ is monotone decreasing along that ray, so if `level` is not reachable
/// the nearer endpoint is returned.
pub fn horocycle_project(xi: &[f64], level: f64, x: &[f64]) -> Vec<f64> {
    // ξ scaled just inside the boundary: the closest representable point of
    // the geodesic ray toward the ideal point.
    let target = scale(xi, MAX_NORM);

    let mut lo = 0.0_f64;
    let mut hi = 1.0_f64;
    for _ in 0..BISECT_STEPS {
        let mid = 0.5 * (lo + hi);
        let p = geodesic_interp(x, &target, mid);
        if busemann(xi, &p) > level {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    geodesic_interp(x, &target, 0.5 * (lo + hi))
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

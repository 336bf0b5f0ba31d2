//! # Klein (Beltrami-Klein) model
//!
//! The model of hyperbolic space where **geodesics are straight lines**.
//! Klein and Poincaré coordinates share the same open unit ball — only the
//! metric differs — so the two must never be mixed without explicit
//! conversion.
//!
//! ## Conversion formulas
//!
//! ```text
//! Poincaré → Klein:  k_i = 2·p_i / (1 + ‖p‖²)
//! Klein → Poincaré:  p_i = k_i / (1 + √(1 − ‖k‖²))
//! ```
//!
//! Both directions are closed-form and per-point; a round-trip returns the
//! original point within floating-point tolerance. Inputs that violate the
//! ball invariant are clamped first.

use crate::vector::{dot, norm_sq};
use crate::project_to_ball;

// ─────────────────────────────────────────────
// Poincaré ↔ Klein projection
// ─────────────────────────────────────────────

/// Project a Poincaré ball point into the Klein model.
///
/// The Klein point is always inside the unit disk: for ‖p‖ < 1,
/// ‖k‖ = 2‖p‖/(1+‖p‖²) < 1.
#[inline]
pub fn from_poincare(p: &[f64]) -> Vec<f64> {
    let p = project_to_ball(p);
    let denom = 1.0 + norm_sq(&p);
    p.iter().map(|&pi| (2.0 * pi) / denom).collect()
}

/// Project a Klein model point back to the Poincaré ball.
#[inline]
pub fn to_poincare(k: &[f64]) -> Vec<f64> {
    let k = project_to_ball(k);
    let denom = 1.0 + (1.0 - norm_sq(&k)).max(0.0).sqrt();
    k.iter().map(|&ki| ki / denom).collect()
}

// ─────────────────────────────────────────────
// Klein distance
// ─────────────────────────────────────────────

/// Hyperbolic distance computed directly in Klein coordinates.
///
/// ```text
/// d(a, b) = acosh( (1 − ⟨a,b⟩) / √((1−‖a‖²)(1−‖b‖²)) )
/// ```
///
/// Agrees with the Poincaré distance of the corresponding points. Returns the
/// unbounded sentinel (positive infinity) when either point sits on the
/// boundary.
pub fn distance(a: &[f64], b: &[f64]) -> f64 {
    let denom = ((1.0 - norm_sq(a)) * (1.0 - norm_sq(b))).sqrt();
    if denom <= 0.0 || !denom.is_finite() {
        return f64::INFINITY;
    }
    let arg = ((1.0 - dot(a, b)) / denom).max(1.0);
    arg.acosh()
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::norm as l2_norm;

    #[test]
    fn roundtrip_2d() {
        let p = vec![0.3, 0.4];
        let recovered = to_poincare(&from_poincare(&p));
        for (a, b) in p.iter().zip(recovered.iter()) {
            assert!((a - b).abs() < 1e-12, "roundtrip failed: {a} vs {b}");
        }
    }

    #[test]
    fn roundtrip_error_below_threshold() {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        for _ in 0..10_000 {
            let dim = 8;
            let p: Vec<f64> = (0..dim).map(|_| rng.gen_range(-0.3..0.3)).collect();
            if l2_norm(&p) >= 0.9 {
                continue;
            }
            let recovered = to_poincare(&from_poincare(&p));
            let error: f64 = p
                .iter()
                .zip(recovered.iter())
                .map(|(a, b)| (a - b).abs())
                .fold(0.0, f64::max);
            assert!(error < 1e-6, "roundtrip error {error} exceeds 1e-6");
        }
    }

    #[test]
    fn origin_maps_to_origin() {
        assert!(l2_norm(&from_poincare(&[0.0, 0.0, 0.0])) < 1e-15);
    }

    #[test]
    fn stays_inside_ball() {
        let k = from_poincare(&[0.9, 0.0]);
        assert!(l2_norm(&k) < 1.0, "Klein norm {} >= 1.0", l2_norm(&k));
    }

    #[test]
    fn outside_input_is_clamped_not_rejected() {
        let k = from_poincare(&[0.8, 0.8]); // norm ≈ 1.13
        assert!(k.iter().all(|c| c.is_finite()));
        assert!(l2_norm(&k) < 1.0);
    }

    #[test]
    fn distance_self_is_zero() {
        let k = from_poincare(&[0.3, 0.4]);
        assert!(distance(&k, &k) < 1e-10);
    }

    #[test]
    fn distance_matches_poincare() {
        let p1 = vec![0.1, 0.2];
        let p2 = vec![0.4, -0.1];
        let d_poincare = crate::geodesic::poincare_distance(&p1, &p2);
        let d_klein = distance(&from_poincare(&p1), &from_poincare(&p2));
        assert!(
            (d_poincare - d_klein).abs() < 1e-8,
            "Poincaré dist {d_poincare} ≠ Klein dist {d_klein}"
        );
    }
}

//! # Geodesics and tangent-space calculus
//!
//! Distance, geodesic interpolation, exponential/logarithmic maps at an
//! arbitrary base point, parallel transport, and the closed-form Einstein
//! midpoint. Everything here operates in Poincaré ball coordinates and is
//! built from the Möbius algebra at the crate root; the hyperboloid-side
//! distance and boost live in [`crate::lorentz`].

use crate::vector::{norm, norm_sq, scale};
use crate::{
    conformal_factor, gyration, gyro_scale, klein, mobius_add, EPS, MAX_NORM,
};

// ─────────────────────────────────────────────
// Poincaré distance
// ─────────────────────────────────────────────

/// Hyperbolic distance in the Poincaré ball.
///
/// ```text
/// d(x, y) = 2 · atanh(‖(−x) ⊕ y‖)
/// ```
///
/// Points effectively coincident with the domain boundary make the distance
/// unbounded: the sentinel `f64::INFINITY` is returned instead of an error.
/// Otherwise the atanh argument is ceiled at [`MAX_NORM`] to absorb
/// floating-point overshoot.
pub fn poincare_distance(x: &[f64], y: &[f64]) -> f64 {
    if norm_sq(x) >= 1.0 || norm_sq(y) >= 1.0 {
        return f64::INFINITY;
    }
    let diff = mobius_add(&scale(x, -1.0), y);
    let n = norm(&diff);
    if n >= 1.0 {
        return f64::INFINITY;
    }
    2.0 * n.min(MAX_NORM).atanh()
}

// ─────────────────────────────────────────────
// Geodesic interpolation
// ─────────────────────────────────────────────

/// Point at fraction `t` along the geodesic from `x` to `y`:
///
/// ```text
/// γ(t) = x ⊕ (t ⊗ ((−x) ⊕ y))
/// ```
///
/// Endpoints are exact: `t ≤ 0` returns `x` and `t ≥ 1` returns `y` with no
/// floating round-off.
pub fn geodesic_interp(x: &[f64], y: &[f64], t: f64) -> Vec<f64> {
    if t <= 0.0 {
        return x.to_vec();
    }
    if t >= 1.0 {
        return y.to_vec();
    }
    let diff = mobius_add(&scale(x, -1.0), y);
    mobius_add(x, &gyro_scale(t, &diff))
}

/// Hyperbolic midpoint γ(0.5) of `x` and `y`.
#[inline]
pub fn midpoint(x: &[f64], y: &[f64]) -> Vec<f64> {
    geodesic_interp(x, y, 0.5)
}

// ─────────────────────────────────────────────
// Einstein midpoint
// ─────────────────────────────────────────────

/// Weighted Einstein midpoint of a set of ball points.
///
/// Closed-form Lorentz-factor-weighted average, computed on the Klein side
/// where the formula is a plain convex combination:
///
/// ```text
/// m = Σᵢ wᵢ·γᵢ·kᵢ / Σᵢ wᵢ·γᵢ,    γᵢ = 1/√(1 − ‖kᵢ‖²)
/// ```
///
/// The cheaper alternative to iterative Fréchet-mean optimization. Points at
/// or beyond the ball boundary are skipped; if the accumulated weight
/// underflows [`EPS`] (empty input, all points skipped, or cancelling
/// weights) the origin is returned.
pub fn einstein_midpoint_weighted(points: &[&[f64]], weights: &[f64]) -> Vec<f64> {
    let dim = points.first().map_or(0, |p| p.len());
    let mut acc = vec![0.0; dim];
    let mut total = 0.0;

    for (&p, &w) in points.iter().zip(weights.iter()) {
        if norm_sq(p) >= 1.0 {
            continue;
        }
        let k = klein::from_poincare(p);
        let gamma = 1.0 / (1.0 - norm_sq(&k)).max(EPS).sqrt();
        let wg = w * gamma;
        for (a, &ki) in acc.iter_mut().zip(k.iter()) {
            *a += wg * ki;
        }
        total += wg;
    }

    if total.abs() < EPS {
        return vec![0.0; dim];
    }
    klein::to_poincare(&scale(&acc, 1.0 / total))
}

/// Unweighted Einstein midpoint (all weights 1).
pub fn einstein_midpoint(points: &[&[f64]]) -> Vec<f64> {
    einstein_midpoint_weighted(points, &vec![1.0; points.len()])
}

// ─────────────────────────────────────────────
// Exponential / logarithmic maps at a base point
// ─────────────────────────────────────────────

/// Exponential map at `x`: tangent vector `v` → ball point.
///
/// ```text
/// exp_x(v) = x ⊕ (tanh(λ_x·‖v‖/2) · v/‖v‖)
/// ```
///
/// Returns `x` unchanged for near-zero `v`.
pub fn exp_map(x: &[f64], v: &[f64]) -> Vec<f64> {
    let v_norm = norm(v);
    if v_norm < EPS {
        return x.to_vec();
    }
    let lambda = conformal_factor(x);
    let magnitude = (lambda * v_norm / 2.0).tanh();
    mobius_add(x, &scale(v, magnitude / v_norm))
}

/// Logarithmic map at `x`: ball point `y` → tangent vector at `x`.
///
/// ```text
/// log_x(y) = (2/λ_x) · atanh(‖d‖) · d/‖d‖,    d = (−x) ⊕ y
/// ```
///
/// Inverse of [`exp_map`]. Returns the zero vector when `x` and `y` coincide
/// within [`EPS`].
pub fn log_map(x: &[f64], y: &[f64]) -> Vec<f64> {
    let diff = mobius_add(&scale(x, -1.0), y);
    let n = norm(&diff);
    if n < EPS {
        return vec![0.0; x.len()];
    }
    let lambda = conformal_factor(x);
    scale(&diff, (2.0 / lambda) * n.min(MAX_NORM).atanh() / n)
}

// ─────────────────────────────────────────────
// Parallel transport
// ─────────────────────────────────────────────

/// Parallel transport of tangent vector `v` from `x`'s tangent space to `y`'s:
///
/// ```text
/// PT_{x→y}(v) = gyr[y, −x](v) · λ_x/λ_y
/// ```
///
/// Required whenever directions anchored at different base points are
/// compared — gradient-style computations transported across the ball.
pub fn parallel_transport(x: &[f64], y: &[f64], v: &[f64]) -> Vec<f64> {
    if norm(v) < EPS {
        return v.to_vec();
    }
    let rotated = gyration(y, &scale(x, -1.0), v);
    scale(&rotated, conformal_factor(x) / conformal_factor(y))
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::norm as l2_norm;

    // ── distance ────────────────────────────────

    #[test]
    fn distance_known_value_on_axis() {
        // d([0,0], [0.6,0]) = 2·atanh(0.6) ≈ 1.3863
        let d = poincare_distance(&[0.0, 0.0], &[0.6, 0.0]);
        assert!((d - 2.0 * 0.6f64.atanh()).abs() < 1e-9, "d = {d}");
        assert!((d - 1.3863).abs() < 1e-3);
    }

    #[test]
    fn distance_self_is_zero() {
        let p = vec![0.3, 0.4];
        assert!(poincare_distance(&p, &p) < 1e-12);
    }

    #[test]
    fn distance_is_symmetric() {
        let u = vec![0.1, 0.2];
        let v = vec![0.3, -0.1];
        let d1 = poincare_distance(&u, &v);
        let d2 = poincare_distance(&v, &u);
        assert!((d1 - d2).abs() < 1e-9);
    }

    #[test]
    fn distance_triangle_inequality_random() {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        for _ in 0..1_000 {
            let mut pt = || -> Vec<f64> {
                let v: Vec<f64> = (0..4).map(|_| rng.gen_range(-0.4..0.4)).collect();
                v
            };
            let (a, b, c) = (pt(), pt(), pt());
            let d_ac = poincare_distance(&a, &c);
            let d_ab = poincare_distance(&a, &b);
            let d_bc = poincare_distance(&b, &c);
            assert!(
                d_ac <= d_ab + d_bc + 1e-9,
                "triangle inequality violated: {d_ac} > {d_ab} + {d_bc}"
            );
        }
    }

    #[test]
    fn distance_unbounded_at_boundary() {
        assert_eq!(
            poincare_distance(&[1.0, 0.0], &[0.0, 0.0]),
            f64::INFINITY
        );
        assert_eq!(
            poincare_distance(&[0.0, 0.0], &[0.8, 0.8]),
            f64::INFINITY
        );
    }

    // ── interpolation ───────────────────────────

    #[test]
    fn interp_endpoints_are_exact() {
        let x = vec![0.123456789, -0.3];
        let y = vec![-0.2, 0.45];
        assert_eq!(geodesic_interp(&x, &y, 0.0), x);
        assert_eq!(geodesic_interp(&x, &y, 1.0), y);
        assert_eq!(geodesic_interp(&x, &y, -0.5), x);
        assert_eq!(geodesic_interp(&x, &y, 1.5), y);
    }

    #[test]
    fn interp_midpoint_is_equidistant() {
        let x = vec![0.2, 0.1];
        let y = vec![-0.3, 0.4];
        let m = midpoint(&x, &y);
        let d1 = poincare_distance(&x, &m);
        let d2 = poincare_distance(&m, &y);
        assert!((d1 - d2).abs() < 1e-9, "midpoint skewed: {d1} vs {d2}");
    }

    #[test]
    fn interp_distance_is_monotone_in_t() {
        let x = vec![0.1, -0.2];
        let y = vec![0.5, 0.3];
        let mut prev = 0.0;
        for i in 0..=20 {
            let t = i as f64 / 20.0;
            let d = poincare_distance(&x, &geodesic_interp(&x, &y, t));
            assert!(d >= prev - 1e-9, "d(x, γ({t})) = {d} < {prev}");
            prev = d;
        }
    }

    #[test]
    fn interp_stays_on_geodesic() {
        // d(x, γ(t)) + d(γ(t), y) = d(x, y)
        let x = vec![0.2, 0.0];
        let y = vec![-0.1, 0.4];
        let total = poincare_distance(&x, &y);
        let p = geodesic_interp(&x, &y, 0.3);
        let sum = poincare_distance(&x, &p) + poincare_distance(&p, &y);
        assert!((sum - total).abs() < 1e-9, "{sum} vs {total}");
    }

    // ── Einstein midpoint ───────────────────────

    #[test]
    fn einstein_midpoint_single_point_is_identity() {
        let p = vec![0.3, 0.4];
        let m = einstein_midpoint(&[&p]);
        for (a, b) in p.iter().zip(m.iter()) {
            assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn einstein_midpoint_symmetric_pair_is_origin() {
        let p = vec![0.3, 0.4];
        let neg: Vec<f64> = p.iter().map(|x| -x).collect();
        let m = einstein_midpoint(&[&p, &neg]);
        assert!(l2_norm(&m) < 1e-9, "midpoint norm = {}", l2_norm(&m));
    }

    #[test]
    fn einstein_midpoint_empty_is_origin() {
        assert!(einstein_midpoint(&[]).is_empty());
        let m = einstein_midpoint_weighted(&[], &[]);
        assert!(m.is_empty());
    }

    #[test]
    fn einstein_midpoint_skips_boundary_points() {
        let good = vec![0.2, 0.1];
        let bad = vec![0.9, 0.9]; // outside the ball, must be skipped
        let m = einstein_midpoint(&[&good, &bad]);
        for (a, b) in good.iter().zip(m.iter()) {
            assert!((a - b).abs() < 1e-9, "boundary point not skipped");
        }
    }

    #[test]
    fn einstein_midpoint_zero_weights_give_origin() {
        let a = vec![0.3, 0.1];
        let b = vec![0.1, 0.2];
        let m = einstein_midpoint_weighted(&[&a, &b], &[0.0, 0.0]);
        assert_eq!(m, vec![0.0, 0.0]);
    }

    #[test]
    fn einstein_midpoint_weight_pulls_toward_heavy_point() {
        let a = vec![0.4, 0.0];
        let b = vec![-0.4, 0.0];
        let m = einstein_midpoint_weighted(&[&a, &b], &[10.0, 0.1]);
        assert!(m[0] > 0.2, "heavy weight ignored: {:?}", m);
    }

    // ── exp/log at base ─────────────────────────

    #[test]
    fn exp_map_zero_tangent_returns_base() {
        let x = vec![0.3, -0.1];
        assert_eq!(exp_map(&x, &[0.0, 0.0]), x);
    }

    #[test]
    fn exp_log_roundtrip_at_base() {
        let x = vec![0.2, 0.1];
        let v = vec![0.3, -0.4];
        let recovered = log_map(&x, &exp_map(&x, &v));
        for (a, b) in v.iter().zip(recovered.iter()) {
            assert!((a - b).abs() < 1e-8, "roundtrip failed: {a} vs {b}");
        }
    }

    #[test]
    fn log_exp_roundtrip_at_base() {
        let x = vec![0.2, -0.3];
        let y = vec![-0.1, 0.4];
        let recovered = exp_map(&x, &log_map(&x, &y));
        for (a, b) in y.iter().zip(recovered.iter()) {
            assert!((a - b).abs() < 1e-8, "roundtrip failed: {a} vs {b}");
        }
    }

    #[test]
    fn log_map_same_point_is_zero() {
        let x = vec![0.3, 0.2];
        assert_eq!(log_map(&x, &x), vec![0.0, 0.0]);
    }

    #[test]
    fn log_map_norm_equals_distance() {
        // ‖log_x(y)‖ scaled by λ_x equals d(x, y) — the defining property
        let x = vec![0.1, 0.2];
        let y = vec![-0.3, 0.1];
        let v = log_map(&x, &y);
        let d = poincare_distance(&x, &y);
        let tangent_len = conformal_factor(&x) * l2_norm(&v);
        assert!((tangent_len - d).abs() < 1e-8, "{tangent_len} vs {d}");
    }

    // ── parallel transport ──────────────────────

    #[test]
    fn transport_zero_vector_is_zero() {
        let x = vec![0.1, 0.2];
        let y = vec![0.3, -0.1];
        assert_eq!(parallel_transport(&x, &y, &[0.0, 0.0]), vec![0.0, 0.0]);
    }

    #[test]
    fn transport_preserves_hyperbolic_length() {
        // λ_x·‖v‖ is the invariant of parallel transport
        let x = vec![0.2, 0.1];
        let y = vec![-0.3, 0.25];
        let v = vec![0.4, -0.2];
        let moved = parallel_transport(&x, &y, &v);
        let before = conformal_factor(&x) * l2_norm(&v);
        let after = conformal_factor(&y) * l2_norm(&moved);
        assert!(
            (before - after).abs() < 1e-8,
            "transport changed length: {before} vs {after}"
        );
    }

    #[test]
    fn transport_roundtrip_restores_vector() {
        let x = vec![0.15, -0.2];
        let y = vec![0.3, 0.1];
        let v = vec![0.2, 0.5];
        let there = parallel_transport(&x, &y, &v);
        let back = parallel_transport(&y, &x, &there);
        for (a, b) in v.iter().zip(back.iter()) {
            assert!((a - b).abs() < 1e-8, "roundtrip failed: {a} vs {b}");
        }
    }
}

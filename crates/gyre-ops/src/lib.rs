//! # gyre-ops
//!
//! Gyrovector-space operations for n-dimensional hyperbolic space.
//!
//! This crate is the single source of truth for hyperbolic math in gyre.
//! Every consumer that touches ball coordinates imports from here — no inline
//! reimplementations allowed.
//!
//! ## Core operations
//!
//! | Function | Direction | Purpose |
//! |---|---|---|
//! | [`mobius_add`] | ball × ball → ball | Gyrovector addition x ⊕ y |
//! | [`gyration`] | ball × ball × vec → vec | Thomas-precession correction gyr\[a,b\] |
//! | [`gyro_scale`] | ℝ × ball → ball | Geodesic scaling r ⊗ x |
//! | [`exp_map_zero`] | tangent → ball | Project a Euclidean vector into the ball |
//! | [`log_map_zero`] | ball → tangent | Unproject back to the tangent space |
//! | [`geodesic::poincare_distance`] | ball × ball → ℝ⁺ | Hyperbolic distance |
//!
//! The [`lorentz`] and [`klein`] modules carry the two sibling coordinate
//! models; [`geodesic`] the tangent-space calculus; [`busemann`] the ideal
//! boundary; [`attention`] the aggregation primitives built on top.
//!
//! ## Safety invariant
//!
//! Every ball point returned by this crate satisfies **‖x‖ ≤ [`MAX_NORM`]**
//! (strictly inside the open unit ball). Degenerate input is clamped, never
//! rejected: callers that want rejection semantics use [`assert_in_ball`].

pub mod attention;
pub mod busemann;
pub mod error;
pub mod geodesic;
pub mod klein;
pub mod lorentz;
pub mod vector;

use error::GyreError;
use vector::{dot, norm, norm_sq, scale};

/// Numerical zero threshold: norms and denominators below this are treated as
/// degenerate.
pub const EPS: f64 = 1e-12;

/// Boundary clamp threshold. Points are rescaled to this norm whenever an
/// operation would push them onto or past the unit sphere.
pub const MAX_NORM: f64 = 1.0 - 1e-5;

// ─────────────────────────────────────────────
// Boundary clamping
// ─────────────────────────────────────────────

/// Rescale `x` to ‖x‖ = [`MAX_NORM`] if it lies on or outside that threshold,
/// preserving direction. Interior points are returned unchanged.
pub fn project_to_ball(x: &[f64]) -> Vec<f64> {
    let n = norm(x);
    if n < MAX_NORM {
        x.to_vec()
    } else {
        scale(x, MAX_NORM / (n + EPS))
    }
}

/// Clamp with NaN/Inf repair: non-finite coordinates reset the point to the
/// origin, everything else goes through [`project_to_ball`].
pub fn sanitize_point(x: &[f64]) -> Vec<f64> {
    if x.iter().any(|v| !v.is_finite()) {
        return vec![0.0; x.len()];
    }
    project_to_ball(x)
}

/// Strict validation: `Ok(())` iff ‖x‖ < 1.0.
///
/// The clamping operations above are the default policy; call this on vectors
/// entering the system from external sources when rejection is preferable to
/// silent repair.
///
/// # Errors
///
/// Returns [`GyreError::OutsideBall`] if ‖x‖ ≥ 1.0.
pub fn assert_in_ball(x: &[f64]) -> Result<(), GyreError> {
    let n = norm(x);
    if n >= 1.0 {
        Err(GyreError::OutsideBall { norm: n })
    } else {
        Ok(())
    }
}

/// Strict validation of matching dimensions.
///
/// # Errors
///
/// Returns [`GyreError::DimensionMismatch`] if the lengths differ.
pub fn assert_same_dim(a: &[f64], b: &[f64]) -> Result<(), GyreError> {
    if a.len() != b.len() {
        Err(GyreError::DimensionMismatch {
            expected: a.len(),
            got: b.len(),
        })
    } else {
        Ok(())
    }
}

// ─────────────────────────────────────────────
// Möbius addition
// ─────────────────────────────────────────────

/// Möbius addition x ⊕ y in the Poincaré ball.
///
/// ```text
/// x ⊕ y = [(1 + 2⟨x,y⟩ + ‖y‖²) · x  +  (1 − ‖x‖²) · y]
///          ───────────────────────────────────────────────
///                   1 + 2⟨x,y⟩ + ‖x‖²·‖y‖²
/// ```
///
/// Non-commutative and non-associative; the deviation from commutativity is
/// exactly the [`gyration`]. The result is always re-clamped into the open
/// ball. Near-antipodal inputs that zero out the denominator return the
/// clamped first operand instead of a domain error.
pub fn mobius_add(x: &[f64], y: &[f64]) -> Vec<f64> {
    let x_sq = norm_sq(x);
    let y_sq = norm_sq(y);
    let xy = dot(x, y);

    let denom = 1.0 + 2.0 * xy + x_sq * y_sq;
    if denom.abs() < EPS {
        return project_to_ball(x);
    }

    let coeff_x = (1.0 + 2.0 * xy + y_sq) / denom;
    let coeff_y = (1.0 - x_sq) / denom;

    let result: Vec<f64> = x
        .iter()
        .zip(y.iter())
        .map(|(&xi, &yi)| coeff_x * xi + coeff_y * yi)
        .collect();

    project_to_ball(&result)
}

/// Möbius subtraction x ⊖ y = x ⊕ (−y).
#[inline]
pub fn mobius_sub(x: &[f64], y: &[f64]) -> Vec<f64> {
    mobius_add(x, &scale(y, -1.0))
}

// ─────────────────────────────────────────────
// Gyration
// ─────────────────────────────────────────────

/// The gyration gyr\[a,b\](v): the rotation relating `a ⊕ b` to `b ⊕ a`
/// (Thomas precession).
///
/// Gyration is an origin-fixing isometry acting only in the plane spanned by
/// `a` and `b`. By gyrocommutativity it carries `b ⊕ a` onto `a ⊕ b`, so the
/// rotation angle falls out of the planar coordinates of that pair in closed
/// form — no iteration. The component of `v` orthogonal to the plane is left
/// untouched.
///
/// Returns `v` unchanged when `a` and `b` are collinear (the gyration is the
/// identity there) or when any intermediate denominator degenerates.
pub fn gyration(a: &[f64], b: &[f64], v: &[f64]) -> Vec<f64> {
    let na = norm(a);
    let nb = norm(b);
    if na < EPS || nb < EPS {
        return v.to_vec();
    }

    // Orthonormal basis of span{a, b} via Gram-Schmidt
    let e1 = scale(a, 1.0 / na);
    let b_on_e1 = dot(b, &e1);
    let residual = vector::sub(b, &scale(&e1, b_on_e1));
    let nr = norm(&residual);
    if nr < EPS {
        // collinear: gyr[a,b] = id
        return v.to_vec();
    }
    let e2 = scale(&residual, 1.0 / nr);

    // gyr[a,b] maps b ⊕ a onto a ⊕ b; read the rotation angle off that pair.
    let p = mobius_add(b, a);
    let q = mobius_add(a, b);
    let (p1, p2) = (dot(&p, &e1), dot(&p, &e2));
    let (q1, q2) = (dot(&q, &e1), dot(&q, &e2));
    let np = (p1 * p1 + p2 * p2).sqrt();
    let nq = (q1 * q1 + q2 * q2).sqrt();
    if np < EPS || nq < EPS {
        return v.to_vec();
    }
    let cos_t = (p1 * q1 + p2 * q2) / (np * nq);
    let sin_t = (p1 * q2 - p2 * q1) / (np * nq);

    // Rotate the in-plane part of v, keep the orthogonal complement.
    let v1 = dot(v, &e1);
    let v2 = dot(v, &e2);
    let r1 = cos_t * v1 - sin_t * v2;
    let r2 = sin_t * v1 + cos_t * v2;

    let mut out = v.to_vec();
    let dim = out.len().min(e1.len());
    for i in 0..dim {
        out[i] += (r1 - v1) * e1[i] + (r2 - v2) * e2[i];
    }
    out
}

// ─────────────────────────────────────────────
// Gyroscalar multiplication
// ─────────────────────────────────────────────

/// Gyroscalar multiplication r ⊗ x: scale `x` along the geodesic through the
/// origin by rapidity factor `r`.
///
/// ```text
/// r ⊗ x = tanh(r · atanh(‖x‖)) · x / ‖x‖
/// ```
///
/// Returns the zero vector for near-zero input. The atanh argument is clamped
/// to [`MAX_NORM`] so boundary-hugging points cannot overflow it.
pub fn gyro_scale(r: f64, x: &[f64]) -> Vec<f64> {
    let n = norm(x);
    if n < EPS {
        return vec![0.0; x.len()];
    }
    let magnitude = (r * n.min(MAX_NORM).atanh()).tanh();
    scale(x, magnitude / n)
}

// ─────────────────────────────────────────────
// Conformal factor
// ─────────────────────────────────────────────

/// Conformal factor λ_x = 2 / (1 − ‖x‖²).
///
/// Relates Euclidean and hyperbolic tangent-space magnitudes at `x`. The
/// denominator is floored at [`EPS`], so the factor saturates to a large
/// finite sentinel near the boundary instead of returning infinity.
#[inline]
pub fn conformal_factor(x: &[f64]) -> f64 {
    2.0 / (1.0 - norm_sq(x)).max(EPS)
}

// ─────────────────────────────────────────────
// Origin-based exponential / logarithmic maps
// ─────────────────────────────────────────────

/// Exponential map at the origin: tangent vector → ball point.
///
/// ```text
/// exp₀(v) = tanh(‖v‖) · v / ‖v‖
/// ```
///
/// The result always satisfies ‖x‖ < 1.0 because tanh(·) < 1.0 for finite
/// input.
pub fn exp_map_zero(v: &[f64]) -> Vec<f64> {
    let n = norm(v);
    if n < EPS {
        return vec![0.0; v.len()];
    }
    scale(v, n.tanh() / n)
}

/// Logarithmic map at the origin: ball point → tangent vector.
///
/// ```text
/// log₀(x) = atanh(‖x‖) · x / ‖x‖
/// ```
///
/// Inverse of [`exp_map_zero`]. Boundary-violating input is clamped to
/// [`MAX_NORM`] first, per the crate's no-fault policy.
pub fn log_map_zero(x: &[f64]) -> Vec<f64> {
    let x = project_to_ball(x);
    let n = norm(&x);
    if n < EPS {
        return vec![0.0; x.len()];
    }
    scale(&x, n.atanh() / n)
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

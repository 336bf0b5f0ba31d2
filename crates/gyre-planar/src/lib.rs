//! # gyre-planar
//!
//! A thin 2D convenience adapter between the n-dimensional gyre engine and
//! legacy planar renderers that speak a "real + imaginary" point
//! representation.
//!
//! This crate is an external collaborator of the engine, not part of its
//! core contract: the wrappers here are dimension-2 specializations with no
//! additional invariants of their own. New code should call `gyre-ops`
//! directly.

use serde::{Deserialize, Serialize};

use gyre_ops::geodesic::{geodesic_interp, poincare_distance};
use gyre_ops::mobius_add;

// ─────────────────────────────────────────────
// Planar point
// ─────────────────────────────────────────────

/// A point of the Poincaré disk in the renderer's complex-plane convention.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlanarPoint {
    pub re: f64,
    pub im: f64,
}

impl PlanarPoint {
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }
}

/// First two components of a vector as a planar point; missing components
/// are zero.
pub fn to_planar(v: &[f64]) -> PlanarPoint {
    PlanarPoint {
        re: v.first().copied().unwrap_or(0.0),
        im: v.get(1).copied().unwrap_or(0.0),
    }
}

/// A planar point as a 2-component vector.
pub fn from_planar(p: PlanarPoint) -> Vec<f64> {
    vec![p.re, p.im]
}

// ─────────────────────────────────────────────
// 2D-specialized wrappers
// ─────────────────────────────────────────────

/// Möbius addition on the disk.
pub fn mobius_add_2d(a: PlanarPoint, b: PlanarPoint) -> PlanarPoint {
    to_planar(&mobius_add(&from_planar(a), &from_planar(b)))
}

/// Hyperbolic distance on the disk.
pub fn distance_2d(a: PlanarPoint, b: PlanarPoint) -> f64 {
    poincare_distance(&from_planar(a), &from_planar(b))
}

/// Geodesic interpolation on the disk, exact at the endpoints.
pub fn interp_2d(a: PlanarPoint, b: PlanarPoint, t: f64) -> PlanarPoint {
    to_planar(&geodesic_interp(&from_planar(a), &from_planar(b), t))
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

//! Tree construction: vantage selection, median split, recursive partition.

use std::cmp::Ordering;

use crate::error::VpTreeError;
use crate::metric::Metric;

// ─────────────────────────────────────────────
// Node
// ─────────────────────────────────────────────

/// One node of the tree: a vantage point, its id, and the median split
/// radius dividing the subtree's remaining members into "inside"
/// (distance ≤ radius) and "outside" (distance > radius).
#[derive(Debug)]
pub(crate) struct VpNode<I> {
    pub(crate) point: Vec<f64>,
    pub(crate) id: I,
    pub(crate) radius: f64,
    pub(crate) inside: Option<Box<VpNode<I>>>,
    pub(crate) outside: Option<Box<VpNode<I>>>,
}

// ─────────────────────────────────────────────
// Tree
// ─────────────────────────────────────────────

/// A vantage-point tree over a fixed snapshot of `(point, id)` pairs.
///
/// Built once, then **immutable**: query correctness depends on no point
/// moving after insertion. If a point is rebound to new coordinates
/// elsewhere, this index is stale — rebuilding is the only supported remedy.
///
/// Concurrent queries against a built tree need no locking (queries never
/// mutate); construction must complete before the first query begins.
#[derive(Debug)]
pub struct VpTree<I, M: Metric> {
    pub(crate) root: Option<Box<VpNode<I>>>,
    pub(crate) metric: M,
    len: usize,
}

impl<I: Clone, M: Metric> VpTree<I, M> {
    /// Build the tree from parallel lists of points and opaque ids.
    ///
    /// Vantage selection is deterministic (the current partition's last
    /// element); selection strategy affects balance only, never query
    /// results. The split radius is the median of distances from the vantage
    /// to the remaining members, found by in-place selection rather than
    /// sorting.
    ///
    /// An empty input builds an empty tree (all queries return nothing).
    ///
    /// # Errors
    ///
    /// Returns [`VpTreeError::LengthMismatch`] when the lists differ in
    /// length.
    pub fn build(points: Vec<Vec<f64>>, ids: Vec<I>, metric: M) -> Result<Self, VpTreeError> {
        if points.len() != ids.len() {
            return Err(VpTreeError::LengthMismatch {
                points: points.len(),
                ids: ids.len(),
            });
        }

        let len = points.len();
        let items: Vec<(Vec<f64>, I)> = points.into_iter().zip(ids).collect();
        let root = Self::build_node(&metric, items);
        tracing::debug!(nodes = len, "vp-tree built");

        Ok(Self { root, metric, len })
    }

    fn build_node(metric: &M, mut items: Vec<(Vec<f64>, I)>) -> Option<Box<VpNode<I>>> {
        let (point, id) = items.pop()?;
        if items.is_empty() {
            return Some(Box::new(VpNode {
                point,
                id,
                radius: 0.0,
                inside: None,
                outside: None,
            }));
        }

        // Distances from the vantage to every remaining member, then select
        // the median in place.
        let mut dists: Vec<(f64, (Vec<f64>, I))> = items
            .into_iter()
            .map(|item| (metric.distance(&point, &item.0), item))
            .collect();
        let mid = (dists.len() - 1) / 2;
        dists.select_nth_unstable_by(mid, |a, b| {
            a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal)
        });
        let radius = dists[mid].0;

        // Ties on the radius land inside, matching the query-side convention.
        let (near, far): (Vec<_>, Vec<_>) = dists.into_iter().partition(|(d, _)| *d <= radius);

        Some(Box::new(VpNode {
            point,
            id,
            radius,
            inside: Self::build_node(metric, near.into_iter().map(|(_, it)| it).collect()),
            outside: Self::build_node(metric, far.into_iter().map(|(_, it)| it).collect()),
        }))
    }

    /// Number of indexed points.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

//! Nearest-neighbor and range queries with triangle-inequality pruning.
//!
//! Both queries walk the tree with the same discipline: descend into the
//! child on the query's side of the split first, and cross the split only
//! when the current search bound can reach over it —
//!
//! ```text
//! visit inside  when d − τ ≤ radius
//! visit outside when d + τ ≥ radius
//! ```
//!
//! where `d` is the query-to-vantage distance and `τ` is the shrinking
//! worst-candidate bound (knn) or the fixed query radius (range). Soundness
//! rests on the metric's triangle inequality, nothing else.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use serde::{Deserialize, Serialize};

use crate::error::VpTreeError;
use crate::metric::Metric;
use crate::tree::{VpNode, VpTree};

// ─────────────────────────────────────────────
// Query results
// ─────────────────────────────────────────────

/// One query hit: the stored id and its distance to the query point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neighbor<I> {
    pub id: I,
    pub distance: f64,
}

/// Heap entry with reverse ordering so `BinaryHeap` acts as a max-heap on
/// distance (the root is the current worst candidate, popped when the heap
/// exceeds k).
#[derive(Debug)]
struct Candidate<I> {
    id: I,
    distance: f64,
}

impl<I> PartialEq for Candidate<I> {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance
    }
}

impl<I> Eq for Candidate<I> {}

impl<I> PartialOrd for Candidate<I> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<I> Ord for Candidate<I> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .partial_cmp(&other.distance)
            .unwrap_or(Ordering::Equal)
    }
}

// ─────────────────────────────────────────────
// Queries
// ─────────────────────────────────────────────

impl<I: Clone, M: Metric> VpTree<I, M> {
    /// The `k` nearest neighbors of `query`, nearest first.
    ///
    /// # Errors
    ///
    /// Returns [`VpTreeError::InvalidK`] when `k` is zero.
    pub fn knn(&self, query: &[f64], k: usize) -> Result<Vec<Neighbor<I>>, VpTreeError> {
        if k == 0 {
            return Err(VpTreeError::InvalidK);
        }

        let mut heap: BinaryHeap<Candidate<I>> = BinaryHeap::with_capacity(k + 1);
        if let Some(root) = &self.root {
            self.knn_node(root, query, k, &mut heap);
        }

        let mut results: Vec<Neighbor<I>> = heap
            .into_iter()
            .map(|c| Neighbor {
                id: c.id,
                distance: c.distance,
            })
            .collect();
        results.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(Ordering::Equal)
        });
        Ok(results)
    }

    fn knn_node(
        &self,
        node: &VpNode<I>,
        query: &[f64],
        k: usize,
        heap: &mut BinaryHeap<Candidate<I>>,
    ) {
        let d = self.metric.distance(query, &node.point);

        if heap.len() < k {
            heap.push(Candidate {
                id: node.id.clone(),
                distance: d,
            });
        } else if let Some(worst) = heap.peek() {
            if d < worst.distance {
                heap.push(Candidate {
                    id: node.id.clone(),
                    distance: d,
                });
                heap.pop();
            }
        }

        // Near side first so the bound tightens before the far side is
        // considered; the bound is re-read after each descent.
        if d <= node.radius {
            if let Some(inside) = &node.inside {
                if d - Self::bound(heap, k) <= node.radius {
                    self.knn_node(inside, query, k, heap);
                }
            }
            if let Some(outside) = &node.outside {
                if d + Self::bound(heap, k) >= node.radius {
                    self.knn_node(outside, query, k, heap);
                }
            }
        } else {
            if let Some(outside) = &node.outside {
                if d + Self::bound(heap, k) >= node.radius {
                    self.knn_node(outside, query, k, heap);
                }
            }
            if let Some(inside) = &node.inside {
                if d - Self::bound(heap, k) <= node.radius {
                    self.knn_node(inside, query, k, heap);
                }
            }
        }
    }

    /// Worst-candidate distance once the heap is full, unbounded before.
    #[inline]
    fn bound(heap: &BinaryHeap<Candidate<I>>, k: usize) -> f64 {
        if heap.len() < k {
            f64::INFINITY
        } else {
            heap.peek().map_or(f64::INFINITY, |w| w.distance)
        }
    }

    /// Every indexed id within `radius` of `query`. Order unspecified.
    pub fn range(&self, query: &[f64], radius: f64) -> Vec<Neighbor<I>> {
        let mut out = Vec::new();
        if let Some(root) = &self.root {
            self.range_node(root, query, radius, &mut out);
        }
        out
    }

    fn range_node(
        &self,
        node: &VpNode<I>,
        query: &[f64],
        radius: f64,
        out: &mut Vec<Neighbor<I>>,
    ) {
        let d = self.metric.distance(query, &node.point);
        if d <= radius {
            out.push(Neighbor {
                id: node.id.clone(),
                distance: d,
            });
        }

        if let Some(inside) = &node.inside {
            if d - radius <= node.radius {
                self.range_node(inside, query, radius, out);
            }
        }
        if let Some(outside) = &node.outside {
            if d + radius >= node.radius {
                self.range_node(outside, query, radius, out);
            }
        }
    }
}

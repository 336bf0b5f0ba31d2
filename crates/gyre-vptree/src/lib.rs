//! # gyre-vptree
//!
//! A binary metric tree (vantage-point tree) for exact k-nearest-neighbor
//! and range queries over a fixed point set under hyperbolic distance.
//!
//! Unlike Euclidean spatial indexes, there are no bounding volumes here: the
//! tree partitions by the metric alone, so it works for any distance
//! satisfying the triangle inequality. The metric is pluggable via
//! [`Metric`]; [`PoincareMetric`] and [`LorentzMetric`] wire in the two
//! hyperbolic models from `gyre-ops`.
//!
//! ## Lifecycle
//!
//! **Unbuilt → Built (immutable).** [`VpTree::build`] takes a snapshot of
//! parallel `(point, id)` lists; after it returns, the structure is
//! read-only and safe to query from any number of threads. There is no
//! insert, delete, or rebalance — rebuild to change the point set.
//!
//! ## Example
//!
//! ```
//! use gyre_vptree::{PoincareMetric, VpTree};
//! use uuid::Uuid;
//!
//! let points = vec![vec![0.0, 0.0], vec![0.6, 0.0], vec![0.0, -0.3]];
//! let ids: Vec<Uuid> = (0..3).map(|_| Uuid::new_v4()).collect();
//!
//! let tree = VpTree::build(points, ids.clone(), PoincareMetric).unwrap();
//! let hits = tree.knn(&[0.05, 0.0], 2).unwrap();
//! assert_eq!(hits[0].id, ids[0]); // the origin is nearest
//! ```

pub mod error;
pub mod metric;
pub mod search;
pub mod tree;

pub use error::VpTreeError;
pub use metric::{LorentzMetric, Metric, PoincareMetric};
pub use search::Neighbor;
pub use tree::VpTree;

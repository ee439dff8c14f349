//! Minimum spanning forest core library.
//!
//! Computes a minimum spanning forest with Kruskal's algorithm over an
//! arena-backed disjoint set, and reports the forest weight, the heaviest
//! accepted edge, and the depth of a probe vertex in the final union-find
//! forest.
//!
//! ```
//! use msf_core::{Edge, kruskal};
//!
//! let edges = [Edge::new(0, 1, 4), Edge::new(1, 2, 1), Edge::new(0, 2, 7)];
//! let report = kruskal(3, &edges)?;
//! assert_eq!(report.total_weight(), 5);
//! assert_eq!(report.max_weight(), Some(4));
//! assert_eq!(report.max_weight_position(), Some(2));
//! # Ok::<(), msf_core::ForestError>(())
//! ```

mod disjoint_set;
mod error;
mod kruskal;


pub use crate::{
    disjoint_set::DisjointSet,
    error::{ForestError, ForestErrorCode, Result},
    kruskal::{Edge, ForestReport, SortedEdge, kruskal, sort_edges},
};

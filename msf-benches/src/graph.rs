//! Seeded synthetic graphs for benchmarks.

use msf_core::Edge;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Errors raised while configuring a synthetic graph.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum SyntheticGraphError {
    /// The graph must have at least one vertex.
    #[error("synthetic graph needs at least one vertex")]
    NoVertices,
    /// The requested edge count does not fit in memory addressing.
    #[error("{vertex_count} vertices with {edges_per_vertex} edges each overflows usize")]
    TooManyEdges {
        /// Requested vertex count.
        vertex_count: usize,
        /// Requested edges per vertex.
        edges_per_vertex: usize,
    },
}

/// Configuration for [`SyntheticGraph::generate`].
#[derive(Clone, Copy, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Edges generated per vertex.
    pub edges_per_vertex: usize,
    /// Exclusive upper bound on edge weights; small values force many ties.
    pub weight_range: i32,
    /// RNG seed.
    pub seed: u64,
}

/// A random multigraph with uniformly drawn endpoints and weights.
#[derive(Clone, Debug)]
pub struct SyntheticGraph {
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl SyntheticGraph {
    /// Generates a graph from `config`.
    ///
    /// Weights are drawn from `0..max(weight_range, 1)`.
    ///
    /// # Errors
    /// Returns [`SyntheticGraphError`] when the vertex count is zero or the
    /// edge count overflows.
    pub fn generate(config: &SyntheticGraphConfig) -> Result<Self, SyntheticGraphError> {
        if config.vertex_count == 0 {
            return Err(SyntheticGraphError::NoVertices);
        }
        let edge_count = config
            .vertex_count
            .checked_mul(config.edges_per_vertex)
            .ok_or(SyntheticGraphError::TooManyEdges {
                vertex_count: config.vertex_count,
                edges_per_vertex: config.edges_per_vertex,
            })?;

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let weight_range = config.weight_range.max(1);
        let edges = (0..edge_count)
            .map(|_| {
                Edge::new(
                    rng.gen_range(0..config.vertex_count),
                    rng.gen_range(0..config.vertex_count),
                    rng.gen_range(0..weight_range),
                )
            })
            .collect();

        Ok(Self {
            vertex_count: config.vertex_count,
            edges,
        })
    }

    /// Returns the number of vertices.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns the generated edges.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

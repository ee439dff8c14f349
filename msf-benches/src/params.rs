//! Benchmark parameter labels.

use std::fmt;

/// Parameters for a Kruskal benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct KruskalBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Average number of edges per vertex.
    pub edges_per_vertex: usize,
}

impl fmt::Display for KruskalBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},d={}", self.vertex_count, self.edges_per_vertex)
    }
}

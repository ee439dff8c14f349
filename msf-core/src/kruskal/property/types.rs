//! Fixture types for Kruskal property tests.

use crate::Edge;

/// Shape of a generated graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum GraphShape {
    /// Random pairs with weights drawn from a wide range.
    Unique,
    /// Random pairs with weights drawn from a pool of one to three values.
    ManyIdentical,
    /// A random spanning path plus a handful of extra edges.
    Sparse,
    /// Several components with no edges between them.
    Disconnected,
    /// Random pairs including self-loops and duplicate endpoints.
    Noisy,
}

/// Generated graph together with the shape used to produce it.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Edges in input order.
    pub edges: Vec<Edge>,
    /// Shape used during generation.
    pub shape: GraphShape,
}

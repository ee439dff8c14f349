//! Sequential Kruskal minimum spanning forest construction.
//!
//! Edges are stably sorted by ascending weight, tagged with their position in
//! that order, and fed one at a time to a `KruskalDriver`. The driver owns
//! the only [`DisjointSet`] for the run and accumulates the reported
//! statistics as edges are accepted.

use tracing::{Span, field, info, instrument, trace};

use crate::{DisjointSet, error::ForestError};

/// An undirected, weighted input edge.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    from: usize,
    to: usize,
    weight: i32,
}

impl Edge {
    /// Creates an edge between `from` and `to`.
    #[must_use]
    pub const fn new(from: usize, to: usize, weight: i32) -> Self {
        Self { from, to, weight }
    }

    /// Returns the first endpoint as given in the input.
    #[must_use]
    #[rustfmt::skip]
    pub const fn from(&self) -> usize { self.from }

    /// Returns the second endpoint as given in the input.
    #[must_use]
    #[rustfmt::skip]
    pub const fn to(&self) -> usize { self.to }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> i32 { self.weight }

    /// Returns `true` when both endpoints are the same vertex.
    #[must_use]
    pub const fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

/// An [`Edge`] tagged with its zero-based index in ascending-weight order.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SortedEdge {
    edge: Edge,
    position: usize,
}

impl SortedEdge {
    /// Returns the underlying edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge(&self) -> Edge { self.edge }

    /// Returns the zero-based position of the edge in sorted order.
    #[must_use]
    #[rustfmt::skip]
    pub const fn position(&self) -> usize { self.position }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> i32 { self.edge.weight }
}

/// Statistics describing the minimum spanning forest of one run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ForestReport {
    vertex_count: usize,
    total_weight: i64,
    heaviest: Option<SortedEdge>,
    accepted: Vec<SortedEdge>,
    probe_vertex: usize,
    probe_depth: usize,
}

impl ForestReport {
    /// Returns the number of vertices in the graph.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the summed weight of every accepted edge.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_weight(&self) -> i64 { self.total_weight }

    /// Returns the largest weight among accepted edges, or `None` when no
    /// edge was accepted.
    #[must_use]
    pub fn max_weight(&self) -> Option<i32> {
        self.heaviest.map(|edge| edge.weight())
    }

    /// Returns the one-based sorted position of the first accepted edge
    /// carrying [`max_weight`](Self::max_weight).
    #[must_use]
    pub fn max_weight_position(&self) -> Option<usize> {
        self.heaviest.map(|edge| edge.position() + 1)
    }

    /// Returns the accepted edges in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn accepted(&self) -> &[SortedEdge] { &self.accepted }

    /// Returns the number of accepted edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn accepted_edges(&self) -> usize { self.accepted.len() }

    /// Returns the number of trees in the forest.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.vertex_count - self.accepted.len()
    }

    /// Returns the vertex whose depth is reported, `floor(vertex_count / 2)`.
    #[must_use]
    #[rustfmt::skip]
    pub fn probe_vertex(&self) -> usize { self.probe_vertex }

    /// Returns the depth of [`probe_vertex`](Self::probe_vertex) in the
    /// final union-find forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn probe_depth(&self) -> usize { self.probe_depth }
}

/// Stably sorts `edges` by ascending weight and tags each with its position.
///
/// Edges of equal weight keep their input order.
///
/// # Examples
/// ```
/// use msf_core::{Edge, sort_edges};
///
/// let sorted = sort_edges(&[Edge::new(0, 1, 5), Edge::new(1, 2, 3), Edge::new(2, 3, 3)]);
/// let order: Vec<_> = sorted.iter().map(|edge| (edge.edge().from(), edge.position())).collect();
/// assert_eq!(order, vec![(1, 0), (2, 1), (0, 2)]);
/// ```
#[must_use]
pub fn sort_edges(edges: &[Edge]) -> Vec<SortedEdge> {
    let mut ordered = edges.to_vec();
    ordered.sort_by_key(Edge::weight);
    ordered
        .into_iter()
        .enumerate()
        .map(|(position, edge)| SortedEdge { edge, position })
        .collect()
}

/// Computes the minimum spanning forest of an undirected graph.
///
/// Self-loops are accepted as input and never join the forest. Parallel edges
/// are compared by weight like any other edge.
///
/// # Errors
///
/// Returns an error when:
/// - `vertex_count == 0`
/// - an edge references a vertex `>= vertex_count`
#[instrument(
    name = "forest.kruskal",
    err,
    skip(edges),
    fields(edges = edges.len(), accepted = field::Empty, total_weight = field::Empty),
)]
pub fn kruskal(vertex_count: usize, edges: &[Edge]) -> Result<ForestReport, ForestError> {
    if vertex_count == 0 {
        return Err(ForestError::EmptyGraph);
    }
    validate_edges(vertex_count, edges)?;

    let mut driver = KruskalDriver::new(vertex_count);
    for edge in sort_edges(edges) {
        driver.offer(edge);
    }
    let report = driver.finish();

    let span = Span::current();
    span.record("accepted", report.accepted_edges());
    span.record("total_weight", report.total_weight());
    info!(
        vertices = vertex_count,
        accepted = report.accepted_edges(),
        components = report.component_count(),
        total_weight = report.total_weight(),
        "spanning forest computed"
    );
    Ok(report)
}

fn validate_edges(vertex_count: usize, edges: &[Edge]) -> Result<(), ForestError> {
    for (index, edge) in edges.iter().enumerate() {
        for vertex in [edge.from, edge.to] {
            if vertex >= vertex_count {
                return Err(ForestError::InvalidVertex {
                    edge: index,
                    vertex,
                    vertex_count,
                });
            }
        }
    }
    Ok(())
}

/// Greedy edge selection over a single disjoint set.
///
/// Endpoints of every offered edge must already be validated against the
/// vertex count.
struct KruskalDriver {
    set: DisjointSet,
    total_weight: i64,
    heaviest: Option<SortedEdge>,
    accepted: Vec<SortedEdge>,
}

impl KruskalDriver {
    fn new(vertex_count: usize) -> Self {
        Self {
            set: DisjointSet::new(vertex_count),
            total_weight: 0,
            heaviest: None,
            accepted: Vec::with_capacity(vertex_count.saturating_sub(1)),
        }
    }

    /// Offers the next edge in sorted order, returning `true` when accepted.
    fn offer(&mut self, candidate: SortedEdge) -> bool {
        let edge = candidate.edge;
        let left_root = self.set.find(edge.from);
        let right_root = self.set.find(edge.to);

        if left_root == right_root {
            trace!(
                from = edge.from,
                to = edge.to,
                position = candidate.position,
                "edge rejected: endpoints already connected"
            );
            return false;
        }

        self.set.union(left_root, right_root);
        self.total_weight += i64::from(edge.weight);
        if self
            .heaviest
            .is_none_or(|heaviest| edge.weight > heaviest.weight())
        {
            self.heaviest = Some(candidate);
        }
        self.accepted.push(candidate);
        true
    }

    fn finish(self) -> ForestReport {
        let vertex_count = self.set.len();
        let probe_vertex = vertex_count / 2;
        ForestReport {
            vertex_count,
            total_weight: self.total_weight,
            heaviest: self.heaviest,
            accepted: self.accepted,
            probe_vertex,
            probe_depth: self.set.depth(probe_vertex),
        }
    }
}

//! Property runners for the Kruskal driver.
//!
//! - **Oracle equivalence**: total weight, accepted edge count, heaviest
//!   weight and its position match a relabelling Kruskal.
//! - **Forest edge count**: accepted edges equal `n - c` for the `c`
//!   components of the full input graph.
//! - **Disjointness**: after replaying the accepted edges on a fresh
//!   [`DisjointSet`], `find(a) == find(b)` exactly when `a` and `b` share a
//!   component of the accepted subgraph.
//! - **Depth bound**: the probe depth never exceeds the root's rank.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{DisjointSet, Edge, ForestReport, kruskal};

use super::oracle::{component_labels, count_components, sequential_kruskal};
use super::types::GraphFixture;

fn run_kruskal(fixture: &GraphFixture) -> Result<ForestReport, TestCaseError> {
    kruskal(fixture.vertex_count, &fixture.edges).map_err(|err| {
        TestCaseError::fail(format!(
            "kruskal failed: {err} (shape={:?}, vertices={}, edges={})",
            fixture.shape,
            fixture.vertex_count,
            fixture.edges.len(),
        ))
    })
}

/// Checks the driver against the relabelling oracle.
pub(super) fn run_oracle_equivalence_property(fixture: &GraphFixture) -> TestCaseResult {
    let report = run_kruskal(fixture)?;
    let oracle = sequential_kruskal(fixture.vertex_count, &fixture.edges);

    if report.total_weight() != oracle.total_weight {
        return Err(TestCaseError::fail(format!(
            "total weight {} != oracle {} (shape={:?})",
            report.total_weight(),
            oracle.total_weight,
            fixture.shape,
        )));
    }
    if report.accepted_edges() != oracle.edge_count {
        return Err(TestCaseError::fail(format!(
            "accepted {} edges, oracle accepted {} (shape={:?})",
            report.accepted_edges(),
            oracle.edge_count,
            fixture.shape,
        )));
    }
    let heaviest = report.max_weight().zip(report.max_weight_position());
    if heaviest != oracle.heaviest {
        return Err(TestCaseError::fail(format!(
            "heaviest edge {heaviest:?} != oracle {:?} (shape={:?})",
            oracle.heaviest, fixture.shape,
        )));
    }
    Ok(())
}

/// Checks the forest edge count and the monotonic running cost.
pub(super) fn run_forest_shape_property(fixture: &GraphFixture) -> TestCaseResult {
    let report = run_kruskal(fixture)?;
    let labels = component_labels(fixture.vertex_count, &fixture.edges);
    let components = count_components(&labels);

    if report.accepted_edges() != fixture.vertex_count - components {
        return Err(TestCaseError::fail(format!(
            "accepted {} edges for {} vertices in {components} components",
            report.accepted_edges(),
            fixture.vertex_count,
        )));
    }
    if report.component_count() != components {
        return Err(TestCaseError::fail(format!(
            "report claims {} components, graph has {components}",
            report.component_count(),
        )));
    }

    let summed: i64 = report
        .accepted()
        .iter()
        .map(|edge| i64::from(edge.weight()))
        .sum();
    if summed != report.total_weight() {
        return Err(TestCaseError::fail(format!(
            "accepted edges sum to {summed}, report says {}",
            report.total_weight(),
        )));
    }

    let positions_ascend = report
        .accepted()
        .windows(2)
        .all(|pair| pair[0].position() < pair[1].position());
    if !positions_ascend {
        return Err(TestCaseError::fail("accepted edges out of sorted order"));
    }
    Ok(())
}

/// Replays the accepted edges and compares `find` with BFS components.
pub(super) fn run_disjointness_property(fixture: &GraphFixture) -> TestCaseResult {
    let report = run_kruskal(fixture)?;
    let accepted: Vec<Edge> = report.accepted().iter().map(|edge| edge.edge()).collect();
    let labels = component_labels(fixture.vertex_count, &accepted);

    let mut set = DisjointSet::new(fixture.vertex_count);
    for edge in &accepted {
        let left = set.find(edge.from());
        let right = set.find(edge.to());
        if left == right {
            return Err(TestCaseError::fail(format!(
                "accepted edge ({}, {}) closes a cycle",
                edge.from(),
                edge.to(),
            )));
        }
        set.union(left, right);
    }

    let roots: Vec<usize> = (0..fixture.vertex_count).map(|id| set.find(id)).collect();
    for a in 0..fixture.vertex_count {
        for b in (a + 1)..fixture.vertex_count {
            let same_root = roots[a] == roots[b];
            let same_component = labels[a] == labels[b];
            if same_root != same_component {
                return Err(TestCaseError::fail(format!(
                    "vertices {a} and {b}: same root {same_root}, same component {same_component}",
                )));
            }
        }
    }
    Ok(())
}

/// Replays the sorted edges and checks the probe depth against the rank of
/// its root, which bounds every path in a union-by-rank tree.
pub(super) fn run_depth_bound_property(fixture: &GraphFixture) -> TestCaseResult {
    let report = run_kruskal(fixture)?;
    let mut set = DisjointSet::new(fixture.vertex_count);
    for edge in crate::sort_edges(&fixture.edges) {
        let left = set.find(edge.edge().from());
        let right = set.find(edge.edge().to());
        if left != right {
            set.union(left, right);
        }
    }

    let probe = report.probe_vertex();
    if set.depth(probe) != report.probe_depth() {
        return Err(TestCaseError::fail(format!(
            "replayed depth {} != reported {}",
            set.depth(probe),
            report.probe_depth(),
        )));
    }
    let root = set.find(probe);
    let bound = usize::try_from(set.rank(root)).unwrap_or(usize::MAX);
    if report.probe_depth() > bound {
        return Err(TestCaseError::fail(format!(
            "probe depth {} exceeds root rank {bound}",
            report.probe_depth(),
        )));
    }
    Ok(())
}

//! Graph generators for Kruskal property tests.
//!
//! Each generator is driven by a seeded [`SmallRng`] so any failing case can
//! be replayed from its seed alone.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Edge;

use super::types::{GraphFixture, GraphShape};

/// Minimum vertex count for most generated graphs.
const MIN_VERTICES: usize = 1;
/// Maximum vertex count for most generated graphs.
const MAX_VERTICES: usize = 48;
/// Upper bound on weights outside the identical-weight pool.
const MAX_WEIGHT: i32 = 1_000;

/// Generates fixtures across every [`GraphShape`].
pub(super) fn graph_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    (any::<GraphShape>(), any::<u64>()).prop_map(|(shape, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(shape, &mut rng)
    })
}

/// Generates a fixture for a specific shape.
pub(super) fn generate_fixture(shape: GraphShape, rng: &mut SmallRng) -> GraphFixture {
    match shape {
        GraphShape::Unique => {
            random_pairs(rng, shape, false, |r| r.gen_range(-MAX_WEIGHT..=MAX_WEIGHT))
        }
        GraphShape::ManyIdentical => {
            let pool_size = rng.gen_range(1..=3);
            let pool: Vec<i32> = (0..pool_size).map(|_| rng.gen_range(0..=10)).collect();
            random_pairs(rng, shape, false, move |r| pool[r.gen_range(0..pool.len())])
        }
        GraphShape::Sparse => generate_sparse(rng),
        GraphShape::Disconnected => generate_disconnected(rng),
        GraphShape::Noisy => random_pairs(rng, shape, true, |r| r.gen_range(0..=20)),
    }
}

/// Draws `vertex_count` and roughly `1..3n` endpoint pairs at random.
///
/// With `allow_loops` unset, self-loops are skipped rather than redrawn.
fn random_pairs(
    rng: &mut SmallRng,
    shape: GraphShape,
    allow_loops: bool,
    mut weight: impl FnMut(&mut SmallRng) -> i32,
) -> GraphFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let edge_budget = rng.gen_range(0..=vertex_count * 3);
    let mut edges = Vec::with_capacity(edge_budget);
    for _ in 0..edge_budget {
        let from = rng.gen_range(0..vertex_count);
        let to = rng.gen_range(0..vertex_count);
        if from == to && !allow_loops {
            continue;
        }
        let w = weight(rng);
        edges.push(Edge::new(from, to, w));
    }
    GraphFixture {
        vertex_count,
        edges,
        shape,
    }
}

/// Builds a random spanning path, then adds a few extra edges.
fn generate_sparse(rng: &mut SmallRng) -> GraphFixture {
    let vertex_count = rng.gen_range(2..=MAX_VERTICES);
    let mut order: Vec<usize> = (0..vertex_count).collect();
    shuffle(&mut order, rng);

    let mut edges: Vec<Edge> = order
        .windows(2)
        .map(|pair| Edge::new(pair[0], pair[1], rng.gen_range(0..=MAX_WEIGHT)))
        .collect();
    let extra = rng.gen_range(0..=vertex_count / 2);
    for _ in 0..extra {
        let from = rng.gen_range(0..vertex_count);
        let to = rng.gen_range(0..vertex_count);
        edges.push(Edge::new(from, to, rng.gen_range(0..=MAX_WEIGHT)));
    }
    shuffle(&mut edges, rng);

    GraphFixture {
        vertex_count,
        edges,
        shape: GraphShape::Sparse,
    }
}

/// Builds two to five blocks of vertices with edges only inside each block.
fn generate_disconnected(rng: &mut SmallRng) -> GraphFixture {
    let block_count = rng.gen_range(2..=5);
    let sizes: Vec<usize> = (0..block_count).map(|_| rng.gen_range(1..=10)).collect();
    let vertex_count: usize = sizes.iter().sum();

    let mut edges = Vec::new();
    let mut offset = 0;
    for size in sizes {
        for i in 0..size {
            for j in (i + 1)..size {
                if rng.gen_bool(0.5) {
                    let weight = rng.gen_range(0..=MAX_WEIGHT);
                    edges.push(Edge::new(offset + i, offset + j, weight));
                }
            }
        }
        offset += size;
    }

    GraphFixture {
        vertex_count,
        edges,
        shape: GraphShape::Disconnected,
    }
}

/// Fisher-Yates shuffle using the provided RNG.
fn shuffle<T>(slice: &mut [T], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}

impl proptest::arbitrary::Arbitrary for GraphShape {
    type Parameters = ();
    type Strategy = proptest::strategy::TupleUnion<(
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
    )>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            2 => Just(Self::Unique),
            3 => Just(Self::ManyIdentical),
            2 => Just(Self::Sparse),
            2 => Just(Self::Disconnected),
            1 => Just(Self::Noisy),
        ]
    }
}

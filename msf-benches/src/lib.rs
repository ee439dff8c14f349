//! Benchmark support crate for msf.
//!
//! Provides seeded synthetic graphs and parameter labels used by the
//! Criterion benchmarks for the disjoint set and the Kruskal driver.

pub mod graph;
pub mod params;

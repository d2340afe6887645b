//! Minimum spanning tree algorithms.
//!
//! Both algorithms read a [`Graph`] and return a new `Graph` that shares the
//! input's vertices and owns the selected edges. The input is never modified.
//!
//! # Example
//!
//! ```rust
//! use spanwise_core::graph::{Edge, Graph};
//! use spanwise_core::mst::{Kruskal, Prim, SpanningTreeAlgorithm};
//!
//! let graph = Graph::from_edges(
//!     4,
//!     vec![
//!         Edge::new(0, 1, 1),
//!         Edge::new(1, 2, 2),
//!         Edge::new(2, 3, 1),
//!         Edge::new(3, 0, 5),
//!     ],
//! )
//! .unwrap();
//!
//! let algorithms: [&dyn SpanningTreeAlgorithm; 2] = [&Prim, &Kruskal];
//! for algorithm in algorithms {
//!     let tree = algorithm.build(&graph).unwrap();
//!     assert_eq!(tree.total_weight(), 4, "{}", algorithm.name());
//! }
//! ```

mod kruskal;
mod prim;
pub mod union_find;


use crate::error::Result;
use crate::graph::Graph;

pub use kruskal::run_kruskal;
pub use prim::run_prim;
pub use union_find::UnionFind;

/// A strategy that derives a minimum spanning tree from a graph.
pub trait SpanningTreeAlgorithm {
    /// Short lowercase name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Builds the spanning tree of `graph`.
    fn build(&self, graph: &Graph) -> Result<Graph>;
}

/// Kruskal's algorithm; see [`run_kruskal`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Kruskal;

impl SpanningTreeAlgorithm for Kruskal {
    fn name(&self) -> &'static str {
        "kruskal"
    }

    fn build(&self, graph: &Graph) -> Result<Graph> {
        Ok(run_kruskal(graph))
    }
}

/// Prim's algorithm with round batching; see [`run_prim`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Prim;

impl SpanningTreeAlgorithm for Prim {
    fn name(&self) -> &'static str {
        "prim"
    }

    fn build(&self, graph: &Graph) -> Result<Graph> {
        run_prim(graph)
    }
}

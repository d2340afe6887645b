//! Undirected weighted graph model.
//!
//! Provides vertex and edge types, the [`Graph`] container with its derived
//! adjacency index, and breadth-first diagnostics (eccentricity, diameter).
//!
//! # Example
//!
//! ```rust
//! use spanwise_core::graph::{Edge, Graph, TraversalState};
//!
//! let graph = Graph::from_edges(
//!     4,
//!     vec![Edge::new(0, 1, 1), Edge::new(1, 2, 1), Edge::new(2, 3, 1)],
//! )
//! .unwrap();
//!
//! let mut state = TraversalState::new(graph.vertex_count());
//! assert_eq!(graph.bfs_eccentricity(0, &mut state).unwrap(), 3);
//! assert_eq!(state.distance(2), Some(2));
//! assert_eq!(graph.diameter(), 3);
//! ```

mod store;
pub mod traversal;
mod types;

#[cfg(test)]
mod traversal_tests;

pub use store::{Graph, GraphLimits, DEFAULT_MAX_VERTICES};
pub use traversal::TraversalState;
pub use types::{Edge, Vertex, Weight};

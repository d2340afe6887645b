//! # Spanwise Core
//!
//! Minimum spanning trees and BFS diagnostics for small undirected weighted
//! graphs.
//!
//! ## Features
//!
//! - **Graph model**: dense vertex ids, integer weights, derived adjacency
//! - **Kruskal**: sorted edges + union-find with path compression
//! - **Prim**: round-batched frontier expansion from vertex 0
//! - **Diagnostics**: BFS eccentricity, diameter, total weight
//! - **Loader**: plain-text integer graph format
//!
//! ## Quick Start
//!
//! ```rust
//! use spanwise_core::graph::GraphLimits;
//! use spanwise_core::loader::parse_graph;
//! use spanwise_core::mst::{run_kruskal, run_prim};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let graph = parse_graph(
//!         "5 6  0 1 2  0 2 3  1 2 1  1 3 4  2 3 5  3 4 2",
//!         GraphLimits::default(),
//!     )?;
//!
//!     let kruskal = run_kruskal(&graph);
//!     let prim = run_prim(&graph)?;
//!
//!     assert_eq!(kruskal.total_weight(), 9);
//!     assert_eq!(prim.total_weight(), 9);
//!     assert_eq!(kruskal.diameter(), 3);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![cfg_attr(
    test,
    allow(clippy::doc_markdown, clippy::uninlined_format_args, clippy::cast_lossless)
)]

pub mod config;
#[cfg(test)]
mod config_tests;
pub mod error;
pub mod graph;
pub mod loader;
pub mod mst;
pub mod report;

pub use config::SpanwiseConfig;
pub use error::{Error, Result};
pub use graph::{Edge, Graph, GraphLimits, TraversalState, Vertex, Weight};
pub use mst::{run_kruskal, run_prim, Kruskal, Prim, SpanningTreeAlgorithm};
pub use report::{GraphReport, ReportKind};

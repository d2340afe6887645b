//! Error types for spanwise-core.

use thiserror::Error;

/// Errors raised by graph construction, traversal and spanning-tree builds.
///
/// Every operation is a pure in-memory computation, so an error always fails
/// the single call that raised it and nothing is retried.
#[derive(Error, Debug)]
pub enum Error {
    /// A vertex id lies outside `[0, vertex_count)`.
    #[error("Invalid vertex id {id}: graph has {vertex_count} vertices")]
    InvalidVertexId {
        /// The offending id.
        id: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },

    /// A vertex was paired with an edge it does not touch.
    #[error("Vertex {vertex} is not an endpoint of edge ({a}, {b})")]
    InvalidEdgeEndpoint {
        /// The vertex that was supplied.
        vertex: usize,
        /// First endpoint of the edge.
        a: usize,
        /// Second endpoint of the edge.
        b: usize,
    },

    /// Prim's frontier ran out of candidate edges before spanning the graph.
    #[error("Graph is disconnected: reached {reached} of {vertex_count} vertices from vertex 0")]
    DisconnectedGraph {
        /// Vertices reached from the start vertex.
        reached: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },

    /// The vertex count exceeds the configured adjacency bound.
    #[error("Graph too large: {vertex_count} vertices exceeds the limit of {max_vertices}")]
    GraphTooLarge {
        /// Requested vertex count.
        vertex_count: usize,
        /// Configured maximum.
        max_vertices: usize,
    },

    /// A graph file declared a different number of edges than it lists.
    #[error("Edge count mismatch: header declares {declared}, file lists {actual}")]
    EdgeCountMismatch {
        /// Count from the header.
        declared: usize,
        /// Count of edge triples actually present.
        actual: usize,
    },

    /// Malformed graph input.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for spanwise operations.
pub type Result<T> = std::result::Result<T, Error>;

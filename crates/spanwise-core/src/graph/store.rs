//! Undirected weighted graph with a derived adjacency index.
//!
//! The adjacency list is a pure view over the edge list: it is rebuilt every
//! time the edges are replaced and never mutated on its own.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::types::{Edge, Vertex, Weight};

/// Default bound on the number of vertices a graph may hold.
pub const DEFAULT_MAX_VERTICES: usize = 1000;

/// Size bounds enforced when a graph is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphLimits {
    /// Maximum number of vertices.
    pub max_vertices: usize,
}

impl Default for GraphLimits {
    fn default() -> Self {
        Self {
            max_vertices: DEFAULT_MAX_VERTICES,
        }
    }
}

impl GraphLimits {
    /// Creates limits with the given vertex bound.
    #[must_use]
    pub fn new(max_vertices: usize) -> Self {
        Self { max_vertices }
    }
}

/// An undirected weighted graph over dense vertex ids `0..vertex_count`.
///
/// Vertices are held behind an `Arc` so that spanning trees derived from a
/// graph share its vertex identities while owning their own edges.
///
/// # Example
///
/// ```rust
/// use spanwise_core::graph::{Edge, Graph};
///
/// let graph = Graph::from_edges(3, vec![Edge::new(0, 1, 4), Edge::new(1, 2, 6)]).unwrap();
/// assert_eq!(graph.total_weight(), 10);
/// assert_eq!(graph.adjacent_vertices(1).unwrap().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Graph {
    vertices: Arc<[Vertex]>,
    edges: Vec<Edge>,
    /// Per vertex: `(neighbour_id, edge_index)` sorted by neighbour id.
    adjacency: Vec<Vec<(usize, usize)>>,
    limits: GraphLimits,
}

impl Graph {
    /// Builds a graph with the default [`GraphLimits`].
    ///
    /// # Errors
    ///
    /// See [`Graph::with_limits`].
    pub fn new(vertices: Vec<Vertex>, edges: Vec<Edge>) -> Result<Self> {
        Self::with_limits(vertices, edges, GraphLimits::default())
    }

    /// Builds a graph from an explicit vertex list and edge list.
    ///
    /// # Errors
    ///
    /// - `Error::GraphTooLarge` if there are more vertices than `limits` allow.
    /// - `Error::InvalidVertexId` if a vertex id does not match its position,
    ///   or an edge references an id outside `[0, vertex_count)`.
    pub fn with_limits(
        vertices: Vec<Vertex>,
        edges: Vec<Edge>,
        limits: GraphLimits,
    ) -> Result<Self> {
        check_vertex_count(vertices.len(), limits)?;
        if let Some((index, vertex)) = vertices
            .iter()
            .enumerate()
            .find(|(index, vertex)| vertex.id() != *index)
        {
            tracing::debug!(index, id = vertex.id(), "vertex id is not dense");
            return Err(Error::InvalidVertexId {
                id: vertex.id(),
                vertex_count: vertices.len(),
            });
        }

        let mut graph = Self {
            vertices: vertices.into(),
            edges,
            adjacency: Vec::new(),
            limits,
        };
        graph.rebuild_adjacency()?;
        Ok(graph)
    }

    /// Builds a graph over vertices `0..vertex_count` labelled by their ids.
    ///
    /// # Errors
    ///
    /// See [`Graph::with_limits`].
    pub fn from_edges(vertex_count: usize, edges: Vec<Edge>) -> Result<Self> {
        Self::from_edges_with_limits(vertex_count, edges, GraphLimits::default())
    }

    /// Like [`Graph::from_edges`] with explicit limits.
    ///
    /// # Errors
    ///
    /// See [`Graph::with_limits`].
    pub fn from_edges_with_limits(
        vertex_count: usize,
        edges: Vec<Edge>,
        limits: GraphLimits,
    ) -> Result<Self> {
        check_vertex_count(vertex_count, limits)?;
        let vertices = (0..vertex_count).map(Vertex::new).collect();
        Self::with_limits(vertices, edges, limits)
    }

    /// Builds a graph sharing this graph's vertices with a new edge set.
    ///
    /// The caller guarantees every edge references a vertex of `self`.
    pub(crate) fn derive(&self, edges: Vec<Edge>) -> Self {
        let adjacency = index_edges(self.vertices.len(), &edges);
        Self {
            vertices: Arc::clone(&self.vertices),
            edges,
            adjacency,
            limits: self.limits,
        }
    }

    // ── Edge replacement ───────────────────────────────────────────────

    /// Replaces the edge list and rebuilds the adjacency index.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidVertexId` if an edge references an unknown vertex;
    /// the graph is left unchanged in that case.
    pub fn set_edges(&mut self, edges: Vec<Edge>) -> Result<()> {
        validate_edges(self.vertices.len(), &edges)?;
        self.adjacency = index_edges(self.vertices.len(), &edges);
        self.edges = edges;
        Ok(())
    }

    /// Recomputes the adjacency index from the edge list.
    ///
    /// # Errors
    ///
    /// - `Error::GraphTooLarge` if the vertex count exceeds the graph's limits.
    /// - `Error::InvalidVertexId` if an edge references an unknown vertex.
    pub fn rebuild_adjacency(&mut self) -> Result<()> {
        check_vertex_count(self.vertices.len(), self.limits)?;
        validate_edges(self.vertices.len(), &self.edges)?;
        self.adjacency = index_edges(self.vertices.len(), &self.edges);
        Ok(())
    }

    // ── Accessors ──────────────────────────────────────────────────────

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns all vertices, indexed by id.
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Returns all edges in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the limits this graph was built with.
    #[must_use]
    pub fn limits(&self) -> GraphLimits {
        self.limits
    }

    /// Gets a vertex by id.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidVertexId` if `id` is out of range.
    pub fn vertex(&self, id: usize) -> Result<&Vertex> {
        self.vertices.get(id).ok_or(Error::InvalidVertexId {
            id,
            vertex_count: self.vertices.len(),
        })
    }

    /// Returns true if both graphs share the same vertex list instance.
    #[must_use]
    pub fn shares_vertices_with(&self, other: &Graph) -> bool {
        Arc::ptr_eq(&self.vertices, &other.vertices)
    }

    // ── Adjacency queries ──────────────────────────────────────────────

    /// Returns every edge touching `v`, ordered by the neighbour's id.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidVertexId` if `v` is out of range.
    pub fn adjacent_edges(&self, v: usize) -> Result<Vec<&Edge>> {
        Ok(self
            .neighbours(v)?
            .iter()
            .map(|&(_, edge_index)| &self.edges[edge_index])
            .collect())
    }

    /// Returns every vertex adjacent to `v`, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidVertexId` if `v` is out of range.
    pub fn adjacent_vertices(&self, v: usize) -> Result<Vec<&Vertex>> {
        Ok(self
            .neighbours(v)?
            .iter()
            .map(|&(neighbour, _)| &self.vertices[neighbour])
            .collect())
    }

    /// Returns the endpoint of `edge` opposite `v`.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidVertexId` if `v` is out of range.
    /// - `Error::InvalidEdgeEndpoint` if `v` is neither endpoint of `edge`.
    pub fn other_endpoint(&self, v: usize, edge: &Edge) -> Result<&Vertex> {
        self.vertex(v)?;
        let other = edge.opposite(v).ok_or(Error::InvalidEdgeEndpoint {
            vertex: v,
            a: edge.a(),
            b: edge.b(),
        })?;
        self.vertex(other)
    }

    /// Finds an edge joining `a` and `b` in either orientation.
    #[must_use]
    pub fn find_edge(&self, a: usize, b: usize) -> Option<&Edge> {
        self.edges.iter().find(|edge| edge.connects(a, b))
    }

    /// Returns the sum of all edge weights, saturating at `Weight::MAX`.
    #[must_use]
    pub fn total_weight(&self) -> Weight {
        self.edges
            .iter()
            .map(Edge::weight)
            .fold(0, Weight::saturating_add)
    }

    /// Raw adjacency entries `(neighbour_id, edge_index)` for `v`.
    pub(crate) fn neighbours(&self, v: usize) -> Result<&[(usize, usize)]> {
        self.adjacency
            .get(v)
            .map(Vec::as_slice)
            .ok_or(Error::InvalidVertexId {
                id: v,
                vertex_count: self.vertices.len(),
            })
    }
}

fn check_vertex_count(vertex_count: usize, limits: GraphLimits) -> Result<()> {
    if vertex_count > limits.max_vertices {
        return Err(Error::GraphTooLarge {
            vertex_count,
            max_vertices: limits.max_vertices,
        });
    }
    Ok(())
}

fn validate_edges(vertex_count: usize, edges: &[Edge]) -> Result<()> {
    for edge in edges {
        for id in [edge.a(), edge.b()] {
            if id >= vertex_count {
                return Err(Error::InvalidVertexId { id, vertex_count });
            }
        }
    }
    Ok(())
}

/// Builds the adjacency list. Only the first edge of each unordered vertex
/// pair is indexed; later duplicates stay in the edge list but are invisible
/// to adjacency queries.
fn index_edges(vertex_count: usize, edges: &[Edge]) -> Vec<Vec<(usize, usize)>> {
    let mut adjacency: Vec<Vec<(usize, usize)>> = vec![Vec::new(); vertex_count];

    for (edge_index, edge) in edges.iter().enumerate() {
        let (a, b) = (edge.a(), edge.b());
        if adjacency[a].iter().any(|&(neighbour, _)| neighbour == b) {
            tracing::warn!(a, b, edge_index, "duplicate vertex pair hidden from adjacency");
            continue;
        }
        if a == b {
            tracing::warn!(vertex = a, edge_index, "self-loop in edge list");
            adjacency[a].push((a, edge_index));
        } else {
            adjacency[a].push((b, edge_index));
            adjacency[b].push((a, edge_index));
        }
    }

    for entries in &mut adjacency {
        entries.sort_unstable_by_key(|&(neighbour, _)| neighbour);
    }
    adjacency
}

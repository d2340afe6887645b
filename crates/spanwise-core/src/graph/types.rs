//! Vertex and edge value types.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Edge weight. Weights are non-negative integers.
pub type Weight = u64;

/// A vertex of an undirected weighted graph.
///
/// The id is a dense 0-based index, unique within a graph and immutable after
/// creation. Equality is by id only.
///
/// # Example
///
/// ```rust
/// use spanwise_core::graph::Vertex;
///
/// let v = Vertex::new(3);
/// assert_eq!(v.id(), 3);
/// assert_eq!(v.label(), "3");
///
/// let named = Vertex::new(3).with_label("Lyon");
/// assert_eq!(v, named);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vertex {
    id: usize,
    label: String,
}

impl Vertex {
    /// Creates a vertex whose label is its decimal id.
    #[must_use]
    pub fn new(id: usize) -> Self {
        Self {
            id,
            label: id.to_string(),
        }
    }

    /// Replaces the label (builder pattern).
    #[must_use]
    pub fn with_label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    /// Returns the vertex id.
    #[must_use]
    pub fn id(&self) -> usize {
        self.id
    }

    /// Returns the vertex label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Vertex {}

/// An undirected weighted edge between two vertex ids.
///
/// Edges order by weight only (see [`Edge::cmp_by_weight`]); two edges of
/// equal weight are interchangeable when sorting but are not equal values.
/// Equality and hashing ignore endpoint orientation.
///
/// # Example
///
/// ```rust
/// use spanwise_core::graph::Edge;
///
/// let edge = Edge::new(0, 4, 12);
/// assert!(edge.connects(4, 0));
/// assert_eq!(edge.weight(), 12);
/// assert_eq!(edge, Edge::new(4, 0, 12));
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Edge {
    a: usize,
    b: usize,
    weight: Weight,
}

impl Edge {
    /// Creates an edge between `a` and `b`.
    #[must_use]
    pub fn new(a: usize, b: usize, weight: Weight) -> Self {
        Self { a, b, weight }
    }

    /// Returns the first endpoint as given at construction.
    #[must_use]
    pub fn a(&self) -> usize {
        self.a
    }

    /// Returns the second endpoint as given at construction.
    #[must_use]
    pub fn b(&self) -> usize {
        self.b
    }

    /// Returns the edge weight.
    #[must_use]
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Returns true if the edge joins `x` and `y` in either orientation.
    #[must_use]
    pub fn connects(&self, x: usize, y: usize) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }

    /// Returns true if `v` is one of the endpoints.
    #[must_use]
    pub fn touches(&self, v: usize) -> bool {
        self.a == v || self.b == v
    }

    /// Returns the endpoint opposite `v`, or `None` if `v` is not on the edge.
    ///
    /// For a self-loop the opposite endpoint is `v` itself.
    #[must_use]
    pub fn opposite(&self, v: usize) -> Option<usize> {
        if self.a == v {
            Some(self.b)
        } else if self.b == v {
            Some(self.a)
        } else {
            None
        }
    }

    /// Total order by weight, used to sort edge lists ascending.
    #[must_use]
    pub fn cmp_by_weight(&self, other: &Self) -> Ordering {
        self.weight.cmp(&other.weight)
    }

    /// Endpoints with the smaller id first.
    fn normalized(&self) -> (usize, usize, Weight) {
        (self.a.min(self.b), self.a.max(self.b), self.weight)
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.normalized() == other.normalized()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized().hash(state);
    }
}

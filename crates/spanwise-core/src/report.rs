//! Serializable summaries of a graph or spanning tree.

use serde::Serialize;

use crate::graph::{Graph, Weight};

/// Which graph a report describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    /// The input graph.
    Original,
    /// Tree produced by Prim's algorithm.
    Prim,
    /// Tree produced by Kruskal's algorithm.
    Kruskal,
}

impl ReportKind {
    /// Section heading for text output.
    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            Self::Original => "Original graph",
            Self::Prim => "Prim's algorithm",
            Self::Kruskal => "Kruskal's algorithm",
        }
    }

    /// Report kind for an algorithm name, as returned by
    /// [`SpanningTreeAlgorithm::name`](crate::mst::SpanningTreeAlgorithm::name).
    #[must_use]
    pub fn for_algorithm(name: &str) -> Option<Self> {
        match name {
            "prim" => Some(Self::Prim),
            "kruskal" => Some(Self::Kruskal),
            _ => None,
        }
    }
}

/// One edge row in a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EdgeRow {
    /// First endpoint id.
    pub a: usize,
    /// Second endpoint id.
    pub b: usize,
    /// Edge weight.
    pub weight: Weight,
}

/// Counts, edge list, diameter and total cost of one graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphReport {
    /// Which graph this is.
    pub kind: ReportKind,
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of edges.
    pub edge_count: usize,
    /// Edges in graph order; empty when edge listing is disabled.
    pub edges: Vec<EdgeRow>,
    /// Largest BFS eccentricity.
    pub diameter: usize,
    /// Sum of edge weights.
    pub total_weight: Weight,
}

impl GraphReport {
    /// Summarizes `graph`. Computing the diameter runs one BFS per vertex.
    #[must_use]
    pub fn from_graph(kind: ReportKind, graph: &Graph, list_edges: bool) -> Self {
        let edges = if list_edges {
            graph
                .edges()
                .iter()
                .map(|edge| EdgeRow {
                    a: edge.a(),
                    b: edge.b(),
                    weight: edge.weight(),
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            kind,
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            edges,
            diameter: graph.diameter(),
            total_weight: graph.total_weight(),
        }
    }
}

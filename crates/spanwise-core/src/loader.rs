//! Loader for the plain-text graph format.
//!
//! The format is a stream of non-negative integers; every character that is
//! not an ASCII digit acts as a separator, so punctuation, labels and line
//! breaks are all ignored:
//!
//! ```text
//! 5 6          vertex count, edge count
//! 0 1 2        edge: a, b, weight
//! 0 2 3
//! 1 2 1
//! 1 3 4
//! 2 3 5
//! 3 4 2
//! ```
//!
//! Vertices are created with ids `0..vertex_count`, each labelled with its
//! decimal id. Weights must not exceed [`MAX_WEIGHT`].

use std::path::Path;

use crate::error::{Error, Result};
use crate::graph::{Edge, Graph, GraphLimits, Weight};

/// Largest weight accepted in a graph file (`i32::MAX`).
pub const MAX_WEIGHT: Weight = 2_147_483_647;

/// Reads and parses the graph file at `path`.
///
/// # Errors
///
/// Returns `Error::Io` if the file cannot be read, otherwise see
/// [`parse_graph`].
pub fn load_graph(path: impl AsRef<Path>, limits: GraphLimits) -> Result<Graph> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let graph = parse_graph(&text, limits)?;
    tracing::info!(
        path = %path.display(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );
    Ok(graph)
}

/// Parses a graph from text.
///
/// # Errors
///
/// - `Error::Parse` if the text holds no header, an integer overflows, a
///   weight exceeds [`MAX_WEIGHT`], or the edge list ends with an incomplete
///   triple.
/// - `Error::EdgeCountMismatch` if the number of triples differs from the
///   declared edge count.
/// - `Error::GraphTooLarge` / `Error::InvalidVertexId` from graph
///   construction.
pub fn parse_graph(text: &str, limits: GraphLimits) -> Result<Graph> {
    let numbers = extract_integers(text)?;

    let [vertex_count, declared_edges, rest @ ..] = numbers.as_slice() else {
        return Err(Error::Parse(
            "expected a vertex count and an edge count".to_string(),
        ));
    };

    let vertex_count = to_usize(*vertex_count)?;
    let declared_edges = to_usize(*declared_edges)?;

    if rest.len() % 3 != 0 {
        return Err(Error::Parse(format!(
            "edge list has {} trailing integer(s) after the last complete edge",
            rest.len() % 3
        )));
    }
    let actual_edges = rest.len() / 3;
    if actual_edges != declared_edges {
        return Err(Error::EdgeCountMismatch {
            declared: declared_edges,
            actual: actual_edges,
        });
    }

    let edges = rest
        .chunks_exact(3)
        .map(|triple| {
            Ok(Edge::new(
                to_usize(triple[0])?,
                to_usize(triple[1])?,
                to_weight(triple[2])?,
            ))
        })
        .collect::<Result<Vec<_>>>()?;

    Graph::from_edges_with_limits(vertex_count, edges, limits)
}

/// Splits on every non-digit character and parses each run of digits.
fn extract_integers(text: &str) -> Result<Vec<Weight>> {
    text.split(|c: char| !c.is_ascii_digit())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<Weight>()
                .map_err(|e| Error::Parse(format!("integer '{token}' out of range: {e}")))
        })
        .collect()
}

fn to_usize(value: Weight) -> Result<usize> {
    usize::try_from(value).map_err(|_| Error::Parse(format!("{value} exceeds usize::MAX")))
}

fn to_weight(value: Weight) -> Result<Weight> {
    if value > MAX_WEIGHT {
        return Err(Error::Parse(format!(
            "weight {value} exceeds the maximum of {MAX_WEIGHT}"
        )));
    }
    Ok(value)
}

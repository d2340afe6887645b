//! Prim's minimum spanning tree with round-batched frontier expansion.

use crate::error::{Error, Result};
use crate::graph::{Edge, Graph, Weight};

/// Builds a spanning tree with round-batched Prim, starting at vertex 0.
///
/// Each round scans every adjacency entry of every frontier vertex and takes
/// the minimum weight among edges leading to unvisited vertices. It then adds
/// *every* such minimum-weight edge whose far endpoint is still unvisited when
/// reached, in frontier order then neighbour-id order. Vertices added in a
/// round join the frontier only when the round ends.
///
/// Batching is deliberate and differs from one-edge-at-a-time Prim when ties
/// exist: a vertex claimed in a round keeps its batch edge even if another
/// vertex claimed in the same round offers a cheaper link to it. Each accepted
/// edge claims a new vertex, so the result is always a spanning tree with
/// exactly `vertex_count - 1` edges, but its weight can exceed the minimum.
///
/// Time: O(V²·E) worst case from the repeated frontier scans.
///
/// # Errors
///
/// Returns `Error::DisconnectedGraph` when a round finds no candidate edge
/// before every vertex is reached.
pub fn run_prim(graph: &Graph) -> Result<Graph> {
    let vertex_count = graph.vertex_count();
    let target = vertex_count.saturating_sub(1);

    let mut visited = vec![false; vertex_count];
    let mut frontier: Vec<usize> = Vec::with_capacity(vertex_count);
    let mut wave: Vec<usize> = Vec::new();
    let mut accepted: Vec<Edge> = Vec::with_capacity(target);
    let mut round = 0usize;

    if vertex_count > 0 {
        visited[0] = true;
        frontier.push(0);
    }

    while accepted.len() < target {
        round += 1;
        let Some(min_weight) = min_crossing_weight(graph, &frontier, &visited)? else {
            tracing::warn!(
                round,
                reached = frontier.len(),
                vertices = vertex_count,
                "no edge leaves the frontier"
            );
            return Err(Error::DisconnectedGraph {
                reached: frontier.len(),
                vertex_count,
            });
        };

        for &v in &frontier {
            for &(neighbour, edge_index) in graph.neighbours(v)? {
                let edge = &graph.edges()[edge_index];
                if !visited[neighbour] && edge.weight() == min_weight {
                    visited[neighbour] = true;
                    accepted.push(*edge);
                    wave.push(neighbour);
                }
            }
        }

        tracing::debug!(round, min_weight, added = wave.len(), "prim round");
        frontier.append(&mut wave);
    }

    let tree = graph.derive(accepted);
    tracing::info!(
        algorithm = "prim",
        vertices = vertex_count,
        edges = tree.edge_count(),
        rounds = round,
        weight = tree.total_weight(),
        "spanning tree built"
    );
    Ok(tree)
}

/// Smallest weight among edges from the frontier to unvisited vertices.
fn min_crossing_weight(
    graph: &Graph,
    frontier: &[usize],
    visited: &[bool],
) -> Result<Option<Weight>> {
    let mut min_weight: Option<Weight> = None;
    for &v in frontier {
        for &(neighbour, edge_index) in graph.neighbours(v)? {
            if visited[neighbour] {
                continue;
            }
            let weight = graph.edges()[edge_index].weight();
            min_weight = Some(min_weight.map_or(weight, |current| current.min(weight)));
        }
    }
    Ok(min_weight)
}

//! Kruskal's minimum spanning tree.

use crate::graph::{Edge, Graph};

use super::union_find::UnionFind;

/// Builds a minimum spanning tree (forest, on a disconnected input) with
/// Kruskal's algorithm.
///
/// Edges are sorted ascending by weight, ties in input order, then accepted
/// whenever their endpoints lie in different components. The scan stops
/// early once `vertex_count - 1` edges are accepted. The result shares the
/// input's vertices and owns the accepted edges; the input is not modified.
///
/// Time: O(E log E) for sorting + O(E α(V)) for union-find.
///
/// # Example
///
/// ```rust
/// use spanwise_core::graph::{Edge, Graph};
/// use spanwise_core::mst::run_kruskal;
///
/// let graph = Graph::from_edges(
///     3,
///     vec![Edge::new(0, 1, 5), Edge::new(1, 2, 1), Edge::new(0, 2, 2)],
/// )
/// .unwrap();
/// let tree = run_kruskal(&graph);
/// assert_eq!(tree.edge_count(), 2);
/// assert_eq!(tree.total_weight(), 3);
/// ```
#[must_use]
pub fn run_kruskal(graph: &Graph) -> Graph {
    let vertex_count = graph.vertex_count();
    let target = vertex_count.saturating_sub(1);

    let mut sorted: Vec<Edge> = graph.edges().to_vec();
    sorted.sort_by(Edge::cmp_by_weight);

    let mut components = UnionFind::new(vertex_count);
    let mut accepted = Vec::with_capacity(target);
    let mut scanned = 0usize;

    for edge in sorted {
        if accepted.len() >= target {
            break;
        }
        scanned += 1;
        if components.union(edge.a(), edge.b()) {
            accepted.push(edge);
        }
    }

    let tree = graph.derive(accepted);
    tracing::info!(
        algorithm = "kruskal",
        vertices = vertex_count,
        edges = tree.edge_count(),
        scanned,
        weight = tree.total_weight(),
        "spanning tree built"
    );
    tree
}

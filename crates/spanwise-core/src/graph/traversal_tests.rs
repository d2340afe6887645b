//! Tests for BFS eccentricity and diameter.

use super::store::Graph;
use super::traversal::TraversalState;
use super::types::Edge;

/// Build a path graph: 0 - 1 - ... - (n-1)
fn build_path_graph(n: usize) -> Graph {
    let edges = (1..n).map(|i| Edge::new(i - 1, i, 10)).collect();
    Graph::from_edges(n, edges).unwrap()
}

/// Build a star graph with centre 0 and `leaves` leaves.
fn build_star_graph(leaves: usize) -> Graph {
    let edges = (1..=leaves).map(|i| Edge::new(0, i, 1)).collect();
    Graph::from_edges(leaves + 1, edges).unwrap()
}

/// Build a cycle: 0 - 1 - ... - (n-1) - 0
fn build_cycle_graph(n: usize) -> Graph {
    let mut edges: Vec<Edge> = (1..n).map(|i| Edge::new(i - 1, i, 1)).collect();
    edges.push(Edge::new(n - 1, 0, 1));
    Graph::from_edges(n, edges).unwrap()
}

#[test]
fn test_path_diameter_is_n_minus_one() {
    for n in 1..=12 {
        assert_eq!(build_path_graph(n).diameter(), n - 1, "path of {n}");
    }
}

#[test]
fn test_path_eccentricity_from_middle() {
    let graph = build_path_graph(7);
    assert_eq!(graph.eccentricity(3).unwrap(), 3);
    assert_eq!(graph.eccentricity(0).unwrap(), 6);
}

#[test]
fn test_star_diameter() {
    let graph = build_star_graph(6);
    assert_eq!(graph.eccentricity(0).unwrap(), 1);
    assert_eq!(graph.diameter(), 2);
}

#[test]
fn test_cycle_diameter() {
    assert_eq!(build_cycle_graph(6).diameter(), 3);
    assert_eq!(build_cycle_graph(7).diameter(), 3);
}

#[test]
fn test_diameter_ignores_weights() {
    let graph = Graph::from_edges(
        3,
        vec![Edge::new(0, 1, 100), Edge::new(1, 2, 1), Edge::new(0, 2, 1000)],
    )
    .unwrap();
    assert_eq!(graph.diameter(), 1);
}

#[test]
fn test_state_records_distances() {
    let graph = build_path_graph(4);
    let mut state = TraversalState::new(graph.vertex_count());
    graph.bfs_eccentricity(1, &mut state).unwrap();

    assert_eq!(state.distance(1), Some(0));
    assert_eq!(state.distance(0), Some(1));
    assert_eq!(state.distance(3), Some(2));
    assert_eq!(state.reached(), 4);
}

#[test]
fn test_state_reset_between_traversals() {
    // Two components: {0, 1} and {2, 3}
    let graph = Graph::from_edges(4, vec![Edge::new(0, 1, 1), Edge::new(2, 3, 1)]).unwrap();
    let mut state = TraversalState::new(graph.vertex_count());

    graph.bfs_eccentricity(0, &mut state).unwrap();
    assert!(state.is_visited(1));
    assert!(!state.is_visited(2));

    graph.bfs_eccentricity(2, &mut state).unwrap();
    assert!(!state.is_visited(0));
    assert!(state.is_visited(3));
    assert_eq!(state.distance(0), None);
}

#[test]
fn test_disconnected_eccentricity_within_component() {
    let graph = Graph::from_edges(
        5,
        vec![Edge::new(0, 1, 1), Edge::new(1, 2, 1), Edge::new(3, 4, 1)],
    )
    .unwrap();
    assert_eq!(graph.eccentricity(0).unwrap(), 2);
    assert_eq!(graph.eccentricity(3).unwrap(), 1);
    assert_eq!(graph.diameter(), 2);
}

#[test]
fn test_eccentricity_out_of_range() {
    let graph = build_path_graph(3);
    assert!(graph.eccentricity(3).is_err());
}

#[test]
fn test_empty_and_single_vertex() {
    let empty = Graph::from_edges(0, Vec::new()).unwrap();
    assert_eq!(empty.diameter(), 0);

    let single = Graph::from_edges(1, Vec::new()).unwrap();
    assert_eq!(single.diameter(), 0);
    assert_eq!(single.eccentricity(0).unwrap(), 0);
}

#[test]
fn test_undersized_state_is_resized() {
    let graph = build_path_graph(5);
    let mut state = TraversalState::default();
    assert_eq!(graph.bfs_eccentricity(0, &mut state).unwrap(), 4);
    assert_eq!(state.distance(4), Some(4));
}

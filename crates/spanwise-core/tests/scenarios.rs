//! End-to-end scenarios: load a graph, build both trees, summarize.

use spanwise_core::loader::parse_graph;
use spanwise_core::mst::{Kruskal, Prim, SpanningTreeAlgorithm};
use spanwise_core::{run_kruskal, run_prim, Error, GraphLimits, GraphReport, ReportKind};

const FIVE_VERTICES: &str = "\
5 6
0 1 2
0 2 3
1 2 1
1 3 4
2 3 5
3 4 2
";

/// Complete graph on five vertices, weight = a + b + 1.
const K5: &str = "\
5 10
0 1 2
0 2 3
0 3 4
0 4 5
1 2 4
1 3 5
1 4 6
2 3 6
2 4 7
3 4 8
";

#[test]
fn test_five_vertex_scenario() {
    let graph = parse_graph(FIVE_VERTICES, GraphLimits::default()).unwrap();

    let kruskal = run_kruskal(&graph);
    assert_eq!(kruskal.edge_count(), 4);
    assert_eq!(kruskal.total_weight(), 9);

    let prim = run_prim(&graph).unwrap();
    assert_eq!(prim.edge_count(), 4);
    assert_eq!(prim.total_weight(), 9);

    assert_eq!(graph.diameter(), 3);
}

#[test]
fn test_k5_star_tree() {
    let graph = parse_graph(K5, GraphLimits::default()).unwrap();
    assert_eq!(graph.diameter(), 1);

    for algorithm in [&Prim as &dyn SpanningTreeAlgorithm, &Kruskal] {
        let tree = algorithm.build(&graph).unwrap();
        // Cheapest edges all leave vertex 0.
        assert_eq!(tree.total_weight(), 14, "{}", algorithm.name());
        assert_eq!(tree.diameter(), 2, "{}", algorithm.name());
        assert_eq!(tree.adjacent_vertices(0).unwrap().len(), 4);
    }
}

#[test]
fn test_reports_for_all_three_graphs() {
    let graph = parse_graph(FIVE_VERTICES, GraphLimits::default()).unwrap();
    let mut reports = vec![GraphReport::from_graph(ReportKind::Original, &graph, true)];

    for algorithm in [&Prim as &dyn SpanningTreeAlgorithm, &Kruskal] {
        let kind = ReportKind::for_algorithm(algorithm.name()).unwrap();
        let tree = algorithm.build(&graph).unwrap();
        reports.push(GraphReport::from_graph(kind, &tree, true));
    }

    let weights: Vec<u64> = reports.iter().map(|r| r.total_weight).collect();
    assert_eq!(weights, vec![17, 9, 9]);
    let diameters: Vec<usize> = reports.iter().map(|r| r.diameter).collect();
    assert_eq!(diameters, vec![3, 3, 3]);
}

#[test]
fn test_disconnected_input_fails_prim_only() {
    let graph = parse_graph("4 2  0 1 1  2 3 1", GraphLimits::default()).unwrap();
    assert!(matches!(
        Prim.build(&graph),
        Err(Error::DisconnectedGraph { .. })
    ));
    assert_eq!(Kruskal.build(&graph).unwrap().edge_count(), 2);
}

//! Fixed scenarios driven through the query engine.

use pathviz_engine::config::{CompletePreset, StarPreset, TreePreset};
use pathviz_engine::graph::presets;
use pathviz_engine::{
    find_paths, run, Algorithm, AlgorithmResult, Graph, GraphError, Position, Query,
    SearchAlgorithm, Step, StepKind,
};

use crate::common::fixtures::{split_pair, unit_square};

#[test]
fn test_square_shortest_path_and_spanning_tree() {
    println!("\n=== TEST: 4-cycle scenario ===");
    let (graph, [a, b, c, _d]) = unit_square();

    let path = run(&graph, &Query::path(SearchAlgorithm::Dijkstra, a, c))
        .expect("query")
        .finish();
    let path = path.as_path().expect("path result");
    assert_eq!(path.total_cost, 2.0);
    assert_eq!(path.path, vec![a, b, c]);

    let steps: Vec<Step> = run(&graph, &Query::mst()).expect("query").collect();
    assert_eq!(steps.len(), 3);
    assert!(steps.iter().all(|s| s.kind() == StepKind::EdgeAccepted));

    let tree = run(&graph, &Query::mst()).expect("query").finish();
    assert_eq!(tree.cost(), Some(3.0));
    assert_eq!(tree.nodes_visited(), 4);
}

#[test]
fn test_disconnected_pair_with_isolated_node() {
    println!("\n=== TEST: disconnected scenario ===");
    let (graph, [a, _b, c]) = split_pair();

    let tree = run(&graph, &Query::mst()).expect("query").finish();
    let mst = tree.as_mst().expect("mst result");
    assert_eq!(mst.edge_count(), 1);
    assert_eq!(mst.total_weight, 5.0);
    assert_eq!(mst.edge_labels(), ["A-B"]);

    let results = find_paths(
        &graph,
        a,
        c,
        &[Algorithm::Dijkstra, Algorithm::AStar, Algorithm::Bfs, Algorithm::Dfs],
    )
    .expect("find_paths");
    assert_eq!(results.len(), 4);
    for result in &results {
        assert!(!result.path_found, "{}", result.algorithm);
        assert!(result.path.is_empty());
        assert_eq!(result.cost(), None);
        assert_eq!(result.nodes_visited, 2, "{}", result.algorithm);
    }
}

#[test]
fn test_star_leaves_meet_at_hub() {
    let graph = presets::star(&StarPreset::default(), Position::new(300.0, 300.0)).expect("star");
    let ids = graph.node_ids();
    let (hub, left, right) = (ids[0], ids[1], ids[4]);

    for algorithm in SearchAlgorithm::ALL {
        let result = run(&graph, &Query::path(algorithm, left, right))
            .expect("query")
            .finish();
        let path = result.as_path().expect("path result");
        assert_eq!(path.path, vec![left, hub, right], "{algorithm}");
        assert_eq!(path.path_weight, 200.0, "{algorithm}");
    }
}

#[test]
fn test_tree_and_complete_spanning_trees() {
    let tree = presets::binary_tree(&TreePreset::default(), 300.0).expect("tree");
    let result = run(&tree, &Query::mst()).expect("query").finish();
    let mst = result.as_mst().expect("mst result");
    assert_eq!(mst.edge_count(), 6);
    assert_eq!(mst.edge_count(), tree.edge_count(), "a tree is its own MST");

    let k5 = presets::complete(&CompletePreset::default(), Position::new(0.0, 0.0)).expect("K5");
    let result = run(&k5, &Query::mst()).expect("query").finish();
    let mst = result.as_mst().expect("mst result");
    assert_eq!(mst.edge_count(), 4);
    assert!(mst.is_spanning_tree());
}

#[test]
fn test_moving_a_node_changes_the_route() {
    let mut graph = Graph::new();
    let a = graph.add_node(Position::new(0.0, 0.0));
    let b = graph.add_node(Position::new(100.0, 0.0));
    let c = graph.add_node(Position::new(50.0, 40.0));
    graph.add_edge(a, b, Some(120.0)).expect("a-b");
    graph.add_edge(a, c, None).expect("a-c");
    graph.add_edge(c, b, None).expect("c-b");

    let query = Query::path(SearchAlgorithm::Dijkstra, a, b);
    let before = run(&graph, &query).expect("query").finish();
    assert_eq!(before.as_path().map(|p| p.path.clone()), Some(vec![a, b]));
    assert_eq!(before.cost(), Some(120.0));

    graph.move_node(c, Position::new(50.0, 0.0)).expect("move");

    let after = run(&graph, &query).expect("query").finish();
    assert_eq!(after.as_path().map(|p| p.path.clone()), Some(vec![a, c, b]));
    assert_eq!(after.cost(), Some(100.0));
    assert_eq!(graph.edge_between(a, b).map(|e| e.weight), Some(120.0));
}

#[test]
fn test_abandoned_run_then_edit_then_rerun() {
    let (mut graph, [a, _b, c, d]) = unit_square();

    {
        let mut partial = run(&graph, &Query::path(SearchAlgorithm::Bfs, a, c)).expect("query");
        assert!(partial.next().is_some());
    }

    graph.remove_edge(c, d).expect("remove");
    graph.remove_edge(d, a).expect("remove");

    let result = run(&graph, &Query::path(SearchAlgorithm::Bfs, a, d))
        .expect("query")
        .finish();
    assert_eq!(result.cost(), None);
    assert_eq!(result.nodes_visited(), 3);
}

#[test]
fn test_query_errors() {
    let (graph, [a, ..]) = unit_square();

    assert!(matches!(
        run(&graph, &Query::path(SearchAlgorithm::AStar, a, a)),
        Err(GraphError::InvalidQuery(_))
    ));
    assert!(matches!(
        run(&graph, &Query::path(SearchAlgorithm::Dfs, 1000, a)),
        Err(GraphError::UnknownNode(1000))
    ));

    let single = {
        let mut g = Graph::new();
        g.add_node(Position::default());
        g
    };
    assert!(matches!(
        run(&single, &Query::mst()),
        Err(GraphError::InsufficientNodes { required: 2, actual: 1 })
    ));
}

#[test]
fn test_results_report_their_algorithm() {
    let (graph, [a, _, c, _]) = unit_square();

    let algorithms = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Dijkstra,
        Algorithm::AStar,
        Algorithm::Mst,
    ];
    for algorithm in algorithms {
        let query = Query {
            algorithm,
            start: Some(a),
            end: Some(c),
        };
        let result: AlgorithmResult = run(&graph, &query).expect("query").finish();
        assert_eq!(result.algorithm(), algorithm);
    }
}

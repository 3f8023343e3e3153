//! Snapshot files survive a round trip with identical algorithm traces.

use std::fs::File;
use std::io::{BufReader, BufWriter};

use pathviz_engine::{
    minimum_spanning_tree, Graph, GraphError, NodeId, PathfindingRun, SearchAlgorithm, Step,
};
use tempfile::tempdir;

use crate::common::fixtures::{endpoint_pairs, random_graph, WeightMode};

fn trace(graph: &Graph, algorithm: SearchAlgorithm, start: NodeId, end: NodeId) -> Vec<Step> {
    PathfindingRun::new(graph, algorithm, start, end)
        .expect("run")
        .collect()
}

#[test]
fn test_file_roundtrip_preserves_traces() {
    let dir = tempdir().expect("Failed to create temp dir");

    for seed in 0..10 {
        let graph = random_graph(seed, 8, 12, WeightMode::Arbitrary);
        let path = dir.path().join(format!("graph-{seed}.json"));

        let writer = BufWriter::new(File::create(&path).expect("create"));
        graph.write_json(writer).expect("write");
        let reader = BufReader::new(File::open(&path).expect("open"));
        let restored = Graph::read_json(reader).expect("read");

        assert_eq!(restored.to_snapshot(), graph.to_snapshot(), "seed {seed}");
        for (s, t) in endpoint_pairs(&graph) {
            for algorithm in SearchAlgorithm::ALL {
                assert_eq!(
                    trace(&restored, algorithm, s, t),
                    trace(&graph, algorithm, s, t),
                    "{algorithm} seed {seed} {s}->{t}"
                );
            }
        }

        let original_tree = minimum_spanning_tree(&graph).expect("MST");
        let restored_tree = minimum_spanning_tree(&restored).expect("MST");
        assert!(restored_tree.same_outcome(&original_tree), "seed {seed}");
    }
}

#[test]
fn test_editor_export_format_loads() {
    let json = r#"{
        "nodes": [
            { "id": 0, "x": 0.0, "y": 0.0, "label": "A" },
            { "id": 1, "x": 30.0, "y": 40.0, "label": "B" },
            { "id": 4, "x": 60.0, "y": 0.0, "label": "E" }
        ],
        "edges": [
            { "fromId": 0, "toId": 1, "weight": 50 },
            { "fromId": 1, "toId": 4 },
            { "fromId": 4, "toId": 9, "weight": 3 }
        ]
    }"#;

    let mut graph = Graph::from_json(json).expect("load");

    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 2, "edge to a missing node is skipped");
    let result = PathfindingRun::new(&graph, SearchAlgorithm::Dijkstra, 0, 4)
        .expect("run")
        .finish();
    assert_eq!(result.cost(), Some(100.0));

    let next = graph.add_node(Default::default());
    assert_eq!(next, 5, "ids continue after the largest imported id");
}

#[test]
fn test_corrupt_file_is_rejected() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ \"nodes\": [").expect("write");

    let result = Graph::read_json(File::open(&path).expect("open"));

    assert!(matches!(result, Err(GraphError::Deserialization(_))));
}

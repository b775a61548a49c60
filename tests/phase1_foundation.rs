//! Phase 1 tests: data types + graph mutation.

use weighted_graph::graph::{AdjacencyGraph, GraphBuilder};
use weighted_graph::types::{AdjacencyEntry, Edge, GraphError, GraphPolicy};

fn triangle() -> AdjacencyGraph {
    GraphBuilder::new()
        .nodes([1, 2, 3])
        .edge(1, 2, 5)
        .edge(2, 3, 7)
        .edge(1, 3, 9)
        .build()
        .unwrap()
}

// ==================== Data Structure Tests ====================

#[test]
fn test_edge_normalises_endpoints() {
    let edge = Edge::new(5, 2, 10);
    assert_eq!(edge.a, 2);
    assert_eq!(edge.b, 5);
    assert!(edge.joins(5, 2));
    assert!(edge.joins(2, 5));
    assert!(!edge.joins(2, 3));
}

#[test]
fn test_adjacency_entry_display() {
    assert_eq!(AdjacencyEntry::new(3, -4).to_string(), "(3, -4)");
}

#[test]
fn test_default_policy_is_permissive() {
    let policy = GraphPolicy::default();
    assert!(policy.allow_parallel_edges);
    assert!(policy.allow_self_loops);
    assert!(!policy.strict_edges);
}

// ==================== Node Tests ====================

#[test]
fn test_add_node() {
    let mut graph = AdjacencyGraph::new();
    graph.add_node(1).unwrap();
    assert!(graph.contains_node(1));
    assert_eq!(graph.node_count(), 1);
    assert!(graph.neighbors(1).unwrap().is_empty());
}

#[test]
fn test_add_node_twice_reports_already_exists() {
    let mut graph = AdjacencyGraph::new();
    graph.add_node(7).unwrap();
    match graph.add_node(7).unwrap_err() {
        GraphError::AlreadyExists(id) => assert_eq!(id, 7),
        e => panic!("Expected AlreadyExists error, got {:?}", e),
    }
    assert_eq!(graph.node_count(), 1);
}

#[test]
fn test_add_node_keeps_existing_edges() {
    let mut graph = triangle();
    assert!(graph.add_node(1).is_err());
    assert_eq!(graph.degree(1).unwrap(), 2);
}

#[test]
fn test_negative_and_zero_ids() {
    let mut graph = AdjacencyGraph::new();
    graph.add_node(0).unwrap();
    graph.add_node(-3).unwrap();
    graph.add_edge(0, -3, 0).unwrap();
    assert_eq!(graph.nodes().collect::<Vec<_>>(), vec![-3, 0]);
    assert_eq!(graph.weight(-3, 0), Some(0));
}

#[test]
fn test_delete_node_strips_mirror_entries() {
    let mut graph = triangle();
    let stripped = graph.delete_node(2).unwrap();
    assert_eq!(stripped, 2);
    assert!(!graph.contains_node(2));
    for id in graph.nodes() {
        assert!(graph.neighbors(id).unwrap().iter().all(|e| e.neighbor != 2));
    }
    assert_eq!(graph.edge_count(), 1);
    assert!(graph.is_symmetric());
}

#[test]
fn test_delete_missing_node() {
    let mut graph = triangle();
    match graph.delete_node(42).unwrap_err() {
        GraphError::NotFound(id) => assert_eq!(id, 42),
        e => panic!("Expected NotFound error, got {:?}", e),
    }
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 3);
}

#[test]
fn test_neighbors_of_missing_node() {
    let graph = AdjacencyGraph::new();
    assert!(matches!(graph.neighbors(1), Err(GraphError::NotFound(1))));
}

// ==================== Edge Tests ====================

#[test]
fn test_add_edge_is_symmetric() {
    let mut graph = AdjacencyGraph::new();
    graph.add_node(1).unwrap();
    graph.add_node(2).unwrap();
    graph.add_edge(1, 2, 10).unwrap();

    assert_eq!(graph.neighbors(1).unwrap(), &[AdjacencyEntry::new(2, 10)]);
    assert_eq!(graph.neighbors(2).unwrap(), &[AdjacencyEntry::new(1, 10)]);
    assert_eq!(graph.edge_count(), 1);
    assert!(graph.is_symmetric());
}

#[test]
fn test_add_edge_on_empty_graph_reports_node_missing() {
    let mut graph = AdjacencyGraph::new();
    match graph.add_edge(1, 2, 10).unwrap_err() {
        GraphError::NodeMissing { a, b } => assert_eq!((a, b), (1, 2)),
        e => panic!("Expected NodeMissing error, got {:?}", e),
    }
    assert!(graph.is_empty());
}

#[test]
fn test_add_edge_with_one_missing_endpoint_does_not_mutate() {
    let mut graph = AdjacencyGraph::new();
    graph.add_node(1).unwrap();
    assert!(graph.add_edge(1, 2, 3).is_err());
    assert!(graph.neighbors(1).unwrap().is_empty());
    assert!(!graph.contains_node(2));
}

#[test]
fn test_negative_weight_accepted() {
    let mut graph = GraphBuilder::new().nodes([1, 2]).build().unwrap();
    graph.add_edge(1, 2, -15).unwrap();
    assert_eq!(graph.weight(2, 1), Some(-15));
}

#[test]
fn test_parallel_edges_allowed_by_default() {
    let mut graph = GraphBuilder::new().nodes([1, 2]).build().unwrap();
    graph.add_edge(1, 2, 1).unwrap();
    graph.add_edge(1, 2, 2).unwrap();
    assert_eq!(graph.degree(1).unwrap(), 2);
    assert_eq!(graph.degree(2).unwrap(), 2);
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.edges().len(), 2);
    assert!(graph.is_symmetric());
}

#[test]
fn test_parallel_edges_rejected_by_strict_policy() {
    let mut graph = GraphBuilder::new()
        .policy(GraphPolicy::strict())
        .nodes([1, 2])
        .edge(1, 2, 1)
        .build()
        .unwrap();
    match graph.add_edge(2, 1, 4).unwrap_err() {
        GraphError::DuplicateEdge { a, b } => assert_eq!((a, b), (2, 1)),
        e => panic!("Expected DuplicateEdge error, got {:?}", e),
    }
    assert_eq!(graph.weight(1, 2), Some(1));
}

#[test]
fn test_self_loop_permitted_appends_two_entries() {
    let mut graph = GraphBuilder::new().node(1).build().unwrap();
    graph.add_edge(1, 1, 3).unwrap();
    assert_eq!(
        graph.neighbors(1).unwrap(),
        &[AdjacencyEntry::new(1, 3), AdjacencyEntry::new(1, 3)]
    );
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.edges(), vec![Edge::new(1, 1, 3)]);
    assert!(graph.is_symmetric());
}

#[test]
fn test_self_loop_rejected_by_strict_policy() {
    let mut graph = AdjacencyGraph::with_policy(GraphPolicy::strict());
    graph.add_node(1).unwrap();
    match graph.add_edge(1, 1, 3).unwrap_err() {
        GraphError::SelfLoop(id) => assert_eq!(id, 1),
        e => panic!("Expected SelfLoop error, got {:?}", e),
    }
    assert!(graph.neighbors(1).unwrap().is_empty());
}

#[test]
fn test_delete_edge_removes_both_sides() {
    let mut graph = triangle();
    assert_eq!(graph.delete_edge(2, 1).unwrap(), 1);
    assert_eq!(graph.weight(1, 2), None);
    assert_eq!(graph.weight(2, 1), None);
    assert_eq!(graph.edge_count(), 2);
    assert!(graph.is_symmetric());
}

#[test]
fn test_delete_edge_collapses_parallel_edges() {
    let mut graph = GraphBuilder::new()
        .nodes([1, 2])
        .edge(1, 2, 1)
        .edge(1, 2, 2)
        .edge(2, 1, 3)
        .build()
        .unwrap();
    assert_eq!(graph.delete_edge(1, 2).unwrap(), 3);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_delete_self_loop() {
    let mut graph = GraphBuilder::new().nodes([1]).edge(1, 1, 2).build().unwrap();
    assert_eq!(graph.delete_edge(1, 1).unwrap(), 1);
    assert!(graph.neighbors(1).unwrap().is_empty());
}

#[test]
fn test_delete_edge_missing_node_does_not_create_it() {
    let mut graph = triangle();
    match graph.delete_edge(1, 99).unwrap_err() {
        GraphError::NodeMissing { a, b } => assert_eq!((a, b), (1, 99)),
        e => panic!("Expected NodeMissing error, got {:?}", e),
    }
    assert!(!graph.contains_node(99));
    assert_eq!(graph.node_count(), 3);
}

#[test]
fn test_delete_absent_edge_permissive() {
    let mut graph = GraphBuilder::new().nodes([1, 2]).build().unwrap();
    assert_eq!(graph.delete_edge(1, 2).unwrap(), 0);
}

#[test]
fn test_delete_absent_edge_strict() {
    let mut graph = GraphBuilder::new()
        .policy(GraphPolicy::strict())
        .nodes([1, 2])
        .build()
        .unwrap();
    assert!(matches!(
        graph.delete_edge(1, 2),
        Err(GraphError::EdgeNotFound { a: 1, b: 2 })
    ));
}

// ==================== Weight Update Tests ====================

#[test]
fn test_update_weight_both_sides() {
    let mut graph = triangle();
    assert_eq!(graph.update_weight(1, 2, 42).unwrap(), 1);
    assert_eq!(graph.weight(1, 2), Some(42));
    assert_eq!(graph.weight(2, 1), Some(42));
    // Unrelated edges untouched.
    assert_eq!(graph.weight(2, 3), Some(7));
    assert!(graph.is_symmetric());
}

#[test]
fn test_update_weight_applies_to_parallel_edges() {
    let mut graph = GraphBuilder::new()
        .nodes([1, 2])
        .edge(1, 2, 1)
        .edge(1, 2, 2)
        .build()
        .unwrap();
    assert_eq!(graph.update_weight(2, 1, 9).unwrap(), 2);
    assert!(graph.neighbors(1).unwrap().iter().all(|e| e.weight == 9));
    assert!(graph.neighbors(2).unwrap().iter().all(|e| e.weight == 9));
}

#[test]
fn test_update_weight_absent_edge_adds_nothing() {
    let mut graph = GraphBuilder::new().nodes([1, 2]).build().unwrap();
    assert_eq!(graph.update_weight(1, 2, 5).unwrap(), 0);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_update_weight_absent_edge_strict() {
    let mut graph = GraphBuilder::new()
        .policy(GraphPolicy::strict())
        .nodes([1, 2])
        .build()
        .unwrap();
    assert!(matches!(
        graph.update_weight(1, 2, 5),
        Err(GraphError::EdgeNotFound { .. })
    ));
}

#[test]
fn test_update_weight_missing_node() {
    let mut graph = GraphBuilder::new().nodes([1]).build().unwrap();
    assert!(matches!(
        graph.update_weight(1, 2, 5),
        Err(GraphError::NodeMissing { .. })
    ));
    assert!(!graph.contains_node(2));
}

// ==================== Builder Tests ====================

#[test]
fn test_builder_edge_before_nodes() {
    let graph = GraphBuilder::new()
        .edge(1, 2, 4)
        .nodes([1, 2])
        .build()
        .unwrap();
    assert_eq!(graph.weight(1, 2), Some(4));
}

#[test]
fn test_builder_reports_first_failure() {
    let result = GraphBuilder::new().node(1).edge(1, 2, 4).build();
    assert!(matches!(result, Err(GraphError::NodeMissing { a: 1, b: 2 })));
}

#[test]
fn test_edges_enumerated_once() {
    let graph = triangle();
    let edges = graph.edges();
    assert_eq!(
        edges,
        vec![Edge::new(1, 2, 5), Edge::new(1, 3, 9), Edge::new(2, 3, 7)]
    );
}

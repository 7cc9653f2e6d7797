use banker_core::models::SystemSnapshot;
use banker_graph::{EdgeKind, RagNode, ResourceAllocationGraph};

fn classic() -> SystemSnapshot {
    SystemSnapshot::indexed(
        &[
            vec![0, 1, 0],
            vec![2, 0, 0],
            vec![3, 0, 2],
            vec![2, 1, 1],
            vec![0, 0, 2],
        ],
        &[
            vec![7, 5, 3],
            vec![3, 2, 2],
            vec![9, 0, 2],
            vec![2, 2, 2],
            vec![4, 3, 3],
        ],
        &[3, 3, 2],
    )
    .unwrap()
}

/// P0 holds R0 and wants R1; P1 holds R1 and wants R0.
fn circular_wait() -> SystemSnapshot {
    SystemSnapshot::indexed(&[vec![1, 0], vec![0, 1]], &[vec![1, 1], vec![1, 1]], &[0, 0])
        .unwrap()
}

#[test]
fn edges_follow_nonzero_entries() {
    let snapshot = classic();
    let graph = ResourceAllocationGraph::from_snapshot(&snapshot);

    assert_eq!(graph.node_count(), 8);
    let allocated = snapshot
        .allocation()
        .iter_rows()
        .flatten()
        .filter(|&&v| v > 0)
        .count();
    let requested = snapshot
        .need()
        .iter_rows()
        .flatten()
        .filter(|&&v| v > 0)
        .count();
    assert_eq!(graph.count_edges(EdgeKind::Allocated), allocated);
    assert_eq!(graph.count_edges(EdgeKind::Requested), requested);
    assert_eq!(graph.edge_count(), 20);
}

#[test]
fn edge_directions_and_units() {
    let graph = ResourceAllocationGraph::from_snapshot(&classic());
    let edges = graph.edges();

    // P0 holds one unit of R1 and still needs 7 of R0.
    assert!(edges
        .iter()
        .any(|e| e.from == "P0" && e.to == "R1" && e.kind == EdgeKind::Allocated && e.units == 1));
    assert!(edges
        .iter()
        .any(|e| e.from == "R0" && e.to == "P0" && e.kind == EdgeKind::Requested && e.units == 7));
    // P2 needs nothing more of R1 or R2.
    assert!(!edges.iter().any(|e| e.from == "R1" && e.to == "P2"));
}

#[test]
fn nodes_use_user_labels() {
    let snapshot =
        SystemSnapshot::new(vec![10, 20], vec![7], &[vec![1], vec![0]], &[vec![1], vec![2]], &[1])
            .unwrap();
    let graph = ResourceAllocationGraph::from_snapshot(&snapshot);

    let p = graph.process_node(1).unwrap();
    assert_eq!(graph.graph[p], RagNode::Process { index: 1, label: 20 });
    assert_eq!(graph.graph[graph.resource_node(0).unwrap()].name(), "R7");
    assert!(graph.process_node(2).is_none());

    let names: Vec<_> = graph.edges().into_iter().map(|e| (e.from, e.to)).collect();
    assert_eq!(
        names,
        vec![
            ("P10".to_string(), "R7".to_string()),
            ("R7".to_string(), "P20".to_string()),
        ]
    );
}

#[test]
fn circular_wait_is_listed() {
    let graph = ResourceAllocationGraph::from_snapshot(&circular_wait());
    assert!(graph.has_cycle());
    assert_eq!(graph.cycles(), vec![vec!["P0", "P1", "R0", "R1"]]);
}

#[test]
fn single_process_hold_and_need_is_not_a_cycle() {
    let snapshot = SystemSnapshot::indexed(&[vec![1]], &[vec![2]], &[0]).unwrap();
    let graph = ResourceAllocationGraph::from_snapshot(&snapshot);
    assert_eq!(graph.edge_count(), 2);
    assert!(!graph.has_cycle());
}

#[test]
fn dot_output_styles_nodes_and_edges() {
    let dot = ResourceAllocationGraph::from_snapshot(&circular_wait()).to_dot();
    assert!(dot.starts_with("digraph {"));
    assert!(dot.contains("label = \"P0\" shape = \"ellipse\""));
    assert!(dot.contains("label = \"R1\" shape = \"box\""));
    assert!(dot.contains("fillcolor = \"skyblue\""));
    assert!(dot.contains("label = \"Allocated (1)\" color = \"green\" style = \"solid\""));
    assert!(dot.contains("label = \"Request (1)\" color = \"red\" style = \"dashed\""));
}

#[test]
fn edges_serialize_for_reports() {
    let graph = ResourceAllocationGraph::from_snapshot(&circular_wait());
    let value = serde_json::to_value(graph.edges()).unwrap();
    assert_eq!(value[0]["from"], "P0");
    assert_eq!(value[0]["kind"], "allocated");
}

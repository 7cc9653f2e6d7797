//! Petgraph-backed resource allocation graph.

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use serde::Serialize;

use banker_core::constants::{PROCESS_PREFIX, RESOURCE_PREFIX};
use banker_core::graph_span;
use banker_core::models::{SystemSnapshot, Units};

/// A process or resource node. `index` is the matrix row/column, `label`
/// the user-facing identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RagNode {
    Process { index: usize, label: u32 },
    Resource { index: usize, label: u32 },
}

impl RagNode {
    /// `P<label>` or `R<label>`.
    pub fn name(&self) -> String {
        match self {
            Self::Process { label, .. } => format!("{PROCESS_PREFIX}{label}"),
            Self::Resource { label, .. } => format!("{RESOURCE_PREFIX}{label}"),
        }
    }

    pub fn is_process(&self) -> bool {
        matches!(self, Self::Process { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    /// Process → resource: units currently held.
    Allocated,
    /// Resource → process: units still needed.
    Requested,
}

impl EdgeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Allocated => "Allocated",
            Self::Requested => "Request",
        }
    }
}

/// Edge weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RagEdge {
    pub kind: EdgeKind,
    pub units: Units,
}

/// Flattened edge for listing and serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
    pub kind: EdgeKind,
    pub units: Units,
}

/// Directed bipartite graph of processes and resources.
#[derive(Debug, Clone)]
pub struct ResourceAllocationGraph {
    pub graph: DiGraph<RagNode, RagEdge>,
    process_nodes: Vec<NodeIndex>,
    resource_nodes: Vec<NodeIndex>,
}

impl ResourceAllocationGraph {
    /// Build the graph from the snapshot's allocation and derived need matrices.
    /// Zero entries produce no edge.
    pub fn from_snapshot(snapshot: &SystemSnapshot) -> Self {
        let span = graph_span!(snapshot.process_count(), snapshot.resource_count());
        let _guard = span.enter();

        let mut graph = DiGraph::new();
        let process_nodes: Vec<NodeIndex> = snapshot
            .processes()
            .iter()
            .enumerate()
            .map(|(index, &label)| graph.add_node(RagNode::Process { index, label }))
            .collect();
        let resource_nodes: Vec<NodeIndex> = snapshot
            .resources()
            .iter()
            .enumerate()
            .map(|(index, &label)| graph.add_node(RagNode::Resource { index, label }))
            .collect();

        let need = snapshot.need();
        for (i, &p) in process_nodes.iter().enumerate() {
            for (j, &r) in resource_nodes.iter().enumerate() {
                let held = snapshot.allocation().row(i)[j];
                if held > 0 {
                    graph.add_edge(
                        p,
                        r,
                        RagEdge {
                            kind: EdgeKind::Allocated,
                            units: held,
                        },
                    );
                }
                let wanted = need.row(i)[j];
                if wanted > 0 {
                    graph.add_edge(
                        r,
                        p,
                        RagEdge {
                            kind: EdgeKind::Requested,
                            units: wanted,
                        },
                    );
                }
            }
        }

        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "resource allocation graph built"
        );

        Self {
            graph,
            process_nodes,
            resource_nodes,
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn process_node(&self, index: usize) -> Option<NodeIndex> {
        self.process_nodes.get(index).copied()
    }

    pub fn resource_node(&self, index: usize) -> Option<NodeIndex> {
        self.resource_nodes.get(index).copied()
    }

    /// Edges of the given kind.
    pub fn count_edges(&self, kind: EdgeKind) -> usize {
        self.graph
            .edge_references()
            .filter(|e| e.weight().kind == kind)
            .count()
    }

    /// All edges, in insertion order (process-major, allocation before request).
    pub fn edges(&self) -> Vec<GraphEdge> {
        self.graph
            .edge_references()
            .map(|e| GraphEdge {
                from: self.graph[e.source()].name(),
                to: self.graph[e.target()].name(),
                kind: e.weight().kind,
                units: e.weight().units,
            })
            .collect()
    }

    /// Circular hold-and-wait groups: strongly connected components spanning
    /// at least two processes, as sorted node names.
    ///
    /// A process that both holds and still needs the same resource forms a
    /// two-node component on its own; those are not reported. For single-unit
    /// resources a reported group is a deadlock; with multi-unit resources it
    /// is only a warning sign and the safety check is authoritative.
    pub fn cycles(&self) -> Vec<Vec<String>> {
        tarjan_scc(&self.graph)
            .into_iter()
            .filter(|scc| scc.iter().filter(|&&n| self.graph[n].is_process()).count() > 1)
            .map(|scc| {
                let mut names: Vec<String> =
                    scc.into_iter().map(|n| self.graph[n].name()).collect();
                names.sort();
                names
            })
            .collect()
    }

    pub fn has_cycle(&self) -> bool {
        !self.cycles().is_empty()
    }
}

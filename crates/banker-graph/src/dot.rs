//! Graphviz DOT export.

use petgraph::dot::{Config, Dot};

use crate::rag::{EdgeKind, RagNode, ResourceAllocationGraph};

const PROCESS_COLOR: &str = "skyblue";
const RESOURCE_COLOR: &str = "lightcoral";
const ALLOCATED_COLOR: &str = "green";
const REQUESTED_COLOR: &str = "red";

impl ResourceAllocationGraph {
    /// Render as DOT: processes as sky-blue ellipses, resources as
    /// light-coral boxes, allocations solid green, requests dashed red.
    pub fn to_dot(&self) -> String {
        format!(
            "{:?}",
            Dot::with_attr_getters(
                &self.graph,
                &[Config::EdgeNoLabel, Config::NodeNoLabel],
                &|_, edge| {
                    let weight = edge.weight();
                    let (color, style) = match weight.kind {
                        EdgeKind::Allocated => (ALLOCATED_COLOR, "solid"),
                        EdgeKind::Requested => (REQUESTED_COLOR, "dashed"),
                    };
                    format!(
                        "label = \"{} ({})\" color = \"{color}\" style = \"{style}\"",
                        weight.kind.as_str(),
                        weight.units
                    )
                },
                &|_, (_, node)| {
                    let (shape, color) = match node {
                        RagNode::Process { .. } => ("ellipse", PROCESS_COLOR),
                        RagNode::Resource { .. } => ("box", RESOURCE_COLOR),
                    };
                    format!(
                        "label = \"{}\" shape = \"{shape}\" style = \"filled\" fillcolor = \"{color}\"",
                        node.name()
                    )
                },
            )
        )
    }
}

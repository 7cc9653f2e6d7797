//! # banker-graph
//!
//! Builds the allocation/request graph for a [`SystemSnapshot`](banker_core::models::SystemSnapshot): process and
//! resource nodes, an `Allocated` edge process→resource for every held unit
//! count, and a `Requested` edge resource→process for every outstanding need.
//!
//! Purely derived from the snapshot; building it never runs the safety check.

pub mod dot;
pub mod rag;

pub use rag::{EdgeKind, GraphEdge, RagEdge, RagNode, ResourceAllocationGraph};

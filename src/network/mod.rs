//! Collaboration network assembly, merging and ranking.
//!
//! Control flow: identity resolution, then aggregation, then
//! [`assembler::assemble`], optionally followed by [`merger::merge`].
//! [`builder::NetworkBuilder`] wires these together for callers.

pub mod assembler;
pub mod builder;
pub mod graph;
pub mod merger;
pub mod ranking;
mod serde_seq;
pub mod work;

pub use assembler::assemble;
pub use builder::{NetworkBuilder, TargetRef};
pub use graph::{
    CollaborationGraph, Edge, EdgeKey, NameCollision, Node, NodeKey, NodeKind, Origin,
    TargetCoverage, TargetSummary,
};
pub use merger::{merge, merge_pair, MultiTargetNetwork, SkippedTarget};
pub use ranking::{rank_collaborations, CollaborationEntry};
pub use work::build_work_network;

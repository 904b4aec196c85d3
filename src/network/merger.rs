//! Union of several graphs into one.
//!
//! Merging is commutative, associative and idempotent over graph content:
//! nodes fold by key, edges fold by unordered pair, and weights union per
//! origin so the same target merged twice is counted once.

use super::graph::CollaborationGraph;
use crate::core::Error;
use tracing::{info, warn};

/// Merge graphs into one combined graph.
pub fn merge<'g, I>(graphs: I) -> CollaborationGraph
where
    I: IntoIterator<Item = &'g CollaborationGraph>,
{
    graphs
        .into_iter()
        .fold(CollaborationGraph::new(), |acc, graph| merge_pair(acc, graph))
}

/// Fold `other` into `base`.
pub fn merge_pair(mut base: CollaborationGraph, other: &CollaborationGraph) -> CollaborationGraph {
    for key in other.targets() {
        base.add_target(key.clone());
    }
    for node in other.nodes() {
        base.upsert_node(node.clone());
    }
    for edge in other.edges() {
        base.upsert_edge(edge.clone());
    }
    for collision in other.collisions() {
        base.record_collision(collision.key, collision.ids.into_iter().collect());
    }
    base
}

/// A requested target that could not be built, and why.
#[derive(Debug)]
pub struct SkippedTarget {
    pub target: String,
    pub reason: Error,
}

/// Result of a multi-target build: the merged graph plus every skipped target.
#[derive(Debug, Default)]
pub struct MultiTargetNetwork {
    pub graph: CollaborationGraph,
    pub skipped: Vec<SkippedTarget>,
}

impl MultiTargetNetwork {
    /// Merge the graphs that were built and keep the skip reasons for the rest.
    pub fn from_outcomes<I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = (String, Result<CollaborationGraph, Error>)>,
    {
        let mut built = Vec::new();
        let mut skipped = Vec::new();
        for (target, outcome) in outcomes {
            match outcome {
                Ok(graph) => built.push(graph),
                Err(reason) => {
                    warn!(target = %target, reason = %reason, "Skipping target");
                    skipped.push(SkippedTarget { target, reason });
                }
            }
        }

        let graph = merge(&built);
        info!(
            targets = built.len(),
            skipped = skipped.len(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "Multi-target network merged"
        );

        Self { graph, skipped }
    }

    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

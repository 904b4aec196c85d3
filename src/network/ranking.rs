//! Ranked collaboration lists for a target node.

use super::graph::{CollaborationGraph, NodeKey};
use serde::{Deserialize, Serialize};

/// One collaborator of a target, as shown in a ranked list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollaborationEntry {
    pub collaborator: NodeKey,
    pub frequency: u32,
    pub works: Vec<String>,
    pub work_count: usize,
    pub work_types: Vec<String>,
    pub years: Vec<i32>,
}

/// Neighbors of `target` by edge weight, highest first, truncated to `top_n`.
///
/// Equal weights are ordered by collaborator key so the list is stable.
pub fn rank_collaborations(
    graph: &CollaborationGraph,
    target: &NodeKey,
    top_n: usize,
) -> Vec<CollaborationEntry> {
    let mut entries: Vec<CollaborationEntry> = graph
        .neighbors(target)
        .into_iter()
        .filter_map(|neighbor| {
            let edge = graph.edge(target, neighbor)?;
            Some(CollaborationEntry {
                collaborator: neighbor.clone(),
                frequency: edge.weight(),
                works: edge.works.iter().cloned().collect(),
                work_count: edge.works.len(),
                work_types: edge.work_types.iter().cloned().collect(),
                years: edge.years.iter().copied().collect(),
            })
        })
        .collect();

    entries.sort_by(|a, b| {
        b.frequency
            .cmp(&a.frequency)
            .then_with(|| a.collaborator.cmp(&b.collaborator))
    });
    entries.truncate(top_n);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::RoleFilter;
    use crate::core::PersonId;
    use crate::network::graph::{Edge, EdgeKey, Node, Origin};
    use im::{OrdMap, OrdSet};

    fn graph(weights: &[(&str, u32)]) -> CollaborationGraph {
        let origin = Origin::target(PersonId::from("t"), RoleFilter::All);
        let target = NodeKey::from("T");
        let mut graph = CollaborationGraph::new();
        graph.upsert_node(Node::collaborator(
            target.clone(),
            PersonId::from("t"),
            origin.clone(),
            0,
            OrdSet::new(),
        ));
        for (name, weight) in weights {
            graph.upsert_node(Node::collaborator(
                NodeKey::from(*name),
                PersonId::new(*name),
                origin.clone(),
                *weight,
                OrdSet::new(),
            ));
            graph.upsert_edge(Edge {
                key: EdgeKey::new(target.clone(), NodeKey::from(*name)),
                contributions: OrdMap::unit(origin.clone(), *weight),
                works: (0..*weight).map(|i| format!("{}-{}", name, i)).collect(),
                work_types: OrdSet::new(),
                genres: OrdSet::new(),
                years: OrdSet::unit(2000),
                roles: OrdSet::new(),
            });
        }
        graph
    }

    #[test]
    fn test_sorted_by_frequency_then_name() {
        let graph = graph(&[("B", 1), ("C", 3), ("A", 1), ("D", 2)]);
        let ranked = rank_collaborations(&graph, &NodeKey::from("T"), 10);
        let names: Vec<&str> = ranked.iter().map(|e| e.collaborator.as_str()).collect();
        assert_eq!(names, vec!["C", "D", "A", "B"]);
        assert_eq!(ranked[0].work_count, 3);
        assert_eq!(ranked[0].years, vec![2000]);
    }

    #[test]
    fn test_truncates_to_top_n() {
        let graph = graph(&[("A", 1), ("B", 2), ("C", 3)]);
        assert_eq!(rank_collaborations(&graph, &NodeKey::from("T"), 2).len(), 2);
        assert!(rank_collaborations(&graph, &NodeKey::from("T"), 0).is_empty());
    }

    #[test]
    fn test_unknown_target_yields_empty_list() {
        let graph = graph(&[("A", 1)]);
        assert!(rank_collaborations(&graph, &NodeKey::from("Z"), 5).is_empty());
    }
}

//! Network of everyone credited on a single work.

use super::assembler::node_key_for;
use super::graph::{CollaborationGraph, Edge, EdgeKey, Node, NodeKey, Origin};
use crate::core::{Error, PersonId, Result, Role, WorkId};
use crate::data::Dataset;
use im::{OrdMap, OrdSet};
use std::collections::BTreeMap;
use tracing::debug;

/// Complete graph over the distinct people credited on `work_id`.
///
/// Every edge has weight 1 and carries the work's metadata. Node roles are
/// the roles each person held on the work, and the node's credit order is
/// their best billing position on it.
pub fn build_work_network(dataset: &Dataset, work_id: &WorkId) -> Result<CollaborationGraph> {
    let rows = dataset.work_credits(work_id);
    let metadata = match dataset.work_metadata(work_id, &rows) {
        Some(metadata) if !rows.is_empty() => metadata,
        _ => {
            return Err(Error::WorkNotFound {
                work_id: work_id.clone(),
            })
        }
    };
    let origin = Origin::Work(work_id.clone());

    let mut people: BTreeMap<&PersonId, (OrdSet<Role>, Option<u32>)> = BTreeMap::new();
    for row in &rows {
        let (roles, order) = people.entry(&row.person_id).or_default();
        roles.insert(row.role.clone());
        *order = match (*order, row.credit_order) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
    }

    let mut graph = CollaborationGraph::new();
    let mut members: Vec<(NodeKey, OrdSet<Role>)> = Vec::with_capacity(people.len());
    for (id, (roles, credit_order)) in people {
        let key = node_key_for(dataset, id);
        let mut node =
            Node::collaborator(key.clone(), id.clone(), origin.clone(), 1, roles.clone());
        node.credit_order = credit_order;
        graph.upsert_node(node);
        members.push((key, roles));
    }

    for (i, (a, a_roles)) in members.iter().enumerate() {
        for (b, b_roles) in &members[i + 1..] {
            graph.upsert_edge(Edge {
                key: EdgeKey::new(a.clone(), b.clone()),
                contributions: OrdMap::unit(origin.clone(), 1),
                works: OrdSet::unit(metadata.title.clone()),
                work_types: OrdSet::unit(metadata.work_type.clone()),
                genres: metadata.genres.iter().cloned().collect(),
                years: metadata.year.into_iter().collect(),
                roles: a_roles.clone().union(b_roles.clone()),
            });
        }
    }

    debug!(
        work = %work_id,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "Work network built"
    );

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CreditRecord, Person};

    fn credit(work: &str, person: &str, role: &str, order: Option<u32>) -> CreditRecord {
        CreditRecord {
            work_id: WorkId::from(work),
            person_id: PersonId::from(person),
            role: Role::from(role),
            credit_order: order,
            work_title: "Film".into(),
            work_type: "film".into(),
            work_year: Some(2020),
            work_genres: vec!["Drama".into()],
        }
    }

    fn dataset() -> Dataset {
        Dataset::new(
            vec![
                Person::new("1", "A", ""),
                Person::new("2", "B", ""),
                Person::new("3", "C", ""),
            ],
            vec![
                credit("w1", "1", "actor", Some(3)),
                credit("w1", "1", "director", Some(1)),
                credit("w1", "2", "actor", Some(2)),
                credit("w1", "3", "actor", None),
            ],
            Vec::new(),
        )
    }

    #[test]
    fn test_complete_graph_over_distinct_people() {
        let graph = build_work_network(&dataset(), &WorkId::from("w1")).unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        let edge = graph.edge(&NodeKey::from("A"), &NodeKey::from("C")).unwrap();
        assert_eq!(edge.weight(), 1);
        assert!(edge.years.contains(&2020));
        let a = graph.node(&NodeKey::from("A")).unwrap();
        assert_eq!(a.roles.len(), 2);
    }

    #[test]
    fn test_nodes_carry_best_credit_order() {
        let graph = build_work_network(&dataset(), &WorkId::from("w1")).unwrap();
        let order = |name: &str| graph.node(&NodeKey::from(name)).and_then(|n| n.credit_order);
        assert_eq!(order("A"), Some(1));
        assert_eq!(order("B"), Some(2));
        assert_eq!(order("C"), None);
    }

    #[test]
    fn test_unknown_work_is_an_error() {
        assert!(matches!(
            build_work_network(&dataset(), &WorkId::from("nope")),
            Err(Error::WorkNotFound { .. })
        ));
    }
}

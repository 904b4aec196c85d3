//! Turn an aggregation result into a single-target graph.

use super::graph::{
    CollaborationGraph, Edge, EdgeKey, Node, NodeKey, Origin, TargetCoverage, TargetSummary,
};
use crate::aggregation::{AggregateRecord, CollaborationMap};
use crate::core::{Person, PersonId};
use crate::data::Dataset;
use im::{OrdMap, OrdSet};
use std::collections::BTreeMap;
use tracing::{info, warn};

/// Build the graph of `target` from its collaboration map.
///
/// One target node, one node per collaborator key and one edge per
/// collaborator. An empty map yields the isolated target node.
///
/// Collaborators whose display names collide are folded into one node and
/// edge (weights summed, sets unioned) and reported as a collision. A
/// collaborator that shares the target's display name is reported and left
/// out, since its edge would be a self-loop.
pub fn assemble(
    dataset: &Dataset,
    target: &Person,
    collaborations: &CollaborationMap,
) -> CollaborationGraph {
    let target_key = NodeKey::new(target.display_name.clone());
    let origin = Origin::target(target.id.clone(), collaborations.filter.clone());

    let mut graph = CollaborationGraph::new();
    graph.add_target(target_key.clone());
    graph.upsert_node(Node::target(
        target_key.clone(),
        TargetSummary::new(
            target.notable_works.clone(),
            TargetCoverage {
                id: target.id.clone(),
                role_filter: collaborations.filter.clone(),
                works_count: collaborations.target_works.len(),
                credit_rows: collaborations.target_rows,
            },
        ),
        collaborations.target_roles.iter().cloned().collect(),
    ));

    for (key, members) in group_by_key(dataset, collaborations) {
        let ids: OrdSet<PersonId> = members.iter().map(|(id, _)| (*id).clone()).collect();

        if key == target_key {
            warn!(
                key = %key,
                target = %target.id,
                "Collaborator shares the target's display name; edge omitted"
            );
            graph.record_collision(key, ids.update(target.id.clone()));
            continue;
        }
        if members.len() > 1 {
            warn!(key = %key, identities = members.len(), "Collaborators share a display name");
            graph.record_collision(key.clone(), ids);
        }

        let record = fold_records(members.iter().map(|(_, record)| *record));
        let id = members[0].0.clone();

        graph.upsert_node(Node::collaborator(
            key.clone(),
            id,
            origin.clone(),
            record.count,
            record.roles.iter().cloned().collect(),
        ));
        graph.upsert_edge(Edge {
            key: EdgeKey::new(target_key.clone(), key),
            contributions: OrdMap::unit(origin.clone(), record.count),
            works: record.works.into_iter().collect(),
            work_types: record.work_types.into_iter().collect(),
            genres: record.genres.into_iter().collect(),
            years: record.years.into_iter().collect(),
            roles: record.roles.into_iter().collect(),
        });
    }

    info!(
        target = %target.id,
        name = %target_key,
        filter = %collaborations.filter,
        works = collaborations.target_works.len(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "Collaboration network assembled"
    );

    graph
}

/// Display name for a person id; ids missing from the people table key by id.
pub(crate) fn node_key_for(dataset: &Dataset, id: &PersonId) -> NodeKey {
    match dataset.person(id) {
        Some(person) => NodeKey::new(person.display_name.clone()),
        None => {
            warn!(person = %id, "Credited person missing from people table, keying by id");
            NodeKey::new(id.as_str())
        }
    }
}

fn group_by_key<'m>(
    dataset: &Dataset,
    collaborations: &'m CollaborationMap,
) -> BTreeMap<NodeKey, Vec<(&'m PersonId, &'m AggregateRecord)>> {
    let mut groups: BTreeMap<NodeKey, Vec<(&PersonId, &AggregateRecord)>> = BTreeMap::new();
    for (id, record) in &collaborations.records {
        groups
            .entry(node_key_for(dataset, id))
            .or_default()
            .push((id, record));
    }
    groups
}

fn fold_records<'r>(records: impl Iterator<Item = &'r AggregateRecord>) -> AggregateRecord {
    records.fold(AggregateRecord::default(), |mut acc, record| {
        acc.count += record.count;
        acc.works.extend(record.works.iter().cloned());
        acc.work_types.extend(record.work_types.iter().cloned());
        acc.genres.extend(record.genres.iter().cloned());
        acc.years.extend(record.years.iter().copied());
        acc.roles.extend(record.roles.iter().cloned());
        acc
    })
}

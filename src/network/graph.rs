//! Typed graph values produced by assembly and merging.
//!
//! Nodes are keyed by display name. Weights are stored per [`Origin`] (the
//! target and role filter, or the work, that produced them) and reported as
//! the sum over origins; merging unions origins, which keeps merge idempotent
//! while still summing contributions from distinct builds.

use super::serde_seq;
use crate::aggregation::RoleFilter;
use crate::core::{PersonId, Role, WorkId};
use im::{OrdMap, OrdSet};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Node key: a display name.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeKey(String);

impl NodeKey {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeKey {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// What produced a weight contribution: one target built under one role
/// filter, or one work.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Origin {
    Target { id: PersonId, filter: RoleFilter },
    Work(WorkId),
}

impl Origin {
    pub fn target(id: PersonId, filter: RoleFilter) -> Self {
        Self::Target { id, filter }
    }
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Target,
    Collaborator,
}

/// What one target build qualified under its role filter.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TargetCoverage {
    pub id: PersonId,
    pub role_filter: RoleFilter,
    /// Distinct qualifying works
    pub works_count: usize,
    /// Qualifying credit rows, duplicates included
    pub credit_rows: usize,
}

/// Attributes a node carries when it was built as a target.
///
/// `coverage` holds one entry per (id, filter) build folded into the node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSummary {
    pub id: PersonId,
    pub notable_works: String,
    pub coverage: OrdSet<TargetCoverage>,
}

impl TargetSummary {
    pub fn new(notable_works: impl Into<String>, coverage: TargetCoverage) -> Self {
        Self {
            id: coverage.id.clone(),
            notable_works: notable_works.into(),
            coverage: OrdSet::unit(coverage),
        }
    }

    /// Coverage of this summary's own id under `filter`.
    pub fn coverage_for(&self, filter: &RoleFilter) -> Option<&TargetCoverage> {
        self.coverage
            .iter()
            .find(|entry| entry.id == self.id && entry.role_filter == *filter)
    }

    /// Smallest id keeps the identity fields; coverage unions.
    fn absorb(&mut self, other: TargetSummary) {
        if other.id < self.id {
            self.id = other.id;
            self.notable_works = other.notable_works;
        }
        self.coverage = self.coverage.clone().union(other.coverage);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub key: NodeKey,
    pub id: PersonId,
    pub kind: NodeKind,
    pub target: Option<TargetSummary>,
    #[serde(with = "serde_seq::pairs")]
    pub collaborations: OrdMap<Origin, u32>,
    pub roles: OrdSet<Role>,
    /// Best billing position held on the work, set on work networks only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_order: Option<u32>,
}

impl Node {
    pub fn target(key: NodeKey, summary: TargetSummary, roles: OrdSet<Role>) -> Self {
        Self {
            key,
            id: summary.id.clone(),
            kind: NodeKind::Target,
            target: Some(summary),
            collaborations: OrdMap::new(),
            roles,
            credit_order: None,
        }
    }

    pub fn collaborator(
        key: NodeKey,
        id: PersonId,
        origin: Origin,
        count: u32,
        roles: OrdSet<Role>,
    ) -> Self {
        Self {
            key,
            id,
            kind: NodeKind::Collaborator,
            target: None,
            collaborations: OrdMap::unit(origin, count),
            roles,
            credit_order: None,
        }
    }

    /// Total collaboration count across origins.
    pub fn collaboration_count(&self) -> u32 {
        self.collaborations.values().sum()
    }

    pub fn is_target(&self) -> bool {
        self.kind == NodeKind::Target
    }

    /// Fold another node with the same key into this one.
    ///
    /// Order-independent: target kind wins, ids and billing positions resolve
    /// to the smallest candidate, and coverage, origins and roles union.
    pub(crate) fn absorb(&mut self, other: Node) {
        if other.kind == NodeKind::Target {
            self.kind = NodeKind::Target;
        }
        if other.id < self.id {
            self.id = other.id;
        }
        self.target = match (self.target.take(), other.target) {
            (Some(mut a), Some(b)) => {
                a.absorb(b);
                Some(a)
            }
            (a, b) => a.or(b),
        };
        self.collaborations = union_max(&self.collaborations, other.collaborations);
        self.roles = self.roles.clone().union(other.roles);
        self.credit_order = match (self.credit_order, other.credit_order) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
    }
}

/// Unordered pair of node keys, stored smallest first.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeKey {
    first: NodeKey,
    second: NodeKey,
}

impl EdgeKey {
    pub fn new(a: NodeKey, b: NodeKey) -> Self {
        if a <= b {
            Self { first: a, second: b }
        } else {
            Self { first: b, second: a }
        }
    }

    pub fn first(&self) -> &NodeKey {
        &self.first
    }

    pub fn second(&self) -> &NodeKey {
        &self.second
    }

    pub fn contains(&self, key: &NodeKey) -> bool {
        &self.first == key || &self.second == key
    }

    /// The endpoint opposite `key`, if `key` is an endpoint.
    pub fn other(&self, key: &NodeKey) -> Option<&NodeKey> {
        if &self.first == key {
            Some(&self.second)
        } else if &self.second == key {
            Some(&self.first)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub key: EdgeKey,
    #[serde(with = "serde_seq::pairs")]
    pub contributions: OrdMap<Origin, u32>,
    pub works: OrdSet<String>,
    pub work_types: OrdSet<String>,
    pub genres: OrdSet<String>,
    pub years: OrdSet<i32>,
    /// Roles the collaborator held across the shared works
    pub roles: OrdSet<Role>,
}

impl Edge {
    /// Sum of contributions; positive for every edge in an assembled graph.
    pub fn weight(&self) -> u32 {
        self.contributions.values().sum()
    }

    pub(crate) fn absorb(&mut self, other: Edge) {
        self.contributions = union_max(&self.contributions, other.contributions);
        self.works = self.works.clone().union(other.works);
        self.work_types = self.work_types.clone().union(other.work_types);
        self.genres = self.genres.clone().union(other.genres);
        self.years = self.years.clone().union(other.years);
        self.roles = self.roles.clone().union(other.roles);
    }
}

/// Two distinct identities sharing one node key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameCollision {
    pub key: NodeKey,
    pub ids: Vec<PersonId>,
}

/// An undirected collaboration graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollaborationGraph {
    targets: OrdSet<NodeKey>,
    nodes: OrdMap<NodeKey, Node>,
    #[serde(with = "serde_seq::values")]
    edges: OrdMap<EdgeKey, Edge>,
    #[serde(skip)]
    adjacency: OrdMap<NodeKey, OrdSet<NodeKey>>,
    collisions: OrdMap<NodeKey, OrdSet<PersonId>>,
}

impl CollaborationGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, key: &NodeKey) -> Option<&Node> {
        self.nodes.get(key)
    }

    pub fn contains_node(&self, key: &NodeKey) -> bool {
        self.nodes.contains_key(key)
    }

    /// The edge between `a` and `b`, in either order.
    pub fn edge(&self, a: &NodeKey, b: &NodeKey) -> Option<&Edge> {
        self.edges.get(&EdgeKey::new(a.clone(), b.clone()))
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    /// Keys of the nodes this graph was built around.
    pub fn targets(&self) -> &OrdSet<NodeKey> {
        &self.targets
    }

    pub fn neighbors(&self, key: &NodeKey) -> Vec<&NodeKey> {
        self.adjacency
            .get(key)
            .map(|set| set.iter().collect())
            .unwrap_or_default()
    }

    pub fn degree(&self, key: &NodeKey) -> usize {
        self.adjacency.get(key).map_or(0, |set| set.len())
    }

    pub fn collisions(&self) -> Vec<NameCollision> {
        self.collisions
            .iter()
            .map(|(key, ids)| NameCollision {
                key: key.clone(),
                ids: ids.iter().cloned().collect(),
            })
            .collect()
    }

    pub fn has_collisions(&self) -> bool {
        !self.collisions.is_empty()
    }

    pub(crate) fn add_target(&mut self, key: NodeKey) {
        if let Some(node) = self.nodes.get_mut(&key) {
            node.kind = NodeKind::Target;
        }
        self.targets.insert(key);
    }

    /// Insert a node, folding it into an existing node with the same key.
    pub(crate) fn upsert_node(&mut self, mut node: Node) {
        if self.targets.contains(&node.key) {
            node.kind = NodeKind::Target;
        }
        let colliding = self
            .nodes
            .get(&node.key)
            .map(|existing| existing.id.clone())
            .filter(|existing_id| *existing_id != node.id);
        if let Some(existing_id) = colliding {
            let ids = vec![existing_id, node.id.clone()].into_iter().collect();
            self.record_collision(node.key.clone(), ids);
        }
        match self.nodes.get_mut(&node.key) {
            Some(existing) => existing.absorb(node),
            None => {
                self.nodes.insert(node.key.clone(), node);
            }
        }
    }

    /// Insert an edge, folding it into an existing edge between the same pair.
    ///
    /// Both endpoints must already be nodes; self-loops are ignored.
    pub(crate) fn upsert_edge(&mut self, edge: Edge) {
        let (a, b) = (edge.key.first().clone(), edge.key.second().clone());
        if a == b || !self.nodes.contains_key(&a) || !self.nodes.contains_key(&b) {
            return;
        }
        match self.edges.get_mut(&edge.key) {
            Some(existing) => existing.absorb(edge),
            None => {
                self.edges.insert(edge.key.clone(), edge);
            }
        }
        self.link(a, b);
    }

    pub(crate) fn record_collision(&mut self, key: NodeKey, ids: OrdSet<PersonId>) {
        let merged = match self.collisions.get(&key) {
            Some(existing) => existing.clone().union(ids),
            None => ids,
        };
        self.collisions.insert(key, merged);
    }

    /// Rebuild the adjacency index after deserialization.
    pub fn reindex(&mut self) {
        self.adjacency = OrdMap::new();
        let pairs: Vec<(NodeKey, NodeKey)> = self
            .edges
            .keys()
            .map(|key| (key.first().clone(), key.second().clone()))
            .collect();
        for (a, b) in pairs {
            self.link(a, b);
        }
    }

    fn link(&mut self, a: NodeKey, b: NodeKey) {
        let mut from_a = self.adjacency.get(&a).cloned().unwrap_or_default();
        from_a.insert(b.clone());
        let mut from_b = self.adjacency.get(&b).cloned().unwrap_or_default();
        from_b.insert(a.clone());
        self.adjacency.insert(a, from_a);
        self.adjacency.insert(b, from_b);
    }
}

fn union_max<K: Ord + Clone>(left: &OrdMap<K, u32>, right: OrdMap<K, u32>) -> OrdMap<K, u32> {
    left.clone().union_with(right, |a, b| a.max(b))
}

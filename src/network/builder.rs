//! Entry points that run the whole pipeline over a [`Dataset`].
//!
//! By-name operations refuse ambiguous names with `AmbiguousIdentity`; by-id
//! operations only ever fail with `IdentityNotFound`.

use super::assembler::assemble;
use super::graph::{CollaborationGraph, NodeKey};
use super::merger::MultiTargetNetwork;
use super::ranking::{rank_collaborations, CollaborationEntry};
use super::work::build_work_network;
use crate::aggregation::{aggregate, RoleFilter};
use crate::config::CollabnetConfig;
use crate::core::{Person, PersonId, Result, WorkId};
use crate::data::Dataset;
use crate::identity::IdentityResolver;
use crate::stats::{compute_stats, NetworkStats};
use std::fmt;
use tracing::info_span;

/// A target requested by display name or by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetRef {
    Name(String),
    Id(PersonId),
}

impl fmt::Display for TargetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Id(id) => write!(f, "#{}", id),
        }
    }
}

impl From<&str> for TargetRef {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for TargetRef {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<PersonId> for TargetRef {
    fn from(id: PersonId) -> Self {
        Self::Id(id)
    }
}

/// Builds graphs, ranked lists and statistics from one dataset.
#[derive(Debug, Clone)]
pub struct NetworkBuilder<'a> {
    dataset: &'a Dataset,
    default_filter: RoleFilter,
    top_n: usize,
}

impl<'a> NetworkBuilder<'a> {
    pub const DEFAULT_TOP_N: usize = 10;

    pub fn new(dataset: &'a Dataset) -> Self {
        Self {
            dataset,
            default_filter: RoleFilter::All,
            top_n: Self::DEFAULT_TOP_N,
        }
    }

    /// Builder using the configured default role filter and list length.
    pub fn from_config(dataset: &'a Dataset, config: &CollabnetConfig) -> Self {
        Self {
            dataset,
            default_filter: config.default_role_filter(),
            top_n: config.top_n(),
        }
    }

    /// Role filter applied by by-name and multi-target builds.
    pub fn with_role_filter(mut self, filter: RoleFilter) -> Self {
        self.default_filter = filter;
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    pub fn resolver(&self) -> IdentityResolver<'a> {
        IdentityResolver::new(self.dataset)
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Network of the single person named `name`.
    pub fn build_by_name(&self, name: &str) -> Result<CollaborationGraph> {
        let person = self.resolver().resolve_unique(name)?;
        self.build_for(person, &self.default_filter)
    }

    /// Network of the person with `id`, restricted to `filter`.
    pub fn build_by_id(&self, id: &PersonId, filter: &RoleFilter) -> Result<CollaborationGraph> {
        let person = self.resolver().resolve_by_id(id)?;
        self.build_for(person, filter)
    }

    pub fn build(&self, target: &TargetRef) -> Result<CollaborationGraph> {
        match target {
            TargetRef::Name(name) => self.build_by_name(name),
            TargetRef::Id(id) => self.build_by_id(id, &self.default_filter),
        }
    }

    /// Merged network of several targets. Targets that can't be resolved are
    /// skipped and reported; the rest are still merged.
    pub fn build_multi<I, T>(&self, targets: I) -> MultiTargetNetwork
    where
        I: IntoIterator<Item = T>,
        T: Into<TargetRef>,
    {
        let _span = info_span!("build_multi").entered();
        let outcomes: Vec<(String, Result<CollaborationGraph>)> = targets
            .into_iter()
            .map(|target| {
                let target: TargetRef = target.into();
                (target.to_string(), self.build(&target))
            })
            .collect();
        MultiTargetNetwork::from_outcomes(outcomes)
    }

    /// Top collaborators of the person named `name`.
    pub fn collaboration_frequency(
        &self,
        name: &str,
        top_n: Option<usize>,
    ) -> Result<Vec<CollaborationEntry>> {
        let person = self.resolver().resolve_unique(name)?;
        let graph = self.build_for(person, &self.default_filter)?;
        Ok(self.rank(&graph, person, top_n))
    }

    /// Top collaborators of the person with `id`.
    pub fn collaboration_frequency_by_id(
        &self,
        id: &PersonId,
        top_n: Option<usize>,
    ) -> Result<Vec<CollaborationEntry>> {
        let person = self.resolver().resolve_by_id(id)?;
        let graph = self.build_for(person, &self.default_filter)?;
        Ok(self.rank(&graph, person, top_n))
    }

    pub fn work_network(&self, work_id: &WorkId) -> Result<CollaborationGraph> {
        build_work_network(self.dataset, work_id)
    }

    pub fn stats(&self, graph: &CollaborationGraph) -> NetworkStats {
        compute_stats(graph)
    }

    fn build_for(&self, person: &Person, filter: &RoleFilter) -> Result<CollaborationGraph> {
        let _span = info_span!("build_network", target = %person.id).entered();
        let collaborations = aggregate(self.dataset, &person.id, filter)?;
        Ok(assemble(self.dataset, person, &collaborations))
    }

    fn rank(
        &self,
        graph: &CollaborationGraph,
        person: &Person,
        top_n: Option<usize>,
    ) -> Vec<CollaborationEntry> {
        let key = NodeKey::new(person.display_name.clone());
        rank_collaborations(graph, &key, top_n.unwrap_or(self.top_n))
    }
}

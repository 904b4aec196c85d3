//! Per-target collaboration aggregation.
//!
//! For one person, every work they are credited on is scanned and each
//! co-credited person accumulates one [`AggregateRecord`]. The weight unit is
//! a distinct shared work: extra role rows on the same work add roles, never
//! count.

mod role_filter;

pub use role_filter::RoleFilter;

use crate::core::{CreditRecord, PersonId, Result, Role, WorkId, WorkMetadata};
use crate::data::Dataset;
use crate::identity::IdentityResolver;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, debug_span};

/// Everything one collaborator shares with the target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateRecord {
    /// Distinct shared works
    pub count: u32,
    pub works: BTreeSet<String>,
    pub work_types: BTreeSet<String>,
    pub genres: BTreeSet<String>,
    pub years: BTreeSet<i32>,
    /// Roles the collaborator held across the shared works
    pub roles: BTreeSet<Role>,
}

impl AggregateRecord {
    fn record_work(&mut self, metadata: &WorkMetadata, roles: &BTreeSet<Role>) {
        self.count += 1;
        self.works.insert(metadata.title.clone());
        self.work_types.insert(metadata.work_type.clone());
        self.genres.extend(metadata.genres.iter().cloned());
        if let Some(year) = metadata.year {
            self.years.insert(year);
        }
        self.roles.extend(roles.iter().cloned());
    }
}

/// The result of one aggregation call. Owned by the caller; nothing is
/// retained between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollaborationMap {
    pub target: PersonId,
    pub filter: RoleFilter,
    /// Works the target qualifies on under the filter
    pub target_works: BTreeSet<WorkId>,
    /// Qualifying credit rows of the target, duplicates included
    pub target_rows: usize,
    /// Roles the target held on qualifying works
    pub target_roles: BTreeSet<Role>,
    pub records: BTreeMap<PersonId, AggregateRecord>,
}

impl CollaborationMap {
    fn empty(target: PersonId, filter: RoleFilter) -> Self {
        Self {
            target,
            filter,
            target_works: BTreeSet::new(),
            target_rows: 0,
            target_roles: BTreeSet::new(),
            records: BTreeMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn get(&self, collaborator: &PersonId) -> Option<&AggregateRecord> {
        self.records.get(collaborator)
    }
}

/// Aggregate collaborations of `person_id` under `filter`.
///
/// The filter restricts the whole credit table first and the target's own
/// works are re-selected from what remains, so a work where the target only
/// held excluded roles drops out entirely. An empty selection is a valid
/// outcome and yields an empty map.
pub fn aggregate(
    dataset: &Dataset,
    person_id: &PersonId,
    filter: &RoleFilter,
) -> Result<CollaborationMap> {
    IdentityResolver::new(dataset).resolve_by_id(person_id)?;

    let _span = debug_span!("aggregate", target = %person_id, filter = %filter).entered();

    let all_rows = dataset.person_credits(person_id);
    let target_rows: Vec<&CreditRecord> = all_rows
        .iter()
        .copied()
        .filter(|credit| filter.admits(&credit.role))
        .collect();

    if filter.is_restricted() {
        debug!(
            before = all_rows.len(),
            after = target_rows.len(),
            "Role filter applied to target rows"
        );
    }

    let mut map = CollaborationMap::empty(person_id.clone(), filter.clone());
    if target_rows.is_empty() {
        return Ok(map);
    }

    map.target_rows = target_rows.len();
    map.target_works = target_rows.iter().map(|c| c.work_id.clone()).collect();
    map.target_roles = target_rows.iter().map(|c| c.role.clone()).collect();

    for work_id in &map.target_works {
        let rows: Vec<&CreditRecord> = dataset
            .work_credits(work_id)
            .into_iter()
            .filter(|credit| filter.admits(&credit.role))
            .collect();

        let Some(metadata) = dataset.work_metadata(work_id, &rows) else {
            continue;
        };

        for (collaborator, roles) in roles_by_person(&rows) {
            if collaborator == person_id {
                continue;
            }
            map.records
                .entry(collaborator.clone())
                .or_default()
                .record_work(&metadata, &roles);
        }
    }

    debug!(
        works = map.target_works.len(),
        collaborators = map.records.len(),
        "Aggregation complete"
    );

    Ok(map)
}

fn roles_by_person<'r>(rows: &[&'r CreditRecord]) -> BTreeMap<&'r PersonId, BTreeSet<Role>> {
    let mut grouped: BTreeMap<&PersonId, BTreeSet<Role>> = BTreeMap::new();
    for row in rows {
        grouped
            .entry(&row.person_id)
            .or_default()
            .insert(row.role.clone());
    }
    grouped
}

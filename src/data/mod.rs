//! Loaded tables and the lookup indices built over them.
//!
//! A [`Dataset`] is built once per session from already-parsed rows and is
//! read-only afterwards. Every graph and statistic in the crate is a view
//! derived from it. The works table is optional: when a work has a row there,
//! its metadata wins over the copies denormalized onto credit rows.

mod summary;

pub use summary::{GenreStatistics, RoleStatistics};

use crate::aggregation::RoleFilter;
use crate::core::{CreditRecord, Person, PersonId, Work, WorkId, WorkMetadata};
use std::collections::HashMap;
use tracing::{debug, warn};

/// The people, credits and works tables plus indices.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    people: Vec<Person>,
    credits: Vec<CreditRecord>,
    works: Vec<Work>,
    person_index: HashMap<PersonId, usize>,
    name_index: HashMap<String, Vec<usize>>,
    work_index: HashMap<WorkId, usize>,
    credits_by_person: HashMap<PersonId, Vec<usize>>,
    credits_by_work: HashMap<WorkId, Vec<usize>>,
}

impl Dataset {
    /// Build a dataset from parsed tables.
    ///
    /// People and works are keyed by id: when an id repeats, the first row is
    /// kept. Credit rows are all kept, duplicates included; aggregation counts
    /// distinct works, so repeated rows never inflate weights.
    pub fn new(people: Vec<Person>, credits: Vec<CreditRecord>, works: Vec<Work>) -> Self {
        let people = dedup_by_key(people, |p| p.id.clone(), "people");
        let works = dedup_by_key(works, |w| w.id.clone(), "works");

        let person_index: HashMap<PersonId, usize> = people
            .iter()
            .enumerate()
            .map(|(idx, p)| (p.id.clone(), idx))
            .collect();

        let mut name_index: HashMap<String, Vec<usize>> = HashMap::new();
        for (idx, person) in people.iter().enumerate() {
            name_index
                .entry(person.display_name.clone())
                .or_default()
                .push(idx);
        }

        let work_index = works
            .iter()
            .enumerate()
            .map(|(idx, w)| (w.id.clone(), idx))
            .collect();

        let mut credits_by_person: HashMap<PersonId, Vec<usize>> = HashMap::new();
        let mut credits_by_work: HashMap<WorkId, Vec<usize>> = HashMap::new();
        for (idx, credit) in credits.iter().enumerate() {
            credits_by_person
                .entry(credit.person_id.clone())
                .or_default()
                .push(idx);
            credits_by_work
                .entry(credit.work_id.clone())
                .or_default()
                .push(idx);
        }

        let unknown = credits_by_person
            .keys()
            .filter(|id| !person_index.contains_key(*id))
            .count();
        if unknown > 0 {
            warn!(
                unknown_people = unknown,
                "Credit rows reference people missing from the people table"
            );
        }

        debug!(
            people = people.len(),
            credits = credits.len(),
            works = works.len(),
            "Dataset loaded"
        );

        Self {
            people,
            credits,
            works,
            person_index,
            name_index,
            work_index,
            credits_by_person,
            credits_by_work,
        }
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn credits(&self) -> &[CreditRecord] {
        &self.credits
    }

    pub fn works(&self) -> &[Work] {
        &self.works
    }

    pub fn person(&self, id: &PersonId) -> Option<&Person> {
        self.person_index.get(id).map(|&idx| &self.people[idx])
    }

    pub fn work(&self, id: &WorkId) -> Option<&Work> {
        self.work_index.get(id).map(|&idx| &self.works[idx])
    }

    /// Metadata for one work: the works-table row when present, otherwise the
    /// first of `rows`. Later rows that disagree with the first are logged.
    pub fn work_metadata(&self, id: &WorkId, rows: &[&CreditRecord]) -> Option<WorkMetadata> {
        if let Some(work) = self.work(id) {
            return Some(work.metadata());
        }

        let first = rows.first()?.work_metadata();
        let conflicting = rows
            .iter()
            .skip(1)
            .filter(|row| row.work_metadata() != first)
            .count();
        if conflicting > 0 {
            warn!(
                work = %id,
                conflicting_rows = conflicting,
                "Credit rows disagree on work metadata, using the first row"
            );
        }
        Some(first)
    }

    /// People whose display name equals `name` exactly, in table order.
    pub fn people_named(&self, name: &str) -> Vec<&Person> {
        self.name_index
            .get(name)
            .map(|indices| indices.iter().map(|&idx| &self.people[idx]).collect())
            .unwrap_or_default()
    }

    /// Every credit row of one person, in table order.
    pub fn person_credits(&self, id: &PersonId) -> Vec<&CreditRecord> {
        self.rows(self.credits_by_person.get(id))
    }

    /// Every credit row of one work, in table order.
    pub fn work_credits(&self, id: &WorkId) -> Vec<&CreditRecord> {
        self.rows(self.credits_by_work.get(id))
    }

    /// All credit rows of every work the person holds a qualifying role on,
    /// restricted to rows whose role passes the filter.
    pub fn collaboration_rows(&self, id: &PersonId, filter: &RoleFilter) -> Vec<&CreditRecord> {
        let mut seen = std::collections::HashSet::new();
        let work_ids: Vec<&WorkId> = self
            .person_credits(id)
            .into_iter()
            .filter(|credit| filter.admits(&credit.role))
            .map(|credit| &credit.work_id)
            .filter(|work_id| seen.insert(*work_id))
            .collect();

        let rows: Vec<&CreditRecord> = work_ids
            .into_iter()
            .flat_map(|work_id| self.work_credits(work_id))
            .filter(|credit| filter.admits(&credit.role))
            .collect();

        debug!(person = %id, rows = rows.len(), "Selected collaboration rows");
        rows
    }

    fn rows(&self, indices: Option<&Vec<usize>>) -> Vec<&CreditRecord> {
        indices
            .map(|indices| indices.iter().map(|&idx| &self.credits[idx]).collect())
            .unwrap_or_default()
    }
}

fn dedup_by_key<T, K, F>(rows: Vec<T>, key: F, table: &str) -> Vec<T>
where
    K: std::hash::Hash + Eq + std::fmt::Display,
    F: Fn(&T) -> K,
{
    let mut seen = std::collections::HashSet::new();
    let mut kept = Vec::with_capacity(rows.len());
    for row in rows {
        let k = key(&row);
        if seen.contains(&k) {
            warn!(table, id = %k, "Duplicate id in table, keeping the first row");
            continue;
        }
        seen.insert(k);
        kept.push(row);
    }
    kept
}

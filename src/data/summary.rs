//! Table-wide summaries over the credit rows.

use super::Dataset;
use crate::core::{PersonId, Role, WorkId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Per-role counts across the credit table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleStatistics {
    pub role: Role,
    pub people: usize,
    pub works: usize,
    pub records: usize,
}

/// How many credit rows mention a genre.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreStatistics {
    pub genre: String,
    pub occurrences: usize,
}

impl Dataset {
    /// Distinct roles present in the credit table, sorted.
    pub fn available_roles(&self) -> Vec<Role> {
        self.credits()
            .iter()
            .map(|credit| credit.role.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Per-role distinct people, distinct works and row counts, most used role first.
    pub fn role_statistics(&self) -> Vec<RoleStatistics> {
        #[derive(Default)]
        struct Tally<'a> {
            people: HashSet<&'a PersonId>,
            works: HashSet<&'a WorkId>,
            records: usize,
        }

        let mut tallies: BTreeMap<&Role, Tally<'_>> = BTreeMap::new();
        for credit in self.credits() {
            let tally = tallies.entry(&credit.role).or_default();
            tally.people.insert(&credit.person_id);
            tally.works.insert(&credit.work_id);
            tally.records += 1;
        }

        let mut stats: Vec<RoleStatistics> = tallies
            .into_iter()
            .map(|(role, tally)| RoleStatistics {
                role: role.clone(),
                people: tally.people.len(),
                works: tally.works.len(),
                records: tally.records,
            })
            .collect();

        // BTreeMap order already sorts by role; a stable sort keeps that as the tie-break.
        stats.sort_by(|a, b| b.records.cmp(&a.records));
        stats
    }

    /// Genre occurrences across credit rows, most frequent first.
    pub fn genre_statistics(&self) -> Vec<GenreStatistics> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for genre in self.credits().iter().flat_map(|c| c.work_genres.iter()) {
            *counts.entry(genre.as_str()).or_default() += 1;
        }

        let mut stats: Vec<GenreStatistics> = counts
            .into_iter()
            .map(|(genre, occurrences)| GenreStatistics {
                genre: genre.to_string(),
                occurrences,
            })
            .collect();
        stats.sort_by(|a, b| b.occurrences.cmp(&a.occurrences));
        stats
    }
}

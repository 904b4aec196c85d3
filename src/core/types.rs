//! Row types for the three input tables and the identifiers that key them.
//!
//! Tables are loaded once and never mutated; every other structure in the
//! crate is derived from these rows.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable, globally unique identifier of a person.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(String);

impl PersonId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PersonId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Unique identifier of a work.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkId(String);

impl WorkId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WorkId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A role held on a work ("actor", "director", ...).
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(String);

impl Role {
    pub fn new(role: impl Into<String>) -> Self {
        Self(role.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Role {
    fn from(role: &str) -> Self {
        Self::new(role)
    }
}

/// A row of the people table. Display names are not unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub display_name: String,
    #[serde(default)]
    pub notable_works: String,
}

impl Person {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        notable_works: impl Into<String>,
    ) -> Self {
        Self {
            id: PersonId::new(id),
            display_name: display_name.into(),
            notable_works: notable_works.into(),
        }
    }
}

/// A row of the works table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Work {
    pub id: WorkId,
    pub title: String,
    pub work_type: String,
    pub year: Option<i32>,
    #[serde(default)]
    pub genres: Vec<String>,
}

impl Work {
    pub fn metadata(&self) -> WorkMetadata {
        WorkMetadata {
            title: self.title.clone(),
            work_type: self.work_type.clone(),
            year: self.year,
            genres: self.genres.clone(),
        }
    }
}

/// One (work, person, role) participation fact.
///
/// Work metadata is denormalized onto every row. It is per-work, so all rows
/// of one work are expected to agree; when they don't, the first row wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditRecord {
    pub work_id: WorkId,
    pub person_id: PersonId,
    pub role: Role,
    #[serde(default)]
    pub credit_order: Option<u32>,
    pub work_title: String,
    pub work_type: String,
    #[serde(default)]
    pub work_year: Option<i32>,
    #[serde(default)]
    pub work_genres: Vec<String>,
}

impl CreditRecord {
    /// Per-work metadata carried by this row.
    pub fn work_metadata(&self) -> WorkMetadata {
        WorkMetadata {
            title: self.work_title.clone(),
            work_type: self.work_type.clone(),
            year: self.work_year,
            genres: self.work_genres.clone(),
        }
    }
}

/// The per-work fields of a credit row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkMetadata {
    pub title: String,
    pub work_type: String,
    pub year: Option<i32>,
    pub genres: Vec<String>,
}

/// Split a denormalized genre field ("Drama / Romance") into trimmed entries.
///
/// Empty entries are dropped, so an empty field yields no genres.
pub fn split_genres(raw: &str, delimiter: &str) -> Vec<String> {
    if delimiter.is_empty() {
        let trimmed = raw.trim();
        return if trimmed.is_empty() {
            Vec::new()
        } else {
            vec![trimmed.to_string()]
        };
    }

    raw.split(delimiter)
        .map(str::trim)
        .filter(|genre| !genre.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_genres_trims_entries() {
        assert_eq!(
            split_genres("Drama / Romance /Comedy", "/"),
            vec!["Drama", "Romance", "Comedy"]
        );
    }

    #[test]
    fn test_split_genres_drops_empty_entries() {
        assert!(split_genres("", "/").is_empty());
        assert_eq!(split_genres("Drama//", "/"), vec!["Drama"]);
    }

    #[test]
    fn test_split_genres_without_delimiter_keeps_whole_field() {
        assert_eq!(split_genres(" Drama/Romance ", ""), vec!["Drama/Romance"]);
    }

    #[test]
    fn test_ids_order_lexically() {
        assert!(PersonId::from("1") < PersonId::from("2"));
        assert_eq!(WorkId::from("w1").to_string(), "w1");
    }
}

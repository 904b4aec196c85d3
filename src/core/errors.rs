//! Shared error types for network construction

use super::types::{PersonId, WorkId};
use std::fmt;
use thiserror::Error;

/// What a failed identity lookup was looking for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityQuery {
    Id(PersonId),
    Name(String),
}

impl fmt::Display for IdentityQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "id '{}'", id),
            Self::Name(name) => write!(f, "name '{}'", name),
        }
    }
}

/// Main error type for collabnet operations
#[derive(Debug, Error)]
pub enum Error {
    /// No person matches the given id or display name
    #[error("No person found for {query}")]
    IdentityNotFound { query: IdentityQuery },

    /// A display name matches several people; resolve by id instead
    #[error(
        "Display name '{name}' matches {} people ({}); build the network by id instead",
        .candidates.len(),
        format_ids(.candidates)
    )]
    AmbiguousIdentity {
        name: String,
        candidates: Vec<PersonId>,
    },

    /// No credit rows exist for the work
    #[error("No credits found for work '{work_id}'")]
    WorkNotFound { work_id: WorkId },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// TOML errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl Error {
    pub fn id_not_found(id: &PersonId) -> Self {
        Self::IdentityNotFound {
            query: IdentityQuery::Id(id.clone()),
        }
    }

    pub fn name_not_found(name: impl Into<String>) -> Self {
        Self::IdentityNotFound {
            query: IdentityQuery::Name(name.into()),
        }
    }

    pub fn ambiguous(name: impl Into<String>, candidates: Vec<PersonId>) -> Self {
        Self::AmbiguousIdentity {
            name: name.into(),
            candidates,
        }
    }

    /// True for failures that come from resolving a person.
    pub fn is_identity_error(&self) -> bool {
        matches!(
            self,
            Self::IdentityNotFound { .. } | Self::AmbiguousIdentity { .. }
        )
    }
}

fn format_ids(ids: &[PersonId]) -> String {
    ids.iter()
        .map(PersonId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

//! Display-name and id resolution.
//!
//! Names are matched exactly on the canonical display name. An ambiguous name
//! is not an error here: the full candidate set is returned and callers that
//! need exactly one person use [`IdentityResolver::resolve_unique`].

use crate::core::{Error, Person, PersonId, Result};
use crate::data::Dataset;

/// Pure lookups over the people table.
#[derive(Debug, Clone, Copy)]
pub struct IdentityResolver<'a> {
    dataset: &'a Dataset,
}

impl<'a> IdentityResolver<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    /// Every person whose display name equals `name`.
    ///
    /// Returns `IdentityNotFound` when nobody matches; one or many matches are
    /// both returned as-is.
    pub fn resolve_by_name(&self, name: &str) -> Result<Vec<&'a Person>> {
        let matches = self.dataset.people_named(name);
        if matches.is_empty() {
            return Err(Error::name_not_found(name));
        }
        Ok(matches)
    }

    pub fn resolve_by_id(&self, id: &PersonId) -> Result<&'a Person> {
        self.dataset.person(id).ok_or_else(|| Error::id_not_found(id))
    }

    /// The single person carrying `name`, or `AmbiguousIdentity` with every candidate id.
    pub fn resolve_unique(&self, name: &str) -> Result<&'a Person> {
        let mut matches = self.resolve_by_name(name)?;
        if matches.len() > 1 {
            let candidates = matches.iter().map(|p| p.id.clone()).collect();
            return Err(Error::ambiguous(name, candidates));
        }
        Ok(matches.remove(0))
    }
}

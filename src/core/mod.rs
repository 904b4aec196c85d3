//! Input row types, identifiers and the crate error type.

pub mod errors;
pub mod types;

pub use errors::{Error, IdentityQuery, Result};
pub use types::{split_genres, CreditRecord, Person, PersonId, Role, Work, WorkId, WorkMetadata};

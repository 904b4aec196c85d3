use crate::core::Role;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Restriction applied to credit rows before aggregation.
///
/// `Only` with an empty set admits nothing; it is never read as "all roles".
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RoleFilter {
    #[default]
    All,
    Only(BTreeSet<Role>),
}

impl RoleFilter {
    pub fn only<I, R>(roles: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<Role>,
    {
        Self::Only(roles.into_iter().map(Into::into).collect())
    }

    pub fn admits(&self, role: &Role) -> bool {
        match self {
            Self::All => true,
            Self::Only(roles) => roles.contains(role),
        }
    }

    pub fn is_restricted(&self) -> bool {
        matches!(self, Self::Only(_))
    }

    /// The admitted roles, or `None` when unrestricted.
    pub fn roles(&self) -> Option<&BTreeSet<Role>> {
        match self {
            Self::All => None,
            Self::Only(roles) => Some(roles),
        }
    }
}

impl From<Option<Vec<Role>>> for RoleFilter {
    fn from(roles: Option<Vec<Role>>) -> Self {
        match roles {
            None => Self::All,
            Some(roles) => Self::Only(roles.into_iter().collect()),
        }
    }
}

impl fmt::Display for RoleFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all roles"),
            Self::Only(roles) if roles.is_empty() => f.write_str("no roles"),
            Self::Only(roles) => {
                let names: Vec<&str> = roles.iter().map(Role::as_str).collect();
                f.write_str(&names.join(", "))
            }
        }
    }
}

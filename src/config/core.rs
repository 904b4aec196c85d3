use serde::{Deserialize, Serialize};

use crate::aggregation::RoleFilter;
use crate::core::{Role, Result};

/// Root configuration structure for collabnet
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CollabnetConfig {
    /// Ranked collaboration list configuration
    #[serde(default)]
    pub ranking: Option<RankingConfig>,

    /// Default role restriction for by-name and multi-target builds
    #[serde(default)]
    pub roles: Option<RolesConfig>,

    /// Field handling for externally loaded tables
    #[serde(default)]
    pub data: Option<DataConfig>,

    /// Logging configuration
    #[serde(default)]
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankingConfig {
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
        }
    }
}

/// `include` absent means every role; an empty list matches nothing.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RolesConfig {
    #[serde(default)]
    pub include: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataConfig {
    #[serde(default = "default_genre_delimiter")]
    pub genre_delimiter: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            genre_delimiter: default_genre_delimiter(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

pub fn default_top_n() -> usize {
    10
}

pub fn default_genre_delimiter() -> String {
    "/".to_string()
}

pub fn default_log_filter() -> String {
    "info".to_string()
}

impl CollabnetConfig {
    pub fn top_n(&self) -> usize {
        self.ranking
            .as_ref()
            .map_or_else(default_top_n, |ranking| ranking.top_n)
    }

    pub fn default_role_filter(&self) -> RoleFilter {
        let include = self.roles.as_ref().and_then(|roles| roles.include.clone());
        RoleFilter::from(include.map(|roles| roles.into_iter().map(Role::new).collect::<Vec<_>>()))
    }

    pub fn genre_delimiter(&self) -> String {
        self.data
            .as_ref()
            .map_or_else(default_genre_delimiter, |data| data.genre_delimiter.clone())
    }

    /// Split a raw genre field from an external table with the configured
    /// delimiter.
    pub fn split_genres(&self, raw: &str) -> Vec<String> {
        crate::core::split_genres(raw, &self.genre_delimiter())
    }

    pub fn log_filter(&self) -> String {
        self.logging
            .as_ref()
            .map_or_else(default_log_filter, |logging| logging.filter.clone())
    }

    pub fn validate(&self) -> Result<()> {
        if self.top_n() == 0 {
            return Err(crate::core::Error::Configuration(
                "ranking.top_n must be at least 1".to_string(),
            ));
        }
        if self.genre_delimiter().is_empty() {
            return Err(crate::core::Error::Configuration(
                "data.genre_delimiter must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

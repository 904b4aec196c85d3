use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::CollabnetConfig;
use crate::core::Result;

pub const CONFIG_FILE_NAME: &str = ".collabnet.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse and validate config from a TOML string
pub fn parse_config(contents: &str) -> Result<CollabnetConfig> {
    let config = toml::from_str::<CollabnetConfig>(contents)?;
    config.validate()?;
    Ok(config)
}

/// Load one explicit config file, propagating read and parse errors
pub fn load_config_from(path: &Path) -> Result<CollabnetConfig> {
    let contents = read_config_file(path)?;
    let config = parse_config(&contents)?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<CollabnetConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            tracing::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            tracing::warn!(
                "Ignoring invalid config {}: {}",
                config_path.display(),
                e
            );
            None
        }
    }
}

/// Only actual errors are logged, not "file not found"
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    if error.kind() != std::io::ErrorKind::NotFound {
        tracing::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for the nearest valid config file
pub fn load_config_in(start: PathBuf) -> CollabnetConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            tracing::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            CollabnetConfig::default()
        })
}

pub fn load_config() -> CollabnetConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_in(dir),
        Err(e) => {
            tracing::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            CollabnetConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::RoleFilter;
    use crate::core::Error;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(indoc! {r#"
            [ranking]
            top_n = 5

            [roles]
            include = ["actor", "director"]

            [data]
            genre_delimiter = "|"

            [logging]
            filter = "collabnet=debug"
        "#})
        .unwrap();

        assert_eq!(config.top_n(), 5);
        assert_eq!(
            config.default_role_filter(),
            RoleFilter::only(["actor", "director"])
        );
        assert_eq!(config.genre_delimiter(), "|");
        assert_eq!(config.log_filter(), "collabnet=debug");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.top_n(), 10);
        assert_eq!(config.default_role_filter(), RoleFilter::All);
        assert_eq!(config.genre_delimiter(), "/");
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn test_empty_include_matches_nothing() {
        let config = parse_config("[roles]\ninclude = []\n").unwrap();
        assert_eq!(
            config.default_role_filter(),
            RoleFilter::only(Vec::<&str>::new())
        );
    }

    #[test]
    fn test_zero_top_n_is_rejected() {
        assert!(matches!(
            parse_config("[ranking]\ntop_n = 0\n"),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        assert!(matches!(parse_config("[ranking"), Err(Error::Toml(_))));
    }

    #[test]
    fn test_load_config_in_finds_ancestor_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "[ranking]\ntop_n = 3\n",
        )
        .unwrap();
        let nested = temp_dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(load_config_in(nested).top_n(), 3);
    }

    #[test]
    fn test_load_config_in_skips_invalid_file() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("inner");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join(CONFIG_FILE_NAME), "[ranking]\ntop_n = 0\n").unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "[ranking]\ntop_n = 7\n",
        )
        .unwrap();

        assert_eq!(load_config_in(nested).top_n(), 7);
    }

    #[test]
    fn test_load_config_from_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.toml");
        assert!(matches!(load_config_from(&missing), Err(Error::Io(_))));
    }
}

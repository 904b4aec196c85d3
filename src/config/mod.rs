//! Configuration loaded from `.collabnet.toml`.

mod core;
mod loader;

pub use self::core::{
    default_genre_delimiter, default_log_filter, default_top_n, CollabnetConfig, DataConfig,
    LoggingConfig, RankingConfig, RolesConfig,
};
pub use self::loader::{
    directory_ancestors, load_config, load_config_from, load_config_in, parse_config,
    CONFIG_FILE_NAME,
};

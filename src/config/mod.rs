//! Configuration file discovery, loading and resolution.

mod manager;

pub use manager::{
    CONFIG_FILENAME, CONFIG_FOLDER_ENV, ConfigFile, ConfigManager, DEFAULT_API_KEY_ENV,
    MissingApiKey, ResolveOptions, ResolvedConfig, STARTER_API_KEY, config_folder, resolve_config,
};

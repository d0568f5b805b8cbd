use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::expert::{DEFAULT_ENDPOINT, DEFAULT_MODEL};
use crate::paths;

/// Name of the configuration file looked up in the directory hierarchy.
pub const CONFIG_FILENAME: &str = "word-guru-config.toml";

/// Environment variable naming the folder that holds the configuration file.
pub const CONFIG_FOLDER_ENV: &str = "WORD_GURU_CONFIGURATION_FOLDER";

/// Environment variable consulted for the API key when the file names none.
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Placeholder key written by `word-guru setup init`.
pub const STARTER_API_KEY: &str = "openai-key";

/// The configuration file structure.
///
/// Relative paths are relative to the folder holding the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    /// API key stored directly in the file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openai_key: Option<String>,
    /// Environment variable name containing the API key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openai_key_env: Option<String>,
    /// Folder where responses are cached. Caching is off when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_folder: Option<PathBuf>,
    /// Model name, defaults to `gpt-3.5-turbo`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// OpenAI-compatible endpoint, defaults to `https://api.openai.com`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// Folder with `<template-name>.txt` files overriding built-in prompts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompts_folder: Option<PathBuf>,
}

impl ConfigFile {
    /// The file written by `word-guru setup init`.
    pub fn starter() -> Self {
        Self {
            openai_key: Some(STARTER_API_KEY.to_string()),
            cache_folder: Some(PathBuf::from("word-guru.cache")),
            ..Self::default()
        }
    }

    /// Gets the API key.
    ///
    /// Order: the variable named by `openai_key_env`, then `openai_key`,
    /// then `OPENAI_API_KEY`. Empty values are skipped.
    pub fn get_api_key(&self) -> Option<String> {
        let from_env = |name: &str| std::env::var(name).ok().filter(|key| !key.is_empty());

        self.openai_key_env
            .as_deref()
            .and_then(from_env)
            .or_else(|| self.openai_key.clone().filter(|key| !key.is_empty()))
            .or_else(|| from_env(DEFAULT_API_KEY_ENV))
    }
}

/// No API key in the file or the environment.
#[derive(Debug, Error)]
#[error(
    "Missing required configuration: 'openai_key'\n\n\
     Please provide it via:\n  \
     - Config file: set openai_key in word-guru-config.toml (run 'word-guru setup init')\n  \
     - Environment: export OPENAI_API_KEY=\"your-api-key\""
)]
pub struct MissingApiKey;

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// The API key sent as bearer token.
    pub api_key: String,
    /// The API endpoint URL.
    pub endpoint: String,
    /// The model to query.
    pub model: String,
    /// Absolute cache folder, `None` when caching is off.
    pub cache_folder: Option<PathBuf>,
    /// Absolute prompt override folder.
    pub prompts_folder: Option<PathBuf>,
}

/// Options for resolving configuration.
///
/// Contains CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Model name override.
    pub model: Option<String>,
    /// Endpoint override.
    pub endpoint: Option<String>,
    /// Disable the response cache.
    pub no_cache: bool,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// CLI options take precedence over config file values. `config_folder` is
/// the folder relative paths in the file are resolved against.
///
/// # Errors
///
/// Returns an error if no API key is configured.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
    config_folder: &Path,
) -> Result<ResolvedConfig> {
    let Some(api_key) = config_file.get_api_key() else {
        return Err(MissingApiKey.into());
    };

    let endpoint = options
        .endpoint
        .as_ref()
        .or(config_file.endpoint.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    let model = options
        .model
        .as_ref()
        .or(config_file.model.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    let cache_folder = if options.no_cache {
        None
    } else {
        config_file
            .cache_folder
            .as_deref()
            .map(|folder| paths::resolve_relative(config_folder, folder))
    };

    let prompts_folder = config_file
        .prompts_folder
        .as_deref()
        .map(|folder| paths::resolve_relative(config_folder, folder));

    Ok(ResolvedConfig {
        api_key,
        endpoint,
        model,
        cache_folder,
        prompts_folder,
    })
}

/// Returns the folder expected to hold the configuration file.
///
/// Resolution order:
/// 1. the first of `start` and its ancestors containing `word-guru-config.toml`
/// 2. `$WORD_GURU_CONFIGURATION_FOLDER` if set
/// 3. the XDG config directory (`~/.config/word-guru`)
pub fn config_folder(start: &Path) -> PathBuf {
    if let Some(folder) = start
        .ancestors()
        .find(|folder| folder.join(CONFIG_FILENAME).is_file())
    {
        return folder.to_path_buf();
    }

    std::env::var(CONFIG_FOLDER_ENV).map_or_else(
        |_| paths::config_dir(),
        |folder| paths::expand_tilde(&folder),
    )
}

/// Manages loading and saving the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a config manager for the file discovered from the current
    /// working directory (see [`config_folder`]).
    pub fn new() -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to determine current directory")?;
        Ok(Self::at(config_folder(&cwd).join(CONFIG_FILENAME)))
    }

    pub const fn at(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    /// The folder relative paths in the file are resolved against.
    pub fn config_folder(&self) -> &Path {
        self.config_path.parent().unwrap_or_else(|| Path::new("."))
    }

    pub fn exists(&self) -> bool {
        self.config_path.is_file()
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile = toml::from_str(&contents).with_context(|| {
            format!("Failed to parse config file: {}", self.config_path.display())
        })?;

        Ok(config_file)
    }

    /// Loads the file, or the empty configuration if there is none.
    ///
    /// A file that exists but cannot be read or parsed is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        match fs::metadata(&self.config_path) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(ConfigFile::default()),
            _ => self.load(),
        }
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }
}

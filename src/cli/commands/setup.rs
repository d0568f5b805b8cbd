//! Setup command handlers: show or create the configuration file.

use anyhow::{Context, Result, bail};
use std::fs;

use crate::config::{CONFIG_FILENAME, CONFIG_FOLDER_ENV, ConfigFile, ConfigManager};
use crate::ui::Style;

/// Prints the path and content of the configuration file in use.
pub fn print_config() -> Result<()> {
    let manager = ConfigManager::new()?;

    if !manager.exists() {
        bail!(
            "No configuration file found.\n\n\
             Create one by calling 'word-guru setup init' or set the environment variable \
             {CONFIG_FOLDER_ENV} to the directory where the configuration is stored."
        );
    }

    let contents = fs::read_to_string(manager.config_path()).with_context(|| {
        format!(
            "Failed to read config file: {}",
            manager.config_path().display()
        )
    })?;

    println!(
        "{} {}\n",
        Style::header("Using configuration file:"),
        Style::value(manager.config_path().display())
    );
    print!("{contents}");

    Ok(())
}

/// Creates a starter configuration file in the current directory.
///
/// Never overwrites an existing file.
pub fn init() -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    let manager = ConfigManager::at(cwd.join(CONFIG_FILENAME));

    if manager.exists() {
        bail!(
            "A configuration file exists already at: {}",
            manager.config_path().display()
        );
    }

    manager.save(&ConfigFile::starter())?;

    println!(
        "{} Configuration file created at: {}",
        Style::success("✓"),
        Style::value(manager.config_path().display())
    );
    println!(
        "{}",
        Style::hint("Set openai_key and create the cache folder before the first query.")
    );

    Ok(())
}

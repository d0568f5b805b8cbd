//! Command-line interface definitions and handlers.

/// CLI argument parsing with clap.
pub mod args;

/// Subcommand implementations.
pub mod commands;

pub use args::{Args, Command, SetupCommand};

use crate::config::MissingApiKey;
use crate::error::ExpertError;

/// Maps an error to the process exit code (sysexits conventions).
pub fn exit_code(err: &anyhow::Error) -> exitcode::ExitCode {
    if let Some(expert_error) = err.downcast_ref::<ExpertError>() {
        return match expert_error {
            ExpertError::LanguageCodeNotRecognized(_) | ExpertError::LanguageCount { .. } => {
                exitcode::DATAERR
            }
            ExpertError::TemplateNotFound(_)
            | ExpertError::TemplateRead { .. }
            | ExpertError::MissingVariable { .. } => exitcode::CONFIG,
            ExpertError::EmptyModelResponse
            | ExpertError::Http(_)
            | ExpertError::Backend { .. } => exitcode::UNAVAILABLE,
            ExpertError::CacheDirectoryMissing(_)
            | ExpertError::CacheRead { .. }
            | ExpertError::CacheWrite { .. } => exitcode::IOERR,
        };
    }

    if err.is::<MissingApiKey>() || err.chain().any(|cause| cause.is::<toml::de::Error>()) {
        return exitcode::CONFIG;
    }

    exitcode::SOFTWARE
}

//! Error type shared by the language expert core.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while answering a language query.
///
/// Every variant propagates unchanged to the caller of
/// [`Expert`](crate::expert::Expert); nothing is retried internally.
#[derive(Debug, Error)]
pub enum ExpertError {
    #[error(
        "The language code {0} is not recognized. \
         Make sure to enter a valid ISO 639-3 code. For example, `eng` for English"
    )]
    LanguageCodeNotRecognized(String),

    #[error("Operation '{operation}' takes {expected} language code(s), got {actual}")]
    LanguageCount {
        operation: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Prompt template '{0}' not found")]
    TemplateNotFound(String),

    #[error("Failed to read prompt template: {}", .path.display())]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Prompt template '{template}' uses '{{{variable}}}' but no value was supplied")]
    MissingVariable { template: String, variable: String },

    #[error("The model returned an empty response")]
    EmptyModelResponse,

    #[error(
        "Cache folder does not exist: {}\n\nCreate it before proceeding.",
        .0.display()
    )]
    CacheDirectoryMissing(PathBuf),

    #[error("Failed to read cache entry: {}", .path.display())]
    CacheRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write cache entry: {}", .path.display())]
    CacheWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to reach the model endpoint: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API request failed with status {status}: {body}")]
    Backend { status: u16, body: String },
}

//! # word-guru - your language expert
//!
//! `word-guru` asks an OpenAI-compatible chat endpoint for definitions,
//! synonyms, reverse definitions, usage examples, part-of-speech tags,
//! translations and corrections, and caches every answer on disk.
//!
//! ## Quick Start
//!
//! ```bash
//! # Create word-guru-config.toml in the current directory
//! word-guru setup init
//!
//! # Definition of an English word
//! word-guru get-definition happiness eng
//!
//! # Synonyms, as a JSON list
//! word-guru get-synonym travail fra
//!
//! # Translate from Italian to English
//! word-guru translate magari ita eng
//! ```
//!
//! ## Configuration
//!
//! `word-guru-config.toml` is looked up in the current directory and its
//! parents, then in `$WORD_GURU_CONFIGURATION_FOLDER`, then in
//! `~/.config/word-guru`:
//!
//! ```toml
//! openai_key = "sk-..."
//! cache_folder = "word-guru.cache"
//! model = "gpt-3.5-turbo"
//! ```
//!
//! ## Library use
//!
//! ```no_run
//! use word_guru::cache::ResponseCache;
//! use word_guru::expert::{Expert, OpenAiClient, PromptRenderer};
//!
//! # async fn demo() -> Result<(), word_guru::error::ExpertError> {
//! let cache = ResponseCache::open("word-guru.cache")?;
//! let client = OpenAiClient::new(
//!     "https://api.openai.com".to_string(),
//!     "sk-...".to_string(),
//!     "gpt-3.5-turbo".to_string(),
//! );
//! let expert = Expert::new(client, PromptRenderer::new(), &cache);
//! println!("{}", expert.translation("word", "eng", "fra").await?);
//! # Ok(())
//! # }
//! ```

/// Write-once response cache, one file per request digest.
pub mod cache;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file discovery and resolution.
pub mod config;

/// Error type of the language expert core.
pub mod error;

/// Language resolution, prompt rendering, model client and the query façade.
pub mod expert;

/// File system utilities.
pub mod fs;

/// Global output configuration (quiet/verbose mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities.
pub mod paths;

/// Terminal UI components (spinner, colors).
pub mod ui;

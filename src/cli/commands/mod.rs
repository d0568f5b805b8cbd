//! Subcommand implementations.

/// Operation subcommands (definition, synonym, translation, ...).
pub mod query;

/// Setup command handlers.
pub mod setup;

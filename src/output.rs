//! Global output configuration and utilities.
//!
//! This module provides centralized control over CLI output behavior,
//! including quiet and verbose modes, color support, and stderr/stdout routing.
//!
//! ## Design Principles
//!
//! - Answers go to stdout (for piping)
//! - Status messages, progress, and logs go to stderr
//! - Errors always go to stderr
//! - Quiet mode suppresses non-essential output
//! - Verbose mode adds cache and request diagnostics
//! - Colors can be disabled via flag or NO_COLOR environment variable

use std::sync::OnceLock;

/// Global output configuration.
static OUTPUT_CONFIG: OnceLock<OutputConfig> = OnceLock::new();

/// Output configuration settings.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Print diagnostics (cache hits and misses, endpoint, model).
    pub verbose: bool,
    /// Disable colored output.
    pub no_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            verbose: false,
            // Check NO_COLOR environment variable (https://no-color.org/)
            no_color: std::env::var("NO_COLOR").is_ok(),
        }
    }
}

/// Initialize the global output configuration.
///
/// This should be called once at startup with the CLI flags.
/// If called multiple times, subsequent calls are ignored.
pub fn init(config: OutputConfig) {
    let _ = OUTPUT_CONFIG.set(config);
}

/// Get the current output configuration.
pub fn config() -> &'static OutputConfig {
    OUTPUT_CONFIG.get_or_init(OutputConfig::default)
}

/// Check if quiet mode is enabled.
pub fn is_quiet() -> bool {
    config().quiet
}

/// Check if verbose diagnostics are enabled. Quiet wins over verbose.
pub fn is_verbose() -> bool {
    let config = config();
    config.verbose && !config.quiet
}

/// Check if colors are disabled.
pub fn is_no_color() -> bool {
    config().no_color
}

/// Print an info message to stderr (respects quiet mode).
///
/// Use this for non-essential informational output.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        if !$crate::output::is_quiet() {
            eprintln!($($arg)*);
        }
    };
}

/// Print a diagnostic message to stderr (only in verbose mode).
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        if $crate::output::is_verbose() {
            eprintln!("{} {}", $crate::ui::Style::secondary("debug:"), format_args!($($arg)*));
        }
    };
}

/// Print a warning message to stderr (always shown, even in quiet mode).
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        eprintln!("{} {}", $crate::ui::Style::warning("Warning:"), format_args!($($arg)*));
    };
}

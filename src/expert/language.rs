//! ISO 639-3 language code resolution.

use isolang::Language;

use crate::error::ExpertError;
use crate::ui::Style;

/// Every ISO 639-3 code with the reference name used inside prompts.
pub fn languages() -> impl Iterator<Item = (&'static str, &'static str)> {
    isolang::languages().map(|language| (language.to_639_3(), language.to_name()))
}

/// Prints all recognized language codes to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported language codes (ISO 639-3)"));
    for (code, name) in languages() {
        println!("  {:5} {}", Style::code(code), Style::secondary(name));
    }
}

/// Returns the language name used in prompts for an ISO 639-3 code.
///
/// Matching is exact and case sensitive: `eng` resolves, `ENG` and `en` do not.
///
/// # Errors
///
/// Returns [`ExpertError::LanguageCodeNotRecognized`] if the code is not an
/// ISO 639-3 code.
pub fn resolve_language(code: &str) -> Result<&'static str, ExpertError> {
    Some(code)
        .filter(|code| code.bytes().all(|b| b.is_ascii_lowercase()))
        .and_then(Language::from_639_3)
        .map(|language| language.to_name())
        .ok_or_else(|| ExpertError::LanguageCodeNotRecognized(code.to_string()))
}

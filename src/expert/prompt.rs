use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::error::ExpertError;

/// Built-in instruction templates, keyed by template name.
pub const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    (
        "get-simple-definition",
        include_str!("../../prompts/get-simple-definition.txt"),
    ),
    ("get-synonym", include_str!("../../prompts/get-synonym.txt")),
    (
        "get-reverse-definition",
        include_str!("../../prompts/get-reverse-definition.txt"),
    ),
    (
        "get-usage-examples",
        include_str!("../../prompts/get-usage-examples.txt"),
    ),
    ("get-pos-tag", include_str!("../../prompts/get-pos-tag.txt")),
    (
        "get-translation",
        include_str!("../../prompts/get-translation.txt"),
    ),
    (
        "get-correction",
        include_str!("../../prompts/get-correction.txt"),
    ),
];

/// Renders named instruction templates.
///
/// Templates are looked up in the override folder first (`<name>.txt`),
/// then in [`BUILTIN_TEMPLATES`].
#[derive(Debug, Clone, Default)]
pub struct PromptRenderer {
    override_dir: Option<PathBuf>,
}

impl PromptRenderer {
    /// A renderer that only knows the built-in templates.
    pub fn new() -> Self {
        Self::default()
    }

    /// A renderer that prefers templates found in `dir`.
    pub fn with_override_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            override_dir: Some(dir.into()),
        }
    }

    /// Loads the raw text of a template.
    pub fn load(&self, name: &str) -> Result<Cow<'static, str>, ExpertError> {
        if let Some(dir) = &self.override_dir {
            let path = dir.join(format!("{name}.txt"));
            match fs::read_to_string(&path) {
                Ok(text) => return Ok(Cow::Owned(text)),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(source) => return Err(ExpertError::TemplateRead { path, source }),
            }
        }

        BUILTIN_TEMPLATES
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, text)| Cow::Borrowed(*text))
            .ok_or_else(|| ExpertError::TemplateNotFound(name.to_string()))
    }

    /// Loads `name` and substitutes every `{placeholder}` from `variables`.
    pub fn render(&self, name: &str, variables: &[(&str, &str)]) -> Result<String, ExpertError> {
        let template = self.load(name)?;
        substitute(name, &template, variables)
    }
}

/// Replaces `{identifier}` placeholders; any other brace is copied as is.
fn substitute(
    name: &str,
    template: &str,
    variables: &[(&str, &str)],
) -> Result<String, ExpertError> {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        rendered.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        match placeholder_len(after) {
            Some(len) => {
                let variable = &after[..len];
                let value = variables
                    .iter()
                    .find(|(key, _)| *key == variable)
                    .map(|(_, value)| *value)
                    .ok_or_else(|| ExpertError::MissingVariable {
                        template: name.to_string(),
                        variable: variable.to_string(),
                    })?;
                rendered.push_str(value);
                rest = &after[len + 1..];
            }
            None => {
                rendered.push('{');
                rest = after;
            }
        }
    }

    rendered.push_str(rest);
    Ok(rendered)
}

/// Length of the identifier if `text` starts with `identifier}`.
fn placeholder_len(text: &str) -> Option<usize> {
    let len = text
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(text.len());
    (len > 0 && text[len..].starts_with('}')).then_some(len)
}

//! The language expert: resolve languages, render the instruction prompt,
//! consult the response cache and ask the model on a miss.

mod client;
mod language;
mod operation;
mod prompt;

pub use client::{CompletionBackend, DEFAULT_ENDPOINT, DEFAULT_MODEL, OpenAiClient, TOP_P};
pub use language::{languages, print_languages, resolve_language};
pub use operation::{Operation, OperationRequest};
pub use prompt::{BUILTIN_TEMPLATES, PromptRenderer};

use crate::cache::{ResponseCache, cache_key};
use crate::debug;
use crate::error::ExpertError;

/// Answers language queries through a [`CompletionBackend`], caching every
/// non-empty answer in the [`ResponseCache`] it was given.
pub struct Expert<'c, B> {
    backend: B,
    renderer: PromptRenderer,
    cache: &'c ResponseCache,
}

impl<'c, B: CompletionBackend> Expert<'c, B> {
    pub const fn new(backend: B, renderer: PromptRenderer, cache: &'c ResponseCache) -> Self {
        Self {
            backend,
            renderer,
            cache,
        }
    }

    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Runs one query.
    ///
    /// Language codes are resolved before anything else, so an unknown code
    /// never reaches the cache or the backend. A cache hit returns the stored
    /// text without calling the backend. An empty completion fails with
    /// [`ExpertError::EmptyModelResponse`] and is not cached.
    pub async fn execute(&self, request: &OperationRequest<'_>) -> Result<String, ExpertError> {
        let operation = request.operation;

        let names = request
            .languages
            .iter()
            .map(|code| resolve_language(code))
            .collect::<Result<Vec<_>, _>>()?;

        let expected = operation.language_variables().len();
        if names.len() != expected {
            return Err(ExpertError::LanguageCount {
                operation: operation.as_str(),
                expected,
                actual: names.len(),
            });
        }

        let variables: Vec<(&str, &str)> = operation
            .language_variables()
            .iter()
            .copied()
            .zip(names)
            .collect();

        let prompt = self
            .renderer
            .render(operation.template_name(), &variables)?;

        let key = cache_key(&prompt, request.payload);
        if let Some(cached) = self.cache.lookup(&key)? {
            debug!("{operation}: cache hit {key}");
            return Ok(cached);
        }
        if self.cache.is_enabled() {
            debug!("{operation}: cache miss {key}");
        }

        let response = self
            .backend
            .complete(&prompt, request.payload)
            .await?
            .filter(|text| !text.is_empty())
            .ok_or(ExpertError::EmptyModelResponse)?;

        self.cache.store(&key, &response)?;
        if self.cache.is_enabled() {
            debug!("{operation}: stored {key}");
        }

        Ok(response)
    }

    /// Definition of `word`, written in `language`.
    pub async fn definition(&self, word: &str, language: &str) -> Result<String, ExpertError> {
        self.execute(&OperationRequest::new(Operation::Definition, word, &[language]))
            .await
    }

    /// JSON list of synonyms of `word`.
    pub async fn synonym(&self, word: &str, language: &str) -> Result<String, ExpertError> {
        self.execute(&OperationRequest::new(Operation::Synonym, word, &[language]))
            .await
    }

    /// JSON list of words that best match the description `text`.
    pub async fn reverse_definition(
        &self,
        text: &str,
        language: &str,
    ) -> Result<String, ExpertError> {
        self.execute(&OperationRequest::new(
            Operation::ReverseDefinition,
            text,
            &[language],
        ))
        .await
    }

    /// JSON list of sentences using `word` in its different meanings.
    pub async fn usage_examples(&self, word: &str, language: &str) -> Result<String, ExpertError> {
        self.execute(&OperationRequest::new(
            Operation::UsageExamples,
            word,
            &[language],
        ))
        .await
    }

    /// JSON list of the part-of-speech tags of the common uses of `word`.
    pub async fn pos_tag(&self, word: &str, language: &str) -> Result<String, ExpertError> {
        self.execute(&OperationRequest::new(Operation::PosTag, word, &[language]))
            .await
    }

    pub async fn translation(
        &self,
        word: &str,
        from_language: &str,
        to_language: &str,
    ) -> Result<String, ExpertError> {
        self.execute(&OperationRequest::new(
            Operation::Translation,
            word,
            &[from_language, to_language],
        ))
        .await
    }

    /// Corrected version of `text`.
    pub async fn correction(&self, text: &str, language: &str) -> Result<String, ExpertError> {
        self.execute(&OperationRequest::new(Operation::Correction, text, &[language]))
            .await
    }
}

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::future::Future;

use crate::error::ExpertError;

pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Nucleus sampling used for every request.
pub const TOP_P: f64 = 0.1;

/// A chat-completion backend answering one instruction/payload pair.
pub trait CompletionBackend {
    /// Sends `instructions` as the system turn and `payload` as the user turn.
    ///
    /// Returns `Ok(None)` when the backend produced no completion.
    fn complete(
        &self,
        instructions: &str,
        payload: &str,
    ) -> impl Future<Output = Result<Option<String>, ExpertError>> + Send;
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    top_p: f64,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: Cow<'a, str>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl ChatCompletionResponse {
    fn into_first_text(self) -> Option<String> {
        self.choices.into_iter().next()?.message.content
    }
}

/// Marks the payload so the model cannot mistake it for instructions.
fn wrap_payload(payload: &str) -> String {
    format!("<<{payload}>>")
}

fn build_request<'a>(
    model: &'a str,
    instructions: &'a str,
    payload: &str,
) -> ChatCompletionRequest<'a> {
    ChatCompletionRequest {
        model,
        messages: vec![
            Message {
                role: "system",
                content: Cow::Borrowed(instructions),
            },
            Message {
                role: "user",
                content: Cow::Owned(wrap_payload(payload)),
            },
        ],
        top_p: TOP_P,
    }
}

/// Client for OpenAI-compatible `/v1/chat/completions` endpoints.
pub struct OpenAiClient {
    client: Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(endpoint: String, api_key: String, model: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            api_key,
            model,
        }
    }

    fn url(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.endpoint.trim_end_matches('/')
        )
    }
}

impl CompletionBackend for OpenAiClient {
    async fn complete(
        &self,
        instructions: &str,
        payload: &str,
    ) -> Result<Option<String>, ExpertError> {
        let chat_request = build_request(&self.model, instructions, payload);

        let response = self
            .client
            .post(self.url())
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&chat_request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ExpertError::Backend {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletionResponse = response.json().await?;
        Ok(completion.into_first_text())
    }
}

// src/infrastructure/enrichment/openai.rs
use super::prompts::{
    METADATA_MAX_TOKENS, METADATA_SYSTEM_PROMPT, SUMMARY_MAX_TOKENS, SUMMARY_SYSTEM_PROMPT,
    TEMPERATURE,
};
use crate::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::enrichment::{ArticleEnricher, ArticleMetadata},
};
use crate::domain::article::ArticleEntities;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::{fmt, time::Duration};

const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct ProviderErrorBody {
    error: ProviderError,
}

#[derive(Deserialize)]
struct ProviderError {
    message: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MetadataPayload {
    sentiment_score: String,
    categories: Vec<String>,
    entities: serde_json::Value,
}

/// Chat-completions client for an OpenAI-compatible endpoint.
pub struct OpenAiEnricher {
    client: Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl fmt::Debug for OpenAiEnricher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiEnricher")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .finish()
    }
}

impl OpenAiEnricher {
    pub fn new(
        api_key: impl Into<String>,
        base_url: &str,
        model: impl Into<String>,
        timeout: Duration,
    ) -> ApplicationResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| ApplicationError::infrastructure(format!("http client: {err}")))?;

        Ok(Self::with_client(client, api_key, base_url, model))
    }

    pub fn with_client(
        client: Client,
        api_key: impl Into<String>,
        base_url: &str,
        model: impl Into<String>,
    ) -> Self {
        Self {
            client,
            endpoint: format!("{}{CHAT_COMPLETIONS_PATH}", base_url.trim_end_matches('/')),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// One chat-completion round trip; returns the trimmed text of the
    /// first choice.
    async fn complete(
        &self,
        system_prompt: &str,
        content: &str,
        max_tokens: u32,
    ) -> ApplicationResult<String> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    ApplicationError::enrichment("completion request timed out")
                } else {
                    ApplicationError::enrichment(format!("completion request failed: {err}"))
                }
            })?;

        let status = response.status();
        tracing::debug!(model = %self.model, status = status.as_u16(), "completion response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ProviderErrorBody>(&body)
                .map(|parsed| parsed.error.message)
                .unwrap_or(body);
            return Err(ApplicationError::enrichment(format!(
                "provider returned {status}: {detail}"
            )));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|err| {
            ApplicationError::enrichment(format!("malformed completion response: {err}"))
        })?;

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ApplicationError::enrichment("no choices returned from provider"))?;

        Ok(choice.message.content.unwrap_or_default().trim().to_string())
    }
}

/// Models often wrap JSON in a Markdown fence even when told not to.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    // Drop an info string such as `json`, with or without a line break after it.
    rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        .trim()
}

pub(crate) fn parse_metadata(text: &str) -> ApplicationResult<ArticleMetadata> {
    let json = strip_code_fence(text);
    if json.is_empty() {
        return Err(ApplicationError::enrichment("empty metadata completion"));
    }

    let payload: MetadataPayload = serde_json::from_str(json).map_err(|err| {
        ApplicationError::enrichment(format!("metadata completion is not valid JSON: {err}"))
    })?;

    let entities = match payload.entities {
        serde_json::Value::Object(map) => ArticleEntities::new(map),
        _ => {
            return Err(ApplicationError::enrichment(
                "metadata completion entities must be an object",
            ));
        }
    };

    Ok(ArticleMetadata {
        sentiment_score: payload.sentiment_score,
        categories: payload.categories,
        entities,
    })
}

#[async_trait]
impl ArticleEnricher for OpenAiEnricher {
    async fn extract_metadata(&self, content: &str) -> ApplicationResult<ArticleMetadata> {
        let text = self
            .complete(METADATA_SYSTEM_PROMPT, content, METADATA_MAX_TOKENS)
            .await?;
        parse_metadata(&text)
    }

    async fn summarize(&self, content: &str) -> ApplicationResult<String> {
        let summary = self
            .complete(SUMMARY_SYSTEM_PROMPT, content, SUMMARY_MAX_TOKENS)
            .await?;
        if summary.is_empty() {
            return Err(ApplicationError::enrichment("empty summary completion"));
        }
        Ok(summary)
    }
}

//! Completion request/response contract and the HTTP backend

use super::context::ContextBundle;
use crate::constants::completion::{DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};
use anyhow::{Context, Result};
use async_trait::async_trait;
use mirror_github::{ApiFailure, Credentials};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl CompletionRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    /// Prompt is the assembled context followed by the query on its own line
    pub fn from_context(context: &ContextBundle, query: &str) -> Self {
        Self::new(format!("{}\n{}", context.text, query))
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}

/// Whatever JSON the service answered with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionResponse(pub Value);

impl CompletionResponse {
    /// First completion text, for the common `choices[0]` response shapes
    pub fn text(&self) -> Option<&str> {
        let choice = self.0.get("choices")?.get(0)?;
        choice
            .get("text")
            .and_then(Value::as_str)
            .or_else(|| choice.pointer("/message/content").and_then(Value::as_str))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CompletionReply {
    Answer(CompletionResponse),
    Rejected(ApiFailure),
}

/// A text-completion service
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Send one request; non-2xx answers come back as [`CompletionReply::Rejected`]
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionReply>;
}

/// POSTs requests as JSON to a configured endpoint
pub struct HttpCompletionBackend {
    client: Client,
    endpoint: String,
    credentials: Credentials,
}

impl HttpCompletionBackend {
    pub fn new(endpoint: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            credentials,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CompletionBackend for HttpCompletionBackend {
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionReply> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", self.credentials.auth_header())
            .header("User-Agent", self.credentials.user_agent())
            .header("Accept", "application/json")
            .json(request)
            .send()
            .await
            .with_context(|| format!("Failed to reach completion endpoint {}", self.endpoint))?;

        if !response.status().is_success() {
            return Ok(CompletionReply::Rejected(
                ApiFailure::from_response(response).await,
            ));
        }

        let body: Value = response
            .json()
            .await
            .context("Failed to parse completion response")?;
        Ok(CompletionReply::Answer(CompletionResponse(body)))
    }
}

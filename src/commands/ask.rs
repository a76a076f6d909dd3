//! Ask command implementation

use super::validators;
use super::{Command, CommandContext};
use crate::completion::{
    CompletionBackend, CompletionReply, CompletionRequest, CompletionResponse, ContextBundle,
    HttpCompletionBackend, build_context, expand_context_paths,
};
use crate::config::Config;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use colored::*;
use std::path::PathBuf;

/// Send a query, with local files as context, to the completion endpoint
pub struct AskCommand {
    pub query: String,
    /// Files or directories to include as context
    pub context_paths: Vec<PathBuf>,
    /// Overrides `completion.endpoint` from the config
    pub endpoint: Option<String>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
    /// Print the request instead of sending it
    pub dry_run: bool,
}

impl AskCommand {
    /// Assemble context and request; flags override config values
    pub fn build_request(&self, config: &Config) -> (CompletionRequest, ContextBundle) {
        let files = expand_context_paths(&self.context_paths);
        let context = build_context(&files);

        let request = CompletionRequest::from_context(&context, &self.query)
            .with_max_tokens(self.max_tokens.unwrap_or(config.completion.max_tokens))
            .with_temperature(self.temperature.unwrap_or(config.completion.temperature));

        (request, context)
    }

    /// Send through `backend`; a rejected request becomes an error here
    pub async fn ask_with<B>(
        &self,
        request: &CompletionRequest,
        backend: &B,
    ) -> Result<CompletionResponse>
    where
        B: CompletionBackend + ?Sized,
    {
        match backend.complete(request).await? {
            CompletionReply::Answer(response) => Ok(response),
            CompletionReply::Rejected(failure) => Err(anyhow!(
                "Completion endpoint rejected the request ({})",
                failure
            )),
        }
    }
}

#[async_trait]
impl Command for AskCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        validators::validate_ask_args(&self.query, self.max_tokens, self.temperature)?;

        let (request, bundle) = self.build_request(&context.config);

        for error in &bundle.errors {
            eprintln!(
                "{}",
                format!(
                    "Warning: skipping context file {}: {}",
                    error.path.display(),
                    error.message
                )
                .yellow()
            );
        }

        if self.dry_run {
            println!("{}", serde_json::to_string_pretty(&request)?);
            return Ok(());
        }

        let endpoint = validators::validate_endpoint(
            self.endpoint
                .as_deref()
                .or(context.config.completion.endpoint.as_deref()),
        )?;
        let credentials = context.require_credentials()?.clone();
        let backend = HttpCompletionBackend::new(endpoint, credentials);

        println!(
            "{}",
            format!(
                "Sending query with {} context files to {}...",
                bundle.included.len(),
                backend.endpoint()
            )
            .green()
        );

        let response = self.ask_with(&request, &backend).await?;
        match response.text() {
            Some(text) => println!("{}", text),
            None => println!("{}", serde_json::to_string_pretty(&response)?),
        }

        Ok(())
    }
}

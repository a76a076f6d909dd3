//! Configuration file loading and saving

use super::MirrorSpec;
use crate::constants::{completion, github};
use crate::utils::validators;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_max_tokens() -> u32 {
    completion::DEFAULT_MAX_TOKENS
}

fn default_temperature() -> f32 {
    completion::DEFAULT_TEMPERATURE
}

/// `completion:` section of the config file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self {
            endpoint: None,
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
    #[serde(default)]
    pub completion: CompletionSettings,
    #[serde(default)]
    pub mirrors: Vec<MirrorSpec>,
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path))?;

        // An empty file is a valid, empty config
        let config: Config = if content.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse config file {}", path))?
        };

        config.validate()?;
        Ok(config)
    }

    /// Load `path` if it exists, otherwise start from an empty config
    pub fn load_or_default(path: &str) -> Result<Self> {
        if Path::new(path).exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &str) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, format!("---\n{}", yaml))
            .with_context(|| format!("Failed to write config file {}", path))?;
        Ok(())
    }

    /// API root, api.github.com unless overridden
    pub fn api_base(&self) -> &str {
        self.api_base.as_deref().unwrap_or(github::API_BASE)
    }

    /// Get mirror by name
    pub fn get_mirror(&self, name: &str) -> Option<&MirrorSpec> {
        self.mirrors.iter().find(|mirror| mirror.name() == name)
    }

    /// Mirrors matching `names`, in config order; all mirrors when `names` is empty
    pub fn filter_by_names(&self, names: &[String]) -> Vec<MirrorSpec> {
        if names.is_empty() {
            return self.mirrors.clone();
        }
        self.mirrors
            .iter()
            .filter(|mirror| names.iter().any(|name| name == mirror.name()))
            .cloned()
            .collect()
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        validators::validate_config(self).map_err(validators::validation_errors_to_anyhow)
    }
}

//! Configuration validation utilities
//!
//! Centralized validation rules for the configuration file. Every rule is
//! checked so a broken config reports all of its problems at once.

use crate::config::{CompletionSettings, Config, MirrorSpec};
use anyhow::anyhow;
use std::collections::HashSet;

/// Enumeration of possible validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Mirror owner is empty
    EmptyOwner(String),
    /// Mirror repository name is empty
    EmptyRepo(String),
    /// Owner or repository contains characters GitHub never allows there
    InvalidSegment { field: String, value: String },
    /// Two mirrors resolve to the same name
    DuplicateMirrorName(String),
    /// Target directory is empty
    EmptyTarget(String),
    /// Temperature outside the accepted range
    InvalidTemperature(f32),
    /// max_tokens must be positive
    InvalidMaxTokens,
    /// Completion endpoint is not an http(s) URL
    InvalidEndpoint(String),
    /// API base is not an http(s) URL
    InvalidApiBase(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyOwner(name) => {
                write!(f, "Mirror '{}' owner cannot be empty", name)
            }
            ValidationError::EmptyRepo(name) => {
                write!(f, "Mirror '{}' repository cannot be empty", name)
            }
            ValidationError::InvalidSegment { field, value } => {
                write!(f, "Invalid {} '{}': must not contain '/' or whitespace", field, value)
            }
            ValidationError::DuplicateMirrorName(name) => {
                write!(f, "Duplicate mirror name: '{}'", name)
            }
            ValidationError::EmptyTarget(name) => {
                write!(f, "Mirror '{}' target cannot be empty", name)
            }
            ValidationError::InvalidTemperature(value) => {
                write!(f, "Temperature must be between 0.0 and 2.0, got {}", value)
            }
            ValidationError::InvalidMaxTokens => {
                write!(f, "max_tokens must be greater than zero")
            }
            ValidationError::InvalidEndpoint(endpoint) => {
                write!(f, "Completion endpoint must be an http(s) URL: '{}'", endpoint)
            }
            ValidationError::InvalidApiBase(base) => {
                write!(f, "API base must be an http(s) URL: '{}'", base)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validates an entire configuration
pub fn validate_config(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Some(base) = &config.api_base
        && !is_http_url(base)
    {
        errors.push(ValidationError::InvalidApiBase(base.clone()));
    }

    if let Err(mut mirror_errors) = validate_mirrors(&config.mirrors) {
        errors.append(&mut mirror_errors);
    }

    if let Err(mut completion_errors) = validate_completion(&config.completion) {
        errors.append(&mut completion_errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a list of mirrors, including name uniqueness
pub fn validate_mirrors(mirrors: &[MirrorSpec]) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let mut names = HashSet::new();
    for mirror in mirrors {
        if !names.insert(mirror.name()) {
            errors.push(ValidationError::DuplicateMirrorName(
                mirror.name().to_string(),
            ));
        }
    }

    for mirror in mirrors {
        if let Err(mut mirror_errors) = validate_mirror(mirror) {
            errors.append(&mut mirror_errors);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a single mirror entry
pub fn validate_mirror(mirror: &MirrorSpec) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let label = mirror.full_name();

    if mirror.owner.trim().is_empty() {
        errors.push(ValidationError::EmptyOwner(label.clone()));
    } else if !is_plain_segment(&mirror.owner) {
        errors.push(ValidationError::InvalidSegment {
            field: "owner".to_string(),
            value: mirror.owner.clone(),
        });
    }

    if mirror.repo.trim().is_empty() {
        errors.push(ValidationError::EmptyRepo(label.clone()));
    } else if !is_plain_segment(&mirror.repo) {
        errors.push(ValidationError::InvalidSegment {
            field: "repository".to_string(),
            value: mirror.repo.clone(),
        });
    }

    if let Some(target) = &mirror.target
        && target.trim().is_empty()
    {
        errors.push(ValidationError::EmptyTarget(label));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates the completion section
pub fn validate_completion(settings: &CompletionSettings) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if !(0.0..=2.0).contains(&settings.temperature) {
        errors.push(ValidationError::InvalidTemperature(settings.temperature));
    }

    if settings.max_tokens == 0 {
        errors.push(ValidationError::InvalidMaxTokens);
    }

    if let Some(endpoint) = &settings.endpoint
        && !is_http_url(endpoint)
    {
        errors.push(ValidationError::InvalidEndpoint(endpoint.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_plain_segment(value: &str) -> bool {
    !value.contains('/') && !value.chars().any(char::is_whitespace)
}

fn is_http_url(value: &str) -> bool {
    value.starts_with("https://") || value.starts_with("http://")
}

/// Convert a list of validation errors into one anyhow error
pub fn validation_errors_to_anyhow(errors: Vec<ValidationError>) -> anyhow::Error {
    let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    anyhow!("Validation errors: {}", error_messages.join("; "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config = Config {
            mirrors: vec![
                MirrorSpec::new("octocat", "Hello-World"),
                MirrorSpec::new("rust-lang", "rust"),
            ],
            ..Config::default()
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_duplicate_mirror_names() {
        let mirrors = vec![
            MirrorSpec::new("octocat", "Hello-World"),
            MirrorSpec::new("someone-else", "Hello-World"),
        ];
        let errors = validate_mirrors(&mirrors).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::DuplicateMirrorName("Hello-World".to_string())]
        );
    }

    #[test]
    fn test_named_mirrors_disambiguate() {
        let mut second = MirrorSpec::new("someone-else", "Hello-World");
        second.name = Some("fork".to_string());
        let mirrors = vec![MirrorSpec::new("octocat", "Hello-World"), second];
        assert!(validate_mirrors(&mirrors).is_ok());
    }

    #[test]
    fn test_empty_and_invalid_segments() {
        let errors = validate_mirror(&MirrorSpec::new("", "repo")).unwrap_err();
        assert!(matches!(errors[0], ValidationError::EmptyOwner(_)));

        let errors = validate_mirror(&MirrorSpec::new("owner", "re po")).unwrap_err();
        assert!(matches!(errors[0], ValidationError::InvalidSegment { .. }));

        let errors = validate_mirror(&MirrorSpec::new("a/b", "")).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_empty_target() {
        let mirror = MirrorSpec::new("octocat", "Hello-World").with_target("  ");
        let errors = validate_mirror(&mirror).unwrap_err();
        assert!(matches!(errors[0], ValidationError::EmptyTarget(_)));
    }

    #[test]
    fn test_completion_settings() {
        assert!(validate_completion(&CompletionSettings::default()).is_ok());

        let settings = CompletionSettings {
            endpoint: Some("ftp://example.com".to_string()),
            max_tokens: 0,
            temperature: 3.5,
        };
        let errors = validate_completion(&settings).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_invalid_api_base() {
        let config = Config {
            api_base: Some("api.github.com".to_string()),
            ..Config::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::InvalidApiBase("api.github.com".to_string())]
        );
    }

    #[test]
    fn test_validation_errors_to_anyhow() {
        let err = validation_errors_to_anyhow(vec![
            ValidationError::InvalidMaxTokens,
            ValidationError::EmptyOwner("x".to_string()),
        ]);
        let message = err.to_string();
        assert!(message.starts_with("Validation errors:"));
        assert!(message.contains("max_tokens"));
        assert!(message.contains("; "));
    }
}

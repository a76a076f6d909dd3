//! Command argument validation utilities
//!
//! Domain rules for arguments that clap has already parsed.

use anyhow::{Result, anyhow};

/// Validation errors for command arguments
#[derive(Debug, PartialEq)]
pub enum CommandValidationError {
    /// Required argument was not provided
    MissingRequired {
        argument: String,
        alternatives: Vec<String>,
    },
    /// Invalid argument value
    InvalidValue {
        argument: String,
        value: String,
        reason: String,
    },
}

impl std::fmt::Display for CommandValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandValidationError::MissingRequired {
                argument,
                alternatives,
            } => {
                if alternatives.is_empty() {
                    write!(f, "{} is required", argument)
                } else {
                    write!(
                        f,
                        "Either {} or {} must be provided",
                        alternatives.join(", "),
                        argument
                    )
                }
            }
            CommandValidationError::InvalidValue {
                argument,
                value,
                reason,
            } => {
                write!(f, "Invalid value '{}' for {}: {}", value, argument, reason)
            }
        }
    }
}

impl std::error::Error for CommandValidationError {}

/// Convert validation error to anyhow::Error
pub fn validation_error_to_anyhow(error: CommandValidationError) -> anyhow::Error {
    anyhow!(error.to_string())
}

/// Validate mirror names given on the command line
pub fn validate_mirror_names(names: &[String]) -> Result<()> {
    for name in names {
        if name.trim().is_empty() {
            return Err(validation_error_to_anyhow(
                CommandValidationError::InvalidValue {
                    argument: "mirror name".to_string(),
                    value: name.clone(),
                    reason: "mirror name cannot be empty or whitespace only".to_string(),
                },
            ));
        }
    }
    Ok(())
}

/// Validate the target directory of a fetch
pub fn validate_target_directory(target: &Option<String>) -> Result<()> {
    if let Some(dir) = target
        && dir.trim().is_empty()
    {
        return Err(validation_error_to_anyhow(
            CommandValidationError::InvalidValue {
                argument: "target".to_string(),
                value: dir.clone(),
                reason: "target directory cannot be empty or whitespace only".to_string(),
            },
        ));
    }
    Ok(())
}

/// Validate the query and sampling overrides of `ask`
pub fn validate_ask_args(
    query: &str,
    max_tokens: Option<u32>,
    temperature: Option<f32>,
) -> Result<()> {
    if query.trim().is_empty() {
        return Err(validation_error_to_anyhow(
            CommandValidationError::MissingRequired {
                argument: "a non-empty query".to_string(),
                alternatives: Vec::new(),
            },
        ));
    }

    if max_tokens == Some(0) {
        return Err(validation_error_to_anyhow(
            CommandValidationError::InvalidValue {
                argument: "--max-tokens".to_string(),
                value: "0".to_string(),
                reason: "must be greater than zero".to_string(),
            },
        ));
    }

    if let Some(temperature) = temperature
        && !(0.0..=2.0).contains(&temperature)
    {
        return Err(validation_error_to_anyhow(
            CommandValidationError::InvalidValue {
                argument: "--temperature".to_string(),
                value: temperature.to_string(),
                reason: "must be between 0.0 and 2.0".to_string(),
            },
        ));
    }

    Ok(())
}

/// Validate that a completion endpoint is available
pub fn validate_endpoint(endpoint: Option<&str>) -> Result<&str> {
    match endpoint {
        Some(endpoint) if endpoint.starts_with("http://") || endpoint.starts_with("https://") => {
            Ok(endpoint)
        }
        Some(endpoint) => Err(validation_error_to_anyhow(
            CommandValidationError::InvalidValue {
                argument: "--endpoint".to_string(),
                value: endpoint.to_string(),
                reason: "must be an http(s) URL".to_string(),
            },
        )),
        None => Err(validation_error_to_anyhow(
            CommandValidationError::MissingRequired {
                argument: "completion.endpoint in the config".to_string(),
                alternatives: vec!["--endpoint".to_string()],
            },
        )),
    }
}

//! Resolving the username and token a command runs with

use super::Config;
use crate::constants::github::{TOKEN_ENV, USER_ENV};
use anyhow::{Result, anyhow};
use mirror_github::Credentials;

/// Resolve credentials from flags, config and the process environment
///
/// Token: `--token`, then `GITHUB_TOKEN`.
/// Username: `--user`, then the config's `username`, then `GITHUB_USER`.
pub fn resolve_credentials(
    user: Option<String>,
    token: Option<String>,
    config: &Config,
) -> Result<Credentials> {
    resolve_credentials_with(user, token, config, |key| std::env::var(key).ok())
}

/// Same as [`resolve_credentials`] with an injectable environment lookup
pub fn resolve_credentials_with<F>(
    user: Option<String>,
    token: Option<String>,
    config: &Config,
    lookup: F,
) -> Result<Credentials>
where
    F: Fn(&str) -> Option<String>,
{
    let token = token
        .or_else(|| lookup(TOKEN_ENV))
        .filter(|token| !token.trim().is_empty())
        .ok_or_else(|| {
            anyhow!(
                "GitHub token not provided. Use --token flag or set {} environment variable.",
                TOKEN_ENV
            )
        })?;

    let username = user
        .or_else(|| config.username.clone())
        .or_else(|| lookup(USER_ENV))
        .filter(|user| !user.trim().is_empty())
        .ok_or_else(|| {
            anyhow!(
                "GitHub username not provided. Use --user flag, set 'username' in the config, or set {} environment variable.",
                USER_ENV
            )
        })?;

    Ok(Credentials::new(username, token))
}

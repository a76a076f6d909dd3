//! Credentials for authenticated requests

use std::fmt;

/// Username and personal access token, held for the lifetime of a client
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    token: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            token: token.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Value for the `Authorization` header
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.token)
    }

    /// Value for the `User-Agent` header, GitHub rejects requests without one
    pub fn user_agent(&self) -> String {
        format!(
            "gh-mirror/{} ({})",
            env!("CARGO_PKG_VERSION"),
            self.username
        )
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("token", &"<redacted>")
            .finish()
    }
}

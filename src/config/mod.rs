//! Configuration management module

pub mod credentials;
pub mod loader;
pub mod mirror;

pub use credentials::{resolve_credentials, resolve_credentials_with};
pub use loader::{CompletionSettings, Config};
pub use mirror::MirrorSpec;

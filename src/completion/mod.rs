//! Forwarding local files as context to a text-completion service
//!
//! The service itself is an external collaborator: this module only defines
//! the request/response contract ([`CompletionRequest`], [`CompletionReply`]),
//! assembles the prompt context, and ships a thin JSON-over-HTTP
//! [`HttpCompletionBackend`] for a user-configured endpoint.

pub mod backend;
pub mod context;

pub use backend::{
    CompletionBackend, CompletionReply, CompletionRequest, CompletionResponse,
    HttpCompletionBackend,
};
pub use context::{ContextBundle, ContextError, build_context, expand_context_paths};

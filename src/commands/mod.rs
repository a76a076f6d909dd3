//! Command implementations

pub mod ask;
pub mod base;
pub mod fetch;
pub mod output;
pub mod sync;
pub mod validators;

pub use ask::AskCommand;
pub use base::{Command, CommandContext};
pub use fetch::FetchCommand;
pub use sync::SyncCommand;

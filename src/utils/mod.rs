//! Utility modules for common functionality

pub mod filesystem;
pub mod sanitizers;
pub mod validators;

// Re-export commonly used functions
pub use filesystem::{ensure_directory_exists, write_file};
pub use sanitizers::is_safe_entry_name;

//! Checks on names that come back from the API before they touch disk

use std::ffi::OsStr;
use std::path::{Component, Path};

/// Whether `name` is a single plain path component
///
/// Empty names, `.`, `..`, anything containing a separator or NUL, and
/// anything the platform would read as a root or prefix are rejected.
pub fn is_safe_entry_name(name: &str) -> bool {
    if name.is_empty() || name.contains(['/', '\\', '\0']) {
        return false;
    }

    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(component)), None) => component == OsStr::new(name),
        _ => false,
    }
}

//! Prompt context assembled from local files

use serde::Serialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A file that could not be used as context
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextError {
    pub path: PathBuf,
    pub message: String,
}

/// Concatenated context plus what went in and what was left out
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContextBundle {
    pub text: String,
    pub included: Vec<PathBuf>,
    pub errors: Vec<ContextError>,
}

/// Read each file as UTF-8 text and append it under a `# File:` header
///
/// Files that cannot be read (missing, not UTF-8, ...) are collected in
/// `errors` and skipped.
pub fn build_context<P: AsRef<Path>>(files: &[P]) -> ContextBundle {
    let mut bundle = ContextBundle::default();

    for path in files {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) => {
                bundle
                    .text
                    .push_str(&format!("\n# File: {}\n{}\n", path.display(), content));
                bundle.included.push(path.to_path_buf());
            }
            Err(e) => bundle.errors.push(ContextError {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        }
    }

    bundle
}

/// Expand directories into the files below them, sorted by name
///
/// Plain paths (including missing ones) are passed through unchanged so
/// [`build_context`] can report them.
pub fn expand_context_paths(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut expanded = Vec::new();

    for path in paths {
        if path.is_dir() {
            expanded.extend(
                WalkDir::new(path)
                    .sort_by_file_name()
                    .into_iter()
                    .filter_map(|entry| entry.ok())
                    .filter(|entry| entry.file_type().is_file())
                    .map(|entry| entry.into_path()),
            );
        } else {
            expanded.push(path.clone());
        }
    }

    expanded
}

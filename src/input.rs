//! Tree file loading and pre-flight validation

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

use crate::tree::Node;

/// Errors that abort the run before any output-directory side effect.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("tree file not found at '{}'", .0.display())]
    NotFound(PathBuf),

    #[error("cannot read '{}': {}", .path.display(), .source)]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid JSON in '{}': {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("'{}' must contain a top-level 'tree' array", .0.display())]
    Schema(PathBuf),
}

/// Load the root nodes from a JSON tree file.
///
/// The file must hold a JSON object with a `tree` field that is an array
/// of nodes. A `tree` that is missing, not an array, or whose elements do
/// not deserialize as nodes is a [`InputError::Schema`] error.
pub fn load_tree(path: &Path) -> Result<Vec<Node>, InputError> {
    if !path.exists() {
        return Err(InputError::NotFound(path.to_path_buf()));
    }

    let raw = fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut doc: Value = serde_json::from_str(&raw).map_err(|source| InputError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let tree = match doc.get_mut("tree") {
        Some(value) if value.is_array() => value.take(),
        _ => return Err(InputError::Schema(path.to_path_buf())),
    };

    serde_json::from_value(tree).map_err(|_| InputError::Schema(path.to_path_buf()))
}

//! Path parsing for root construction and name validation.

use crate::error::TreeError;
use std::path::{Path, PathBuf};

/// Location of a root node: the directory holding it plus its own name segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RootLocation {
    pub parent_dir: String,
    pub name: String,
}

pub(crate) fn trim_trailing_separators(path: &str) -> &str {
    path.trim_end_matches('/')
}

/// Split an absolute path into parent dir and final segment.
///
/// Runs of trailing separators are dropped from both the input and the
/// resulting parent dir. An empty parent dir stands for the filesystem root.
pub(crate) fn split_root_path(path: &Path) -> Result<RootLocation, TreeError> {
    let raw = path.to_str().ok_or_else(|| TreeError::InvalidPath {
        path: path.to_string_lossy().into_owned(),
    })?;
    let trimmed = trim_trailing_separators(raw);
    match trimmed.rsplit_once('/') {
        Some((dir, name)) if !name.is_empty() => Ok(RootLocation {
            parent_dir: trim_trailing_separators(dir).to_string(),
            name: name.to_string(),
        }),
        _ => Err(TreeError::InvalidPath {
            path: raw.to_string(),
        }),
    }
}

/// Filesystem location to probe for a parent dir string.
pub(crate) fn parent_dir_on_disk(parent_dir: &str) -> &Path {
    if parent_dir.is_empty() {
        Path::new("/")
    } else {
        Path::new(parent_dir)
    }
}

pub(crate) fn root_path(parent_dir: &str, name: &str) -> PathBuf {
    PathBuf::from(format!("{}/{}", parent_dir, name))
}

/// Reject names that would break path derivation.
pub(crate) fn validate_name(name: &str) -> Result<(), TreeError> {
    let reason = if name.is_empty() {
        "name is empty"
    } else if name.contains('/') {
        "name contains a path separator"
    } else if name.contains('\0') {
        "name contains a NUL byte"
    } else if name == "." || name == ".." {
        "name is a relative path component"
    } else {
        return Ok(());
    };
    Err(TreeError::InvalidName {
        name: name.to_string(),
        reason: reason.to_string(),
    })
}

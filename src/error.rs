//! Error types for the object tree and its supporting layers.

use std::path::PathBuf;
use thiserror::Error;

/// Kind of node, used in error messages and registration checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Directory,
    TextFile,
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeKind::Directory => write!(f, "Dir"),
            NodeKind::TextFile => write!(f, "File"),
        }
    }
}

/// Errors raised by tree construction, lookup, copy, read and write.
#[derive(Debug, Error)]
pub enum TreeError {
    /// Both or neither of the construction modes were supplied.
    #[error("Invalid parameters: {0}. Constructor takes either the path or name+father")]
    InvalidConstruction(String),

    #[error("Invalid node name {name:?}: {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Failed to extract name and parent dir from path {path}")]
    InvalidPath { path: String },

    #[error("Failed to create node with inexistent parent dir {path}")]
    MissingParentDir { path: PathBuf },

    /// The father chain of `name` does not terminate at a live root.
    #[error("Could not find a root father for {name}")]
    RootNotFound { name: String },

    #[error("Text file {path} cannot have children")]
    NotADirectory { path: PathBuf },

    #[error("Cannot register {name} as a child: it is a root")]
    RootAsChild { name: String },

    #[error("Cannot register {name} as a child of {dir}: it belongs to another father")]
    ForeignChild { name: String, dir: PathBuf },

    #[error("{kind} {name} already present in dir {dir}. Cannot overwrite")]
    DuplicateChild {
        kind: NodeKind,
        name: String,
        dir: PathBuf,
    },

    #[error("Cannot copy {name} into its own subtree")]
    CopyIntoSelf { name: String },

    /// A directory write found a non-directory entry at its path.
    #[error("Cannot write directory over non-directory entry at {path}")]
    EntryConflict { path: PathBuf },

    #[error("Root {name} has no resolved path to write to")]
    UnresolvedRoot { name: String },

    #[error("Could not find {kind} {name} in dir {dir}")]
    NotFound {
        kind: NodeKind,
        name: String,
        dir: PathBuf,
    },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TreeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TreeError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, TreeError::NotFound { .. })
    }

    pub fn is_io(&self) -> bool {
        matches!(self, TreeError::Io { .. })
    }
}

/// Errors from the configuration and logging layers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    Tree(#[from] TreeError),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

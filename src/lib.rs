//! fsobj: Filesystem Object Tree
//!
//! Mirrors a filesystem subtree as linked directory and text file objects that
//! can be read from disk, edited in memory, copied to new places in the tree,
//! and written back out.

pub mod config;
pub mod error;
pub mod logging;
pub mod tree;

pub use error::{ApiError, NodeKind, TreeError};
pub use tree::{Directory, Node, NodeBuilder, TextFile, TreeNode};

//! Object tree mirroring a filesystem subtree.
//!
//! A tree is rooted at an absolute path and made of [`Directory`] and
//! [`TextFile`] nodes. Contents are loaded when a node is constructed over an
//! existing path; edits stay in memory until [`TreeNode::write`] is called on
//! the node or one of its ancestors.

pub mod contents;
pub mod directory;
pub mod node;
pub(crate) mod path;
pub mod text_file;

pub use contents::Contents;
pub use directory::{DirContents, Directory};
pub use node::{NodeBuilder, TreeNode};
pub use text_file::{TextContents, TextFile};

use crate::error::{NodeKind, TreeError};
use node::DirCell;
use std::path::PathBuf;
use std::sync::Weak;

/// Any node of the tree.
#[derive(Debug, Clone)]
pub enum Node {
    Directory(Directory),
    TextFile(TextFile),
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Directory(_) => NodeKind::Directory,
            Node::TextFile(_) => NodeKind::TextFile,
        }
    }

    pub fn name(&self) -> String {
        match self {
            Node::Directory(dir) => dir.name(),
            Node::TextFile(file) => file.name(),
        }
    }

    pub fn path(&self) -> Result<PathBuf, TreeError> {
        match self {
            Node::Directory(dir) => dir.path(),
            Node::TextFile(file) => file.path(),
        }
    }

    pub fn is_root(&self) -> bool {
        match self {
            Node::Directory(dir) => dir.is_root(),
            Node::TextFile(file) => file.is_root(),
        }
    }

    pub fn father(&self) -> Option<Directory> {
        match self {
            Node::Directory(dir) => dir.father(),
            Node::TextFile(file) => file.father(),
        }
    }

    pub fn read(&self) -> Result<(), TreeError> {
        match self {
            Node::Directory(dir) => dir.read(),
            Node::TextFile(file) => file.read(),
        }
    }

    pub fn write(&self) -> Result<(), TreeError> {
        match self {
            Node::Directory(dir) => dir.write(),
            Node::TextFile(file) => file.write(),
        }
    }

    pub fn copy(&self, name: &str, father: impl Into<Node>) -> Result<Node, TreeError> {
        match self {
            Node::Directory(dir) => dir.copy(name, father).map(Node::Directory),
            Node::TextFile(file) => file.copy(name, father).map(Node::TextFile),
        }
    }

    pub fn as_directory(&self) -> Option<&Directory> {
        match self {
            Node::Directory(dir) => Some(dir),
            Node::TextFile(_) => None,
        }
    }

    pub fn as_text_file(&self) -> Option<&TextFile> {
        match self {
            Node::Directory(_) => None,
            Node::TextFile(file) => Some(file),
        }
    }

    /// The directory that would adopt a new child; text files cannot.
    pub(crate) fn as_father(&self) -> Result<Directory, TreeError> {
        match self {
            Node::Directory(dir) => Ok(dir.clone()),
            Node::TextFile(file) => Err(TreeError::NotADirectory {
                path: file.display_path(),
            }),
        }
    }

    pub(crate) fn father_cell(&self) -> Option<Weak<DirCell>> {
        match self {
            Node::Directory(dir) => dir.father_cell(),
            Node::TextFile(file) => file.father_cell(),
        }
    }
}

impl From<Directory> for Node {
    fn from(dir: Directory) -> Self {
        Node::Directory(dir)
    }
}

impl From<&Directory> for Node {
    fn from(dir: &Directory) -> Self {
        Node::Directory(dir.clone())
    }
}

impl From<TextFile> for Node {
    fn from(file: TextFile) -> Self {
        Node::TextFile(file)
    }
}

impl From<&TextFile> for Node {
    fn from(file: &TextFile) -> Self {
        Node::TextFile(file.clone())
    }
}

impl From<&Node> for Node {
    fn from(node: &Node) -> Self {
        node.clone()
    }
}

//! Per-variant hooks behind the shared node operations.

use crate::error::{NodeKind, TreeError};
use crate::tree::directory::DirContents;
use crate::tree::node::TreeNode;
use crate::tree::text_file::TextContents;
use crate::tree::Node;
use std::path::Path;

mod sealed {
    pub trait Sealed {}
}

impl sealed::Sealed for DirContents {}
impl sealed::Sealed for TextContents {}

/// Contents owned by a node. Implemented only by [`DirContents`] and
/// [`TextContents`].
pub trait Contents: sealed::Sealed + Default + Sized + 'static {
    const KIND: NodeKind;

    fn wrap(node: TreeNode<Self>) -> Node;

    /// Starting contents for a copy, plus the owned children the copy still
    /// has to duplicate.
    fn seed(&self) -> (Self, Vec<Node>);

    fn read_contents(node: &TreeNode<Self>, path: &Path) -> Result<(), TreeError>;

    fn write_contents(node: &TreeNode<Self>, path: &Path) -> Result<(), TreeError>;

    /// Deep-copy `originals` under `clone`, which is already registered with its father.
    fn copy_contents(clone: &TreeNode<Self>, originals: Vec<Node>) -> Result<(), TreeError>;
}

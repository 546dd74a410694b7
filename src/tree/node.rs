//! Shared node handle: identity, path derivation, construction and copy.

use crate::error::TreeError;
use crate::tree::contents::Contents;
use crate::tree::directory::{DirContents, Directory};
use crate::tree::path::{self, RootLocation};
use crate::tree::Node;
use parking_lot::RwLock;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Weak};
use tracing::debug;

pub(crate) type DirCell = RwLock<NodeState<DirContents>>;

/// Where a node hangs: either a root with its containing dir, or a child of a directory.
#[derive(Clone)]
pub(crate) enum Anchor {
    Root { parent_dir: String },
    Child { father: Weak<DirCell> },
}

impl Anchor {
    pub(crate) fn child_of(father: &Directory) -> Self {
        Anchor::Child {
            father: Arc::downgrade(&father.shared),
        }
    }
}

pub(crate) struct NodeState<C> {
    pub(crate) name: String,
    pub(crate) anchor: Anchor,
    pub(crate) contents: C,
}

/// Handle to a node in the tree.
///
/// Cloning the handle is cheap and yields another reference to the same node;
/// use [`TreeNode::copy`] to duplicate contents.
pub struct TreeNode<C: Contents> {
    pub(crate) shared: Arc<RwLock<NodeState<C>>>,
}

impl<C: Contents> Clone for TreeNode<C> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<C: Contents> fmt::Debug for TreeNode<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.shared.read();
        f.debug_struct(&C::KIND.to_string())
            .field("name", &state.name)
            .field("root", &matches!(state.anchor, Anchor::Root { .. }))
            .finish()
    }
}

impl<C: Contents> TreeNode<C> {
    /// Construct a root from an absolute path, loading it if it exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, TreeError> {
        NodeBuilder::new().path(path).build()
    }

    /// Construct a child of `father`, loading it if it exists, and register it.
    pub fn child(name: impl Into<String>, father: impl Into<Node>) -> Result<Self, TreeError> {
        NodeBuilder::new().name(name).father(father).build()
    }

    pub(crate) fn from_state(state: NodeState<C>) -> Self {
        Self {
            shared: Arc::new(RwLock::new(state)),
        }
    }

    pub fn name(&self) -> String {
        self.shared.read().name.clone()
    }

    pub fn is_root(&self) -> bool {
        matches!(self.shared.read().anchor, Anchor::Root { .. })
    }

    /// Directory that holds a root on disk; `None` for children.
    pub fn parent_dir(&self) -> Option<PathBuf> {
        match &self.shared.read().anchor {
            Anchor::Root { parent_dir } => {
                Some(PathBuf::from(path::parent_dir_on_disk(parent_dir)))
            }
            Anchor::Child { .. } => None,
        }
    }

    /// The directory this node is registered in; `None` for a root or when
    /// the father has been dropped.
    pub fn father(&self) -> Option<Directory> {
        match &self.shared.read().anchor {
            Anchor::Root { .. } => None,
            Anchor::Child { father } => father.upgrade().map(|shared| TreeNode { shared }),
        }
    }

    /// Resolved path, derived by walking the father chain up to the root.
    pub fn path(&self) -> Result<PathBuf, TreeError> {
        let (name, anchor) = {
            let state = self.shared.read();
            (state.name.clone(), state.anchor.clone())
        };
        match anchor {
            Anchor::Root { parent_dir } => Ok(path::root_path(&parent_dir, &name)),
            Anchor::Child { father } => {
                let father = father
                    .upgrade()
                    .ok_or(TreeError::RootNotFound { name: name.clone() })?;
                Ok(TreeNode { shared: father }.path()?.join(name))
            }
        }
    }

    /// Path for diagnostics; falls back to the bare name on a broken chain.
    pub(crate) fn display_path(&self) -> PathBuf {
        self.path().unwrap_or_else(|_| PathBuf::from(self.name()))
    }

    pub fn same_node(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.shared, &other.shared)
    }

    pub(crate) fn identity(&self) -> *const () {
        Arc::as_ptr(&self.shared) as *const ()
    }

    pub(crate) fn father_cell(&self) -> Option<Weak<DirCell>> {
        match &self.shared.read().anchor {
            Anchor::Root { .. } => None,
            Anchor::Child { father } => Some(father.clone()),
        }
    }

    pub fn to_node(&self) -> Node {
        C::wrap(self.clone())
    }

    /// Reload contents from disk, replacing what is in memory.
    pub fn read(&self) -> Result<(), TreeError> {
        let path = self.path()?;
        debug!(path = %path.display(), kind = %C::KIND, "Reading node");
        C::read_contents(self, &path)
    }

    /// Write this node, and for directories its whole subtree, to disk.
    pub fn write(&self) -> Result<(), TreeError> {
        let path = self.path()?;
        if self.is_root() && path.as_os_str().is_empty() {
            return Err(TreeError::UnresolvedRoot { name: self.name() });
        }
        debug!(path = %path.display(), kind = %C::KIND, "Writing node");
        C::write_contents(self, &path)
    }

    /// Duplicate this node under `father` with a new `name`.
    ///
    /// The copy owns an independent subtree and exists only in memory until it
    /// (or an ancestor) is written.
    pub fn copy(&self, name: &str, father: impl Into<Node>) -> Result<Self, TreeError> {
        path::validate_name(name)?;
        let father: Node = father.into();
        let father = father.as_father()?;
        let ancestors = father.ancestry()?;
        if ancestors.contains(&self.identity()) {
            return Err(TreeError::CopyIntoSelf { name: self.name() });
        }
        father.ensure_vacant(C::KIND, name)?;

        let (seed, originals) = self.shared.read().contents.seed();
        let clone = Self::from_state(NodeState {
            name: name.to_string(),
            anchor: Anchor::child_of(&father),
            contents: seed,
        });
        father.on_new_child(clone.to_node())?;
        if let Err(err) = C::copy_contents(&clone, originals) {
            father.detach_child(C::KIND, name);
            return Err(err);
        }
        debug!(
            from = %self.display_path().display(),
            to = %clone.display_path().display(),
            "Copied node"
        );
        Ok(clone)
    }

    fn load_if_exists(&self) -> Result<(), TreeError> {
        let path = self.path()?;
        let exists = path.try_exists().map_err(|e| TreeError::io(&path, e))?;
        if exists {
            self.read()?;
        }
        Ok(())
    }
}

/// Builder covering both construction modes: an absolute `path` for a root,
/// or `name` plus `father` for a child. Supplying both or neither fails.
#[derive(Debug, Default)]
pub struct NodeBuilder {
    path: Option<PathBuf>,
    name: Option<String>,
    father: Option<Node>,
}

impl NodeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        self.path = (!path.as_os_str().is_empty()).then(|| path.to_path_buf());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.name = (!name.is_empty()).then_some(name);
        self
    }

    pub fn father(mut self, father: impl Into<Node>) -> Self {
        self.father = Some(father.into());
        self
    }

    pub fn build_directory(self) -> Result<Directory, TreeError> {
        self.build()
    }

    pub fn build_text_file(self) -> Result<crate::tree::TextFile, TreeError> {
        self.build()
    }

    pub(crate) fn build<C: Contents>(self) -> Result<TreeNode<C>, TreeError> {
        match (self.path, self.name, self.father) {
            (Some(path), None, None) => build_root(&path),
            (None, Some(name), Some(father)) => build_child(name, father),
            (Some(_), _, _) => Err(TreeError::InvalidConstruction(
                "both path and name/father given".to_string(),
            )),
            (None, _, _) => Err(TreeError::InvalidConstruction(
                "missing name or father".to_string(),
            )),
        }
    }
}

fn build_root<C: Contents>(path: &Path) -> Result<TreeNode<C>, TreeError> {
    let RootLocation { parent_dir, name } = path::split_root_path(path)?;
    path::validate_name(&name)?;
    let on_disk = path::parent_dir_on_disk(&parent_dir);
    match std::fs::metadata(on_disk) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => {
            return Err(TreeError::MissingParentDir {
                path: on_disk.to_path_buf(),
            })
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(TreeError::MissingParentDir {
                path: on_disk.to_path_buf(),
            })
        }
        Err(e) => return Err(TreeError::io(on_disk, e)),
    }

    let node = TreeNode::from_state(NodeState {
        name,
        anchor: Anchor::Root { parent_dir },
        contents: C::default(),
    });
    node.load_if_exists()?;
    debug!(path = %node.display_path().display(), kind = %C::KIND, "Constructed root");
    Ok(node)
}

fn build_child<C: Contents>(name: String, father: Node) -> Result<TreeNode<C>, TreeError> {
    path::validate_name(&name)?;
    let father = father.as_father()?;
    father.ancestry()?;
    father.ensure_vacant(C::KIND, &name)?;

    let node = TreeNode::from_state(NodeState {
        name,
        anchor: Anchor::child_of(&father),
        contents: C::default(),
    });
    node.load_if_exists()?;
    father.on_new_child(node.to_node())?;
    Ok(node)
}

impl Directory {
    /// Identities of this directory and every ancestor up to the root.
    ///
    /// Fails with `RootNotFound` when the chain is broken by a dropped ancestor.
    pub(crate) fn ancestry(&self) -> Result<Vec<*const ()>, TreeError> {
        let mut chain = vec![self.identity()];
        let mut current = self.clone();
        loop {
            let weak = match current.father_cell() {
                None => return Ok(chain),
                Some(weak) => weak,
            };
            let shared = weak.upgrade().ok_or_else(|| TreeError::RootNotFound {
                name: current.name(),
            })?;
            current = TreeNode { shared };
            chain.push(current.identity());
        }
    }
}

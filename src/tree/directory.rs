//! Directory nodes: child collections and recursive read/write/copy.

use crate::error::{NodeKind, TreeError};
use crate::tree::contents::Contents;
use crate::tree::node::TreeNode;
use crate::tree::text_file::TextFile;
use crate::tree::Node;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Child collections of a directory, keyed by name.
#[derive(Default)]
pub struct DirContents {
    dirs: BTreeMap<String, Directory>,
    files: BTreeMap<String, TextFile>,
}

impl DirContents {
    fn children(&self) -> Vec<Node> {
        self.files
            .values()
            .map(|f| Node::TextFile(f.clone()))
            .chain(self.dirs.values().map(|d| Node::Directory(d.clone())))
            .collect()
    }
}

pub type Directory = TreeNode<DirContents>;

enum EntryKind {
    Dir,
    File,
}

/// Immediate entries of `path`, sorted by name.
fn list_entries(path: &Path) -> Result<Vec<(String, EntryKind)>, TreeError> {
    let mut entries = Vec::new();
    let walker = WalkDir::new(path)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let at = err.path().unwrap_or(path).to_path_buf();
                let source = err
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, "walk failed"));
                return Err(TreeError::io(at, source));
            }
        };
        let name = match entry.file_name().to_str() {
            Some(name) => name.to_string(),
            None => {
                warn!(entry = ?entry.path(), "Skipping entry with non UTF8 name");
                continue;
            }
        };
        let file_type = entry.file_type();
        if file_type.is_dir() {
            entries.push((name, EntryKind::Dir));
        } else if file_type.is_file() {
            entries.push((name, EntryKind::File));
        } else {
            return Err(TreeError::io(
                entry.path(),
                std::io::Error::new(
                    std::io::ErrorKind::Unsupported,
                    "entry is neither file nor directory",
                ),
            ));
        }
    }
    Ok(entries)
}

impl Contents for DirContents {
    const KIND: NodeKind = NodeKind::Directory;

    fn wrap(node: TreeNode<Self>) -> Node {
        Node::Directory(node)
    }

    fn seed(&self) -> (Self, Vec<Node>) {
        (DirContents::default(), self.children())
    }

    fn read_contents(node: &Directory, path: &Path) -> Result<(), TreeError> {
        let entries = list_entries(path)?;
        // Drop previous children outside the lock
        let previous = std::mem::take(&mut node.shared.write().contents);
        drop(previous);

        debug!(path = %path.display(), entries = entries.len(), "Listed directory");
        for (name, kind) in entries {
            match kind {
                EntryKind::Dir => {
                    Directory::child(name, node)?;
                }
                EntryKind::File => {
                    TextFile::child(name, node)?;
                }
            }
        }
        Ok(())
    }

    fn write_contents(node: &Directory, path: &Path) -> Result<(), TreeError> {
        match std::fs::symlink_metadata(path) {
            Ok(meta) if meta.is_dir() => {
                std::fs::remove_dir_all(path).map_err(|e| TreeError::io(path, e))?
            }
            Ok(_) => {
                return Err(TreeError::EntryConflict {
                    path: path.to_path_buf(),
                })
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(TreeError::io(path, e)),
        }
        std::fs::create_dir(path).map_err(|e| TreeError::io(path, e))?;

        let (files, dirs) = {
            let state = node.shared.read();
            (
                state.contents.files.values().cloned().collect::<Vec<_>>(),
                state.contents.dirs.values().cloned().collect::<Vec<_>>(),
            )
        };
        for file in &files {
            file.write()?;
        }
        for dir in &dirs {
            dir.write()?;
        }
        info!(
            path = %path.display(),
            files = files.len(),
            dirs = dirs.len(),
            "Wrote directory"
        );
        Ok(())
    }

    fn copy_contents(clone: &Directory, originals: Vec<Node>) -> Result<(), TreeError> {
        for original in originals {
            let name = original.name();
            original.copy(&name, clone)?;
        }
        Ok(())
    }
}

impl Directory {
    /// Register `kid`, whose father must already be this directory.
    pub(crate) fn on_new_child(&self, kid: Node) -> Result<(), TreeError> {
        let name = kid.name();
        if kid.is_root() {
            return Err(TreeError::RootAsChild { name });
        }
        let belongs_here = kid
            .father_cell()
            .is_some_and(|weak| std::ptr::eq(weak.as_ptr(), Arc::as_ptr(&self.shared)));
        if !belongs_here {
            return Err(TreeError::ForeignChild {
                name,
                dir: self.display_path(),
            });
        }

        let kind = kid.kind();
        let inserted = {
            let mut state = self.shared.write();
            match kid {
                Node::Directory(dir) => match state.contents.dirs.entry(name.clone()) {
                    Entry::Vacant(slot) => {
                        slot.insert(dir);
                        true
                    }
                    Entry::Occupied(_) => false,
                },
                Node::TextFile(file) => match state.contents.files.entry(name.clone()) {
                    Entry::Vacant(slot) => {
                        slot.insert(file);
                        true
                    }
                    Entry::Occupied(_) => false,
                },
            }
        };
        if !inserted {
            return Err(TreeError::DuplicateChild {
                kind,
                name,
                dir: self.display_path(),
            });
        }
        Ok(())
    }

    pub(crate) fn ensure_vacant(&self, kind: NodeKind, name: &str) -> Result<(), TreeError> {
        let taken = match kind {
            NodeKind::Directory => self.has_dir(name),
            NodeKind::TextFile => self.has_file(name),
        };
        if taken {
            return Err(TreeError::DuplicateChild {
                kind,
                name: name.to_string(),
                dir: self.display_path(),
            });
        }
        Ok(())
    }

    pub(crate) fn detach_child(&self, kind: NodeKind, name: &str) {
        let detached = {
            let mut state = self.shared.write();
            match kind {
                NodeKind::Directory => state.contents.dirs.remove(name).map(Node::Directory),
                NodeKind::TextFile => state.contents.files.remove(name).map(Node::TextFile),
            }
        };
        drop(detached);
    }

    /// Names of child directories, sorted.
    pub fn dir_list(&self) -> Vec<String> {
        self.shared.read().contents.dirs.keys().cloned().collect()
    }

    /// Names of child files, sorted.
    pub fn file_list(&self) -> Vec<String> {
        self.shared.read().contents.files.keys().cloned().collect()
    }

    pub fn has_dir(&self, name: &str) -> bool {
        self.shared.read().contents.dirs.contains_key(name)
    }

    pub fn has_file(&self, name: &str) -> bool {
        self.shared.read().contents.files.contains_key(name)
    }

    pub fn get_dir(&self, name: &str) -> Result<Directory, TreeError> {
        let found = self.shared.read().contents.dirs.get(name).cloned();
        found.ok_or_else(|| TreeError::NotFound {
            kind: NodeKind::Directory,
            name: name.to_string(),
            dir: self.display_path(),
        })
    }

    pub fn get_file(&self, name: &str) -> Result<TextFile, TreeError> {
        let found = self.shared.read().contents.files.get(name).cloned();
        found.ok_or_else(|| TreeError::NotFound {
            kind: NodeKind::TextFile,
            name: name.to_string(),
            dir: self.display_path(),
        })
    }

    /// Direct children, files first, each group sorted by name.
    pub fn children(&self) -> Vec<Node> {
        self.shared.read().contents.children()
    }
}

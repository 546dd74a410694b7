//! Text file nodes: an ordered list of lines without terminators.

use crate::error::{NodeKind, TreeError};
use crate::tree::contents::Contents;
use crate::tree::node::TreeNode;
use crate::tree::Node;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Default, Clone)]
pub struct TextContents {
    lines: Vec<String>,
}

pub type TextFile = TreeNode<TextContents>;

impl Contents for TextContents {
    const KIND: NodeKind = NodeKind::TextFile;

    fn wrap(node: TreeNode<Self>) -> Node {
        Node::TextFile(node)
    }

    fn seed(&self) -> (Self, Vec<Node>) {
        (self.clone(), Vec::new())
    }

    fn read_contents(node: &TextFile, path: &Path) -> Result<(), TreeError> {
        let file = File::open(path).map_err(|e| TreeError::io(path, e))?;
        let lines = BufReader::new(file)
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| TreeError::io(path, e))?;
        debug!(path = %path.display(), lines = lines.len(), "Read text file");
        node.shared.write().contents.lines = lines;
        Ok(())
    }

    fn write_contents(node: &TextFile, path: &Path) -> Result<(), TreeError> {
        let lines = node.lines();
        let file = File::create(path).map_err(|e| TreeError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        for line in &lines {
            writeln!(writer, "{}", line).map_err(|e| TreeError::io(path, e))?;
        }
        writer.flush().map_err(|e| TreeError::io(path, e))?;
        Ok(())
    }

    fn copy_contents(_clone: &TextFile, _originals: Vec<Node>) -> Result<(), TreeError> {
        Ok(())
    }
}

impl TextFile {
    pub fn lines(&self) -> Vec<String> {
        self.shared.read().contents.lines.clone()
    }

    pub fn line_count(&self) -> usize {
        self.shared.read().contents.lines.len()
    }

    pub fn set_lines<I, S>(&self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        self.shared.write().contents.lines = lines;
    }

    pub fn push_line(&self, line: impl Into<String>) {
        self.shared.write().contents.lines.push(line.into());
    }

    /// Full text, each line followed by a newline.
    pub fn get_str(&self) -> String {
        let state = self.shared.read();
        let mut text = String::with_capacity(
            state.contents.lines.iter().map(|l| l.len() + 1).sum(),
        );
        for line in &state.contents.lines {
            text.push_str(line);
            text.push('\n');
        }
        text
    }

    /// Replace every literal occurrence of `find` with `replace` in every line.
    ///
    /// Only the in-memory lines change; call [`TreeNode::write`] to persist.
    /// An empty `find` leaves the file untouched.
    pub fn str_sub(&self, find: &str, replace: &str) {
        if find.is_empty() {
            return;
        }
        let mut state = self.shared.write();
        for line in state.contents.lines.iter_mut() {
            if line.contains(find) {
                *line = line.replace(find, replace);
            }
        }
    }
}

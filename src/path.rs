//! Path Resolver
//!
//! The working directory is a plain list of directory titles from the root.
//! Resolution always walks from the root; no reference into the tree is
//! held between commands, so the path can never drift from what it names.

use crate::tree::{FsTree, Node};
use serde::Serialize;

/// Marker shown for the root in prompts
pub const ROOT_MARKER: &str = "~";

/// Current working directory of a session: directory titles from the root
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WorkingPath {
    segments: Vec<String>,
}

impl WorkingPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Descend into `title` if it names a directory at the current location.
    ///
    /// Returns whether the path changed; a file or missing title leaves the
    /// path untouched.
    pub fn descend(&mut self, tree: &FsTree, title: &str) -> bool {
        let is_dir = find_child(children_at(tree, self), title)
            .map(Node::is_directory)
            .unwrap_or(false);
        if is_dir {
            self.segments.push(title.to_string());
        }
        is_dir
    }

    /// Pop the last segment; no-op at the root
    pub fn ascend(&mut self) {
        self.segments.pop();
    }

    pub fn reset(&mut self) {
        self.segments.clear();
    }
}

/// Children of the directory `path` denotes, in display order.
///
/// Paths built through [`WorkingPath::descend`] always resolve. A segment
/// that does not name a directory yields an empty slice.
pub fn children_at<'a>(tree: &'a FsTree, path: &WorkingPath) -> &'a [Node] {
    let mut children = tree.root();
    for segment in path.segments() {
        match find_child(children, segment) {
            Some(node) if node.is_directory() => children = node.children(),
            _ => return &[],
        }
    }
    children
}

/// Sibling lookup by exact title
pub fn find_child<'a>(children: &'a [Node], title: &str) -> Option<&'a Node> {
    children.iter().find(|child| child.title == title)
}

/// Render a path for the prompt: `~` at root, `~/a/b` below it
pub fn display_path(path: &WorkingPath) -> String {
    if path.is_root() {
        ROOT_MARKER.to_string()
    } else {
        format!("{}/{}", ROOT_MARKER, path.segments().join("/"))
    }
}

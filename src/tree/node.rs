//! Virtual filesystem node types

use crate::types::NodeID;
use serde::{Deserialize, Serialize};

/// Color tone for a styled span, mirroring the desktop terminal palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Teal,
    Rose,
    Yellow,
    Blue,
    Slate,
}

/// A run of text with optional styling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<Tone>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub bold: bool,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: None,
            bold: false,
        }
    }

    pub fn toned(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone: Some(tone),
            bold: false,
        }
    }
}

/// Renderable payload of a file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Content {
    /// Plain text, possibly multi-line
    Plain(String),
    /// Bulleted list
    List { items: Vec<String> },
    /// Lightly styled markup
    Spans { spans: Vec<Span> },
}

impl Content {
    /// Whether rendering this content would produce nothing visible
    pub fn is_empty(&self) -> bool {
        match self {
            Content::Plain(text) => text.is_empty(),
            Content::List { items } => items.is_empty(),
            Content::Spans { spans } => spans.iter().all(|s| s.text.is_empty()),
        }
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Plain(text.to_string())
    }
}

/// Node kind: directory with ordered children, or file with content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Directory { children: Vec<Node> },
    File { content: Content },
}

/// One entry in the virtual filesystem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: NodeID,
    pub title: String,
    pub kind: NodeKind,
}

impl Node {
    pub fn is_directory(&self) -> bool {
        matches!(self.kind, NodeKind::Directory { .. })
    }

    pub fn is_file(&self) -> bool {
        matches!(self.kind, NodeKind::File { .. })
    }

    /// Children in display order; empty for files
    pub fn children(&self) -> &[Node] {
        match &self.kind {
            NodeKind::Directory { children } => children,
            NodeKind::File { .. } => &[],
        }
    }

    pub fn content(&self) -> Option<&Content> {
        match &self.kind {
            NodeKind::File { content } => Some(content),
            NodeKind::Directory { .. } => None,
        }
    }
}

/// The immutable virtual filesystem: a root collection of nodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsTree {
    root: Vec<Node>,
}

impl FsTree {
    pub(crate) fn from_root(root: Vec<Node>) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &[Node] {
        &self.root
    }

    /// Total number of nodes below the root
    pub fn node_count(&self) -> usize {
        fn count(nodes: &[Node]) -> usize {
            nodes.iter().map(|n| 1 + count(n.children())).sum()
        }
        count(&self.root)
    }

    /// Depth-first traversal in display order, yielding (depth, node)
    pub fn walk(&self) -> Vec<(usize, &Node)> {
        fn visit<'a>(nodes: &'a [Node], depth: usize, out: &mut Vec<(usize, &'a Node)>) {
            for node in nodes {
                out.push((depth, node));
                visit(node.children(), depth + 1, out);
            }
        }
        let mut out = Vec::new();
        visit(&self.root, 0, &mut out);
        out
    }
}

//! Tree builder: turns node specifications into a validated, immutable tree.

use crate::error::TreeError;
use crate::tree::hasher::compute_node_id;
use crate::tree::node::{Content, FsTree, Node, NodeKind};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};
use unicode_normalization::UnicodeNormalization;

/// Titles the interpreter gives special meaning to in `cd`
const RESERVED_TITLES: [&str; 3] = [".", "..", "~"];

/// Declarative description of one node, as written in a tree definition file.
///
/// A node with `content` is a file; anything else is a directory. Unknown
/// keys, and nodes carrying both `content` and `children`, are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged, try_from = "RawNodeSpec")]
pub enum NodeSpec {
    File {
        title: String,
        content: Content,
    },
    Directory {
        title: String,
        #[serde(default)]
        children: Vec<NodeSpec>,
    },
}

impl NodeSpec {
    pub fn dir(title: impl Into<String>, children: Vec<NodeSpec>) -> Self {
        NodeSpec::Directory {
            title: title.into(),
            children,
        }
    }

    pub fn file(title: impl Into<String>, content: impl Into<Content>) -> Self {
        NodeSpec::File {
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            NodeSpec::File { title, .. } | NodeSpec::Directory { title, .. } => title,
        }
    }
}

/// On-disk form of a node before its kind is decided
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawNodeSpec {
    title: String,
    #[serde(default)]
    content: Option<Content>,
    #[serde(default)]
    children: Option<Vec<NodeSpec>>,
}

impl TryFrom<RawNodeSpec> for NodeSpec {
    type Error = String;

    fn try_from(raw: RawNodeSpec) -> Result<Self, Self::Error> {
        match (raw.content, raw.children) {
            (Some(_), Some(_)) => Err(format!(
                "node {:?} has both content and children",
                raw.title
            )),
            (Some(content), None) => Ok(NodeSpec::File {
                title: raw.title,
                content,
            }),
            (None, children) => Ok(NodeSpec::Directory {
                title: raw.title,
                children: children.unwrap_or_default(),
            }),
        }
    }
}

/// Top-level shape of a tree definition file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeDefinition {
    pub nodes: Vec<NodeSpec>,
}

impl TreeDefinition {
    /// Load a definition file; the format is picked from the extension.
    pub fn load(path: &Path) -> Result<Self, TreeError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|source| TreeError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        Self::parse(&raw, &extension)
    }

    /// Parse definition text in the given format (`toml`, `yaml`/`yml`, `json`).
    pub fn parse(raw: &str, format: &str) -> Result<Self, TreeError> {
        match format {
            "toml" => toml::from_str(raw).map_err(|e| TreeError::Parse(e.to_string())),
            "yaml" | "yml" => serde_yaml::from_str(raw).map_err(|e| TreeError::Parse(e.to_string())),
            "json" => serde_json::from_str(raw).map_err(|e| TreeError::Parse(e.to_string())),
            other => Err(TreeError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Builds an [`FsTree`] from node specifications.
///
/// Titles are normalized to NFC and validated per directory: non-empty, no
/// whitespace or `/`, not reserved, unique among siblings. Node ids are
/// derived from the normalized path.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    nodes: Vec<NodeSpec>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_definition(definition: TreeDefinition) -> Self {
        Self {
            nodes: definition.nodes,
        }
    }

    /// Append a root-level node
    pub fn node(mut self, spec: NodeSpec) -> Self {
        self.nodes.push(spec);
        self
    }

    pub fn build(self) -> Result<FsTree, TreeError> {
        let mut segments = Vec::new();
        let root = build_level(self.nodes, &mut segments)?;
        let tree = FsTree::from_root(root);
        info!(node_count = tree.node_count(), "Virtual filesystem built");
        Ok(tree)
    }
}

fn build_level(specs: Vec<NodeSpec>, segments: &mut Vec<String>) -> Result<Vec<Node>, TreeError> {
    let parent = display_parent(segments);
    let mut seen = HashSet::new();
    let mut nodes = Vec::with_capacity(specs.len());

    for spec in specs {
        let title: String = spec.title().nfc().collect();
        validate_title(&title, &parent)?;
        if !seen.insert(title.clone()) {
            return Err(TreeError::DuplicateTitle { title, parent });
        }

        segments.push(title.clone());
        let id = {
            let refs: Vec<&str> = segments.iter().map(String::as_str).collect();
            compute_node_id(&refs)
        };
        let kind = match spec {
            NodeSpec::Directory { children, .. } => NodeKind::Directory {
                children: build_level(children, segments)?,
            },
            NodeSpec::File { content, .. } => NodeKind::File { content },
        };
        segments.pop();

        debug!(title = %title, id = %id.short(), "Built node");
        nodes.push(Node { id, title, kind });
    }

    Ok(nodes)
}

fn validate_title(title: &str, parent: &str) -> Result<(), TreeError> {
    if title.is_empty() {
        return Err(TreeError::EmptyTitle {
            parent: parent.to_string(),
        });
    }
    let reason = if RESERVED_TITLES.contains(&title) {
        Some("reserved name")
    } else if title.chars().any(char::is_whitespace) {
        Some("contains whitespace")
    } else if title.contains('/') {
        Some("contains '/'")
    } else {
        None
    };
    match reason {
        Some(reason) => Err(TreeError::InvalidTitle {
            title: title.to_string(),
            parent: parent.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

fn display_parent(segments: &[String]) -> String {
    if segments.is_empty() {
        "~".to_string()
    } else {
        format!("~/{}", segments.join("/"))
    }
}

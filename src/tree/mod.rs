//! Virtual Filesystem Tree
//!
//! An immutable hierarchy of files and directories built once at startup,
//! either from the built-in layout or from a definition file. The tree is
//! shared read-only by every terminal session.

pub mod builder;
pub mod default;
pub mod hasher;
pub mod node;

pub use builder::{NodeSpec, TreeBuilder, TreeDefinition};
pub use node::{Content, FsTree, Node, NodeKind, Span, Tone};

use crate::error::TreeError;
use std::path::Path;

impl FsTree {
    /// The built-in tree. Its layout is fixed and always valid.
    pub fn builtin() -> Result<FsTree, TreeError> {
        TreeBuilder::from_definition(TreeDefinition {
            nodes: default::default_nodes(),
        })
        .build()
    }

    /// Load and validate a tree from a definition file, or fall back to the
    /// built-in tree when no file is given.
    pub fn load(definition: Option<&Path>) -> Result<FsTree, TreeError> {
        match definition {
            Some(path) => TreeBuilder::from_definition(TreeDefinition::load(path)?).build(),
            None => Self::builtin(),
        }
    }
}

//! Command Interpreter
//!
//! Parses a submitted line, dispatches it against the shared tree and the
//! session's working path, and returns what the session should do with the
//! log. Every error is a renderable value; no command can fail the session.

pub mod help;
pub mod parse;

pub use help::{HelpEntry, HELP_ENTRIES};
pub use parse::{parse_line, ParsedLine};

use crate::error::CommandError;
use crate::path::{children_at, find_child, WorkingPath, ROOT_MARKER};
use crate::tree::{Content, FsTree, Node};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;
use unicode_normalization::UnicodeNormalization;

/// A recognized command with its (optional) argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Clear,
    Cd(Option<String>),
    Ls,
    Cat(Option<String>),
    Unknown(String),
}

impl Command {
    pub fn from_parsed(parsed: &ParsedLine<'_>) -> Self {
        let argument = parsed.argument.map(str::to_string);
        match parsed.command {
            "help" => Command::Help,
            "clear" => Command::Clear,
            "cd" => Command::Cd(argument),
            "ls" => Command::Ls,
            "cat" => Command::Cat(argument),
            other => Command::Unknown(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Command::Help => "help",
            Command::Clear => "clear",
            Command::Cd(_) => "cd",
            Command::Ls => "ls",
            Command::Cat(_) => "cat",
            Command::Unknown(name) => name,
        }
    }
}

/// Kind marker for `ls` entries so front ends can style directories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Directory,
    File,
}

/// One `ls` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingEntry {
    pub title: String,
    pub kind: EntryKind,
}

impl From<&Node> for ListingEntry {
    fn from(node: &Node) -> Self {
        Self {
            title: node.title.clone(),
            kind: if node.is_directory() {
                EntryKind::Directory
            } else {
                EntryKind::File
            },
        }
    }
}

/// A command's visible result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Output {
    Help(Vec<HelpEntry>),
    Listing(Vec<ListingEntry>),
    Content(Content),
    Error(CommandError),
}

/// What the session does with its log after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Append this result block
    Output(Output),
    /// Empty the log
    Clear,
    /// Nothing to show (path change, blank line)
    Silent,
}

/// Dispatches commands against one shared tree
#[derive(Debug, Clone)]
pub struct Interpreter {
    tree: Arc<FsTree>,
    strict_arguments: bool,
}

impl Interpreter {
    pub fn new(tree: Arc<FsTree>) -> Self {
        Self {
            tree,
            strict_arguments: false,
        }
    }

    /// Reject lines with more than one argument instead of ignoring the rest
    pub fn with_strict_arguments(mut self, strict: bool) -> Self {
        self.strict_arguments = strict;
        self
    }

    pub fn tree(&self) -> &Arc<FsTree> {
        &self.tree
    }

    /// Interpret one submitted line against `path`.
    pub fn execute(&self, path: &mut WorkingPath, line: &str) -> Outcome {
        let parsed = parse_line(line);
        if parsed.is_empty() {
            return Outcome::Silent;
        }
        if self.strict_arguments && !parsed.extra.is_empty() {
            debug!(line = %line, "Rejected extra arguments");
            return Outcome::Output(Output::Error(CommandError::UnsupportedSyntax(
                line.trim().to_string(),
            )));
        }

        let command = Command::from_parsed(&parsed);
        debug!(command = command.name(), argument = ?parsed.argument, "Dispatching command");
        match command {
            Command::Help => Outcome::Output(Output::Help(HELP_ENTRIES.to_vec())),
            Command::Clear => Outcome::Clear,
            Command::Cd(argument) => self.change_directory(path, argument.as_deref()),
            Command::Ls => Outcome::Output(self.list(path)),
            Command::Cat(argument) => Outcome::Output(self.cat(path, argument.as_deref())),
            Command::Unknown(name) => {
                Outcome::Output(Output::Error(CommandError::CommandNotFound(name)))
            }
        }
    }

    fn change_directory(&self, path: &mut WorkingPath, argument: Option<&str>) -> Outcome {
        match argument {
            None | Some("") => path.reset(),
            Some(arg) if arg == ROOT_MARKER => path.reset(),
            Some(".") => {}
            Some("..") => path.ascend(),
            Some(arg) => {
                let title: String = arg.nfc().collect();
                if !path.descend(&self.tree, &title) {
                    return Outcome::Output(Output::Error(CommandError::PathNotFound(
                        arg.to_string(),
                    )));
                }
            }
        }
        debug!(depth = path.depth(), "Working path updated");
        Outcome::Silent
    }

    fn list(&self, path: &WorkingPath) -> Output {
        Output::Listing(
            children_at(&self.tree, path)
                .iter()
                .map(ListingEntry::from)
                .collect(),
        )
    }

    fn cat(&self, path: &WorkingPath, argument: Option<&str>) -> Output {
        let name = argument.unwrap_or("");
        let title: String = name.nfc().collect();
        match find_child(children_at(&self.tree, path), &title).and_then(Node::content) {
            Some(content) => Output::Content(content.clone()),
            None => Output::Error(CommandError::FileNotFound(name.to_string())),
        }
    }
}

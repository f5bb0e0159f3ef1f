//! Terminal Session
//!
//! One terminal instance: its working path, its log, and the interpreter it
//! drives. The last log entry is always the live, editable prompt; submitting
//! freezes it, runs the command, and appends the result plus a fresh prompt.

pub mod block;
pub mod log;
pub mod registry;

pub use block::{Block, LineState, PromptLine};
pub use log::{LogEntry, SessionLog};
pub use registry::SessionRegistry;

use crate::config::TerminalConfig;
use crate::interpreter::{Interpreter, Outcome};
use crate::path::{children_at, display_path, WorkingPath};
use crate::tree::{FsTree, Node};
use crate::types::EntryId;
use std::sync::Arc;
use tracing::debug;

/// Result of submitting one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// The log was emptied before the new entries were appended
    pub cleared: bool,
    /// Entries this submission touched, in log order: the frozen input line
    /// (unless cleared), the result if any, and the next prompt
    pub entries: Vec<LogEntry>,
}

pub struct Session {
    interpreter: Interpreter,
    path: WorkingPath,
    log: SessionLog,
    user: String,
    host: String,
}

impl Session {
    /// Mount a session over `tree`. The log starts with one editable prompt.
    pub fn new(tree: Arc<FsTree>, config: &TerminalConfig) -> Self {
        let interpreter =
            Interpreter::new(tree).with_strict_arguments(config.strict_arguments);
        let mut session = Self {
            interpreter,
            path: WorkingPath::root(),
            log: SessionLog::new(),
            user: config.user.clone(),
            host: config.host.clone(),
        };
        session.push_prompt();
        session
    }

    pub fn path(&self) -> &WorkingPath {
        &self.path
    }

    pub fn display_path(&self) -> String {
        display_path(&self.path)
    }

    pub fn log(&self) -> &SessionLog {
        &self.log
    }

    /// Children of the current working directory
    pub fn current_children(&self) -> &[Node] {
        children_at(self.interpreter.tree(), &self.path)
    }

    /// The live prompt at the bottom of the log
    pub fn prompt(&self) -> Option<&PromptLine> {
        self.log
            .last()
            .and_then(|entry| entry.block.as_prompt())
            .filter(|line| line.is_editable())
    }

    /// Submit `text` as the live prompt's input.
    ///
    /// The prompt is frozen with `text`, the command runs to completion, and
    /// the log grows by the result (if any) and a fresh prompt. `clear`
    /// empties the log first, frozen line included.
    pub fn submit_line(&mut self, text: &str) -> Submission {
        let frozen = self.freeze_prompt(text);
        let outcome = self.interpreter.execute(&mut self.path, text);

        let cleared = matches!(outcome, Outcome::Clear);
        if cleared {
            self.log.clear();
        }

        let mark = match (cleared, frozen) {
            (false, Some(id)) => id,
            _ => self.log.next_id(),
        };

        if let Outcome::Output(output) = outcome {
            self.log.add_entry(Block::Output { output });
        }
        self.push_prompt();

        debug!(
            cleared,
            log_len = self.log.len(),
            location = %self.display_path(),
            "Line submitted"
        );
        Submission {
            cleared,
            entries: self.log.since(mark).to_vec(),
        }
    }

    fn freeze_prompt(&mut self, text: &str) -> Option<EntryId> {
        let entry = self.log.last_mut()?;
        match &mut entry.block {
            Block::Prompt(line) if line.is_editable() => {
                line.input = text.to_string();
                line.state = LineState::Submitted;
                Some(entry.id)
            }
            _ => None,
        }
    }

    fn push_prompt(&mut self) -> EntryId {
        let line = PromptLine {
            user: self.user.clone(),
            host: self.host.clone(),
            location: self.display_path(),
            input: String::new(),
            state: LineState::Editable,
        };
        self.log.add_entry(Block::Prompt(line))
    }
}

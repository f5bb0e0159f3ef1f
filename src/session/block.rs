//! Rendered units of the session log.

use crate::interpreter::Output;
use serde::Serialize;

/// Whether a prompt line still accepts input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineState {
    Editable,
    Submitted,
}

/// A prompt line: `user@host ~/path > input`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptLine {
    pub user: String,
    pub host: String,
    /// Working path as displayed when the prompt was created
    pub location: String,
    pub input: String,
    pub state: LineState,
}

impl PromptLine {
    pub fn is_editable(&self) -> bool {
        self.state == LineState::Editable
    }
}

/// One block in the log
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "block", rename_all = "snake_case")]
pub enum Block {
    Prompt(PromptLine),
    Output { output: Output },
}

impl Block {
    pub fn as_prompt(&self) -> Option<&PromptLine> {
        match self {
            Block::Prompt(line) => Some(line),
            Block::Output { .. } => None,
        }
    }
}

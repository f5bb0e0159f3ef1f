//! Rendering of log blocks for terminal and machine front ends.

use crate::error::ApiError;
use crate::interpreter::{EntryKind, HelpEntry, ListingEntry, Output};
use crate::session::{Block, LogEntry, PromptLine};
use crate::tree::{Content, Span, Tone};
use comfy_table::presets::NOTHING;
use comfy_table::{Cell, Color, Table};
use owo_colors::{AnsiColors, OwoColorize};

const BULLET: &str = "\u{2022}";

fn ansi_color(tone: Tone) -> AnsiColors {
    match tone {
        Tone::Teal => AnsiColors::Cyan,
        Tone::Rose => AnsiColors::BrightRed,
        Tone::Yellow => AnsiColors::Yellow,
        Tone::Blue => AnsiColors::Blue,
        Tone::Slate => AnsiColors::BrightBlack,
    }
}

/// Renders blocks as ANSI (or plain) text
#[derive(Debug, Clone)]
pub struct TextRenderer {
    color: bool,
    columns: usize,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl TextRenderer {
    pub fn new(color: bool) -> Self {
        Self { color, columns: 4 }
    }

    /// Number of columns in `ls` grids
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns.max(1);
        self
    }

    fn paint(&self, text: &str, tone: Option<Tone>, bold: bool) -> String {
        if !self.color {
            return text.to_string();
        }
        match (tone, bold) {
            (Some(tone), true) => text.color(ansi_color(tone)).bold().to_string(),
            (Some(tone), false) => text.color(ansi_color(tone)).to_string(),
            (None, true) => text.bold().to_string(),
            (None, false) => text.to_string(),
        }
    }

    /// `user@host location > ` without the input
    pub fn prompt_prefix(&self, line: &PromptLine) -> String {
        format!(
            "{} {} {} ",
            self.paint(&format!("{}@{}", line.user, line.host), Some(Tone::Teal), false),
            self.paint(&line.location, Some(Tone::Rose), false),
            self.paint(">", Some(Tone::Slate), true),
        )
    }

    pub fn render_entry(&self, entry: &LogEntry) -> String {
        self.render_block(&entry.block)
    }

    pub fn render_block(&self, block: &Block) -> String {
        match block {
            Block::Prompt(line) => format!("{}{}", self.prompt_prefix(line), line.input),
            Block::Output { output } => self.render_output(output),
        }
    }

    pub fn render_output(&self, output: &Output) -> String {
        match output {
            Output::Help(entries) => self.render_help(entries),
            Output::Listing(entries) => self.render_listing(entries),
            Output::Content(content) => self.render_content(content),
            Output::Error(err) => err.to_string(),
        }
    }

    fn render_help(&self, entries: &[HelpEntry]) -> String {
        entries
            .iter()
            .map(|entry| {
                format!(
                    "  {} {} - {}",
                    BULLET,
                    self.paint(entry.usage, Some(Tone::Yellow), false),
                    entry.description
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_listing(&self, entries: &[ListingEntry]) -> String {
        if entries.is_empty() {
            return String::new();
        }
        let mut table = Table::new();
        table.load_preset(NOTHING);
        if !self.color {
            table.force_no_tty();
        }
        for row in entries.chunks(self.columns) {
            table.add_row(row.iter().map(|entry| {
                let cell = Cell::new(&entry.title);
                if entry.kind == EntryKind::Directory && self.color {
                    cell.fg(Color::Blue)
                } else {
                    cell
                }
            }));
        }
        table
            .lines()
            .map(|line| line.trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn render_content(&self, content: &Content) -> String {
        match content {
            Content::Plain(text) => text.clone(),
            Content::List { items } => items
                .iter()
                .map(|item| format!("  {} {}", BULLET, item))
                .collect::<Vec<_>>()
                .join("\n"),
            Content::Spans { spans } => spans
                .iter()
                .map(|Span { text, tone, bold }| self.paint(text, *tone, *bold))
                .collect(),
        }
    }
}

/// Entries as a JSON array, for non-terminal front ends
pub fn render_json(entries: &[LogEntry]) -> Result<serde_json::Value, ApiError> {
    Ok(serde_json::to_value(entries)?)
}

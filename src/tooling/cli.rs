//! CLI Tooling
//!
//! Command-line front end for the terminal core: an interactive prompt over
//! stdin/stdout, a scripted transcript runner, and a tree inspector.

use crate::config::{ConfigLoader, DesktermConfig};
use crate::error::ApiError;
use crate::render::{render_json, TextRenderer};
use crate::session::{LogEntry, Session};
use crate::tree::FsTree;
use clap::{Parser, Subcommand};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use serde_json::json;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Deskterm CLI - virtual filesystem terminal
#[derive(Parser)]
#[command(name = "deskterm")]
#[command(about = "Terminal emulator over a static virtual filesystem")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (layered over the global config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Tree definition file (toml, yaml or json); overrides the config
    #[arg(long, global = true)]
    pub fs: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start an interactive terminal session
    Repl {
        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// Run lines through one session and print the transcript
    Run {
        /// Lines to submit, in order
        #[arg(required_unless_present = "script")]
        lines: Vec<String>,
        /// Read lines from a file instead (one per line)
        #[arg(long, conflicts_with = "lines")]
        script: Option<PathBuf>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Print the configured virtual filesystem
    Tree {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

impl Cli {
    /// Fold the logging flags into the loaded configuration
    pub fn apply_logging_overrides(&self, config: &mut DesktermConfig) {
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.logging.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            config.logging.output = output.clone();
        }
        if self.log_file.is_some() {
            config.logging.file = self.log_file.clone();
        }
    }
}

/// Loaded configuration plus the shared tree every session runs against
pub struct CliContext {
    config: DesktermConfig,
    tree: Arc<FsTree>,
}

impl CliContext {
    /// Load configuration and build the tree. `fs_path` wins over the
    /// configured definition file.
    pub fn new(config_path: Option<&Path>, fs_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let mut config = match config_path {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load()?,
        };
        if fs_path.is_some() {
            config.filesystem.definition = fs_path;
        }
        Self::from_config(config)
    }

    pub fn from_config(config: DesktermConfig) -> Result<Self, ApiError> {
        let tree = FsTree::load(config.filesystem.definition.as_deref())?;
        Ok(Self {
            config,
            tree: Arc::new(tree),
        })
    }

    pub fn config(&self) -> &DesktermConfig {
        &self.config
    }

    pub fn tree(&self) -> &Arc<FsTree> {
        &self.tree
    }

    /// Mount a fresh session over the shared tree
    pub fn open_session(&self) -> Session {
        Session::new(Arc::clone(&self.tree), &self.config.terminal)
    }

    /// Execute a non-interactive command and return its output
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Repl { .. } => Err(ApiError::ConfigError(
                "repl is interactive; use run_repl".to_string(),
            )),
            Commands::Run {
                lines,
                script,
                format,
            } => {
                let lines = match script {
                    Some(path) => std::fs::read_to_string(path)?
                        .lines()
                        .map(str::to_string)
                        .collect(),
                    None => lines.clone(),
                };
                self.run_lines(&lines, format)
            }
            Commands::Tree { format } => self.format_tree(format),
        }
    }

    /// Submit `lines` through one session; returns the resulting log.
    fn run_lines(&self, lines: &[String], format: &str) -> Result<String, ApiError> {
        check_format(format)?;
        let mut session = self.open_session();
        for line in lines {
            session.submit_line(line);
        }
        info!(lines = lines.len(), "Script finished");

        let entries = session.log().entries();
        if format == "json" {
            return Ok(serde_json::to_string_pretty(&json!({
                "location": session.display_path(),
                "entries": render_json(entries)?,
            }))?);
        }
        let renderer = TextRenderer::new(false);
        Ok(render_transcript(&renderer, entries))
    }

    fn format_tree(&self, format: &str) -> Result<String, ApiError> {
        check_format(format)?;
        let mut rows = Vec::new();
        let mut trail: Vec<&str> = Vec::new();
        for (depth, node) in self.tree.walk() {
            trail.truncate(depth);
            trail.push(&node.title);
            rows.push((
                format!("~/{}", trail.join("/")),
                if node.is_directory() { "directory" } else { "file" },
                node.id.short(),
            ));
        }

        if format == "json" {
            let nodes: Vec<_> = rows
                .iter()
                .map(|(path, kind, id)| json!({ "path": path, "kind": kind, "id": id }))
                .collect();
            return Ok(serde_json::to_string_pretty(&json!({
                "node_count": rows.len(),
                "nodes": nodes,
            }))?);
        }

        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        table.set_header(vec!["Path", "Kind", "Id"]);
        for (path, kind, id) in &rows {
            table.add_row(vec![path.clone(), kind.to_string(), id.clone()]);
        }
        Ok(format!("{}\nTotal: {} nodes.", table, rows.len()))
    }

    /// Interactive loop: prompt, read a line, print the result, repeat
    /// until EOF.
    pub fn run_repl<R: BufRead, W: Write>(
        &self,
        input: R,
        output: &mut W,
        color: bool,
    ) -> Result<(), ApiError> {
        let renderer = TextRenderer::new(color);
        let mut session = self.open_session();
        info!("Interactive session started");

        writeln!(output, "{}", self.config.terminal.banner)?;
        let mut lines = input.lines();
        loop {
            if let Some(prompt) = session.prompt() {
                write!(output, "{}", renderer.prompt_prefix(prompt))?;
            }
            output.flush()?;

            let line = match lines.next() {
                Some(line) => line?,
                None => break,
            };
            let submission = session.submit_line(&line);
            if submission.cleared && color {
                // Clear screen and home the cursor
                write!(output, "{}", CLEAR_SCREEN)?;
            }
            for entry in &submission.entries {
                if entry.block.as_prompt().is_some() {
                    continue;
                }
                let rendered = renderer.render_entry(entry);
                if !rendered.is_empty() {
                    writeln!(output, "{}", rendered)?;
                }
            }
        }
        writeln!(output)?;
        info!("Interactive session ended");
        Ok(())
    }
}

fn check_format(format: &str) -> Result<(), ApiError> {
    match format {
        "text" | "json" => Ok(()),
        other => Err(ApiError::ConfigError(format!(
            "Invalid output format: {} (must be 'text' or 'json')",
            other
        ))),
    }
}

/// Render a log as a plain transcript, one block per line group. The trailing
/// editable prompt is left out.
fn render_transcript(renderer: &TextRenderer, entries: &[LogEntry]) -> String {
    entries
        .iter()
        .filter(|entry| {
            entry
                .block
                .as_prompt()
                .map(|line| !line.is_editable())
                .unwrap_or(true)
        })
        .map(|entry| renderer.render_entry(entry))
        .filter(|rendered| !rendered.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

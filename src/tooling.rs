//! Tooling & Integration Layer
//!
//! Front ends that drive the terminal core from a real terminal or a script.

pub mod cli;

pub use cli::{Cli, CliContext, Commands};

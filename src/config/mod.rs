//! Configuration
//!
//! Layered configuration built with the `config` crate: built-in defaults,
//! then the global file, then an explicit file, then `DESKTERM__*`
//! environment variables.

pub mod facade;
pub mod merge;
pub mod paths;
pub mod sources;

pub use facade::ConfigLoader;

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_user() -> String {
    "shawkee".to_string()
}

fn default_host() -> String {
    "macbook-pro".to_string()
}

fn default_banner() -> String {
    "Hello World! Type `help` to get started".to_string()
}

/// Prompt and interpreter settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalConfig {
    /// User shown in the prompt
    #[serde(default = "default_user")]
    pub user: String,

    /// Host shown in the prompt
    #[serde(default = "default_host")]
    pub host: String,

    /// Line printed once when the terminal opens
    #[serde(default = "default_banner")]
    pub banner: String,

    /// Reject extra arguments instead of ignoring them
    #[serde(default)]
    pub strict_arguments: bool,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            user: default_user(),
            host: default_host(),
            banner: default_banner(),
            strict_arguments: false,
        }
    }
}

/// Where the virtual tree comes from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilesystemConfig {
    /// Tree definition file (toml, yaml or json); built-in tree when unset
    #[serde(default)]
    pub definition: Option<PathBuf>,
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DesktermConfig {
    #[serde(default)]
    pub terminal: TerminalConfig,

    #[serde(default)]
    pub filesystem: FilesystemConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

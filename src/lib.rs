//! Deskterm: Virtual Filesystem Terminal
//!
//! The terminal emulator of a simulated desktop: a read-eval-print loop that
//! interprets a small shell-like command language (`help`, `clear`, `cd`,
//! `ls`, `cat`) against a static, in-memory filesystem tree.

pub mod config;
pub mod error;
pub mod interpreter;
pub mod logging;
pub mod path;
pub mod render;
pub mod session;
pub mod tooling;
pub mod tree;
pub mod types;

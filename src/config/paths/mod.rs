//! Platform paths for configuration and state.

pub mod xdg_root;

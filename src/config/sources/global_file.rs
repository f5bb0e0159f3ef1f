//! Global config file source: `$XDG_CONFIG_HOME/deskterm/config.toml`

use crate::config::paths::xdg_root;
use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File};

/// Add the global config file to the builder when it exists.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    match xdg_root::global_config_path() {
        Some(path) if path.exists() => Ok(builder.add_source(File::from(path).required(false))),
        _ => Ok(builder),
    }
}

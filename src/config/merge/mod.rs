//! Config composition: source ordering and defaults.

pub mod service;

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError};

/// Builder seeded with the defaults every other source overrides.
pub(crate) fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    config::Config::builder()
        .set_default("terminal.strict_arguments", false)?
        .set_default("logging.enabled", true)
}

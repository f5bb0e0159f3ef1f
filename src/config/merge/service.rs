//! MergeService: orchestrates sources, applies merge policy, deserializes to DesktermConfig.

use crate::config::sources::{environment, global_file};
use crate::config::DesktermConfig;
use crate::error::ApiError;
use config::File;
use std::path::Path;
use tracing::debug;

use super::builder_with_defaults;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Load config from standard sources, with an optional explicit file.
    /// Precedence: global file (lowest) -> explicit file -> environment (highest).
    pub fn load(explicit: Option<&Path>) -> Result<DesktermConfig, ApiError> {
        let builder = builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ApiError::ConfigError(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                debug!(path = %path.display(), "Loading explicit config file");
                builder.add_source(File::from(path))
            }
            None => builder,
        };
        let builder = environment::add_to_builder(builder)?;

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }
}

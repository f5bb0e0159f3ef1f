//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::DesktermConfig;
use crate::error::ApiError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the global file and environment.
    pub fn load() -> Result<DesktermConfig, ApiError> {
        MergeService::load(None)
    }

    /// Load configuration with `path` layered over the global file.
    pub fn load_from_file(path: &Path) -> Result<DesktermConfig, ApiError> {
        MergeService::load(Some(path))
    }
}

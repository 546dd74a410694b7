//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::FsobjConfig;
use crate::error::ApiError;
use config::Map;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from an optional file and the process environment.
    pub fn load(path: Option<&Path>) -> Result<FsobjConfig, ApiError> {
        Ok(MergeService::load(path, None)?)
    }

    /// Load configuration with an explicit set of `FSOBJ__*` variables in
    /// place of the process environment.
    pub fn load_with_env(
        path: Option<&Path>,
        env: Map<String, String>,
    ) -> Result<FsobjConfig, ApiError> {
        Ok(MergeService::load(path, Some(env))?)
    }

    /// Create default configuration.
    pub fn default() -> FsobjConfig {
        FsobjConfig::default()
    }
}

//! MergeService: orchestrates sources and deserializes to FsobjConfig.

use crate::config::sources::{environment, file};
use crate::config::FsobjConfig;
use config::{Config, ConfigError, Map};
use std::path::Path;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Precedence: defaults (lowest) -> file -> environment (highest).
    pub fn load(
        path: Option<&Path>,
        env: Option<Map<String, String>>,
    ) -> Result<FsobjConfig, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = file::add_to_builder(builder, path);
        }
        let builder = environment::add_to_builder(builder, env);

        let config = builder.build()?;
        config.try_deserialize()
    }
}

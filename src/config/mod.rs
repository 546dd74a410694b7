//! Configuration for fsobj consumers.
//!
//! Sources, lowest precedence first: built-in defaults, an optional TOML file,
//! then `FSOBJ__*` environment variables (`__` separates nested keys).

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FsobjConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
}

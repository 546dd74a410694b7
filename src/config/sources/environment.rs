//! Environment variable source: FSOBJ_* prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;
use config::Map;

pub const ENV_PREFIX: &str = "FSOBJ";

/// Add environment variable overlay to builder.
///
/// `source` replaces the process environment when given.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    source: Option<Map<String, String>>,
) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true)
            .source(source),
    )
}

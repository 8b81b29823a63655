//! Configuration module for appconfig-synth
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (APPCONFIG_SYNTH_*)
//! 3. `appconfig.toml` in the source directory
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    apply_overrides, load_for_source, load_with_warnings, parse_with_warnings,
    with_env_overrides, ConfigWarning, LoadedConfig, CONFIG_FILE_NAME, ENV_PREFIX,
};
pub use types::{
    ApplicationConfig, Config, ContentConfig, EnvironmentConfig, OutputConfig, ProfileConfig,
    StackConfig, StrategyConfig, TemplateFormat, Verbosity,
};

//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::services::{StackDefinition, StrategySettings};
use crate::domain::value_objects::{GrowthType, ReplicateTo};

/// Stack-level settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StackConfig {
    #[serde(default = "default_stack_name")]
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            name: default_stack_name(),
            description: None,
        }
    }
}

fn default_stack_name() -> String {
    "AppConfigStack".to_string()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApplicationConfig {
    #[serde(default = "default_application_name")]
    pub name: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_application_name(),
        }
    }
}

fn default_application_name() -> String {
    "ConfigSourceDemo".to_string()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EnvironmentConfig {
    #[serde(default = "default_environment_name")]
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            name: default_environment_name(),
            description: None,
        }
    }
}

fn default_environment_name() -> String {
    "Sandbox".to_string()
}

/// Configuration profile settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProfileConfig {
    #[serde(default = "default_profile_name")]
    pub name: String,

    #[serde(default = "default_location_uri")]
    pub location_uri: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: default_profile_name(),
            location_uri: default_location_uri(),
        }
    }
}

fn default_profile_name() -> String {
    "json-profile".to_string()
}

fn default_location_uri() -> String {
    "hosted".to_string()
}

/// Which files hold the configuration versions
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContentConfig {
    #[serde(default = "default_initial")]
    pub initial: PathBuf,

    #[serde(default = "default_updated")]
    pub updated: PathBuf,

    #[serde(default = "default_content_type")]
    pub content_type: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            initial: default_initial(),
            updated: default_updated(),
            content_type: default_content_type(),
        }
    }
}

fn default_initial() -> PathBuf {
    PathBuf::from("config-v1.json")
}

fn default_updated() -> PathBuf {
    PathBuf::from("config-v2.json")
}

fn default_content_type() -> String {
    "application/json".to_string()
}

/// Deployment strategy settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StrategyConfig {
    #[serde(default = "default_strategy_name")]
    pub name: String,

    #[serde(default = "default_duration")]
    pub deployment_duration_minutes: u32,

    #[serde(default)]
    pub final_bake_time_minutes: u32,

    #[serde(default = "default_growth_factor")]
    pub growth_factor: f64,

    #[serde(default)]
    pub growth_type: Option<GrowthType>,

    #[serde(default)]
    pub replicate_to: ReplicateTo,

    #[serde(default)]
    pub description: Option<String>,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            name: default_strategy_name(),
            deployment_duration_minutes: default_duration(),
            final_bake_time_minutes: 0,
            growth_factor: default_growth_factor(),
            growth_type: None,
            replicate_to: ReplicateTo::None,
            description: None,
        }
    }
}

fn default_strategy_name() -> String {
    "Demo Strategy".to_string()
}

fn default_duration() -> u32 {
    1
}

fn default_growth_factor() -> f64 {
    100.0
}

/// Rendered template format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TemplateFormat {
    #[default]
    Json,
    #[serde(alias = "yml")]
    Yaml,
}

impl TemplateFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            TemplateFormat::Json => "json",
            TemplateFormat::Yaml => "yaml",
        }
    }
}

/// Output verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Map a `-v` count onto a level, never going below `base`
    pub fn from_flag_count(base: Verbosity, count: u8) -> Verbosity {
        let from_flags = match count {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        };
        if count == 0 {
            base
        } else {
            base.max(from_flags)
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: TemplateFormat,

    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default = "default_out_dir")]
    pub directory: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: TemplateFormat::default(),
            verbosity: Verbosity::default(),
            directory: default_out_dir(),
        }
    }
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("synth.out")
}

/// Complete `appconfig.toml` contents
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub stack: StackConfig,

    #[serde(default)]
    pub application: ApplicationConfig,

    #[serde(default)]
    pub environment: EnvironmentConfig,

    #[serde(default)]
    pub profile: ProfileConfig,

    #[serde(default)]
    pub content: ContentConfig,

    #[serde(default)]
    pub strategy: StrategyConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Literal values for the stack builder
    pub fn definition(&self) -> StackDefinition {
        StackDefinition {
            stack_name: self.stack.name.clone(),
            description: self.stack.description.clone(),
            application_name: self.application.name.clone(),
            environment_name: self.environment.name.clone(),
            environment_description: self.environment.description.clone(),
            profile_name: self.profile.name.clone(),
            location_uri: self.profile.location_uri.clone(),
            content_type: self.content.content_type.clone(),
            strategy: StrategySettings {
                name: self.strategy.name.clone(),
                deployment_duration_minutes: self.strategy.deployment_duration_minutes,
                final_bake_time_minutes: self.strategy.final_bake_time_minutes,
                growth_factor: self.strategy.growth_factor,
                growth_type: self.strategy.growth_type,
                replicate_to: self.strategy.replicate_to,
                description: self.strategy.description.clone(),
            },
        }
    }

    /// Paths of the initial and updated content files, resolved against `source_dir`
    pub fn content_paths(&self, source_dir: &Path) -> (PathBuf, PathBuf) {
        (
            source_dir.join(&self.content.initial),
            source_dir.join(&self.content.updated),
        )
    }
}

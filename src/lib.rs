//! appconfig-synth - AWS AppConfig stack synthesizer
//!
//! Declares an AppConfig application, environment, configuration profile,
//! hosted configuration version, deployment strategy and deployment from two
//! JSON content files, and renders them as a CloudFormation template.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod fs;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    CheckReport, CheckUseCase, DiffResult, DiffUseCase, SynthOptions, SynthReport, SynthUseCase,
};
pub use config::{Config, TemplateFormat, Verbosity};
pub use domain::entities::{ContentSource, ContentSources, ResourceRef, Template};
pub use domain::services::{build_stack, Stack, StackDefinition};
pub use domain::value_objects::{ContentHash, LogicalId, ResourceKind};
pub use error::{SynthError, SynthResult};

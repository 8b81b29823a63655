//! Domain Entities
//!
//! - `ContentSource` - a configuration payload read from disk
//! - `Resource` - one declared AppConfig resource and its typed properties
//! - `StackOutput` - an exported resource identifier
//! - `Template` - the ordered resource/output table that renders to CloudFormation

mod content_source;
mod output;
mod resource;
mod template;

pub use content_source::{ContentSource, ContentSources};
pub use output::StackOutput;
pub use resource::{
    ApplicationProps, ConfigurationProfileProps, DeploymentProps, DeploymentStrategyProps,
    EnvironmentProps, HostedConfigurationVersionProps, ReferenceField, Resource,
    ResourceProperties, ResourceRef,
};
pub use template::{Template, TEMPLATE_FORMAT_VERSION};

//! Stack Builder
//!
//! Assembles the AppConfig stack: six resource declarations in dependency
//! order and three exported identifiers. Pure; content arrives already read.

use crate::domain::entities::{
    ApplicationProps, ConfigurationProfileProps, ContentSource, ContentSources, DeploymentProps,
    DeploymentStrategyProps, EnvironmentProps, HostedConfigurationVersionProps,
    ResourceProperties, ResourceRef, Template,
};
use crate::domain::value_objects::{GrowthType, ReplicateTo};
use crate::error::{SynthError, SynthResult};

/// Construct ids of the declared resources
pub mod construct_ids {
    pub const APPLICATION: &str = "ac-app-configsourcedemo";
    pub const ENVIRONMENT: &str = "ac-env-sandbox";
    pub const PROFILE: &str = "ac-prf-json";
    pub const HOSTED_VERSION: &str = "ac-hcv-v1";
    pub const STRATEGY: &str = "ac-dep-strat-demo";
    pub const DEPLOYMENT: &str = "ac-dep-alpha";
}

/// Output ids, which double as export names
pub mod output_ids {
    pub const APP_ID: &str = "appId";
    pub const ENV_ID: &str = "envId";
    pub const CONFIG_PROFILE_ID: &str = "configProfileId";
}

/// Rollout policy parameters
#[derive(Debug, Clone, PartialEq)]
pub struct StrategySettings {
    pub name: String,
    pub deployment_duration_minutes: u32,
    pub final_bake_time_minutes: u32,
    pub growth_factor: f64,
    pub growth_type: Option<GrowthType>,
    pub replicate_to: ReplicateTo,
    pub description: Option<String>,
}

impl StrategySettings {
    /// Longest duration or bake time the service accepts, in minutes
    pub const MAX_MINUTES: u32 = 1440;

    pub fn validate(&self) -> SynthResult<()> {
        if self.name.trim().is_empty() {
            return Err(invalid_strategy("name must not be empty"));
        }
        if self.deployment_duration_minutes > Self::MAX_MINUTES {
            return Err(invalid_strategy(format!(
                "deployment duration {} exceeds {} minutes",
                self.deployment_duration_minutes,
                Self::MAX_MINUTES
            )));
        }
        if self.final_bake_time_minutes > Self::MAX_MINUTES {
            return Err(invalid_strategy(format!(
                "final bake time {} exceeds {} minutes",
                self.final_bake_time_minutes,
                Self::MAX_MINUTES
            )));
        }
        if !(1.0..=100.0).contains(&self.growth_factor) {
            return Err(invalid_strategy(format!(
                "growth factor {} must be between 1 and 100",
                self.growth_factor
            )));
        }
        Ok(())
    }
}

impl Default for StrategySettings {
    fn default() -> Self {
        Self {
            name: "Demo Strategy".to_string(),
            deployment_duration_minutes: 1,
            final_bake_time_minutes: 0,
            growth_factor: 100.0,
            growth_type: None,
            replicate_to: ReplicateTo::None,
            description: None,
        }
    }
}

fn invalid_strategy(message: impl Into<String>) -> SynthError {
    SynthError::InvalidStrategy {
        message: message.into(),
    }
}

/// Literal values the stack is declared with
#[derive(Debug, Clone, PartialEq)]
pub struct StackDefinition {
    pub stack_name: String,
    pub description: Option<String>,
    pub application_name: String,
    pub environment_name: String,
    pub environment_description: Option<String>,
    pub profile_name: String,
    pub location_uri: String,
    pub content_type: String,
    pub strategy: StrategySettings,
}

impl Default for StackDefinition {
    fn default() -> Self {
        Self {
            stack_name: "AppConfigStack".to_string(),
            description: None,
            application_name: "ConfigSourceDemo".to_string(),
            environment_name: "Sandbox".to_string(),
            environment_description: None,
            profile_name: "json-profile".to_string(),
            location_uri: "hosted".to_string(),
            content_type: "application/json".to_string(),
            strategy: StrategySettings::default(),
        }
    }
}

impl StackDefinition {
    /// CloudFormation limit on stack name length
    pub const MAX_STACK_NAME_LEN: usize = 128;

    /// Stack names start with a letter and contain only letters, digits and hyphens
    pub fn validate_stack_name(&self) -> SynthResult<()> {
        let name = &self.stack_name;
        let invalid = |reason: &str| SynthError::InvalidStackName {
            name: name.clone(),
            reason: reason.to_string(),
        };

        if !name.starts_with(|c: char| c.is_ascii_alphabetic()) {
            return Err(invalid("must start with a letter"));
        }
        if name.len() > Self::MAX_STACK_NAME_LEN {
            return Err(invalid("longer than 128 characters"));
        }
        if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(invalid("only letters, digits and hyphens are allowed"));
        }
        Ok(())
    }
}

/// A synthesized stack: the template plus handles to each declaration
#[derive(Debug, Clone)]
pub struct Stack {
    pub name: String,
    pub template: Template,
    pub application: ResourceRef,
    pub environment: ResourceRef,
    pub profile: ResourceRef,
    pub hosted_version: ResourceRef,
    pub strategy: ResourceRef,
    pub deployment: ResourceRef,
    /// Content wired into the deployment
    pub attached: ContentSource,
    /// Content read but not referenced by any deployment
    pub unattached: Vec<ContentSource>,
}

/// Declare the stack from its definition and already-read content
pub fn build_stack(definition: &StackDefinition, sources: &ContentSources) -> SynthResult<Stack> {
    definition.validate_stack_name()?;
    definition.strategy.validate()?;

    let mut template = match &definition.description {
        Some(description) => Template::with_description(description.clone()),
        None => Template::new(),
    };

    let application = template.declare(
        construct_ids::APPLICATION,
        ResourceProperties::Application(ApplicationProps {
            name: definition.application_name.clone(),
            description: None,
        }),
    )?;

    let environment = template.declare(
        construct_ids::ENVIRONMENT,
        ResourceProperties::Environment(EnvironmentProps {
            application_id: application.clone(),
            name: definition.environment_name.clone(),
            description: definition.environment_description.clone(),
        }),
    )?;

    let profile = template.declare(
        construct_ids::PROFILE,
        ResourceProperties::ConfigurationProfile(ConfigurationProfileProps {
            application_id: application.clone(),
            name: definition.profile_name.clone(),
            location_uri: definition.location_uri.clone(),
        }),
    )?;

    let hosted_version = template.declare(
        construct_ids::HOSTED_VERSION,
        ResourceProperties::HostedConfigurationVersion(HostedConfigurationVersionProps {
            application_id: application.clone(),
            configuration_profile_id: profile.clone(),
            content_type: definition.content_type.clone(),
            content: sources.initial.content().to_string(),
        }),
    )?;

    let settings = &definition.strategy;
    let strategy = template.declare(
        construct_ids::STRATEGY,
        ResourceProperties::DeploymentStrategy(DeploymentStrategyProps {
            name: settings.name.clone(),
            deployment_duration_in_minutes: settings.deployment_duration_minutes,
            final_bake_time_in_minutes: settings.final_bake_time_minutes,
            growth_factor: settings.growth_factor,
            growth_type: settings.growth_type,
            replicate_to: settings.replicate_to,
            description: settings.description.clone(),
        }),
    )?;

    let deployment = template.declare(
        construct_ids::DEPLOYMENT,
        ResourceProperties::Deployment(DeploymentProps {
            application_id: application.clone(),
            configuration_profile_id: profile.clone(),
            deployment_strategy_id: strategy.clone(),
            configuration_version: hosted_version.clone(),
            environment_id: environment.clone(),
        }),
    )?;

    template.export(output_ids::APP_ID, &application, output_ids::APP_ID)?;
    template.export(output_ids::ENV_ID, &environment, output_ids::ENV_ID)?;
    template.export(
        output_ids::CONFIG_PROFILE_ID,
        &profile,
        output_ids::CONFIG_PROFILE_ID,
    )?;

    Ok(Stack {
        name: definition.stack_name.clone(),
        template,
        application,
        environment,
        profile,
        hosted_version,
        strategy,
        deployment,
        attached: sources.initial.clone(),
        unattached: vec![sources.updated.clone()],
    })
}

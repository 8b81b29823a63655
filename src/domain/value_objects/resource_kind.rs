//! ResourceKind value object - the six AppConfig resource types a stack declares

use std::fmt;

use serde::Serialize;

/// Kind of a declared AppConfig resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceKind {
    Application,
    Environment,
    ConfigurationProfile,
    HostedConfigurationVersion,
    DeploymentStrategy,
    Deployment,
}

impl ResourceKind {
    /// Every kind, in the order a stack declares them
    pub const ALL: [ResourceKind; 6] = [
        ResourceKind::Application,
        ResourceKind::Environment,
        ResourceKind::ConfigurationProfile,
        ResourceKind::HostedConfigurationVersion,
        ResourceKind::DeploymentStrategy,
        ResourceKind::Deployment,
    ];

    /// CloudFormation resource type name
    pub fn cfn_type(&self) -> &'static str {
        match self {
            ResourceKind::Application => "AWS::AppConfig::Application",
            ResourceKind::Environment => "AWS::AppConfig::Environment",
            ResourceKind::ConfigurationProfile => "AWS::AppConfig::ConfigurationProfile",
            ResourceKind::HostedConfigurationVersion => {
                "AWS::AppConfig::HostedConfigurationVersion"
            }
            ResourceKind::DeploymentStrategy => "AWS::AppConfig::DeploymentStrategy",
            ResourceKind::Deployment => "AWS::AppConfig::Deployment",
        }
    }

    /// Lower-case human name, without article
    pub fn display_name(&self) -> &'static str {
        match self {
            ResourceKind::Application => "application",
            ResourceKind::Environment => "environment",
            ResourceKind::ConfigurationProfile => "configuration profile",
            ResourceKind::HostedConfigurationVersion => "hosted configuration version",
            ResourceKind::DeploymentStrategy => "deployment strategy",
            ResourceKind::Deployment => "deployment",
        }
    }
}

/// Formats with an indefinite article ("an application", "a deployment")
/// so it reads naturally inside error messages.
impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.display_name();
        let article = if name.starts_with(['a', 'e', 'i', 'o', 'u']) {
            "an"
        } else {
            "a"
        };
        write!(f, "{} {}", article, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cfn_types_are_appconfig_namespaced() {
        for kind in ResourceKind::ALL {
            assert!(kind.cfn_type().starts_with("AWS::AppConfig::"));
        }
    }

    #[test]
    fn display_uses_article() {
        assert_eq!(ResourceKind::Application.to_string(), "an application");
        assert_eq!(ResourceKind::Environment.to_string(), "an environment");
        assert_eq!(ResourceKind::Deployment.to_string(), "a deployment");
        assert_eq!(
            ResourceKind::HostedConfigurationVersion.to_string(),
            "a hosted configuration version"
        );
    }
}

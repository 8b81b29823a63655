//! Resource entity - one declared AppConfig resource
//!
//! Each resource is a plain record: a construct id, the logical id derived from
//! it, and typed CloudFormation properties. Cross-resource links are
//! `ResourceRef` values, which only a `Template` hands out.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::domain::value_objects::{GrowthType, LogicalId, ReplicateTo, ResourceKind};

/// Handle to a declared resource, rendered as `{"Ref": "<logicalId>"}`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceRef {
    logical_id: LogicalId,
    kind: ResourceKind,
}

impl ResourceRef {
    pub fn new(logical_id: LogicalId, kind: ResourceKind) -> Self {
        Self { logical_id, kind }
    }

    pub fn logical_id(&self) -> &LogicalId {
        &self.logical_id
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }
}

impl Serialize for ResourceRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("Ref", self.logical_id.as_str())?;
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApplicationProps {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnvironmentProps {
    pub application_id: ResourceRef,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConfigurationProfileProps {
    pub application_id: ResourceRef,
    pub name: String,
    pub location_uri: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct HostedConfigurationVersionProps {
    pub application_id: ResourceRef,
    pub configuration_profile_id: ResourceRef,
    pub content_type: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeploymentStrategyProps {
    pub name: String,
    pub deployment_duration_in_minutes: u32,
    pub final_bake_time_in_minutes: u32,
    pub growth_factor: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub growth_type: Option<GrowthType>,
    pub replicate_to: ReplicateTo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeploymentProps {
    pub application_id: ResourceRef,
    pub configuration_profile_id: ResourceRef,
    pub deployment_strategy_id: ResourceRef,
    pub configuration_version: ResourceRef,
    pub environment_id: ResourceRef,
}

/// Typed properties of a resource; serializes to `{"Type": ..., "Properties": {...}}`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "Type", content = "Properties")]
pub enum ResourceProperties {
    #[serde(rename = "AWS::AppConfig::Application")]
    Application(ApplicationProps),
    #[serde(rename = "AWS::AppConfig::Environment")]
    Environment(EnvironmentProps),
    #[serde(rename = "AWS::AppConfig::ConfigurationProfile")]
    ConfigurationProfile(ConfigurationProfileProps),
    #[serde(rename = "AWS::AppConfig::HostedConfigurationVersion")]
    HostedConfigurationVersion(HostedConfigurationVersionProps),
    #[serde(rename = "AWS::AppConfig::DeploymentStrategy")]
    DeploymentStrategy(DeploymentStrategyProps),
    #[serde(rename = "AWS::AppConfig::Deployment")]
    Deployment(DeploymentProps),
}

/// One reference field of a resource, with the kind it must point at
#[derive(Debug, Clone, Copy)]
pub struct ReferenceField<'a> {
    pub property: &'static str,
    pub expected: ResourceKind,
    pub target: &'a ResourceRef,
}

impl<'a> ReferenceField<'a> {
    fn new(property: &'static str, expected: ResourceKind, target: &'a ResourceRef) -> Self {
        Self {
            property,
            expected,
            target,
        }
    }
}

impl ResourceProperties {
    pub fn kind(&self) -> ResourceKind {
        match self {
            ResourceProperties::Application(_) => ResourceKind::Application,
            ResourceProperties::Environment(_) => ResourceKind::Environment,
            ResourceProperties::ConfigurationProfile(_) => ResourceKind::ConfigurationProfile,
            ResourceProperties::HostedConfigurationVersion(_) => {
                ResourceKind::HostedConfigurationVersion
            }
            ResourceProperties::DeploymentStrategy(_) => ResourceKind::DeploymentStrategy,
            ResourceProperties::Deployment(_) => ResourceKind::Deployment,
        }
    }

    /// Every reference field, in property order
    pub fn references(&self) -> Vec<ReferenceField<'_>> {
        use ResourceKind as K;
        match self {
            ResourceProperties::Application(_) | ResourceProperties::DeploymentStrategy(_) => {
                Vec::new()
            }
            ResourceProperties::Environment(p) => {
                vec![ReferenceField::new("ApplicationId", K::Application, &p.application_id)]
            }
            ResourceProperties::ConfigurationProfile(p) => {
                vec![ReferenceField::new("ApplicationId", K::Application, &p.application_id)]
            }
            ResourceProperties::HostedConfigurationVersion(p) => vec![
                ReferenceField::new("ApplicationId", K::Application, &p.application_id),
                ReferenceField::new(
                    "ConfigurationProfileId",
                    K::ConfigurationProfile,
                    &p.configuration_profile_id,
                ),
            ],
            ResourceProperties::Deployment(p) => vec![
                ReferenceField::new("ApplicationId", K::Application, &p.application_id),
                ReferenceField::new(
                    "ConfigurationProfileId",
                    K::ConfigurationProfile,
                    &p.configuration_profile_id,
                ),
                ReferenceField::new(
                    "DeploymentStrategyId",
                    K::DeploymentStrategy,
                    &p.deployment_strategy_id,
                ),
                ReferenceField::new(
                    "ConfigurationVersion",
                    K::HostedConfigurationVersion,
                    &p.configuration_version,
                ),
                ReferenceField::new("EnvironmentId", K::Environment, &p.environment_id),
            ],
        }
    }

    /// The human-facing name of the resource, if it has one
    pub fn name(&self) -> Option<&str> {
        match self {
            ResourceProperties::Application(p) => Some(&p.name),
            ResourceProperties::Environment(p) => Some(&p.name),
            ResourceProperties::ConfigurationProfile(p) => Some(&p.name),
            ResourceProperties::DeploymentStrategy(p) => Some(&p.name),
            ResourceProperties::HostedConfigurationVersion(_)
            | ResourceProperties::Deployment(_) => None,
        }
    }
}

/// A declared resource
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    construct_id: String,
    logical_id: LogicalId,
    properties: ResourceProperties,
}

impl Resource {
    pub(crate) fn new(
        construct_id: impl Into<String>,
        logical_id: LogicalId,
        properties: ResourceProperties,
    ) -> Self {
        Self {
            construct_id: construct_id.into(),
            logical_id,
            properties,
        }
    }

    pub fn construct_id(&self) -> &str {
        &self.construct_id
    }

    pub fn logical_id(&self) -> &LogicalId {
        &self.logical_id
    }

    pub fn kind(&self) -> ResourceKind {
        self.properties.kind()
    }

    pub fn properties(&self) -> &ResourceProperties {
        &self.properties
    }

    /// Handle to this resource
    pub fn reference(&self) -> ResourceRef {
        ResourceRef::new(self.logical_id.clone(), self.kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn app_ref() -> ResourceRef {
        ResourceRef::new(
            LogicalId::from_construct_id("ac-app").unwrap(),
            ResourceKind::Application,
        )
    }

    #[test]
    fn reference_serializes_as_ref_intrinsic() {
        let value = serde_json::to_value(app_ref()).unwrap();
        assert_eq!(value, json!({ "Ref": "acapp" }));
    }

    #[test]
    fn properties_serialize_with_type_and_pascal_case() {
        let props = ResourceProperties::ConfigurationProfile(ConfigurationProfileProps {
            application_id: app_ref(),
            name: "json-profile".to_string(),
            location_uri: "hosted".to_string(),
        });

        let value = serde_json::to_value(&props).unwrap();
        assert_eq!(
            value,
            json!({
                "Type": "AWS::AppConfig::ConfigurationProfile",
                "Properties": {
                    "ApplicationId": { "Ref": "acapp" },
                    "Name": "json-profile",
                    "LocationUri": "hosted"
                }
            })
        );
    }

    #[test]
    fn strategy_omits_unset_optionals() {
        let props = ResourceProperties::DeploymentStrategy(DeploymentStrategyProps {
            name: "Demo Strategy".to_string(),
            deployment_duration_in_minutes: 1,
            final_bake_time_in_minutes: 0,
            growth_factor: 100.0,
            growth_type: None,
            replicate_to: ReplicateTo::None,
            description: None,
        });

        let value = serde_json::to_value(&props).unwrap();
        let properties = value["Properties"].as_object().unwrap();
        assert_eq!(properties["DeploymentDurationInMinutes"], 1);
        assert_eq!(properties["FinalBakeTimeInMinutes"], 0);
        assert_eq!(properties["GrowthFactor"], 100.0);
        assert_eq!(properties["ReplicateTo"], "NONE");
        assert!(!properties.contains_key("GrowthType"));
        assert!(!properties.contains_key("Description"));
    }

    #[test]
    fn serialized_type_matches_kind() {
        let props = ResourceProperties::Application(ApplicationProps {
            name: "ConfigSourceDemo".to_string(),
            description: None,
        });
        let value = serde_json::to_value(&props).unwrap();
        assert_eq!(value["Type"], props.kind().cfn_type());
    }

    #[test]
    fn application_has_no_references() {
        let props = ResourceProperties::Application(ApplicationProps {
            name: "ConfigSourceDemo".to_string(),
            description: None,
        });
        assert!(props.references().is_empty());
        assert_eq!(props.name(), Some("ConfigSourceDemo"));
    }
}

//! Template entity - the synthesized CloudFormation document
//!
//! A `Template` is an append-only, ordered table of resources and outputs.
//! `declare` resolves every reference against what has already been declared,
//! so a dangling or forward reference is rejected at the point of declaration
//! and the resource is not added.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::output::StackOutput;
use super::resource::{ReferenceField, Resource, ResourceProperties, ResourceRef};
use crate::domain::value_objects::LogicalId;
use crate::error::{SynthError, SynthResult};

/// CloudFormation template format version
pub const TEMPLATE_FORMAT_VERSION: &str = "2010-09-09";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Template {
    description: Option<String>,
    resources: Vec<Resource>,
    outputs: Vec<StackOutput>,
}

impl Template {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_description(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..Self::default()
        }
    }

    /// Declare a resource and return a handle other declarations can reference
    pub fn declare(
        &mut self,
        construct_id: &str,
        properties: ResourceProperties,
    ) -> SynthResult<ResourceRef> {
        let logical_id = LogicalId::from_construct_id(construct_id)?;

        if self.resource(&logical_id).is_some() {
            return Err(SynthError::DuplicateLogicalId {
                logical_id: logical_id.to_string(),
                construct_id: construct_id.to_string(),
            });
        }

        for field in properties.references() {
            resolve(&self.resources, &logical_id, field)?;
        }

        let resource = Resource::new(construct_id, logical_id, properties);
        let reference = resource.reference();
        self.resources.push(resource);
        Ok(reference)
    }

    /// Export a resource identifier as a named stack output
    pub fn export(
        &mut self,
        output_id: &str,
        value: &ResourceRef,
        export_name: &str,
    ) -> SynthResult<()> {
        let id = LogicalId::from_construct_id(output_id)?;

        if self.output(&id).is_some() {
            return Err(SynthError::DuplicateOutput {
                name: id.to_string(),
            });
        }
        if self.outputs.iter().any(|o| o.export_name() == export_name) {
            return Err(SynthError::DuplicateOutput {
                name: export_name.to_string(),
            });
        }

        if self.resource(value.logical_id()).is_none() {
            return Err(SynthError::UnresolvedReference {
                resource: id.to_string(),
                property: "Value",
                target: value.logical_id().to_string(),
            });
        }

        self.outputs
            .push(StackOutput::new(id, value.clone(), export_name));
        Ok(())
    }

    /// Re-check referential closure of the whole template.
    ///
    /// Every resource reference must resolve to a resource declared before it,
    /// with the expected kind; every output must resolve to some resource.
    pub fn validate(&self) -> SynthResult<()> {
        for (index, resource) in self.resources.iter().enumerate() {
            let earlier = &self.resources[..index];
            for field in resource.properties().references() {
                resolve(earlier, resource.logical_id(), field)?;
            }
        }

        for output in &self.outputs {
            if self.resource(output.value().logical_id()).is_none() {
                return Err(SynthError::UnresolvedReference {
                    resource: output.id().to_string(),
                    property: "Value",
                    target: output.value().logical_id().to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn outputs(&self) -> &[StackOutput] {
        &self.outputs
    }

    pub fn resource(&self, logical_id: &LogicalId) -> Option<&Resource> {
        self.resources.iter().find(|r| r.logical_id() == logical_id)
    }

    pub fn output(&self, id: &LogicalId) -> Option<&StackOutput> {
        self.outputs.iter().find(|o| o.id() == id)
    }

    pub fn to_json_pretty(&self) -> SynthResult<String> {
        let mut rendered = serde_json::to_string_pretty(self)?;
        rendered.push('\n');
        Ok(rendered)
    }

    pub fn to_yaml(&self) -> SynthResult<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }
}

fn resolve(
    declared: &[Resource],
    owner: &LogicalId,
    field: ReferenceField<'_>,
) -> SynthResult<()> {
    let target = field.target.logical_id();
    let Some(found) = declared.iter().find(|r| r.logical_id() == target) else {
        return Err(SynthError::UnresolvedReference {
            resource: owner.to_string(),
            property: field.property,
            target: target.to_string(),
        });
    };

    if found.kind() != field.expected {
        return Err(SynthError::ReferenceKindMismatch {
            resource: owner.to_string(),
            property: field.property,
            target: target.to_string(),
            expected: field.expected,
            found: found.kind(),
        });
    }

    Ok(())
}

struct ResourceTable<'a>(&'a [Resource]);

impl Serialize for ResourceTable<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for resource in self.0 {
            map.serialize_entry(resource.logical_id().as_str(), resource.properties())?;
        }
        map.end()
    }
}

struct OutputTable<'a>(&'a [StackOutput]);

impl Serialize for OutputTable<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for output in self.0 {
            map.serialize_entry(output.id().as_str(), output)?;
        }
        map.end()
    }
}

impl Serialize for Template {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("AWSTemplateFormatVersion", TEMPLATE_FORMAT_VERSION)?;
        if let Some(description) = &self.description {
            map.serialize_entry("Description", description)?;
        }
        map.serialize_entry("Resources", &ResourceTable(&self.resources))?;
        if !self.outputs.is_empty() {
            map.serialize_entry("Outputs", &OutputTable(&self.outputs))?;
        }
        map.end()
    }
}

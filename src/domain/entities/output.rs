//! StackOutput entity - a named, exported stack value

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::resource::ResourceRef;
use crate::domain::value_objects::LogicalId;

/// A stack output exporting a resource identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackOutput {
    id: LogicalId,
    value: ResourceRef,
    export_name: String,
}

impl StackOutput {
    pub(crate) fn new(id: LogicalId, value: ResourceRef, export_name: impl Into<String>) -> Self {
        Self {
            id,
            value,
            export_name: export_name.into(),
        }
    }

    pub fn id(&self) -> &LogicalId {
        &self.id
    }

    /// The resource whose identifier is exported
    pub fn value(&self) -> &ResourceRef {
        &self.value
    }

    pub fn export_name(&self) -> &str {
        &self.export_name
    }
}

impl Serialize for StackOutput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct Export<'a>(&'a str);

        impl Serialize for Export<'_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("Name", self.0)?;
                map.end()
            }
        }

        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("Value", &self.value)?;
        map.serialize_entry("Export", &Export(&self.export_name))?;
        map.end()
    }
}

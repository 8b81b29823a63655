//! Deployment strategy enums
//!
//! Config files spell these in kebab-case (`ssm-document`); templates use the
//! CloudFormation spelling (`SSM_DOCUMENT`).

use serde::{Deserialize, Serialize, Serializer};

/// Where the strategy definition is replicated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReplicateTo {
    #[default]
    #[serde(alias = "NONE")]
    None,
    #[serde(alias = "SSM_DOCUMENT")]
    SsmDocument,
}

impl ReplicateTo {
    pub fn as_cfn_str(&self) -> &'static str {
        match self {
            ReplicateTo::None => "NONE",
            ReplicateTo::SsmDocument => "SSM_DOCUMENT",
        }
    }
}

impl Serialize for ReplicateTo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_cfn_str())
    }
}

/// Curve used to grow the share of targets receiving the configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GrowthType {
    #[serde(alias = "LINEAR")]
    Linear,
    #[serde(alias = "EXPONENTIAL")]
    Exponential,
}

impl GrowthType {
    pub fn as_cfn_str(&self) -> &'static str {
        match self {
            GrowthType::Linear => "LINEAR",
            GrowthType::Exponential => "EXPONENTIAL",
        }
    }
}

impl Serialize for GrowthType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_cfn_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        replicate_to: ReplicateTo,
        growth_type: Option<GrowthType>,
    }

    #[test]
    fn deserializes_kebab_case_and_cfn_spelling() {
        let h: Holder = toml::from_str("replicate_to = \"ssm-document\"\ngrowth_type = \"linear\"")
            .unwrap();
        assert_eq!(h.replicate_to, ReplicateTo::SsmDocument);
        assert_eq!(h.growth_type, Some(GrowthType::Linear));

        let h: Holder = toml::from_str("replicate_to = \"NONE\"").unwrap();
        assert_eq!(h.replicate_to, ReplicateTo::None);
        assert_eq!(h.growth_type, None);
    }

    #[test]
    fn serializes_cfn_spelling() {
        assert_eq!(
            serde_json::to_string(&ReplicateTo::None).unwrap(),
            "\"NONE\""
        );
        assert_eq!(
            serde_json::to_string(&GrowthType::Exponential).unwrap(),
            "\"EXPONENTIAL\""
        );
    }

    #[test]
    fn default_is_no_replication() {
        assert_eq!(ReplicateTo::default(), ReplicateTo::None);
    }
}

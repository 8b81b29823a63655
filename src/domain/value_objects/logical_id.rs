//! Logical ID value object
//!
//! CloudFormation keys every resource and output by an alphanumeric logical id.
//! Declarations are written with readable construct ids (`ac-env-sandbox`);
//! the logical id is the construct id with everything but `[A-Za-z0-9]` removed.

use std::fmt;

use serde::Serialize;

use crate::error::{SynthError, SynthResult};

/// Validated CloudFormation logical id
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct LogicalId(String);

impl LogicalId {
    /// CloudFormation limit on logical id length
    pub const MAX_LEN: usize = 255;

    /// Derive a logical id from a construct id
    pub fn from_construct_id(construct_id: &str) -> SynthResult<Self> {
        let stripped: String = construct_id
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();

        if stripped.is_empty() {
            return Err(SynthError::InvalidLogicalId {
                construct_id: construct_id.to_string(),
                reason: "contains no alphanumeric characters".to_string(),
            });
        }

        if stripped.len() > Self::MAX_LEN {
            return Err(SynthError::InvalidLogicalId {
                construct_id: construct_id.to_string(),
                reason: format!(
                    "{} characters after normalization, limit is {}",
                    stripped.len(),
                    Self::MAX_LEN
                ),
            });
        }

        Ok(Self(stripped))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LogicalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl AsRef<str> for LogicalId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

//! Error types for appconfig-synth
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::value_objects::ResourceKind;

/// Result type alias for synthesis operations
pub type SynthResult<T> = Result<T, SynthError>;

/// Main error type for synthesis operations
#[derive(Error, Debug)]
pub enum SynthError {
    /// A configuration content file does not exist
    #[error("configuration content file not found: {path}")]
    ContentFileNotFound { path: PathBuf },

    /// A configuration content file exists but could not be read as UTF-8 text
    #[error("cannot read configuration content file {path}: {message}")]
    ContentFileUnreadable { path: PathBuf, message: String },

    /// Construct id cannot be turned into a CloudFormation logical id
    #[error("invalid construct id '{construct_id}': {reason}")]
    InvalidLogicalId { construct_id: String, reason: String },

    /// Two declarations collapse to the same logical id
    #[error("duplicate logical id '{logical_id}' (declared by construct '{construct_id}')")]
    DuplicateLogicalId {
        logical_id: String,
        construct_id: String,
    },

    /// Output id or export name declared twice
    #[error("duplicate output '{name}'")]
    DuplicateOutput { name: String },

    /// A reference points at a resource that was never declared (or declared later)
    #[error("{resource}.{property} references undeclared resource '{target}'")]
    UnresolvedReference {
        resource: String,
        property: &'static str,
        target: String,
    },

    /// A reference points at a resource of the wrong kind
    #[error("{resource}.{property} must reference {expected}, but '{target}' is {found}")]
    ReferenceKindMismatch {
        resource: String,
        property: &'static str,
        target: String,
        expected: ResourceKind,
        found: ResourceKind,
    },

    /// Stack name not accepted by CloudFormation
    #[error("invalid stack name '{name}': {reason}")]
    InvalidStackName { name: String, reason: String },

    /// Deployment strategy parameters are outside the service limits
    #[error("invalid deployment strategy: {message}")]
    InvalidStrategy { message: String },

    /// Malformed `appconfig.toml`
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML rendering error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

impl SynthError {
    /// Stable machine-readable code used in `--json` error events.
    pub fn code(&self) -> &'static str {
        match self {
            SynthError::ContentFileNotFound { .. } => "file_not_found",
            SynthError::ContentFileUnreadable { .. } => "read_error",
            SynthError::InvalidLogicalId { .. } => "invalid_logical_id",
            SynthError::DuplicateLogicalId { .. } => "duplicate_logical_id",
            SynthError::DuplicateOutput { .. } => "duplicate_output",
            SynthError::UnresolvedReference { .. } => "reference_error",
            SynthError::ReferenceKindMismatch { .. } => "reference_error",
            SynthError::InvalidStackName { .. } => "invalid_stack_name",
            SynthError::InvalidStrategy { .. } => "invalid_strategy",
            SynthError::InvalidConfig { .. } => "invalid_config",
            SynthError::Io(_) => "io_error",
            SynthError::Json(_) => "json_error",
            SynthError::Yaml(_) => "yaml_error",
        }
    }

    /// True for the input-file failures that abort synthesis before any declaration.
    pub fn is_content_error(&self) -> bool {
        matches!(
            self,
            SynthError::ContentFileNotFound { .. } | SynthError::ContentFileUnreadable { .. }
        )
    }
}

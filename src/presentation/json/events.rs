//! Shared JSON event types for consistent CLI output.
//!
//! Every command emits these as NDJSON so field naming stays the same
//! across `synth`, `diff`, `list` and `check`.

use serde::Serialize;

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// Event emitted when a command finishes.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl<'a> CompleteEvent<'a> {
    pub fn success(command: &'a str) -> Self {
        Self {
            event: "complete",
            command,
            success: true,
            duration_ms: None,
        }
    }

    pub fn failure(command: &'a str) -> Self {
        Self {
            event: "complete",
            command,
            success: false,
            duration_ms: None,
        }
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }
}

/// Event emitted when an error occurs.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub code: &'a str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(command: &'a str, code: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            command,
            code,
            message: message.into(),
            help: None,
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Non-fatal problem (unknown config key, unattached content).
#[derive(Debug, Clone, Serialize)]
pub struct WarningEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub kind: &'a str,
    pub message: String,
}

impl<'a> WarningEvent<'a> {
    pub fn new(command: &'a str, kind: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "warning",
            command,
            kind,
            message: message.into(),
        }
    }
}

/// One record of a listing (a resource, an output, a source, a check).
///
/// The event name says what the record is; `data` is flattened into it.
#[derive(Debug, Clone, Serialize)]
pub struct ItemEvent<'a, T: Serialize> {
    pub event: &'a str,
    pub command: &'a str,
    #[serde(flatten)]
    pub data: T,
}

impl<'a, T: Serialize> ItemEvent<'a, T> {
    pub fn new(event: &'a str, command: &'a str, data: T) -> Self {
        Self {
            event,
            command,
            data,
        }
    }
}

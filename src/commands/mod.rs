//! Command handlers
//!
//! Each handler resolves configuration, runs one use case and renders the
//! result as text or NDJSON. Handlers return `Ok(false)` when the command ran
//! but found problems (non-zero exit without an error message).

pub mod check;
pub mod diff;
pub mod list;
pub mod synth;

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use appconfig_synth::config::{load_for_source, Config, LoadedConfig, Verbosity};
use appconfig_synth::fs::LocalFs;
use appconfig_synth::presentation::json::emit_event;
use appconfig_synth::presentation::json::events::{CompleteEvent, StartEvent, WarningEvent};
use appconfig_synth::presentation::output::render_config_warnings;

/// Per-invocation state shared by every command
pub struct CommandContext {
    pub command: &'static str,
    pub json: bool,
    verbose: u8,
    started: Instant,
}

impl CommandContext {
    pub fn new(command: &'static str, json: bool, verbose: u8) -> Self {
        Self {
            command,
            json,
            verbose,
            started: Instant::now(),
        }
    }

    pub fn start(&self, source: &Path) -> Result<()> {
        if self.json {
            emit_event(&StartEvent::new(self.command).with_source(source.display().to_string()))?;
        }
        Ok(())
    }

    pub fn complete(&self, success: bool) -> Result<()> {
        if self.json {
            let elapsed = self.started.elapsed().as_millis() as u64;
            let event = if success {
                CompleteEvent::success(self.command)
            } else {
                CompleteEvent::failure(self.command)
            };
            emit_event(&event.with_duration(elapsed))?;
        }
        Ok(())
    }

    /// Resolve `appconfig.toml` for `source` and surface unknown keys
    pub fn load_config(&self, source: &Path) -> Result<LoadedConfig> {
        let loaded = load_for_source(&LocalFs::new(), source)?;

        if self.json {
            for warning in &loaded.warnings {
                emit_event(&WarningEvent::new(
                    self.command,
                    "unknown_config_key",
                    format!("unknown config key '{}'", warning.key),
                ))?;
            }
        } else if self.verbosity(&loaded.config) > Verbosity::Quiet {
            eprint!("{}", render_config_warnings(&loaded.warnings));
        }

        Ok(loaded)
    }

    pub fn verbosity(&self, config: &Config) -> Verbosity {
        Verbosity::from_flag_count(config.output.verbosity, self.verbose)
    }

    pub fn warn(&self, kind: &str, message: impl Into<String>) -> Result<()> {
        let message = message.into();
        if self.json {
            emit_event(&WarningEvent::new(self.command, kind, message))?;
        } else {
            eprintln!("[!] {}", message);
        }
        Ok(())
    }
}

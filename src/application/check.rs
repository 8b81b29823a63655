//! Check Use Case
//!
//! Validates a source directory without writing anything: config keys,
//! content files, stack name, strategy limits and reference closure.

use std::path::Path;

use crate::config::{load_for_source, with_env_overrides, Config, LoadedConfig};
use crate::domain::entities::{ContentSource, ContentSources};
use crate::domain::ports::FileSystem;
use crate::domain::services::{build_stack, StackDefinition};
use crate::error::SynthError;

use super::sources::read_content_source;

/// Status of a check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Warning,
    Error,
}

impl CheckStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckStatus::Pass => "pass",
            CheckStatus::Warning => "warning",
            CheckStatus::Error => "error",
        }
    }
}

/// Result of a single check
#[derive(Debug, Clone)]
pub struct CheckItem {
    /// Name of the check (e.g. "content:initial")
    pub name: String,
    pub status: CheckStatus,
    /// Human-readable message
    pub message: String,
    /// Recommendation for fixing issues
    pub recommendation: Option<String>,
    pub details: Vec<String>,
}

impl CheckItem {
    fn pass(name: &str, message: impl Into<String>) -> Self {
        Self::with_status(name, CheckStatus::Pass, message)
    }

    fn warning(name: &str, message: impl Into<String>) -> Self {
        Self::with_status(name, CheckStatus::Warning, message)
    }

    fn error(name: &str, message: impl Into<String>) -> Self {
        Self::with_status(name, CheckStatus::Error, message)
    }

    fn with_status(name: &str, status: CheckStatus, message: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            status,
            message: message.into(),
            recommendation: None,
            details: Vec::new(),
        }
    }

    fn recommend(mut self, recommendation: impl Into<String>) -> Self {
        self.recommendation = Some(recommendation.into());
        self
    }
}

/// Result of the check operation
#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    pub items: Vec<CheckItem>,
    pub passed: usize,
    pub warnings: usize,
    pub errors: usize,
    /// Configuration the checks ran against (defaults if the file was malformed)
    pub config: Config,
}

impl CheckReport {
    /// No errors (warnings allowed)
    pub fn is_success(&self) -> bool {
        self.errors == 0
    }

    fn push(&mut self, item: CheckItem) {
        match item.status {
            CheckStatus::Pass => self.passed += 1,
            CheckStatus::Warning => self.warnings += 1,
            CheckStatus::Error => self.errors += 1,
        }
        self.items.push(item);
    }
}

/// Check Use Case
pub struct CheckUseCase<F: FileSystem> {
    fs: F,
}

impl<F: FileSystem> CheckUseCase<F> {
    pub fn new(fs: F) -> Self {
        Self { fs }
    }

    /// Execute the check operation
    pub fn execute(&self, source: &Path) -> CheckReport {
        self.execute_with_callback(source, |_| {})
    }

    /// Execute with a callback for each check (for streaming output)
    pub fn execute_with_callback<C>(&self, source: &Path, mut on_check: C) -> CheckReport
    where
        C: FnMut(&CheckItem),
    {
        let mut report = CheckReport::default();
        let mut record = |item: CheckItem, report: &mut CheckReport| {
            on_check(&item);
            report.push(item);
        };

        // A malformed config is reported, then the remaining checks run on defaults.
        let loaded = match load_for_source(&self.fs, source) {
            Ok(loaded) => {
                record(config_check(&loaded), &mut report);
                loaded
            }
            Err(err) => {
                record(config_error(&err), &mut report);
                LoadedConfig {
                    config: with_env_overrides(Config::default()),
                    ..LoadedConfig::default()
                }
            }
        };

        let config = &loaded.config;
        let (initial_path, updated_path) = config.content_paths(source);
        let json_content = config.content.content_type == "application/json";
        let initial = self.content_check("content:initial", &initial_path, json_content);
        let updated = self.content_check("content:updated", &updated_path, json_content);
        let initial_source = initial.1;
        let updated_source = updated.1;
        record(initial.0, &mut report);
        record(updated.0, &mut report);

        let definition = config.definition();
        record(stack_name_check(&definition), &mut report);
        record(strategy_check(&definition), &mut report);

        let item = match (initial_source, updated_source) {
            (Some(initial), Some(updated)) if report.errors == 0 => {
                references_check(&definition, ContentSources { initial, updated })
            }
            _ => CheckItem::warning("references", "skipped until the errors above are fixed"),
        };
        record(item, &mut report);

        record(unattached_check(&updated_path), &mut report);

        report.config = loaded.config;
        report
    }

    fn content_check(
        &self,
        name: &str,
        path: &Path,
        expect_json: bool,
    ) -> (CheckItem, Option<ContentSource>) {
        let source = match read_content_source(&self.fs, path) {
            Ok(source) => source,
            Err(err) => {
                let item = CheckItem::error(name, err.to_string())
                    .recommend("Create the file or point [content] in appconfig.toml at it");
                return (item, None);
            }
        };

        let summary = format!("{} ({})", path.display(), source.hash().short());
        let item = if expect_json {
            match serde_json::from_str::<serde_json::Value>(source.content()) {
                Ok(_) => CheckItem::pass(name, summary),
                Err(err) => CheckItem::warning(
                    name,
                    format!("{} is not valid JSON: {}", path.display(), err),
                )
                .recommend("Fix the JSON, or set [content] content_type to match the file"),
            }
        } else {
            CheckItem::pass(name, summary)
        };

        (item, Some(source))
    }
}

fn config_check(loaded: &LoadedConfig) -> CheckItem {
    let location = match &loaded.path {
        Some(path) => path.display().to_string(),
        None => "built-in defaults".to_string(),
    };

    if loaded.warnings.is_empty() {
        return CheckItem::pass("config", format!("using {}", location));
    }

    let mut item = CheckItem::warning(
        "config",
        format!("{} unknown key(s) in {}", loaded.warnings.len(), location),
    )
    .recommend("Remove or rename the unknown keys");
    item.details = loaded
        .warnings
        .iter()
        .map(|w| match &w.suggestion {
            Some(suggestion) => format!("{} (did you mean '{}'?)", w.key, suggestion),
            None => w.key.clone(),
        })
        .collect();
    item
}

fn config_error(err: &SynthError) -> CheckItem {
    let recommendation = match err {
        SynthError::InvalidConfig { .. } => "Fix the TOML syntax; remaining checks used defaults",
        _ => "Make appconfig.toml readable; remaining checks used defaults",
    };
    CheckItem::error("config", err.to_string()).recommend(recommendation)
}

fn stack_name_check(definition: &StackDefinition) -> CheckItem {
    match definition.validate_stack_name() {
        Ok(()) => CheckItem::pass("stack_name", definition.stack_name.clone()),
        Err(err) => CheckItem::error("stack_name", err.to_string())
            .recommend("Set [stack] name to letters, digits and hyphens, starting with a letter"),
    }
}

fn strategy_check(definition: &StackDefinition) -> CheckItem {
    let strategy = &definition.strategy;
    match strategy.validate() {
        Ok(()) => CheckItem::pass(
            "strategy",
            format!(
                "{}: {} min rollout, {} min bake, {}% growth",
                strategy.name,
                strategy.deployment_duration_minutes,
                strategy.final_bake_time_minutes,
                strategy.growth_factor
            ),
        ),
        Err(err) => CheckItem::error("strategy", err.to_string()),
    }
}

fn references_check(definition: &StackDefinition, sources: ContentSources) -> CheckItem {
    let result = build_stack(definition, &sources)
        .and_then(|stack| stack.template.validate().map(|()| stack));

    match result {
        Ok(stack) => CheckItem::pass(
            "references",
            format!(
                "{} resources, {} outputs, all references resolve",
                stack.template.resources().len(),
                stack.template.outputs().len()
            ),
        ),
        Err(err) => CheckItem::error("references", err.to_string()),
    }
}

// The updated version is read on every synth but no deployment points at it.
fn unattached_check(updated: &Path) -> CheckItem {
    CheckItem::warning(
        "unattached content",
        format!("{} is read but never deployed", updated.display()),
    )
    .recommend("Only the initial version is hosted and deployed")
}

//! Output Rendering
//!
//! Human-readable text for each command. Renderers return strings so the
//! command layer decides where they go.

use std::fmt::Write as _;

use crate::application::{CheckReport, CheckStatus, DiffResult, SynthReport, TemplateChange};
use crate::config::{ConfigWarning, Verbosity};

/// Icons for output rendering
struct Icons;

impl Icons {
    const CHECK: &'static str = "✓";
    const CROSS: &'static str = "✗";
    const WARN: &'static str = "!";
    const WRITE: &'static str = "→";
}

fn status_icon(status: CheckStatus) -> &'static str {
    match status {
        CheckStatus::Pass => Icons::CHECK,
        CheckStatus::Warning => Icons::WARN,
        CheckStatus::Error => Icons::CROSS,
    }
}

/// Render a completed (or previewed) synthesis
pub fn render_synth(report: &SynthReport, verbosity: Verbosity) -> String {
    let mut out = String::new();
    if verbosity == Verbosity::Quiet {
        return out;
    }

    let _ = writeln!(out, "{} Synthesized {}", Icons::CHECK, report.stack_name);
    let _ = writeln!(
        out,
        "  {} resources, {} outputs ({})",
        report.resources.len(),
        report.outputs.len(),
        report.template_hash.short()
    );

    if verbosity >= Verbosity::Verbose {
        let _ = writeln!(out);
        for resource in &report.resources {
            let _ = writeln!(
                out,
                "  {:<24} {}",
                resource.logical_id,
                resource.kind.cfn_type()
            );
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "  Outputs:");
    for output in &report.outputs {
        let _ = writeln!(
            out,
            "    {} = Ref {} (export {})",
            output.id, output.target, output.export_name
        );
    }

    if !report.written.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "  Written ({}):", report.written.len());
        for path in &report.written {
            let _ = writeln!(out, "    {} {}", Icons::WRITE, path.display());
        }
    }

    let unattached: Vec<_> = report.unattached().collect();
    if !unattached.is_empty() {
        let _ = writeln!(out);
        for source in unattached {
            let _ = writeln!(
                out,
                "  [{}] {} was read but is not deployed",
                Icons::WARN,
                source.path.display()
            );
        }
    }

    out
}

/// Render declared resources and outputs
pub fn render_list(report: &SynthReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Stack {}", report.stack_name);
    let _ = writeln!(out);
    let _ = writeln!(out, "Resources ({}):", report.resources.len());
    for resource in &report.resources {
        let name = resource.name.as_deref().unwrap_or("-");
        let _ = writeln!(
            out,
            "  {:<24} {:<44} {}",
            resource.logical_id,
            resource.kind.cfn_type(),
            name
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Outputs ({}):", report.outputs.len());
    for output in &report.outputs {
        let _ = writeln!(
            out,
            "  {:<24} Ref {:<24} export {}",
            output.id, output.target, output.export_name
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Content:");
    for source in &report.sources {
        let state = if source.attached {
            "deployed"
        } else {
            "unattached"
        };
        let _ = writeln!(
            out,
            "  {:<24} {} {}",
            source.path.display(),
            source.hash.short(),
            state
        );
    }
    out
}

/// Render a diff result
pub fn render_diff(result: &DiffResult) -> String {
    let mut out = String::new();
    match &result.change {
        TemplateChange::New => {
            let _ = writeln!(
                out,
                "+ {} (new, no template on disk)",
                result.template_path.display()
            );
        }
        TemplateChange::Unchanged => {
            let _ = writeln!(
                out,
                "{} {} is up-to-date",
                Icons::CHECK,
                result.template_path.display()
            );
        }
        TemplateChange::Modified {
            diff,
            added,
            removed,
        } => {
            let _ = writeln!(
                out,
                "~ {} (+{} -{})",
                result.template_path.display(),
                added,
                removed
            );
            let _ = writeln!(out);
            out.push_str(diff);
        }
    }
    out
}

/// Render a check report
pub fn render_check(report: &CheckReport, verbosity: Verbosity) -> String {
    let mut out = String::new();
    for item in &report.items {
        if item.status == CheckStatus::Pass && verbosity == Verbosity::Quiet {
            continue;
        }
        let _ = writeln!(
            out,
            "  {} {:<20} {}",
            status_icon(item.status),
            item.name,
            item.message
        );
        for detail in &item.details {
            let _ = writeln!(out, "      - {}", detail);
        }
        if item.status != CheckStatus::Pass || verbosity >= Verbosity::Verbose {
            if let Some(recommendation) = &item.recommendation {
                let _ = writeln!(out, "      hint: {}", recommendation);
            }
        }
    }
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{} passed, {} warnings, {} errors",
        report.passed, report.warnings, report.errors
    );
    out
}

/// Render unknown-key warnings from `appconfig.toml`
pub fn render_config_warnings(warnings: &[ConfigWarning]) -> String {
    let mut out = String::new();
    for warning in warnings {
        let location = match warning.line {
            Some(line) => format!("{}:{}", warning.file.display(), line),
            None => warning.file.display().to_string(),
        };
        let _ = write!(
            out,
            "[{}] unknown config key '{}' in {}",
            Icons::WARN,
            warning.key,
            location
        );
        if let Some(suggestion) = &warning.suggestion {
            let _ = write!(out, " (did you mean '{}'?)", suggestion);
        }
        let _ = writeln!(out);
    }
    out
}

use std::path::{Path, PathBuf};

use anyhow::Result;

use appconfig_synth::application::SynthOptions;
use appconfig_synth::config::{TemplateFormat, Verbosity};
use appconfig_synth::presentation::factory::create_synth_use_case;
use appconfig_synth::presentation::json::emit_event;
use appconfig_synth::presentation::json::events::ItemEvent;
use appconfig_synth::presentation::output::render_synth;

use super::CommandContext;

pub fn cmd_synth(
    ctx: &CommandContext,
    source: &Path,
    out: Option<PathBuf>,
    format: Option<TemplateFormat>,
    stdout: bool,
) -> Result<bool> {
    ctx.start(source)?;
    let loaded = ctx.load_config(source)?;
    let config = &loaded.config;
    let verbosity = ctx.verbosity(config);

    let out_dir = out.unwrap_or_else(|| source.join(&config.output.directory));
    let mut options = SynthOptions::new(source)
        .with_out_dir(out_dir)
        .with_format(format.unwrap_or(config.output.format));
    if stdout {
        options = options.render_only();
    }

    let report = create_synth_use_case().execute(&options, config)?;

    if ctx.json {
        for resource in &report.resources {
            emit_event(&ItemEvent::new(
                "resource",
                ctx.command,
                serde_json::json!({
                    "logical_id": resource.logical_id,
                    "construct_id": resource.construct_id,
                    "type": resource.kind.cfn_type(),
                }),
            ))?;
        }
        for output in &report.outputs {
            emit_event(&ItemEvent::new(
                "output",
                ctx.command,
                serde_json::json!({
                    "id": output.id,
                    "ref": output.target,
                    "export": output.export_name,
                }),
            ))?;
        }
        for path in &report.written {
            emit_event(&ItemEvent::new(
                "written",
                ctx.command,
                serde_json::json!({ "path": path.display().to_string() }),
            ))?;
        }
        if stdout {
            emit_event(&ItemEvent::new(
                "template",
                ctx.command,
                serde_json::json!({
                    "hash": report.template_hash,
                    "content": report.template,
                }),
            ))?;
        }
        for unattached in report.unattached() {
            ctx.warn(
                "unattached_content",
                format!("{} was read but is not deployed", unattached.path.display()),
            )?;
        }
    } else if stdout {
        print!("{}", report.template);
        if verbosity > Verbosity::Quiet {
            for unattached in report.unattached() {
                ctx.warn(
                    "unattached_content",
                    format!("{} was read but is not deployed", unattached.path.display()),
                )?;
            }
        }
    } else {
        print!("{}", render_synth(&report, verbosity));
    }

    ctx.complete(true)?;
    Ok(true)
}

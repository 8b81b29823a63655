use std::path::Path;

use anyhow::Result;

use appconfig_synth::application::SynthOptions;
use appconfig_synth::presentation::factory::create_synth_use_case;
use appconfig_synth::presentation::json::emit_event;
use appconfig_synth::presentation::json::events::ItemEvent;
use appconfig_synth::presentation::output::render_list;

use super::CommandContext;

pub fn cmd_list(ctx: &CommandContext, source: &Path) -> Result<bool> {
    ctx.start(source)?;
    let loaded = ctx.load_config(source)?;

    let options = SynthOptions::new(source).render_only();
    let report = create_synth_use_case().execute(&options, &loaded.config)?;

    if !ctx.json {
        print!("{}", render_list(&report));
        return Ok(true);
    }

    for resource in &report.resources {
        emit_event(&ItemEvent::new(
            "resource",
            ctx.command,
            serde_json::json!({
                "logical_id": resource.logical_id,
                "construct_id": resource.construct_id,
                "type": resource.kind.cfn_type(),
                "name": resource.name,
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
    for content in &report.sources {
        emit_event(&ItemEvent::new(
            "source",
            ctx.command,
            serde_json::json!({
                "path": content.path.display().to_string(),
                "hash": content.hash,
                "attached": content.attached,
            }),
        ))?;
    }

    ctx.complete(true)?;
    Ok(true)
}

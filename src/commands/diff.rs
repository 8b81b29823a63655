use std::path::{Path, PathBuf};

use anyhow::Result;

use appconfig_synth::application::{SynthOptions, TemplateChange};
use appconfig_synth::config::TemplateFormat;
use appconfig_synth::presentation::factory::create_diff_use_case;
use appconfig_synth::presentation::json::emit_event;
use appconfig_synth::presentation::json::events::ItemEvent;
use appconfig_synth::presentation::output::render_diff;

use super::CommandContext;

pub fn cmd_diff(
    ctx: &CommandContext,
    source: &Path,
    out: Option<PathBuf>,
    format: Option<TemplateFormat>,
) -> Result<bool> {
    ctx.start(source)?;
    let loaded = ctx.load_config(source)?;
    let config = &loaded.config;

    let out_dir = out.unwrap_or_else(|| source.join(&config.output.directory));
    let options = SynthOptions::new(source)
        .with_out_dir(out_dir)
        .with_format(format.unwrap_or(config.output.format));

    let result = create_diff_use_case().execute(&options, config)?;

    if !ctx.json {
        print!("{}", render_diff(&result));
        return Ok(true);
    }

    let path = result.template_path.display().to_string();
    let mut data = match &result.change {
        TemplateChange::New => serde_json::json!({ "status": "new", "path": path }),
        TemplateChange::Unchanged => serde_json::json!({ "status": "unchanged", "path": path }),
        TemplateChange::Modified {
            diff,
            added,
            removed,
        } => serde_json::json!({
            "status": "modified",
            "path": path,
            "added": added,
            "removed": removed,
            "diff": diff,
        }),
    };
    data["changed"] = serde_json::Value::Bool(result.has_changes());
    emit_event(&ItemEvent::new("diff", ctx.command, data))?;

    ctx.complete(true)?;
    Ok(true)
}

use std::path::Path;

use anyhow::Result;

use appconfig_synth::presentation::factory::create_check_use_case;
use appconfig_synth::presentation::json::emit_event;
use appconfig_synth::presentation::json::events::ItemEvent;
use appconfig_synth::presentation::output::render_check;

use super::CommandContext;

pub fn cmd_check(ctx: &CommandContext, source: &Path) -> Result<bool> {
    ctx.start(source)?;

    // Config problems, malformed files included, are reported as check items.
    let use_case = create_check_use_case();
    let report = if ctx.json {
        let mut out = std::io::stdout().lock();
        use_case.execute_with_callback(source, |item| {
            let _ = appconfig_synth::presentation::json::write_typed_event(
                &mut out,
                &ItemEvent::new(
                    "check",
                    ctx.command,
                    serde_json::json!({
                        "name": item.name,
                        "status": item.status.as_str(),
                        "message": item.message,
                        "recommendation": item.recommendation,
                        "details": item.details,
                    }),
                ),
            );
        })
    } else {
        use_case.execute(source)
    };
    let verbosity = ctx.verbosity(&report.config);

    if ctx.json {
        emit_event(&ItemEvent::new(
            "summary",
            ctx.command,
            serde_json::json!({
                "passed": report.passed,
                "warnings": report.warnings,
                "errors": report.errors,
            }),
        ))?;
    } else {
        print!("{}", render_check(&report, verbosity));
    }

    ctx.complete(report.is_success())?;
    Ok(report.is_success())
}

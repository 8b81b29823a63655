//! appconfig-synth CLI - synthesize AWS AppConfig CloudFormation templates
//!
//! Usage: appconfig-synth [--json] [-v...] <COMMAND>
//!
//! Commands:
//!   synth   Write the template and manifest
//!   diff    Compare a fresh synthesis with the template on disk
//!   list    List declared resources and outputs
//!   check   Validate config, content files and references

mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use appconfig_synth::error::SynthError;
use appconfig_synth::presentation::json::emit_event;
use appconfig_synth::presentation::json::events::{CompleteEvent, ErrorEvent};
use appconfig_synth::presentation::{Cli, Commands};

use commands::CommandContext;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let ctx = CommandContext::new(cli.command.name(), cli.json, cli.verbose);

    match run(&ctx, cli.command) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            report_error(&ctx, &err);
            ExitCode::FAILURE
        }
    }
}

fn run(ctx: &CommandContext, command: Commands) -> Result<bool> {
    match command {
        Commands::Synth {
            source,
            out,
            format,
            stdout,
        } => commands::synth::cmd_synth(ctx, &source.source, out, format, stdout),
        Commands::Diff {
            source,
            out,
            format,
        } => commands::diff::cmd_diff(ctx, &source.source, out, format),
        Commands::List { source } => commands::list::cmd_list(ctx, &source.source),
        Commands::Check { source } => commands::check::cmd_check(ctx, &source.source),
    }
}

fn report_error(ctx: &CommandContext, err: &anyhow::Error) {
    let synth_error = err.downcast_ref::<SynthError>();

    if ctx.json {
        let code = synth_error.map(SynthError::code).unwrap_or("error");
        let mut event = ErrorEvent::new(ctx.command, code, format!("{:#}", err));
        if let Some(help) = synth_error.and_then(help_for) {
            event = event.with_help(help);
        }
        let _ = emit_event(&event);
        let _ = emit_event(&CompleteEvent::failure(ctx.command));
        return;
    }

    eprintln!("Error: {:#}", err);
    if let Some(help) = synth_error.and_then(help_for) {
        eprintln!("  hint: {}", help);
    }
}

fn help_for(err: &SynthError) -> Option<&'static str> {
    match err {
        err if err.is_content_error() => {
            Some("Pass --source, or set [content] paths in appconfig.toml")
        }
        SynthError::InvalidConfig { .. } => Some("Fix the TOML syntax in appconfig.toml"),
        SynthError::InvalidStrategy { .. } => {
            Some("Durations are 0-1440 minutes and growth_factor is 1-100")
        }
        _ => None,
    }
}

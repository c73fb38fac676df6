use chrono::Local;
use nuunpad_core::{export_all_notes_at, DirectorySink, ExportReport, NuunpadError, WriterSink};

use crate::app::{load_config, open_store, resolve_conflict_policy, resolve_output_dir};
use crate::cli::{Cli, ExportArgs};
use crate::errors::CliError;
use crate::helpers::parse_local_datetime;
use crate::ui::{badge, receipt, Badge, UiContext};

pub fn handle_export(cli: &Cli, args: &ExportArgs) -> anyhow::Result<()> {
    let config = load_config()?;
    let store = open_store(cli, &config)?;
    let at = match args.at.as_deref() {
        Some(value) => parse_local_datetime(value)?,
        None => Local::now().naive_local(),
    };

    if args.stdout {
        let mut sink = WriterSink::stdout();
        export_all_notes_at(&store, &mut sink, &at).map_err(export_failed)?;
        return Ok(());
    }

    let output_dir = resolve_output_dir(args.output_dir.as_deref(), &config);
    let policy = resolve_conflict_policy(args.on_conflict.as_deref(), &config)?;
    let mut sink = DirectorySink::new(output_dir).with_policy(policy);
    let report = export_all_notes_at(&store, &mut sink, &at).map_err(export_failed)?;

    let ctx =
        UiContext::from_env(args.json, None, cli.no_color).map_err(CliError::invalid_input)?;
    if ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if !cli.quiet {
        print_report(&ctx, &report);
    }
    Ok(())
}

fn print_report(ctx: &UiContext, report: &ExportReport) {
    let notes = report.note_count.to_string();
    let bytes = report.byte_len.to_string();
    println!(
        "{}",
        receipt(
            ctx,
            "Exported notes",
            &[
                ("File", report.location.as_str()),
                ("Notes", notes.as_str()),
                ("Bytes", bytes.as_str()),
            ],
        )
    );
    if report.note_count == 0 && ctx.mode.is_rich() {
        println!(
            "{}",
            badge(ctx, Badge::Warn, "No notes found; the export is an empty object")
        );
    }
}

/// Sink failures get their own exit code; everything else passes through.
fn export_failed(err: NuunpadError) -> anyhow::Error {
    match err {
        NuunpadError::Sink(message) => CliError::ExportFailed(message).into(),
        other => other.into(),
    }
}

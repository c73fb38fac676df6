use nuunpad_core::collect_notes;

use crate::app::{load_config, open_store};
use crate::cli::{Cli, ListArgs};
use crate::errors::CliError;
use crate::helpers::preview;
use crate::ui::{badge, table, Badge, Column, UiContext};

const PREVIEW_CHARS: usize = 48;

pub fn handle_list(cli: &Cli, args: &ListArgs) -> anyhow::Result<()> {
    let ctx = UiContext::from_env(args.json, args.format.as_deref(), cli.no_color)
        .map_err(CliError::invalid_input)?;

    let config = load_config()?;
    let store = open_store(cli, &config)?;
    let bundle = collect_notes(&store)?;

    if ctx.mode.is_json() {
        let items: Vec<serde_json::Value> = bundle
            .iter()
            .map(|(key, content)| {
                serde_json::json!({
                    "key": key,
                    "chars": content.chars().count(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    if bundle.is_empty() {
        if !cli.quiet {
            println!("{}", badge(&ctx, Badge::Info, "No notes found"));
        }
        return Ok(());
    }

    let rows: Vec<Vec<String>> = bundle
        .iter()
        .map(|(key, content)| {
            let mut row = vec![key.to_string(), content.chars().count().to_string()];
            if ctx.mode.is_rich() {
                row.push(preview(content, PREVIEW_CHARS));
            }
            row
        })
        .collect();
    let mut columns = vec![Column::new("KEY"), Column::new("CHARS")];
    if ctx.mode.is_rich() {
        columns.push(Column::new("PREVIEW"));
    }
    println!("{}", table(&ctx, &columns, &rows));
    Ok(())
}

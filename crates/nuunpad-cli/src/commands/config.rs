use crate::app::{load_config, resolve_config_path};
use crate::cli::{Cli, ConfigArgs};
use crate::config::{write_config, NuunpadConfig};
use crate::errors::CliError;

pub fn handle_config(cli: &Cli, args: &ConfigArgs) -> anyhow::Result<()> {
    let path = resolve_config_path()?;

    if args.init {
        if path.exists() && !args.force {
            return Err(CliError::invalid_input(format!(
                "Config already exists at {} (use --force to replace it)",
                path.display()
            ))
            .into());
        }
        write_config(&path, &NuunpadConfig::default())?;
        if !cli.quiet {
            println!("Wrote config to {}", path.display());
        }
        return Ok(());
    }

    let config = load_config()?;
    println!("# {}", path.display());
    if !path.exists() {
        println!("# (not present; showing defaults)");
    }
    print!(
        "{}",
        toml::to_string_pretty(&config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?
    );
    Ok(())
}

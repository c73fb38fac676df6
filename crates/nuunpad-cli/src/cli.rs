use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

use nuunpad_core::VERSION;

/// Nuunpad - export your notes from a local storage snapshot
#[derive(Parser)]
#[command(name = "nuunpad")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the note store snapshot (a JSON object of local storage entries)
    #[arg(short, long, global = true, env = "NUUNPAD_STORE")]
    pub store: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Export every note to a timestamped JSON file
    Export(ExportArgs),

    /// Preview the notes an export would include
    List(ListArgs),

    /// Show or create the config file
    Config(ConfigArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}

/// Arguments for the `export` command
#[derive(Args)]
pub struct ExportArgs {
    /// Directory to write the export into (defaults to config, then the current directory)
    #[arg(short, long, value_name = "DIR", conflicts_with = "stdout")]
    pub output_dir: Option<String>,

    /// Write the JSON to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,

    /// Export as of this local time (YYYY-MM-DDTHH:MM[:SS] or YYYY-MM-DD HH:MM)
    #[arg(long, value_name = "DATETIME")]
    pub at: Option<String>,

    /// What to do if the export file already exists (suffix, overwrite, fail)
    #[arg(long, value_name = "POLICY", conflicts_with = "stdout")]
    pub on_conflict: Option<String>,

    /// Print the export report as JSON
    #[arg(long, conflicts_with = "stdout")]
    pub json: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `config` command
#[derive(Args)]
pub struct ConfigArgs {
    /// Write a default config file
    #[arg(long)]
    pub init: bool,

    /// Replace an existing config file (with --init)
    #[arg(long, requires = "init")]
    pub force: bool,
}

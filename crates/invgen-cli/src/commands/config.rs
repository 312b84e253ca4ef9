//! Config command - manage configuration.

use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use console::style;

use invgen_core::InvgenConfig;

/// Default config file location.
const DEFAULT_CONFIG_PATH: &str = "invgen.json";

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Initialize a new configuration file with defaults
    Init(InitArgs),

    /// Show the configuration file path
    Path,
}

#[derive(Args)]
struct InitArgs {
    /// Output path for the configuration file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long)]
    force: bool,
}

pub fn run(args: ConfigArgs) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show => show(),
        ConfigCommand::Init(init_args) => init(init_args),
        ConfigCommand::Path => {
            println!("{DEFAULT_CONFIG_PATH}");
            Ok(())
        }
    }
}

fn show() -> anyhow::Result<()> {
    let path = Path::new(DEFAULT_CONFIG_PATH);
    let config = if path.exists() {
        InvgenConfig::from_file(path)?
    } else {
        InvgenConfig::default()
    };

    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

fn init(args: InitArgs) -> anyhow::Result<()> {
    let path = args
        .output
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    if path.exists() && !args.force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    InvgenConfig::default().save(&path)?;
    println!(
        "{} Wrote default configuration to {}",
        style("✓").green(),
        path.display()
    );
    Ok(())
}

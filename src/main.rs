use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use fileops::commands::FileCommand;
use fileops::config::ConfigLoader;
use fileops::demo::run_demo;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// TOML file with demo settings (defaults to ./fileops.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full demonstration (the default)
    Demo,

    /// Write the effective demo settings to a TOML file
    InitConfig {
        /// Destination file
        #[arg(default_value = "fileops.toml")]
        path: PathBuf,
    },

    #[command(flatten)]
    File(FileCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    fileops::init_with_logger(cli.verbose).context("Failed to initialize logging")?;
    info!("Starting fileops v{} on {}", fileops::version(), std::env::consts::OS);

    let loader = match &cli.config {
        Some(path) => ConfigLoader::with_path(path),
        None => ConfigLoader::new(),
    };

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => {
            let config = loader.load()?;
            let report = run_demo(&config);
            // The demo reports its own failure and still finishes normally
            info!("Demo completed {} steps", report.completed_steps.len());
        }
        Commands::InitConfig { path } => {
            let config = loader.load()?;
            ConfigLoader::with_path(&path).save(&config)?;
            println!("Config written to: {}", path.display());
        }
        Commands::File(command) => {
            let output = command.run()?;
            println!("{}", output);
        }
    }

    Ok(())
}

//! CLI binary entry point for fc-analytics-cli

#[cfg(feature = "cli")]
use anyhow::Context;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use fc_analytics_sdk::cli::commands::import::{ImportArgs, ParseArgs, handle_import, handle_parse};
#[cfg(feature = "cli")]
use fc_analytics_sdk::cli::commands::remove::{RemoveArgs, handle_remove};
#[cfg(feature = "cli")]
use fc_analytics_sdk::cli::commands::status::{StatusArgs, handle_status};
#[cfg(feature = "cli")]
use fc_analytics_sdk::models::DatasetType;
#[cfg(feature = "cli")]
use fc_analytics_sdk::validation::parse_dataset_type;
#[cfg(feature = "cli")]
use std::path::PathBuf;
#[cfg(feature = "cli")]
use tracing_subscriber::EnvFilter;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "fc-analytics-cli")]
#[command(about = "Import football analytics CSV exports into the local stores")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Import a CSV file into a dataset slot, replacing its previous upload
    Import {
        /// Dataset type (players, injuries, evaluations, gps, statistics)
        #[arg(value_parser = parse_dataset_type)]
        dataset: DatasetType,
        /// CSV file to import
        input: PathBuf,
        /// Workspace path (default: current directory)
        #[arg(short, long, default_value = ".")]
        workspace: PathBuf,
        /// List every coerced cell
        #[arg(short, long)]
        pretty: bool,
    },
    /// Parse a CSV file and print the resulting entry without saving it
    Parse {
        /// Dataset type (players, injuries, evaluations, gps, statistics)
        #[arg(value_parser = parse_dataset_type)]
        dataset: DatasetType,
        /// CSV file to parse
        input: PathBuf,
        /// Workspace whose configuration is used (default: current directory)
        #[arg(short, long, default_value = ".")]
        workspace: PathBuf,
        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,
    },
    /// Remove a dataset's upload and its records
    Remove {
        /// Dataset type (players, injuries, evaluations, gps, statistics)
        #[arg(value_parser = parse_dataset_type)]
        dataset: DatasetType,
        /// Workspace path (default: current directory)
        #[arg(short, long, default_value = ".")]
        workspace: PathBuf,
    },
    /// Show the current upload of every dataset slot
    Status {
        /// Workspace path (default: current directory)
        #[arg(short, long, default_value = ".")]
        workspace: PathBuf,
    },
}

#[cfg(feature = "cli")]
fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Import {
            dataset,
            input,
            workspace,
            pretty,
        } => {
            let args = ImportArgs {
                dataset,
                input,
                workspace,
                pretty,
            };
            handle_import(&args).with_context(|| format!("import of {} failed", dataset))
        }
        Commands::Parse {
            dataset,
            input,
            workspace,
            pretty,
        } => {
            let args = ParseArgs {
                dataset,
                input,
                workspace,
                pretty,
            };
            handle_parse(&args).with_context(|| format!("parse of {} failed", args.input.display()))
        }
        Commands::Remove { dataset, workspace } => {
            let args = RemoveArgs { dataset, workspace };
            handle_remove(&args).with_context(|| format!("removal of {} failed", dataset))
        }
        Commands::Status { workspace } => {
            let args = StatusArgs { workspace };
            handle_status(&args).context("status failed")
        }
    }
}

#[cfg(feature = "cli")]
fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature is not enabled. Build with --features cli");
    std::process::exit(1);
}

//! Import and parse command handlers

use std::path::{Path, PathBuf};

use crate::cli::error::CliError;
use crate::cli::{open_workspace, runtime};
use crate::config::IngestConfig;
use crate::convert::{CoercionReport, convert_entry};
use crate::import::CSVImporter;
use crate::models::DatasetType;

/// Arguments for `import`
#[derive(Debug, Clone)]
pub struct ImportArgs {
    pub dataset: DatasetType,
    pub input: PathBuf,
    pub workspace: PathBuf,
    pub pretty: bool,
}

/// Arguments for `parse`
#[derive(Debug, Clone)]
pub struct ParseArgs {
    pub dataset: DatasetType,
    pub input: PathBuf,
    pub workspace: PathBuf,
    pub pretty: bool,
}

/// Load a CSV file as text
pub fn load_input(path: &Path) -> Result<String, CliError> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.to_path_buf()));
    }
    std::fs::read_to_string(path)
        .map_err(|e| CliError::FileReadError(path.to_path_buf(), e.to_string()))
}

fn file_name(path: &Path) -> Result<String, CliError> {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .ok_or_else(|| CliError::InvalidArgument(format!("Not a file: {}", path.display())))
}

fn print_warnings(report: &CoercionReport, pretty: bool) {
    if report.is_empty() {
        return;
    }
    if pretty {
        for warning in &report.warnings {
            eprintln!("  warning: {}", warning);
        }
    } else {
        eprintln!(
            "{} cell(s) could not be parsed and were set to defaults (use --pretty to list them)",
            report.len()
        );
    }
}

/// Upload a file into the workspace stores, replacing the dataset's previous upload
pub fn handle_import(args: &ImportArgs) -> Result<(), CliError> {
    if !args.input.exists() {
        return Err(CliError::FileNotFound(args.input.clone()));
    }

    let rt = runtime()?;
    let outcome = rt.block_on(async {
        let mut manager = open_workspace(&args.workspace).await?;
        Ok::<_, CliError>(manager.upload_file(&args.input, args.dataset).await?)
    })?;

    println!(
        "Imported {} {} record(s) from {}",
        outcome.records,
        args.dataset,
        outcome.entry.latest_file_name().unwrap_or_default()
    );
    if args.pretty {
        println!("  entry id:    {}", outcome.entry.id);
        println!("  uploaded at: {}", outcome.entry.last_update.to_rfc3339());
    }
    print_warnings(&outcome.coercion_warnings, args.pretty);
    Ok(())
}

/// Run the pipeline without persisting and print the entry as JSON
pub fn handle_parse(args: &ParseArgs) -> Result<(), CliError> {
    let text = load_input(&args.input)?;
    let config = IngestConfig::load(&args.workspace)?;

    let entry =
        CSVImporter::from_config(&config).import(&file_name(&args.input)?, &text, args.dataset)?;
    let conversion = convert_entry(&entry);

    let json = if args.pretty {
        serde_json::to_string_pretty(&entry)
    } else {
        serde_json::to_string(&entry)
    }
    .map_err(|e| CliError::SerializationError(e.to_string()))?;

    println!("{}", json);
    print_warnings(&conversion.report, args.pretty);
    Ok(())
}

//! Status command handler

use std::path::PathBuf;

use crate::cli::error::CliError;
use crate::cli::{open_workspace, runtime};
use crate::models::DatasetType;

/// Arguments for `status`
#[derive(Debug, Clone)]
pub struct StatusArgs {
    pub workspace: PathBuf,
}

/// List each dataset slot with its current upload
pub fn handle_status(args: &StatusArgs) -> Result<(), CliError> {
    let rt = runtime()?;
    let manager = rt.block_on(open_workspace(&args.workspace))?;

    for dataset in DatasetType::ALL {
        match manager.csv_files().get_by_name(dataset) {
            Some(entry) => println!(
                "{:<12} {:<32} {:>6} row(s) {:>6} record(s)  {}",
                dataset.as_str(),
                entry.latest_file_name().unwrap_or_default(),
                entry.record_count(),
                manager.data().record_count(dataset),
                entry.last_update.format("%Y-%m-%d %H:%M:%S")
            ),
            None => println!("{:<12} (no upload)", dataset.as_str()),
        }
    }

    if let Some(last_update) = manager.data().last_update {
        println!("Last change: {}", last_update.to_rfc3339());
    }
    Ok(())
}

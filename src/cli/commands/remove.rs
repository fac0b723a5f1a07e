//! Remove command handler

use std::path::PathBuf;

use crate::cli::error::CliError;
use crate::cli::{open_workspace, runtime};
use crate::models::DatasetType;

/// Arguments for `remove`
#[derive(Debug, Clone)]
pub struct RemoveArgs {
    pub dataset: DatasetType,
    pub workspace: PathBuf,
}

/// Drop a dataset's upload and its typed records
pub fn handle_remove(args: &RemoveArgs) -> Result<(), CliError> {
    let rt = runtime()?;
    let removed = rt.block_on(async {
        let mut manager = open_workspace(&args.workspace).await?;
        Ok::<_, CliError>(manager.remove_dataset(args.dataset).await?)
    })?;

    match removed {
        Some(entry) => println!(
            "Removed {} ({} row(s) from {})",
            args.dataset,
            entry.record_count(),
            entry.latest_file_name().unwrap_or_default()
        ),
        None => println!("Nothing to remove for {}", args.dataset),
    }
    Ok(())
}

//! Locate command implementation.

use std::path::Path;

use clap::ValueEnum;

use crate::app::api::LocateOptions;
use crate::domain::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn run_locate(
    root: &Path,
    options: LocateOptions,
    format: OutputFormat,
) -> Result<(), AppError> {
    let tool = crate::app::api::locate_at(root, options)?;

    match format {
        OutputFormat::Text => println!("{} ({})", tool.path.display(), tool.source.label()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&tool)?),
    }
    Ok(())
}

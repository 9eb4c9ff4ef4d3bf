//! Clean command implementation.

use std::path::Path;

use crate::app::api::CleanOptions;
use crate::domain::AppError;

pub fn run_clean(root: &Path, options: CleanOptions) -> Result<(), AppError> {
    let outcome = crate::app::api::clean_at(root, options)?;
    println!("✅ Removed {} artifact(s)", outcome.removed.len());
    Ok(())
}

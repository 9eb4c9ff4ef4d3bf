//! Init command implementation.

use std::path::Path;

use crate::domain::AppError;

pub fn run_init(root: &Path) -> Result<(), AppError> {
    let path = crate::app::api::init_at(root)?;
    println!("✅ Created {}", path.display());
    Ok(())
}

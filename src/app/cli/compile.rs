//! Compile command implementation.

use std::path::Path;

use crate::app::api::CompileOptions;
use crate::domain::AppError;

pub fn run_compile(root: &Path, options: CompileOptions) -> Result<(), AppError> {
    let outcome = crate::app::api::compile_at(root, options)?;

    if !outcome.tool.is_found() {
        return Ok(());
    }

    if outcome.dry_run {
        println!("Dry run: {} shader(s) would be compiled", outcome.plan.len());
    } else if outcome.artifacts.is_empty() {
        println!("No shaders to compile");
    } else {
        println!("✅ Compiled {} shader(s)", outcome.artifacts.len());
    }
    Ok(())
}

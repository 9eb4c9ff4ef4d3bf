//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together configuration
//! loading, context creation and command execution. A `build.rs` can call
//! [`compile_at`] to compile shaders ahead of the crate's own build.

use std::path::{Path, PathBuf};

use crate::adapters::console_reporter::ConsoleReporter;
use crate::adapters::glslc_command::GlslcCommandAdapter;
use crate::adapters::system_environment::SystemEnvironment;
use crate::app::{
    AppContext,
    commands::{clean, compile, init, locate},
};
use crate::domain::configuration::load_config;
use crate::domain::Settings;

pub use crate::app::commands::clean::{CleanOptions, CleanOutcome};
pub use crate::app::commands::compile::{CompileOptions, CompileOutcome};
pub use crate::app::commands::locate::LocateOptions;
pub use crate::domain::AppError;
pub use crate::domain::toolchain::{ResolvedTool, ToolResolution, ToolSource};

/// Create an `AppContext` wired to the real host.
fn create_context() -> AppContext<SystemEnvironment, GlslcCommandAdapter, ConsoleReporter> {
    AppContext::new(SystemEnvironment::new(), GlslcCommandAdapter::new(), ConsoleReporter::new())
}

/// Load `spvbuild.toml` (or `config`) for `root` into effective settings.
fn load_settings(root: &Path, config: Option<&Path>) -> Result<Settings, AppError> {
    let loaded = load_config(root, config)?;
    Ok(Settings::from_config(&loaded))
}

// =============================================================================
// Init Command API
// =============================================================================

/// Write a default `spvbuild.toml` in the current directory.
pub fn init() -> Result<PathBuf, AppError> {
    init_at(std::env::current_dir()?)
}

/// Write a default `spvbuild.toml` at the specified project root.
pub fn init_at(root: impl Into<PathBuf>) -> Result<PathBuf, AppError> {
    init::execute(&root.into())
}

// =============================================================================
// Locate Command API
// =============================================================================

/// Resolve glslc for the current directory.
pub fn locate(options: LocateOptions) -> Result<ResolvedTool, AppError> {
    locate_at(std::env::current_dir()?, options)
}

/// Resolve glslc for the specified project root.
pub fn locate_at(root: impl Into<PathBuf>, options: LocateOptions) -> Result<ResolvedTool, AppError> {
    let root = root.into();
    let mut settings = load_settings(&root, options.config.as_deref())?;
    options.apply(&root, &mut settings);
    locate::execute(&SystemEnvironment::new(), &settings)
}

// =============================================================================
// Compile Command API
// =============================================================================

/// Compile shaders for the current directory.
pub fn compile(options: CompileOptions) -> Result<CompileOutcome, AppError> {
    compile_at(std::env::current_dir()?, options)
}

/// Compile shaders for the specified project root.
///
/// Progress is printed to stdout and warnings to stderr as compilation runs.
pub fn compile_at(
    root: impl Into<PathBuf>,
    options: CompileOptions,
) -> Result<CompileOutcome, AppError> {
    let root = root.into();
    let mut settings = load_settings(&root, options.config.as_deref())?;
    options.apply(&root, &mut settings);
    compile::execute(&create_context(), &settings, options.dry_run)
}

// =============================================================================
// Clean Command API
// =============================================================================

/// Remove compiled artifacts for the current directory.
pub fn clean(options: CleanOptions) -> Result<CleanOutcome, AppError> {
    clean_at(std::env::current_dir()?, options)
}

/// Remove compiled artifacts for the specified project root.
pub fn clean_at(root: impl Into<PathBuf>, options: CleanOptions) -> Result<CleanOutcome, AppError> {
    let root = root.into();
    let mut settings = load_settings(&root, options.config.as_deref())?;
    options.apply(&root, &mut settings);
    clean::execute(&settings)
}

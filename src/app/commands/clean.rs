//! Removal of compiled artifacts.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::configuration::anchor;
use crate::domain::shader::SPIRV_EXTENSION;
use crate::domain::{AppError, Settings};

#[derive(Debug, Clone, Default)]
pub struct CleanOptions {
    pub config: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
}

impl CleanOptions {
    pub fn apply(&self, root: &Path, settings: &mut Settings) {
        if let Some(dir) = &self.output_dir {
            settings.output_dir = anchor(root, dir);
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanOutcome {
    pub removed: Vec<PathBuf>,
}

/// Delete `*.spv` files directly inside the output directory.
///
/// Anything else in the directory is left alone. A missing directory is a no-op.
/// An output directory that is also the source directory is refused.
pub fn execute(settings: &Settings) -> Result<CleanOutcome, AppError> {
    settings.validate()?;

    let entries = match fs::read_dir(&settings.output_dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(CleanOutcome::default()),
        Err(err) => return Err(err.into()),
    };

    let mut removed = Vec::new();
    for entry in entries {
        let path = entry?.path();
        let is_artifact = path.extension().is_some_and(|ext| ext == SPIRV_EXTENSION);
        if is_artifact && path.is_file() {
            fs::remove_file(&path)?;
            removed.push(path);
        }
    }
    removed.sort();

    Ok(CleanOutcome { removed })
}

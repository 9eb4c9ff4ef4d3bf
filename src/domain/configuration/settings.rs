//! Effective settings after anchoring config paths and applying overrides.

use std::fs;
use std::path::{Component, Path, PathBuf};

use super::LoadedConfig;
use crate::domain::AppError;
use crate::domain::toolchain::ToolHints;

/// Everything a compile, locate, or clean run needs, with absolute directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
    pub extensions: Vec<String>,
    pub extra_args: Vec<String>,
    pub tool: ToolHints,
    pub require_tool: bool,
}

impl Settings {
    pub fn from_config(loaded: &LoadedConfig) -> Self {
        let base = &loaded.base_dir;
        let shaders = &loaded.config.shaders;
        let tool = &loaded.config.tool;

        Self {
            source_dir: anchor(base, &shaders.source_dir),
            output_dir: anchor(base, &shaders.output_dir),
            extensions: shaders.extensions.clone(),
            extra_args: shaders.extra_args.clone(),
            tool: ToolHints {
                glslc: tool.glslc.as_deref().map(|path| anchor(base, path)),
                ndk_dir: tool.ndk_dir.as_deref().map(|path| anchor(base, path)),
                ndk_version: tool.ndk_version.clone(),
            },
            require_tool: tool.require_tool,
        }
    }

    /// Checks that hold only once paths are anchored and overrides applied.
    pub fn validate(&self) -> Result<(), AppError> {
        if same_directory(&self.source_dir, &self.output_dir) {
            return Err(AppError::InvalidConfig(format!(
                "source and output directories must differ (both are {})",
                self.source_dir.display()
            )));
        }
        Ok(())
    }
}

fn same_directory(a: &Path, b: &Path) -> bool {
    if lexical_normalize(a) == lexical_normalize(b) {
        return true;
    }
    matches!((fs::canonicalize(a), fs::canonicalize(b)), (Ok(a), Ok(b)) if a == b)
}

/// Drop `.` and fold `..` without touching the file system.
fn lexical_normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other),
        }
    }
    normalized
}

/// Join relative `path` onto `base`; absolute paths pass through.
pub fn anchor(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() { path.to_path_buf() } else { base.join(path) }
}

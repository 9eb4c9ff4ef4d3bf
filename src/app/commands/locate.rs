//! Report which glslc a compile would use.

use std::path::{Path, PathBuf};

use crate::domain::configuration::anchor;
use crate::domain::toolchain::{ResolvedTool, ToolResolution, resolve_glslc};
use crate::domain::{AppError, Settings};
use crate::ports::HostEnvironment;

#[derive(Debug, Clone, Default)]
pub struct LocateOptions {
    pub config: Option<PathBuf>,
    pub glslc: Option<PathBuf>,
}

impl LocateOptions {
    pub fn apply(&self, root: &Path, settings: &mut Settings) {
        if let Some(glslc) = &self.glslc {
            settings.tool.glslc = Some(anchor(root, glslc));
        }
    }
}

/// Execute the locate command. Unlike `compile`, not finding glslc is an error.
pub fn execute<E: HostEnvironment>(env: &E, settings: &Settings) -> Result<ResolvedTool, AppError> {
    match resolve_glslc(env, &settings.tool)? {
        ToolResolution::Found(tool) => Ok(tool),
        ToolResolution::NotFound => Err(AppError::ToolNotFound),
    }
}

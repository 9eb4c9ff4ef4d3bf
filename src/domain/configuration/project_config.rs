//! Project configuration domain models.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;
use crate::domain::shader::default_extensions;

/// Configuration loaded from `spvbuild.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Shader source and artifact layout.
    #[serde(default)]
    pub shaders: ShaderConfig,
    /// Compiler lookup overrides.
    #[serde(default)]
    pub tool: ToolConfig,
}

impl ProjectConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.shaders.validate()
    }

    /// Strip leading dots so `.vert` and `vert` mean the same thing.
    pub(crate) fn normalize(&mut self) {
        for ext in &mut self.shaders.extensions {
            *ext = ext.trim().trim_start_matches('.').to_string();
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShaderConfig {
    /// Directory scanned (non-recursively) for GLSL sources.
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,
    /// Directory receiving `<name>.spv` artifacts.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Source extensions to compile, without the dot.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Extra arguments passed to glslc before `-o`.
    #[serde(default)]
    pub extra_args: Vec<String>,
}

impl Default for ShaderConfig {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
            output_dir: default_output_dir(),
            extensions: default_extensions(),
            extra_args: Vec::new(),
        }
    }
}

impl ShaderConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.source_dir.as_os_str().is_empty() {
            return Err(AppError::InvalidConfig("shaders.source_dir must not be empty".into()));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(AppError::InvalidConfig("shaders.output_dir must not be empty".into()));
        }
        if self.extensions.is_empty() {
            return Err(AppError::InvalidConfig("shaders.extensions must not be empty".into()));
        }
        if let Some(bad) = self.extensions.iter().find(|ext| !is_valid_extension(ext)) {
            return Err(AppError::InvalidConfig(format!(
                "shaders.extensions contains invalid entry '{bad}'"
            )));
        }
        Ok(())
    }
}

fn is_valid_extension(ext: &str) -> bool {
    !ext.is_empty() && !ext.contains(['.', '/', '\\']) && !ext.contains(char::is_whitespace)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolConfig {
    /// Exact glslc executable; disables the search.
    #[serde(default)]
    pub glslc: Option<PathBuf>,
    /// NDK root used when `ANDROID_NDK_HOME`/`ANDROID_NDK` are unset.
    #[serde(default)]
    pub ndk_dir: Option<PathBuf>,
    /// Side-by-side NDK version under `$ANDROID_HOME/ndk/`.
    #[serde(default)]
    pub ndk_version: Option<String>,
    /// Fail instead of warning when glslc cannot be found.
    #[serde(default)]
    pub require_tool: bool,
}

fn default_source_dir() -> PathBuf {
    PathBuf::from("src/main/shaders")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("src/main/assets/shaders")
}

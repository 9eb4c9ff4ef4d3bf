use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::shader::ProcessExit;

/// Library-wide error type for spvbuild operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration values failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// JSON rendering failed.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Explicitly requested config file does not exist.
    #[error("Config file not found: {}", .0.display())]
    ConfigMissing(PathBuf),

    /// Config file already exists at the target location.
    #[error("Config file already exists: {}", .0.display())]
    ConfigExists(PathBuf),

    /// No glslc-compatible compiler could be located.
    #[error(
        "glslc not found. Install the Vulkan SDK, use the NDK's glslc, or set `tool.glslc` in spvbuild.toml"
    )]
    ToolNotFound,

    /// A configured compiler override points at nothing.
    #[error("Configured glslc does not exist: {}", .0.display())]
    ToolOverrideMissing(PathBuf),

    /// The compiler process could not be started.
    #[error("Failed to launch '{tool}': {details}")]
    ToolLaunch { tool: String, details: String },

    /// The compiler exited unsuccessfully for a shader.
    #[error("Failed to compile {shader}: glslc exited with {exit}")]
    CompilationFailure { shader: String, exit: ProcessExit },
}

impl AppError {
    /// Provide an `io::ErrorKind`-like view for callers that branch on error class.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::InvalidConfig(_) | AppError::TomlParseError(_) => {
                io::ErrorKind::InvalidInput
            }
            AppError::ConfigMissing(_)
            | AppError::ToolNotFound
            | AppError::ToolOverrideMissing(_) => io::ErrorKind::NotFound,
            AppError::ConfigExists(_) => io::ErrorKind::AlreadyExists,
            AppError::Json(_) => io::ErrorKind::InvalidData,
            AppError::ToolLaunch { .. } | AppError::CompilationFailure { .. } => {
                io::ErrorKind::Other
            }
        }
    }
}

//! Locating a GLSL-to-SPIR-V compiler on the host.

mod host;
mod ndk;
mod resolver;

use std::path::PathBuf;

use serde::Serialize;

pub use host::HostPlatform;
pub use ndk::ndk_root;
pub use resolver::resolve_glslc;

/// Executable stem of the compiler, before any platform suffix.
pub const GLSLC: &str = "glslc";

/// Where a resolved compiler came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolSource {
    /// `tool.glslc` in the config or `--glslc` on the command line.
    Override,
    /// `<ndk>/shader-tools/<host-tag>/`.
    Ndk,
    /// `$VULKAN_SDK/Bin/`.
    VulkanSdk,
    /// `which`/`where` lookup.
    SystemPath,
}

impl ToolSource {
    pub fn label(self) -> &'static str {
        match self {
            ToolSource::Override => "configured path",
            ToolSource::Ndk => "Android NDK",
            ToolSource::VulkanSdk => "Vulkan SDK",
            ToolSource::SystemPath => "PATH",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedTool {
    pub path: PathBuf,
    pub source: ToolSource,
}

/// Outcome of a compiler search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolResolution {
    Found(ResolvedTool),
    NotFound,
}

impl ToolResolution {
    pub fn tool(&self) -> Option<&ResolvedTool> {
        match self {
            ToolResolution::Found(tool) => Some(tool),
            ToolResolution::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, ToolResolution::Found(_))
    }
}

/// Project-level inputs to the search, beyond environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolHints {
    /// Exact compiler to use; skips every other strategy.
    pub glslc: Option<PathBuf>,
    /// NDK root used when neither `ANDROID_NDK_HOME` nor `ANDROID_NDK` is set.
    pub ndk_dir: Option<PathBuf>,
    /// Version directory under `<sdk>/ndk/` to prefer over the newest one.
    pub ndk_version: Option<String>,
}

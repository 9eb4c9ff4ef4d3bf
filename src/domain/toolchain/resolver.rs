use std::path::PathBuf;

use super::ndk::{ndk_root, non_empty_var};
use super::{GLSLC, ResolvedTool, ToolHints, ToolResolution, ToolSource};
use crate::domain::AppError;
use crate::ports::HostEnvironment;

pub const VULKAN_SDK: &str = "VULKAN_SDK";

/// Find `glslc`: override, NDK shader-tools, Vulkan SDK, then `PATH`.
///
/// Stops at the first strategy that produces an existing executable. Only a
/// configured override that does not exist is an error; every other miss falls
/// through to the next strategy and finally to `NotFound`.
pub fn resolve_glslc<E: HostEnvironment + ?Sized>(
    env: &E,
    hints: &ToolHints,
) -> Result<ToolResolution, AppError> {
    if let Some(path) = &hints.glslc {
        if !env.exists(path) {
            return Err(AppError::ToolOverrideMissing(path.clone()));
        }
        return Ok(found(path.clone(), ToolSource::Override));
    }

    let platform = env.platform();
    let executable = platform.executable_name(GLSLC);

    if let Some(ndk) = ndk_root(env, hints) {
        let candidate = ndk.join("shader-tools").join(platform.ndk_host_tag()).join(&executable);
        if env.exists(&candidate) {
            return Ok(found(candidate, ToolSource::Ndk));
        }
    }

    if let Some(sdk) = non_empty_var(env, VULKAN_SDK) {
        let candidate = PathBuf::from(sdk).join("Bin").join(&executable);
        if env.exists(&candidate) {
            return Ok(found(candidate, ToolSource::VulkanSdk));
        }
    }

    Ok(match env.locate_on_path(GLSLC) {
        Some(path) => found(path, ToolSource::SystemPath),
        None => ToolResolution::NotFound,
    })
}

fn found(path: PathBuf, source: ToolSource) -> ToolResolution {
    ToolResolution::Found(ResolvedTool { path, source })
}

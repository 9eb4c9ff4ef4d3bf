use std::path::PathBuf;

use super::ToolHints;
use crate::ports::HostEnvironment;

pub const ANDROID_NDK_HOME: &str = "ANDROID_NDK_HOME";
pub const ANDROID_NDK: &str = "ANDROID_NDK";
pub const ANDROID_HOME: &str = "ANDROID_HOME";
pub const ANDROID_SDK_ROOT: &str = "ANDROID_SDK_ROOT";

/// Read a variable, treating blank values as unset.
pub(super) fn non_empty_var<E: HostEnvironment + ?Sized>(env: &E, key: &str) -> Option<String> {
    env.var(key).filter(|value| !value.trim().is_empty())
}

/// NDK root: `ANDROID_NDK_HOME`, then `ANDROID_NDK`, then the default NDK directory.
pub fn ndk_root<E: HostEnvironment + ?Sized>(env: &E, hints: &ToolHints) -> Option<PathBuf> {
    non_empty_var(env, ANDROID_NDK_HOME)
        .or_else(|| non_empty_var(env, ANDROID_NDK))
        .map(PathBuf::from)
        .or_else(|| default_ndk_dir(env, hints))
}

/// Configured `ndk_dir`, else `<sdk>/ndk/<version>` with the pinned or newest version.
fn default_ndk_dir<E: HostEnvironment + ?Sized>(env: &E, hints: &ToolHints) -> Option<PathBuf> {
    if let Some(dir) = &hints.ndk_dir {
        return Some(dir.clone());
    }

    let sdk = non_empty_var(env, ANDROID_HOME).or_else(|| non_empty_var(env, ANDROID_SDK_ROOT))?;
    let side_by_side = PathBuf::from(sdk).join("ndk");

    if let Some(version) = &hints.ndk_version {
        return Some(side_by_side.join(version));
    }

    newest_version_dir(env.subdirectories(&side_by_side))
}

fn newest_version_dir(dirs: Vec<PathBuf>) -> Option<PathBuf> {
    dirs.into_iter()
        .filter_map(|dir| {
            let key = version_key(dir.file_name()?.to_str()?)?;
            Some((key, dir))
        })
        .max_by(|a, b| a.0.cmp(&b.0))
        .map(|(_, dir)| dir)
}

/// `27.0.12077973` -> `[27, 0, 12077973]`; anything non-numeric is not a version.
fn version_key(name: &str) -> Option<Vec<u64>> {
    name.split('.').map(|part| part.parse().ok()).collect()
}

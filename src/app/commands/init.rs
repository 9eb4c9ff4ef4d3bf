//! Creation of a starter `spvbuild.toml`.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::domain::{AppError, CONFIG_FILE};

/// Starter config; every key shown is the built-in default.
pub const DEFAULT_CONFIG: &str = r#"# spvbuild configuration
# Paths are relative to this file.

[shaders]
source_dir = "src/main/shaders"
output_dir = "src/main/assets/shaders"
extensions = ["vert", "frag", "comp", "geom", "tesc", "tese"]
# Passed to glslc before `-o`, e.g. ["--target-env=vulkan1.1", "-O"]
extra_args = []

[tool]
# Use this glslc instead of searching the NDK, VULKAN_SDK, and PATH.
# glslc = "/path/to/glslc"
# NDK root used when ANDROID_NDK_HOME and ANDROID_NDK are unset.
# ndk_dir = "/path/to/android-ndk"
# Side-by-side NDK under $ANDROID_HOME/ndk/ (newest installed when unset).
# ndk_version = "27.0.12077973"
# Fail the build instead of warning when glslc is missing.
require_tool = false
"#;

/// Execute the init command. Returns the path written.
pub fn execute(root: &Path) -> Result<PathBuf, AppError> {
    let path = root.join(CONFIG_FILE);
    let mut file = OpenOptions::new().write(true).create_new(true).open(&path).map_err(|err| {
        if err.kind() == io::ErrorKind::AlreadyExists {
            AppError::ConfigExists(path.clone())
        } else {
            AppError::Io(err)
        }
    })?;
    file.write_all(DEFAULT_CONFIG.as_bytes())?;
    Ok(path)
}

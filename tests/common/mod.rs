//! Shared testing harness for `spvbuild` integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Variables the compiler search reads; cleared so the host cannot leak in.
const SEARCH_VARS: [&str; 5] =
    ["ANDROID_NDK_HOME", "ANDROID_NDK", "ANDROID_HOME", "ANDROID_SDK_ROOT", "VULKAN_SDK"];

/// Stand-in for glslc: logs the source it was given and copies it to `-o`.
/// Sources whose name contains `broken` fail with exit status 1.
#[cfg(unix)]
const FAKE_GLSLC: &str = r#"#!/bin/sh
PATH=/usr/bin:/bin
export PATH
out=""
src=""
while [ $# -gt 0 ]; do
  case "$1" in
    -o) out="$2"; shift 2 ;;
    -*) shift ;;
    *) src="$1"; shift ;;
  esac
done
echo "$(basename "$src")" >> "__LOG__"
case "$src" in
  *broken*) echo "$src:1: error: syntax error" >&2; exit 1 ;;
esac
cp "$src" "$out"
"#;

/// Testing harness providing an isolated environment for CLI exercises.
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    empty_bin: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        let empty_bin = root.path().join("empty-bin");
        fs::create_dir_all(&empty_bin).expect("Failed to create empty PATH directory");

        Self { root, work_dir, empty_bin }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Project directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub fn shader_dir(&self) -> PathBuf {
        self.work_dir.join("src/main/shaders")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.work_dir.join("src/main/assets/shaders")
    }

    /// Build a command for invoking `spvbuild` in the project directory.
    ///
    /// `PATH` points at an empty directory, so not even `which` is reachable
    /// unless a test overrides it.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("spvbuild").expect("Failed to locate spvbuild binary");
        cmd.current_dir(&self.work_dir).env("HOME", self.home()).env("PATH", &self.empty_bin);
        for var in SEARCH_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Write a shader source into the default source directory.
    pub fn write_shader(&self, name: &str, body: &str) {
        let dir = self.shader_dir();
        fs::create_dir_all(&dir).expect("Failed to create shader directory");
        fs::write(dir.join(name), body).expect("Failed to write shader");
    }

    /// Write `spvbuild.toml` in the project directory.
    pub fn write_config(&self, content: &str) {
        fs::write(self.work_dir.join("spvbuild.toml"), content).expect("Failed to write config");
    }

    /// Install the fake compiler at `dir/glslc`, creating `dir`.
    #[cfg(unix)]
    pub fn install_fake_glslc(&self, dir: &Path) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        fs::create_dir_all(dir).expect("Failed to create glslc directory");
        let path = dir.join("glslc");
        let script = FAKE_GLSLC.replace("__LOG__", &self.glslc_log().display().to_string());
        fs::write(&path, script).expect("Failed to write fake glslc");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to mark fake glslc executable");
        path
    }

    /// Install the fake compiler the way the Vulkan SDK lays it out.
    #[cfg(unix)]
    pub fn install_vulkan_sdk(&self) -> PathBuf {
        let sdk = self.root.path().join("VulkanSDK");
        self.install_fake_glslc(&sdk.join("Bin"));
        sdk
    }

    /// Install the fake compiler inside an NDK tree for this host.
    #[cfg(unix)]
    pub fn install_ndk(&self) -> PathBuf {
        let ndk = self.root.path().join("android-ndk");
        let tag = if cfg!(target_os = "macos") { "darwin-x86_64" } else { "linux-x86_64" };
        self.install_fake_glslc(&ndk.join("shader-tools").join(tag));
        ndk
    }

    /// Source names the fake compiler was invoked with, in order.
    pub fn compiled(&self) -> Vec<String> {
        fs::read_to_string(self.glslc_log())
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Sorted file names in the output directory.
    pub fn spv_files(&self) -> Vec<String> {
        let Ok(entries) = fs::read_dir(self.output_dir()) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    fn glslc_log(&self) -> PathBuf {
        self.root.path().join("glslc.log")
    }
}

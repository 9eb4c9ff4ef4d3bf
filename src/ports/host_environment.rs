use std::path::{Path, PathBuf};

use crate::domain::toolchain::HostPlatform;

/// Port over the host facts the compiler search depends on.
pub trait HostEnvironment {
    /// Read an environment variable. Unset and non-UTF-8 values are `None`.
    fn var(&self, key: &str) -> Option<String>;

    /// Operating system family of the host.
    fn platform(&self) -> HostPlatform;

    /// Whether anything exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Immediate subdirectories of `path`; empty when it cannot be read.
    fn subdirectories(&self, path: &Path) -> Vec<PathBuf>;

    /// Ask the platform lookup command (`which`/`where`) for `program`.
    ///
    /// Returns the first line it prints, or `None` on any failure.
    fn locate_on_path(&self, program: &str) -> Option<PathBuf>;
}

use serde::Serialize;

/// Host operating system families the NDK ships prebuilt tools for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HostPlatform {
    Windows,
    MacOs,
    Linux,
}

impl HostPlatform {
    pub fn current() -> Self {
        if cfg!(windows) {
            HostPlatform::Windows
        } else if cfg!(target_os = "macos") {
            HostPlatform::MacOs
        } else {
            HostPlatform::Linux
        }
    }

    /// Directory name under `<ndk>/shader-tools/` holding this host's binaries.
    ///
    /// The NDK only ships x86_64 host tools; Apple Silicon runs them under Rosetta.
    pub fn ndk_host_tag(self) -> &'static str {
        match self {
            HostPlatform::Windows => "windows-x86_64",
            HostPlatform::MacOs => "darwin-x86_64",
            HostPlatform::Linux => "linux-x86_64",
        }
    }

    pub fn executable_name(self, stem: &str) -> String {
        match self {
            HostPlatform::Windows => format!("{stem}.exe"),
            HostPlatform::MacOs | HostPlatform::Linux => stem.to_string(),
        }
    }

    /// Command that prints the location of an executable found on `PATH`.
    pub fn path_lookup_command(self) -> &'static str {
        match self {
            HostPlatform::Windows => "where",
            HostPlatform::MacOs | HostPlatform::Linux => "which",
        }
    }
}

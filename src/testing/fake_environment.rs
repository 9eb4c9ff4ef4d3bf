use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::toolchain::HostPlatform;
use crate::ports::HostEnvironment;

/// In-memory host: variables, existing paths, and a canned `which` answer.
pub struct FakeEnvironment {
    vars: HashMap<String, String>,
    platform: HostPlatform,
    files: HashSet<PathBuf>,
    subdirs: HashMap<PathBuf, Vec<PathBuf>>,
    on_path: Option<PathBuf>,
    pub var_reads: Mutex<Vec<String>>,
    pub path_lookups: Mutex<Vec<String>>,
}

impl FakeEnvironment {
    pub fn new() -> Self {
        Self {
            vars: HashMap::new(),
            platform: HostPlatform::Linux,
            files: HashSet::new(),
            subdirs: HashMap::new(),
            on_path: None,
            var_reads: Mutex::new(Vec::new()),
            path_lookups: Mutex::new(Vec::new()),
        }
    }

    pub fn with_var(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_platform(mut self, platform: HostPlatform) -> Self {
        self.platform = platform;
        self
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.insert(path.into());
        self
    }

    pub fn with_subdirs(mut self, parent: impl Into<PathBuf>, names: &[&str]) -> Self {
        let parent = parent.into();
        let children = names.iter().map(|name| parent.join(name)).collect();
        self.subdirs.insert(parent, children);
        self
    }

    pub fn with_on_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.on_path = Some(path.into());
        self
    }

    pub fn path_lookup_count(&self) -> usize {
        self.path_lookups.lock().unwrap().len()
    }

    pub fn was_read(&self, key: &str) -> bool {
        self.var_reads.lock().unwrap().iter().any(|read| read == key)
    }
}

impl HostEnvironment for FakeEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        self.var_reads.lock().unwrap().push(key.to_string());
        self.vars.get(key).cloned()
    }

    fn platform(&self) -> HostPlatform {
        self.platform
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains(path)
    }

    fn subdirectories(&self, path: &Path) -> Vec<PathBuf> {
        self.subdirs.get(path).cloned().unwrap_or_default()
    }

    fn locate_on_path(&self, program: &str) -> Option<PathBuf> {
        self.path_lookups.lock().unwrap().push(program.to_string());
        self.on_path.clone()
    }
}

//! Project configuration loading.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::AppError;

use super::ProjectConfig;

/// Config file looked up in the project root.
pub const CONFIG_FILE: &str = "spvbuild.toml";

/// Config file plus the directory its relative paths are anchored to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedConfig {
    pub base_dir: PathBuf,
    pub config: ProjectConfig,
}

/// Load `spvbuild.toml`.
///
/// With `explicit` set, that file must exist and its parent becomes the base
/// directory. Otherwise `<root>/spvbuild.toml` is read when present and the
/// defaults apply when it is not.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<LoadedConfig, AppError> {
    if let Some(path) = explicit {
        let path = if path.is_absolute() { path.to_path_buf() } else { root.join(path) };
        let content = fs::read_to_string(&path).map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                AppError::ConfigMissing(path.clone())
            } else {
                AppError::Io(err)
            }
        })?;
        let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_else(|| root.to_path_buf());
        return Ok(LoadedConfig { base_dir, config: parse_config_content(&content)? });
    }

    let path = root.join(CONFIG_FILE);
    let config = match fs::read_to_string(&path) {
        Ok(content) => parse_config_content(&content)?,
        Err(err) if err.kind() == io::ErrorKind::NotFound => ProjectConfig::default(),
        Err(err) => return Err(err.into()),
    };
    Ok(LoadedConfig { base_dir: root.to_path_buf(), config })
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<ProjectConfig, AppError> {
    let mut config: ProjectConfig = toml::from_str(content)?;
    config.normalize();
    config.validate()?;
    Ok(config)
}

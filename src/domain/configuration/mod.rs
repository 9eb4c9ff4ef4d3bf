pub mod loader;
pub mod project_config;
pub mod settings;

pub use loader::{CONFIG_FILE, LoadedConfig, load_config, parse_config_content};
pub use project_config::{ProjectConfig, ShaderConfig, ToolConfig};
pub use settings::{Settings, anchor};

pub mod configuration;
pub mod error;
pub mod shader;
pub mod toolchain;

pub use configuration::{CONFIG_FILE, LoadedConfig, ProjectConfig, Settings};
pub use error::AppError;
pub use shader::{CompileJob, CompilePlan, CompilerInvocation, ProcessExit, ShaderStage};
pub use toolchain::{HostPlatform, ResolvedTool, ToolHints, ToolResolution, ToolSource};

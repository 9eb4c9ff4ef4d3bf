//! spvbuild: locate glslc and batch-compile GLSL shaders to SPIR-V.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    AppError, CleanOptions, CleanOutcome, CompileOptions, CompileOutcome, LocateOptions,
    ResolvedTool, ToolResolution, ToolSource, clean, clean_at, compile, compile_at, init, init_at,
    locate, locate_at,
};
pub use domain::shader::{CompilePlan, ShaderStage};

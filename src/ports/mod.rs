mod host_environment;
mod reporter;
mod shader_compiler;

pub use host_environment::HostEnvironment;
pub use reporter::Reporter;
pub use shader_compiler::ShaderCompiler;

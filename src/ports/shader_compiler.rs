use crate::domain::AppError;
use crate::domain::shader::{CompilerInvocation, ProcessExit};

/// Port for running the external GLSL compiler.
pub trait ShaderCompiler {
    /// Run one compiler process to completion with inherited standard streams.
    ///
    /// An unsuccessful exit is returned as a value; `Err` means the process
    /// could not be run at all.
    fn run(&self, invocation: &CompilerInvocation) -> Result<ProcessExit, AppError>;
}

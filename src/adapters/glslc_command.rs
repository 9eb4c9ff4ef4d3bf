use std::process::Command;

use crate::domain::AppError;
use crate::domain::shader::{CompilerInvocation, ProcessExit};
use crate::ports::ShaderCompiler;

/// Runs glslc as a child process sharing this process's stdio.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlslcCommandAdapter;

impl GlslcCommandAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl ShaderCompiler for GlslcCommandAdapter {
    fn run(&self, invocation: &CompilerInvocation) -> Result<ProcessExit, AppError> {
        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .status()
            .map_err(|e| AppError::ToolLaunch {
                tool: invocation.program.display().to_string(),
                details: e.to_string(),
            })?;

        Ok(ProcessExit::from(status))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn invocation(program: &str, args: &[&str]) -> CompilerInvocation {
        CompilerInvocation {
            program: PathBuf::from(program),
            args: args.iter().map(|arg| (*arg).into()).collect(),
        }
    }

    #[test]
    fn reports_exit_codes() {
        let adapter = GlslcCommandAdapter::new();
        assert!(adapter.run(&invocation("true", &[])).unwrap().is_success());
        assert_eq!(adapter.run(&invocation("sh", &["-c", "exit 3"])).unwrap(), ProcessExit::failure(3));
    }

    #[test]
    fn missing_program_is_a_launch_error() {
        let err = GlslcCommandAdapter::new()
            .run(&invocation("/nonexistent/glslc", &["-o", "a.spv", "a.vert"]))
            .unwrap_err();
        assert!(matches!(err, AppError::ToolLaunch { tool, .. } if tool == "/nonexistent/glslc"));
    }
}

use crate::ports::{HostEnvironment, Reporter, ShaderCompiler};

/// Application context holding dependencies for command execution.
pub struct AppContext<E: HostEnvironment, C: ShaderCompiler, R: Reporter> {
    environment: E,
    compiler: C,
    reporter: R,
}

impl<E: HostEnvironment, C: ShaderCompiler, R: Reporter> AppContext<E, C, R> {
    /// Create a new application context.
    pub fn new(environment: E, compiler: C, reporter: R) -> Self {
        Self { environment, compiler, reporter }
    }

    /// Host facts used to locate glslc.
    pub fn environment(&self) -> &E {
        &self.environment
    }

    /// Runner for compiler processes.
    pub fn compiler(&self) -> &C {
        &self.compiler
    }

    /// Sink for progress and warnings.
    pub fn reporter(&self) -> &R {
        &self.reporter
    }
}

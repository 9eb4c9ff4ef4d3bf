use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::domain::AppError;
use crate::domain::shader::{CompilerInvocation, ProcessExit};
use crate::ports::ShaderCompiler;

/// SPIR-V magic number, little-endian.
const SPIRV_MAGIC: [u8; 4] = [0x03, 0x02, 0x23, 0x07];

/// Records invocations and writes a stub module to the `-o` target.
#[derive(Default)]
pub struct FakeCompiler {
    pub invocations: Mutex<Vec<CompilerInvocation>>,
    fail_on: Option<String>,
}

impl FakeCompiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exit with status 1 when the source file name equals `name`.
    pub fn failing_on(name: &str) -> Self {
        Self { invocations: Mutex::new(Vec::new()), fail_on: Some(name.to_string()) }
    }

    pub fn invocation_count(&self) -> usize {
        self.invocations.lock().unwrap().len()
    }

    /// Source file names in invocation order.
    pub fn compiled_sources(&self) -> Vec<String> {
        self.invocations
            .lock()
            .unwrap()
            .iter()
            .filter_map(|inv| inv.args.last())
            .map(|source| {
                PathBuf::from(source).file_name().unwrap().to_string_lossy().into_owned()
            })
            .collect()
    }
}

impl ShaderCompiler for FakeCompiler {
    fn run(&self, invocation: &CompilerInvocation) -> Result<ProcessExit, AppError> {
        self.invocations.lock().unwrap().push(invocation.clone());

        let args = &invocation.args;
        let output_at = args.iter().position(|arg| arg == "-o").expect("invocation has -o");
        let output = PathBuf::from(&args[output_at + 1]);
        let source = PathBuf::from(args.last().expect("invocation has a source"));

        let source_name = source.file_name().unwrap().to_string_lossy();
        if self.fail_on.as_deref() == Some(source_name.as_ref()) {
            return Ok(ProcessExit::failure(1));
        }

        fs::write(&output, SPIRV_MAGIC)?;
        Ok(ProcessExit::success())
    }
}

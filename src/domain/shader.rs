//! Shader sources, SPIR-V artifacts, and the compile plan that pairs them.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

/// Extension appended to a source file name to form its artifact name.
pub const SPIRV_EXTENSION: &str = "spv";

/// Pipeline stage implied by a GLSL source extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
    Compute,
    Geometry,
    TessControl,
    TessEvaluation,
}

impl ShaderStage {
    pub const ALL: [ShaderStage; 6] = [
        ShaderStage::Vertex,
        ShaderStage::Fragment,
        ShaderStage::Compute,
        ShaderStage::Geometry,
        ShaderStage::TessControl,
        ShaderStage::TessEvaluation,
    ];

    pub fn extension(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vert",
            ShaderStage::Fragment => "frag",
            ShaderStage::Compute => "comp",
            ShaderStage::Geometry => "geom",
            ShaderStage::TessControl => "tesc",
            ShaderStage::TessEvaluation => "tese",
        }
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|stage| stage.extension() == ext)
    }
}

/// Default recognized source extensions, one per stage.
pub fn default_extensions() -> Vec<String> {
    ShaderStage::ALL.iter().map(|stage| stage.extension().to_string()).collect()
}

/// Artifact location for a source: `<output_dir>/<source file name>.spv`.
///
/// Returns `None` for paths without a file name (`..`, `/`).
pub fn artifact_path(output_dir: &Path, source: &Path) -> Option<PathBuf> {
    let mut name = source.file_name()?.to_os_string();
    name.push(".");
    name.push(SPIRV_EXTENSION);
    Some(output_dir.join(name))
}

/// Text after the last `.` of the file name, so `.vert` has extension `vert`.
pub fn source_extension(path: &Path) -> Option<&str> {
    let name = path.file_name()?.to_str()?;
    name.rsplit_once('.').map(|(_, ext)| ext)
}

/// One source-to-artifact compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileJob {
    pub source: PathBuf,
    pub artifact: PathBuf,
    pub stage: Option<ShaderStage>,
}

impl CompileJob {
    pub fn source_name(&self) -> String {
        display_file_name(&self.source)
    }

    pub fn artifact_name(&self) -> String {
        display_file_name(&self.artifact)
    }
}

fn display_file_name(path: &Path) -> String {
    path.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_default()
}

/// Ordered compile jobs plus the files that were skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompilePlan {
    pub jobs: Vec<CompileJob>,
    pub ignored: Vec<PathBuf>,
}

impl CompilePlan {
    /// Partition `files` into jobs and ignored entries.
    ///
    /// Both lists are ordered by file name so repeated builds invoke the
    /// compiler in the same sequence regardless of directory iteration order.
    pub fn build(mut files: Vec<PathBuf>, output_dir: &Path, extensions: &[String]) -> Self {
        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        let mut plan = CompilePlan::default();
        for file in files {
            let ext = source_extension(&file);
            let recognized = ext.is_some_and(|ext| extensions.iter().any(|known| known == ext));
            match (recognized, artifact_path(output_dir, &file)) {
                (true, Some(artifact)) => {
                    let stage = ext.and_then(ShaderStage::from_extension);
                    plan.jobs.push(CompileJob { source: file, artifact, stage });
                }
                _ => plan.ignored.push(file),
            }
        }
        plan
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Inputs a `build.rs` should watch with `cargo:rerun-if-changed`.
    pub fn rerun_paths(&self) -> Vec<&Path> {
        self.jobs.iter().map(|job| job.source.as_path()).collect()
    }
}

/// A fully spelled-out compiler command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerInvocation {
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

impl CompilerInvocation {
    /// `<glslc> [extra_args...] -o <artifact> <source>`
    pub fn for_job(program: &Path, job: &CompileJob, extra_args: &[String]) -> Self {
        let mut args: Vec<OsString> = extra_args.iter().map(OsString::from).collect();
        args.push(OsString::from("-o"));
        args.push(job.artifact.clone().into_os_string());
        args.push(job.source.clone().into_os_string());
        Self { program: program.to_path_buf(), args }
    }
}

/// Exit state of a finished compiler process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessExit {
    /// `None` when the process was terminated by a signal.
    pub code: Option<i32>,
}

impl ProcessExit {
    pub fn success() -> Self {
        Self { code: Some(0) }
    }

    pub fn failure(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<ExitStatus> for ProcessExit {
    fn from(status: ExitStatus) -> Self {
        Self { code: status.code() }
    }
}

impl fmt::Display for ProcessExit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit code {code}"),
            None => write!(f, "termination by signal"),
        }
    }
}

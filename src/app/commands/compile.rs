//! Batch compilation of a shader directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::app::AppContext;
use crate::domain::configuration::anchor;
use crate::domain::shader::{CompilePlan, CompilerInvocation};
use crate::domain::toolchain::{ToolResolution, resolve_glslc};
use crate::domain::{AppError, Settings};
use crate::ports::{HostEnvironment, Reporter, ShaderCompiler};

pub const TOOL_NOT_FOUND_WARNING: &str = "glslc not found! Please compile shaders manually. \
     You can install the Vulkan SDK or use the Android NDK's glslc.";

/// Command-line overrides layered over `spvbuild.toml`.
#[derive(Debug, Clone, Default)]
pub struct CompileOptions {
    pub config: Option<PathBuf>,
    pub source_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub glslc: Option<PathBuf>,
    /// Fail with `ToolNotFound` instead of warning.
    pub require_tool: bool,
    /// Resolve and plan, but run nothing and create nothing.
    pub dry_run: bool,
}

impl CompileOptions {
    /// Apply overrides; relative paths are taken relative to `root`.
    pub fn apply(&self, root: &Path, settings: &mut Settings) {
        if let Some(dir) = &self.source_dir {
            settings.source_dir = anchor(root, dir);
        }
        if let Some(dir) = &self.output_dir {
            settings.output_dir = anchor(root, dir);
        }
        if let Some(glslc) = &self.glslc {
            settings.tool.glslc = Some(anchor(root, glslc));
        }
        settings.require_tool |= self.require_tool;
    }
}

/// What a compile run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOutcome {
    pub tool: ToolResolution,
    /// Jobs in execution order; empty when no tool was found.
    pub plan: CompilePlan,
    /// Artifacts written by this run.
    pub artifacts: Vec<PathBuf>,
    pub warnings: Vec<String>,
    pub dry_run: bool,
}

impl CompileOutcome {
    fn new(dry_run: bool) -> Self {
        Self {
            tool: ToolResolution::NotFound,
            plan: CompilePlan::default(),
            artifacts: Vec::new(),
            warnings: Vec::new(),
            dry_run,
        }
    }

    fn warn(&mut self, reporter: &impl Reporter, message: impl Into<String>) {
        let message = message.into();
        reporter.warn(&message);
        self.warnings.push(message);
    }
}

/// Execute the compile command.
///
/// Settings whose source and output directories coincide are rejected before
/// anything runs. A missing compiler is a warning unless `settings.require_tool`
/// is set. The first shader whose compilation fails aborts the batch.
pub fn execute<E, C, R>(
    ctx: &AppContext<E, C, R>,
    settings: &Settings,
    dry_run: bool,
) -> Result<CompileOutcome, AppError>
where
    E: HostEnvironment,
    C: ShaderCompiler,
    R: Reporter,
{
    settings.validate()?;

    let mut outcome = CompileOutcome::new(dry_run);
    let reporter = ctx.reporter();

    let resolution = resolve_glslc(ctx.environment(), &settings.tool)?;
    let glslc = match &resolution {
        ToolResolution::Found(tool) => tool.path.clone(),
        ToolResolution::NotFound if settings.require_tool => return Err(AppError::ToolNotFound),
        ToolResolution::NotFound => {
            outcome.warn(reporter, TOOL_NOT_FOUND_WARNING);
            return Ok(outcome);
        }
    };
    outcome.tool = resolution;
    reporter.info(&format!("Using glslc: {}", glslc.display()));

    if !dry_run {
        fs::create_dir_all(&settings.output_dir)?;
    }

    let Some(files) = list_files(&settings.source_dir)? else {
        outcome.warn(
            reporter,
            format!("Shader directory not found: {}", settings.source_dir.display()),
        );
        return Ok(outcome);
    };
    outcome.plan = CompilePlan::build(files, &settings.output_dir, &settings.extensions);

    for job in &outcome.plan.jobs {
        if dry_run {
            reporter.info(&format!("Would compile {} -> {}", job.source_name(), job.artifact_name()));
            continue;
        }

        reporter.info(&format!("Compiling {} -> {}", job.source_name(), job.artifact_name()));
        let invocation = CompilerInvocation::for_job(&glslc, job, &settings.extra_args);
        let exit = ctx.compiler().run(&invocation)?;
        if !exit.is_success() {
            return Err(AppError::CompilationFailure { shader: job.source_name(), exit });
        }
        outcome.artifacts.push(job.artifact.clone());
    }

    Ok(outcome)
}

/// Regular files directly inside `dir`, or `None` if `dir` does not exist.
fn list_files(dir: &Path) -> Result<Option<Vec<PathBuf>>, AppError> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    Ok(Some(files))
}

//! CLI Adapter.

mod clean;
mod compile;
mod init;
mod locate;

use std::path::{Path, PathBuf};

use crate::app::api::{CleanOptions, CompileOptions, LocateOptions};
use crate::domain::AppError;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "spvbuild")]
#[command(version)]
#[command(about = "Locate glslc and compile GLSL shaders to SPIR-V", long_about = None)]
struct Cli {
    /// Project directory (defaults to the current directory)
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    project_dir: Option<PathBuf>,
    /// Config file to use instead of <project>/spvbuild.toml
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default spvbuild.toml
    #[clap(visible_alias = "i")]
    Init,
    /// Show which glslc would be used
    #[clap(visible_alias = "l")]
    Locate {
        /// Use this glslc instead of searching
        #[arg(long, value_name = "PATH")]
        glslc: Option<PathBuf>,
        /// Output format
        #[arg(long, value_enum, default_value_t = locate::OutputFormat::Text)]
        format: locate::OutputFormat,
    },
    /// Compile every shader in the source directory to SPIR-V
    #[clap(visible_alias = "c")]
    Compile {
        /// Shader source directory
        #[arg(short, long, value_name = "DIR")]
        source: Option<PathBuf>,
        /// SPIR-V output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
        /// Use this glslc instead of searching
        #[arg(long, value_name = "PATH")]
        glslc: Option<PathBuf>,
        /// Fail when glslc cannot be found instead of warning
        #[arg(long)]
        require_tool: bool,
        /// Show planned compilations without running glslc
        #[arg(long)]
        dry_run: bool,
    },
    /// Delete .spv artifacts from the output directory
    Clean {
        /// SPIR-V output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    if let Err(e) = dispatch(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn dispatch(cli: Cli) -> Result<(), AppError> {
    let cwd = std::env::current_dir()?;
    let root = absolute(&cwd, cli.project_dir);
    let config = cli.config.map(|path| cwd.join(path));

    match cli.command {
        Commands::Init => init::run_init(&root),
        Commands::Locate { glslc, format } => {
            let options = LocateOptions { config, glslc: glslc.map(|path| cwd.join(path)) };
            locate::run_locate(&root, options, format)
        }
        Commands::Compile { source, output, glslc, require_tool, dry_run } => {
            let options = CompileOptions {
                config,
                source_dir: source.map(|path| cwd.join(path)),
                output_dir: output.map(|path| cwd.join(path)),
                glslc: glslc.map(|path| cwd.join(path)),
                require_tool,
                dry_run,
            };
            compile::run_compile(&root, options)
        }
        Commands::Clean { output } => {
            let options = CleanOptions { config, output_dir: output.map(|path| cwd.join(path)) };
            clean::run_clean(&root, options)
        }
    }
}

/// Command-line paths are relative to the invocation directory, not the project.
fn absolute(cwd: &Path, path: Option<PathBuf>) -> PathBuf {
    path.map(|path| cwd.join(path)).unwrap_or_else(|| cwd.to_path_buf())
}

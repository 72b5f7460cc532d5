//! hlsl_compile - compile the engine's HLSL shaders with fxc
//!
//! ```text
//! hlsl_compile                          # whole manifest, debug
//! hlsl_compile release                  # whole manifest, release
//! hlsl_compile outlining.hlsl release   # one file, release
//! ```

use clap::Parser;
use galaxy_shader_build::log::LogSeverity;
use galaxy_shader_build::{
    build_error, build_info, BuildConfig, CompileMode, Dispatcher, Manifest, Result,
    ShaderBuild, ShaderModel,
};
use galaxy_shader_build_fxc::FxcCompiler;
use std::path::PathBuf;

const SOURCE: &str = "shader_build::cli";

#[derive(Parser, Debug)]
#[command(name = "hlsl_compile")]
#[command(version, about = "Compile the engine's HLSL shaders with fxc")]
#[command(after_help = "With no shader names the whole manifest is compiled. \
    The literal token 'release' anywhere in the list selects release flags.")]
struct Cli {
    /// Shader files to compile (names from the manifest) and/or `release`
    #[arg(value_name = "SHADER|release")]
    targets: Vec<String>,

    /// Project root holding hlsl/ and data/shaders/ (default: current directory)
    #[arg(long, value_name = "DIR")]
    project_dir: Option<PathBuf>,

    /// fxc executable (default: search PATH and the Windows SDK)
    #[arg(long, value_name = "PATH")]
    compiler: Option<PathBuf>,

    /// Shader model used in target profiles (4.0, 4.1, 5.0, 5.1)
    #[arg(long, value_name = "SM", default_value = "5.0")]
    shader_model: ShaderModel,

    /// Also print every compiler command line
    #[arg(short, long)]
    verbose: bool,
}

/// Separate the `release` token from shader names
fn split_targets(targets: &[String]) -> (CompileMode, Vec<String>) {
    let mut mode = CompileMode::Debug;
    let mut shaders = Vec::new();

    for target in targets {
        if target == CompileMode::RELEASE_TOKEN {
            mode = CompileMode::Release;
        } else {
            shaders.push(target.clone());
        }
    }

    (mode, shaders)
}

/// Returns whether the build succeeded
fn execute(cli: Cli) -> Result<bool> {
    if cli.verbose {
        ShaderBuild::set_min_severity(LogSeverity::Debug);
    }

    let (mode, shaders) = split_targets(&cli.targets);
    let project_dir = match cli.project_dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let config = BuildConfig::new(project_dir)
        .with_mode(mode)
        .with_shader_model(cli.shader_model);

    let mut compiler = match cli.compiler {
        Some(path) => FxcCompiler::new(path),
        None => FxcCompiler::locate()?,
    };

    let manifest = Manifest::builtin();
    build_info!(SOURCE, "Compiling {} in {} mode (shader model {})",
        if shaders.is_empty() { "all shaders".to_string() } else { shaders.join(", ") },
        mode,
        config.shader_model);

    let report = Dispatcher::new(&manifest, &config, &mut compiler).run(&shaders)?;

    if report.is_success() {
        build_info!(SOURCE, "Done: {}", report.summary());
    } else {
        build_error!(SOURCE, "Done: {}", report.summary());
    }

    Ok(report.is_success())
}

fn main() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

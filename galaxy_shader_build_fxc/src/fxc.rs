/// fxc process runner

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use galaxy_shader_build::{
    build_debug, CompileCommand, CompilerOutput, Error, Result, ShaderCompiler,
};
use crate::locate::find_fxc;

const SOURCE: &str = "shader_build::fxc";

/// `ShaderCompiler` backed by `fxc.exe`
///
/// The executable is started directly (no shell), so paths containing
/// spaces are passed through untouched.
///
/// # Example
///
/// ```no_run
/// use galaxy_shader_build::ShaderCompiler;
/// use galaxy_shader_build_fxc::FxcCompiler;
///
/// let compiler = FxcCompiler::locate()?;
/// println!("using {}", compiler.program().display());
/// # Ok::<(), galaxy_shader_build::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct FxcCompiler {
    program: PathBuf,
}

impl FxcCompiler {
    /// Use an explicit executable path (or bare name resolved through `PATH`)
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self { program: program.into() }
    }

    /// Find fxc on `PATH` or in the Windows SDK
    ///
    /// # Errors
    ///
    /// Returns `Error::CompilerNotFound` if no executable is found.
    pub fn locate() -> Result<Self> {
        let program = find_fxc().ok_or_else(|| Error::CompilerNotFound(
            "fxc was not found on PATH or in any Windows Kits\\10\\bin directory. \
             Install the Windows SDK or pass --compiler <path>.".to_string()
        ))?;
        build_debug!(SOURCE, "Using fxc: {}", program.display());
        Ok(Self::new(program))
    }
}

impl ShaderCompiler for FxcCompiler {
    fn name(&self) -> &str {
        "fxc"
    }

    fn program(&self) -> &Path {
        &self.program
    }

    fn compile(&mut self, command: &CompileCommand) -> Result<CompilerOutput> {
        let output = Command::new(&self.program)
            .args(command.arguments())
            .stdin(Stdio::null())
            .output()
            .map_err(|err| Error::LaunchFailed(format!("{}: {}", self.program.display(), err)))?;

        Ok(CompilerOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(test)]
#[path = "fxc_tests.rs"]
mod tests;

/// ShaderCompiler trait - the seam to the external compiler executable
///
/// Implemented by backend crates (e.g. `FxcCompiler`). The dispatcher only
/// ever sees this trait, so tests substitute a scripted compiler.

use std::path::Path;
use crate::command::CompileCommand;
use crate::error::Result;

/// Captured result of one compiler process
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompilerOutput {
    /// Process exit code; `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
    /// Captured standard output
    pub stdout: String,
    /// Captured standard error (fxc writes diagnostics here)
    pub stderr: String,
}

impl CompilerOutput {
    /// Output of a process that exited with `code` and printed nothing
    pub fn with_exit_code(code: i32) -> Self {
        Self {
            exit_code: Some(code),
            ..Self::default()
        }
    }

    /// Zero exit code
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Compiler diagnostics, stderr first, trimmed; empty when silent
    pub fn diagnostics(&self) -> String {
        [self.stderr.trim(), self.stdout.trim()]
            .iter()
            .filter(|text| !text.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// External shader compiler
pub trait ShaderCompiler {
    /// Short name used in log sources and messages (e.g. "fxc")
    fn name(&self) -> &str;

    /// Executable actually started, as shown in logged command lines
    fn program(&self) -> &Path;

    /// Run the compiler synchronously for one compilation unit
    ///
    /// # Errors
    ///
    /// Returns an error only when the compiler could not be run at all. A
    /// compiler that runs and rejects the shader returns `Ok` with a non-zero
    /// exit code.
    fn compile(&mut self, command: &CompileCommand) -> Result<CompilerOutput>;
}

#[cfg(test)]
#[path = "compiler_tests.rs"]
mod tests;

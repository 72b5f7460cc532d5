/// Manifest dispatcher - the compile loop
///
/// For each (file, stage) pair: resolve the command, run the compiler
/// synchronously, classify by exit code and log one line. Invocations are
/// independent; a failure never stops the loop.

use std::collections::HashSet;
use std::fs;
use crate::command::CompileCommand;
use crate::compiler::ShaderCompiler;
use crate::config::BuildConfig;
use crate::error::{Error, Result};
use crate::manifest::{Manifest, ShaderFile};
use crate::report::{BuildReport, CompileStatus, StageOutcome};
use crate::stage::ShaderStage;
use crate::{build_debug, build_error, build_info, build_trace, build_warn};

const SOURCE: &str = "shader_build::Dispatcher";

/// Runs a manifest through a compiler
///
/// # Example
///
/// ```no_run
/// use galaxy_shader_build::{BuildConfig, Dispatcher, Manifest, ShaderCompiler};
///
/// fn build(compiler: &mut dyn ShaderCompiler) -> galaxy_shader_build::Result<bool> {
///     let manifest = Manifest::builtin();
///     let config = BuildConfig::new(".");
///     let report = Dispatcher::new(&manifest, &config, compiler).compile_all()?;
///     Ok(report.is_success())
/// }
/// ```
pub struct Dispatcher<'a> {
    manifest: &'a Manifest,
    config: &'a BuildConfig,
    compiler: &'a mut dyn ShaderCompiler,
}

impl<'a> Dispatcher<'a> {
    pub fn new(
        manifest: &'a Manifest,
        config: &'a BuildConfig,
        compiler: &'a mut dyn ShaderCompiler,
    ) -> Self {
        Self { manifest, config, compiler }
    }

    /// Full build when `selection` is empty, otherwise only the named files
    pub fn run<S: AsRef<str>>(&mut self, selection: &[S]) -> Result<BuildReport> {
        if selection.is_empty() {
            self.compile_all()
        } else {
            self.compile_selected(selection)
        }
    }

    /// Compile every manifest entry, then list sources the manifest misses
    ///
    /// # Errors
    ///
    /// Returns an error only if the output directory cannot be created.
    pub fn compile_all(&mut self) -> Result<BuildReport> {
        self.prepare_output_dir()?;
        build_debug!(SOURCE, "Full {} build of {} manifest entries with {}",
            self.config.mode, self.manifest.len(), self.compiler.name());

        let manifest = self.manifest;
        let mut report = BuildReport::new();
        let mut accounted = HashSet::new();

        for file in manifest.files() {
            if self.compile_file(file, &mut report) {
                accounted.insert(file.name());
            }
        }

        report.unaccounted = self.unaccounted_sources(&accounted);
        for name in &report.unaccounted {
            build_warn!(SOURCE, "Shader: {} was not compiled (not in manifest)", name);
        }

        Ok(report)
    }

    /// Compile only the named entries, in the order given
    ///
    /// Names not found in the manifest are logged and recorded in
    /// `BuildReport::unknown`; a name given twice is compiled once.
    ///
    /// # Errors
    ///
    /// Returns an error only if the output directory cannot be created.
    pub fn compile_selected<S: AsRef<str>>(&mut self, names: &[S]) -> Result<BuildReport> {
        self.prepare_output_dir()?;

        let manifest = self.manifest;
        let mut report = BuildReport::new();
        let mut seen = HashSet::new();

        for name in names.iter().map(|name| name.as_ref()) {
            if !seen.insert(name) {
                continue;
            }
            match manifest.get(name) {
                Ok(file) => {
                    self.compile_file(file, &mut report);
                }
                Err(_) => {
                    build_error!(SOURCE,
                        "Shader with name {} was not found in the shader manifest", name);
                    report.unknown.push(name.to_string());
                }
            }
        }

        Ok(report)
    }

    /// Compile one stage of one file
    pub fn compile_stage(&mut self, file: &ShaderFile, stage: ShaderStage) -> StageOutcome {
        let command = CompileCommand::new(self.config, file, stage);
        build_debug!(SOURCE, "{}", command.display_line(self.compiler.program()));

        let status = match self.compiler.compile(&command) {
            Ok(output) if output.success() => {
                let chatter = output.diagnostics();
                if !chatter.is_empty() {
                    build_debug!(SOURCE, "{}", chatter);
                }
                build_info!(SOURCE, "Shader: {} Type: {} compiled successfully", file.name(), stage);
                CompileStatus::Succeeded
            }
            Ok(output) => {
                let code = output.exit_code
                    .map(|code| code.to_string())
                    .unwrap_or_else(|| "none".to_string());
                build_error!(SOURCE, "Shader: {} Type: {} failed to compile (exit code {})",
                    file.name(), stage, code);
                let diagnostics = output.diagnostics();
                if !diagnostics.is_empty() {
                    build_warn!(SOURCE, "{}", diagnostics);
                }
                CompileStatus::Failed {
                    exit_code: output.exit_code,
                    diagnostics,
                }
            }
            Err(err) => {
                build_error!(SOURCE, "Shader: {} Type: {} could not be compiled: {}",
                    file.name(), stage, err);
                CompileStatus::LaunchFailed(err.to_string())
            }
        };

        StageOutcome {
            shader: file.name().to_string(),
            stage,
            output: command.output,
            status,
        }
    }

    /// Returns whether the file counts as accounted for by the manifest
    fn compile_file(&mut self, file: &ShaderFile, report: &mut BuildReport) -> bool {
        if file.is_header() {
            build_trace!(SOURCE, "Skipping include-only {}", file.name());
            return true;
        }
        if file.stages().is_empty() {
            build_warn!(SOURCE, "Type of shader file with name {} was not specified", file.name());
            report.without_stages.push(file.name().to_string());
            return false;
        }

        for &stage in file.stages() {
            let outcome = self.compile_stage(file, stage);
            report.outcomes.push(outcome);
        }
        true
    }

    fn prepare_output_dir(&self) -> Result<()> {
        let output_root = self.config.output_root();
        fs::create_dir_all(&output_root).map_err(|err| {
            build_error!(SOURCE, "Cannot create output directory {}: {}", output_root.display(), err);
            Error::Io(format!("{}: {}", output_root.display(), err))
        })
    }

    /// Sorted names of regular files in the source directory not in `accounted`
    fn unaccounted_sources(&self, accounted: &HashSet<&str>) -> Vec<String> {
        let source_root = self.config.source_root();
        let entries = match fs::read_dir(&source_root) {
            Ok(entries) => entries,
            Err(err) => {
                build_warn!(SOURCE, "Cannot list source directory {}: {}", source_root.display(), err);
                return Vec::new();
            }
        };

        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .filter(|name| !accounted.contains(name.as_str()))
            .collect();
        names.sort();
        names
    }
}

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;

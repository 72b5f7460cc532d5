/// Compiler command line for one (file, stage) pair
///
/// Argument order:
///
/// - Debug:   `/E <entry> /Od /Zi /Zpr /T <profile> /Fd <pdb> /Fo <cso> <source>`
/// - Release: `/E <entry> /O3 /Zpr /T <profile> /Fo <cso> <source>`
///
/// `/Zpr` (row-major matrix packing) matches the engine's constant buffer
/// layout and is emitted in both modes.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use crate::config::BuildConfig;
use crate::manifest::ShaderFile;
use crate::mode::CompileMode;
use crate::stage::ShaderStage;

/// Row-major matrix packing
pub const PACK_ROW_MAJOR: &str = "/Zpr";

/// Fully resolved compilation unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileCommand {
    /// Manifest name of the source file
    pub shader: String,
    /// Target stage
    pub stage: ShaderStage,
    /// Entry point (`/E`)
    pub entry_point: &'static str,
    /// Target profile (`/T`)
    pub profile: String,
    /// Flag set selector
    pub mode: CompileMode,
    /// HLSL source path
    pub source: PathBuf,
    /// Compiled object path (`/Fo`)
    pub output: PathBuf,
    /// Debug symbol path (`/Fd`), debug mode only
    pub pdb: Option<PathBuf>,
}

impl CompileCommand {
    /// Resolve entry point, profile and paths for `file` compiled as `stage`
    pub fn new(config: &BuildConfig, file: &ShaderFile, stage: ShaderStage) -> Self {
        let name = file.name();
        let pdb = config.mode
            .emits_pdb()
            .then(|| config.output_path(&stage.pdb_file_name(name)));

        Self {
            shader: name.to_string(),
            stage,
            entry_point: stage.entry_point(),
            profile: stage.profile(config.shader_model),
            mode: config.mode,
            source: config.source_path(name),
            output: config.output_path(&stage.output_file_name(name)),
            pdb,
        }
    }

    /// Argument vector passed to the compiler (program name excluded)
    pub fn arguments(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = Vec::with_capacity(12);

        args.push("/E".into());
        args.push(self.entry_point.into());
        args.extend(self.mode.flags().iter().map(OsString::from));
        args.push(PACK_ROW_MAJOR.into());
        args.push("/T".into());
        args.push(self.profile.as_str().into());
        if let Some(pdb) = &self.pdb {
            args.push("/Fd".into());
            args.push(pdb.as_os_str().to_owned());
        }
        args.push("/Fo".into());
        args.push(self.output.as_os_str().to_owned());
        args.push(self.source.as_os_str().to_owned());

        args
    }

    /// Human-readable command line for logs
    ///
    /// Arguments containing whitespace are wrapped in double quotes.
    pub fn display_line(&self, program: &Path) -> String {
        std::iter::once(program.as_os_str().to_owned())
            .chain(self.arguments())
            .map(|arg| quote(&arg.to_string_lossy()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn quote(arg: &str) -> String {
    if arg.is_empty() || arg.chars().any(char::is_whitespace) {
        format!("\"{}\"", arg)
    } else {
        arg.to_string()
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;

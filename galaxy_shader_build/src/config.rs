/// Build configuration - where sources live, where objects go, how to compile

use std::path::PathBuf;
use crate::mode::CompileMode;
use crate::stage::ShaderModel;

/// Default source directory, relative to the project root
pub const DEFAULT_SOURCE_DIR: &str = "hlsl";

/// Default output directory, relative to the project root
pub const DEFAULT_OUTPUT_DIR: &str = "data/shaders";

/// Build configuration
///
/// # Example
///
/// ```
/// use galaxy_shader_build::{BuildConfig, CompileMode};
///
/// let config = BuildConfig::new("/work/engine").with_mode(CompileMode::Release);
/// assert!(config.source_path("outlining.hlsl").ends_with("hlsl/outlining.hlsl"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// Project root; relative source/output directories are resolved against it
    pub project_dir: PathBuf,
    /// Directory holding the HLSL sources
    pub source_dir: PathBuf,
    /// Directory receiving `.cso` (and `.pdb`) files
    pub output_dir: PathBuf,
    /// Debug or release flags
    pub mode: CompileMode,
    /// Shader model used to build profile strings
    pub shader_model: ShaderModel,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            project_dir: PathBuf::from("."),
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            mode: CompileMode::default(),
            shader_model: ShaderModel::default(),
        }
    }
}

impl BuildConfig {
    /// Default layout rooted at `project_dir`
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_mode(mut self, mode: CompileMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_shader_model(mut self, shader_model: ShaderModel) -> Self {
        self.shader_model = shader_model;
        self
    }

    pub fn with_source_dir(mut self, source_dir: impl Into<PathBuf>) -> Self {
        self.source_dir = source_dir.into();
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Absolute (or project-relative) source directory
    pub fn source_root(&self) -> PathBuf {
        self.project_dir.join(&self.source_dir)
    }

    /// Absolute (or project-relative) output directory
    pub fn output_root(&self) -> PathBuf {
        self.project_dir.join(&self.output_dir)
    }

    /// Full path of a source file listed in the manifest
    pub fn source_path(&self, name: &str) -> PathBuf {
        self.source_root().join(name)
    }

    /// Full path of a generated file (`.cso` / `.pdb`)
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_root().join(file_name)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

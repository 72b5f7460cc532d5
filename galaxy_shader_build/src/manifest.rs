/// Shader manifest - the hand-maintained catalog of HLSL sources
///
/// Each entry pairs a source file name (relative to the source directory)
/// with the ordered set of stages it must be compiled to. Include-only
/// headers are listed too so that a full build can tell "known, nothing to
/// compile" apart from "forgotten".

use std::collections::HashSet;
use crate::error::{Error, Result};
use crate::build_bail;
use crate::stage::ShaderStage;

/// One manifest entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderFile {
    name: String,
    stages: Vec<ShaderStage>,
    header: bool,
}

impl ShaderFile {
    /// Source file compiled once per stage
    ///
    /// Repeated stages are collapsed; the first occurrence fixes the order.
    pub fn new(name: &str, stages: &[ShaderStage]) -> Self {
        let mut unique = Vec::with_capacity(stages.len());
        for &stage in stages {
            if !unique.contains(&stage) {
                unique.push(stage);
            }
        }

        Self {
            name: name.to_string(),
            stages: unique,
            header: false,
        }
    }

    /// Include-only file: known to the manifest, never compiled
    pub fn header(name: &str) -> Self {
        Self {
            name: name.to_string(),
            stages: Vec::new(),
            header: true,
        }
    }

    /// Source file name (e.g. `forward_light.hlsl`)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stages to compile, in declaration order
    pub fn stages(&self) -> &[ShaderStage] {
        &self.stages
    }

    /// True for include-only headers
    pub fn is_header(&self) -> bool {
        self.header
    }
}

/// Immutable, validated list of shader files
#[derive(Debug, Clone)]
pub struct Manifest {
    files: Vec<ShaderFile>,
}

impl Manifest {
    /// Build a manifest
    ///
    /// # Errors
    ///
    /// Returns an error if a file name is empty, contains a path separator,
    /// or appears twice.
    pub fn new(files: Vec<ShaderFile>) -> Result<Self> {
        let mut seen = HashSet::new();
        for file in &files {
            if file.name.is_empty() {
                build_bail!("shader_build::Manifest", "Shader file name must not be empty");
            }
            if file.name.contains(|c: char| c == '/' || c == '\\') {
                build_bail!("shader_build::Manifest",
                    "Shader file name '{}' must not contain a path separator", file.name);
            }
            if !seen.insert(file.name.as_str()) {
                build_bail!("shader_build::Manifest",
                    "Duplicate shader file '{}'", file.name);
            }
        }

        Ok(Self { files })
    }

    /// The engine's shader catalog
    pub fn builtin() -> Self {
        use ShaderStage::{Pixel, Vertex};

        Self {
            files: vec![
                ShaderFile::header("globals.hlsl"),
                ShaderFile::header("vertex.hlsl"),
                ShaderFile::header("utils.hlsl"),
                ShaderFile::new("render_2d.hlsl", &[Vertex, Pixel]),
                ShaderFile::new("outlining.hlsl", &[Vertex, Pixel]),
                ShaderFile::new("forward_light.hlsl", &[Vertex, Pixel]),
                ShaderFile::new("draw_lines.hlsl", &[Vertex, Pixel]),
                ShaderFile::new("depth_map.hlsl", &[Vertex]),
                ShaderFile::new("debug_cascaded_shadows.hlsl", &[Vertex, Pixel]),
                ShaderFile::new("draw_vertices.hlsl", &[Vertex, Pixel]),
            ],
        }
    }

    /// Look up an entry by exact file name
    pub fn find(&self, name: &str) -> Option<&ShaderFile> {
        self.files.iter().find(|file| file.name == name)
    }

    /// Like `find`, but a missing name is an `Error::UnknownShader`
    pub fn get(&self, name: &str) -> Result<&ShaderFile> {
        self.find(name)
            .ok_or_else(|| Error::UnknownShader(name.to_string()))
    }

    /// Entries in manifest order
    pub fn files(&self) -> &[ShaderFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Total number of compiler invocations a full build performs
    pub fn invocation_count(&self) -> usize {
        self.files.iter().map(|file| file.stages.len()).sum()
    }
}

impl Default for Manifest {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
#[path = "manifest_tests.rs"]
mod tests;

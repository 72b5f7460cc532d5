/// Shader stages and their fixed compiler lookups
///
/// Each stage maps to exactly one entry point name, one profile prefix and
/// one output suffix. The HLSL sources follow the `<prefix>_main` naming
/// convention for their entry points.

use std::fmt;
use std::str::FromStr;
use crate::error::{Error, Result};

/// Shader pipeline stage targeted by a compilation unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    /// Vertex shader
    Vertex,
    /// Pixel (fragment) shader
    Pixel,
    /// Compute shader
    Compute,
    /// Geometry shader
    Geometry,
    /// Domain (tessellation evaluation) shader
    Domain,
}

impl ShaderStage {
    /// All stages, in declaration order
    pub const ALL: [ShaderStage; 5] = [
        ShaderStage::Vertex,
        ShaderStage::Pixel,
        ShaderStage::Compute,
        ShaderStage::Geometry,
        ShaderStage::Domain,
    ];

    /// Entry point function the compiler is told to start from (`/E`)
    pub fn entry_point(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vs_main",
            ShaderStage::Pixel => "ps_main",
            ShaderStage::Compute => "cs_main",
            ShaderStage::Geometry => "gs_main",
            ShaderStage::Domain => "ds_main",
        }
    }

    /// Two-letter profile prefix (`vs`, `ps`, ...)
    pub fn profile_prefix(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vs",
            ShaderStage::Pixel => "ps",
            ShaderStage::Compute => "cs",
            ShaderStage::Geometry => "gs",
            ShaderStage::Domain => "ds",
        }
    }

    /// Target profile for the given shader model (`/T`), e.g. `ps_5_0`
    pub fn profile(self, model: ShaderModel) -> String {
        format!("{}_{}_{}", self.profile_prefix(), model.major, model.minor)
    }

    /// Suffix appended to the source stem when naming the output object
    pub fn output_suffix(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "_vs",
            ShaderStage::Pixel => "_ps",
            ShaderStage::Compute => "_cs",
            ShaderStage::Geometry => "_gs",
            ShaderStage::Domain => "_ds",
        }
    }

    /// Compiled object name for `source_name` in this stage
    ///
    /// The stem is everything before the FIRST `.` of the source name, so
    /// `render_2d.hlsl` gives `render_2d_vs.cso`.
    pub fn output_file_name(self, source_name: &str) -> String {
        format!("{}{}.cso", file_stem(source_name), self.output_suffix())
    }

    /// Debug symbol file name for `source_name` in this stage
    pub fn pdb_file_name(self, source_name: &str) -> String {
        format!("{}{}.pdb", file_stem(source_name), self.output_suffix())
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShaderStage::Vertex => "Vertex",
            ShaderStage::Pixel => "Pixel",
            ShaderStage::Compute => "Compute",
            ShaderStage::Geometry => "Geometry",
            ShaderStage::Domain => "Domain",
        };
        f.write_str(name)
    }
}

fn file_stem(source_name: &str) -> &str {
    source_name.split('.').next().unwrap_or(source_name)
}

// ============================================================================
// Shader model
// ============================================================================

/// HLSL shader model encoded in the profile string (`vs_5_0` is model 5.0)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShaderModel {
    pub major: u8,
    pub minor: u8,
}

impl ShaderModel {
    pub const SM_4_0: ShaderModel = ShaderModel { major: 4, minor: 0 };
    pub const SM_4_1: ShaderModel = ShaderModel { major: 4, minor: 1 };
    pub const SM_5_0: ShaderModel = ShaderModel { major: 5, minor: 0 };
    pub const SM_5_1: ShaderModel = ShaderModel { major: 5, minor: 1 };

    /// Models fxc can target with every stage of this tool
    pub const SUPPORTED: [ShaderModel; 4] = [
        ShaderModel::SM_4_0,
        ShaderModel::SM_4_1,
        ShaderModel::SM_5_0,
        ShaderModel::SM_5_1,
    ];
}

impl Default for ShaderModel {
    fn default() -> Self {
        ShaderModel::SM_5_0
    }
}

impl fmt::Display for ShaderModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for ShaderModel {
    type Err = Error;

    /// Accepts `5.0` as well as the profile spelling `5_0`
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidInput(format!(
            "Unsupported shader model '{}' (expected one of 4.0, 4.1, 5.0, 5.1)", s
        ));

        let (major, minor) = s.trim()
            .split_once(|c: char| c == '.' || c == '_')
            .ok_or_else(invalid)?;
        let model = ShaderModel {
            major: major.parse().map_err(|_| invalid())?,
            minor: minor.parse().map_err(|_| invalid())?,
        };

        if ShaderModel::SUPPORTED.contains(&model) {
            Ok(model)
        } else {
            Err(invalid())
        }
    }
}

#[cfg(test)]
#[path = "stage_tests.rs"]
mod tests;

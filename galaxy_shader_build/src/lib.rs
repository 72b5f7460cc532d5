/*!
# Galaxy Shader Build

Core types for the engine's HLSL build step.

This crate turns a fixed manifest of HLSL sources into compiler invocations
and collects the results. It does not talk to any compiler itself: backends
(see `galaxy_shader_build_fxc`) implement the `ShaderCompiler` trait.

## Architecture

- **Manifest**: source files and the stages each one compiles to
- **ShaderStage**: entry point / profile / output suffix lookups
- **BuildConfig**: project layout, compile mode, shader model
- **CompileCommand**: the exact argument vector for one (file, stage)
- **ShaderCompiler**: seam to the external executable
- **Dispatcher**: the compile loop, producing a **BuildReport**
*/

mod error;
mod shader_build;
pub mod log;
pub mod stage;
pub mod mode;
pub mod manifest;
pub mod config;
pub mod command;
pub mod compiler;
pub mod report;
pub mod dispatcher;

// Mock compiler for tests (no fxc required)
#[cfg(test)]
mod mock_compiler;

pub use error::{Error, Result};
pub use shader_build::ShaderBuild;
pub use stage::{ShaderStage, ShaderModel};
pub use mode::CompileMode;
pub use manifest::{Manifest, ShaderFile};
pub use config::BuildConfig;
pub use command::CompileCommand;
pub use compiler::{CompilerOutput, ShaderCompiler};
pub use report::{BuildReport, CompileStatus, StageOutcome};
pub use dispatcher::Dispatcher;

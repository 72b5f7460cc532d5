/*!
# Galaxy Shader Build - fxc Backend

Implementation of `ShaderCompiler` for the Direct3D HLSL compiler (`fxc.exe`).

This crate runs fxc as a child process for each compilation unit and finds
the executable on `PATH` or inside an installed Windows 10/11 SDK.
*/

mod fxc;
mod locate;

pub use fxc::FxcCompiler;
pub use locate::{find_fxc, windows_kits_roots};

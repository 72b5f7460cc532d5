//! Unit tests for config.rs
//!
//! Tests the default layout, builder setters and path resolution.

use super::*;
use std::path::Path;

#[test]
fn test_default_layout() {
    let config = BuildConfig::default();
    assert_eq!(config.project_dir, PathBuf::from("."));
    assert_eq!(config.mode, CompileMode::Debug);
    assert_eq!(config.shader_model, ShaderModel::SM_5_0);
    assert_eq!(config.source_dir, PathBuf::from(DEFAULT_SOURCE_DIR));
    assert_eq!(config.output_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
}

#[test]
fn test_paths_are_rooted_at_project_dir() {
    let config = BuildConfig::new("engine");
    assert_eq!(config.source_path("sky.hlsl"), Path::new("engine").join("hlsl").join("sky.hlsl"));
    assert_eq!(
        config.output_path("sky_vs.cso"),
        Path::new("engine").join("data/shaders").join("sky_vs.cso")
    );
}

#[test]
fn test_builder_setters() {
    let config = BuildConfig::new("p")
        .with_mode(CompileMode::Release)
        .with_shader_model(ShaderModel::SM_5_1)
        .with_source_dir("shaders/src")
        .with_output_dir("build/cso");

    assert_eq!(config.mode, CompileMode::Release);
    assert_eq!(config.shader_model, ShaderModel::SM_5_1);
    assert_eq!(config.source_root(), Path::new("p").join("shaders/src"));
    assert_eq!(config.output_root(), Path::new("p").join("build/cso"));
}

#[test]
fn test_absolute_output_dir_overrides_project_dir() {
    let abs = std::env::temp_dir().join("galaxy_cso");
    let config = BuildConfig::new("p").with_output_dir(&abs);
    assert_eq!(config.output_root(), abs);
}

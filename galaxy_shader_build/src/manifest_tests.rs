/// Tests for ShaderFile and Manifest
///
/// These tests validate entry construction, stage de-duplication,
/// manifest validation and the built-in catalog.

use super::*;
use crate::error::Error;
use crate::stage::ShaderStage::{Compute, Pixel, Vertex};

// ============================================================================
// Tests: ShaderFile
// ============================================================================

#[test]
fn test_shader_file_new() {
    let file = ShaderFile::new("render_2d.hlsl", &[Vertex, Pixel]);
    assert_eq!(file.name(), "render_2d.hlsl");
    assert_eq!(file.stages(), &[Vertex, Pixel]);
    assert!(!file.is_header());
}

#[test]
fn test_shader_file_collapses_duplicate_stages() {
    let file = ShaderFile::new("blur.hlsl", &[Compute, Vertex, Compute, Vertex]);
    assert_eq!(file.stages(), &[Compute, Vertex]);
}

#[test]
fn test_shader_file_keeps_declaration_order() {
    let file = ShaderFile::new("a.hlsl", &[Pixel, Vertex]);
    assert_eq!(file.stages(), &[Pixel, Vertex]);
}

#[test]
fn test_shader_file_header() {
    let file = ShaderFile::header("globals.hlsl");
    assert!(file.is_header());
    assert!(file.stages().is_empty());
}

#[test]
fn test_shader_file_without_stages_is_not_header() {
    let file = ShaderFile::new("todo.hlsl", &[]);
    assert!(!file.is_header());
    assert!(file.stages().is_empty());
}

// ============================================================================
// Tests: Manifest validation
// ============================================================================

#[test]
fn test_manifest_new() {
    let manifest = Manifest::new(vec![
        ShaderFile::header("common.hlsl"),
        ShaderFile::new("sky.hlsl", &[Vertex, Pixel]),
    ]).unwrap();

    assert_eq!(manifest.len(), 2);
    assert!(!manifest.is_empty());
    assert_eq!(manifest.invocation_count(), 2);
}

#[test]
fn test_manifest_empty_is_valid() {
    let manifest = Manifest::new(Vec::new()).unwrap();
    assert!(manifest.is_empty());
    assert_eq!(manifest.invocation_count(), 0);
}

#[test]
fn test_manifest_duplicate_name_fails() {
    let result = Manifest::new(vec![
        ShaderFile::new("sky.hlsl", &[Vertex]),
        ShaderFile::new("sky.hlsl", &[Pixel]),
    ]);
    assert!(matches!(result, Err(Error::InvalidInput(_))));
}

#[test]
fn test_manifest_empty_name_fails() {
    let result = Manifest::new(vec![ShaderFile::new("", &[Vertex])]);
    assert!(result.is_err());
}

#[test]
fn test_manifest_path_separator_fails() {
    assert!(Manifest::new(vec![ShaderFile::new("sub/sky.hlsl", &[Vertex])]).is_err());
    assert!(Manifest::new(vec![ShaderFile::new("sub\\sky.hlsl", &[Vertex])]).is_err());
}

// ============================================================================
// Tests: Lookup
// ============================================================================

#[test]
fn test_find_existing() {
    let manifest = Manifest::builtin();
    let file = manifest.find("depth_map.hlsl").unwrap();
    assert_eq!(file.stages(), &[Vertex]);
}

#[test]
fn test_find_is_exact() {
    let manifest = Manifest::builtin();
    assert!(manifest.find("depth_map").is_none());
    assert!(manifest.find("DEPTH_MAP.HLSL").is_none());
    assert!(manifest.find("missing.hlsl").is_none());
}

#[test]
fn test_get_missing_is_unknown_shader() {
    let manifest = Manifest::builtin();
    assert!(manifest.get("outlining.hlsl").is_ok());
    match manifest.get("missing.hlsl") {
        Err(Error::UnknownShader(name)) => assert_eq!(name, "missing.hlsl"),
        other => panic!("Expected UnknownShader, got {:?}", other),
    }
}

// ============================================================================
// Tests: Built-in catalog
// ============================================================================

#[test]
fn test_builtin_catalog_order() {
    let manifest = Manifest::builtin();
    let names: Vec<&str> = manifest.files().iter().map(|f| f.name()).collect();
    assert_eq!(names, vec![
        "globals.hlsl",
        "vertex.hlsl",
        "utils.hlsl",
        "render_2d.hlsl",
        "outlining.hlsl",
        "forward_light.hlsl",
        "draw_lines.hlsl",
        "depth_map.hlsl",
        "debug_cascaded_shadows.hlsl",
        "draw_vertices.hlsl",
    ]);
}

#[test]
fn test_builtin_catalog_headers() {
    let manifest = Manifest::builtin();
    let headers: Vec<&str> = manifest.files().iter()
        .filter(|f| f.is_header())
        .map(|f| f.name())
        .collect();
    assert_eq!(headers, vec!["globals.hlsl", "vertex.hlsl", "utils.hlsl"]);
}

#[test]
fn test_builtin_catalog_invocation_count() {
    // 6 vertex+pixel files and depth_map (vertex only)
    assert_eq!(Manifest::builtin().invocation_count(), 13);
}

#[test]
fn test_builtin_catalog_passes_validation() {
    let files = Manifest::builtin().files().to_vec();
    assert!(Manifest::new(files).is_ok());
}

#[test]
fn test_default_is_builtin() {
    assert_eq!(Manifest::default().files(), Manifest::builtin().files());
}

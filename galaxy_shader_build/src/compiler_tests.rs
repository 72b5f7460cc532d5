//! Unit tests for compiler.rs
//!
//! Tests exit-code classification and diagnostics collection.

use super::*;

#[test]
fn test_success_requires_zero_exit_code() {
    assert!(CompilerOutput::with_exit_code(0).success());
    assert!(!CompilerOutput::with_exit_code(1).success());
    assert!(!CompilerOutput::with_exit_code(-1).success());
}

#[test]
fn test_signal_termination_is_failure() {
    let output = CompilerOutput { exit_code: None, ..CompilerOutput::default() };
    assert!(!output.success());
}

#[test]
fn test_diagnostics_joins_streams() {
    let output = CompilerOutput {
        exit_code: Some(1),
        stdout: "compilation failed; no code produced\n".to_string(),
        stderr: "sky.hlsl(12,5): error X3004: undeclared identifier 'uv'\n".to_string(),
    };
    assert_eq!(
        output.diagnostics(),
        "sky.hlsl(12,5): error X3004: undeclared identifier 'uv'\ncompilation failed; no code produced"
    );
}

#[test]
fn test_diagnostics_empty_when_silent() {
    assert_eq!(CompilerOutput::with_exit_code(0).diagnostics(), "");
}

//! Unit tests for report.rs
//!
//! Tests outcome counting, success rules and the summary line.

use super::*;

fn outcome(shader: &str, status: CompileStatus) -> StageOutcome {
    StageOutcome {
        shader: shader.to_string(),
        stage: ShaderStage::Vertex,
        output: PathBuf::from(format!("{}_vs.cso", shader)),
        status,
    }
}

#[test]
fn test_empty_report_is_success() {
    let report = BuildReport::new();
    assert!(report.is_success());
    assert_eq!(report.summary(), "0 compiled, 0 failed");
}

#[test]
fn test_counts() {
    let mut report = BuildReport::new();
    report.outcomes.push(outcome("a", CompileStatus::Succeeded));
    report.outcomes.push(outcome("b", CompileStatus::Failed { exit_code: Some(1), diagnostics: String::new() }));
    report.outcomes.push(outcome("c", CompileStatus::LaunchFailed("not found".to_string())));

    assert_eq!(report.succeeded_count(), 1);
    assert_eq!(report.failed_count(), 2);
    let failed: Vec<&str> = report.failures().map(|o| o.shader.as_str()).collect();
    assert_eq!(failed, vec!["b", "c"]);
    assert!(!report.is_success());
}

#[test]
fn test_unknown_name_fails_report() {
    let mut report = BuildReport::new();
    report.unknown.push("missing.hlsl".to_string());
    assert!(!report.is_success());
    assert_eq!(report.summary(), "0 compiled, 0 failed, 1 unknown");
}

#[test]
fn test_warnings_do_not_fail_report() {
    let mut report = BuildReport::new();
    report.without_stages.push("todo.hlsl".to_string());
    report.unaccounted.push("scratch.hlsl".to_string());
    assert!(report.is_success());
    assert_eq!(report.summary(), "0 compiled, 0 failed, 1 not in manifest");
}

/// Build report - what happened to every (file, stage) pair in one run

use std::path::PathBuf;
use crate::stage::ShaderStage;

/// Result of one compiler invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileStatus {
    /// Compiler exited with code 0
    Succeeded,
    /// Compiler ran and exited non-zero (or was killed: `exit_code == None`)
    Failed {
        exit_code: Option<i32>,
        diagnostics: String,
    },
    /// Compiler could not be started
    LaunchFailed(String),
}

/// Outcome for one (file, stage) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageOutcome {
    pub shader: String,
    pub stage: ShaderStage,
    pub output: PathBuf,
    pub status: CompileStatus,
}

impl StageOutcome {
    pub fn succeeded(&self) -> bool {
        self.status == CompileStatus::Succeeded
    }
}

/// Aggregated outcome of `compile_all` / `compile_selected`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// One entry per compiler invocation, in execution order
    pub outcomes: Vec<StageOutcome>,
    /// Requested names that are not in the manifest
    pub unknown: Vec<String>,
    /// Manifest entries skipped because they declare no stage
    pub without_stages: Vec<String>,
    /// Files in the source directory the manifest does not mention (full builds only)
    pub unaccounted: Vec<String>,
}

impl BuildReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful invocations
    pub fn succeeded_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.succeeded()).count()
    }

    /// Number of failed invocations (non-zero exit or launch failure)
    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.succeeded_count()
    }

    /// Failed invocations, in execution order
    pub fn failures(&self) -> impl Iterator<Item = &StageOutcome> {
        self.outcomes.iter().filter(|o| !o.succeeded())
    }

    /// True when every invocation succeeded and every requested name was known
    ///
    /// Stageless entries and unaccounted sources are warnings only.
    pub fn is_success(&self) -> bool {
        self.failed_count() == 0 && self.unknown.is_empty()
    }

    /// One-line summary for the end of a run
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "{} compiled, {} failed",
            self.succeeded_count(),
            self.failed_count()
        );
        if !self.unknown.is_empty() {
            summary.push_str(&format!(", {} unknown", self.unknown.len()));
        }
        if !self.unaccounted.is_empty() {
            summary.push_str(&format!(", {} not in manifest", self.unaccounted.len()));
        }
        summary
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;

/// Compilation mode (debug / release)

use std::fmt;

/// Selects which optimization / debug-info flags are passed to the compiler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompileMode {
    /// Optimizations off, embedded debug info and a PDB next to the object
    #[default]
    Debug,
    /// Full optimization, no debug info
    Release,
}

impl CompileMode {
    /// Command-line token that selects release mode
    pub const RELEASE_TOKEN: &'static str = "release";

    /// Flags emitted right after the entry point
    pub fn flags(self) -> &'static [&'static str] {
        match self {
            CompileMode::Debug => &["/Od", "/Zi"],
            CompileMode::Release => &["/O3"],
        }
    }

    /// Whether a debug symbol file (`/Fd`) is written
    pub fn emits_pdb(self) -> bool {
        matches!(self, CompileMode::Debug)
    }
}

impl fmt::Display for CompileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileMode::Debug => f.write_str("debug"),
            CompileMode::Release => f.write_str("release"),
        }
    }
}

#[cfg(test)]
#[path = "mode_tests.rs"]
mod tests;

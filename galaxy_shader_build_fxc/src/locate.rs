/// fxc discovery: check PATH, then the Windows SDK bin directories

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

const FXC_EXE: &str = "fxc.exe";

/// Find the fxc executable
///
/// Order:
/// 1. `fxc` on `PATH` (a developer command prompt puts it there)
/// 2. newest `<bin root>\<sdk version>\x64\fxc.exe` under each Windows Kits root
/// 3. `<bin root>\x64\fxc.exe` (pre-versioned SDK layout)
pub fn find_fxc() -> Option<PathBuf> {
    if on_path("fxc") {
        return Some(PathBuf::from("fxc"));
    }

    windows_kits_roots()
        .iter()
        .find_map(|root| newest_fxc_in(root))
}

/// Candidate `Windows Kits\10\bin` directories, most specific first
pub fn windows_kits_roots() -> Vec<PathBuf> {
    let mut roots = Vec::new();

    // Set by the Visual Studio developer prompt
    if let Ok(sdk) = env::var("WindowsSdkDir") {
        roots.push(PathBuf::from(sdk).join("bin"));
    }

    let program_files = [
        env::var("ProgramFiles(x86)").unwrap_or_else(|_| r"C:\Program Files (x86)".to_string()),
        env::var("ProgramFiles").unwrap_or_else(|_| r"C:\Program Files".to_string()),
    ];
    for base in program_files {
        let root = Path::new(&base).join("Windows Kits").join("10").join("bin");
        if !roots.contains(&root) {
            roots.push(root);
        }
    }

    roots
}

/// Newest fxc.exe below one SDK `bin` directory
pub(crate) fn newest_fxc_in(bin_root: &Path) -> Option<PathBuf> {
    let mut versions: Vec<(Vec<u32>, PathBuf)> = fs::read_dir(bin_root)
        .ok()?
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().map(|t| t.is_dir()).unwrap_or(false))
        .filter_map(|e| {
            let version = parse_version(&e.file_name().to_string_lossy())?;
            Some((version, e.path()))
        })
        .collect();
    versions.sort_by(|a, b| b.0.cmp(&a.0));

    versions
        .into_iter()
        .map(|(_, dir)| dir.join("x64").join(FXC_EXE))
        .chain(std::iter::once(bin_root.join("x64").join(FXC_EXE)))
        .find(|candidate| candidate.is_file())
}

/// `10.0.22621.0` -> `[10, 0, 22621, 0]`; None for non-version names
fn parse_version(name: &str) -> Option<Vec<u32>> {
    name.split('.')
        .map(|part| part.parse::<u32>().ok())
        .collect()
}

fn on_path(program: &str) -> bool {
    Command::new(program)
        .arg("/?")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok()
}

#[cfg(test)]
#[path = "locate_tests.rs"]
mod tests;

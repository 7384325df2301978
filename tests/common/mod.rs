// tests/common/mod.rs — Shared helpers for binary tests

use std::path::PathBuf;

/// Resolve the compiled binary from the workspace target directory
pub fn tstandard_bin() -> PathBuf {
    let mut path = std::env::current_exe()
        .expect("current_exe")
        .parent()
        .expect("parent")
        .to_path_buf();

    if path.ends_with("deps") {
        path.pop();
    }
    path.join("tstandard")
}

/// Execute the tstandard binary with given arguments
pub fn run_tstandard(args: &[&str]) -> std::process::Output {
    std::process::Command::new(tstandard_bin())
        .args(args)
        .output()
        .expect("Failed to execute tstandard binary")
}

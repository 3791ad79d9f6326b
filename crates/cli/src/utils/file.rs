use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use robot_runnables_core::SuiteRunner;

/// Resolve a CLI path argument against the current directory
pub fn resolve_path(path: &str) -> Result<PathBuf> {
    let path = Path::new(path);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .context("Failed to get current directory")?
            .join(path)
    };

    if !absolute.exists() {
        return Err(anyhow::anyhow!("File not found: {}", absolute.display()));
    }
    Ok(absolute)
}

/// Suite files under `dir`, sorted, skipping hidden directories
pub fn find_suite_files(dir: &Path, runner: &SuiteRunner) -> Vec<PathBuf> {
    let mut suites: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_entry(|entry| {
            entry.depth() == 0
                || !entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| name.starts_with('.'))
        })
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| runner.is_suite(path))
        .collect();
    suites.sort();
    suites
}

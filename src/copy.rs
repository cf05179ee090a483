//! Recursive template tree copy, preserving structure and file bytes
//! exactly.

use crate::error::{Error, Result};
use crate::progress::ProgressReporter;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Copies the whole tree under `source` into `dest`.
///
/// The caller guarantees `dest` does not exist yet (the check-then-copy
/// race is accepted). Per-file progress is reported to `progress`; any
/// I/O failure is fatal and names the path it occurred on.
pub fn copy_tree(source: &Path, dest: &Path, progress: &dyn ProgressReporter) -> Result<()> {
    if !source.exists() {
        return Err(Error::SourceMissing { path: source.to_path_buf() });
    }

    let total = WalkDir::new(source)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .count() as u64;
    progress.begin("Copying template files", total);

    for entry in WalkDir::new(source).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::CopyFailure {
            path: source.to_path_buf(),
            source: e.into(),
        })?;
        // Walked entries always live under `source`.
        let relative = entry.path().strip_prefix(source).unwrap_or(entry.path());
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .map_err(|e| Error::CopyFailure { path: target.clone(), source: e })?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)
                    .map_err(|e| Error::CopyFailure { path: parent.to_path_buf(), source: e })?;
            }
            fs::copy(entry.path(), &target)
                .map_err(|e| Error::CopyFailure { path: entry.path().to_path_buf(), source: e })?;
            progress.advance(&relative.display().to_string());
        }
    }

    progress.finish();
    Ok(())
}

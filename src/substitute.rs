//! Content placeholder substitution and filename correction.
//!
//! Both passes walk the output tree in a deterministic order and process
//! one file completely before moving to the next. Filename correction
//! runs strictly after content substitution, so a renamed file is never
//! picked up again under its new name.

use crate::constants::PROJECT_FILE;
use crate::error::{Error, Result};
use crate::placeholder::{self, PlaceholderMap};
use crate::progress::ProgressReporter;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Rewrites every regular file under `root`, replacing all content
/// placeholder tokens.
///
/// Files are decoded as UTF-8 with lossy fallback and written back only
/// when a token matched; true binary assets that happen to contain a
/// token are rewritten as text. This is best-effort by design and may
/// corrupt such assets.
pub fn substitute_contents(
    root: &Path,
    placeholders: &PlaceholderMap,
    progress: &dyn ProgressReporter,
) -> Result<()> {
    let files = collect_files(root)?;
    progress.begin("Replacing template placeholders", files.len() as u64);

    for file in &files {
        progress.advance(&file.display().to_string());
        let bytes = fs::read(file)?;
        let content = String::from_utf8_lossy(&bytes);
        let replaced = placeholder::replace_all(&content, placeholders);
        if replaced != content.as_ref() {
            fs::write(file, replaced)?;
        }
    }

    progress.finish();
    Ok(())
}

/// Renames every file whose path still carries a filename placeholder
/// token, processing paths in lexicographic order.
///
/// A computed destination that already exists fails the whole run; the
/// pipeline never silently overwrites an entry.
pub fn correct_file_names(
    root: &Path,
    placeholders: &PlaceholderMap,
    progress: &dyn ProgressReporter,
) -> Result<()> {
    let mut files = collect_files(root)?;
    files.sort();
    progress.begin("Correcting filenames", files.len() as u64);

    for file in &files {
        progress.advance(&file.display().to_string());
        let relative = file.strip_prefix(root).unwrap_or(file);
        let original = relative.to_string_lossy();
        let corrected = placeholder::replace_all(&original, placeholders);
        if corrected == original.as_ref() {
            continue;
        }

        let target = root.join(&corrected);
        if target.exists() {
            return Err(Error::RenameCollision { from: file.clone(), to: target });
        }
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::rename(file, &target)?;
    }

    progress.finish();
    Ok(())
}

/// Enumerates every regular file under `root` in a stable order.
///
/// The provenance record is exempt: it must keep the exact configured
/// values, token look-alikes included.
fn collect_files(root: &Path) -> Result<Vec<PathBuf>> {
    let provenance = root.join(PROJECT_FILE);
    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::IoError(e.into()))?;
        if entry.file_type().is_file() && entry.path() != provenance {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

//! Template resolution: maps a supported game version to the root of a
//! bundled template tree.

use crate::constants::{SUPPORTED_VERSIONS, TEMPLATES_ENV, TEMPLATE_PREFIX};
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Returns the directory bundled templates are resolved against: the
/// `MALLET_TEMPLATES` environment variable when set, otherwise a
/// `templates` directory beside the executable.
pub fn template_root() -> PathBuf {
    if let Ok(dir) = std::env::var(TEMPLATES_ENV) {
        return PathBuf::from(dir);
    }
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("templates")))
        .unwrap_or_else(|| PathBuf::from("templates"))
}

/// Resolves the template path for a game version.
///
/// Pure allow-list lookup: unsupported versions yield `TemplateNotFound`,
/// never a partial or fuzzy match.
pub fn resolve(root: &Path, game_version: &str) -> Result<PathBuf> {
    if !SUPPORTED_VERSIONS.contains(&game_version) {
        return Err(Error::TemplateNotFound { game_version: game_version.to_string() });
    }
    Ok(root.join(format!("{}{}", TEMPLATE_PREFIX, game_version)))
}

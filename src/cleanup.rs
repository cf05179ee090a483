//! Template cleanup: relocates template-internal folders to their
//! configured names and removes scaffolding artifacts.
//!
//! Every sub-operation is idempotent and individually skippable: an
//! absent source folder is a warning, not a failure. Relocation must run
//! before content substitution, which rewrites file contents but not
//! directory names.

use crate::config::ProjectConfig;
use crate::constants::{
    ICON_FILE, MODULE_FOLDERS, RESOURCE_CATEGORIES, TEMPLATE_ARTIFACTS, TEMPLATE_NAMESPACE,
    TEMPLATE_RESOURCE_FOLDER,
};
use crate::error::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Runs every cleanup step against a freshly copied project tree.
pub fn cleanup(project_path: &Path, invocation_dir: &Path, config: &ProjectConfig) -> Result<()> {
    copy_project_icon(project_path, invocation_dir)?;

    for folder in MODULE_FOLDERS {
        relocate_namespace_folder(project_path, folder, config)?;
    }
    for folder in MODULE_FOLDERS {
        for category in RESOURCE_CATEGORIES {
            relocate_resource_folder(project_path, folder, category, config)?;
        }
    }

    remove_template_artifacts(project_path)?;

    for folder in MODULE_FOLDERS {
        remove_package_fragments(project_path, folder)?;
    }

    Ok(())
}

/// Copies a `logo.png` from the invocation directory into the template's
/// common resources, if the user has one lying next to the invocation.
pub fn copy_project_icon(project_path: &Path, invocation_dir: &Path) -> Result<()> {
    let icon = invocation_dir.join(ICON_FILE);
    if !icon.is_file() {
        return Ok(());
    }

    let target = project_path
        .join("Common")
        .join("src")
        .join("main")
        .join("resources")
        .join(ICON_FILE);
    println!("Copying existing icon {} to {}", icon.display(), target.display());
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(&icon, &target)?;
    Ok(())
}

/// Moves the template-internal class namespace folder of one module to
/// the path implied by `config.class_namespace`.
fn relocate_namespace_folder(
    project_path: &Path,
    folder: &str,
    config: &ProjectConfig,
) -> Result<()> {
    let java_root = project_path.join(folder).join("src").join("main").join("java");
    let source = join_segments(&java_root, TEMPLATE_NAMESPACE.iter().copied());
    if !source.exists() {
        warn!("Skipping {} class namespace folder: template package not present", folder);
        return Ok(());
    }

    let target = join_segments(&java_root, config.class_namespace.split('.'));
    println!("Renaming {} class namespace folder ...", folder);
    rename_folder(&source, &target)
}

/// Moves one module's template-internal resource folder to the mod id.
fn relocate_resource_folder(
    project_path: &Path,
    folder: &str,
    category: &str,
    config: &ProjectConfig,
) -> Result<()> {
    let resource_root =
        project_path.join(folder).join("src").join("main").join("resources").join(category);
    let source = resource_root.join(TEMPLATE_RESOURCE_FOLDER);
    if !source.exists() {
        warn!("Skipping {} '{}' resource folder: template folder not present", folder, category);
        return Ok(());
    }

    println!("Renaming {} '{}' resource folder ...", folder, category);
    rename_folder(&source, &resource_root.join(&config.mod_id))
}

/// Removes VCS metadata and template-authorship files from the output
/// root, unconditionally when present.
fn remove_template_artifacts(project_path: &Path) -> Result<()> {
    let artifacts = artifact_globs()?;
    for entry in fs::read_dir(project_path)? {
        let entry = entry?;
        if !artifacts.is_match(Path::new(&entry.file_name())) {
            continue;
        }
        debug!("Removing template artifact '{}'", entry.path().display());
        if entry.file_type()?.is_dir() {
            fs::remove_dir_all(entry.path())?;
        } else {
            fs::remove_file(entry.path())?;
        }
    }
    Ok(())
}

fn artifact_globs() -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in TEMPLATE_ARTIFACTS {
        builder.add(
            Glob::new(pattern)
                .map_err(|e| Error::ConfigError(format!("invalid artifact pattern: {}", e)))?,
        );
    }
    builder.build().map_err(|e| Error::ConfigError(format!("invalid artifact pattern: {}", e)))
}

/// Removes the residual template package fragment of one module, then
/// prunes its parent when that left it empty. Non-empty folders are kept
/// and reported, never force-removed.
fn remove_package_fragments(project_path: &Path, folder: &str) -> Result<()> {
    let package_root = project_path.join(folder).join("src").join("main").join("java").join("org");
    remove_folder_if_empty(&package_root.join("example"))?;
    remove_folder_if_empty(&package_root)?;
    Ok(())
}

fn remove_folder_if_empty(path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    if fs::read_dir(path)?.next().is_some() {
        warn!("Folder '{}' is not empty, leaving it in place", path.display());
        return Ok(());
    }
    fs::remove_dir(path)?;
    Ok(())
}

/// Moves a folder, creating the target's parents. Fails with a collision
/// error instead of overwriting an existing target.
fn rename_folder(source: &Path, target: &Path) -> Result<()> {
    if source == target {
        // The configured name matches the template's; nothing to move.
        return Ok(());
    }
    if target.exists() {
        return Err(Error::RenameCollision {
            from: source.to_path_buf(),
            to: target.to_path_buf(),
        });
    }
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::rename(source, target)?;
    Ok(())
}

fn join_segments<'a>(base: &Path, segments: impl Iterator<Item = &'a str>) -> PathBuf {
    segments.fold(base.to_path_buf(), |path, segment| path.join(segment))
}

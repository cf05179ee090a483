//! Materialization pipeline: the state machine that turns a bundled
//! template into a concrete project tree.
//!
//! Steps run strictly in sequence; a failed step halts the pipeline and
//! leaves the partially materialized tree on disk. There is no rollback —
//! the failure names the step it happened in so the operator can tell how
//! far the run got.

use crate::cleanup;
use crate::config::ProjectConfig;
use crate::constants::PROJECT_FILE;
use crate::copy;
use crate::error::{Error, Result};
use crate::placeholder;
use crate::progress::ProgressReporter;
use crate::substitute;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Pipeline stages, in execution order. `Failed` is implicit: any stage's
/// error aborts the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    FolderCreated,
    TemplateCopied,
    Cleaned,
    ContentSubstituted,
    FilenamesCorrected,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::FolderCreated => "creating the project folder",
            Stage::TemplateCopied => "copying the template",
            Stage::Cleaned => "cleaning up the template",
            Stage::ContentSubstituted => "substituting placeholders",
            Stage::FilenamesCorrected => "correcting filenames",
        };
        f.write_str(name)
    }
}

/// Returns the output path for a project: `<base>/<name>-<game_version>`.
pub fn project_path(base_dir: &Path, name: &str, config: &ProjectConfig) -> PathBuf {
    base_dir.join(format!("{}-{}", name, config.game_version))
}

/// Materializes a project from a resolved template.
///
/// The destination must not exist; that guard runs before any disk
/// mutation. On success, returns the created project path.
pub fn create(
    base_dir: &Path,
    name: &str,
    config: &ProjectConfig,
    template_path: &Path,
    progress: &dyn ProgressReporter,
) -> Result<PathBuf> {
    let project_path = project_path(base_dir, name, config);
    if project_path.exists() {
        return Err(Error::DestinationExists { path: project_path });
    }

    println!("Creating new project folder for {}", name);
    fs::create_dir_all(&project_path).map_err(|e| stage_error(Stage::FolderCreated, e.into()))?;
    println!("Storing project configuration in {}", project_path.display());
    write_project_file(&project_path, config)
        .map_err(|e| stage_error(Stage::FolderCreated, e))?;

    println!("Copying template {} to {}", template_path.display(), project_path.display());
    copy::copy_tree(template_path, &project_path, progress)
        .map_err(|e| stage_error(Stage::TemplateCopied, e))?;

    println!("Cleaning up template scaffolding in {}", project_path.display());
    cleanup::cleanup(&project_path, base_dir, config)
        .map_err(|e| stage_error(Stage::Cleaned, e))?;

    println!("Replacing template placeholders in {}", project_path.display());
    substitute::substitute_contents(
        &project_path,
        &placeholder::content_placeholders(config),
        progress,
    )
    .map_err(|e| stage_error(Stage::ContentSubstituted, e))?;

    println!("Correcting filenames in {}", project_path.display());
    substitute::correct_file_names(
        &project_path,
        &placeholder::filename_placeholders(config),
        progress,
    )
    .map_err(|e| stage_error(Stage::FilenamesCorrected, e))?;

    Ok(project_path)
}

/// Writes the provenance record: the exact configuration used, as
/// pretty-printed JSON at the project root. Runs before the template copy
/// begins.
pub fn write_project_file(project_path: &Path, config: &ProjectConfig) -> Result<()> {
    let content = serde_json::to_string_pretty(config)?;
    fs::write(project_path.join(PROJECT_FILE), content).map_err(Error::IoError)
}

fn stage_error(stage: Stage, err: Error) -> Error {
    Error::StageFailed { stage, source: Box::new(err) }
}

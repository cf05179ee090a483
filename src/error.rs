//! Error handling for the mallet application.
//! Defines custom error types and results used throughout the application.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for mallet operations.
///
/// Recoverable conditions (an absent template-internal folder during
/// cleanup, a non-empty folder that was expected to be empty) are reported
/// as warnings by the cleanup steps themselves and never surface here.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The target project folder already exists; nothing was written.
    #[error("Project folder '{}' already exists.", .path.display())]
    DestinationExists { path: PathBuf },

    /// No template is bundled for the requested game version.
    #[error("No template available for game version '{game_version}'.")]
    TemplateNotFound { game_version: String },

    /// A path the pipeline requires is missing from disk.
    #[error("Expected source '{}' does not exist.", .path.display())]
    SourceMissing { path: PathBuf },

    /// The template tree copy failed mid-way.
    #[error("Failed to copy '{}': {source}.", .path.display())]
    CopyFailure { path: PathBuf, source: io::Error },

    /// Renaming an entry would overwrite an existing path.
    #[error("Cannot rename '{}' to '{}': destination already exists.", .from.display(), .to.display())]
    RenameCollision { from: PathBuf, to: PathBuf },

    /// A configuration field failed validation.
    #[error("Invalid value for '{field}': {reason}.")]
    ValidationError { field: String, reason: String },

    /// Represents errors during seed configuration parsing or processing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents errors during interactive prompting
    #[error("Prompt error: {0}.")]
    PromptError(#[from] dialoguer::Error),

    /// Represents errors during JSON serialization of the project record
    #[error("Serialization error: {0}.")]
    SerdeError(#[from] serde_json::Error),

    /// A pipeline stage failed; the partially materialized tree is left
    /// on disk for inspection.
    #[error("Materialization failed while {stage}: {source}")]
    StageFailed {
        stage: crate::materialize::Stage,
        #[source]
        source: Box<Error>,
    },
}

/// Convenience type alias for Results with mallet's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{}", err);
    std::process::exit(1);
}

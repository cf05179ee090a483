//! mallet is a project scaffolding generator for multi-loader mod
//! projects. It instantiates a bundled directory-tree template for a
//! supported game version, substituting placeholder tokens in file
//! contents and filenames, and writes out a ready-to-use project
//! skeleton.

/// Command-line interface module for the mallet application
pub mod cli;

/// Template cleanup: folder relocation and scaffolding removal
pub mod cleanup;

/// Project configuration record, defaults and seed loading
pub mod config;

/// Common constants: supported versions, template paths, file names
pub mod constants;

/// Recursive template tree copying
pub mod copy;

/// Error types and handling for the mallet application
pub mod error;

/// Advisory locale detection for namespace defaults
pub mod locale;

/// Materialization pipeline orchestration
pub mod materialize;

/// Pure identifier normalization functions
pub mod normalize;

/// Placeholder maps and literal token substitution
pub mod placeholder;

/// Per-file progress reporting
pub mod progress;

/// User input and interaction handling
pub mod prompt;

/// Content substitution and filename correction
pub mod substitute;

/// Template resolution for bundled templates
pub mod template;

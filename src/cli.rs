//! Command-line interface implementation for mallet.
//! Provides argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for mallet.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "mallet: multi-loader mod project scaffolding tool",
    long_about = None
)]
pub struct Args {
    /// Name of the project folder (defaults to the mod name)
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Game version to scaffold for (prompted when omitted)
    #[arg(long, value_name = "VERSION")]
    pub game_version: Option<String>,

    /// Pre-seeded configuration file (JSON or YAML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Read a pre-seeded JSON configuration from stdin
    #[arg(short, long)]
    pub stdin: bool,

    /// Accept suggested defaults for unseeded fields and skip the
    /// confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}

//! mallet's main application entry point and orchestration logic.
//! Handles command-line argument parsing, configuration collection,
//! and the materialization flow.

use mallet::{
    cli::{get_args, Args},
    config::{self, EnvDefaults, SeedConfig},
    error::{default_error_handler, Result},
    materialize,
    progress::ConsoleReporter,
    prompt, template,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Loads the seed configuration selected on the command line; flags
/// override values from the seed file.
fn load_seed(args: &Args) -> Result<SeedConfig> {
    let mut seed = if args.stdin {
        config::seed_from_stdin()?
    } else if let Some(path) = &args.config {
        config::load_seed_file(path)?
    } else {
        SeedConfig::default()
    };

    if let Some(game_version) = &args.game_version {
        seed.game_version = Some(game_version.clone());
    }
    Ok(seed)
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads the seed configuration (file or stdin), if any
/// 2. Builds environment-derived defaults
/// 3. Collects and confirms the full configuration
/// 4. Validates the configuration
/// 5. Resolves the bundled template for the selected game version
/// 6. Materializes the project tree
fn run(args: Args) -> Result<()> {
    let seed = load_seed(&args)?;
    let defaults = config::default_config(&EnvDefaults);

    let Some(project_config) = prompt::collect(seed, &defaults, args.yes)? else {
        println!("Project creation canceled.");
        return Ok(());
    };
    config::validate(&project_config)?;

    let template_path =
        template::resolve(&template::template_root(), &project_config.game_version)?;
    let name = args.name.unwrap_or_else(|| project_config.mod_name.clone());

    let base_dir = std::env::current_dir()?;
    let progress = ConsoleReporter::new();
    let project_path =
        materialize::create(&base_dir, &name, &project_config, &template_path, &progress)?;

    println!("Project {} created successfully in {}.", name, project_path.display());
    println!("Open the project folder in your IDE to get started.");
    Ok(())
}

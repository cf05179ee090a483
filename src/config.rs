//! Project configuration: the immutable record every materialization run
//! consumes, environment-derived defaults, and seed-file loading with
//! support for JSON and YAML formats.

use crate::constants::CONFIG_VERSION;
use crate::error::{Error, Result};
use crate::locale;
use crate::normalize;
use log::debug;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;
use url::Url;

/// The full set of values a project is generated from.
///
/// Built once per run and then treated as immutable. Invariant: every
/// identifier-like field equals its own normalized form; `validate`
/// enforces this before materialization begins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub author: String,
    pub mod_name: String,
    pub mod_id: String,
    pub class_name: String,
    pub class_namespace: String,
    pub class_package_name: String,
    pub license: String,
    pub description: String,
    pub display_url: String,
    pub issue_tracker_url: String,
    pub vendor_name: String,
    pub game_version: String,
    pub config_version: String,
}

/// A partially specified configuration, as read from `--config` files or
/// stdin. Missing fields are collected interactively or defaulted.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedConfig {
    pub author: Option<String>,
    pub mod_name: Option<String>,
    pub mod_id: Option<String>,
    pub class_name: Option<String>,
    pub class_namespace: Option<String>,
    pub class_package_name: Option<String>,
    pub license: Option<String>,
    pub description: Option<String>,
    pub display_url: Option<String>,
    pub issue_tracker_url: Option<String>,
    pub vendor_name: Option<String>,
    pub game_version: Option<String>,
    pub config_version: Option<String>,
}

/// Capability supplying environment-derived default values. Injected so
/// tests can substitute a fixed provider instead of ambient process state.
pub trait DefaultsProvider {
    /// Best-effort author name; `None` when the environment gives no hint.
    fn author(&self) -> Option<String>;
    /// Advisory locale tag, e.g. `en_US.UTF-8`.
    fn language(&self) -> Option<String>;
}

/// Provider backed by the git configuration and process environment.
pub struct EnvDefaults;

impl DefaultsProvider for EnvDefaults {
    fn author(&self) -> Option<String> {
        git_author().or_else(|| {
            std::env::var("USER").ok().map(|user| user.trim().to_string()).filter(|user| !user.is_empty())
        })
    }

    fn language(&self) -> Option<String> {
        locale::detect_language()
    }
}

/// Reads `user.name` from the default git configuration, if any.
fn git_author() -> Option<String> {
    let config = git2::Config::open_default().ok()?;
    let name = config.get_string("user.name").ok()?;
    let name = name.trim().to_string();
    (!name.is_empty()).then_some(name)
}

/// Builds the default configuration record from a defaults provider.
pub fn default_config(defaults: &dyn DefaultsProvider) -> ProjectConfig {
    let author = defaults.author().unwrap_or_else(|| "Author Name".to_string());
    let prefix = locale::namespace_prefix(defaults.language().as_deref());
    let class_namespace =
        format!("{}.{}.examplemod", prefix, normalize::normalize_namespace_segment(&author));

    ProjectConfig {
        author,
        mod_name: "New Project".to_string(),
        mod_id: "new_project".to_string(),
        class_name: "ExampleMod".to_string(),
        class_namespace,
        class_package_name: "examplemod".to_string(),
        license: "MIT".to_string(),
        description: "Description for Example Mod ...".to_string(),
        display_url: "https://example.org/examplemod".to_string(),
        issue_tracker_url: "https://example.org/issues".to_string(),
        vendor_name: "johndoe".to_string(),
        game_version: "1.18.2".to_string(),
        config_version: CONFIG_VERSION.to_string(),
    }
}

/// Loads a seed configuration from a file, trying JSON first and YAML as
/// the fallback format.
pub fn load_seed_file<P: AsRef<Path>>(path: P) -> Result<SeedConfig> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::ConfigError(format!(
            "invalid configuration path: {}",
            path.display()
        )));
    }
    debug!("Loading seed configuration from {}", path.display());
    let content = std::fs::read_to_string(path).map_err(Error::IoError)?;
    parse_seed(&content)
}

/// Reads a JSON seed configuration from stdin.
pub fn seed_from_stdin() -> Result<SeedConfig> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    parse_seed(&buffer)
}

/// Parses seed content, trying JSON first and YAML second.
pub fn parse_seed(content: &str) -> Result<SeedConfig> {
    match serde_json::from_str(content) {
        Ok(seed) => Ok(seed),
        Err(_) => serde_yaml::from_str(content).map_err(|e| {
            Error::ConfigError(format!("invalid seed configuration: {}", e))
        }),
    }
}

/// Validates a confirmed configuration before materialization.
///
/// Checks that every field is non-empty, that identifier fields equal
/// their normalized form, that the namespace splits into normalized
/// segments, and that the URL fields actually parse as URLs.
pub fn validate(config: &ProjectConfig) -> Result<()> {
    let required = [
        ("author", &config.author),
        ("mod_name", &config.mod_name),
        ("mod_id", &config.mod_id),
        ("class_name", &config.class_name),
        ("class_namespace", &config.class_namespace),
        ("class_package_name", &config.class_package_name),
        ("license", &config.license),
        ("description", &config.description),
        ("display_url", &config.display_url),
        ("issue_tracker_url", &config.issue_tracker_url),
        ("vendor_name", &config.vendor_name),
        ("game_version", &config.game_version),
        ("config_version", &config.config_version),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(Error::ValidationError {
                field: field.to_string(),
                reason: "value must not be empty".to_string(),
            });
        }
    }

    ensure_normalized("mod_id", &config.mod_id, normalize::normalize_mod_id)?;
    ensure_normalized("class_name", &config.class_name, normalize::normalize_class_name)?;
    ensure_normalized(
        "class_package_name",
        &config.class_package_name,
        normalize::normalize_namespace_segment,
    )?;
    ensure_normalized("vendor_name", &config.vendor_name, normalize::normalize_vendor_name)?;

    for segment in config.class_namespace.split('.') {
        if segment.is_empty() || segment != normalize::normalize_namespace_segment(segment) {
            return Err(Error::ValidationError {
                field: "class_namespace".to_string(),
                reason: format!("segment '{}' is not a normalized package segment", segment),
            });
        }
    }

    for (field, value) in
        [("display_url", &config.display_url), ("issue_tracker_url", &config.issue_tracker_url)]
    {
        Url::parse(value).map_err(|e| Error::ValidationError {
            field: field.to_string(),
            reason: e.to_string(),
        })?;
    }

    Ok(())
}

fn ensure_normalized(field: &str, value: &str, normalizer: fn(&str) -> String) -> Result<()> {
    let normalized = normalizer(value);
    if value != normalized {
        return Err(Error::ValidationError {
            field: field.to_string(),
            reason: format!("expected normalized form '{}'", normalized),
        });
    }
    Ok(())
}

//! Interactive collection of the project configuration.
//!
//! Collects one field at a time so later suggestions can be derived from
//! earlier answers (the suggested mod id follows the mod name, the
//! namespace follows author and mod id, and so on). Returns `None` when
//! the user declines the final confirmation.

use crate::config::{ProjectConfig, SeedConfig};
use crate::constants::{DEFAULT_NAMESPACE_PREFIX, SUPPORTED_VERSIONS};
use crate::error::Result;
use crate::normalize;
use cruet::Inflector;
use dialoguer::{Confirm, Input, Select};

/// Resolves a single configuration field.
///
/// Seeded values are taken verbatim (final validation rejects them if
/// they are not normalized); prompted values are normalized on the way
/// out, the suggestion serving as the editable default.
fn resolve_field(
    seed: Option<String>,
    suggested: String,
    prompt: &str,
    assume_yes: bool,
    normalizer: Option<fn(&str) -> String>,
) -> Result<String> {
    match seed {
        Some(value) => Ok(value.trim().to_string()),
        None if assume_yes => Ok(suggested),
        None => {
            let input: String = Input::new()
                .with_prompt(prompt)
                .default(suggested)
                .validate_with(|value: &String| {
                    if value.trim().is_empty() {
                        Err("value must not be empty")
                    } else {
                        Ok(())
                    }
                })
                .interact_text()?;
            let input = input.trim();
            Ok(match normalizer {
                Some(normalize) => normalize(input),
                None => input.to_string(),
            })
        }
    }
}

/// Collects a full project configuration from seed values, interactive
/// prompts and environment defaults.
///
/// With `assume_yes`, unseeded fields take their suggested defaults and
/// the confirmation prompt is skipped. Returns `Ok(None)` when the user
/// cancels at the confirmation.
pub fn collect(
    seed: SeedConfig,
    defaults: &ProjectConfig,
    assume_yes: bool,
) -> Result<Option<ProjectConfig>> {
    let game_version = match seed.game_version {
        Some(version) => version,
        None if assume_yes => defaults.game_version.clone(),
        None => {
            let selection = Select::new()
                .with_prompt("Select the game version for your project")
                .items(&SUPPORTED_VERSIONS)
                .default(0)
                .interact()?;
            SUPPORTED_VERSIONS[selection].to_string()
        }
    };

    let author =
        resolve_field(seed.author, defaults.author.clone(), "Author Name", assume_yes, None)?;
    let mod_name =
        resolve_field(seed.mod_name, defaults.mod_name.clone(), "Mod Name", assume_yes, None)?;
    let mod_id = resolve_field(
        seed.mod_id,
        normalize::normalize_mod_id(&mod_name.to_snake_case()),
        "Mod Id",
        assume_yes,
        Some(normalize::normalize_mod_id),
    )?;
    let license =
        resolve_field(seed.license, defaults.license.clone(), "License", assume_yes, None)?;
    let description = resolve_field(
        seed.description,
        defaults.description.clone(),
        "Description",
        assume_yes,
        None,
    )?;
    let class_name = resolve_field(
        seed.class_name,
        normalize::normalize_class_name(&mod_name.to_pascal_case()),
        "Class Name",
        assume_yes,
        Some(normalize::normalize_class_name),
    )?;

    let namespace_prefix =
        defaults.class_namespace.split('.').next().unwrap_or(DEFAULT_NAMESPACE_PREFIX);
    let class_namespace = resolve_field(
        seed.class_namespace,
        format!(
            "{}.{}.{}",
            namespace_prefix,
            normalize::normalize_namespace_segment(&author),
            normalize::normalize_namespace_segment(&mod_id)
        ),
        "Class Namespace",
        assume_yes,
        Some(normalize::normalize_class_namespace),
    )?;
    let class_package_name = resolve_field(
        seed.class_package_name,
        class_namespace.split('.').next_back().unwrap_or("examplemod").to_string(),
        "Class Package Name",
        assume_yes,
        Some(normalize::normalize_namespace_segment),
    )?;
    let vendor_name = resolve_field(
        seed.vendor_name,
        normalize::normalize_vendor_name(&author),
        "Vendor Name",
        assume_yes,
        Some(normalize::normalize_vendor_name),
    )?;
    let display_url = resolve_field(
        seed.display_url,
        format!("https://curseforge.com/minecraft/mc-mods/{}", mod_id),
        "Display URL",
        assume_yes,
        None,
    )?;
    let issue_tracker_url = resolve_field(
        seed.issue_tracker_url,
        format!(
            "https://github.com/{}/{}/issues",
            normalize::normalize_repo_owner(&author),
            normalize::normalize_repo_name(&mod_name)
        ),
        "Issue Tracker URL",
        assume_yes,
        None,
    )?;
    let config_version =
        seed.config_version.unwrap_or_else(|| defaults.config_version.clone());

    let config = ProjectConfig {
        author,
        mod_name,
        mod_id,
        class_name,
        class_namespace,
        class_package_name,
        license,
        description,
        display_url,
        issue_tracker_url,
        vendor_name,
        game_version,
        config_version,
    };

    if !assume_yes {
        println!("{}", serde_json::to_string_pretty(&config)?);
        let confirmed = Confirm::new()
            .with_prompt("Do you want to create the project with these settings?")
            .default(true)
            .interact()?;
        if !confirmed {
            return Ok(None);
        }
    }

    Ok(Some(config))
}

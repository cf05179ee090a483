//! Common constants used throughout the mallet application.

/// Game versions with a bundled template.
pub const SUPPORTED_VERSIONS: [&str; 2] = ["1.18.2", "1.19.2"];

/// Directory name prefix of bundled templates: `mc-template-<version>`.
pub const TEMPLATE_PREFIX: &str = "mc-template-";

/// Environment variable overriding the template root directory.
pub const TEMPLATES_ENV: &str = "MALLET_TEMPLATES";

/// Loader module folders a template may contain.
pub const MODULE_FOLDERS: [&str; 4] = ["Common", "Fabric", "Forge", "NeoForge"];

/// Resource categories relocated per module folder.
pub const RESOURCE_CATEGORIES: [&str; 2] = ["assets", "data"];

/// Template-internal class namespace, as nested path segments.
pub const TEMPLATE_NAMESPACE: [&str; 3] = ["org", "example", "examplemod"];

/// Template-internal resource folder name.
pub const TEMPLATE_RESOURCE_FOLDER: &str = "example_mod";

/// Provenance file written at the root of every generated project.
pub const PROJECT_FILE: &str = "mallet.project";

/// Template-authorship and VCS artifacts removed from the output root.
pub const TEMPLATE_ARTIFACTS: [&str; 3] = [".git", "README.md", "LICENSE*"];

/// Project icon picked up from the invocation directory, if present.
pub const ICON_FILE: &str = "logo.png";

/// Namespace prefix used when the environment locale gives no hint.
pub const DEFAULT_NAMESPACE_PREFIX: &str = "net";

/// Version of the configuration format stored in the provenance file.
pub const CONFIG_VERSION: &str = "1.0.0";

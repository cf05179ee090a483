//! Advisory locale detection, used only to seed a default class namespace
//! prefix. Absence of a locale is never fatal.

use crate::constants::DEFAULT_NAMESPACE_PREFIX;
use log::warn;

/// Environment variables consulted for a locale tag, in precedence order.
const LOCALE_VARS: [&str; 4] = ["LC_ALL", "LC_MESSAGES", "LANG", "LANGUAGE"];

/// Returns the locale tag of the current environment, e.g. `en_US.UTF-8`.
pub fn detect_language() -> Option<String> {
    for var in LOCALE_VARS {
        if let Ok(value) = std::env::var(var) {
            if value.len() > 1 {
                return Some(value);
            }
        }
    }
    warn!("Unable to detect language for current environment");
    None
}

/// Derives a two-letter namespace prefix from a locale tag, falling back
/// to a fixed constant when the tag is absent or unusable.
pub fn namespace_prefix(language: Option<&str>) -> String {
    let prefix: String = language
        .unwrap_or_default()
        .chars()
        .take(2)
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect();

    if prefix.len() == 2 {
        prefix
    } else {
        DEFAULT_NAMESPACE_PREFIX.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_prefix() {
        assert_eq!(namespace_prefix(Some("en_US.UTF-8")), "en");
        assert_eq!(namespace_prefix(Some("de")), "de");
        assert_eq!(namespace_prefix(Some("C")), "net");
        assert_eq!(namespace_prefix(None), "net");
    }
}

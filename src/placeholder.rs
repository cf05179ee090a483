//! Placeholder maps and literal token substitution.
//!
//! Tokens are case-sensitive literal substrings, never patterns. The maps
//! are insertion-ordered and built fresh per materialization run; the
//! filename map is a strict subset of the content map.

use crate::config::ProjectConfig;
use indexmap::IndexMap;

/// Ordered mapping from literal template token to replacement text.
pub type PlaceholderMap = IndexMap<&'static str, String>;

/// Builds the content substitution map for a configuration.
///
/// Composite tokens (the example namespace and URLs) come before the bare
/// package tokens they contain, so a left-to-right scan consumes them
/// whole instead of rewriting their tails.
pub fn content_placeholders(config: &ProjectConfig) -> PlaceholderMap {
    IndexMap::from([
        ("Example Mod", config.mod_name.clone()),
        ("https://example.org/examplemod", config.display_url.clone()),
        ("https://example.org/issues", config.issue_tracker_url.clone()),
        ("org.example.examplemod", config.class_namespace.clone()),
        ("__MOD_AUTHOR__", config.author.clone()),
        ("__MOD_DESCRIPTION__", config.description.clone()),
        ("__MOD_NAME__", config.mod_name.clone()),
        ("example_mod", config.mod_id.clone()),
        ("ExampleMod", config.class_name.clone()),
        ("examplemod", config.class_package_name.clone()),
        ("johndoe", config.vendor_name.clone()),
    ])
}

/// Builds the filename substitution map: only the tokens that also appear
/// in template path segments.
pub fn filename_placeholders(config: &ProjectConfig) -> PlaceholderMap {
    IndexMap::from([
        ("example_mod", config.mod_id.clone()),
        ("ExampleMod", config.class_name.clone()),
        ("examplemod", config.class_package_name.clone()),
    ])
}

/// Replaces every token occurrence in `input` in a single left-to-right
/// scan. The leftmost match wins; at equal positions the earlier map entry
/// wins. Replacement text is appended to the output and never re-scanned,
/// so a replacement containing another token cannot be substituted again.
pub fn replace_all(input: &str, placeholders: &PlaceholderMap) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    'scan: while !rest.is_empty() {
        for (token, replacement) in placeholders {
            if rest.starts_with(token) {
                out.push_str(replacement);
                rest = &rest[token.len()..];
                continue 'scan;
            }
        }
        let mut chars = rest.chars();
        match chars.next() {
            Some(c) => {
                out.push(c);
                rest = chars.as_str();
            }
            None => break,
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&'static str, &str)]) -> PlaceholderMap {
        pairs.iter().map(|(k, v)| (*k, v.to_string())).collect()
    }

    #[test]
    fn test_replace_all_literal_tokens() {
        let placeholders = map(&[("ExampleMod", "MyMod")]);
        assert_eq!(
            replace_all("public class ExampleMod {}", &placeholders),
            "public class MyMod {}"
        );
    }

    #[test]
    fn test_replace_all_is_single_pass() {
        // The replacement reintroduces a later token; it must survive.
        let placeholders = map(&[("alpha", "examplemod"), ("examplemod", "other")]);
        assert_eq!(replace_all("alpha", &placeholders), "examplemod");
    }

    #[test]
    fn test_replace_all_leftmost_composite_token_wins() {
        let placeholders =
            map(&[("org.example.examplemod", "net.jane.mymod"), ("examplemod", "mymod")]);
        assert_eq!(
            replace_all("package org.example.examplemod;", &placeholders),
            "package net.jane.mymod;"
        );
    }

    #[test]
    fn test_filename_tokens_are_a_subset_of_content_tokens() {
        let config = ProjectConfig {
            author: "Jane".to_string(),
            mod_name: "My Mod".to_string(),
            mod_id: "my_mod".to_string(),
            class_name: "MyMod".to_string(),
            class_namespace: "net.jane.mymod".to_string(),
            class_package_name: "mymod".to_string(),
            license: "MIT".to_string(),
            description: "desc".to_string(),
            display_url: "https://x".to_string(),
            issue_tracker_url: "https://x/issues".to_string(),
            vendor_name: "jane".to_string(),
            game_version: "1.18.2".to_string(),
            config_version: "1.0.0".to_string(),
        };
        let content = content_placeholders(&config);
        let filename = filename_placeholders(&config);

        for (token, replacement) in &filename {
            assert_eq!(content.get(token), Some(replacement));
        }
        assert!(filename.len() < content.len());
    }

    #[test]
    fn test_replace_all_treats_metacharacters_literally() {
        let placeholders = map(&[("https://example.org/examplemod", "https://x")]);
        assert_eq!(replace_all("httpsX//exampleYorg/examplemod", &placeholders), "httpsX//exampleYorg/examplemod");
        assert_eq!(replace_all("see https://example.org/examplemod.", &placeholders), "see https://x.");
    }
}

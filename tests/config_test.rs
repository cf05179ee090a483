use mallet::config::{default_config, parse_seed, validate, DefaultsProvider, ProjectConfig};
use mallet::error::Error;

struct StubDefaults {
    author: Option<&'static str>,
    language: Option<&'static str>,
}

impl DefaultsProvider for StubDefaults {
    fn author(&self) -> Option<String> {
        self.author.map(String::from)
    }

    fn language(&self) -> Option<String> {
        self.language.map(String::from)
    }
}

fn sample_config() -> ProjectConfig {
    ProjectConfig {
        author: "Jane".to_string(),
        mod_name: "My Mod".to_string(),
        mod_id: "my_mod".to_string(),
        class_name: "MyMod".to_string(),
        class_namespace: "net.jane.mymod".to_string(),
        class_package_name: "mymod".to_string(),
        license: "MIT".to_string(),
        description: "desc".to_string(),
        display_url: "https://example.com/my_mod".to_string(),
        issue_tracker_url: "https://example.com/my_mod/issues".to_string(),
        vendor_name: "jane".to_string(),
        game_version: "1.18.2".to_string(),
        config_version: "1.0.0".to_string(),
    }
}

#[test]
fn test_default_config_from_provider() {
    let defaults = default_config(&StubDefaults {
        author: Some("Jane Doe"),
        language: Some("de_DE.UTF-8"),
    });

    assert_eq!(defaults.author, "Jane Doe");
    assert_eq!(defaults.class_namespace, "de.janedoe.examplemod");
    assert_eq!(defaults.class_name, "ExampleMod");
    assert_eq!(defaults.game_version, "1.18.2");
    assert_eq!(defaults.config_version, "1.0.0");
}

#[test]
fn test_default_config_fallbacks() {
    let defaults = default_config(&StubDefaults { author: None, language: None });

    assert_eq!(defaults.author, "Author Name");
    assert_eq!(defaults.class_namespace, "net.authorname.examplemod");
}

#[test]
fn test_validate_accepts_normalized_config() {
    assert!(validate(&sample_config()).is_ok());
}

#[test]
fn test_validate_rejects_unnormalized_identifier() {
    let mut config = sample_config();
    config.mod_id = "My Mod".to_string();

    let err = validate(&config).unwrap_err();
    assert!(matches!(err, Error::ValidationError { ref field, .. } if field == "mod_id"));
}

#[test]
fn test_validate_rejects_empty_field() {
    let mut config = sample_config();
    config.author = "  ".to_string();

    let err = validate(&config).unwrap_err();
    assert!(matches!(err, Error::ValidationError { ref field, .. } if field == "author"));
}

#[test]
fn test_validate_rejects_bad_namespace() {
    for namespace in ["net..jane", "Net.jane.mymod", "net.jane.my mod"] {
        let mut config = sample_config();
        config.class_namespace = namespace.to_string();

        let err = validate(&config).unwrap_err();
        assert!(
            matches!(err, Error::ValidationError { ref field, .. } if field == "class_namespace"),
            "expected rejection for {:?}",
            namespace
        );
    }
}

#[test]
fn test_validate_rejects_invalid_url() {
    let mut config = sample_config();
    config.display_url = "not a url".to_string();

    let err = validate(&config).unwrap_err();
    assert!(matches!(err, Error::ValidationError { ref field, .. } if field == "display_url"));
}

#[test]
fn test_parse_seed_json() {
    let seed = parse_seed(r#"{"mod_name": "Cool Mod", "game_version": "1.18.2"}"#).unwrap();

    assert_eq!(seed.mod_name.as_deref(), Some("Cool Mod"));
    assert_eq!(seed.game_version.as_deref(), Some("1.18.2"));
    assert_eq!(seed.author, None);
}

#[test]
fn test_parse_seed_yaml() {
    let seed = parse_seed("mod_name: Cool Mod\nauthor: Jane\n").unwrap();

    assert_eq!(seed.mod_name.as_deref(), Some("Cool Mod"));
    assert_eq!(seed.author.as_deref(), Some("Jane"));
}

#[test]
fn test_parse_seed_rejects_unknown_fields() {
    assert!(parse_seed(r#"{"mod_nome": "typo"}"#).is_err());
}

#[test]
fn test_parse_seed_rejects_garbage() {
    assert!(matches!(parse_seed(": not : valid : anything :"), Err(Error::ConfigError(_))));
}

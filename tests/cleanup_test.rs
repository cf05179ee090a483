use mallet::cleanup::{cleanup, copy_project_icon};
use mallet::config::ProjectConfig;
use mallet::error::Error;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

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

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn test_cleanup_relocates_and_removes_artifacts() {
    let workspace = TempDir::new().unwrap();
    let project = workspace.path().join("project");
    let invocation = workspace.path().join("cwd");
    fs::create_dir_all(&invocation).unwrap();

    write_file(
        &project.join("Common/src/main/java/org/example/examplemod/ExampleMod.java"),
        "public class ExampleMod {}",
    );
    write_file(&project.join("Common/src/main/resources/assets/example_mod/model.json"), "{}");
    write_file(&project.join("Common/src/main/resources/data/example_mod/loot.json"), "{}");
    write_file(&project.join("README.md"), "template readme");
    write_file(&project.join("LICENSE.md"), "template license");
    write_file(&project.join(".git/config"), "[core]");

    cleanup(&project, &invocation, &sample_config()).unwrap();

    assert!(project
        .join("Common/src/main/java/net/jane/mymod/ExampleMod.java")
        .is_file());
    // The emptied template package chain is pruned.
    assert!(!project.join("Common/src/main/java/org").exists());
    assert!(project.join("Common/src/main/resources/assets/my_mod/model.json").is_file());
    assert!(project.join("Common/src/main/resources/data/my_mod/loot.json").is_file());
    assert!(!project.join("README.md").exists());
    assert!(!project.join("LICENSE.md").exists());
    assert!(!project.join(".git").exists());
}

#[test_log::test]
fn test_cleanup_skips_absent_folders() {
    let workspace = TempDir::new().unwrap();
    let project = workspace.path().join("project");
    let invocation = workspace.path().join("cwd");
    fs::create_dir_all(&project).unwrap();
    fs::create_dir_all(&invocation).unwrap();

    // No module folders at all: every step skips with a warning.
    cleanup(&project, &invocation, &sample_config()).unwrap();
}

#[test_log::test]
fn test_cleanup_keeps_nonempty_fragment() {
    let workspace = TempDir::new().unwrap();
    let project = workspace.path().join("project");
    let invocation = workspace.path().join("cwd");
    fs::create_dir_all(&invocation).unwrap();

    write_file(
        &project.join("Common/src/main/java/org/example/examplemod/ExampleMod.java"),
        "public class ExampleMod {}",
    );
    write_file(&project.join("Common/src/main/java/org/example/other/Keep.java"), "class Keep {}");

    cleanup(&project, &invocation, &sample_config()).unwrap();

    // The namespace folder moved, but the sibling survives untouched.
    assert!(project.join("Common/src/main/java/net/jane/mymod/ExampleMod.java").is_file());
    assert!(project.join("Common/src/main/java/org/example/other/Keep.java").is_file());
}

#[test]
fn test_cleanup_namespace_matching_template_is_noop() {
    let workspace = TempDir::new().unwrap();
    let project = workspace.path().join("project");
    let invocation = workspace.path().join("cwd");
    fs::create_dir_all(&invocation).unwrap();

    let mut config = sample_config();
    config.class_namespace = "org.example.examplemod".to_string();
    write_file(
        &project.join("Common/src/main/java/org/example/examplemod/ExampleMod.java"),
        "public class ExampleMod {}",
    );

    cleanup(&project, &invocation, &config).unwrap();

    assert!(project
        .join("Common/src/main/java/org/example/examplemod/ExampleMod.java")
        .is_file());
}

#[test]
fn test_cleanup_namespace_collision_fails() {
    let workspace = TempDir::new().unwrap();
    let project = workspace.path().join("project");
    let invocation = workspace.path().join("cwd");
    fs::create_dir_all(&invocation).unwrap();

    write_file(
        &project.join("Common/src/main/java/org/example/examplemod/ExampleMod.java"),
        "public class ExampleMod {}",
    );
    write_file(&project.join("Common/src/main/java/net/jane/mymod/Existing.java"), "class E {}");

    let err = cleanup(&project, &invocation, &sample_config()).unwrap_err();
    assert!(matches!(err, Error::RenameCollision { .. }));
}

#[test]
fn test_copy_project_icon() {
    let workspace = TempDir::new().unwrap();
    let project = workspace.path().join("project");
    let invocation = workspace.path().join("cwd");
    fs::create_dir_all(&project).unwrap();
    fs::create_dir_all(&invocation).unwrap();
    fs::write(invocation.join("logo.png"), b"png bytes").unwrap();

    copy_project_icon(&project, &invocation).unwrap();

    let copied = project.join("Common/src/main/resources/logo.png");
    assert_eq!(fs::read(copied).unwrap(), b"png bytes");
}

#[test]
fn test_copy_project_icon_absent() {
    let workspace = TempDir::new().unwrap();
    let project = workspace.path().join("project");
    let invocation = workspace.path().join("cwd");
    fs::create_dir_all(&project).unwrap();
    fs::create_dir_all(&invocation).unwrap();

    copy_project_icon(&project, &invocation).unwrap();

    assert!(!project.join("Common/src/main/resources/logo.png").exists());
}

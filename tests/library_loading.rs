mod common;

use std::error::Error;

use shackles::config::load_library;
use shackles::errors::ShacklesError;
use shackles_test_utils::call_args;

use common::{LIBRARY_YAML, temp_file};

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn yaml_library_builds_every_action() -> TestResult {
    let file = temp_file(".yaml", LIBRARY_YAML);
    let lib = load_library(file.path())?;

    assert_eq!(lib.len(), 4);
    assert_eq!(lib.lookup("test1")?.program(), "ls");
    assert_eq!(lib.lookup("test2")?.program(), "pwd");
    assert_eq!(lib.lookup("test3")?.program(), "ls");
    assert_eq!(lib.lookup("test1")?.help_text(), Some("Check for matching files."));

    Ok(())
}

#[test]
fn yaml_library_resolves_templates() -> TestResult {
    let file = temp_file(".yaml", LIBRARY_YAML);
    let lib = load_library(file.path())?;

    assert_eq!(
        lib.resolve("test3", &call_args(&[("color", "auto")]))?,
        vec!["ls", "--color", "auto"]
    );
    assert_eq!(
        lib.resolve("install", &call_args(&[("pkg", "git")]))?,
        vec!["yum", "install", "git"]
    );
    assert_eq!(lib.resolve("test2", &call_args(&[("x", "y")]))?, vec!["pwd"]);

    Ok(())
}

#[test]
fn toml_library_is_detected_by_extension() -> TestResult {
    let file = temp_file(
        ".toml",
        r#"
[copy]
cmd = "cp -r"
args = ["%(src)s", "%(dest)s"]
help = "Copy a tree."
"#,
    );
    let lib = load_library(file.path())?;

    assert_eq!(
        lib.resolve("copy", &call_args(&[("src", "a"), ("dest", "b")]))?,
        vec!["cp", "-r", "a", "b"]
    );

    Ok(())
}

#[test]
fn invalid_entry_returns_config_error() {
    let file = temp_file(
        ".yaml",
        r#"
good:
    cmd: pwd
bad:
    cmd: ls
    arg: one
    args: [two]
"#,
    );

    match load_library(file.path()) {
        Err(ShacklesError::ConfigError(msg)) => {
            assert!(msg.contains("'bad'"));
            assert!(msg.contains("both"));
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn entry_without_cmd_is_a_parse_error() {
    let file = temp_file(".yaml", "broken:\n    help: no command here\n");

    match load_library(file.path()) {
        Err(ShacklesError::YamlError(e)) => assert!(e.to_string().contains("cmd")),
        Err(e) => panic!("Expected YamlError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn missing_library_returns_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.yaml");

    match load_library(&path) {
        Err(ShacklesError::MissingFile { role, path: reported }) => {
            assert_eq!(role, "library");
            assert_eq!(reported, path.display().to_string());
        }
        Err(e) => panic!("Expected MissingFile, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn desc_and_help_may_both_be_present() -> TestResult {
    let file = temp_file(
        ".yaml",
        "a:\n    cmd: ls\n    desc: old text\n    help: new text\nb:\n    cmd: pwd\n    desc: only desc\n",
    );
    let lib = load_library(file.path())?;

    assert_eq!(lib.lookup("a")?.help_text(), Some("new text"));
    assert_eq!(lib.lookup("b")?.help_text(), Some("only desc"));

    Ok(())
}

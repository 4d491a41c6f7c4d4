//! Exit codes and messages for failing runs.

mod common;

use predicates::prelude::*;

use common::{MAIN_CPP, Project, newcomp};

#[test]
fn invalid_name_exits_with_user_error() {
    let project = Project::new();

    project
        .cmd()
        .args(["new", "--category", "drivers", "--name", "1sensor", "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid component name '1sensor'"));

    assert!(!project.path("include/drivers").exists());
}

#[test]
fn invalid_name_outside_a_project_is_user_error() {
    let empty = tempfile::tempdir().unwrap();

    newcomp()
        .current_dir(empty.path())
        .env("HOME", empty.path())
        .args(["new", "--category", "drivers", "--name", "1sensor", "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid component name '1sensor'"))
        .stderr(predicate::str::contains("No project root found").not());
}

#[test]
fn missing_name_with_yes_is_user_error() {
    let project = Project::new();

    project
        .cmd()
        .args(["new", "--category", "drivers", "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Required field missing: name"));
}

#[test]
fn missing_marker_writes_nothing() {
    let main = MAIN_CPP.replace("    // USER NEW PERIODICS BEGIN\n", "");
    let project = Project::with_main_cpp(&main);

    project
        .cmd()
        .args(["new", "--category", "periodics", "--name", "speedsensor", "--yes"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("// USER NEW PERIODICS BEGIN"))
        .stderr(predicate::str::contains("No files were written"));

    assert!(!project.path("include/periodics/speedsensor.hpp").exists());
    assert_eq!(project.read("source/main.cpp"), main);
}

#[test]
fn no_project_root_is_not_found() {
    let empty = tempfile::tempdir().unwrap();

    newcomp()
        .current_dir(empty.path())
        .env("HOME", empty.path())
        .args(["new", "--category", "drivers", "--name", "motor", "--yes"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("No project root found"))
        .stderr(predicate::str::contains("--root"));
}

#[test]
fn missing_config_file_is_configuration_error() {
    let project = Project::new();

    project
        .cmd()
        .args(["--config", "does-not-exist.toml", "list"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn unknown_config_key() {
    let project = Project::new();

    project
        .cmd()
        .args(["config", "get", "markers.nope"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn verbose_shows_cause_chain() {
    let project = Project::new();

    project
        .cmd()
        .args(["-v", "--config", "does-not-exist.toml", "list"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Caused by:"))
        .stderr(predicate::str::contains("Use -v / --verbose").not());
}

#[test]
fn unknown_flag_is_usage_error() {
    newcomp()
        .args(["new", "--colour"])
        .assert()
        .code(2);
}

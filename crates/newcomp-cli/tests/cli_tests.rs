//! End-to-end runs of the `newcomp` binary against a temporary project.

mod common;

use std::fs;

use predicates::prelude::*;

use common::{CMAKE, MAIN_CPP, MAIN_HPP, Project, newcomp};

#[test]
fn help_describes_the_tool() {
    newcomp()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("header/source pair"))
        .stdout(predicate::str::contains("new"));
}

#[test]
fn version_flag() {
    newcomp()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn periodic_component_is_created_and_wired() {
    let project = Project::new();

    project
        .cmd()
        .args(["new", "--category", "periodics", "--name", "speedsensor", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created:"))
        .stdout(predicate::str::contains("speedsensor.hpp"))
        .stdout(predicate::str::contains("speedsensor.cpp"));

    let header = project.read("include/periodics/speedsensor.hpp");
    assert!(header.contains("class CSpeedsensor: public utils::CTask"));
    assert!(project.path("source/periodics/speedsensor.cpp").is_file());

    let main = project.read("source/main.cpp");
    assert!(main.contains(
        "/* USER NEW COMPONENT BEGIN */\nperiodics::CSpeedsensor g_speedsensor(g_baseTick * NO_OF_MILISECONDS);\n"
    ));
    assert!(main.contains("    // USER NEW PERIODICS BEGIN\n    &g_speedsensor,\n"));

    assert_eq!(project.read("CMakeLists.txt"), CMAKE);
    assert!(
        project
            .read("include/main.hpp")
            .ends_with("#include <periodics/speedsensor.hpp>\n")
    );
}

#[test]
fn explicit_root_from_anywhere() {
    let project = Project::new();
    let elsewhere = tempfile::tempdir().unwrap();

    newcomp()
        .current_dir(elsewhere.path())
        .env("HOME", elsewhere.path())
        .args(["new", "--category", "drivers", "--name", "motor", "--callback", "--yes"])
        .arg("--root")
        .arg(project.root())
        .assert()
        .success();

    let main = project.read("source/main.cpp");
    assert!(main.contains("drivers::CMotor g_motor(possible_argument);"));
    assert!(main.contains(
        "{\"motor\", mbed::callback(&g_motor, &drivers::CMotor::serialCallbackMotorCommand)},"
    ));
}

#[test]
fn root_is_discovered_from_a_subdirectory() {
    let project = Project::new();

    project
        .cmd()
        .current_dir(project.path("source/periodics"))
        .args(["new", "--category", "utils", "--name", "filter", "--yes"])
        .assert()
        .success();

    assert!(project.path("include/utils/filter.hpp").is_file());
    assert!(project.path("source/utils/filter.cpp").is_file());
}

#[test]
fn rerun_leaves_existing_files_alone() {
    let project = Project::new();
    let args = ["new", "--category", "periodics", "--name", "speedsensor", "--yes"];

    project.cmd().args(args).assert().success();
    let header = project.read("include/periodics/speedsensor.hpp");
    let main = project.read("source/main.cpp");
    let aggregate = project.read("include/main.hpp");

    project
        .cmd()
        .args(args)
        .assert()
        .success()
        .stdout(predicate::str::contains("File already exists"))
        .stdout(predicate::str::contains("Created:").not());

    assert_eq!(project.read("include/periodics/speedsensor.hpp"), header);
    assert_eq!(project.read("source/main.cpp"), main);
    assert_eq!(project.read("include/main.hpp"), aggregate);
}

#[test]
fn new_category_is_registered_in_build_file() {
    let project = Project::new();

    project
        .cmd()
        .args(["new", "--category", "sensors", "--name", "lidar", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Registered category 'sensors'"));

    let cmake = project.read("CMakeLists.txt");
    assert!(cmake.contains(
        "    \"${CMAKE_CURRENT_SOURCE_DIR}/source/utils/*.cpp\"\n    \"${CMAKE_CURRENT_SOURCE_DIR}/source/sensors/*.cpp\"\n"
    ));
    assert!(cmake.contains("    ${CMAKE_CURRENT_SOURCE_DIR}/include/sensors\n"));
    assert!(project.path("include/sensors/lidar.hpp").is_file());

    // Second component in the same category does not register it again.
    project
        .cmd()
        .args(["new", "--category", "sensors", "--name", "sonar", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already registered"));
    assert_eq!(
        project
            .read("CMakeLists.txt")
            .matches("source/sensors/*.cpp")
            .count(),
        1
    );
}

#[test]
fn dry_run_writes_nothing() {
    let project = Project::new();

    project
        .cmd()
        .args(["new", "--category", "sensors", "--name", "lidar", "--callback", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("lidar.hpp"))
        .stdout(predicate::str::contains("dispatch entry"));

    assert!(!project.path("include/sensors").exists());
    assert_eq!(project.read("CMakeLists.txt"), CMAKE);
    assert_eq!(project.read("source/main.cpp"), MAIN_CPP);
    assert_eq!(project.read("include/main.hpp"), MAIN_HPP);
}

#[test]
fn json_report_lists_steps() {
    let project = Project::new();

    let assert = project
        .cmd()
        .args(["--output-format", "json"])
        .args(["new", "--category", "drivers", "--name", "motor", "--yes"])
        .assert()
        .success();

    let report: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).unwrap();
    let steps = report["steps"].as_array().unwrap();
    assert!(
        steps
            .iter()
            .any(|s| s["step"] == "created" && s["path"].as_str().unwrap().ends_with("motor.hpp"))
    );
    assert!(steps.iter().any(|s| s["step"] == "wired"));
}

#[test]
fn list_shows_existing_components() {
    let project = Project::new();
    project
        .cmd()
        .args(["new", "--category", "sensors", "--name", "lidar", "--yes"])
        .assert()
        .success();

    project
        .cmd()
        .args(["list", "--format", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("periodics/blinker"))
        .stdout(predicate::str::contains("sensors/lidar"));

    let assert = project
        .cmd()
        .args(["list", "--format", "json"])
        .assert()
        .success();
    let entries: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    let sensors = entries
        .as_array()
        .unwrap()
        .iter()
        .find(|e| e["name"] == "sensors")
        .unwrap();
    assert_eq!(sensors["known"], false);
    assert_eq!(sensors["components"][0], "lidar");
}

#[test]
fn local_config_changes_markers() {
    let main = MAIN_CPP.replace("// USER NEW PERIODICS BEGIN", "// TASKS");
    let project = Project::with_main_cpp(&main);
    fs::write(
        project.path(".newcomp.toml"),
        "[markers]\nperiodic = \"// TASKS\"\n\n[wiring]\nperiodic_argument = \"g_baseTick * 10\"\n",
    )
    .unwrap();

    project
        .cmd()
        .args(["new", "--category", "periodics", "--name", "imu", "--yes"])
        .assert()
        .success();

    let main = project.read("source/main.cpp");
    assert!(main.contains("periodics::CImu g_imu(g_baseTick * 10);"));
    assert!(main.contains("    // TASKS\n    &g_imu,\n"));
}

#[test]
fn config_get_prints_value() {
    let project = Project::new();

    project
        .cmd()
        .args(["config", "get", "markers.component"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/* USER NEW COMPONENT BEGIN */"));
}

#[test]
fn env_overrides_config() {
    let project = Project::new();

    project
        .cmd()
        .env("NEWCOMP__WIRING__GENERIC_ARGUMENT", "0u")
        .args(["config", "get", "wiring.generic_argument"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0u"));
}

#[test]
fn init_writes_local_config_once() {
    let project = Project::new();

    project
        .cmd()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration created"));
    let written = project.read(".newcomp.toml");
    assert!(written.contains("[markers]"));

    fs::write(project.path(".newcomp.toml"), "# mine\n").unwrap();
    project
        .cmd()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"));
    assert_eq!(project.read(".newcomp.toml"), "# mine\n");
}

#[test]
fn completions_for_bash() {
    newcomp()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("newcomp"));
}

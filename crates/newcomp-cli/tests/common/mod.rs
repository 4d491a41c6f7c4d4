//! Shared fixture: a minimal embedded project in a temporary directory.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub const CMAKE: &str = "\
cmake_minimum_required(VERSION 3.19)
target_sources(${APP}
    \"${CMAKE_CURRENT_SOURCE_DIR}/source/brain/*.cpp\"
    \"${CMAKE_CURRENT_SOURCE_DIR}/source/drivers/*.cpp\"
    \"${CMAKE_CURRENT_SOURCE_DIR}/source/periodics/*.cpp\"
    \"${CMAKE_CURRENT_SOURCE_DIR}/source/utils/*.cpp\"
)
target_include_directories(${APP}
    ${CMAKE_CURRENT_SOURCE_DIR}/include/
    ${CMAKE_CURRENT_SOURCE_DIR}/include/brain
    ${CMAKE_CURRENT_SOURCE_DIR}/include/utils
)
";

pub const MAIN_CPP: &str = "\
#include <main.hpp>

uint8_t g_baseTick = 1;

/* USER NEW COMPONENT BEGIN */
periodics::CBlinker g_blinker(g_baseTick * 500);

drivers::CSerialMonitor::CSerialSubscriberMap g_serialMonitorSubscribers = {
    {\"blink\", mbed::callback(&g_blinker, &periodics::CBlinker::serialCallbackBlinkCommand)},
};

utils::CTask* g_taskList[] = {
    // USER NEW PERIODICS BEGIN
    &g_blinker,
};
";

pub const MAIN_HPP: &str = "#include <periodics/blinker.hpp>\n";

pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn new() -> Self {
        Self::with_main_cpp(MAIN_CPP)
    }

    pub fn with_main_cpp(main_cpp: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("include/periodics")).unwrap();
        fs::create_dir_all(root.join("source/periodics")).unwrap();
        fs::write(root.join("CMakeLists.txt"), CMAKE).unwrap();
        fs::write(root.join("source/main.cpp"), main_cpp).unwrap();
        fs::write(root.join("include/main.hpp"), MAIN_HPP).unwrap();
        fs::write(root.join("include/periodics/blinker.hpp"), "// blinker\n").unwrap();
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative)).unwrap()
    }

    /// `newcomp` running inside the project with an isolated environment.
    pub fn cmd(&self) -> Command {
        let mut cmd = newcomp();
        cmd.current_dir(self.root())
            .env("HOME", self.root())
            .env("XDG_CONFIG_HOME", self.root().join(".config"));
        cmd
    }
}

/// `newcomp` without colors or inherited configuration.
///
/// stdout is a pipe, so the output format resolves to plain text.
pub fn newcomp() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("newcomp");
    cmd.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("XDG_CONFIG_HOME")
        .env_remove("NEWCOMP__PROJECT__ROOT");
    cmd
}

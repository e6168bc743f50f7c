#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Scratch directory holding a backing file and config for one test, so
/// tests never touch the real platform locations.
pub struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("tempdir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn tasks_file(&self) -> PathBuf {
        self.dir.path().join("tasks.txt")
    }

    pub fn config_file(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    /// A taskbook command pinned to this sandbox's files.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("taskbook").expect("binary");
        cmd.env_remove("TASKBOOK_FILE");
        cmd.env_remove("TASKBOOK_CONFIG");
        cmd.arg("--file").arg(self.tasks_file());
        cmd.arg("--config").arg(self.config_file());
        cmd
    }

    pub fn write_tasks(&self, contents: &str) {
        std::fs::write(self.tasks_file(), contents).expect("write tasks file");
    }

    pub fn read_tasks(&self) -> String {
        std::fs::read_to_string(self.tasks_file()).expect("read tasks file")
    }

    pub fn write_config(&self, contents: &str) {
        std::fs::write(self.config_file(), contents).expect("write config file");
    }
}

#![allow(dead_code)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Scratch directory holding hook scripts for one test
pub struct HookDir {
    pub dir: TempDir,
}

impl HookDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write an executable `/bin/sh` script with the given body
    pub fn script(&self, name: &str, body: &str) -> PathBuf {
        let path = self.write(&self.path().join(name), body);
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    /// Write a script without any execute bit
    pub fn plain_script(&self, name: &str, body: &str) -> PathBuf {
        let path = self.write(&self.path().join(name), body);
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();
        path
    }

    /// Fake repository layout with `.git/hooks/<name>` installed
    pub fn install_hook(&self, name: &str, body: &str) -> PathBuf {
        let hooks = self.path().join(".git").join("hooks");
        std::fs::create_dir_all(&hooks).unwrap();
        let path = self.write(&hooks.join(name), body);
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    fn write(&self, path: &Path, body: &str) -> PathBuf {
        std::fs::write(path, format!("#!/bin/sh\n{}", body)).unwrap();
        path.to_path_buf()
    }
}

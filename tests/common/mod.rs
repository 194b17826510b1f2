//! Common test utilities for pkgmerge integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A temporary project directory with host and boilerplate manifests
#[allow(dead_code)]
pub struct TestProject {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to project root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestProject {
    /// Create a new empty test project
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write the host package.json
    pub fn write_host(&self, content: &str) {
        self.write_file("package.json", content);
    }

    /// Write the boilerplate package.json
    pub fn write_template(&self, content: &str) {
        self.write_file("boilerplate/package.json", content);
    }

    /// Write a file in the project
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the project
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in the project
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Directories created by the default timestamped backup naming
    pub fn backup_dirs(&self) -> Vec<PathBuf> {
        let mut dirs = Vec::new();
        for entry in std::fs::read_dir(&self.path).expect("Failed to read project dir") {
            let entry = entry.expect("Failed to read dir entry");
            let name = entry.file_name();
            if name.to_string_lossy().starts_with(".boilerplate-backup-") {
                dirs.push(entry.path());
            }
        }
        dirs
    }
}

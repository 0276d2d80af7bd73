//! Test harness for sprout integration tests

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

pub struct TestSpace {
    dir: TempDir,
}

impl TestSpace {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `tree.json` with the given contents and return its path.
    pub fn write_tree(&self, json: &str) -> PathBuf {
        let path = self.dir.path().join("tree.json");
        fs::write(&path, json).expect("Failed to write tree file");
        path
    }

    /// The output directory tests pass via `-o`.
    pub fn out_dir(&self) -> PathBuf {
        self.dir.path().join("descriptions")
    }

    /// Pre-create a description file with arbitrary content.
    pub fn add_existing(&self, name: &str, content: &str) -> PathBuf {
        let path = self.out_dir().join(format!("{name}.md"));
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create output dir");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }
}

impl Default for TestSpace {
    fn default() -> Self {
        Self::new()
    }
}

pub fn run_sprout(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_sprout");
    let output = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .env_remove("NO_COLOR")
        .env_remove("FORCE_COLOR")
        .output()
        .expect("Failed to run sprout");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let space = TestSpace::new();
        assert!(space.path().exists());
    }

    #[test]
    fn test_harness_write_tree() {
        let space = TestSpace::new();
        let path = space.write_tree(r#"{"tree": []}"#);
        assert!(path.exists());
    }

    #[test]
    fn test_harness_add_existing() {
        let space = TestSpace::new();
        let path = space.add_existing("Alpha", "content");
        assert_eq!(fs::read_to_string(path).unwrap(), "content");
    }
}

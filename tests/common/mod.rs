//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::path::PathBuf;
use tempfile::TempDir;

/// Temporary toolchain package store
///
/// Creates a temporary packages directory and provides utilities for
/// installing fake toolchain packages with chosen internal layouts.
pub struct TestStore {
    /// Temporary directory acting as the packages directory
    pub dir: TempDir,
}

impl TestStore {
    /// Create a new empty store in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Get the path to the packages directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Install a fake package containing the given bin-directory layouts.
    ///
    /// Returns the package root. An empty layout list installs the package
    /// root with no bin directory at all.
    pub fn install_package(&self, package: &str, layouts: &[&str]) -> PathBuf {
        let root = self.dir.path().join(package);
        std::fs::create_dir_all(&root).expect("Failed to create package root");
        for layout in layouts {
            std::fs::create_dir_all(root.join(layout)).expect("Failed to create layout");
        }
        root
    }
}

impl Default for TestStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Sample registry config TOML for testing
#[allow(dead_code)]
pub const SAMPLE_CONFIG: &str = r#"
[[toolchain]]
package = "toolchain-gccarmnoneeabi"
name = "ARM"
candidates = ["bin", "arm-none-eabi/bin"]
remedy = "pio pkg install -g toolchain-gccarmnoneeabi"
"#;

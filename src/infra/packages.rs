//! Toolchain package store
//!
//! Looks up installed toolchain packages by name. The store is a flat
//! directory of packages maintained by the external package manager; this
//! module only reads it. Follows XDG conventions on Linux and standard
//! locations on macOS for the default store location.
//!
//! The `TOOLPATH_PACKAGES_DIR` environment variable overrides the default
//! directory.

use std::env;
use std::path::{Path, PathBuf};

/// Environment variable overriding the packages directory
pub const ENV_PACKAGES_DIR: &str = "TOOLPATH_PACKAGES_DIR";

/// Application name used in directory paths
const APP_NAME: &str = "toolpath";

/// Subdirectory of the data dir holding installed packages
const PACKAGES_SUBDIR: &str = "packages";

/// Read-only view of the directory where toolchain packages are installed.
#[derive(Debug, Clone)]
pub struct PackageStore {
    packages_dir: PathBuf,
}

impl PackageStore {
    /// Create a store rooted at an explicit directory
    pub fn new(packages_dir: PathBuf) -> Self {
        Self { packages_dir }
    }

    /// Locate the packages directory.
    ///
    /// Resolution order: explicit override, `TOOLPATH_PACKAGES_DIR`, then
    /// the platform data directory (`$XDG_DATA_HOME/toolpath/packages` on
    /// Linux, `~/Library/Application Support/toolpath/packages` on macOS)
    /// with a home-relative fallback.
    pub fn discover(override_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = override_dir {
            return Self::new(dir);
        }

        if let Ok(dir) = env::var(ENV_PACKAGES_DIR) {
            return Self::new(PathBuf::from(dir));
        }

        Self::new(Self::platform_packages_dir())
    }

    /// Get the packages directory
    pub fn packages_dir(&self) -> &Path {
        &self.packages_dir
    }

    /// Look up the root directory of an installed package.
    ///
    /// Returns `None` when the store has no directory for the package,
    /// which is the package manager's way of reporting "not installed".
    pub fn package_dir(&self, package: &str) -> Option<PathBuf> {
        let dir = self.packages_dir.join(package);
        dir.is_dir().then_some(dir)
    }

    /// Get platform-specific packages directory
    fn platform_packages_dir() -> PathBuf {
        dirs::data_dir()
            .map(|p| p.join(APP_NAME).join(PACKAGES_SUBDIR))
            .unwrap_or_else(|| {
                // Fallback to home directory
                dirs::home_dir()
                    .map(|h| h.join(".local").join("share").join(APP_NAME))
                    .unwrap_or_else(|| PathBuf::from(".").join(APP_NAME))
                    .join(PACKAGES_SUBDIR)
            })
    }
}

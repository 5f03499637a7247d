//! Toolchain registry configuration
//!
//! The registry maps package names to [`ToolchainSpec`] records. It starts
//! from the built-in defaults and can be extended (or overridden per
//! package) by a TOML config file:
//!
//! ```toml
//! [[toolchain]]
//! package = "toolchain-riscv32-esp"
//! name = "RISC-V"
//! candidates = ["bin", "riscv32-esp-elf/bin"]
//! remedy = "pio pkg install -g toolchain-riscv32-esp"
//! ```

pub mod defaults;

use std::path::Path;

use serde::Deserialize;

use crate::core::layout::ToolchainSpec;
use crate::error::ConfigError;

/// On-disk config file shape
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default, rename = "toolchain")]
    toolchains: Vec<ToolchainSpec>,
}

/// Ordered registry of configured toolchain packages.
#[derive(Debug, Clone)]
pub struct Registry {
    toolchains: Vec<ToolchainSpec>,
}

impl Registry {
    /// Registry with only the built-in toolchains
    pub fn builtin() -> Self {
        Self {
            toolchains: defaults::builtin_toolchains(),
        }
    }

    /// Load the registry.
    ///
    /// Starts from the built-in defaults and merges the config file on top:
    /// a file entry for a known package replaces the built-in record, other
    /// entries are appended in file order. An explicit `config_path` must
    /// exist; without one, `toolpath.toml` in the working directory is used
    /// when present.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut registry = Self::builtin();

        let file = match config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound {
                        path: path.to_path_buf(),
                    });
                }
                Some(Self::read_config_file(path)?)
            }
            None => {
                let default = Path::new(defaults::CONFIG_FILE_NAME);
                if default.exists() {
                    Some(Self::read_config_file(default)?)
                } else {
                    None
                }
            }
        };

        if let Some(file) = file {
            registry.merge(file)?;
        }

        Ok(registry)
    }

    /// Look up a toolchain by package name
    pub fn get(&self, package: &str) -> Option<&ToolchainSpec> {
        self.toolchains.iter().find(|s| s.package == package)
    }

    /// Iterate the configured toolchains in registry order
    pub fn iter(&self) -> impl Iterator<Item = &ToolchainSpec> {
        self.toolchains.iter()
    }

    /// Number of configured toolchains
    pub fn len(&self) -> usize {
        self.toolchains.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.toolchains.is_empty()
    }

    fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn merge(&mut self, file: ConfigFile) -> Result<(), ConfigError> {
        let mut seen = std::collections::HashSet::new();
        for spec in file.toolchains {
            spec.validate()?;
            if !seen.insert(spec.package.clone()) {
                return Err(ConfigError::DuplicatePackage {
                    package: spec.package,
                });
            }

            match self.toolchains.iter_mut().find(|s| s.package == spec.package) {
                Some(existing) => *existing = spec,
                None => self.toolchains.push(spec),
            }
        }
        Ok(())
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

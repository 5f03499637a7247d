//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod list;
pub mod resolve;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Subcommand;

use crate::config::Registry;
use crate::infra::packages::PackageStore;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve toolchain bin directories and prepend them to PATH
    Resolve {
        /// Toolchain packages to resolve (all configured when omitted)
        packages: Vec<String>,

        /// Print the resulting PATH value on stdout for shell capture
        #[arg(long)]
        print_path: bool,
    },

    /// List configured toolchain packages
    List,
}

impl Commands {
    /// Execute the command
    pub fn run(self, config: Option<&Path>, packages_dir: Option<PathBuf>) -> Result<()> {
        let registry = Registry::load(config)?;

        match self {
            Self::Resolve {
                packages,
                print_path,
            } => {
                let store = PackageStore::discover(packages_dir);
                resolve::execute(&registry, &store, &packages, print_path)
            }
            Self::List => list::execute(&registry),
        }
    }
}

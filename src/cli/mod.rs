//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no resolution logic - that belongs in the [`crate::core`]
//! module.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use commands::Commands;

/// Toolpath - Toolchain PATH resolver for embedded build environments
///
/// Locate the bin directory of installed toolchain packages and prepend it
/// to the build's executable search path.
#[derive(Parser, Debug)]
#[command(name = "toolpath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to a toolchain registry config file
    #[arg(long, global = true, value_name = "FILE", env = "TOOLPATH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the toolchain packages directory
    #[arg(long, global = true, value_name = "DIR")]
    pub packages_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        if let Some(cmd) = self.command {
            cmd.run(self.config.as_deref(), self.packages_dir)
        } else {
            // No subcommand provided, show help
            use clap::CommandFactory;
            let mut cmd = Self::command();
            cmd.print_help()?;
            Ok(())
        }
    }
}

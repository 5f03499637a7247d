//! Candidate layout probing and PATH mutation
//!
//! The core of toolpath: given a toolchain package root whose internal
//! structure drifts between package versions, probe the known candidate
//! layouts in declaration order and prepend the first existing bin directory
//! to the build's search path. Every outcome is a [`Resolution`] value - the
//! resolver never fails, because a missing toolchain must not abort the
//! enclosing build.

use std::path::PathBuf;

use tracing::debug;

use crate::core::layout::ToolchainSpec;
use crate::core::search_path::SearchPath;
use crate::infra::probe::DirProber;

/// Outcome of a single toolchain resolution.
///
/// All variants are terminal and non-fatal to the caller; the distinction is
/// purely diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A candidate existed; its path was prepended to the search path
    Added {
        /// Toolchain name (e.g. "RISC-V")
        toolchain: String,
        /// The resolved bin directory
        bin_dir: PathBuf,
    },

    /// The package store has no record of the package; nothing was probed
    PackageMissing {
        /// Package-store identifier
        package: String,
        /// Install command to suggest
        remedy: String,
    },

    /// The package exists but none of the known layouts matched
    LayoutMissing {
        /// Toolchain name (e.g. "RISC-V")
        toolchain: String,
        /// Every probed candidate path, in declaration order
        probed: Vec<PathBuf>,
    },
}

impl Resolution {
    /// Whether the search path was mutated
    pub fn is_added(&self) -> bool {
        matches!(self, Resolution::Added { .. })
    }

    /// Render the build-log diagnostic for this outcome, one line per entry.
    pub fn report_lines(&self) -> Vec<String> {
        match self {
            Resolution::Added { toolchain, bin_dir } => {
                vec![format!(
                    "Added {toolchain} toolchain to PATH: {}",
                    bin_dir.display()
                )]
            }
            Resolution::PackageMissing { package, remedy } => {
                vec![format!(
                    "Warning: {package} package not found; install with `{remedy}`."
                )]
            }
            Resolution::LayoutMissing { toolchain, probed } => {
                let mut lines = vec![format!(
                    "Warning: {toolchain} toolchain bin directory missing in expected locations:"
                )];
                lines.extend(probed.iter().map(|p| format!(" - {}", p.display())));
                lines
            }
        }
    }
}

/// Resolves the bin directory of one toolchain package and prepends it to
/// the injected search path.
#[derive(Debug)]
pub struct ToolchainPathResolver<'a, P: DirProber + ?Sized> {
    spec: &'a ToolchainSpec,
    package_root: Option<PathBuf>,
    prober: &'a P,
}

impl<'a, P: DirProber + ?Sized> ToolchainPathResolver<'a, P> {
    /// Create a resolver for one toolchain package.
    ///
    /// `package_root` is `None` when the package store has no record of the
    /// package; in that case no filesystem probe occurs.
    pub fn new(spec: &'a ToolchainSpec, package_root: Option<PathBuf>, prober: &'a P) -> Self {
        Self {
            spec,
            package_root,
            prober,
        }
    }

    /// Probe the candidate layouts in declaration order.
    ///
    /// On the first existing candidate the bin directory is prepended to
    /// `search_path` and probing stops. On every other outcome the search
    /// path is left untouched. Installation state does not change within a
    /// build invocation, so this is a one-shot check with no retries.
    pub fn resolve(&self, search_path: &mut SearchPath) -> Resolution {
        let Some(root) = &self.package_root else {
            debug!(
                package = %self.spec.package,
                "package not installed, skipping toolchain PATH setup"
            );
            return Resolution::PackageMissing {
                package: self.spec.package.clone(),
                remedy: self.spec.remedy.clone(),
            };
        };

        let mut probed = Vec::with_capacity(self.spec.candidates.len());
        for candidate in &self.spec.candidates {
            let bin_dir = root.join(candidate);
            debug!(path = %bin_dir.display(), "probing candidate layout");

            if self.prober.is_dir(&bin_dir) {
                search_path.prepend(bin_dir.clone());
                return Resolution::Added {
                    toolchain: self.spec.name.clone(),
                    bin_dir,
                };
            }
            probed.push(bin_dir);
        }

        Resolution::LayoutMissing {
            toolchain: self.spec.name.clone(),
            probed,
        }
    }
}

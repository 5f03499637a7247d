//! Toolchain layout configuration records
//!
//! A [`ToolchainSpec`] describes one toolchain package: which package-store
//! entry it lives in, the human-readable toolchain name used in diagnostics,
//! the ordered candidate layouts its bin directory has shipped under across
//! package versions, and the install command suggested when the package is
//! missing. Candidate lists are caller-owned configuration data so that new
//! package layouts can be added without touching resolution logic.

use serde::Deserialize;
use std::path::Path;

use crate::error::ConfigError;

/// Configuration record for one toolchain package.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ToolchainSpec {
    /// Package-store identifier (e.g. "toolchain-riscv32-esp")
    pub package: String,

    /// Toolchain name used in diagnostics (e.g. "RISC-V")
    pub name: String,

    /// Candidate bin-directory layouts relative to the package root,
    /// probed in declaration order. The first existing candidate wins.
    pub candidates: Vec<String>,

    /// Install command named in the package-absent diagnostic
    pub remedy: String,
}

impl ToolchainSpec {
    /// Create a toolchain spec from literal parts
    pub fn new(
        package: impl Into<String>,
        name: impl Into<String>,
        candidates: &[&str],
        remedy: impl Into<String>,
    ) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
            candidates: candidates.iter().map(ToString::to_string).collect(),
            remedy: remedy.into(),
        }
    }

    /// Validate the record.
    ///
    /// The candidate list must be non-empty, and every candidate must be a
    /// relative path fragment (it is joined onto the package root).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.candidates.is_empty() {
            return Err(ConfigError::EmptyCandidates {
                package: self.package.clone(),
            });
        }

        for candidate in &self.candidates {
            if Path::new(candidate).is_absolute() {
                return Err(ConfigError::AbsoluteCandidate {
                    package: self.package.clone(),
                    candidate: candidate.clone(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn riscv_spec() -> ToolchainSpec {
        ToolchainSpec::new(
            "toolchain-riscv32-esp",
            "RISC-V",
            &["bin", "riscv32-esp-elf/bin"],
            "pio pkg install -g toolchain-riscv32-esp",
        )
    }

    #[test]
    fn test_valid_spec_passes_validation() {
        assert!(riscv_spec().validate().is_ok());
    }

    #[test]
    fn test_empty_candidates_rejected() {
        let mut spec = riscv_spec();
        spec.candidates.clear();

        assert!(matches!(
            spec.validate(),
            Err(ConfigError::EmptyCandidates { .. })
        ));
    }

    #[test]
    fn test_absolute_candidate_rejected() {
        let mut spec = riscv_spec();
        spec.candidates.push("/usr/bin".to_string());

        let err = spec.validate().unwrap_err();
        assert!(matches!(err, ConfigError::AbsoluteCandidate { .. }));
        assert!(err.to_string().contains("/usr/bin"));
    }

    #[test]
    fn test_deserializes_from_toml() {
        let spec: ToolchainSpec = toml::from_str(
            r#"
            package = "toolchain-riscv32-esp"
            name = "RISC-V"
            candidates = ["bin", "riscv32-esp-elf/bin"]
            remedy = "pio pkg install -g toolchain-riscv32-esp"
            "#,
        )
        .unwrap();

        assert_eq!(spec, riscv_spec());
    }
}

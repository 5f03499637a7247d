//! CLI command for `toolpath resolve`
//!
//! Resolves the bin directories of the requested toolchain packages against
//! the live process PATH and reports the outcome of each. Resolution
//! failures are warnings, not errors: the enclosing build decides later
//! whether the toolchain was actually needed.

use anyhow::Result;

use crate::cli::output::{is_json, is_quiet};
use crate::config::Registry;
use crate::core::layout::ToolchainSpec;
use crate::core::resolver::{Resolution, ToolchainPathResolver};
use crate::core::search_path::SearchPath;
use crate::error::{ConfigError, ToolpathError};
use crate::infra::packages::PackageStore;
use crate::infra::probe::SystemProber;

/// Execute the resolve command
pub fn execute(
    registry: &Registry,
    store: &PackageStore,
    packages: &[String],
    print_path: bool,
) -> Result<()> {
    let specs: Vec<&ToolchainSpec> = if packages.is_empty() {
        registry.iter().collect()
    } else {
        packages
            .iter()
            .map(|name| {
                registry.get(name).ok_or_else(|| ConfigError::UnknownPackage {
                    package: name.clone(),
                })
            })
            .collect::<Result<_, _>>()?
    };

    let prober = SystemProber;
    let mut search_path = SearchPath::from_current_env();
    let mut resolutions = Vec::with_capacity(specs.len());

    for spec in specs {
        let package_root = store.package_dir(&spec.package);
        let resolution =
            ToolchainPathResolver::new(spec, package_root, &prober).resolve(&mut search_path);
        resolutions.push((spec.package.clone(), resolution));
    }

    let path_value = search_path
        .to_env_value()
        .map_err(|source| ToolpathError::JoinPaths { source })?;

    if is_json() {
        let json_result = serde_json::json!({
            "resolutions": resolutions.iter().map(|(package, r)| match r {
                Resolution::Added { toolchain, bin_dir } => serde_json::json!({
                    "package": package,
                    "toolchain": toolchain,
                    "status": "added",
                    "bin_dir": bin_dir.display().to_string(),
                }),
                Resolution::PackageMissing { remedy, .. } => serde_json::json!({
                    "package": package,
                    "status": "package-missing",
                    "remedy": remedy,
                }),
                Resolution::LayoutMissing { toolchain, probed } => serde_json::json!({
                    "package": package,
                    "toolchain": toolchain,
                    "status": "layout-missing",
                    "probed": probed.iter().map(|p| p.display().to_string()).collect::<Vec<_>>(),
                }),
            }).collect::<Vec<_>>(),
            "path": path_value.to_string_lossy(),
        });
        println!("{}", serde_json::to_string_pretty(&json_result).unwrap_or_default());
        return Ok(());
    }

    // Diagnostics go to stderr under --print-path so stdout stays capturable
    if !is_quiet() {
        for (_, resolution) in &resolutions {
            for line in resolution.report_lines() {
                if print_path {
                    eprintln!("{line}");
                } else {
                    println!("{line}");
                }
            }
        }
    }

    if print_path {
        println!("{}", path_value.to_string_lossy());
    }

    Ok(())
}

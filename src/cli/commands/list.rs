//! CLI command for `toolpath list`
//!
//! Shows the configured toolchain registry: package, toolchain name,
//! candidate layouts in probe order, and the install remedy.

use anyhow::Result;

use crate::cli::output::{is_json, is_quiet, print_detail, print_info};
use crate::config::Registry;

/// Execute the list command
pub fn execute(registry: &Registry) -> Result<()> {
    if is_json() {
        let json_result = serde_json::json!({
            "toolchains": registry.iter().map(|spec| serde_json::json!({
                "package": spec.package,
                "name": spec.name,
                "candidates": spec.candidates,
                "remedy": spec.remedy,
            })).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&json_result).unwrap_or_default());
        return Ok(());
    }

    if is_quiet() {
        for spec in registry.iter() {
            println!("{}", spec.package);
        }
        return Ok(());
    }

    print_info(&format!("Configured toolchain packages ({}):", registry.len()));
    for spec in registry.iter() {
        println!();
        println!("  {} ({})", spec.package, spec.name);
        print_detail(&format!("candidates: {}", spec.candidates.join(", ")));
        print_detail(&format!("install: {}", spec.remedy));
    }

    Ok(())
}

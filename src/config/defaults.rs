//! Default configuration values

use crate::core::layout::ToolchainSpec;

/// Config file looked up in the working directory when `--config` is not given
pub const CONFIG_FILE_NAME: &str = "toolpath.toml";

/// ESP32-C3/C6 RISC-V toolchain package
pub const RISCV32_ESP_PACKAGE: &str = "toolchain-riscv32-esp";

/// ESP32/ESP32-S series Xtensa toolchain package
pub const XTENSA_ESP32_PACKAGE: &str = "toolchain-xtensa-esp32";

/// Built-in toolchain registry.
///
/// Covers the layout drift observed in the ESP toolchain packages: newer
/// package versions ship the binaries under a `<triple>/bin` subdirectory
/// while older ones used a top-level `bin`. The legacy layout is listed
/// first so it keeps winning on installs that have both.
pub fn builtin_toolchains() -> Vec<ToolchainSpec> {
    vec![
        ToolchainSpec::new(
            RISCV32_ESP_PACKAGE,
            "RISC-V",
            &["bin", "riscv32-esp-elf/bin"],
            "pio pkg install -g toolchain-riscv32-esp",
        ),
        ToolchainSpec::new(
            XTENSA_ESP32_PACKAGE,
            "Xtensa",
            &["bin", "xtensa-esp32-elf/bin"],
            "pio pkg install -g toolchain-xtensa-esp32",
        ),
    ]
}

//! Target platforms the packaging tool can build for.

use serde::Deserialize;
use std::fmt;

/// An OS + CPU architecture target.
///
/// Variants are declared in the lexical order of their snapshot ids so the
/// derived `Ord` keeps `BTreeMap<Platform, _>` iteration deterministic and
/// matching the order the ids would sort in as plain strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub enum Platform {
    #[serde(rename = "linux-arm64")]
    LinuxArm64,
    #[serde(rename = "linux-x64")]
    LinuxX64,
    #[serde(rename = "macos-arm64")]
    MacosArm64,
    #[serde(rename = "macos-x64")]
    MacosX64,
    #[serde(rename = "windows-arm64")]
    WindowsArm64,
    #[serde(rename = "windows-x64")]
    WindowsX64,
}

impl Platform {
    /// All supported platforms, in id order.
    pub const ALL: [Platform; 6] = [
        Platform::LinuxArm64,
        Platform::LinuxX64,
        Platform::MacosArm64,
        Platform::MacosX64,
        Platform::WindowsArm64,
        Platform::WindowsX64,
    ];

    /// The identifier used in project snapshots (e.g. `linux-x64`).
    pub fn id(self) -> &'static str {
        match self {
            Platform::LinuxArm64 => "linux-arm64",
            Platform::LinuxX64 => "linux-x64",
            Platform::MacosArm64 => "macos-arm64",
            Platform::MacosX64 => "macos-x64",
            Platform::WindowsArm64 => "windows-arm64",
            Platform::WindowsX64 => "windows-x64",
        }
    }

    /// The key stem used in generated config (e.g. `app.linux.amd64.inputs`).
    pub fn config_key(self) -> &'static str {
        match self {
            Platform::LinuxArm64 => "linux.aarch64",
            Platform::LinuxX64 => "linux.amd64",
            Platform::MacosArm64 => "mac.aarch64",
            Platform::MacosX64 => "mac.amd64",
            Platform::WindowsArm64 => "windows.aarch64",
            Platform::WindowsX64 => "windows.amd64",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

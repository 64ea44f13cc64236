//! JVM toolchain vendor tokens and their packaging-tool equivalents.

/// A JVM distribution vendor as reported by the build's toolchain spec.
///
/// The known variants cover the tokens Gradle's `JvmVendorSpec` produces.
/// Anything else lands in `Other` and is handled as a non-fatal condition
/// during generation: the config stays usable, the user just has to supply
/// the JDK themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JvmVendor {
    Adoptium,
    Amazon,
    Azul,
    GraalVm,
    Microsoft,
    Oracle,
    /// The toolchain accepts any vendor.
    Any,
    /// A vendor token with no known mapping.
    Other(String),
}

impl JvmVendor {
    /// Parses a toolchain vendor token (e.g. `"AZUL"`, `"any"`).
    pub fn from_token(token: &str) -> Self {
        match token {
            "ADOPTIUM" => Self::Adoptium,
            "AMAZON" => Self::Amazon,
            "AZUL" => Self::Azul,
            "GRAAL_VM" => Self::GraalVm,
            "MICROSOFT" => Self::Microsoft,
            "ORACLE" => Self::Oracle,
            "any" => Self::Any,
            other => Self::Other(other.to_string()),
        }
    }

    /// The JDK name used in stdlib include paths, or `None` when unmapped.
    ///
    /// Oracle maps to plain OpenJDK since the packaging tool cannot
    /// redistribute the commercial Oracle builds, and an "any vendor"
    /// toolchain gets OpenJDK as the neutral default.
    pub fn stdlib_jdk(&self) -> Option<&'static str> {
        match self {
            Self::Adoptium => Some("eclipse"),
            Self::Amazon => Some("amazon"),
            Self::Azul => Some("azul"),
            Self::GraalVm => Some("graalvm"),
            Self::Microsoft => Some("microsoft"),
            Self::Oracle | Self::Any => Some("openjdk"),
            Self::Other(_) => None,
        }
    }

    /// The original token, for diagnostics.
    pub fn token(&self) -> &str {
        match self {
            Self::Adoptium => "ADOPTIUM",
            Self::Amazon => "AMAZON",
            Self::Azul => "AZUL",
            Self::GraalVm => "GRAAL_VM",
            Self::Microsoft => "MICROSOFT",
            Self::Oracle => "ORACLE",
            Self::Any => "any",
            Self::Other(token) => token,
        }
    }
}

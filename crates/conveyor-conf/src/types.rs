//! The project snapshot handed over by the build-system integration.
//!
//! The integration layer (a Gradle plugin in practice) resolves dependency
//! configurations, probes the optional plugin extensions, and serializes
//! everything into one JSON document. Nothing here is looked up dynamically;
//! absent plugins are plain `None`.

use crate::platform::Platform;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};

/// Core project coordinates and JVM settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildMetadata {
    pub project_name: String,
    pub version: String,
    pub group: String,
    /// The build output directory, useful for importing built files.
    pub build_directory: String,
    /// Root directory of the build tree. JVM args pointing into it are
    /// build-local and get filtered out of the generated config.
    pub root_project_dir: String,
    /// Entry point from the generic application plugin, if applied.
    #[serde(default)]
    pub main_class: Option<String>,
    #[serde(default)]
    pub jvm_args: Vec<String>,
    /// Major Java version requested by the toolchain spec.
    #[serde(default)]
    pub jvm_language_version: Option<u32>,
    /// Toolchain vendor token (e.g. `"AZUL"`). Absent means unconfigured.
    #[serde(default)]
    pub jvm_vendor: Option<String>,
    /// The built application jar.
    pub app_jar: String,
}

/// Settings read from the OpenJFX plugin.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JavaFxSettings {
    pub version: String,
    #[serde(default)]
    pub modules: Vec<String>,
}

/// Settings read from the Jetpack Compose Desktop plugin.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposeSettings {
    #[serde(default)]
    pub main_class: Option<String>,
    #[serde(default)]
    pub jvm_args: Vec<String>,
    #[serde(default)]
    pub package_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub vendor: Option<String>,
    /// Root of the per-platform app resource directories.
    #[serde(default)]
    pub app_resources_root_dir: Option<String>,
}

/// Resolved dependency file sets, as absolute path strings.
///
/// Paths stay strings end to end: the ordering contract for generated
/// output is the lexical order of the path text, which `BTreeSet<String>`
/// gives directly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedClasspaths {
    /// Files from resolving the platform-independent configuration.
    #[serde(default)]
    pub common: BTreeSet<String>,
    /// Per-platform resolutions. Each set carries everything that platform
    /// needs, common files included or not; the partitioner assumes neither.
    #[serde(default)]
    pub per_platform: BTreeMap<Platform, BTreeSet<String>>,
}

/// Everything the generator needs, assembled once by the integration layer.
#[derive(Debug, Clone)]
pub struct ProjectSnapshot {
    pub build: BuildMetadata,
    pub javafx: Option<JavaFxSettings>,
    pub compose: Option<ComposeSettings>,
    pub classpaths: ResolvedClasspaths,
}

//! Loads a project snapshot from its JSON document form.
//!
//! The `javafx` and `compose` sections deserialize separately from the rest
//! of the document so a malformed section surfaces as the matching import
//! error with its diagnostic hint, instead of a generic parse failure. The
//! usual cause is an integration layer built against an incompatible plugin
//! version writing a shape this crate doesn't understand.

use crate::error::{ConfigError, Result};
use crate::types::{BuildMetadata, ComposeSettings, JavaFxSettings, ProjectSnapshot, ResolvedClasspaths};
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSnapshot {
    build: BuildMetadata,
    #[serde(default)]
    javafx: Option<Value>,
    #[serde(default)]
    compose: Option<Value>,
    #[serde(default)]
    classpaths: ResolvedClasspaths,
}

/// Parses a snapshot document.
///
/// # Errors
///
/// [`ConfigError::Snapshot`] when the document or the build section is
/// malformed; [`ConfigError::JavaFxImport`] / [`ConfigError::ComposeImport`]
/// when the matching plugin section is present but unreadable.
pub fn from_json(text: &str) -> Result<ProjectSnapshot> {
    let raw: RawSnapshot = serde_json::from_str(text)?;

    let javafx: Option<JavaFxSettings> = raw
        .javafx
        .map(|value| {
            serde_json::from_value(value).map_err(|source| ConfigError::JavaFxImport { source })
        })
        .transpose()?;

    let compose: Option<ComposeSettings> = raw
        .compose
        .map(|value| {
            serde_json::from_value(value).map_err(|source| ConfigError::ComposeImport { source })
        })
        .transpose()?;

    Ok(ProjectSnapshot {
        build: raw.build,
        javafx,
        compose,
        classpaths: raw.classpaths,
    })
}

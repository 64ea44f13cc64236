//! Splits resolved classpaths into a true common set and per-platform deltas.

use crate::platform::Platform;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Result of partitioning resolved classpaths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionedClasspaths {
    /// Files every platform needs.
    pub common: BTreeSet<String>,
    /// Files only one platform needs. Platforms whose delta would be empty
    /// are absent entirely.
    pub deltas: BTreeMap<Platform, BTreeSet<String>>,
}

/// Computes the minimal common set and per-platform deltas.
///
/// When any per-platform resolutions exist, the common set is the
/// intersection of all of them and the `common` input is ignored: the
/// platform-specific resolutions may have settled on different transitive
/// versions than a naive common-only resolution would, so the intersection
/// of what was actually resolved is the authoritative answer. With no
/// per-platform resolutions the common input passes through unchanged.
///
/// Pure set algebra; cannot fail.
pub fn partition(
    common: &BTreeSet<String>,
    per_platform: &BTreeMap<Platform, BTreeSet<String>>,
) -> PartitionedClasspaths {
    if per_platform.is_empty() {
        return PartitionedClasspaths {
            common: common.clone(),
            deltas: BTreeMap::new(),
        };
    }

    let first = per_platform.values().next().cloned().unwrap_or_default();
    let common: BTreeSet<String> = per_platform
        .values()
        .skip(1)
        .fold(first, |acc, set| acc.intersection(set).cloned().collect());

    let deltas: BTreeMap<Platform, BTreeSet<String>> = per_platform
        .iter()
        .filter_map(|(platform, files)| {
            let delta: BTreeSet<String> = files.difference(&common).cloned().collect();
            (!delta.is_empty()).then_some((*platform, delta))
        })
        .collect();

    debug!(
        common = common.len(),
        platforms = deltas.len(),
        "partitioned resolved classpaths"
    );

    PartitionedClasspaths { common, deltas }
}

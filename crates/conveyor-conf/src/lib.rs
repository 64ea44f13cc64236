//! Packaging-config generation for JVM desktop applications.
//!
//! Takes an immutable snapshot of a build's typed metadata and resolved
//! dependency classpaths, partitions the classpaths into a common set plus
//! per-platform deltas, and serializes everything into the HOCON-like
//! config document a downstream packaging tool consumes.
//!
//! Two pure stages: [`partition`] (set algebra over resolved file sets)
//! and [`generate`] (ordered text emission). The host build system is an
//! external collaborator; it hands over a [`ProjectSnapshot`] and nothing
//! here reaches back into it.

pub mod error;
pub mod generate;
pub mod hocon;
pub mod partition;
pub mod platform;
pub mod snapshot;
pub mod types;
pub mod vendor;

pub use error::{ConfigError, Result};
pub use generate::generate;
pub use partition::{PartitionedClasspaths, partition};
pub use platform::Platform;
pub use types::{
    BuildMetadata, ComposeSettings, JavaFxSettings, ProjectSnapshot, ResolvedClasspaths,
};
pub use vendor::JvmVendor;

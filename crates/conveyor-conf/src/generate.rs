//! Serializes a project snapshot into the packaging config document.
//!
//! Emission order is fixed: project coordinates, JavaFX, the application
//! plugin's entry point and toolchain, Compose Desktop (which overrides the
//! generic entry point when both are configured), then the partitioned
//! dependency inputs. Later keys may reference earlier ones, so the order
//! is part of the output contract.

use crate::error::{ConfigError, Result};
use crate::hocon::HoconWriter;
use crate::partition::{PartitionedClasspaths, partition};
use crate::types::{BuildMetadata, ComposeSettings, ProjectSnapshot};
use crate::vendor::JvmVendor;
use std::path::Path;
use tracing::{debug, warn};

/// Compose app resource subdirectories and the input arrays they feed.
/// Checked in this order; a missing directory is simply skipped.
const COMPOSE_RESOURCE_DIRS: [(&str, &str); 10] = [
    ("common", "inputs"),
    ("macos", "mac.inputs"),
    ("windows", "windows.inputs"),
    ("linux", "linux.inputs"),
    ("macos-x64", "mac.amd64.inputs"),
    ("macos-arm64", "mac.aarch64.inputs"),
    ("windows-x64", "windows.amd64.inputs"),
    ("windows-arm64", "windows.aarch64.inputs"),
    ("linux-x64", "linux.amd64.inputs"),
    ("linux-arm64", "linux.aarch64.inputs"),
];

/// Generates the config document for a snapshot.
///
/// # Errors
///
/// Fails with [`ConfigError::Validation`] when the project version is blank
/// or the `unspecified` placeholder, or when the group is blank. Everything
/// else degrades gracefully: an unknown toolchain vendor becomes comments
/// plus a warning token in the output, not an error.
pub fn generate(snapshot: &ProjectSnapshot) -> Result<String> {
    let build = &snapshot.build;
    let mut w = HoconWriter::new();

    w.comment("Generated by conveyor-conf.");
    w.blank();
    w.comment("Gradle project data. The build directory is useful for importing built files.");
    w.set("gradle.build-dir", &build.build_directory);
    w.set("gradle.project-name", &build.project_name);
    w.set("app.fsname", &build.project_name.to_lowercase());

    let version = build.version.trim();
    if version.is_empty() || version == "unspecified" {
        return Err(ConfigError::validation(
            "You must set the 'version' property of the project, \
             because all package formats require one.",
        ));
    }
    w.set("app.version", version);

    let group = build.group.trim();
    if group.is_empty() {
        return Err(ConfigError::validation(
            "You must set the 'group' property of the project, \
             because some package formats require a reverse DNS name.",
        ));
    }
    w.set_raw("app.rdns-name", &format!("{group}.${{app.fsname}}"));

    emit_javafx(&mut w, snapshot);
    emit_application(&mut w, build);
    emit_toolchain(&mut w, build);
    if let Some(compose) = &snapshot.compose {
        emit_compose(&mut w, compose, &build.root_project_dir);
    }
    emit_inputs(&mut w, snapshot);

    debug!(project = %build.project_name, "generated packaging config");
    Ok(w.into_string())
}

fn emit_javafx(w: &mut HoconWriter, snapshot: &ProjectSnapshot) {
    let Some(javafx) = &snapshot.javafx else {
        return;
    };
    w.blank();
    w.comment("Config from the OpenJFX plugin.");
    w.include_required("/stdlib/jvm/javafx/from-jmods.conf");
    w.set("javafx.version", &javafx.version);
    // Append rather than overwrite: modules from other sources must survive.
    w.append_array("app.jvm.modules", &javafx.modules);
}

fn emit_application(w: &mut HoconWriter, build: &BuildMetadata) {
    let Some(main_class) = &build.main_class else {
        return;
    };
    w.blank();
    w.comment("Config from the application plugin.");
    emit_gui_main_class(w, main_class);
    emit_jvm_options(w, &build.jvm_args, &build.root_project_dir);
    w.blank();
}

/// Emits the JDK import, or a usable degraded config for unknown vendors.
fn emit_toolchain(w: &mut HoconWriter, build: &BuildMetadata) {
    let Some(jvm_version) = build.jvm_language_version else {
        w.comment("Java toolchain doesn't specify a version. Not importing a JDK.");
        return;
    };

    let vendor = JvmVendor::from_token(build.jvm_vendor.as_deref().unwrap_or("ADOPTIUM"));
    match vendor.stdlib_jdk() {
        Some(jdk) => {
            w.comment("Config from the Java plugin.");
            w.include_required(&format!("/stdlib/jdk/{jvm_version}/{jdk}.conf"));
        }
        None => {
            let token = vendor.token();
            warn!(vendor = token, "unknown JVM toolchain vendor, not importing a JDK");
            w.comment(&format!(
                "Gradle build requests a JVM from {token} but this vendor isn't known to Conveyor at this time."
            ));
            w.comment(
                "You can still use it, you'll just have to add JDK inputs that define where to download or find it.",
            );
            w.comment_break();
            w.comment(
                "Please see https://conveyor.hydraulic.dev/latest/configs/jvm/#importing-a-jvmjdk for assistance.",
            );
            w.append("internal.conveyor.warnings", &format!("unknown-jdk-vendor:{token}"));
        }
    }
}

fn emit_compose(w: &mut HoconWriter, compose: &ComposeSettings, root_project_dir: &str) {
    w.blank();
    w.comment("Config from the Jetpack Compose Desktop plugin.");
    if let Some(main_class) = &compose.main_class {
        emit_gui_main_class(w, main_class);
    }
    emit_jvm_options(w, &compose.jvm_args, root_project_dir);

    if let Some(package_name) = &compose.package_name {
        w.set("app.fsname", package_name);
    }
    if let Some(description) = &compose.description {
        w.set("app.description", description);
    }
    if let Some(vendor) = &compose.vendor {
        w.set("app.vendor", vendor);
    }

    if let Some(resources_root) = &compose.app_resources_root_dir {
        // The packaging tool substitutes the extracted resources directory
        // for the "&&" placeholder at install time.
        w.set(
            "app.jvm.system-properties.\"compose.application.resources.dir\"",
            "&&",
        );
        for (subdir, key) in COMPOSE_RESOURCE_DIRS {
            let dir = Path::new(resources_root).join(subdir);
            if dir.exists() {
                w.append(&format!("app.{key}"), &dir.display().to_string());
            }
        }
    }
}

fn emit_gui_main_class(w: &mut HoconWriter, main_class: &str) {
    w.set("app.jvm.gui.main-class", main_class);
    w.set(
        "app.linux.desktop-file.\"Desktop Entry\".StartupWMClass",
        &main_class.replace('.', "-"),
    );
}

/// Emits JVM options, dropping arguments that point into the build tree.
/// Such arguments carry build-local absolute paths that would not resolve
/// on an end-user machine.
fn emit_jvm_options(w: &mut HoconWriter, jvm_args: &[String], root_project_dir: &str) {
    let portable: Vec<&String> = jvm_args
        .iter()
        .filter(|arg| !arg.contains(root_project_dir))
        .collect();
    if portable.len() < jvm_args.len() {
        debug!(
            dropped = jvm_args.len() - portable.len(),
            "filtered JVM args pointing into the build tree"
        );
    }
    if !portable.is_empty() {
        w.append_array("app.jvm.options", portable);
    }
}

fn emit_inputs(w: &mut HoconWriter, snapshot: &ProjectSnapshot) {
    let PartitionedClasspaths { common, deltas } = partition(
        &snapshot.classpaths.common,
        &snapshot.classpaths.per_platform,
    );

    w.blank();
    w.comment("Inputs from dependency configurations and the JAR task.");
    w.append("app.inputs", &snapshot.build.app_jar);

    if !common.is_empty() {
        w.append_array_block("app.inputs", &common);
    }

    for (platform, files) in &deltas {
        w.blank();
        let key = format!("app.{}.inputs", platform.config_key());
        w.append_array_block(&key, files);
    }
}

//! End-to-end tests: snapshot JSON in, full config document out.

use conveyor_conf::{generate, snapshot};

#[test]
fn test_application_snapshot_document() {
    let snap = snapshot::from_json(include_str!("fixtures/app-snapshot.json")).unwrap();
    let config = generate(&snap).unwrap();

    let expected = "\
// Generated by conveyor-conf.

// Gradle project data. The build directory is useful for importing built files.
gradle.build-dir = /home/u/proj/build
gradle.project-name = MyApp
app.fsname = myapp
app.version = 1.0
app.rdns-name = dev.x.${app.fsname}

// Config from the application plugin.
app.jvm.gui.main-class = dev.x.Main
app.linux.desktop-file.\"Desktop Entry\".StartupWMClass = dev-x-Main
app.jvm.options = ${app.jvm.options} [ -Xmx512m ]

// Java toolchain doesn't specify a version. Not importing a JDK.

// Inputs from dependency configurations and the JAR task.
app.inputs += /home/u/proj/build/libs/myapp-1.0.jar
app.inputs = ${app.inputs} [
    /deps/A.jar
]
";
    assert_eq!(config, expected);
}

#[test]
fn test_multiplatform_snapshot_document() {
    let snap = snapshot::from_json(include_str!("fixtures/multiplatform-snapshot.json")).unwrap();
    let config = generate(&snap).unwrap();

    let expected = "\
// Generated by conveyor-conf.

// Gradle project data. The build directory is useful for importing built files.
gradle.build-dir = /work/crossbow/build
gradle.project-name = Crossbow
app.fsname = crossbow
app.version = 2.4.1
app.rdns-name = io.crossbow.${app.fsname}

// Config from the OpenJFX plugin.
include required(\"/stdlib/jvm/javafx/from-jmods.conf\")
javafx.version = 17.0.2
app.jvm.modules = ${app.jvm.modules} [ javafx.controls, javafx.fxml ]
// Config from the Java plugin.
include required(\"/stdlib/jdk/17/azul.conf\")

// Inputs from dependency configurations and the JAR task.
app.inputs += /work/crossbow/build/libs/crossbow-2.4.1.jar
app.inputs = ${app.inputs} [
    /deps/core.jar
]

app.linux.amd64.inputs = ${app.linux.amd64.inputs} [
    /deps/skiko-linux-x64.jar
]

app.windows.amd64.inputs = ${app.windows.amd64.inputs} [
    /deps/skiko-windows-x64.jar
]
";
    assert_eq!(config, expected);
}

#[test]
fn test_generation_is_idempotent() {
    let snap = snapshot::from_json(include_str!("fixtures/multiplatform-snapshot.json")).unwrap();
    assert_eq!(generate(&snap).unwrap(), generate(&snap).unwrap());
}

#[test]
fn test_platform_matching_common_set_is_suppressed() {
    let snap = snapshot::from_json(include_str!("fixtures/multiplatform-snapshot.json")).unwrap();
    let config = generate(&snap).unwrap();

    // macos-arm64 resolved to exactly the common set, so no block for it.
    assert!(!config.contains("app.mac.aarch64.inputs"));
    // The stale common-only resolution is superseded by the intersection.
    assert!(!config.contains("only-from-common-resolution.jar"));
}

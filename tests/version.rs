//! Integration test: Verify binary prints correct version

use std::process::Command;

#[test]
fn binary_prints_version() {
    // EXPECT: Binary prints name and version from Cargo.toml, without starting the TUI
    let output = Command::new(env!("CARGO_BIN_EXE_sift"))
        .arg("--version")
        .output()
        .expect("Failed to execute binary");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(
        stdout.contains(concat!("sift ", env!("CARGO_PKG_VERSION"))),
        "Expected output to contain the package version, but got: {}",
        stdout
    );
}

#[test]
fn unknown_flag_is_rejected() {
    let output = Command::new(env!("CARGO_BIN_EXE_sift"))
        .arg("--definitely-not-a-flag")
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
}

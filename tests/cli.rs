// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use std::process::Command;

const BIN: &str = env!("CARGO_BIN_EXE_stanza-fields");

#[test]
fn failure_is_reported_once() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(BIN)
        .arg("check")
        .arg("--schema")
        .arg(dir.path().join("missing.capnp"))
        .arg("--dispatch")
        .arg(dir.path().join("fields.rs"))
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.matches("failed to read schema").count(), 1, "{stderr}");
    assert!(stderr.contains("check failed: "), "{stderr}");
}

#[test]
fn generate_writes_both_files() {
    let dir = tempfile::tempdir().unwrap();
    let schema = dir.path().join("apt.capnp");
    let dispatch = dir.path().join("fields.rs");
    std::fs::write(&schema, "@0xe5cd6c3f1a6a8b6b;\n\n## generated by gen.py\n").unwrap();

    let status = Command::new(BIN)
        .arg("generate")
        .arg("--schema")
        .arg(&schema)
        .arg("--dispatch")
        .arg(&dispatch)
        .status()
        .unwrap();
    assert!(status.success());

    let written = std::fs::read_to_string(&schema).unwrap();
    assert!(written.contains("struct UnparsedSource {"));
    assert!(std::fs::read_to_string(&dispatch).unwrap().contains("pub fn set_field_binary"));

    let status = Command::new(BIN)
        .arg("check")
        .arg("--schema")
        .arg(&schema)
        .arg("--dispatch")
        .arg(&dispatch)
        .status()
        .unwrap();
    assert!(status.success());
}

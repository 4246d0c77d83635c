// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use std::fs;

use stanza_fields_core::StanzaKind;
use stanza_fields_gen::{GenerateError, GenerateOptions, Generator, schema::DEFAULT_MARKER};

fn scratch() -> (tempfile::TempDir, GenerateOptions) {
    let dir = tempfile::tempdir().unwrap();
    let options = GenerateOptions {
        schema_path: dir.path().join("apt.capnp"),
        dispatch_path: dir.path().join("fields.rs"),
        ..GenerateOptions::default()
    };
    fs::write(
        &options.schema_path,
        format!("@0xdbb9ad1f14bf0b36;\n{DEFAULT_MARKER}\n")
    )
    .unwrap();
    (dir, options)
}

#[test]
fn builtin_source_block_starts_in_known_order() {
    let (_dir, options) = scratch();
    Generator::new(options.clone()).run().unwrap();

    let schema = fs::read_to_string(&options.schema_path).unwrap();
    let block: Vec<_> = schema
        .lines()
        .skip_while(|l| *l != "struct UnparsedSource {")
        .skip(1)
        .take(4)
        .map(|l| l.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect();
    assert_eq!(block, [
        "directory @0 :Text;",
        "homepage @1 :Text;",
        "standardsVersion @2 :Text;",
        "section @3 :Text;"
    ]);
}

#[test]
fn builtin_binary_dispatch_routes_alias() {
    let (_dir, options) = scratch();
    Generator::new(options.clone()).run().unwrap();

    let dispatch = fs::read_to_string(&options.dispatch_path).unwrap();
    assert!(dispatch.contains(
        "        \"Package_Revision\" => blank_to_null(val, |x| \
         builder.set_package_revision(x))?,\n"
    ));
    assert!(dispatch.contains("pub fn set_field_binary("));
    assert!(!dispatch.contains("\"Vcs-Git\""));
}

#[test]
fn planning_failure_leaves_files_untouched() {
    let (_dir, mut options) = scratch();
    options.dispatch.helper_path = "crate::blank_to_null as".to_string();
    let before = fs::read_to_string(&options.schema_path).unwrap();

    let err = Generator::new(options.clone()).run().unwrap_err();

    assert!(matches!(err, GenerateError::InvalidDispatch { .. }));
    assert_eq!(fs::read_to_string(&options.schema_path).unwrap(), before);
    assert!(!options.dispatch_path.exists());
}

#[test]
fn options_from_config_file_drive_a_run() {
    let (dir, _) = scratch();
    let config = dir.path().join("stanza-fields.toml");
    fs::write(&config, format!(
        "schema_path = {:?}\ndispatch_path = {:?}\n[dispatch]\nrecord_module = \"apt_capnp\"\n",
        dir.path().join("apt.capnp"),
        dir.path().join("fields.rs")
    ))
    .unwrap();

    let options = GenerateOptions::load(&config).unwrap();
    let report = Generator::new(options).run().unwrap();

    let dispatch = fs::read_to_string(&report.dispatch_path).unwrap();
    assert!(dispatch.contains("use apt_capnp::unparsed_source;\n"));
    let kinds: Vec<_> = report.kinds.iter().map(|(kind, ..)| *kind).collect();
    assert_eq!(kinds, StanzaKind::ALL);
}

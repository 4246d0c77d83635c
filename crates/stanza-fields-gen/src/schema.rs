// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Schema block generation.
//!
//! Renders each derived list as a Cap'n Proto struct of text slots and splices
//! the result into an existing schema document below a marker line.
//!
//! # Slot numbering
//!
//! A field's slot number is its position in the derived list, which follows
//! the catalog's known order. Appending a field to the end of the known list
//! keeps every existing number. Inserting or removing a field anywhere else
//! renumbers every later slot and breaks compatibility with data written
//! against the previous schema.
//!
//! # Output
//!
//! ```text
//! ## generated by gen.py
//!
//! struct UnparsedSource {
//!     directory              @0 :Text;
//!     homepage               @1 :Text;
//!     standardsVersion       @2 :Text;
//! }
//! ```

use std::fmt::Write;

use crate::{
    derived::DerivedList,
    error::{GenerateError, Result},
    naming::{record_type_name, schema_identifier}
};

/// Marker line written by default above the generated section.
///
/// Matches the line already present in `apt.capnp`, so existing schemas
/// splice without edits.
pub const DEFAULT_MARKER: &str = "## generated by gen.py";

/// Render one `struct` block, slots numbered by list position.
///
/// Identifiers are padded to the widest one in the block.
#[must_use]
pub fn render_block(derived: &DerivedList) -> String {
    let identifiers: Vec<String> = derived
        .fields()
        .iter()
        .map(|f| schema_identifier(f))
        .collect();
    let width = identifiers.iter().map(String::len).max().unwrap_or(0);

    let mut block = format!("struct {} {{\n", record_type_name(derived.kind()));
    for (index, identifier) in identifiers.iter().enumerate() {
        // Writing into a String cannot fail.
        let _ = writeln!(block, "    {identifier:<width$} @{index} :Text;");
    }
    block.push_str("}\n");
    block
}

/// Render the whole generated section, one block per list, each preceded by
/// a blank line.
#[must_use]
pub fn render_blocks(lists: &[DerivedList]) -> String {
    lists.iter().fold(String::new(), |mut out, derived| {
        out.push('\n');
        out.push_str(&render_block(derived));
        out
    })
}

/// Replace everything after the marker line of `document` with `generated`.
///
/// Bytes up to and including the first line whose trimmed text equals the
/// trimmed marker are kept verbatim.
///
/// # Errors
///
/// [`GenerateError::MarkerNotFound`] if no such line exists.
pub fn splice(document: &str, marker: &str, generated: &str) -> Result<String> {
    let marker = marker.trim();
    let mut kept = 0;
    let mut found = false;

    for line in document.split_inclusive('\n') {
        kept += line.len();
        if line.trim() == marker {
            found = true;
            break;
        }
    }

    if !found {
        return Err(GenerateError::MarkerNotFound {
            marker: marker.to_string()
        });
    }

    let mut out = String::with_capacity(kept + generated.len() + 1);
    out.push_str(&document[..kept]);
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(generated);
    Ok(out)
}

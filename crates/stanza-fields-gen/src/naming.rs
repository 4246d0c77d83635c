// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field name normalization.
//!
//! Control-file field names are hyphenated and mixed-case
//! (`Build-Indep-Architecture`). Generated artifacts need two identifier
//! forms:
//!
//! | Function              | Example                    | Used for             |
//! |-----------------------|----------------------------|----------------------|
//! | [`schema_identifier`] | `buildIndepArchitecture`   | schema field names   |
//! | [`code_identifier`]   | `build_indep_architecture` | generated setters    |
//!
//! Both are pure: the same name always gives the same identifier.

use convert_case::{Case, Casing};
use stanza_fields_core::StanzaKind;

fn is_separator(c: char) -> bool {
    c == '-' || c == '_'
}

/// Lower-camel identifier for schema field declarations.
///
/// The name is lower-cased; then each `-` or `_` that is not the first
/// character and is followed by a letter is removed, and that letter is
/// upper-cased. Other separators are kept as they are.
///
/// # Example
///
/// ```rust
/// use stanza_fields_gen::naming::schema_identifier;
///
/// assert_eq!(schema_identifier("Dm-Upload-Allowed"), "dmUploadAllowed");
/// assert_eq!(schema_identifier("Python3-Version"), "python3Version");
/// ```
#[must_use]
pub fn schema_identifier(name: &str) -> String {
    let lower = name.to_lowercase();
    let mut out = String::with_capacity(lower.len());
    let mut chars = lower.chars().peekable();
    let mut first = true;

    while let Some(c) = chars.next() {
        if !first
            && is_separator(c)
            && let Some(&next) = chars.peek()
            && next.is_ascii_alphabetic()
        {
            chars.next();
            out.push(next.to_ascii_uppercase());
        } else {
            out.push(c);
        }
        first = false;
    }

    out
}

/// Lower-snake identifier used in generated dispatch code.
///
/// # Example
///
/// ```rust
/// use stanza_fields_gen::naming::code_identifier;
///
/// assert_eq!(code_identifier("Package_Revision"), "package_revision");
/// assert_eq!(code_identifier("MSDOS-Filename"), "msdos_filename");
/// ```
#[must_use]
pub fn code_identifier(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if is_separator(c) { '_' } else { c })
        .collect()
}

/// Name of the setter a dispatch arm calls for `name`.
#[must_use]
pub fn setter_name(name: &str) -> String {
    format!("set_{}", code_identifier(name))
}

/// Schema struct holding the catch-all slots of `kind`, e.g. `UnparsedSource`.
#[must_use]
pub fn record_type_name(kind: StanzaKind) -> String {
    format!("unparsed_{}", kind.tag()).to_case(Case::Pascal)
}

/// Module of the generated record builder, e.g. `unparsed_source`.
#[must_use]
pub fn record_module_name(kind: StanzaKind) -> String {
    record_type_name(kind).to_case(Case::Snake)
}

/// Name of the generated dispatch function, e.g. `set_field_source`.
#[must_use]
pub fn dispatch_fn_name(kind: StanzaKind) -> String {
    format!("set_field_{}", kind.tag())
}

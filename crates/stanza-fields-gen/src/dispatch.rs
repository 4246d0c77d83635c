// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field dispatch generation.
//!
//! A [`DispatchTable`] maps literal field names to catch-all slots. It is used
//! two ways:
//!
//! - [`render_dispatch`] turns tables into Rust source with one
//!   `set_field_<kind>` function per stanza kind.
//! - [`DispatchTable::dispatch`] performs the same routing in process.
//!
//! # Arm order
//!
//! Primary arms are sorted by field name so that regenerated code diffs
//! cleanly. Alias arms follow in declaration order. Order has no effect on
//! behaviour: every key matches at most one arm.
//!
//! # Generated shape
//!
//! ```rust,ignore
//! pub fn set_field_binary(key: &str, val: &str, builder: &mut unparsed_binary::Builder<'_>) -> Result<bool> {
//!     match key {
//!         "Bugs" => blank_to_null(val, |x| builder.set_bugs(x))?,
//!         // ...
//!
//!         // Aliases
//!         "Package_Revision" => blank_to_null(val, |x| builder.set_package_revision(x))?,
//!
//!         _ => return Ok(false),
//!     }
//!
//!     Ok(true)
//! }
//! ```

use std::fmt::Write;

use serde::Deserialize;
use stanza_fields_core::{FieldSink, StanzaKind, blank_to_null};

use crate::{
    catalog::Alias,
    derived::DerivedList,
    error::{GenerateError, Result},
    naming::{code_identifier, dispatch_fn_name, record_module_name}
};

/// Whether an arm comes from the derived list or from an alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArmKind {
    /// Catch-all field matched under its own name.
    Primary,
    /// Legacy name routed to a canonical field's slot.
    Alias
}

/// One `"Key" => set slot` arm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchArm {
    /// Literal field name matched.
    pub key:  String,
    /// Code identifier of the slot that receives the value.
    pub slot: String,
    /// Origin of the arm.
    pub kind: ArmKind
}

/// Sorted name-to-slot routing for one stanza kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchTable {
    kind:    StanzaKind,
    primary: Vec<DispatchArm>,
    aliases: Vec<DispatchArm>
}

impl DispatchTable {
    /// Build the table for a derived list and its aliases.
    ///
    /// # Errors
    ///
    /// [`GenerateError::UnknownAliasTarget`] if an alias target has no slot in
    /// `derived`.
    pub fn build(derived: &DerivedList, aliases: &[Alias]) -> Result<Self> {
        let mut primary: Vec<DispatchArm> = derived
            .fields()
            .iter()
            .map(|field| DispatchArm {
                key:  field.clone(),
                slot: code_identifier(field),
                kind: ArmKind::Primary
            })
            .collect();
        primary.sort_by(|a, b| a.key.cmp(&b.key));

        let aliases = aliases
            .iter()
            .map(|alias| {
                if !derived.contains(&alias.target) {
                    return Err(GenerateError::UnknownAliasTarget {
                        kind:   derived.kind(),
                        alias:  alias.key.clone(),
                        target: alias.target.clone()
                    });
                }
                Ok(DispatchArm {
                    key:  alias.key.clone(),
                    slot: code_identifier(&alias.target),
                    kind: ArmKind::Alias
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            kind: derived.kind(),
            primary,
            aliases
        })
    }

    /// Stanza kind routed by this table.
    #[must_use]
    pub const fn kind(&self) -> StanzaKind {
        self.kind
    }

    /// Arms in generated order: sorted primaries, then aliases.
    pub fn arms(&self) -> impl Iterator<Item = &DispatchArm> {
        self.primary.iter().chain(&self.aliases)
    }

    /// Number of arms, wildcard excluded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.primary.len() + self.aliases.len()
    }

    /// `true` when no key is recognized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Arm matching `key` exactly.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&DispatchArm> {
        match self.primary.binary_search_by(|arm| arm.key.as_str().cmp(key)) {
            Ok(index) => Some(&self.primary[index]),
            Err(_) => self.aliases.iter().find(|arm| arm.key == key)
        }
    }

    /// Route one field into `sink`.
    ///
    /// Returns `Ok(true)` if `key` is recognized; a blank value then leaves
    /// the slot untouched. Returns `Ok(false)` without touching `sink` for an
    /// unrecognized key.
    ///
    /// # Errors
    ///
    /// Only the sink's own failure to store a value.
    pub fn dispatch<S: FieldSink>(
        &self,
        key: &str,
        value: &str,
        sink: &mut S
    ) -> std::result::Result<bool, S::Error> {
        let Some(arm) = self.lookup(key) else {
            return Ok(false);
        };
        blank_to_null(value, |x| sink.set_text(&arm.slot, x))?;
        Ok(true)
    }
}

/// Paths the generated dispatch code imports.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DispatchOptions {
    /// Module containing the generated schema bindings.
    pub record_module: String,
    /// Result type whose error absorbs setter failures.
    pub result_path:   String,
    /// Blank-to-absent helper.
    pub helper_path:   String
}

impl Default for DispatchOptions {
    fn default() -> Self {
        Self {
            record_module: "crate::apt_capnp".to_string(),
            result_path:   "crate::errors::Result".to_string(),
            helper_path:   "crate::blank_to_null".to_string()
        }
    }
}

/// Header line of every generated dispatch file.
pub const GENERATED_HEADER: &str = "// GENERATED by stanza-fields; do not edit";

/// Keeps `rustfmt` off the whole file. `#![rustfmt::skip]` would need an
/// unstable feature when the file is a `#[path]` module.
pub const RUSTFMT_SKIP: &str = "#![cfg_attr(rustfmt, rustfmt_skip)]";

/// Render the complete dispatch source file.
///
/// The output is checked to parse as Rust before it is returned.
///
/// # Errors
///
/// [`GenerateError::InvalidDispatch`] if the rendered code does not parse,
/// e.g. because an option holds something other than a path.
pub fn render_dispatch(tables: &[DispatchTable], options: &DispatchOptions) -> Result<String> {
    let mut out = String::new();
    out.push_str(GENERATED_HEADER);
    out.push('\n');
    out.push_str(RUSTFMT_SKIP);
    out.push_str("\n\n");

    for table in tables {
        let _ = writeln!(
            out,
            "use {}::{};",
            options.record_module,
            record_module_name(table.kind())
        );
    }
    let _ = writeln!(out, "use {};", options.result_path);
    let _ = writeln!(out, "use {};", options.helper_path);

    for table in tables {
        render_function(&mut out, table);
    }

    syn::parse_file(&out).map_err(|err| GenerateError::InvalidDispatch {
        message: err.to_string()
    })?;
    Ok(out)
}

fn render_function(out: &mut String, table: &DispatchTable) {
    let _ = write!(
        out,
        "\n\npub fn {}(key: &str, val: &str, builder: &mut {}::Builder<'_>) -> Result<bool> {{\n    \
         match key {{\n",
        dispatch_fn_name(table.kind()),
        record_module_name(table.kind())
    );

    for arm in &table.primary {
        render_arm(out, arm);
    }

    if !table.aliases.is_empty() {
        out.push_str("\n        // Aliases\n");
        for arm in &table.aliases {
            render_arm(out, arm);
        }
    }

    out.push_str("\n        _ => return Ok(false),\n    }\n\n    Ok(true)\n}\n");
}

fn render_arm(out: &mut String, arm: &DispatchArm) {
    let _ = writeln!(
        out,
        "        {:?} => blank_to_null(val, |x| builder.set_{}(x))?,",
        arm.key, arm.slot
    );
}

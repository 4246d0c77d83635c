// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Catch-all field derivation.
//!
//! The derived list is `known - handled`, in known order. Both emitters
//! consume it: the schema numbers slots by position in it, the dispatch table
//! sorts it by name.
//!
//! A field listed both as known and handled is dropped without notice, so a
//! field can be promoted to a real parser by adding it to the handled set
//! alone.

use std::collections::HashMap;

use stanza_fields_core::StanzaKind;

use crate::{
    catalog::FieldCatalog,
    error::{GenerateError, Result},
    naming::{code_identifier, schema_identifier, setter_name}
};

/// Ordered catch-all fields of one stanza kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedList {
    kind:   StanzaKind,
    fields: Vec<String>
}

/// Filter a catalog's known fields down to those without a dedicated rule.
#[must_use]
pub fn derive(catalog: &FieldCatalog) -> DerivedList {
    let fields = catalog
        .known()
        .iter()
        .filter(|field| !catalog.is_handled(field))
        .cloned()
        .collect();

    DerivedList {
        kind: catalog.kind(),
        fields
    }
}

impl DerivedList {
    /// Stanza kind of the list.
    #[must_use]
    pub const fn kind(&self) -> StanzaKind {
        self.kind
    }

    /// Fields in known order.
    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Number of catch-all fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// `true` when every known field is handled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Schema slot index of `field`.
    #[must_use]
    pub fn index_of(&self, field: &str) -> Option<usize> {
        self.fields.iter().position(|f| f == field)
    }

    /// `true` if `field` has a catch-all slot.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.index_of(field).is_some()
    }

    /// Reject fields that cannot be emitted side by side.
    ///
    /// Both identifier forms must be unique within the list, and every
    /// setter name must be a Rust identifier.
    ///
    /// # Errors
    ///
    /// [`GenerateError::DuplicateIdentifier`] or
    /// [`GenerateError::InvalidIdentifier`] for the first offending field.
    pub fn check_identifiers(&self) -> Result<()> {
        let normalizers: [fn(&str) -> String; 2] = [schema_identifier, code_identifier];
        for normalize in normalizers {
            let mut seen: HashMap<String, &str> = HashMap::with_capacity(self.fields.len());
            for field in &self.fields {
                let identifier = normalize(field);
                if let Some(first) = seen.get(&identifier) {
                    return Err(GenerateError::DuplicateIdentifier {
                        kind: self.kind,
                        identifier,
                        first: (*first).to_string(),
                        second: field.clone()
                    });
                }
                seen.insert(identifier, field);
            }
        }

        for field in &self.fields {
            let setter = setter_name(field);
            if syn::parse_str::<syn::Ident>(&setter).is_err() {
                return Err(GenerateError::InvalidIdentifier {
                    kind: self.kind,
                    field: field.clone(),
                    setter
                });
            }
        }

        Ok(())
    }
}

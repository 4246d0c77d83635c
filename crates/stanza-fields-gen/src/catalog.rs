// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Declarative field catalogs.
//!
//! A catalog splits the field vocabulary of one stanza kind three ways:
//!
//! | Part       | Meaning                                           |
//! |------------|---------------------------------------------------|
//! | handled    | Parsed by a dedicated rule elsewhere              |
//! | known      | Seen in practice, stored verbatim as text         |
//! | aliases    | Legacy spelling → canonical field                 |
//!
//! Catalogs are plain values. They are assumed well-formed: an alias key is
//! never also listed as known.

mod binary;
mod source;

use std::collections::BTreeSet;

use stanza_fields_core::StanzaKind;

/// Legacy or misspelled field name routed to a canonical field's setter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alias {
    /// Name as it appears in the wild, e.g. `Package_Revision`.
    pub key:    String,
    /// Canonical field name, e.g. `Package-Revision`.
    pub target: String
}

/// Field vocabulary of one stanza kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCatalog {
    kind:    StanzaKind,
    handled: BTreeSet<String>,
    known:   Vec<String>,
    aliases: Vec<Alias>
}

impl FieldCatalog {
    /// Empty catalog for `kind`.
    #[must_use]
    pub fn new(kind: StanzaKind) -> Self {
        Self {
            kind,
            handled: BTreeSet::new(),
            known: Vec::new(),
            aliases: Vec::new()
        }
    }

    /// Built-in Debian archive vocabulary for `kind`.
    ///
    /// VCS field spellings are not included; apply
    /// [`VcsExpander`](crate::vcs::VcsExpander) to add them.
    #[must_use]
    pub fn builtin(kind: StanzaKind) -> Self {
        let (handled, known, aliases) = match kind {
            StanzaKind::Source => (source::HANDLED, source::KNOWN, source::ALIASES),
            StanzaKind::Binary => (binary::HANDLED, binary::KNOWN, binary::ALIASES)
        };

        let mut catalog = Self::new(kind)
            .with_handled(handled.iter().copied())
            .with_known(known.iter().copied());
        for (key, target) in aliases {
            catalog = catalog.with_alias(*key, *target);
        }
        catalog
    }

    /// Add handled fields.
    #[must_use]
    pub fn with_handled<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>
    {
        self.handled.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Append known fields after those already declared.
    #[must_use]
    pub fn with_known<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>
    {
        self.known.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Append an alias after those already declared.
    ///
    /// The alias reuses its target's slot, so `target` must be a catch-all
    /// field: listed as known and not handled. Otherwise
    /// [`DispatchTable::build`](crate::dispatch::DispatchTable::build) fails
    /// with [`GenerateError::UnknownAliasTarget`](crate::GenerateError::UnknownAliasTarget).
    #[must_use]
    pub fn with_alias(mut self, key: impl Into<String>, target: impl Into<String>) -> Self {
        self.aliases.push(Alias {
            key:    key.into(),
            target: target.into()
        });
        self
    }

    /// Mark one more field as handled. Returns `false` if it already was.
    pub fn insert_handled(&mut self, field: impl Into<String>) -> bool {
        self.handled.insert(field.into())
    }

    /// Stanza kind this catalog describes.
    #[must_use]
    pub const fn kind(&self) -> StanzaKind {
        self.kind
    }

    /// Declared handled fields.
    #[must_use]
    pub fn handled(&self) -> &BTreeSet<String> {
        &self.handled
    }

    /// Known fields in declaration order.
    #[must_use]
    pub fn known(&self) -> &[String] {
        &self.known
    }

    /// Aliases in declaration order.
    #[must_use]
    pub fn aliases(&self) -> &[Alias] {
        &self.aliases
    }

    /// `true` if `field` is handled or is an alias key.
    ///
    /// Alias keys count as handled so they never become catch-all slots.
    #[must_use]
    pub fn is_handled(&self, field: &str) -> bool {
        self.handled.contains(field) || self.aliases.iter().any(|a| a.key == field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_source_keeps_declaration_order() {
        let catalog = FieldCatalog::builtin(StanzaKind::Source);
        assert_eq!(catalog.kind(), StanzaKind::Source);
        assert_eq!(&catalog.known()[..4], [
            "Directory",
            "Homepage",
            "Standards-Version",
            "Section"
        ]);
        assert_eq!(catalog.known().last().map(String::as_str), Some("Origin"));
        assert!(catalog.aliases().is_empty());
    }

    #[test]
    fn builtin_binary_has_package_revision_alias() {
        let catalog = FieldCatalog::builtin(StanzaKind::Binary);
        assert_eq!(catalog.aliases(), [Alias {
            key:    "Package_Revision".to_string(),
            target: "Package-Revision".to_string()
        }]);
    }

    #[test]
    fn alias_keys_are_not_known() {
        for kind in StanzaKind::ALL {
            let catalog = FieldCatalog::builtin(kind);
            for alias in catalog.aliases() {
                assert!(!catalog.known().contains(&alias.key), "{}", alias.key);
            }
        }
    }

    #[test]
    fn alias_keys_count_as_handled() {
        let catalog = FieldCatalog::new(StanzaKind::Binary).with_alias("Old-Name", "New-Name");
        assert!(catalog.is_handled("Old-Name"));
        assert!(!catalog.is_handled("New-Name"));
        assert!(!catalog.handled().contains("Old-Name"));
    }

    #[test]
    fn alias_to_handled_field_has_no_slot() {
        use crate::{GenerateError, derived::derive, dispatch::DispatchTable};

        let catalog = FieldCatalog::new(StanzaKind::Binary)
            .with_handled(["Package"])
            .with_known(["Package", "Task"])
            .with_alias("Pkg", "Package");
        let err = DispatchTable::build(&derive(&catalog), catalog.aliases()).unwrap_err();
        assert!(matches!(err, GenerateError::UnknownAliasTarget { .. }));

        let catalog = catalog.with_alias("Tasks", "Task");
        let rest = &catalog.aliases()[1..];
        assert!(DispatchTable::build(&derive(&catalog), rest).is_ok());
    }

    #[test]
    fn names_are_case_sensitive() {
        let catalog = FieldCatalog::new(StanzaKind::Source).with_handled(["Homepage"]);
        assert!(catalog.is_handled("Homepage"));
        assert!(!catalog.is_handled("homepage"));
    }

    #[test]
    fn insert_handled_reports_novelty() {
        let mut catalog = FieldCatalog::new(StanzaKind::Source);
        assert!(catalog.insert_handled("Vcs-Git"));
        assert!(!catalog.insert_handled("Vcs-Git"));
    }
}

// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Version-control field expansion.
//!
//! Source stanzas point at packaging repositories through a family of fields
//! such as `Vcs-Git`, `Debian-Vcs-Svn` or `Vcs-Upstream-Bzr`. All of them are
//! parsed into a single typed VCS pointer elsewhere, so every spelling must be
//! handled. The family is the cross product of namespace prefixes and backend
//! tokens.

use stanza_fields_core::StanzaKind;
use tracing::debug;

use crate::catalog::FieldCatalog;

/// Backend tokens, including the `Browse`/`Browser` web-view spellings.
pub const BACKENDS: &[&str] = &[
    "Arch", "Browse", "Browser", "Bzr", "Cvs", "Darcs", "Git", "Hg", "Mtn", "Svn"
];

/// Namespace prefixes seen in the wild.
pub const PREFIXES: &[&str] = &[
    "Vcs-",
    "Orig-Vcs-",
    "Original-Vcs-",
    "Debian-Vcs-",
    "Upstream-Vcs-",
    "Vcs-Upstream-"
];

/// Produces `{prefix}{backend}` field names.
#[derive(Debug, Clone, Copy)]
pub struct VcsExpander<'a> {
    prefixes: &'a [&'a str],
    backends: &'a [&'a str]
}

impl Default for VcsExpander<'static> {
    fn default() -> Self {
        Self::new(PREFIXES, BACKENDS)
    }
}

impl<'a> VcsExpander<'a> {
    /// Expander over custom prefixes and backends.
    #[must_use]
    pub const fn new(prefixes: &'a [&'a str], backends: &'a [&'a str]) -> Self {
        Self {
            prefixes,
            backends
        }
    }

    /// Every field name, prefix-major.
    pub fn field_names(&self) -> impl Iterator<Item = String> + '_ {
        self.prefixes.iter().flat_map(move |prefix| {
            self.backends
                .iter()
                .map(move |backend| format!("{prefix}{backend}"))
        })
    }

    /// Mark every field name as handled in a Source catalog.
    ///
    /// Binary stanzas carry no VCS fields; their catalogs are left untouched.
    /// Returns the number of names that were not already handled.
    pub fn apply(&self, catalog: &mut FieldCatalog) -> usize {
        if catalog.kind() != StanzaKind::Source {
            return 0;
        }

        let added = self
            .field_names()
            .filter(|name| catalog.insert_handled(name.as_str()))
            .count();
        debug!(added, "expanded VCS fields into source handled set");
        added
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derived::derive;

    #[test]
    fn cross_product_of_prefixes_and_backends() {
        let expander = VcsExpander::new(&["Vcs-", "Orig-Vcs-"], &["Git", "Svn"]);
        let names: Vec<_> = expander.field_names().collect();
        assert_eq!(names, [
            "Vcs-Git",
            "Vcs-Svn",
            "Orig-Vcs-Git",
            "Orig-Vcs-Svn"
        ]);
    }

    #[test]
    fn expanded_names_never_derive() {
        let mut catalog = FieldCatalog::new(StanzaKind::Source)
            .with_known(["Homepage", "Vcs-Git", "Orig-Vcs-Svn", "Vcs-Hg"]);
        let added = VcsExpander::new(&["Vcs-", "Orig-Vcs-"], &["Git", "Svn"]).apply(&mut catalog);

        assert_eq!(added, 4);
        for name in ["Vcs-Git", "Vcs-Svn", "Orig-Vcs-Git", "Orig-Vcs-Svn"] {
            assert!(catalog.handled().contains(name), "{name}");
        }
        assert_eq!(derive(&catalog).fields(), ["Homepage", "Vcs-Hg"]);
    }

    #[test]
    fn builtin_expansion_covers_every_spelling() {
        let expander = VcsExpander::default();
        assert_eq!(expander.field_names().count(), PREFIXES.len() * BACKENDS.len());

        let mut catalog = FieldCatalog::builtin(StanzaKind::Source);
        expander.apply(&mut catalog);
        for name in ["Vcs-Browser", "Debian-Vcs-Git", "Vcs-Upstream-Bzr", "Original-Vcs-Mtn"] {
            assert!(catalog.is_handled(name), "{name}");
        }
    }

    #[test]
    fn binary_catalog_is_untouched() {
        let mut catalog = FieldCatalog::builtin(StanzaKind::Binary);
        let before = catalog.clone();
        assert_eq!(VcsExpander::default().apply(&mut catalog), 0);
        assert_eq!(catalog, before);
    }
}

// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Text slot sinks.

use std::{collections::BTreeMap, convert::Infallible};

/// A record builder that stores catch-all fields as text.
///
/// Slots are addressed by their code identifier (`dm_upload_allowed`), which is
/// also the suffix of the generated `set_<slot>` builder method.
pub trait FieldSink {
    /// Error raised when a value cannot be stored, e.g. bad text encoding.
    type Error;

    /// Store `value` in `slot`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns the builder's own failure for a value it cannot accept.
    fn set_text(&mut self, slot: &str, value: &str) -> Result<(), Self::Error>;
}

/// Ordered map of slot name to text, the default catch-all store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnparsedFields {
    slots: BTreeMap<String, String>
}

impl UnparsedFields {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Value stored in `slot`, if any.
    #[must_use]
    pub fn get(&self, slot: &str) -> Option<&str> {
        self.slots.get(slot).map(String::as_str)
    }

    /// Number of populated slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// `true` when no slot has been populated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Populated slots in slot-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.slots.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FieldSink for UnparsedFields {
    type Error = Infallible;

    fn set_text(&mut self, slot: &str, value: &str) -> Result<(), Self::Error> {
        self.slots.insert(slot.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_text_replaces_previous_value() {
        let mut fields = UnparsedFields::new();
        let _ = fields.set_text("section", "admin");
        let _ = fields.set_text("section", "net");
        assert_eq!(fields.len(), 1);
        assert_eq!(fields.get("section"), Some("net"));
    }

    #[test]
    fn iter_is_ordered_by_slot() {
        let mut fields = UnparsedFields::new();
        let _ = fields.set_text("testsuite", "autopkgtest");
        let _ = fields.set_text("dgit", "abc");
        let slots: Vec<_> = fields.iter().map(|(k, _)| k).collect();
        assert_eq!(slots, ["dgit", "testsuite"]);
    }
}

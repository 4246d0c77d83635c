// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Stanza kinds.
//!
//! Source and Binary stanzas are classified and generated independently;
//! nothing keyed by one kind is ever merged with the other.

use std::{fmt, str::FromStr};

/// Kind of control-file stanza.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StanzaKind {
    /// A `Sources` index record.
    Source,
    /// A `Packages` index record.
    Binary
}

impl StanzaKind {
    /// Every kind, in generation order.
    pub const ALL: [StanzaKind; 2] = [StanzaKind::Source, StanzaKind::Binary];

    /// Lower-case tag used in generated names, e.g. `set_field_source`.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Binary => "binary"
        }
    }
}

impl fmt::Display for StanzaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Error returned when parsing an unknown stanza kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown stanza kind `{0}`, expected `source` or `binary`")]
pub struct UnknownStanzaKind(pub String);

impl FromStr for StanzaKind {
    type Err = UnknownStanzaKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "source" => Ok(Self::Source),
            "binary" => Ok(Self::Binary),
            other => Err(UnknownStanzaKind(other.to_string()))
        }
    }
}

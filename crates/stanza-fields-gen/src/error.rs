// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generation errors.
//!
//! Every variant is fatal for a generation run. Re-running after fixing the
//! cause is the recovery path; nothing is retried.

use std::{io, path::PathBuf};

use stanza_fields_core::StanzaKind;

/// Result alias for generation operations.
pub type Result<T> = std::result::Result<T, GenerateError>;

/// Failure of a generation run.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// Reading or writing an artifact failed.
    #[error("failed to {action} `{}`", .path.display())]
    Io {
        /// What was being attempted, e.g. `read schema`.
        action: &'static str,
        /// File involved.
        path:   PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error
    },

    /// The schema document has no generation marker line.
    #[error("marker line `{marker}` not found in schema document")]
    MarkerNotFound {
        /// Marker text that was searched for.
        marker: String
    },

    /// Two catch-all fields normalize to the same identifier.
    #[error("{kind} fields `{first}` and `{second}` both normalize to `{identifier}`")]
    DuplicateIdentifier {
        /// Stanza kind of both fields.
        kind:       StanzaKind,
        /// Colliding identifier.
        identifier: String,
        /// Field declared first.
        first:      String,
        /// Field declared later.
        second:     String
    },

    /// A field name cannot become a Rust setter name.
    #[error("{kind} field `{field}` does not yield a valid setter name `{setter}`")]
    InvalidIdentifier {
        /// Stanza kind of the field.
        kind:   StanzaKind,
        /// Field name as declared.
        field:  String,
        /// Rejected setter identifier.
        setter: String
    },

    /// An alias points at a field with no catch-all slot.
    #[error("{kind} alias `{alias}` targets `{target}`, which has no catch-all slot")]
    UnknownAliasTarget {
        /// Stanza kind of the alias.
        kind:   StanzaKind,
        /// Legacy field name.
        alias:  String,
        /// Canonical field name it maps to.
        target: String
    },

    /// Rendered dispatch code failed to parse as Rust.
    #[error("generated dispatch code is not valid Rust: {message}")]
    InvalidDispatch {
        /// Parser diagnostic.
        message: String
    },

    /// Configuration file could not be parsed.
    #[error("invalid configuration in `{origin}`")]
    Config {
        /// File name or other origin of the configuration text.
        origin: String,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error
    },

    /// Artifacts on disk differ from what would be generated.
    #[error("generated files are out of date: {}", display_paths(.paths))]
    OutOfDate {
        /// Stale files.
        paths: Vec<PathBuf>
    }
}

impl GenerateError {
    /// Build an [`GenerateError::Io`] mapper for use with `map_err`.
    pub(crate) fn io(
        action: &'static str,
        path: impl Into<PathBuf>
    ) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io {
            action,
            path,
            source
        }
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Runtime support for generated stanza field dispatch code.
//!
//! Generated `set_field_<kind>` functions route catch-all control-file fields
//! into text slots of a record builder. This crate holds the pieces that code
//! relies on at runtime, and that can also be used for hand-written routing.
//!
//! # Overview
//!
//! - [`StanzaKind`] — Which kind of stanza a field belongs to
//! - [`blank_to_null`] — Blank values are treated as absent
//! - [`FieldSink`] — A record builder that stores text by slot name
//! - [`UnparsedFields`] — Default ordered text store
//!
//! # Usage
//!
//! ```rust
//! use stanza_fields_core::{FieldSink, UnparsedFields, blank_to_null};
//!
//! let mut fields = UnparsedFields::new();
//! blank_to_null("  ", |x| fields.set_text("homepage", x)).unwrap();
//! assert!(fields.is_empty());
//!
//! blank_to_null(" https://example.org ", |x| fields.set_text("homepage", x)).unwrap();
//! assert_eq!(fields.get("homepage"), Some("https://example.org"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod kind;
mod sink;

pub use kind::{StanzaKind, UnknownStanzaKind};
pub use sink::{FieldSink, UnparsedFields};

/// Call `into` with the trimmed value, unless the value is blank.
///
/// An empty or whitespace-only value means the field is absent: no setter is
/// called and nothing is mutated. Errors come only from the setter.
///
/// # Example
///
/// ```rust
/// use stanza_fields_core::blank_to_null;
///
/// let mut seen = None;
/// blank_to_null::<_, ()>(" main ", |x| {
///     seen = Some(x.to_string());
///     Ok(())
/// })
/// .unwrap();
/// assert_eq!(seen.as_deref(), Some("main"));
/// ```
pub fn blank_to_null<F, E>(value: &str, into: F) -> Result<(), E>
where
    F: FnOnce(&str) -> Result<(), E>
{
    let cleaned = value.trim();
    if cleaned.is_empty() {
        return Ok(());
    }

    into(cleaned)
}

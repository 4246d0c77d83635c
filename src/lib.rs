// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![warn(missing_docs)]

//! # stanza-fields
//!
//! One crate, both halves. Re-exports:
//! - The generation engine from `stanza-fields-gen` ([`Generator`],
//!   [`FieldCatalog`], [`DispatchTable`], ...)
//! - The runtime helpers from `stanza-fields-core` ([`StanzaKind`],
//!   [`blank_to_null`], [`FieldSink`], [`UnparsedFields`])
//!
//! # Quick Start
//!
//! ```rust
//! use stanza_fields::{FieldCatalog, StanzaKind, UnparsedFields, DispatchTable, derive};
//!
//! let catalog = FieldCatalog::new(StanzaKind::Source)
//!     .with_known(["Homepage", "Section", "Dgit"])
//!     .with_handled(["Section"]);
//! let derived = derive(&catalog);
//! assert_eq!(derived.fields(), ["Homepage", "Dgit"]);
//!
//! let table = DispatchTable::build(&derived, catalog.aliases()).unwrap();
//! let mut fields = UnparsedFields::new();
//! assert_eq!(table.dispatch("Dgit", "abc123", &mut fields), Ok(true));
//! assert_eq!(table.dispatch("Section", "admin", &mut fields), Ok(false));
//! assert_eq!(fields.get("dgit"), Some("abc123"));
//! ```

pub use stanza_fields_core::*;
pub use stanza_fields_gen::*;

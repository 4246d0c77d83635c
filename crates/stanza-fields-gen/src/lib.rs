// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! Field classification and code generation for control-file stanzas.
//!
//! Source and Binary stanzas carry many loosely standardized fields. Some are
//! parsed into typed values by hand-written rules; the rest must survive as
//! text. This crate keeps that split as data and derives two artifacts from
//! it:
//!
//! - a Cap'n Proto schema section with one text slot per catch-all field
//! - a Rust dispatch function per stanza kind routing field names to slots
//!
//! # Pipeline
//!
//! ```text
//! FieldCatalog ──► VcsExpander ──► derive ──► DerivedList
//!                                                │
//!                     ┌──────────────────────────┴──────────┐
//!                     ▼                                     ▼
//!          schema::render_blocks              DispatchTable::build
//!          (known order, slot = index)        (sorted by name, aliases last)
//!                     │                                     │
//!                     ▼                                     ▼
//!          splice + atomic replace            render_dispatch, in-place write
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use stanza_fields_gen::{GenerateOptions, Generator};
//!
//! let report = Generator::new(GenerateOptions::default()).run()?;
//! println!("wrote {}", report.schema_path.display());
//! # Ok::<(), stanza_fields_gen::GenerateError>(())
//! ```

pub mod catalog;
pub mod config;
pub mod derived;
pub mod dispatch;
pub mod error;
pub mod generator;
pub mod naming;
pub mod output;
pub mod schema;
pub mod vcs;

pub use catalog::{Alias, FieldCatalog};
pub use config::GenerateOptions;
pub use derived::{DerivedList, derive};
pub use dispatch::{ArmKind, DispatchArm, DispatchOptions, DispatchTable, render_dispatch};
pub use error::{GenerateError, Result};
pub use generator::{GenerationPlan, Generator, Report};
pub use vcs::VcsExpander;

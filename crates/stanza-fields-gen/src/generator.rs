// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generation runs.
//!
//! A run computes everything in memory first, then writes:
//!
//! 1. Catalogs, VCS expansion, derived lists
//! 2. Identifier checks and dispatch tables
//! 3. Schema blocks spliced into the current document, dispatch source
//! 4. Schema replaced atomically, dispatch overwritten in place
//!
//! Nothing depends on time or hash order, so two runs over the same catalogs
//! write identical bytes.

use std::path::PathBuf;

use stanza_fields_core::StanzaKind;
use tracing::{debug, info};

use crate::{
    catalog::FieldCatalog,
    config::GenerateOptions,
    derived::{DerivedList, derive},
    dispatch::{DispatchTable, render_dispatch},
    error::{GenerateError, Result},
    output,
    schema::{render_blocks, splice},
    vcs::VcsExpander
};

/// In-memory result of classifying and rendering every stanza kind.
#[derive(Debug, Clone)]
pub struct GenerationPlan {
    /// Catch-all fields per kind, in generation order.
    pub derived:  Vec<DerivedList>,
    /// Routing per kind, in generation order.
    pub tables:   Vec<DispatchTable>,
    /// Section that follows the schema marker line.
    pub schema:   String,
    /// Complete dispatch source file.
    pub dispatch: String
}

impl GenerationPlan {
    /// Derived list for `kind`.
    #[must_use]
    pub fn derived(&self, kind: StanzaKind) -> Option<&DerivedList> {
        self.derived.iter().find(|d| d.kind() == kind)
    }

    /// Dispatch table for `kind`.
    #[must_use]
    pub fn table(&self, kind: StanzaKind) -> Option<&DispatchTable> {
        self.tables.iter().find(|t| t.kind() == kind)
    }
}

/// Outcome of [`Generator::run`] or [`Generator::check`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Schema document path.
    pub schema_path:   PathBuf,
    /// Dispatch source path.
    pub dispatch_path: PathBuf,
    /// `(kind, catch-all slots, dispatch arms)` per stanza kind.
    pub kinds:         Vec<(StanzaKind, usize, usize)>
}

/// Derives and writes both artifacts from a set of catalogs.
#[derive(Debug, Clone)]
pub struct Generator {
    options:  GenerateOptions,
    catalogs: Vec<FieldCatalog>
}

impl Generator {
    /// Generator over the built-in catalogs with VCS fields expanded.
    #[must_use]
    pub fn new(options: GenerateOptions) -> Self {
        let expander = VcsExpander::default();
        let catalogs = StanzaKind::ALL
            .into_iter()
            .map(|kind| {
                let mut catalog = FieldCatalog::builtin(kind);
                expander.apply(&mut catalog);
                catalog
            })
            .collect();
        Self::with_catalogs(options, catalogs)
    }

    /// Generator over custom catalogs, processed in the given order.
    #[must_use]
    pub fn with_catalogs(options: GenerateOptions, catalogs: Vec<FieldCatalog>) -> Self {
        Self {
            options,
            catalogs
        }
    }

    /// Options in effect.
    #[must_use]
    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    /// Catalogs in generation order.
    #[must_use]
    pub fn catalogs(&self) -> &[FieldCatalog] {
        &self.catalogs
    }

    /// Classify every catalog and render both artifacts, without any I/O.
    ///
    /// # Errors
    ///
    /// Identifier, alias or rendering errors; see [`GenerateError`].
    pub fn plan(&self) -> Result<GenerationPlan> {
        let mut derived = Vec::with_capacity(self.catalogs.len());
        let mut tables = Vec::with_capacity(self.catalogs.len());

        for catalog in &self.catalogs {
            let list = derive(catalog);
            list.check_identifiers()?;
            let table = DispatchTable::build(&list, catalog.aliases())?;
            debug!(
                kind = %catalog.kind(),
                slots = list.len(),
                arms = table.len(),
                "derived catch-all fields"
            );
            derived.push(list);
            tables.push(table);
        }

        let schema = render_blocks(&derived);
        let dispatch = render_dispatch(&tables, &self.options.dispatch)?;

        Ok(GenerationPlan {
            derived,
            tables,
            schema,
            dispatch
        })
    }

    /// Regenerate the schema section and the dispatch file.
    ///
    /// # Errors
    ///
    /// Any planning error, an unreadable schema document, a missing marker or
    /// a failed write. The schema document is never left half-written.
    pub fn run(&self) -> Result<Report> {
        let plan = self.plan()?;
        let schema = self.spliced_schema(&plan)?;

        output::write_atomic(&self.options.schema_path, &schema)?;
        info!(path = %self.options.schema_path.display(), "wrote schema");
        output::write_in_place(&self.options.dispatch_path, &plan.dispatch)?;
        info!(path = %self.options.dispatch_path.display(), "wrote dispatch");

        Ok(self.report(&plan))
    }

    /// Verify both artifacts are up to date without writing anything.
    ///
    /// # Errors
    ///
    /// [`GenerateError::OutOfDate`] naming every stale file, or any error
    /// [`run`](Self::run) would report before writing.
    pub fn check(&self) -> Result<Report> {
        let plan = self.plan()?;
        let schema = self.spliced_schema(&plan)?;

        let mut stale = Vec::new();
        if !output::is_current(&self.options.schema_path, &schema)? {
            stale.push(self.options.schema_path.clone());
        }
        if !output::is_current(&self.options.dispatch_path, &plan.dispatch)? {
            stale.push(self.options.dispatch_path.clone());
        }

        if !stale.is_empty() {
            return Err(GenerateError::OutOfDate {
                paths: stale
            });
        }
        info!("generated files are up to date");
        Ok(self.report(&plan))
    }

    fn spliced_schema(&self, plan: &GenerationPlan) -> Result<String> {
        let document = output::read(&self.options.schema_path, "read schema")?;
        splice(&document, &self.options.marker, &plan.schema)
    }

    fn report(&self, plan: &GenerationPlan) -> Report {
        Report {
            schema_path:   self.options.schema_path.clone(),
            dispatch_path: self.options.dispatch_path.clone(),
            kinds:         plan
                .derived
                .iter()
                .zip(&plan.tables)
                .map(|(d, t)| (d.kind(), d.len(), t.len()))
                .collect()
        }
    }
}

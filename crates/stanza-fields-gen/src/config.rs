// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generation options.
//!
//! Options can be read from TOML; every key is optional.
//!
//! ```toml
//! schema_path = "../apt.capnp"
//! dispatch_path = "src/fields.rs"
//! marker = "## generated by gen.py"
//!
//! [dispatch]
//! record_module = "crate::apt_capnp"
//! result_path = "crate::errors::Result"
//! helper_path = "crate::blank_to_null"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{
    dispatch::DispatchOptions,
    error::{GenerateError, Result},
    output,
    schema::DEFAULT_MARKER
};

/// Where and how to write the generated artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateOptions {
    /// Schema document spliced below [`marker`](Self::marker).
    pub schema_path:   PathBuf,
    /// Dispatch source file, fully overwritten.
    pub dispatch_path: PathBuf,
    /// Marker line in the schema document.
    pub marker:        String,
    /// Imports used by the dispatch code.
    pub dispatch:      DispatchOptions
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            schema_path:   PathBuf::from("../apt.capnp"),
            dispatch_path: PathBuf::from("src/fields.rs"),
            marker:        DEFAULT_MARKER.to_string(),
            dispatch:      DispatchOptions::default()
        }
    }
}

impl GenerateOptions {
    /// Parse options from TOML text.
    ///
    /// # Errors
    ///
    /// [`GenerateError::Config`] on malformed TOML or unknown keys.
    pub fn from_toml(text: &str, origin: &str) -> Result<Self> {
        toml::from_str(text).map_err(|source| GenerateError::Config {
            origin: origin.to_string(),
            source
        })
    }

    /// Read options from a TOML file.
    ///
    /// # Errors
    ///
    /// [`GenerateError::Io`] if the file is unreadable,
    /// [`GenerateError::Config`] if it is invalid.
    pub fn load(path: &Path) -> Result<Self> {
        let text = output::read(path, "read configuration")?;
        Self::from_toml(&text, &path.display().to_string())
    }
}

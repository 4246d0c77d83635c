// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Artifact I/O.
//!
//! The schema document is replaced atomically: the new content goes to a
//! temporary sibling file which is then renamed over the original, so readers
//! see either the old or the new document. The dispatch file is overwritten in
//! place and can be left truncated if the process dies mid-write.

use std::{
    fs,
    io::{self, Write},
    path::Path
};

use tempfile::NamedTempFile;

use crate::error::{GenerateError, Result};

/// Read a whole artifact.
///
/// # Errors
///
/// [`GenerateError::Io`] if the file cannot be read as UTF-8 text.
pub fn read(path: &Path, action: &'static str) -> Result<String> {
    fs::read_to_string(path).map_err(GenerateError::io(action, path))
}

/// Replace `path` with `contents` through a temporary sibling and a rename.
///
/// Permissions of an existing file are carried over to the replacement.
///
/// # Errors
///
/// [`GenerateError::Io`] if any step fails; `path` is then left as it was.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new(".")
    };

    let mut temp =
        NamedTempFile::new_in(dir).map_err(GenerateError::io("create temporary file in", dir))?;
    temp.write_all(contents.as_bytes())
        .and_then(|()| temp.as_file().sync_all())
        .map_err(GenerateError::io("write temporary file for", path))?;

    match fs::metadata(path) {
        Ok(meta) => temp
            .as_file()
            .set_permissions(meta.permissions())
            .map_err(GenerateError::io("copy permissions of", path))?,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(GenerateError::io("inspect", path)(err))
    }

    temp.persist(path)
        .map_err(|err| GenerateError::io("replace", path)(err.error))?;
    Ok(())
}

/// Overwrite `path` in place.
///
/// # Errors
///
/// [`GenerateError::Io`] if the write fails; the file may be partially
/// written.
pub fn write_in_place(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(GenerateError::io("write", path))
}

/// `true` if `path` exists and holds exactly `expected`.
///
/// # Errors
///
/// [`GenerateError::Io`] for read failures other than a missing file.
pub fn is_current(path: &Path, expected: &str) -> Result<bool> {
    match fs::read(path) {
        Ok(bytes) => Ok(bytes == expected.as_bytes()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(GenerateError::io("read", path)(err))
    }
}

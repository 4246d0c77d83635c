// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Source stanza vocabulary.
//!
//! VCS fields are not listed here; [`crate::vcs`] adds every spelling.

/// Fields parsed by dedicated rules.
pub const HANDLED: &[&str] = &[
    // core
    "Package",
    "Source",
    "Version",
    // mapped into proper types
    "Priority",
    "Architecture",
    "Format",
    // parsed into binaries
    "Binary",
    "Package-List",
    // parsed into files
    "Files",
    // typo of Original-Maintainer, seen in xenial upstart
    "Orig-Maintainer",
    // build dependencies
    "Build-Conflicts",
    "Build-Conflicts-Arch",
    "Build-Conflicts-Indep",
    "Build-Depends",
    "Build-Depends-Arch",
    "Build-Depends-Indep",
    // folded into files
    "Checksums-Md5",
    "Checksums-Sha1",
    "Checksums-Sha256",
    "Checksums-Sha512",
    // identities
    "Maintainer",
    "Original-Maintainer",
    "Uploaders"
];

/// Fields stored verbatim, in schema declaration order.
///
/// Append new fields at the end: schema slot numbers follow this order.
pub const KNOWN: &[&str] = &[
    "Directory",
    "Homepage",
    "Standards-Version",
    "Section",
    "Testsuite",
    "Testsuite-Triggers",
    "Testsuite-Restrictions",
    "Autobuild",
    "Dm-Upload-Allowed",
    // seen in the wild, ignored by apt
    "Extra-Source-Only",
    "Build-Indep-Architecture",
    "Dgit",
    "Go-Import-Path",
    "Python-Version",
    "Python3-Version",
    "Ruby-Versions",
    "Comment",
    // apt
    "Origin"
];

/// Legacy names mapped to canonical ones.
pub const ALIASES: &[(&str, &str)] = &[];

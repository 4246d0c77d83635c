// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Binary stanza vocabulary.

/// Fields parsed by dedicated rules.
pub const HANDLED: &[&str] = &[
    "Package",
    "Version",
    // folded into file
    "Filename",
    "Size",
    "MD5sum",
    "SHA1",
    "SHA256",
    "SHA512",
    // not text
    "Installed-Size",
    "Essential",
    "Build-Essential",
    "Priority",
    "Architecture",
    // package relations
    "Depends",
    "Recommends",
    "Suggests",
    "Enhances",
    "Pre-Depends",
    "Breaks",
    "Conflicts",
    "Replaces",
    "Provides",
    // folded into description
    "Description",
    "Description-md5",
    // identities
    "Maintainer",
    "Original-Maintainer"
];

/// Fields stored verbatim, in schema declaration order.
///
/// Append new fields at the end: schema slot numbers follow this order.
pub const KNOWN: &[&str] = &[
    "Homepage",
    "Section",
    "Source",
    "Task",
    "Bugs",
    "Supported",
    "Origin",
    "Status",
    // candidates for typed parsing
    "Build-Ids",
    "Multi-Arch",
    "Package-Type",
    "Auto-Built-Package",
    "Built-Using",
    // seen in the wild
    "Modaliases",
    "Gstreamer-Decoders",
    "Gstreamer-Elements",
    "Gstreamer-Encoders",
    "Gstreamer-Uri-Sinks",
    "Gstreamer-Uri-Sources",
    "Gstreamer-Version",
    "License",
    "Vendor",
    "Go-Import-Path",
    "Python-Version",
    "Python3-Version",
    "Ruby-Versions",
    "Lua-Versions",
    "Python-Egg-Name",
    "Ghc-Package",
    "Npp-Applications",
    "Npp-Description",
    "Npp-File",
    "Npp-Mimetype",
    "Npp-Name",
    "Postgresql-Catversion",
    "Postgresql-Version",
    "Tads2-Version",
    "Tads3-Version",
    "Xul-Appid",
    "Phased-Update-Percentage",
    // apt's own list
    "Built-For-Profiles",
    "Class",
    "Conffiles",
    "Config-Version",
    "Files",
    "Important",
    "Installer-Menu-Item",
    "Kernel-Version",
    "MSDOS-Filename",
    "Optional",
    "Package-Revision",
    "Recommended",
    "Revision",
    "Subarchitecture",
    "Tag",
    "Triggers-Awaited",
    "Triggers-Pending",
    // TODO: alias to Original-Maintainer once identities accept a second spelling
    "Orig-Maintainer"
];

/// Legacy names mapped to canonical ones.
pub const ALIASES: &[(&str, &str)] = &[("Package_Revision", "Package-Revision")];

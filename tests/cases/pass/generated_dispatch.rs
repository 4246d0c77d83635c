// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

// Compiles the checked-in generated dispatch fixture against stand-in record
// builders and exercises it.

#[path = "../../fixtures/fields.rs"]
mod fields;

pub use stanza_fields::blank_to_null;

mod errors {
    #[derive(Debug, PartialEq)]
    pub struct Error(pub String);

    pub type Result<T> = std::result::Result<T, Error>;
}

mod apt_capnp {
    use std::collections::BTreeMap;

    pub use crate::errors::Error;

    #[derive(Debug, Default)]
    pub struct Record {
        pub slots: BTreeMap<&'static str, String>
    }

    fn store(record: &mut Record, slot: &'static str, value: &str) -> Result<(), Error> {
        if value.contains('\u{fffd}') {
            return Err(Error(format!("{slot}: invalid text")));
        }
        record.slots.insert(slot, value.to_string());
        Ok(())
    }

    pub mod unparsed_source {
        use super::{Error, Record, store};

        pub struct Builder<'a> {
            pub record: &'a mut Record
        }

        impl Builder<'_> {
            pub fn set_dgit(&mut self, value: &str) -> Result<(), Error> {
                store(self.record, "dgit", value)
            }

            pub fn set_homepage(&mut self, value: &str) -> Result<(), Error> {
                store(self.record, "homepage", value)
            }

            pub fn set_section(&mut self, value: &str) -> Result<(), Error> {
                store(self.record, "section", value)
            }
        }
    }

    pub mod unparsed_binary {
        use super::{Error, Record, store};

        pub struct Builder<'a> {
            pub record: &'a mut Record
        }

        impl Builder<'_> {
            pub fn set_package_revision(&mut self, value: &str) -> Result<(), Error> {
                store(self.record, "package_revision", value)
            }

            pub fn set_task(&mut self, value: &str) -> Result<(), Error> {
                store(self.record, "task", value)
            }
        }
    }
}

fn main() {
    let mut source = apt_capnp::Record::default();
    let mut builder = apt_capnp::unparsed_source::Builder {
        record: &mut source
    };
    assert_eq!(fields::set_field_source("Dgit", " 0a1b2c ", &mut builder), Ok(true));
    assert_eq!(fields::set_field_source("Homepage", "   ", &mut builder), Ok(true));
    assert_eq!(fields::set_field_source("Vcs-Git", "https://salsa", &mut builder), Ok(false));
    assert_eq!(fields::set_field_source("section", "admin", &mut builder), Ok(false));
    assert!(fields::set_field_source("Section", "bad \u{fffd}", &mut builder).is_err());
    assert_eq!(source.slots.len(), 1);
    assert_eq!(source.slots["dgit"], "0a1b2c");

    let mut binary = apt_capnp::Record::default();
    let mut builder = apt_capnp::unparsed_binary::Builder {
        record: &mut binary
    };
    assert_eq!(fields::set_field_binary("Package_Revision", "3", &mut builder), Ok(true));
    assert_eq!(fields::set_field_binary("Task", "desktop", &mut builder), Ok(true));
    assert_eq!(fields::set_field_binary("Description", "x", &mut builder), Ok(false));
    assert_eq!(binary.slots.len(), 2);
    assert_eq!(binary.slots["package_revision"], "3");
    assert_eq!(binary.slots["task"], "desktop");
}

// GENERATED by stanza-fields; do not edit
#![cfg_attr(rustfmt, rustfmt_skip)]

use crate::apt_capnp::unparsed_source;
use crate::apt_capnp::unparsed_binary;
use crate::errors::Result;
use crate::blank_to_null;


pub fn set_field_source(key: &str, val: &str, builder: &mut unparsed_source::Builder<'_>) -> Result<bool> {
    match key {
        "Dgit" => blank_to_null(val, |x| builder.set_dgit(x))?,
        "Homepage" => blank_to_null(val, |x| builder.set_homepage(x))?,
        "Section" => blank_to_null(val, |x| builder.set_section(x))?,

        _ => return Ok(false),
    }

    Ok(true)
}


pub fn set_field_binary(key: &str, val: &str, builder: &mut unparsed_binary::Builder<'_>) -> Result<bool> {
    match key {
        "Package-Revision" => blank_to_null(val, |x| builder.set_package_revision(x))?,
        "Task" => blank_to_null(val, |x| builder.set_task(x))?,

        // Aliases
        "Package_Revision" => blank_to_null(val, |x| builder.set_package_revision(x))?,

        _ => return Ok(false),
    }

    Ok(true)
}

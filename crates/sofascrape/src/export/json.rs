//! JSON rendering

use crate::error::{Error, Result};
use serde::Serialize;
use serde_json::Value;
use std::io::Write;

/// Indent used for pretty output and saved files.
const INDENT: &[u8] = b"    ";

/// Compact JSON text. Object keys keep their original order.
pub fn to_string(payload: &Value) -> Result<String> {
    Ok(serde_json::to_string(payload)?)
}

/// Pretty JSON text with a four-space indent.
pub fn to_string_pretty(payload: &Value) -> Result<String> {
    let mut buf = Vec::new();
    write_pretty(payload, &mut buf)?;
    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write pretty JSON to `writer`.
pub fn write_pretty<W: Write>(payload: &Value, writer: W) -> Result<()> {
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    payload.serialize(&mut serializer).map_err(|e| {
        if e.is_io() {
            Error::Io(e.into())
        } else {
            Error::Serialization(e)
        }
    })
}

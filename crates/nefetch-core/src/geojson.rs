//! GeoJSON body handling.
//!
//! Bodies are treated as opaque JSON documents; geographic semantics are
//! never interpreted. The one transformation applied is re-serialization
//! into a canonical pretty form with 2-space indentation.

use anyhow::{Context, Result};
use serde_json::Value;

/// Parses `body` as JSON and re-emits it with 2-space indentation.
///
/// The output carries no trailing newline. Re-applying this function to
/// its own output is a byte-level no-op.
pub fn reserialize_pretty(body: &[u8]) -> Result<String> {
    let doc: Value = serde_json::from_slice(body).context("response body is not valid JSON")?;
    serde_json::to_string_pretty(&doc).context("re-serializing JSON document")
}

/// True if `bytes` are valid JSON already in canonical pretty form.
/// Anything unparseable, including non-UTF-8 content, is simply not canonical.
pub fn is_canonical(bytes: &[u8]) -> bool {
    match serde_json::from_slice::<Value>(bytes) {
        Ok(doc) => match serde_json::to_string_pretty(&doc) {
            Ok(pretty) => pretty.as_bytes() == bytes,
            Err(_) => false,
        },
        Err(_) => false,
    }
}

//! JSON output formatter

use crate::error::Result;
use serde_json::Value;

pub const CONTENT_TYPE: &str = "application/json";

/// Serialize documents as-is: a lone document as an object, anything else as an array
pub fn format_documents(docs: &[Value], pretty: bool) -> Result<String> {
    let body = match docs {
        [single] => to_string(single, pretty)?,
        _ => to_string(docs, pretty)?,
    };
    Ok(body)
}

fn to_string<T: serde::Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let body = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(body)
}

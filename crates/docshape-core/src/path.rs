//! Dotted path addressing inside JSON documents
//!
//! A path such as `a.b.2.c` is resolved one segment at a time. Whether a
//! segment is treated as an object key or an array index depends on the node
//! being traversed, not on how the segment looks, so `{"123": "x"}` is
//! addressable with the path `123`.

use crate::error::{DocShapeError, Result};
use serde_json::Value;

/// Largest array index a write may pad up to
pub const MAX_ARRAY_INDEX: usize = 65_535;

/// Split a path on its first `.` into its head segment and the remaining path
///
/// A trailing dot does not produce an empty remainder: `a.` splits into
/// `("a", None)`.
pub fn split_path(path: &str) -> (&str, Option<&str>) {
    match path.split_once('.') {
        Some((head, rest)) if !rest.is_empty() => (head, Some(rest)),
        Some((head, _)) => (head, None),
        None => (path, None),
    }
}

/// Whether a segment is a plain decimal index (`0`, `12`, ...)
pub fn is_index_segment(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

/// Read the value at `path`
///
/// Missing keys, out of range indices and traversal through scalars all
/// resolve to `None`. Only a segment that cannot be an index while an array is
/// being traversed is an error.
pub fn get<'a>(doc: &'a Value, path: &str) -> Result<Option<&'a Value>> {
    let (head, rest) = split_path(path);

    let child = match doc {
        Value::Object(map) => map.get(head),
        Value::Array(items) => items.get(parse_index(head, path)?),
        _ => return Ok(None),
    };

    match (child, rest) {
        (Some(child), Some(rest)) => get(child, rest),
        (child, None) => Ok(child),
        (None, Some(_)) => Ok(None),
    }
}

/// Write `value` at `path`, creating intermediate containers as needed
///
/// A missing (or null) intermediate node becomes an array when the next
/// segment is an index and an object otherwise. Writing past the end of an
/// array pads it with nulls, up to [`MAX_ARRAY_INDEX`].
pub fn set(doc: &mut Value, path: &str, value: Value) -> Result<()> {
    let (head, rest) = split_path(path);

    let slot = match doc {
        Value::Object(map) => map.entry(head).or_insert(Value::Null),
        Value::Array(items) => {
            let index = parse_index(head, path)?;
            if index > MAX_ARRAY_INDEX {
                return Err(DocShapeError::Addressing(format!(
                    "array index {} exceeds the limit of {} in path '{}'",
                    index, MAX_ARRAY_INDEX, path
                )));
            }
            if index >= items.len() {
                let len = index.checked_add(1).ok_or_else(|| {
                    DocShapeError::Addressing(format!("array index {} is too large", index))
                })?;
                items.resize(len, Value::Null);
            }
            &mut items[index]
        }
        other => {
            return Err(DocShapeError::Addressing(format!(
                "cannot set '{}' inside a {} value",
                path,
                type_name(other)
            )))
        }
    };

    match rest {
        None => {
            *slot = value;
            Ok(())
        }
        Some(rest) => {
            if slot.is_null() {
                *slot = container_for(rest);
            }
            set(slot, rest, value)
        }
    }
}

/// Empty container suited to hold the first segment of `path`
fn container_for(path: &str) -> Value {
    let (next, _) = split_path(path);
    if is_index_segment(next) {
        Value::Array(Vec::new())
    } else {
        Value::Object(serde_json::Map::new())
    }
}

fn parse_index(segment: &str, path: &str) -> Result<usize> {
    if let Some(digits) = segment.strip_prefix('-') {
        if is_index_segment(digits) {
            return Err(DocShapeError::Addressing(format!(
                "negative array index '{}' in path '{}'",
                segment, path
            )));
        }
    }

    if !is_index_segment(segment) {
        return Err(DocShapeError::Addressing(format!(
            "expected an array index but found '{}' in path '{}'",
            segment, path
        )));
    }

    segment.parse::<usize>().map_err(|_| {
        DocShapeError::Addressing(format!(
            "array index '{}' is too large in path '{}'",
            segment, path
        ))
    })
}

/// JSON type name of a value, used in error messages
pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

//! Projection of documents onto a set of paths
//!
//! The inverse direction of flattening: the selected values are written back
//! into a fresh document, rebuilding whatever nesting their paths describe.

use crate::error::Result;
use crate::path;
use serde_json::{Map, Value};
use std::borrow::Cow;

/// Restrict a document to `paths`
///
/// An empty path list returns the document itself. Paths that resolve to
/// nothing still produce a `null` at their location.
pub fn project<'a>(doc: &'a Value, paths: &[String]) -> Result<Cow<'a, Value>> {
    if paths.is_empty() {
        return Ok(Cow::Borrowed(doc));
    }

    let mut target = Value::Object(Map::new());
    for key in paths {
        let value = path::get(doc, key)?.cloned().unwrap_or(Value::Null);
        path::set(&mut target, key, value)?;
    }

    Ok(Cow::Owned(target))
}

/// Project every document of a collection
pub fn project_all(docs: Vec<Value>, paths: &[String]) -> Result<Vec<Value>> {
    if paths.is_empty() {
        return Ok(docs);
    }

    docs.iter()
        .map(|doc| project(doc, paths).map(Cow::into_owned))
        .collect()
}

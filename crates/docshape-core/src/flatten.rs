//! Flattening of nested documents into single-level path maps
//!
//! ```text
//! { "a": { "b": 1 }, "c": [1, 2, 3], "d": 4 }
//! => { "a.b": 1, "c.0": 1, "c.1": 2, "c.2": 3, "d": 4 }
//! ```

use crate::error::{DocShapeError, Result};
use crate::path::type_name;
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Single-level mapping from leaf path to scalar value, in document order
pub type FlatDocument = Map<String, Value>;

/// Flatten one document
///
/// When `allowed` is non-empty only leaves whose full path is a member are
/// kept. Intermediate paths are never matched, so `a` does not select `a.b`.
///
/// Two leaves that spell the same path (`{"a.b": 1, "a": {"b": 2}}`) are a
/// format error.
pub fn flatten(doc: &Value, allowed: &[String]) -> Result<FlatDocument> {
    if !doc.is_object() && !doc.is_array() {
        return Err(DocShapeError::Format(format!(
            "cannot flatten a {} value, expected an object or array",
            type_name(doc)
        )));
    }

    let allowed: HashSet<&str> = allowed.iter().map(String::as_str).collect();
    let mut target = Map::new();
    flatten_into(&mut target, doc, None, &allowed)?;
    Ok(target)
}

/// Flatten a collection of row-shaped documents
///
/// Every document must be an object.
pub fn flatten_all(docs: &[Value], allowed: &[String]) -> Result<Vec<FlatDocument>> {
    docs.iter()
        .enumerate()
        .map(|(idx, doc)| {
            if !doc.is_object() {
                return Err(DocShapeError::Format(format!(
                    "document {} is a {} and cannot be flattened into a row",
                    idx,
                    type_name(doc)
                )));
            }
            flatten(doc, allowed)
        })
        .collect()
}

fn flatten_into(
    target: &mut FlatDocument,
    value: &Value,
    prefix: Option<&str>,
    allowed: &HashSet<&str>,
) -> Result<()> {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = join(prefix, key);
                flatten_into(target, child, Some(&path), allowed)?;
            }
        }
        Value::Array(items) => {
            for (idx, child) in items.iter().enumerate() {
                let path = join(prefix, &idx.to_string());
                flatten_into(target, child, Some(&path), allowed)?;
            }
        }
        scalar => {
            // Scalars only ever arrive here below a container, so prefix is set
            if let Some(path) = prefix {
                if (allowed.is_empty() || allowed.contains(path))
                    && target.insert(path.to_string(), scalar.clone()).is_some()
                {
                    return Err(DocShapeError::Format(format!(
                        "more than one value flattens to the path '{}'",
                        path
                    )));
                }
            }
        }
    }
    Ok(())
}

fn join(prefix: Option<&str>, key: &str) -> String {
    match prefix {
        Some(prefix) => format!("{}.{}", prefix, key),
        None => key.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flat_document() {
        let doc = json!({ "a": { "b": 1 }, "c": [1, 2.5, 3], "d": "string" });
        let flat = flatten(&doc, &[]).unwrap();

        assert_eq!(
            Value::Object(flat),
            json!({ "a.b": 1, "c.0": 1, "c.1": 2.5, "c.2": 3, "d": "string" })
        );
    }

    #[test]
    fn test_flat_keeps_document_order() {
        let doc = json!({ "z": 1, "a": { "y": 2, "b": 3 } });
        let flat = flatten(&doc, &[]).unwrap();
        let keys: Vec<&str> = flat.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a.y", "a.b"]);
    }

    #[test]
    fn test_flat_with_allowed_paths() {
        let doc = json!({ "a": { "b": 1, "g": 2 }, "c": [10, 20, 30] });
        let allowed = vec!["a.b".to_string(), "c.1".to_string()];
        let flat = flatten(&doc, &allowed).unwrap();
        assert_eq!(Value::Object(flat), json!({ "a.b": 1, "c.1": 20 }));
    }

    #[test]
    fn test_flat_allowed_is_not_a_prefix_filter() {
        let doc = json!({ "a": { "b": 1 } });
        let flat = flatten(&doc, &["a".to_string()]).unwrap();
        assert!(flat.is_empty());
    }

    #[test]
    fn test_flat_keeps_nulls_and_skips_empty_containers() {
        let doc = json!({ "n": null, "o": {}, "l": [] });
        let flat = flatten(&doc, &[]).unwrap();
        assert_eq!(Value::Object(flat), json!({ "n": null }));
    }

    #[test]
    fn test_flat_clashing_paths_fail() {
        let doc = json!({ "a.b": 1, "a": { "b": 2 } });
        let err = flatten(&doc, &[]).unwrap_err();
        assert!(matches!(err, DocShapeError::Format(_)));
        assert!(err.to_string().contains("'a.b'"));

        let doc = json!({ "c.0": "x", "c": ["y"] });
        assert!(flatten(&doc, &["c.0".to_string()]).is_err());
    }

    #[test]
    fn test_flat_clash_outside_allowed_paths_is_ignored() {
        let doc = json!({ "a.b": 1, "a": { "b": 2 }, "z": 3 });
        let flat = flatten(&doc, &["z".to_string()]).unwrap();
        assert_eq!(Value::Object(flat), json!({ "z": 3 }));
    }

    #[test]
    fn test_flat_scalar_root_fails() {
        assert!(flatten(&json!("a simple string"), &[]).is_err());
    }

    #[test]
    fn test_flat_documents() {
        let docs = vec![json!({ "a": { "b": 1 }, "c": [1, 2.5, 3], "d": "string" })];
        let flat = flatten_all(&docs, &[]).unwrap();
        assert_eq!(flat.len(), 1);
        assert_eq!(flat[0].get("c.1"), Some(&json!(2.5)));
    }

    #[test]
    fn test_flat_documents_rejects_non_rows() {
        let docs = vec![json!("a simple string"), json!("other simple string")];
        let err = flatten_all(&docs, &[]).unwrap_err();
        assert!(matches!(err, DocShapeError::Format(_)));
    }
}

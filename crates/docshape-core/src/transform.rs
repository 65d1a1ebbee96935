//! Document transforms
//!
//! A transform rewrites each document before it is formatted. The active
//! transform is chosen by name in the configuration and resolved once when
//! the dispatcher is built, so a misspelt name fails at startup.

use crate::error::{DocShapeError, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Transform trait - all document transforms must implement this
pub trait DocumentTransform: Send + Sync {
    /// Transform identifier used in configuration (e.g., "identity")
    fn name(&self) -> &'static str;

    /// Rewrite one document
    fn apply(&self, doc: Value) -> Result<Value>;
}

/// Leaves documents untouched
pub struct IdentityTransform;

impl DocumentTransform for IdentityTransform {
    fn name(&self) -> &'static str {
        "identity"
    }

    fn apply(&self, doc: Value) -> Result<Value> {
        Ok(doc)
    }
}

/// Drops top-level store metadata such as `_id` and `_rev`
pub struct StripMetaTransform;

impl DocumentTransform for StripMetaTransform {
    fn name(&self) -> &'static str {
        "strip-meta"
    }

    fn apply(&self, mut doc: Value) -> Result<Value> {
        if let Value::Object(map) = &mut doc {
            map.retain(|key, _| !key.starts_with('_'));
        }
        Ok(doc)
    }
}

/// Registry for looking up transforms by name
pub struct TransformRegistry {
    transforms: HashMap<String, Arc<dyn DocumentTransform>>,
}

impl TransformRegistry {
    /// Create new empty registry
    pub fn new() -> Self {
        Self {
            transforms: HashMap::new(),
        }
    }

    /// Create registry with the built-in transforms
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(IdentityTransform));
        registry.register(Arc::new(StripMetaTransform));
        registry
    }

    /// Register a transform
    pub fn register(&mut self, transform: Arc<dyn DocumentTransform>) {
        self.transforms
            .insert(transform.name().to_string(), transform);
    }

    /// Get transform by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn DocumentTransform>> {
        self.transforms.get(name).cloned()
    }

    /// Get transform by name, failing with a configuration error if unknown
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn DocumentTransform>> {
        self.get(name).ok_or_else(|| {
            let mut known: Vec<&str> = self.transforms.keys().map(String::as_str).collect();
            known.sort_unstable();
            DocShapeError::Config(format!(
                "unknown transform '{}', expected one of: {}",
                name,
                known.join(", ")
            ))
        })
    }
}

impl Default for TransformRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_identity() {
        let doc = json!({ "_id": "x", "a": 1 });
        assert_eq!(IdentityTransform.apply(doc.clone()).unwrap(), doc);
    }

    #[test]
    fn test_strip_meta() {
        let doc = json!({ "_id": "x", "_rev": "1-a", "a": { "_keep": 1 } });
        let stripped = StripMetaTransform.apply(doc).unwrap();
        assert_eq!(stripped, json!({ "a": { "_keep": 1 } }));
    }

    #[test]
    fn test_registry_resolves_defaults() {
        let registry = TransformRegistry::with_defaults();
        assert_eq!(registry.resolve("identity").unwrap().name(), "identity");
        assert_eq!(registry.resolve("strip-meta").unwrap().name(), "strip-meta");
    }

    #[test]
    fn test_registry_unknown_name() {
        let registry = TransformRegistry::with_defaults();
        let err = registry.resolve("com.example.Parser").err().unwrap();
        assert!(matches!(err, DocShapeError::Config(_)));
        assert!(err.to_string().contains("identity, strip-meta"));
    }

    #[test]
    fn test_register_custom() {
        struct Upper;
        impl DocumentTransform for Upper {
            fn name(&self) -> &'static str {
                "upper"
            }
            fn apply(&self, doc: Value) -> Result<Value> {
                Ok(match doc {
                    Value::String(s) => Value::String(s.to_uppercase()),
                    other => other,
                })
            }
        }

        let mut registry = TransformRegistry::new();
        registry.register(Arc::new(Upper));
        let upper = registry.resolve("upper").unwrap();
        assert_eq!(upper.apply(json!("abc")).unwrap(), json!("ABC"));
    }
}

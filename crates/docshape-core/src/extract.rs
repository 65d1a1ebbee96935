//! Unwrapping of documents from search response envelopes
//!
//! ```text
//! [ { "rows": [ { "doc": { "a": 1 } }, { "doc": { "a": 2 } } ] } ]
//! => [ { "a": 1 }, { "a": 2 } ]
//! ```

use crate::error::{DocShapeError, Result};
use serde_json::Value;

/// Collect the `doc` of every row of every response, in order
///
/// Rows without a `doc` object (results fetched without documents) are
/// skipped. A response without a `rows` array is an error.
pub fn row_docs(responses: &[Value]) -> Result<Vec<Value>> {
    let mut docs = Vec::new();

    for (idx, response) in responses.iter().enumerate() {
        let rows = response
            .get("rows")
            .and_then(Value::as_array)
            .ok_or_else(|| {
                DocShapeError::Format(format!("search response {} has no rows array", idx))
            })?;

        docs.extend(
            rows.iter()
                .filter_map(|row| row.get("doc"))
                .filter(|doc| doc.is_object())
                .cloned(),
        );
    }

    tracing::debug!("Extracted {} documents from {} responses", docs.len(), responses.len());
    Ok(docs)
}

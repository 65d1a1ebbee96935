//! Command implementations

pub mod flatten;
pub mod get;
pub mod project;
pub mod render;

use anyhow::{Context, Result};
use docshape_core::DocShapeError;
use serde_json::Value;
use std::io::Read;

/// Read a document collection from a file or stdin (`-`)
///
/// A top-level array is the collection; any other value is a collection of one.
pub fn read_documents(input: &str) -> Result<Vec<Value>> {
    let content = if input == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read stdin")?;
        buffer
    } else {
        std::fs::read_to_string(input).with_context(|| format!("Failed to read {}", input))?
    };

    let value: Value = serde_json::from_str(&content)
        .map_err(|e| DocShapeError::Parse(format!("Invalid JSON in {}: {}", input, e)))?;

    Ok(match value {
        Value::Array(docs) => docs,
        doc => vec![doc],
    })
}

/// Print one JSON value per document
pub fn print_values<'a, I>(values: I, pretty: bool) -> Result<()>
where
    I: IntoIterator<Item = &'a Value>,
{
    for value in values {
        let line = if pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        println!("{}", line);
    }
    Ok(())
}

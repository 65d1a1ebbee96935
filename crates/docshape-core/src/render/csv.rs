//! CSV output formatter
//!
//! Columns are fixed before any row is written: either the requested keys or,
//! when none were requested, every leaf path of the first document. Later
//! documents are laid out against that column set, so a missing value is an
//! empty cell rather than a shifted row.

use super::{scalar_text, FormatOptions};
use crate::error::Result;
use crate::flatten::flatten_all;
use serde_json::Value;
use std::borrow::Cow;

/// Separator used when no usable delimiter was requested
pub const DEFAULT_DELIMITER: char = ';';

/// Delimiter alias for a tab character
pub const TAB_ALIAS: &str = "tab";

pub fn format_documents(docs: &[Value], options: &FormatOptions) -> Result<String> {
    if docs.is_empty() {
        return Ok(String::new());
    }

    let rows = flatten_all(docs, &options.keys)?;

    let keys: Vec<String> = if options.keys.is_empty() {
        rows[0].keys().cloned().collect()
    } else {
        options.keys.clone()
    };

    let separator = resolve_delimiter(options.delimiter.as_deref());
    let terminator = options.line_terminator.as_str();

    let headers = if options.labels.len() == keys.len() {
        &options.labels
    } else {
        if !options.labels.is_empty() {
            tracing::warn!(
                "Ignoring {} CSV labels for {} columns",
                options.labels.len(),
                keys.len()
            );
        }
        &keys
    };

    let mut output = String::new();
    push_row(
        &mut output,
        headers.iter().map(|h| Cow::Borrowed(h.as_str())),
        separator,
        terminator,
    );

    for row in &rows {
        let cells = keys
            .iter()
            .map(|key| row.get(key).map(scalar_text).unwrap_or(Cow::Borrowed("")));
        push_row(&mut output, cells, separator, terminator);
    }

    Ok(output)
}

/// Resolve the requested delimiter to a separator character
///
/// `tab` selects a tab; any other single character except `"` is used as-is.
/// Everything else falls back to [`DEFAULT_DELIMITER`].
pub fn resolve_delimiter(requested: Option<&str>) -> char {
    match requested {
        Some(TAB_ALIAS) => '\t',
        Some(value) => {
            let mut chars = value.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c != '"' => c,
                _ => DEFAULT_DELIMITER,
            }
        }
        None => DEFAULT_DELIMITER,
    }
}

fn push_row<'a, I>(output: &mut String, cells: I, separator: char, terminator: &str)
where
    I: Iterator<Item = Cow<'a, str>>,
{
    for (idx, cell) in cells.enumerate() {
        if idx > 0 {
            output.push(separator);
        }
        output.push_str(&escape_csv(&cell, separator, terminator));
    }
    output.push_str(terminator);
}

/// Quote a cell if it would otherwise break the row structure
pub fn escape_csv<'a>(cell: &'a str, separator: char, terminator: &str) -> Cow<'a, str> {
    let needs_quotes = cell.contains(separator)
        || cell.contains(|c: char| matches!(c, '\n' | '\r' | '\t' | '"'))
        || (!terminator.is_empty() && cell.contains(terminator));

    if needs_quotes {
        Cow::Owned(format!("\"{}\"", cell.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(cell)
    }
}

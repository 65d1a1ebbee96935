//! Request parameters that select and shape the output

use crate::error::{DocShapeError, Result};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref CALLBACK_RE: Regex =
        Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*(\.[A-Za-z_$][A-Za-z0-9_$]*)*$").unwrap();
}

/// Parameters of one render request, usually taken from a query string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderParams {
    /// Requested format (`json`, `xml`, `csv`); anything else selects the default output
    pub output_format: Option<String>,
    /// Whether documents were included in the results
    pub include_docs: bool,
    /// Paths to keep, empty for all
    pub export_keys: Vec<String>,
    /// CSV header overrides
    pub csv_labels: Vec<String>,
    /// CSV delimiter, a single character or `tab`
    pub csv_delimiter: Option<String>,
    /// Function name to wrap the body in
    pub callback: Option<String>,
    /// Pretty-print JSON bodies
    pub debug: bool,
}

impl RenderParams {
    /// Build params from name/value pairs; later pairs win
    ///
    /// Accepts the short aliases `o` for `output_format` and `k` for
    /// `export_keys`. Unknown names are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut params = Self::default();
        for (name, value) in pairs {
            let value = value.as_ref();
            match name.as_ref() {
                "output_format" | "o" => params.output_format = non_empty(value),
                "include_docs" => params.include_docs = parse_bool(value),
                "export_keys" | "k" => params.export_keys = split_list(value),
                "csv_labels" => params.csv_labels = split_list(value),
                "csv_delimiter" => params.csv_delimiter = non_empty(value),
                "callback" => params.callback = non_empty(value),
                "debug" => params.debug = parse_bool(value),
                _ => {}
            }
        }
        params
    }

    /// Build params from a URL query string such as `o=csv&include_docs=true`
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self::from_pairs(url::form_urlencoded::parse(query.as_bytes()))
    }

    /// Reject parameters that must never reach a response body
    pub fn validate(&self) -> Result<()> {
        if let Some(callback) = &self.callback {
            if !CALLBACK_RE.is_match(callback) {
                return Err(DocShapeError::InvalidInput(format!(
                    "callback '{}' is not a valid function name",
                    callback
                )));
            }
        }
        Ok(())
    }
}

/// Split a comma-separated list, trimming items and dropping empty ones
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// `true` in any letter case is true, everything else is false
pub fn parse_bool(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

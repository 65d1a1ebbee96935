//! Output formatters
//!
//! Each format turns a document collection into a response body and a
//! content type. Projection with export keys happens before the JSON and XML
//! formatters run; the CSV formatter consumes the keys itself.

pub mod csv;
pub mod json;
pub mod xml;

use crate::config::RenderConfig;
use crate::error::{DocShapeError, Result};
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Formats available to the documents output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Xml,
    Csv,
}

impl OutputFormat {
    /// Parse a request value, `None` if it names no known format
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "json" => Some(Self::Json),
            "xml" => Some(Self::Xml),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
            Self::Csv => "csv",
        }
    }

    /// Content type of bodies in this format
    pub fn content_type<'a>(&self, options: &'a FormatOptions) -> &'a str {
        match self {
            Self::Json => json::CONTENT_TYPE,
            Self::Xml => xml::CONTENT_TYPE,
            Self::Csv => &options.csv_content_type,
        }
    }

    /// Format a document collection
    pub fn render(&self, docs: &[Value], options: &FormatOptions) -> Result<Rendered> {
        let body = match self {
            Self::Json => json::format_documents(docs, options.pretty)?,
            Self::Xml => xml::format_documents(docs)?,
            Self::Csv => csv::format_documents(docs, options)?,
        };

        Ok(Rendered {
            body,
            content_type: self.content_type(options).to_string(),
        })
    }
}

impl FromStr for OutputFormat {
    type Err = DocShapeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s).ok_or_else(|| {
            DocShapeError::InvalidInput(format!(
                "Invalid output format: {}. Expected: json, xml, or csv",
                s
            ))
        })
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Paths selecting CSV columns, empty for every leaf of the first document
    pub keys: Vec<String>,
    /// CSV header overrides, used only when one label exists per key
    pub labels: Vec<String>,
    /// Raw CSV delimiter request (`tab` or a single character)
    pub delimiter: Option<String>,
    /// Indent JSON bodies
    pub pretty: bool,
    /// Terminator written after every CSV row
    pub line_terminator: String,
    pub csv_content_type: String,
}

impl FormatOptions {
    /// Options with nothing selected, taking line terminator and content types from config
    pub fn from_config(config: &RenderConfig) -> Self {
        Self {
            keys: Vec::new(),
            labels: Vec::new(),
            delimiter: None,
            pretty: false,
            line_terminator: config.line_terminator.clone(),
            csv_content_type: config.csv_content_type.clone(),
        }
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self::from_config(&RenderConfig::default())
    }
}

/// A finished response body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub body: String,
    pub content_type: String,
}

/// Text of a scalar as it appears in CSV cells and XML element content
pub(crate) fn scalar_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s),
        Value::Null => Cow::Borrowed(""),
        other => Cow::Owned(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_format() {
        assert_eq!(OutputFormat::parse("csv"), Some(OutputFormat::Csv));
        assert_eq!(OutputFormat::parse("xml"), Some(OutputFormat::Xml));
        assert_eq!(OutputFormat::parse("json"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::parse("CSV"), None);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_content_types() {
        let options = FormatOptions::default();
        assert_eq!(OutputFormat::Json.content_type(&options), "application/json");
        assert_eq!(OutputFormat::Xml.content_type(&options), "application/xml");
        assert_eq!(OutputFormat::Csv.content_type(&options), "text/plain");

        let options = FormatOptions {
            csv_content_type: "text/csv".to_string(),
            ..FormatOptions::default()
        };
        assert_eq!(OutputFormat::Csv.content_type(&options), "text/csv");
    }

    #[test]
    fn test_scalar_text() {
        assert_eq!(scalar_text(&json!("a b")), "a b");
        assert_eq!(scalar_text(&json!(2.5)), "2.5");
        assert_eq!(scalar_text(&json!(true)), "true");
        assert_eq!(scalar_text(&Value::Null), "");
    }

    #[test]
    fn test_render_sets_content_type() {
        let docs = vec![json!({ "a": 1 })];
        let rendered = OutputFormat::Xml
            .render(&docs, &FormatOptions::default())
            .unwrap();
        assert_eq!(rendered.content_type, "application/xml");
        assert_eq!(rendered.body, "<docs><doc><a>1</a></doc></docs>");
    }
}

//! XML output formatter
//!
//! Documents become `<doc>` elements inside a single `<docs>` root. Object
//! keys become child elements, array items repeat the element of the key that
//! holds them, and scalars become element text.

use super::scalar_text;
use crate::error::{DocShapeError, Result};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde_json::Value;

pub const CONTENT_TYPE: &str = "application/xml";

const ROOT_ELEMENT: &str = "docs";
const DOC_ELEMENT: &str = "doc";

pub fn format_documents(docs: &[Value]) -> Result<String> {
    let mut writer = Writer::new(Vec::new());

    write(&mut writer, Event::Start(BytesStart::new(ROOT_ELEMENT)))?;
    for doc in docs {
        write_value(&mut writer, DOC_ELEMENT, doc)?;
    }
    write(&mut writer, Event::End(BytesEnd::new(ROOT_ELEMENT)))?;

    String::from_utf8(writer.into_inner())
        .map_err(|e| DocShapeError::Format(format!("XML output is not UTF-8: {}", e)))
}

fn write_value(writer: &mut Writer<Vec<u8>>, name: &str, value: &Value) -> Result<()> {
    match value {
        Value::Array(items) => {
            for item in items {
                write_value(writer, name, item)?;
            }
        }
        Value::Object(map) => {
            write(writer, Event::Start(BytesStart::new(name)))?;
            for (key, child) in map {
                if !is_element_name(key) {
                    return Err(DocShapeError::Format(format!(
                        "key '{}' is not a valid XML element name",
                        key
                    )));
                }
                write_value(writer, key, child)?;
            }
            write(writer, Event::End(BytesEnd::new(name)))?;
        }
        Value::Null => write(writer, Event::Empty(BytesStart::new(name)))?,
        scalar => {
            write(writer, Event::Start(BytesStart::new(name)))?;
            write(writer, Event::Text(BytesText::new(&scalar_text(scalar))))?;
            write(writer, Event::End(BytesEnd::new(name)))?;
        }
    }
    Ok(())
}

fn write(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| DocShapeError::Format(format!("Failed to write XML: {}", e)))
}

/// Whether `name` can be used as an element name without escaping
///
/// Colons are rejected so keys never read as namespace prefixes, and names
/// starting with `xml` in any case are reserved.
pub fn is_element_name(name: &str) -> bool {
    if name
        .get(..3)
        .map_or(false, |prefix| prefix.eq_ignore_ascii_case("xml"))
    {
        return false;
    }
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

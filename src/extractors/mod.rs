//! Reading positioned text items handed over by an extractor.
//!
//! Pages arrive as JSON: an array with one entry per page, where a page is
//! either an array of items or an object with an `items` array. Each item is
//! either a native record `{x, xEnd, y, fontSize, text, endsLine}` or a
//! pdf.js text content entry `{str, transform, width, hasEOL}`.

pub mod pdfjs;

pub use pdfjs::PdfJsTextItem;

use crate::error::{Error, Result};
use crate::layout::TextItem;
use serde_json::Value;

/// Parse every page of a JSON document.
///
/// # Examples
///
/// ```
/// use pdf_structure::extractors::parse_pages;
///
/// let json = r#"[
///     [{"x": 0, "xEnd": 30, "y": 700, "fontSize": 12, "text": "Hello", "endsLine": false}],
///     {"items": [{"str": "Page two", "transform": [12, 0, 0, 12, 72, 700], "width": 48, "hasEOL": false}]}
/// ]"#;
/// let pages = parse_pages(json)?;
/// assert_eq!(pages.len(), 2);
/// assert_eq!(pages[1][0].x, 72.0);
/// # Ok::<(), pdf_structure::Error>(())
/// ```
pub fn parse_pages(json: &str) -> Result<Vec<Vec<TextItem>>> {
    let value: Value = serde_json::from_str(json)?;
    pages_from_value(value)
}

/// Read pages from an already parsed JSON value.
pub fn pages_from_value(value: Value) -> Result<Vec<Vec<TextItem>>> {
    match value {
        Value::Array(pages) => pages
            .into_iter()
            .enumerate()
            .map(|(page, value)| page_items(page, value))
            .collect(),
        other => Err(Error::InvalidStructure(format!(
            "expected an array of pages, found {}",
            kind_of(&other)
        ))),
    }
}

/// Read one page: an item array or `{"items": [...]}`.
pub fn page_items(page: usize, value: Value) -> Result<Vec<TextItem>> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut object) => match object.remove("items") {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(Error::InvalidStructure(format!(
                    "page {} has no `items` array",
                    page
                )))
            },
        },
        other => {
            return Err(Error::InvalidStructure(format!(
                "page {} must be an array or object, found {}",
                page,
                kind_of(&other)
            )))
        },
    };

    let mut parsed = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        if let Some(item) = parse_item(page, index, item)? {
            parsed.push(item);
        }
    }
    Ok(parsed)
}

/// Parse one item in either shape. Marked-content entries yield `None`.
fn parse_item(page: usize, index: usize, value: Value) -> Result<Option<TextItem>> {
    let is_pdfjs = value
        .as_object()
        .is_some_and(|object| ["str", "transform", "type"].iter().any(|key| object.contains_key(*key)));

    if is_pdfjs {
        let raw: PdfJsTextItem = serde_json::from_value(value)
            .map_err(|e| Error::invalid_input(page, index, e.to_string()))?;
        raw.into_text_item(page, index)
    } else {
        serde_json::from_value::<TextItem>(value)
            .map(Some)
            .map_err(|e| Error::invalid_input(page, index, e.to_string()))
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

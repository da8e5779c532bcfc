//! Text items and the lines they are clustered into.
//!
//! Coordinates are in PDF user space: `y` grows upward, so the top of the
//! page has the largest `y`.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// One positioned text run as emitted by a content-stream reader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextItem {
    /// Left edge
    pub x: f64,
    /// Right edge (x + width)
    pub x_end: f64,
    /// Baseline
    pub y: f64,
    /// Font size in points
    pub font_size: f64,
    /// Text content
    pub text: String,
    /// The source wrapped to a new line after this run
    #[serde(default)]
    pub ends_line: bool,
}

impl TextItem {
    /// Create an item spanning `x..x_end` on baseline `y`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_structure::layout::TextItem;
    ///
    /// let item = TextItem::new("Hello", 10.0, 40.0, 700.0, 12.0);
    /// assert_eq!(item.width(), 30.0);
    /// assert!(!item.ends_line);
    /// ```
    pub fn new(text: impl Into<String>, x: f64, x_end: f64, y: f64, font_size: f64) -> Self {
        Self {
            x,
            x_end,
            y,
            font_size,
            text: text.into(),
            ends_line: false,
        }
    }

    /// Set the line-wrap flag.
    pub fn with_ends_line(mut self, ends_line: bool) -> Self {
        self.ends_line = ends_line;
        self
    }

    /// Horizontal extent.
    pub fn width(&self) -> f64 {
        self.x_end - self.x
    }

    /// Check the item against the input contract.
    ///
    /// `page` and `index` only feed the error message.
    pub fn validate(&self, page: usize, index: usize) -> Result<()> {
        for (name, value) in [
            ("x", self.x),
            ("xEnd", self.x_end),
            ("y", self.y),
            ("fontSize", self.font_size),
        ] {
            if !value.is_finite() {
                return Err(Error::invalid_input(
                    page,
                    index,
                    format!("{} is not a finite number ({})", name, value),
                ));
            }
        }
        if self.x_end < self.x {
            return Err(Error::invalid_input(
                page,
                index,
                format!("xEnd {} lies left of x {}", self.x_end, self.x),
            ));
        }
        Ok(())
    }
}

/// A horizontal cluster of items believed to share a baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Representative baseline
    pub y: f64,
    /// Items on the line; left-to-right once runs are merged
    pub items: Vec<TextItem>,
}

impl Line {
    /// Create an empty line at baseline `y`.
    pub fn new(y: f64) -> Self {
        Self { y, items: Vec::new() }
    }

    /// Create a line holding `items`.
    pub fn with_items(y: f64, items: Vec<TextItem>) -> Self {
        Self { y, items }
    }

    /// Number of items (columns, once runs are merged).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the line holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// More than one surviving item makes a line a table row candidate.
    pub fn is_row_like(&self) -> bool {
        self.items.len() > 1
    }

    /// The item of a single-run line.
    pub fn single_item(&self) -> Option<&TextItem> {
        match self.items.as_slice() {
            [item] => Some(item),
            _ => None,
        }
    }

    /// Non-empty item texts in order.
    pub fn texts(&self) -> Vec<String> {
        self.items
            .iter()
            .filter(|item| !item.text.is_empty())
            .map(|item| item.text.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_well_formed_item() {
        let item = TextItem::new("ok", 0.0, 10.0, 100.0, 12.0);
        assert!(item.validate(0, 0).is_ok());
    }

    #[test]
    fn test_validate_rejects_non_finite_coordinates() {
        let item = TextItem::new("bad", f64::NAN, 10.0, 100.0, 12.0);
        let err = item.validate(1, 3).unwrap_err();
        assert!(matches!(err, Error::InvalidInput { page: 1, index: 3, .. }));

        let item = TextItem::new("bad", 0.0, 10.0, f64::INFINITY, 12.0);
        assert!(item.validate(0, 0).is_err());
    }

    #[test]
    fn test_validate_rejects_inverted_extent() {
        let item = TextItem::new("bad", 20.0, 10.0, 100.0, 12.0);
        assert!(item.validate(0, 0).is_err());
    }

    #[test]
    fn test_row_like_and_single_item() {
        let mut line = Line::new(50.0);
        assert!(line.is_empty());
        assert!(line.single_item().is_none());

        line.items.push(TextItem::new("a", 0.0, 5.0, 50.0, 12.0));
        assert!(!line.is_row_like());
        assert_eq!(line.single_item().map(|i| i.text.as_str()), Some("a"));

        line.items.push(TextItem::new("b", 10.0, 15.0, 50.0, 12.0));
        assert!(line.is_row_like());
        assert!(line.single_item().is_none());
    }

    #[test]
    fn test_texts_skips_empty_items() {
        let line = Line::with_items(
            10.0,
            vec![
                TextItem::new("a", 0.0, 5.0, 10.0, 12.0),
                TextItem::new("", 6.0, 6.0, 10.0, 12.0),
                TextItem::new("b", 10.0, 15.0, 10.0, 12.0),
            ],
        );
        assert_eq!(line.texts(), vec!["a", "b"]);
    }

    #[test]
    fn test_item_json_uses_camel_case() {
        let item = TextItem::new("Hi", 1.0, 2.0, 3.0, 12.0).with_ends_line(true);
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"xEnd\":2.0"));
        assert!(json.contains("\"fontSize\":12.0"));
        assert!(json.contains("\"endsLine\":true"));
    }
}

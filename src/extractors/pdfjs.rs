//! Adapter for pdf.js `getTextContent()` items.
//!
//! pdf.js reports each text run with a 6-element transform matrix
//! `[a, b, c, d, e, f]`: `a` carries the font size for unrotated text and
//! `(e, f)` is the run's origin. Marked-content entries carry a `type` field
//! and no text.

use crate::error::{Error, Result};
use crate::layout::TextItem;
use serde::Deserialize;

/// A raw pdf.js text content entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PdfJsTextItem {
    /// Text of the run
    #[serde(rename = "str", default)]
    pub text: Option<String>,
    /// Text rendering matrix
    #[serde(default)]
    pub transform: Option<Vec<f64>>,
    /// Advance width in user space
    #[serde(default)]
    pub width: Option<f64>,
    /// pdf.js saw an end-of-line after this run
    #[serde(rename = "hasEOL", default)]
    pub has_eol: bool,
    /// Set on marked-content entries (`beginMarkedContent`, ...)
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

impl PdfJsTextItem {
    /// Marked-content entries carry no text.
    pub fn is_marked_content(&self) -> bool {
        self.kind.is_some()
    }

    /// Convert into a [`TextItem`].
    ///
    /// Returns `Ok(None)` for marked-content entries. `page` and `index` only
    /// feed error messages.
    pub fn into_text_item(self, page: usize, index: usize) -> Result<Option<TextItem>> {
        if self.is_marked_content() {
            return Ok(None);
        }

        let text = self
            .text
            .ok_or_else(|| Error::invalid_input(page, index, "missing field `str`"))?;
        let transform = self
            .transform
            .ok_or_else(|| Error::invalid_input(page, index, "missing field `transform`"))?;
        let &[font_size, _, _, _, x, y] = transform.as_slice() else {
            return Err(Error::invalid_input(
                page,
                index,
                format!("transform must have 6 elements, found {}", transform.len()),
            ));
        };
        let width = self
            .width
            .ok_or_else(|| Error::invalid_input(page, index, "missing field `width`"))?;

        Ok(Some(TextItem {
            x,
            x_end: x + width,
            y,
            font_size,
            text,
            ends_line: self.has_eol,
        }))
    }
}

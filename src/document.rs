//! The reconstructed document.
//!
//! A [`Document`] is an ordered sequence of [`Element`]s, each either a text
//! line or a detected table. Its JSON form is
//! `{"text": [["line"], {"headers": [...], "rows": [[["cell"]]]}]}`: lines
//! serialize as string arrays and tables as objects, so the two variants stay
//! distinguishable on the wire.

use crate::error::Result;
use crate::layout::text_block::Line;
use serde::{Deserialize, Serialize};

/// A rectangular region reified from consecutive multi-column lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// One header per column, from the first row of the region
    pub headers: Vec<String>,
    /// Rows of cells; each cell holds one or more text fragments
    pub rows: Vec<Vec<Vec<String>>>,
}

impl Table {
    /// Build a table from a run of lines: the first supplies the headers,
    /// every following line one row of single-fragment cells.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_structure::document::Table;
    /// use pdf_structure::layout::{Line, TextItem};
    ///
    /// let lines = vec![
    ///     Line::with_items(100.0, vec![
    ///         TextItem::new("Name", 0.0, 30.0, 100.0, 12.0),
    ///         TextItem::new("Age", 50.0, 70.0, 100.0, 12.0),
    ///     ]),
    ///     Line::with_items(80.0, vec![
    ///         TextItem::new("Alice", 0.0, 30.0, 80.0, 12.0),
    ///         TextItem::new("30", 50.0, 60.0, 80.0, 12.0),
    ///     ]),
    /// ];
    /// let table = Table::from_lines(lines);
    /// assert_eq!(table.headers, vec!["Name", "Age"]);
    /// assert_eq!(table.rows, vec![vec![vec!["Alice".to_string()], vec!["30".to_string()]]]);
    /// ```
    pub fn from_lines(lines: Vec<Line>) -> Self {
        let mut lines = lines.into_iter();
        let headers = lines
            .next()
            .map(|line| line.items.into_iter().map(|item| item.text).collect())
            .unwrap_or_default();
        let rows = lines
            .map(|line| line.items.into_iter().map(|item| vec![item.text]).collect())
            .collect();
        Self { headers, rows }
    }

    /// Number of columns.
    pub fn num_columns(&self) -> usize {
        self.headers.len()
    }

    /// Number of body rows (headers excluded).
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Every text fragment, headers first, rows in order.
    pub fn fragments(&self) -> impl Iterator<Item = &str> {
        self.headers
            .iter()
            .chain(self.rows.iter().flatten().flatten())
            .map(String::as_str)
    }
}

/// One element of the document sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Element {
    /// A text line: one string per surviving run
    Line(Vec<String>),
    /// A detected table
    Table(Table),
}

impl Element {
    /// The line's strings, if this is a line.
    pub fn as_line(&self) -> Option<&[String]> {
        match self {
            Element::Line(texts) => Some(texts.as_slice()),
            Element::Table(_) => None,
        }
    }

    /// The table, if this is a table.
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Element::Table(table) => Some(table),
            Element::Line(_) => None,
        }
    }

    /// True for tables.
    pub fn is_table(&self) -> bool {
        matches!(self, Element::Table(_))
    }

    /// Every text fragment in the element.
    pub fn fragments(&self) -> Vec<&str> {
        match self {
            Element::Line(texts) => texts.iter().map(String::as_str).collect(),
            Element::Table(table) => table.fragments().collect(),
        }
    }
}

impl From<Line> for Element {
    fn from(line: Line) -> Self {
        Element::Line(line.texts())
    }
}

impl From<Table> for Element {
    fn from(table: Table) -> Self {
        Element::Table(table)
    }
}

/// The reconstructed document, pages concatenated in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Lines and tables in reading order
    #[serde(rename = "text")]
    pub elements: Vec<Element>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an element sequence.
    pub fn from_elements(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True when the document has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterate over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.elements.iter()
    }

    /// Iterate over the detected tables.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.elements.iter().filter_map(Element::as_table)
    }

    /// Every text fragment in document order.
    pub fn fragments(&self) -> Vec<&str> {
        self.elements.iter().flat_map(Element::fragments).collect()
    }

    /// Serialize to compact JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a document from its JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

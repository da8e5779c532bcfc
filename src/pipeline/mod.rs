//! Document reconstruction pipeline.
//!
//! ```text
//! per page: TextItem[]
//!     ↓
//! [Line clustering] (baseline proximity, τ = ½ base font size)
//!     ↓
//! [Run merging] (left-to-right fragments → runs)
//!     ↓
//! [Paragraph joining] (wrapped lines → one logical line)
//!     ↓
//! pages concatenated in order: Line[]
//!     ↓
//! [Table segmentation] (optional)
//!     ↓
//! Document (Line | Table)[]
//! ```
//!
//! Pages share no state, so each page's stages only see that page's items.
//! Table segmentation runs after assembly so a table may continue across a
//! page break.

pub mod metrics;

pub use metrics::ReconstructionStats;

use crate::config::ReconstructionConfig;
use crate::document::{Document, Element};
use crate::error::Result;
use crate::layout::policy::{create_policy, LineSegmentationPolicy};
use crate::layout::{cluster_into_lines, join_paragraphs, merge_runs, segment_tables, Line, TextItem};

/// A reconstructed document and the counters gathered while building it.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconstruction {
    /// The document
    pub document: Document,
    /// Pass counters
    pub stats: ReconstructionStats,
}

/// Runs the per-page stages and assembles the document.
pub struct DocumentAssembler {
    config: ReconstructionConfig,
    policy: Box<dyn LineSegmentationPolicy>,
}

impl DocumentAssembler {
    /// Create an assembler with default configuration.
    pub fn new() -> Self {
        let config = ReconstructionConfig::default();
        let policy = create_policy(&config);
        Self { config, policy }
    }

    /// Create an assembler with custom configuration.
    pub fn with_config(config: ReconstructionConfig) -> Result<Self> {
        let policy = create_policy(&config);
        Self::with_policy(config, policy)
    }

    /// Create an assembler with a caller-supplied policy.
    ///
    /// `config.policy` is ignored in favour of `policy`.
    pub fn with_policy(
        config: ReconstructionConfig,
        policy: Box<dyn LineSegmentationPolicy>,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, policy })
    }

    /// Get the current configuration.
    pub fn config(&self) -> &ReconstructionConfig {
        &self.config
    }

    /// Name of the active policy.
    pub fn policy_name(&self) -> &'static str {
        self.policy.name()
    }

    /// Cluster, merge and join one page.
    ///
    /// `page` is the zero-based page index used in error messages.
    pub fn process_page(&self, page: usize, items: Vec<TextItem>) -> Result<Vec<Line>> {
        let mut stats = ReconstructionStats::default();
        self.run_page(page, items, &mut stats)
    }

    /// Reconstruct a document from its pages, in page order.
    pub fn assemble(&self, pages: Vec<Vec<TextItem>>) -> Result<Reconstruction> {
        let mut stats = ReconstructionStats::default();
        let mut lines = Vec::new();

        for (page, items) in pages.into_iter().enumerate() {
            let mut page_stats = ReconstructionStats::default();
            lines.extend(self.run_page(page, items, &mut page_stats)?);
            stats.add_page(&page_stats);
        }

        let elements: Vec<Element> = if self.config.detect_tables {
            let segmentation =
                segment_tables(lines, self.policy.as_ref(), self.config.max_table_iterations);
            stats.tables = segmentation.tables;
            stats.segmentation_iterations = segmentation.iterations;
            stats.hit_iteration_cap = segmentation.hit_iteration_cap;
            segmentation.elements
        } else {
            lines.into_iter().map(Element::from).collect()
        };

        log::info!(
            "Reconstructed {} pages into {} elements ({} tables)",
            stats.pages,
            elements.len(),
            stats.tables
        );

        Ok(Reconstruction {
            document: Document::from_elements(elements),
            stats,
        })
    }

    fn run_page(
        &self,
        page: usize,
        items: Vec<TextItem>,
        stats: &mut ReconstructionStats,
    ) -> Result<Vec<Line>> {
        stats.pages += 1;
        stats.items += items.len();

        let mut kept = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            item.validate(page, index)?;
            if item.text.is_empty() {
                stats.skipped_items += 1;
            } else {
                kept.push(item);
            }
        }
        if stats.skipped_items > 0 {
            log::debug!("Page {}: skipped {} empty items", page, stats.skipped_items);
        }

        let mut lines = cluster_into_lines(kept, self.config.line_tolerance());
        stats.clustered_lines += lines.len();

        for line in &mut lines {
            stats.run_folds += merge_runs(line, self.policy.as_ref());
        }

        let joined = join_paragraphs(lines, self.policy.as_ref());
        stats.paragraph_joins += joined.joins;

        log::debug!(
            "Page {}: {} items -> {} lines -> {} after joining",
            page,
            stats.items,
            stats.clustered_lines,
            joined.lines.len()
        );
        Ok(joined.lines)
    }
}

impl Default for DocumentAssembler {
    fn default() -> Self {
        Self::new()
    }
}

/// Reconstruct a document with the given configuration.
///
/// # Examples
///
/// ```
/// use pdf_structure::{reconstruct, ReconstructionConfig, TextItem};
///
/// let page = vec![
///     TextItem::new("Hello", 0.0, 30.0, 50.0, 12.0).with_ends_line(true),
///     TextItem::new("world.", 0.0, 36.0, 38.0, 12.0),
/// ];
/// let document = reconstruct(vec![page], ReconstructionConfig::default())?;
/// assert_eq!(document.elements[0].as_line(), Some(&["Hello world.".to_string()][..]));
/// # Ok::<(), pdf_structure::Error>(())
/// ```
pub fn reconstruct(pages: Vec<Vec<TextItem>>, config: ReconstructionConfig) -> Result<Document> {
    let assembler = DocumentAssembler::with_config(config)?;
    Ok(assembler.assemble(pages)?.document)
}
